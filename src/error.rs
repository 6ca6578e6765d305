use snafu::Snafu;

pub type CorkboardResult<T> = Result<T, CorkboardError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CorkboardError {
    #[snafu(display("Error sending GraphQL request"))]
    SendRequest { source: reqwest::Error },
    #[snafu(display("Error reading GraphQL response body"))]
    ReadResponse { source: reqwest::Error },
    #[snafu(display("Error decoding GraphQL response"))]
    DecodeResponse { source: serde_json::Error },
    #[snafu(display("GraphQL server reported errors: {}", messages.join("; ")))]
    GraphQl { messages: Vec<String> },
    #[snafu(display("GraphQL response had no data for {}", operation))]
    EmptyResponse { operation: &'static str },
    #[snafu(display("Unable to find student with id: {}", id))]
    MissingStudent { id: i32 },
    #[snafu(display("Unable to parse graduation date {:?}", original))]
    ParseGradDate {
        source: jiff::Error,
        original: String,
    },
    #[snafu(display("Unable to parse email address {:?}", original))]
    ParseEmail {
        source: email_address::Error,
        original: String,
    },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Error writing to the clipboard: {}", detail))]
    ClipboardWrite { detail: String },
    #[snafu(display("Error opening external link {:?}", url))]
    OpenLink { url: String, detail: String },
    #[snafu(display("Workflow chain {:?} halted at step {:?}", chain, step))]
    ChainHalted {
        chain: &'static str,
        step: &'static str,
        #[snafu(source(from(CorkboardError, Box::new)))]
        source: Box<CorkboardError>,
    },
}
