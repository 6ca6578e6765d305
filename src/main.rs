use corkboard::{
    api::GraphQlClient, config::RuntimeConfiguration, notify::Notifier,
    view::detail::StudentDetailController,
};
use jiff::Zoned;
use std::{env, sync::Arc};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().expect("unable to load env vars");

    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    info!("`tracing` online");

    let config = RuntimeConfiguration::new().expect("unable to create config");
    let api = Arc::new(GraphQlClient::new(config.api_config()));
    let notifier = Notifier::new();
    let mut controller = StudentDetailController::new(api, notifier);

    let id: i32 = env::var("CORKBOARD_STUDENT_ID")
        .expect("CORKBOARD_STUDENT_ID not set")
        .parse()
        .expect("CORKBOARD_STUDENT_ID must be an integer");

    if let Err(e) = controller.load(id).await {
        error!(?e, id, "unable to load student");
        return;
    }

    let Some(record) = controller.record() else {
        return;
    };
    info!(
        id = record.id,
        first_name = %record.first_name,
        last_name = %record.last_name,
        email = %record.email,
        class_code = %record.class_code,
        "loaded student"
    );
    match controller.grad_display(Zoned::now().date()) {
        Some(Ok(grad)) => info!(formatted = %grad.formatted, graduated = grad.graduated),
        Some(Err(e)) => error!(?e, "unable to derive graduation display"),
        None => {}
    }
}
