use crate::{
    data::StudentStatus,
    error::{CorkboardResult, ParseEmailSnafu, ParseGradDateSnafu},
};
use email_address::EmailAddress;
use jiff::{Timestamp, civil::Date, tz::TimeZone};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;

/// One row of the list query. Name parts are optional because imported
/// records sometimes arrive without them; everything else is required.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentSummary {
    pub id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub class_code: String,
    pub grad_date: String,
    pub status: StudentStatus,
}

impl StudentSummary {
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => Some(format!("{first} {last}")),
            _ => None,
        }
    }

    /// Uppercased first letters of both name parts, for the avatar fallback.
    #[must_use]
    pub fn initials(&self) -> Option<String> {
        let mut initials = String::new();
        for part in [self.first_name.as_deref(), self.last_name.as_deref()] {
            let first_char = part?.chars().next()?;
            initials.extend(first_char.to_uppercase());
        }
        Some(initials)
    }
}

/// The full record behind the detail view, validated at the fetch boundary
/// (the email must parse as an address or deserialization fails).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: EmailAddress,
    pub class_code: String,
    pub grad_date: String,
    pub time_zone: String,
    pub slack: Option<String>,
}

impl StudentRecord {
    /// Shallow-merges a mutation echo into this record: present fields
    /// overwrite, absent fields keep their prior values. The id is never
    /// overwritten - the identifier is immutable once a record is loaded.
    pub fn apply_update(&mut self, update: &StudentUpdate) {
        if let Some(first_name) = &update.first_name {
            self.first_name = first_name.clone();
        }
        if let Some(last_name) = &update.last_name {
            self.last_name = last_name.clone();
        }
        if let Some(email) = &update.email {
            self.email = email.clone();
        }
        if let Some(class_code) = &update.class_code {
            self.class_code = class_code.clone();
        }
        if let Some(grad_date) = &update.grad_date {
            self.grad_date = grad_date.clone();
        }
        if let Some(time_zone) = &update.time_zone {
            self.time_zone = time_zone.clone();
        }
        if let Some(slack) = &update.slack {
            self.slack = Some(slack.clone());
        }
    }

    pub fn grad_display(&self, today: Date) -> CorkboardResult<GradDisplay> {
        GradDisplay::derive(&self.grad_date, today)
    }
}

/// Partial field set sent as the `updateStudent` input.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StudentPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grad_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
}

impl StudentPatch {
    /// Validates a raw form value before it goes on the wire; the server
    /// would reject a malformed address anyway, this just fails earlier.
    pub fn set_email(&mut self, raw: &str) -> CorkboardResult<()> {
        let parsed: EmailAddress = raw.parse().context(ParseEmailSnafu { original: raw })?;
        self.email = Some(parsed.to_string());
        Ok(())
    }
}

/// What `updateStudent` echoes back. Every field is optional, including the
/// id - an echo without one means the update was not applied server-side.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentUpdate {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<EmailAddress>,
    pub class_code: Option<String>,
    pub grad_date: Option<String>,
    pub time_zone: Option<String>,
    pub slack: Option<String>,
}

/// Input for the `addStudent` create path.
#[derive(Debug, Clone, Serialize)]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub class_code: String,
    pub grad_date: String,
    pub time_zone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slack: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentCreated {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

/// Display-ready graduation date, recomputed from the raw value on every
/// render and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GradDisplay {
    pub formatted: String,
    pub graduated: bool,
}

impl GradDisplay {
    /// Pure function of the raw date and the supplied reference date.
    /// `graduated` is strict: a date equal to `today` has not graduated yet.
    pub fn derive(raw: &str, today: Date) -> CorkboardResult<Self> {
        let grad_date = parse_grad_date(raw)?;
        Ok(Self {
            formatted: format_long_date(grad_date),
            graduated: grad_date < today,
        })
    }
}

/// The server stores graduation dates either as ISO `YYYY-MM-DD` or as a
/// unix-epoch-milliseconds string, depending on how the record was created.
pub fn parse_grad_date(raw: &str) -> CorkboardResult<Date> {
    if let Ok(millis) = raw.parse::<i64>() {
        let timestamp = Timestamp::from_millisecond(millis)
            .context(ParseGradDateSnafu { original: raw })?;
        return Ok(timestamp.to_zoned(TimeZone::UTC).date());
    }
    raw.parse().context(ParseGradDateSnafu { original: raw })
}

/// "January 1st 2020" style, matching the long form the admin UI shows.
#[must_use]
pub fn format_long_date(date: Date) -> String {
    format!(
        "{} {}{} {}",
        date.strftime("%B"),
        date.day(),
        ordinal_suffix(date.day()),
        date.year()
    )
}

const fn ordinal_suffix(day: i8) -> &'static str {
    match day {
        11..=13 => "th",
        day => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
