use crate::{
    config::WorkflowLinks,
    data::student::StudentRecord,
    error::{ChainHaltedSnafu, CorkboardResult},
    notify::{Notice, Notifier},
};
use async_trait::async_trait;
use jiff::civil::Date;
use snafu::ResultExt;

/// Write-only system clipboard capability. Writes are awaited one at a time;
/// there is no timeout, so a hung write stalls whatever chain it is part of.
#[async_trait]
pub trait Clipboard: Send {
    async fn write_text(&mut self, text: &str) -> CorkboardResult<()>;
}

/// Opens a URL in a new browsing context. Fire-and-forget; no return value
/// beyond the failure case.
pub trait LinkOpener: Send {
    fn open(&mut self, url: &str) -> CorkboardResult<()>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepAction {
    Copy(String),
    Notify(Notice),
    OpenLink(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub label: &'static str,
    pub action: StepAction,
}

/// A named, strictly ordered list of fallible side-effect steps. Chains are
/// pure side channels: running one never touches student state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chain {
    name: &'static str,
    steps: Vec<Step>,
}

impl Chain {
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            steps: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    #[must_use]
    pub fn copy(mut self, label: &'static str, text: impl Into<String>) -> Self {
        self.steps.push(Step {
            label,
            action: StepAction::Copy(text.into()),
        });
        self
    }

    #[must_use]
    pub fn notify(mut self, label: &'static str, notice: Notice) -> Self {
        self.steps.push(Step {
            label,
            action: StepAction::Notify(notice),
        });
        self
    }

    #[must_use]
    pub fn open_link(mut self, label: &'static str, url: impl Into<String>) -> Self {
        self.steps.push(Step {
            label,
            action: StepAction::OpenLink(url.into()),
        });
        self
    }

    /// Runs the steps in order, each waiting on the one before it. Stops at
    /// the first failure: later steps do not run, no completion toast is
    /// shown, and the error names the chain and the step that halted it.
    /// Steps are not atomic - whatever was already copied stays copied.
    pub async fn run(
        &self,
        clipboard: &mut dyn Clipboard,
        opener: &mut dyn LinkOpener,
        notifier: &Notifier,
    ) -> CorkboardResult<()> {
        for step in &self.steps {
            let outcome = match &step.action {
                StepAction::Copy(text) => clipboard.write_text(text).await,
                StepAction::Notify(notice) => {
                    notifier.send(notice.clone());
                    Ok(())
                }
                StepAction::OpenLink(url) => opener.open(url),
            };
            outcome.context(ChainHaltedSnafu {
                chain: self.name,
                step: step.label,
            })?;
        }
        Ok(())
    }
}

/// Copies the fields the evaluation form asks for, one by one, then opens it.
#[must_use]
pub fn form_notes_chain(record: &StudentRecord, links: &WorkflowLinks) -> Chain {
    let email = record.email.to_string();
    let reversed_name = format!("{}, {}", record.last_name, record.first_name);
    Chain::new("form notes")
        .copy("copy email", &email)
        .notify("email copied", Notice::success(format!("{email} copied!")))
        .copy("copy name", &reversed_name)
        .notify(
            "name copied",
            Notice::success(format!("{reversed_name} copied!")),
        )
        .copy("copy class code", &record.class_code)
        .notify(
            "class code copied",
            Notice::success(format!("{} copied!", record.class_code)),
        )
        .notify("opening form", Notice::loading("Opening Form"))
        .open_link("open evaluation form", links.evaluation_form_url())
}

/// One paste-ready slack message pointing the student at the feedback form.
#[must_use]
pub fn slack_message_chain(record: &StudentRecord, links: &WorkflowLinks) -> Chain {
    let message = format!(
        "Please fill out the evaluation form at the link below:\n{}\n\nYour class code is: {}",
        links.feedback_form_url(),
        record.class_code
    );
    Chain::new("slack message")
        .copy("copy slack message", message)
        .notify(
            "slack message copied",
            Notice::success("Slack message copied!"),
        )
}

#[must_use]
pub fn clock_out_chain(record: &StudentRecord) -> Chain {
    let notes = format!(
        "{}\n{} {}\nB2B-No",
        record.class_code, record.first_name, record.last_name
    );
    Chain::new("clock-out notes")
        .copy("copy clock-out notes", notes)
        .notify(
            "clock-out notes copied",
            Notice::success("Clock-out notes copied!"),
        )
}

/// Spreadsheet row for the session tracker, split on paste.
// TODO: append the session row through the sheets API instead of a clipboard
// formula.
pub fn record_session_chain(record: &StudentRecord, today: Date) -> CorkboardResult<Chain> {
    let grad = record.grad_display(today)?;
    let row = format!(
        "=SPLIT(\"{},{},{} {},{},today's date,+blank hr\", \",\")",
        record.class_code, grad.formatted, record.first_name, record.last_name, record.email
    );
    Ok(Chain::new("record session").copy("copy session row", row))
}
