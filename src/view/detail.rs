use crate::{
    api::StudentApi,
    data::student::{GradDisplay, StudentPatch, StudentRecord},
    error::CorkboardResult,
    notify::Notifier,
};
use jiff::civil::Date;
use std::sync::Arc;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DetailMode {
    Loading,
    View,
    Edit,
}

/// Inline banner shown on the edit form after a failed submit. Cleared when
/// the modal closes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMessage {
    pub text: String,
    pub error: bool,
}

/// Handle for one in-flight fetch. Resolutions whose generation no longer
/// matches the controller are discarded, so a fetch superseded by re-entry
/// with a different id can never clobber the newer student's data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    id: i32,
    generation: u64,
}

impl FetchTicket {
    #[must_use]
    pub const fn id(&self) -> i32 {
        self.id
    }
}

/// Manages the fetch/edit lifecycle for one student's full record.
pub struct StudentDetailController {
    api: Arc<dyn StudentApi>,
    notifier: Notifier,
    mode: DetailMode,
    generation: u64,
    record: Option<StudentRecord>,
    update_message: Option<UpdateMessage>,
}

impl StudentDetailController {
    #[must_use]
    pub fn new(api: Arc<dyn StudentApi>, notifier: Notifier) -> Self {
        Self {
            api,
            notifier,
            mode: DetailMode::Loading,
            generation: 0,
            record: None,
            update_message: None,
        }
    }

    #[must_use]
    pub const fn mode(&self) -> DetailMode {
        self.mode
    }

    /// None until a fetch resolves; callers must not read fields before then.
    #[must_use]
    pub const fn record(&self) -> Option<&StudentRecord> {
        self.record.as_ref()
    }

    #[must_use]
    pub const fn update_message(&self) -> Option<&UpdateMessage> {
        self.update_message.as_ref()
    }

    /// Derived display fields, recomputed from the raw record every time.
    pub fn grad_display(&self, today: Date) -> Option<CorkboardResult<GradDisplay>> {
        self.record.as_ref().map(|r| r.grad_display(today))
    }

    /// Starts a fetch for `id`, entering `Loading` and invalidating any
    /// still-outstanding ticket.
    pub fn begin_fetch(&mut self, id: i32) -> FetchTicket {
        self.generation += 1;
        self.mode = DetailMode::Loading;
        self.record = None;
        self.update_message = None;
        FetchTicket {
            id,
            generation: self.generation,
        }
    }

    /// Applies a fetch result. Stale tickets are dropped on the floor; a
    /// failed current fetch leaves the controller in `Loading` and hands the
    /// error back to the caller (no retry policy here - callers may `load`
    /// again).
    pub fn resolve_fetch(
        &mut self,
        ticket: FetchTicket,
        result: CorkboardResult<StudentRecord>,
    ) -> CorkboardResult<()> {
        if ticket.generation != self.generation {
            debug!(
                stale_id = ticket.id,
                "discarding fetch response for a superseded student"
            );
            return Ok(());
        }
        let record = result?;
        self.record = Some(record);
        self.mode = DetailMode::View;
        Ok(())
    }

    /// Fetch-and-resolve against the injected API in one call.
    pub async fn load(&mut self, id: i32) -> CorkboardResult<()> {
        let ticket = self.begin_fetch(id);
        let api = self.api.clone();
        let result = api.fetch_student(ticket.id()).await;
        self.resolve_fetch(ticket, result)
    }

    /// Explicit user toggle between the read-only and edit presentations.
    /// Ignored while a fetch is outstanding.
    pub fn toggle_edit(&mut self, edit: bool) {
        match self.mode {
            DetailMode::Loading => {}
            DetailMode::View | DetailMode::Edit => {
                self.mode = if edit {
                    DetailMode::Edit
                } else {
                    DetailMode::View
                };
            }
        }
    }

    /// Submits the edit form. On success the echo is merged into the local
    /// record and a success toast goes out; the controller stays in `Edit`
    /// either way - leaving edit mode is its own user action.
    ///
    /// Overlapping submits for the same student are not fenced: the last
    /// response to resolve wins the merge.
    pub async fn submit_edit(&mut self, student_data: StudentPatch) {
        let Some(id) = self.record.as_ref().map(|r| r.id) else {
            return;
        };
        let api = self.api.clone();

        match api.update_student(id, student_data).await {
            Ok(update) if update.id.is_some() => {
                if let Some(record) = self.record.as_mut() {
                    record.apply_update(&update);
                }
                self.update_message = None;
                self.notifier
                    .success("The student's info was updated successfully.");
            }
            Ok(_) => {
                warn!(student_id = id, "update echo carried no student id");
                self.update_message = Some(UpdateMessage {
                    text: "The student was not updated.".to_string(),
                    error: true,
                });
            }
            Err(e) => {
                error!(?e, student_id = id, "student update rejected");
                self.update_message = Some(UpdateMessage {
                    text: "The student was not updated.".to_string(),
                    error: true,
                });
            }
        }
    }

    /// Modal close: drops the inline banner and any unsaved edit state.
    pub fn close(&mut self) {
        self.update_message = None;
        if self.mode == DetailMode::Edit {
            self.mode = DetailMode::View;
        }
    }
}
