use crate::{
    data::student::{GradDisplay, StudentSummary},
    error::CorkboardResult,
    view::DetailOpener,
};
use jiff::civil::Date;

/// Avatar fallback order: initials when both name parts exist, otherwise a
/// generic placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Initials(String),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDescription {
    pub class_code: String,
    pub grad: GradDisplay,
}

/// Compact list-card model over one [`StudentSummary`].
#[derive(Debug, Clone)]
pub struct SummaryCard {
    student: StudentSummary,
    loading: bool,
    active: bool,
}

impl SummaryCard {
    /// `active` is initialized from `status` exactly once, here.
    #[must_use]
    pub fn new(student: StudentSummary, loading: bool) -> Self {
        let active = student.status.is_active();
        Self {
            student,
            loading,
            active,
        }
    }

    #[must_use]
    pub const fn student(&self) -> &StudentSummary {
        &self.student
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replaces the underlying summary after a list refetch. Deliberately
    /// leaves `active` alone: a changed server `status` does not re-sync the
    /// local toggle. Flagged for product review, not a bug to fix here.
    pub fn set_student(&mut self, student: StudentSummary) {
        self.student = student;
    }

    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// Local-only. No mutation is issued and no server-sourced field moves,
    /// so the toggle silently diverges from server state. Pending product
    /// clarification on whether it should persist.
    pub fn toggle_active(&mut self) {
        self.active = !self.active;
    }

    /// None while the placeholder is up.
    #[must_use]
    pub fn title(&self) -> Option<String> {
        if self.loading {
            return None;
        }
        self.student.full_name()
    }

    #[must_use]
    pub fn avatar(&self) -> Option<Avatar> {
        if self.loading {
            return None;
        }
        Some(
            self.student
                .initials()
                .map_or(Avatar::Placeholder, Avatar::Initials),
        )
    }

    /// Class code plus graduation display; `grad.graduated` is what the
    /// rendering layer uses to flag past dates.
    pub fn description(&self, today: Date) -> CorkboardResult<Option<CardDescription>> {
        if self.loading {
            return Ok(None);
        }
        Ok(Some(CardDescription {
            class_code: self.student.class_code.clone(),
            grad: GradDisplay::derive(&self.student.grad_date, today)?,
        }))
    }

    /// Hands this student to the detail view. No network call happens here.
    pub fn select(&self, opener: &mut dyn DetailOpener) {
        opener.open_detail(self.student.id);
        opener.toggle_detail();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::StudentStatus;
    use jiff::civil::date;

    fn summary(status: StudentStatus) -> StudentSummary {
        StudentSummary {
            id: 7,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            class_code: "JS-07".to_string(),
            grad_date: "2020-01-01".to_string(),
            status,
        }
    }

    #[derive(Default)]
    struct RecordingOpener {
        opened: Vec<i32>,
        toggles: usize,
    }

    impl DetailOpener for RecordingOpener {
        fn open_detail(&mut self, id: i32) {
            self.opened.push(id);
        }
        fn toggle_detail(&mut self) {
            self.toggles += 1;
        }
    }

    #[test]
    fn active_initializes_from_status_once() {
        let mut card = SummaryCard::new(summary(StudentStatus::Active), false);
        assert!(card.active());

        // a refetched summary flipping status does not re-sync the toggle
        card.set_student(summary(StudentStatus::Inactive));
        assert!(card.active());
    }

    #[test]
    fn toggle_active_only_touches_the_local_flag() {
        let mut card = SummaryCard::new(summary(StudentStatus::Inactive), false);
        card.toggle_active();
        assert!(card.active());
        assert_eq!(card.student().id, 7);
        assert_eq!(card.student().status, StudentStatus::Inactive);
    }

    #[test]
    fn loading_card_renders_placeholders() {
        let card = SummaryCard::new(summary(StudentStatus::Active), true);
        assert_eq!(card.title(), None);
        assert_eq!(card.avatar(), None);
        assert!(card.description(date(2024, 1, 1)).unwrap().is_none());
    }

    #[test]
    fn description_flags_past_graduation_dates() {
        let card = SummaryCard::new(summary(StudentStatus::Active), false);
        let description = card.description(date(2024, 1, 1)).unwrap().unwrap();
        assert_eq!(description.class_code, "JS-07");
        assert_eq!(description.grad.formatted, "January 1st 2020");
        assert!(description.grad.graduated);
    }

    #[test]
    fn avatar_falls_back_when_names_are_missing() {
        let card = SummaryCard::new(summary(StudentStatus::Active), false);
        assert_eq!(card.avatar(), Some(Avatar::Initials("AL".to_string())));

        let mut nameless = summary(StudentStatus::Active);
        nameless.first_name = None;
        let card = SummaryCard::new(nameless, false);
        assert_eq!(card.avatar(), Some(Avatar::Placeholder));
        assert_eq!(card.title(), None);
    }

    #[test]
    fn select_fires_both_signals_in_order() {
        let card = SummaryCard::new(summary(StudentStatus::Active), false);
        let mut opener = RecordingOpener::default();
        card.select(&mut opener);
        assert_eq!(opener.opened, vec![7]);
        assert_eq!(opener.toggles, 1);
    }
}
