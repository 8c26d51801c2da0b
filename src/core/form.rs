//! Itinerary form confirmation

/// Phase of the itinerary form; only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Confirmed,
}

/// CSS `display` values for the three regions of the form block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormVisibility {
    pub form: &'static str,
    pub descriptor: &'static str,
    pub confirmation: &'static str,
}

impl FormPhase {
    /// Submit the form. Returns `true` if this call caused the transition.
    pub fn submit(&mut self) -> bool {
        let was_editing = *self == FormPhase::Editing;
        *self = FormPhase::Confirmed;
        was_editing
    }

    pub fn visibility(&self) -> FormVisibility {
        match self {
            FormPhase::Editing => FormVisibility {
                form: "block",
                descriptor: "block",
                confirmation: "none",
            },
            FormPhase::Confirmed => FormVisibility {
                form: "none",
                descriptor: "none",
                confirmation: "block",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_is_one_way() {
        let mut phase = FormPhase::default();
        assert_eq!(phase, FormPhase::Editing);
        assert!(phase.submit());
        assert_eq!(phase, FormPhase::Confirmed);
        assert!(!phase.submit());
        assert_eq!(phase, FormPhase::Confirmed);
    }

    #[test]
    fn test_visibility_swaps_regions() {
        let editing = FormPhase::Editing.visibility();
        assert_eq!(editing.confirmation, "none");
        assert_eq!(editing.form, "block");

        let confirmed = FormPhase::Confirmed.visibility();
        assert_eq!(confirmed.form, "none");
        assert_eq!(confirmed.descriptor, "none");
        assert_eq!(confirmed.confirmation, "block");
    }
}
