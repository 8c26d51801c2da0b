//! Errors raised while wiring page behaviors to the document.

/// Failures of a single page widget.
///
/// None of these are fatal for the page: the behavior controller logs them and
/// carries on with the remaining widgets.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PageError {
    #[error("required element `{0}` not found")]
    MissingElement(String),

    #[error("element `{selector}` is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    #[error("invalid trigger position `{0}`, expected `<top|center|bottom> <percent>%`")]
    InvalidTriggerPosition(String),

    #[error("invalid toggle action `{0}`")]
    InvalidToggleAction(String),

    #[error("browser call failed: {0}")]
    Browser(String),
}

impl PageError {
    pub fn missing(selector: impl Into<String>) -> Self {
        PageError::MissingElement(selector.into())
    }

    /// Whether the error only means the widget's markup is absent from this page
    pub fn is_missing_markup(&self) -> bool {
        matches!(self, PageError::MissingElement(_))
    }
}

pub type PageResult<T> = Result<T, PageError>;
