//! Display model: the four view states and their rendering to screen text.

mod fields;

pub use fields::{TextFields, View};

use crate::resolve::ResolveResult;

pub const INFO_FETCHING: &str = "Fetching ID...";
pub const INFO_ERROR: &str = "Encountered an error:";
pub const INFO_RESULT: &str = "Found Soundcloud ID:";

/// The closed set of display modes. Exactly one is active at a time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    #[default]
    WaitingForInput,
    /// Carries the validated input as typed.
    FetchingData(String),
    Error(String),
    DisplayingResult(ResolveResult),
}

/// Text produced by rendering a [`ViewState`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Screen {
    /// Status line.
    pub info: String,
    /// Result line (ID or error description).
    pub output: String,
    /// True when the input field must be emptied as well.
    pub clear_input: bool,
}

impl ViewState {
    pub fn render(&self) -> Screen {
        match self {
            ViewState::WaitingForInput => Screen {
                info: String::new(),
                output: String::new(),
                clear_input: true,
            },
            ViewState::FetchingData(_) => Screen {
                info: INFO_FETCHING.to_string(),
                output: String::new(),
                clear_input: false,
            },
            ViewState::Error(description) => Screen {
                info: INFO_ERROR.to_string(),
                output: description.clone(),
                clear_input: false,
            },
            ViewState::DisplayingResult(result) => Screen {
                info: INFO_RESULT.to_string(),
                output: result.id.to_string(),
                clear_input: false,
            },
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error(_))
    }
}
