//! Front-end seam: anything that can show a [`Screen`].

use super::Screen;

/// Receives every rendered screen, in order. Called on the task owning the controller.
pub trait View {
    fn show(&mut self, screen: &Screen);
}

/// The three text fields of the resolver screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFields {
    pub input: String,
    pub info: String,
    pub output: String,
}

impl View for TextFields {
    fn show(&mut self, screen: &Screen) {
        if screen.clear_input {
            self.input.clear();
        }
        self.info.clone_from(&screen.info);
        self.output.clone_from(&screen.output);
    }
}
