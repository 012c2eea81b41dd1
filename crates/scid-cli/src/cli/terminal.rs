//! Terminal rendering of resolver screens.

use std::io::Write;

use scid_core::view::{Screen, View};

/// Prints each non-empty screen as an info line followed by the output line.
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_screen(&mut self, screen: &Screen) -> std::io::Result<()> {
        if !screen.info.is_empty() {
            writeln!(self.out, "{}", screen.info)?;
        }
        if !screen.output.is_empty() {
            writeln!(self.out, "{}", screen.output)?;
        }
        self.out.flush()
    }
}

impl<W: Write> View for TerminalView<W> {
    fn show(&mut self, screen: &Screen) {
        if let Err(e) = self.write_screen(screen) {
            tracing::warn!("terminal write failed: {}", e);
        }
    }
}
