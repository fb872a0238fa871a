use crate::console_warn;

/// Non-fatal diagnostics collected while deriving render data.
///
/// Resolvers push into this instead of logging directly so callers decide
/// when (and whether) the messages reach the console.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Warnings {
    messages: Vec<String>,
}

impl Warnings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(String::as_str)
    }

    /// Write every collected message to the console and clear the list.
    pub fn flush(&mut self) {
        for message in self.messages.drain(..) {
            console_warn!("{}", message);
        }
    }
}
