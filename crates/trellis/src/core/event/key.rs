//! Key events.

/// A key press, already translated by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character.
    Char(char),
    /// The backspace key.
    Backspace,
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Char(c)
    }
}
