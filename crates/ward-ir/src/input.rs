//! Views an action needs from its input

use crate::Value;

/// Inputs that can be inspected as text
pub trait TextInput {
    /// The text to check, or `None` when the input is not textual
    fn as_text(&self) -> Option<&str>;
}

/// Inputs with a length, such as strings and ordered lists
pub trait SequenceInput {
    /// Number of characters or items, or `None` when the input has no length
    fn length(&self) -> Option<usize>;
}

impl TextInput for String {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextInput for &str {
    fn as_text(&self) -> Option<&str> {
        Some(self)
    }
}

impl TextInput for Value {
    fn as_text(&self) -> Option<&str> {
        self.as_str()
    }
}

// String lengths count UTF-16 code units, so astral characters count twice.
impl SequenceInput for String {
    fn length(&self) -> Option<usize> {
        Some(self.encode_utf16().count())
    }
}

impl SequenceInput for &str {
    fn length(&self) -> Option<usize> {
        Some(self.encode_utf16().count())
    }
}

impl<T> SequenceInput for Vec<T> {
    fn length(&self) -> Option<usize> {
        Some(self.len())
    }
}

impl SequenceInput for Value {
    fn length(&self) -> Option<usize> {
        match self {
            Value::String(s) => s.length(),
            Value::Array(items) => Some(items.len()),
            _ => None,
        }
    }
}
