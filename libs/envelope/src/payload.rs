use serde_json::{Map, Value};

use crate::error::ErrorBody;

/// Payload key reserved for the error object.
pub const KEY_ERROR: &str = "error";
/// Payload key reserved for paging metadata.
pub const KEY_PAGINATION: &str = "pagination";

/// The body of a response, as an explicit state machine.
///
/// A payload is either a map of named content entries or a single error.
/// Once failed it stays failed: content and pagination writes silently
/// no-op, so the wire body is always either success-shaped or error-shaped,
/// never a mix.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Content(Map<String, Value>),
    Failed(ErrorBody),
}

impl Default for Payload {
    fn default() -> Self {
        Self::Content(Map::new())
    }
}

impl Payload {
    /// Insert (or overwrite) a named content entry.
    ///
    /// No-op when the key is reserved or the payload has failed.
    pub fn attach(&mut self, key: &str, value: Value) {
        if key == KEY_ERROR || key == KEY_PAGINATION {
            return;
        }
        if let Self::Content(map) = self {
            map.insert(key.to_owned(), value);
        }
    }

    /// Discard all content and switch to the error shape.
    pub fn fail(&mut self, error: ErrorBody) {
        *self = Self::Failed(error);
    }

    /// Store paging metadata under the reserved key.
    ///
    /// No-op when the payload has failed.
    pub fn set_pagination(&mut self, paging: Value) {
        if let Self::Content(map) = self {
            map.insert(KEY_PAGINATION.to_owned(), paging);
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    pub fn error(&self) -> Option<&ErrorBody> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Content(_) => None,
        }
    }

    /// Render the wire body: the content map itself, or `{"error": ...}`.
    pub fn to_json(&self) -> Value {
        match self {
            Self::Content(map) => Value::Object(map.clone()),
            Self::Failed(error) => {
                let mut map = Map::new();
                map.insert(
                    KEY_ERROR.to_owned(),
                    serde_json::to_value(error).unwrap_or(Value::Null),
                );
                Value::Object(map)
            }
        }
    }
}
