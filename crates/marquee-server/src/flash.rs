//! Flash messages rendered at the top of the next page.
//!
//! A flash is plain data handed to the templating collaborator: write and
//! not-found paths put one into the render context of the page they
//! respond with. There is no session storage -- the outcome page is
//! rendered directly in the same response, so the message never needs to
//! survive a redirect.

use serde::Serialize;

/// The visual category of a flash message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashKind {
    /// The operation succeeded.
    Success,
    /// The operation failed or the target was missing.
    Error,
}

/// A one-shot user-facing message shown at the top of a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flash {
    /// The visual category.
    pub kind: FlashKind,
    /// The message text.
    pub message: String,
}

impl Flash {
    /// Create a success flash.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Success,
            message: message.into(),
        }
    }

    /// Create an error flash.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FlashKind::Error,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn kinds_serialize_lowercase() {
        let value = serde_json::to_value(Flash::success("Listed!")).unwrap();
        assert_eq!(value["kind"], "success");
        assert_eq!(value["message"], "Listed!");

        let value = serde_json::to_value(Flash::error("Nope")).unwrap();
        assert_eq!(value["kind"], "error");
    }
}
