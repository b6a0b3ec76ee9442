//! Error type shared by every decoder in the crate.

use thiserror::Error;

/// Error returned when a [`Uint`](crate::Uint) cannot be decoded.
///
/// Whatever the variant, the receiver of the failed decode is left absent.
#[derive(Debug, Error)]
pub enum Error {
    /// The input is not well-formed JSON. The underlying diagnostic is kept
    /// as-is so callers can inspect line/column information.
    #[error(transparent)]
    Syntax(#[from] serde_json::Error),

    /// Well-formed JSON that is neither `null` nor an unsigned integer.
    #[error("{}", type_mismatch_message(.value, .type_name, .field))]
    TypeMismatch {
        /// Description of the offending input, e.g. `bool` or `number -1`.
        value: String,
        type_name: &'static str,
        field: Option<&'static str>,
    },

    #[error("parsing {0:?}: invalid syntax")]
    InvalidSyntax(String),

    #[error("parsing {0:?}: value out of range")]
    OutOfRange(String),

    /// A driver value of a kind that has no unsigned integer reading.
    #[error("unsupported scan, converting driver value of type {from} into zero.Uint: {reason}")]
    Conversion { from: &'static str, reason: String },
}

fn type_mismatch_message(value: &str, type_name: &str, field: &Option<&str>) -> String {
    match field {
        Some(field) => format!("cannot decode {value} into field {field} of type {type_name}"),
        None => format!("cannot decode {value} into value of type {type_name}"),
    }
}

impl Error {
    pub(crate) fn type_mismatch(value: impl Into<String>, field: Option<&'static str>) -> Self {
        Error::TypeMismatch {
            value: value.into(),
            type_name: crate::uint::TYPE_NAME,
            field,
        }
    }

    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// True for plain-text parse failures (`InvalidSyntax` and `OutOfRange`).
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::InvalidSyntax(_) | Error::OutOfRange(_))
    }

    pub fn is_conversion(&self) -> bool {
        matches!(self, Error::Conversion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_mismatch_message_with_field() {
        let err = Error::type_mismatch("number -1", Some("Uint"));
        assert_eq!(
            err.to_string(),
            "cannot decode number -1 into field Uint of type zero.Uint"
        );
        assert!(err.is_type_mismatch());
    }

    #[test]
    fn test_type_mismatch_message_without_field() {
        let err = Error::type_mismatch("bool", None);
        assert_eq!(err.to_string(), "cannot decode bool into value of type zero.Uint");
    }

    #[test]
    fn test_syntax_is_transparent() {
        let inner = serde_json::from_slice::<serde_json::Value>(b"{").unwrap_err();
        let message = inner.to_string();
        let err = Error::from(inner);
        assert!(err.is_syntax());
        assert_eq!(err.to_string(), message);
    }

    #[test]
    fn test_parse_messages() {
        assert_eq!(
            Error::InvalidSyntax("abc".to_string()).to_string(),
            "parsing \"abc\": invalid syntax"
        );
        assert!(Error::OutOfRange("1".repeat(30)).is_parse());
    }
}
