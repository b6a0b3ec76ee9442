//! Plain-text codec.
//!
//! Accepted input: empty or `null` for absent, otherwise unsigned base-10
//! digits with no sign, whitespace or separators.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::uint::Uint;

/// Parses an unsigned base-10 integer from raw bytes.
pub(crate) fn parse_uint(text: &[u8]) -> Result<u64, Error> {
    let lossy = || String::from_utf8_lossy(text).into_owned();
    if text.is_empty() || !text.iter().all(u8::is_ascii_digit) {
        return Err(Error::InvalidSyntax(lossy()));
    }
    text.iter()
        .try_fold(0u64, |acc, &b| acc.checked_mul(10)?.checked_add(u64::from(b - b'0')))
        .ok_or_else(|| Error::OutOfRange(lossy()))
}

impl Uint {
    /// Decodes plain text into the receiver.
    ///
    /// Empty input and `null` decode to absent. Digits decode to a present
    /// value, including `0`. On error the receiver is left absent.
    ///
    /// ```
    /// use null_zero::Uint;
    ///
    /// let mut u = Uint::default();
    /// u.unmarshal_text(b"12345").unwrap();
    /// assert_eq!(u, Uint::new(12345, true));
    ///
    /// u.unmarshal_text(b"null").unwrap();
    /// assert!(!u.is_present());
    /// ```
    pub fn unmarshal_text(&mut self, text: &[u8]) -> Result<(), Error> {
        self.clear();
        if text.is_empty() || text == b"null" {
            return Ok(());
        }
        match parse_uint(text) {
            Ok(value) => {
                self.set_valid(value);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(input_len = text.len(), error = %err, "rejected text for zero.Uint");
                Err(err)
            }
        }
    }

    /// Encodes the value as decimal digits; absent encodes as `0`.
    pub fn marshal_text(&self) -> Vec<u8> {
        self.value_or_zero().to_string().into_bytes()
    }
}

impl FromStr for Uint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut u = Uint::default();
        u.unmarshal_text(s.as_bytes())?;
        Ok(u)
    }
}

impl fmt::Display for Uint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value_or_zero())
    }
}
