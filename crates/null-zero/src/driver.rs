//! Database driver value boundary.
//!
//! Drivers hand rows over as dynamically typed [`DriverValue`]s. A type that
//! can be read from a column implements [`Scanner`]; one that can be bound as
//! a parameter implements [`Valuer`].

use crate::error::Error;
use crate::text::parse_uint;
use crate::uint::Uint;

/// A dynamically typed value as produced or consumed by a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    Null,
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    Bytes(Vec<u8>),
}

impl DriverValue {
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }

    /// Kind name used in conversion errors.
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Int(_) => "int64",
            DriverValue::UInt(_) => "uint64",
            DriverValue::Float(_) => "float64",
            DriverValue::Bool(_) => "bool",
            DriverValue::Text(_) => "string",
            DriverValue::Bytes(_) => "bytes",
        }
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Int(v)
    }
}

impl From<u64> for DriverValue {
    fn from(v: u64) -> Self {
        DriverValue::UInt(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DriverValue::Null, Into::into)
    }
}

/// Reads a column value into the receiver.
pub trait Scanner {
    fn scan(&mut self, src: DriverValue) -> Result<(), Error>;
}

/// Produces the value bound for a query parameter.
pub trait Valuer {
    fn value(&self) -> DriverValue;
}

fn conversion(src: &DriverValue, reason: impl Into<String>) -> Error {
    Error::Conversion {
        from: src.kind(),
        reason: reason.into(),
    }
}

fn scan_u64(src: &DriverValue) -> Result<u64, Error> {
    match src {
        DriverValue::UInt(v) => Ok(*v),
        DriverValue::Int(v) => {
            u64::try_from(*v).map_err(|_| conversion(src, format!("{v} is negative")))
        }
        DriverValue::Float(f) => {
            // 2^64 is exactly representable; anything at or above it overflows.
            if f.fract() == 0.0 && *f >= 0.0 && *f < 18_446_744_073_709_551_616.0 {
                Ok(*f as u64)
            } else {
                Err(conversion(src, format!("{f} is not an unsigned integer")))
            }
        }
        DriverValue::Text(s) => {
            parse_uint(s.as_bytes()).map_err(|err| conversion(src, err.to_string()))
        }
        DriverValue::Bytes(b) => parse_uint(b).map_err(|err| conversion(src, err.to_string())),
        DriverValue::Bool(_) => Err(conversion(src, "no unsigned integer reading")),
        DriverValue::Null => Err(conversion(src, "unexpected null")),
    }
}

impl Scanner for Uint {
    /// `Null` scans to absent; any integer reading scans to a present value.
    fn scan(&mut self, src: DriverValue) -> Result<(), Error> {
        self.clear();
        if src.is_null() {
            return Ok(());
        }
        match scan_u64(&src) {
            Ok(v) => {
                self.set_valid(v);
                Ok(())
            }
            Err(err) => {
                tracing::debug!(kind = src.kind(), error = %err, "rejected driver value for zero.Uint");
                Err(err)
            }
        }
    }
}

impl Valuer for Uint {
    /// Absent binds as `NULL`. Values above `i64::MAX` are passed as `UInt`
    /// since most drivers only carry signed 64-bit integers natively.
    fn value(&self) -> DriverValue {
        if !self.present {
            return DriverValue::Null;
        }
        match i64::try_from(self.value) {
            Ok(v) => DriverValue::Int(v),
            Err(_) => DriverValue::UInt(self.value),
        }
    }
}
