//! null-zero - a nullable unsigned integer that encodes absence as zero.
//!
//! [`Uint`] pairs a `u64` with a presence flag so callers can tell "no value"
//! apart from a real value without sentinels. It decodes from JSON, plain text
//! and database driver values, and always encodes an absent value as `0`
//! (never `null`), so strict unsigned consumers downstream never see a null.
//!
//! # Example
//!
//! ```
//! use null_zero::{DriverValue, Scanner, Uint, Valuer};
//!
//! // Construction folds zero into the absent state...
//! assert!(!Uint::from_value(0).is_present());
//!
//! // ...decoding does not.
//! let decoded = Uint::from_json(b"0").unwrap();
//! assert_eq!(decoded, Uint::new(0, true));
//!
//! // Absent encodes as 0 on every output path except the driver boundary.
//! assert_eq!(Uint::absent().marshal_json(), b"0");
//! assert_eq!(Uint::absent().value(), DriverValue::Null);
//!
//! let mut scanned = Uint::default();
//! scanned.scan(DriverValue::Int(12345)).unwrap();
//! assert_eq!(scanned.pointer().as_deref(), Some(&12345));
//! ```

pub mod driver;
pub mod error;
mod json;
mod text;
pub mod uint;

pub use driver::{DriverValue, Scanner, Valuer};
pub use error::Error;
pub use uint::Uint;
