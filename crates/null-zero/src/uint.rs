//! The `Uint` record and its non-codec operations.

/// Name reported in decode errors.
pub(crate) const TYPE_NAME: &str = "zero.Uint";

/// A nullable `u64` whose absent state encodes as `0`.
///
/// `value` is only meaningful while `present` is true. Everything that reads
/// the record without checking the flag (encoders, [`Uint::pointer`],
/// [`Uint::value_or_zero`]) observes `0` for an absent instance.
///
/// Zero is handled asymmetrically: [`Uint::from_value`] folds `0` into the
/// absent state, while every decoder keeps a decoded `0` present.
///
/// ```
/// use null_zero::Uint;
///
/// assert!(!Uint::from_value(0).is_present());
/// assert!(Uint::from_json(b"0").unwrap().is_present());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Uint {
    pub value: u64,
    pub present: bool,
}

impl Uint {
    /// Raw constructor, both fields are taken verbatim.
    pub const fn new(value: u64, present: bool) -> Self {
        Self { value, present }
    }

    /// Absent instance.
    pub const fn absent() -> Self {
        Self::new(0, false)
    }

    /// Builds an instance from `value`, treating `0` as absent.
    pub const fn from_value(value: u64) -> Self {
        Self::new(value, value != 0)
    }

    /// Builds an instance from an optional reference.
    ///
    /// Unlike [`Uint::from_value`], a reference to `0` yields a present zero.
    pub fn from_pointer(ptr: Option<&u64>) -> Self {
        match ptr {
            Some(&value) => Self::new(value, true),
            None => Self::absent(),
        }
    }

    pub fn is_present(&self) -> bool {
        self.present
    }

    /// `value` when present, `0` otherwise.
    pub fn value_or_zero(&self) -> u64 {
        if self.present {
            self.value
        } else {
            0
        }
    }

    /// Returns an independently owned copy of the value, or `None` when absent.
    pub fn pointer(&self) -> Option<Box<u64>> {
        if self.present {
            Some(Box::new(self.value))
        } else {
            None
        }
    }

    /// True when absent or when holding a present `0`.
    pub fn is_zero(&self) -> bool {
        !self.present || self.value == 0
    }

    /// Overwrites the receiver with a present `value`.
    pub fn set_valid(&mut self, value: u64) {
        self.value = value;
        self.present = true;
    }

    /// Equality under zero semantics: absent and present `0` compare equal.
    pub fn equal(&self, other: &Uint) -> bool {
        self.value_or_zero() == other.value_or_zero()
    }

    /// Equality that also distinguishes absent from present `0`.
    ///
    /// The payload of absent instances is ignored.
    pub fn exact_equal(&self, other: &Uint) -> bool {
        match (self.present, other.present) {
            (true, true) => self.value == other.value,
            (false, false) => true,
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::absent();
    }
}

impl From<u64> for Uint {
    fn from(value: u64) -> Self {
        Self::from_value(value)
    }
}

impl From<Option<u64>> for Uint {
    fn from(value: Option<u64>) -> Self {
        Self::from_pointer(value.as_ref())
    }
}

impl From<Uint> for Option<u64> {
    fn from(value: Uint) -> Self {
        value.present.then_some(value.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_folds_zero() {
        let u = Uint::from_value(12345);
        assert_eq!(u, Uint::new(12345, true));
        assert!(!Uint::from_value(0).present);
    }

    #[test]
    fn test_from_pointer() {
        let n = 0u64;
        assert_eq!(Uint::from_pointer(Some(&n)), Uint::new(0, true));
        assert_eq!(Uint::from_pointer(None), Uint::absent());
    }

    #[test]
    fn test_pointer_is_independent_copy() {
        let u = Uint::from_value(7);
        let mut ptr = u.pointer().unwrap();
        *ptr = 9;
        assert_eq!(u.value, 7);
        assert!(Uint::absent().pointer().is_none());
    }

    #[test]
    fn test_pointer_hides_stale_payload() {
        assert!(Uint::new(5, false).pointer().is_none());
        assert_eq!(Uint::new(5, false).value_or_zero(), 0);
    }

    #[test]
    fn test_is_zero() {
        assert!(Uint::absent().is_zero());
        assert!(Uint::new(0, true).is_zero());
        assert!(!Uint::new(1, true).is_zero());
    }

    #[test]
    fn test_set_valid_overwrites() {
        let mut u = Uint::new(3, true);
        u.set_valid(0);
        assert_eq!(u, Uint::new(0, true));
    }

    #[test]
    fn test_equal_vs_exact_equal() {
        let absent = Uint::absent();
        let zero = Uint::new(0, true);
        assert!(absent.equal(&zero));
        assert!(!absent.exact_equal(&zero));
        assert!(absent.exact_equal(&Uint::new(42, false)));
        assert!(Uint::from_value(42).exact_equal(&Uint::new(42, true)));
    }

    #[test]
    fn test_option_conversions() {
        assert_eq!(Uint::from(Some(0)), Uint::new(0, true));
        assert_eq!(Uint::from(None), Uint::absent());
        assert_eq!(Option::<u64>::from(Uint::from_value(8)), Some(8));
        assert_eq!(Option::<u64>::from(Uint::absent()), None);
    }
}
