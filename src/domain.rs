use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One independently owned block of settings.
///
/// The value is always a complete `T`; it changes only through [`Domain::set`]
/// (or helpers built on it), and every setter call bumps the revision so
/// observers can tell which domains were written.
#[derive(Debug, Clone, Default)]
pub struct Domain<T> {
    value: T,
    revision: u64,
}

impl<T> Domain<T> {
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of setter calls since creation.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.revision += 1;
    }
}

impl<T: Clone> Domain<T> {
    /// Edits a copy of the current value and writes it back as a whole.
    pub fn update(&mut self, edit: impl FnOnce(&mut T)) {
        let mut next = self.value.clone();
        edit(&mut next);
        self.set(next);
    }
}

impl<T: Default> Domain<T> {
    pub fn reset(&mut self) {
        self.set(T::default());
    }
}

impl<T: Default + PartialEq> Domain<T> {
    pub fn is_default(&self) -> bool {
        self.value == T::default()
    }
}

impl<T: PartialEq> Domain<T> {
    /// Writes `value` only if it differs from the current one.
    ///
    /// Returns whether a write happened.
    pub fn set_if_changed(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.set(value);
        true
    }
}

impl<T: PartialEq> PartialEq for Domain<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Serialize> Serialize for Domain<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Domain<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        T::deserialize(deserializer).map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Knobs {
        a: i32,
        b: bool,
    }

    impl Default for Knobs {
        fn default() -> Self {
            Self { a: 3, b: true }
        }
    }

    #[test]
    fn update_keeps_untouched_fields() {
        let mut d = Domain::<Knobs>::default();
        d.update(|k| k.a = -1);
        assert_eq!(d.get(), &Knobs { a: -1, b: true });
        assert_eq!(d.revision(), 1);
        assert!(!d.is_default());

        d.reset();
        assert!(d.is_default());
        assert_eq!(d.revision(), 2);
    }

    #[test]
    fn set_if_changed_skips_equal_values() {
        let mut d = Domain::new(Knobs::default());
        assert!(!d.set_if_changed(Knobs::default()));
        assert_eq!(d.revision(), 0);
        assert!(d.set_if_changed(Knobs { a: 0, b: false }));
        assert_eq!(d.revision(), 1);
    }

    #[test]
    fn serializes_as_inner_value() {
        let mut d = Domain::new(Knobs::default());
        d.update(|k| k.b = false);
        let json = serde_json::to_string(&d).unwrap();
        assert_eq!(json, r#"{"a":3,"b":false}"#);

        let back: Domain<Knobs> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, d);
        assert_eq!(back.revision(), 0);
    }
}
