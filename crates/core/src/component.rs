//! Equality components: the ordered field values a value object is compared by.

use core::any::Any;
use core::fmt;
use core::hash::{Hash, Hasher};
use std::hash::DefaultHasher;

/// Upcast to `Any`, so trait objects can be checked for their exact concrete type.
///
/// Blanket-implemented for every `'static` type; there is no need to implement it by hand.
pub trait AsAny {
    fn as_any(&self) -> &dyn Any;

    /// Concrete type name, for diagnostics only.
    fn type_name(&self) -> &'static str;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn type_name(&self) -> &'static str {
        core::any::type_name::<T>()
    }
}

/// A single field value taking part in a value object's equality.
///
/// Implemented for every `'static` type that is `Eq + Hash + Debug`: strings, integers,
/// enums, identifiers and other value objects. Floats are deliberately not covered; store
/// them in an `Eq` representation (e.g. `f64::to_bits`) if they define identity.
pub trait EqualityComponent: AsAny + fmt::Debug {
    /// `true` iff `other` has the same concrete type and compares equal by that type's `==`.
    fn component_eq(&self, other: &dyn EqualityComponent) -> bool;

    /// Deterministic hash of this component.
    fn component_hash(&self) -> u64;
}

impl<T> EqualityComponent for T
where
    T: Any + Eq + Hash + fmt::Debug,
{
    fn component_eq(&self, other: &dyn EqualityComponent) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }

    fn component_hash(&self) -> u64 {
        // `DefaultHasher::new()` uses fixed keys, so the result is stable within a build.
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Ordered sequence of equality components borrowed from a value object.
///
/// A slot is either a present component or *absent* (e.g. an optional field that is unset).
/// Absent slots equal each other, never a present one, and hash as `0`.
///
/// ```ignore
/// fn equality_components(&self) -> EqualityComponents<'_> {
///     EqualityComponents::new()
///         .with(&self.street)
///         .with(&self.zip)
///         .with_optional(self.apartment.as_ref())
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct EqualityComponents<'a> {
    slots: Vec<Option<&'a dyn EqualityComponent>>,
}

impl<'a> EqualityComponents<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a present component.
    pub fn with<T: EqualityComponent + 'a>(mut self, component: &'a T) -> Self {
        self.slots.push(Some(component));
        self
    }

    /// Append a component that may be absent.
    pub fn with_optional<T: EqualityComponent + 'a>(mut self, component: Option<&'a T>) -> Self {
        self.slots.push(component.map(|c| c as &'a dyn EqualityComponent));
        self
    }

    /// Append an absent component.
    pub fn absent(mut self) -> Self {
        self.slots.push(None);
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<&'a dyn EqualityComponent>> + '_ {
        self.slots.iter().copied()
    }

    /// XOR of the component hashes, absent slots contributing `0`.
    ///
    /// An empty sequence hashes to `0`.
    pub fn hash_code(&self) -> u64 {
        self.iter()
            .map(|slot| slot.map_or(0, |component| component.component_hash()))
            .fold(0, |acc, hash| acc ^ hash)
    }
}

/// Pairwise comparison in order; sequences of different length are never equal.
impl PartialEq for EqualityComponents<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.slots.len() == other.slots.len()
            && self
                .slots
                .iter()
                .zip(&other.slots)
                .all(|pair| match pair {
                    (None, None) => true,
                    (Some(left), Some(right)) => left.component_eq(*right),
                    _ => false,
                })
    }
}

impl<'a> FromIterator<&'a dyn EqualityComponent> for EqualityComponents<'a> {
    fn from_iter<I: IntoIterator<Item = &'a dyn EqualityComponent>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

impl<'a> FromIterator<Option<&'a dyn EqualityComponent>> for EqualityComponents<'a> {
    fn from_iter<I: IntoIterator<Item = Option<&'a dyn EqualityComponent>>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_of_same_type_and_value_are_equal() {
        let a = String::from("Main St");
        let b = String::from("Main St");
        assert!(a.component_eq(&b));
        assert_eq!(a.component_hash(), b.component_hash());
    }

    #[test]
    fn components_of_different_types_are_never_equal() {
        let text = String::from("7");
        let number = 7_u32;
        let narrow = 7_u8;
        assert!(!text.component_eq(&number));
        assert!(!number.component_eq(&narrow));
        assert!(!narrow.component_eq(&number));
    }

    #[test]
    fn sequences_compare_pairwise_in_order() {
        let (one, two) = (1_i32, 2_i32);
        let forward = EqualityComponents::new().with(&one).with(&two);
        let same = EqualityComponents::new().with(&one).with(&two);
        let reversed = EqualityComponents::new().with(&two).with(&one);

        assert_eq!(forward, same);
        assert_ne!(forward, reversed);
        // XOR folding is order-insensitive; only equality is.
        assert_eq!(forward.hash_code(), reversed.hash_code());
    }

    #[test]
    fn sequences_of_different_length_are_unequal() {
        let one = 1_i32;
        let short = EqualityComponents::new().with(&one);
        let long = EqualityComponents::new().with(&one).absent();
        assert_ne!(short, long);
        assert_ne!(long, short);
    }

    #[test]
    fn absent_slots_match_only_absent_slots() {
        let name = String::from("x");
        let none: Option<&String> = None;

        let absent = EqualityComponents::new().with_optional(none);
        let also_absent = EqualityComponents::new().absent();
        let present = EqualityComponents::new().with_optional(Some(&name));

        assert_eq!(absent, also_absent);
        assert_ne!(absent, present);
        assert_ne!(present, absent);
    }

    #[test]
    fn absent_slots_hash_as_zero() {
        assert_eq!(EqualityComponents::new().hash_code(), 0);
        assert_eq!(EqualityComponents::new().absent().absent().hash_code(), 0);

        let zip = String::from("12345");
        let with_gap = EqualityComponents::new().with(&zip).absent();
        assert_eq!(with_gap.hash_code(), zip.component_hash());
    }

    #[test]
    fn collects_from_iterators() {
        let (a, b) = (String::from("a"), 3_u64);
        let built = EqualityComponents::new().with(&a).with(&b);

        let collected: EqualityComponents<'_> = [&a as &dyn EqualityComponent, &b]
            .into_iter()
            .collect();
        assert_eq!(built, collected);

        let with_absent: EqualityComponents<'_> =
            [Some(&a as &dyn EqualityComponent), None].into_iter().collect();
        assert_eq!(with_absent.len(), 2);
        assert_eq!(with_absent.iter().filter(Option::is_none).count(), 1);
        assert!(!with_absent.is_empty());
    }
}
