//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use core::fmt;
use core::hash::{Hash, Hasher};

use crate::component::{AsAny, EqualityComponents};

/// Structural equality and hashing derived from an ordered list of field values.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: No identity (two value objects with same values are equal)
/// - **Entity**: Has identity (two entities with same ID are the same entity)
///
/// ## Contract
///
/// Implementors only supply [`ValueObject::equality_components`]. Equality and hashing
/// follow from it:
///
/// - two instances are equal iff they have the **exact same concrete type** and their
///   components are pairwise equal, in order, with the same length;
/// - equal instances always share a [`ValueObject::hash_code`].
///
/// Components must not change over the lifetime of an instance. Value objects are
/// immutable; to "modify" one, build a new one.
///
/// Leaving a defining field out of the components silently weakens equality. Nothing
/// here can detect that.
///
/// ## Usage Pattern
///
/// ```ignore
/// #[derive(Debug, Clone)]
/// struct Address {
///     street: String,
///     zip: String,
///     city: String,
/// }
///
/// impl ValueObject for Address {
///     fn equality_components(&self) -> EqualityComponents<'_> {
///         EqualityComponents::new()
///             .with(&self.street)
///             .with(&self.zip)
///             .with(&self.city)
///     }
/// }
///
/// value_object_eq!(Address);
/// ```
pub trait ValueObject: AsAny + fmt::Debug {
    /// Defining field values, in a fixed order specific to the implementing type.
    fn equality_components(&self) -> EqualityComponents<'_>;

    /// Structural equality against any (possibly absent) value object.
    ///
    /// Returns `false` for an absent `other` and for any other concrete type, even one with
    /// identical components.
    fn equals(&self, other: Option<&dyn ValueObject>) -> bool {
        let Some(other) = other else {
            return false;
        };

        if self.as_any().type_id() != other.as_any().type_id() {
            tracing::trace!(
                left = self.type_name(),
                right = other.type_name(),
                "value object type mismatch"
            );
            return false;
        }

        self.equality_components() == other.equality_components()
    }

    /// Hash consistent with [`ValueObject::equals`]: XOR of the component hashes.
    fn hash_code(&self) -> u64 {
        self.equality_components().hash_code()
    }
}

/// Operator-style equality over optional operands.
///
/// Both absent is equal, exactly one absent is unequal, otherwise `left.equals(right)`.
pub fn eq_operator(left: Option<&dyn ValueObject>, right: Option<&dyn ValueObject>) -> bool {
    match (left, right) {
        (None, None) => true,
        (Some(left), right @ Some(_)) => left.equals(right),
        _ => false,
    }
}

/// Negation of [`eq_operator`].
pub fn ne_operator(left: Option<&dyn ValueObject>, right: Option<&dyn ValueObject>) -> bool {
    !eq_operator(left, right)
}

impl<'a> PartialEq for dyn ValueObject + 'a {
    fn eq(&self, other: &Self) -> bool {
        self.equals(Some(other))
    }
}

impl<'a> Eq for dyn ValueObject + 'a {}

impl<'a> Hash for dyn ValueObject + 'a {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

/// Implement `PartialEq`, `Eq` and `Hash` for concrete value objects by delegating to
/// [`ValueObject::equals`] and [`ValueObject::hash_code`].
///
/// Generic value objects need the three impls written out by hand.
#[macro_export]
macro_rules! value_object_eq {
    ($($t:ty),+ $(,)?) => {
        $(
            impl ::core::cmp::PartialEq for $t {
                fn eq(&self, other: &Self) -> bool {
                    $crate::ValueObject::equals(
                        self,
                        ::core::option::Option::Some(other as &dyn $crate::ValueObject),
                    )
                }
            }

            impl ::core::cmp::Eq for $t {}

            impl ::core::hash::Hash for $t {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64($crate::ValueObject::hash_code(self));
                }
            }
        )+
    };
}
