//! `valueobject-core` — structural equality for value objects.
//!
//! A value object declares its defining fields once, through
//! [`ValueObject::equality_components`]; equality, hashing and the operator helpers are
//! derived from that list. This crate is pure (no I/O, no shared state).

pub mod component;
pub mod value_object;

pub use component::{AsAny, EqualityComponent, EqualityComponents};
pub use value_object::{ValueObject, eq_operator, ne_operator};
