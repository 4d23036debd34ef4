//! Table validation: schema shape and column coercibility.

mod validators;

pub use validators::{Check, CoercionCheck, SchemaCheck, TableValidator};
