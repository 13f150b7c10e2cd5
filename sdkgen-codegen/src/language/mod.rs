//! Language-specific abstractions.
//!
//! - [`LanguageBackend`] - the capability trait each target language implements
//! - [`NamingConvention`] - reserved-word escaping for local bindings
//! - [`MappedType`] / [`TypeContext`] - type mapping contract

mod backend;
mod naming;

pub use backend::{LanguageBackend, MappedType, TypeContext};
pub use naming::NamingConvention;
