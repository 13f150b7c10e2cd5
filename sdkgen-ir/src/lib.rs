//! Intermediate representation types for the sdkgen binding generator.
//!
//! This crate defines the language-agnostic model of a REST API, its
//! named types and methods, as consumed by the code generation engine.
//! The model is produced by an external spec-parsing component and
//! supplied to sdkgen as a structured document.
//!
//! # Architecture
//!
//! ```text
//! API spec → external parser → model document → sdkgen-ir (ApiModel) → codegen
//! ```
//!
//! The IR is built once per generation run and is immutable thereafter.

mod model;
mod types;

pub use model::{ApiModel, Method, ModelType, Parameter, Property};
pub use types::{CompositeKind, HttpVerb, ParamLocation, TypeRef};
