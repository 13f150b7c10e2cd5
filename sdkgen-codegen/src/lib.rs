//! Shared code generation engine for the sdkgen binding generator.
//!
//! This crate provides the language-agnostic half of SDK generation:
//! the backend capability trait, the emission pipeline, and the
//! supporting utilities shared by language-specific backends
//! (e.g., `sdkgen-codegen-python`).
//!
//! # Module Organization
//!
//! - [`language`] - Backend abstractions (LanguageBackend, NamingConvention)
//! - [`emit`] - The emission pipeline (generate_sdk, SdkFile)
//! - [`hooks`] - Run-scoped deserialization-hook accumulator
//! - [`output`] - File-system output helpers
//! - [`version`] - Version-info fetch and stamp-file rewriting
//! - [`format`] - External formatter invocation

pub mod emit;
pub mod error;
pub mod format;
pub mod hooks;
pub mod language;
pub mod output;
pub mod version;

pub use emit::{SdkFile, generate_sdk};
pub use error::CodegenError;
pub use hooks::HookRegistry;
pub use language::{LanguageBackend, MappedType, NamingConvention, TypeContext};
pub use version::{StampResult, VersionInfo, fetch_version_info, stamp_file};
