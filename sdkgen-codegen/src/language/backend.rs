//! The per-language backend capability trait.

use std::path::{Path, PathBuf};

use sdkgen_ir::{ApiModel, Method, ModelType, TypeRef};

use crate::error::Result;
use crate::hooks::HookRegistry;

/// Context a type is mapped in.
///
/// Model context renders named types as forward references to the bare
/// name (a type may reference itself or a type not yet declared); method
/// context renders them fully qualified under the models namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeContext {
    Model,
    Method,
}

/// A type mapped into a target language: the type expression and the
/// default literal attached to optional bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    pub name: String,
    pub default: String,
}

impl MappedType {
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
        }
    }
}

/// Capability set implemented once per target language.
///
/// The emission pipeline drives these hooks in a fixed order: models
/// prologue, one `declare_type` per model type, models epilogue (with the
/// accumulated hook registry), methods prologue, one `declare_method` per
/// method, methods epilogue. A backend holds no run-scoped mutable state
/// of its own; anything accumulated across declarations goes through the
/// [`HookRegistry`] the pipeline threads in.
pub trait LanguageBackend {
    /// Language identifier (e.g., "python").
    fn language(&self) -> &'static str;

    /// File extension for generated source files, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Package root directory for generated sources, relative to the
    /// output directory (e.g., "acme_sdk").
    fn package_path(&self) -> &str;

    /// Map an abstract type to a target-language type expression and
    /// default literal.
    fn map_type(&self, type_ref: &TypeRef, context: TypeContext) -> Result<MappedType>;

    /// Boilerplate preceding all method declarations.
    fn methods_prologue(&self) -> String;

    /// Boilerplate following all method declarations.
    fn methods_epilogue(&self) -> String {
        String::new()
    }

    /// Boilerplate preceding all model type declarations.
    fn models_prologue(&self) -> String;

    /// Boilerplate following all model type declarations. Receives the
    /// hook registry accumulated over the whole run for a final flush.
    fn models_epilogue(&self, hooks: &HookRegistry) -> String;

    /// Render one model type declaration, registering any
    /// deserialization hooks it needs into `hooks`.
    fn declare_type(
        &self,
        model: &ApiModel,
        model_type: &ModelType,
        hooks: &mut HookRegistry,
    ) -> Result<String>;

    /// Render one method declaration.
    fn declare_method(&self, model: &ApiModel, method: &Method) -> Result<String>;

    /// Runtime source file updated by the version stamper, relative to
    /// the output directory.
    fn stamp_target(&self) -> PathBuf;

    /// Environment-variable prefix stamped into the runtime.
    fn environment_prefix(&self) -> String;

    /// Optional post-write formatter pass. Implementations must degrade
    /// to a warning when the external tool is unavailable; this hook
    /// never fails generation.
    fn reformat(&self, _output_dir: &Path) {}
}
