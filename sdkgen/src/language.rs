//! Unified language dispatch.
//!
//! Backends are selected here by configured language name; adding a
//! target language means adding a backend crate and one match arm.

use sdkgen_codegen::LanguageBackend;
use sdkgen_codegen_python::PythonBackend;

use crate::config::GenConfig;

/// Languages with a registered backend.
pub const SUPPORTED: &[&str] = &["python"];

/// Create the backend for the configured language, if one is
/// registered.
pub fn backend_for(config: &GenConfig) -> Option<Box<dyn LanguageBackend>> {
    match config.language.as_str() {
        "python" => Some(Box::new(PythonBackend::new(
            config.package_name.as_str(),
            config.package_path.as_str(),
        ))),
        _ => None,
    }
}
