//! Python backend for the sdkgen binding generator.
//!
//! Generates an `attrs`/`cattrs`-based Python SDK package: one models
//! module, one methods module subclassing the shared authentication and
//! transport runtime, plus the version-stamp and `black` reformat
//! post-steps.

mod backend;
mod naming;
mod type_mapper;

pub use backend::PythonBackend;
pub use naming::PYTHON_NAMING;
pub use type_mapper::map_type;
