//! The emission pipeline.
//!
//! Single-threaded and strictly ordered: all model types are rendered
//! before any method, and entities are rendered in IR declaration order,
//! so output is deterministic for a fixed model and backend.

use std::path::PathBuf;

use sdkgen_ir::ApiModel;

use crate::error::Result;
use crate::hooks::HookRegistry;
use crate::language::LanguageBackend;

/// One generated source file, with a path relative to the output
/// directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SdkFile {
    pub path: PathBuf,
    pub content: String,
}

/// Generate the SDK sources for `model` with the given backend.
///
/// Produces the models file followed by the methods file. The
/// deserialization-hook registry is created here and owned for exactly
/// one run: every `declare_type` call may register into it, and it is
/// flushed once into the models epilogue after the last type.
pub fn generate_sdk(model: &ApiModel, backend: &dyn LanguageBackend) -> Result<Vec<SdkFile>> {
    let mut hooks = HookRegistry::new();

    let mut models_src = backend.models_prologue();
    for model_type in model.types.values() {
        models_src.push_str(&backend.declare_type(model, model_type, &mut hooks)?);
    }
    models_src.push_str(&backend.models_epilogue(&hooks));

    let mut methods_src = backend.methods_prologue();
    for method in &model.methods {
        methods_src.push_str(&backend.declare_method(model, method)?);
    }
    methods_src.push_str(&backend.methods_epilogue());

    Ok(vec![
        SdkFile {
            path: sdk_path(backend, "models"),
            content: models_src,
        },
        SdkFile {
            path: sdk_path(backend, "methods"),
            content: methods_src,
        },
    ])
}

fn sdk_path(backend: &dyn LanguageBackend, stem: &str) -> PathBuf {
    [
        backend.package_path(),
        "sdk",
        &format!("{stem}.{}", backend.file_extension()),
    ]
    .iter()
    .collect()
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use sdkgen_ir::{HttpVerb, Method, ModelType, TypeRef};

    use super::*;
    use crate::language::{MappedType, TypeContext};

    /// Minimal backend that records rendering order as line-per-entity
    /// output.
    struct TraceBackend;

    impl LanguageBackend for TraceBackend {
        fn language(&self) -> &'static str {
            "trace"
        }

        fn file_extension(&self) -> &'static str {
            "txt"
        }

        fn package_path(&self) -> &str {
            "trace_sdk"
        }

        fn map_type(&self, type_ref: &TypeRef, _context: TypeContext) -> Result<MappedType> {
            Ok(MappedType::new(
                type_ref.name.clone().unwrap_or_default(),
                "nil",
            ))
        }

        fn methods_prologue(&self) -> String {
            "methods:\n".to_string()
        }

        fn models_prologue(&self) -> String {
            "models:\n".to_string()
        }

        fn models_epilogue(&self, hooks: &HookRegistry) -> String {
            let mut out = String::from("hooks:\n");
            for hook in hooks.iter() {
                out.push_str(hook);
                out.push('\n');
            }
            out
        }

        fn declare_type(
            &self,
            _model: &ApiModel,
            model_type: &ModelType,
            hooks: &mut HookRegistry,
        ) -> Result<String> {
            hooks.register(format!("hook({})", model_type.name));
            Ok(format!("type {}\n", model_type.name))
        }

        fn declare_method(&self, _model: &ApiModel, method: &Method) -> Result<String> {
            Ok(format!("method {}\n", method.name))
        }

        fn stamp_target(&self) -> PathBuf {
            Path::new("trace_sdk").join("versions.txt")
        }

        fn environment_prefix(&self) -> String {
            "TRACE".to_string()
        }
    }

    fn model_type(name: &str) -> ModelType {
        ModelType {
            name: name.to_string(),
            description: None,
            properties: vec![],
            writeable: false,
        }
    }

    fn method(name: &str) -> Method {
        Method {
            name: name.to_string(),
            http_method: HttpVerb::Get,
            endpoint: format!("/{name}"),
            params: vec![],
            type_ref: TypeRef::void(),
            summary: None,
        }
    }

    fn sample_model() -> ApiModel {
        let mut model = ApiModel::default();
        model.types.insert("Beta".to_string(), model_type("Beta"));
        model.types.insert("Alpha".to_string(), model_type("Alpha"));
        model.methods.push(method("get_beta"));
        model.methods.push(method("get_alpha"));
        model
    }

    #[test]
    fn test_declaration_order_preserved() {
        let files = generate_sdk(&sample_model(), &TraceBackend).unwrap();

        assert_eq!(files[0].path, PathBuf::from("trace_sdk/sdk/models.txt"));
        assert_eq!(
            files[0].content,
            "models:\ntype Beta\ntype Alpha\nhooks:\nhook(Beta)\nhook(Alpha)\n"
        );
        assert_eq!(files[1].path, PathBuf::from("trace_sdk/sdk/methods.txt"));
        assert_eq!(files[1].content, "methods:\nmethod get_beta\nmethod get_alpha\n");
    }

    #[test]
    fn test_output_is_deterministic() {
        let model = sample_model();
        let first = generate_sdk(&model, &TraceBackend).unwrap();
        let second = generate_sdk(&model, &TraceBackend).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_hooks_do_not_leak_across_runs() {
        let model = sample_model();
        generate_sdk(&model, &TraceBackend).unwrap();
        let files = generate_sdk(&model, &TraceBackend).unwrap();

        // Two runs, still exactly one hook per type.
        let hook_lines = files[0]
            .content
            .lines()
            .filter(|l| l.starts_with("hook("))
            .count();
        assert_eq!(hook_lines, 2);
    }

    #[test]
    fn test_empty_model_renders_prologues_only() {
        let files = generate_sdk(&ApiModel::default(), &TraceBackend).unwrap();
        assert_eq!(files[0].content, "models:\nhooks:\n");
        assert_eq!(files[1].content, "methods:\n");
    }
}
