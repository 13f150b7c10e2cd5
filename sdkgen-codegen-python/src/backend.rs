//! Python language backend.
//!
//! Renders the models and methods modules of an attrs-based Python SDK
//! package. Rendering functions take explicit inputs and return text;
//! the only state accumulated across declarations is the
//! deserialization-hook registry threaded in by the emission pipeline.

use std::path::{Path, PathBuf};

use sdkgen_codegen::error::Result;
use sdkgen_codegen::format::run_formatter;
use sdkgen_codegen::{HookRegistry, LanguageBackend, MappedType, TypeContext};
use sdkgen_ir::{ApiModel, CompositeKind, Method, ModelType, Parameter, ParamLocation, Property, TypeRef};

use crate::naming::PYTHON_NAMING;
use crate::type_mapper::{NULL, map_type};

const INDENT: &str = "    ";
const WARN_EDITING: &str =
    "NOTE: Do not edit this file. It is generated by sdkgen and will be overwritten.";

/// Python backend configuration: the SDK class name and the package
/// directory generated sources live under.
pub struct PythonBackend {
    package_name: String,
    package_path: String,
}

impl PythonBackend {
    pub fn new(package_name: impl Into<String>, package_path: impl Into<String>) -> Self {
        Self {
            package_name: package_name.into(),
            package_path: package_path.into(),
        }
    }

    /// One parameter of a method signature, with its doc comment.
    ///
    /// Body parameters use the write-capable variant of their type when
    /// the model declares one; all other locations use the declared type
    /// as-is.
    fn declare_parameter(&self, indent: &str, model: &ApiModel, param: &Parameter) -> Result<String> {
        let type_ref = self.parameter_type(model, param);
        let mapped = map_type(&type_ref, TypeContext::Method)?;
        let binding = PYTHON_NAMING.safe_name(&param.name);

        let mut out = String::new();
        if let Some(description) = &param.description {
            out.push_str(&format!("{indent}# {description}\n"));
        }
        if param.required {
            out.push_str(&format!("{indent}{binding}: {}", mapped.name));
        } else {
            out.push_str(&format!(
                "{indent}{binding}: Optional[{}] = {}",
                mapped.name, mapped.default
            ));
        }
        Ok(out)
    }

    fn parameter_type(&self, model: &ApiModel, param: &Parameter) -> TypeRef {
        if param.location == ParamLocation::Body
            && let Some(name) = &param.type_ref.name
            && let Some(write) = model.write_variant(name)
        {
            return TypeRef::scalar(write.name.clone());
        }
        param.type_ref.clone()
    }

    /// One attribute declaration of a model type.
    fn declare_property(&self, indent: &str, property: &Property) -> Result<String> {
        let mapped = map_type(&property.type_ref, TypeContext::Model)?;
        let binding = PYTHON_NAMING.safe_name(&property.name);
        if property.required {
            Ok(format!("{indent}{binding}: {}", mapped.name))
        } else {
            Ok(format!(
                "{indent}{binding}: Optional[{}] = {}",
                mapped.name, NULL
            ))
        }
    }

    fn method_signature(&self, model: &ApiModel, method: &Method) -> Result<String> {
        let bump = "        ";
        let mapped = map_type(&method.type_ref, TypeContext::Method)?;

        let mut params = Vec::with_capacity(method.params.len());
        for param in &method.params {
            params.push(self.declare_parameter(bump, model, param)?);
        }

        let mut out = format!(
            "{INDENT}# {} {} -> {}\n",
            method.http_method.as_str(),
            method.endpoint,
            mapped.name
        );
        out.push_str(&format!(
            "{INDENT}def {}(\n{bump}self{}{}\n{INDENT}) -> {}:\n",
            method.name,
            if params.is_empty() { "" } else { ",\n" },
            params.join(",\n"),
            mapped.name
        ));
        Ok(out)
    }

    /// The transport call, response-shape assertion, and return.
    fn http_call(&self, model: &ApiModel, method: &Method) -> Result<String> {
        let bump = "        ";
        let mapped = map_type(&method.type_ref, TypeContext::Method)?;

        // The structure type rides first, then each non-empty keyword
        // argument group.
        let mut args = vec![mapped.name.clone()];
        if let Some(group) = arg_group(method.query_params()) {
            args.push(format!("query_params={group}"));
        }
        if let Some(body) = method.body_param() {
            args.push(format!("body={}", PYTHON_NAMING.safe_name(&body.name)));
        }
        if let Some(group) = arg_group(method.header_params()) {
            args.push(format!("headers={group}"));
        }
        if let Some(group) = arg_group(method.cookie_params()) {
            args.push(format!("cookies={group}"));
        }

        let assert_name = match method.type_ref.kind {
            Some(CompositeKind::Array) => "list".to_string(),
            Some(CompositeKind::Hash) => "dict".to_string(),
            _ => mapped.name,
        };
        let assertion = if assert_name == NULL {
            format!("{bump}assert response is {NULL}\n")
        } else {
            format!("{bump}assert isinstance(response, {assert_name})\n")
        };

        let mut out = format!(
            "{bump}response = self.{}(f\"{}\", {})\n",
            method.http_method.transport_name(),
            self.endpoint_template(method),
            args.join(", ")
        );
        out.push_str(&assertion);
        out.push_str(&format!("{bump}return response\n"));
        Ok(out)
    }

    /// Endpoint f-string template. Placeholders interpolate the local
    /// binding, so a path parameter whose name collides with a keyword
    /// switches to the escaped binding; the URL text is unchanged.
    fn endpoint_template(&self, method: &Method) -> String {
        let mut endpoint = method.endpoint.clone();
        for param in method.path_params() {
            let binding = PYTHON_NAMING.safe_name(&param.name);
            if binding != param.name {
                endpoint =
                    endpoint.replace(&format!("{{{}}}", param.name), &format!("{{{binding}}}"));
            }
        }
        endpoint
    }

    fn summary(&self, indent: &str, text: Option<&str>) -> String {
        match text {
            Some(text) => format!("{indent}\"\"\"{text}\"\"\"\n"),
            None => String::new(),
        }
    }

    /// Explicit keyword-only constructor for write-capable types.
    ///
    /// attrs could derive this, but the derived __init__ carries no
    /// inline documentation that downstream editors can surface, so it
    /// is generated explicitly following attr.s(kw_only=True) semantics.
    fn construct(&self, model_type: &ModelType) -> Result<String> {
        // A keyword-only __init__ with zero arguments is not valid
        // Python, so a property-less write type keeps the derived one.
        if !model_type.writeable || model_type.properties.is_empty() {
            return Ok(String::new());
        }
        let bump = "        ";

        let mut args = Vec::with_capacity(model_type.properties.len());
        let mut inits = Vec::with_capacity(model_type.properties.len());
        for property in &model_type.properties {
            let mapped = map_type(&property.type_ref, TypeContext::Model)?;
            let binding = PYTHON_NAMING.safe_name(&property.name);
            if property.required {
                args.push(format!("{binding}: {}", mapped.name));
            } else {
                args.push(format!("{binding}: Optional[{}] = {}", mapped.name, NULL));
            }
            inits.push(format!("{bump}self.{binding} = {binding}"));
        }

        Ok(format!(
            "\n{INDENT}def __init__(self, *, {}):\n{}\n",
            args.join(", "),
            inits.join("\n")
        ))
    }
}

/// Literal keyword-argument mapping for the given parameters, or None
/// when the group is empty. Keys are wire names; values are the escaped
/// local bindings.
fn arg_group<'a>(params: impl Iterator<Item = &'a Parameter>) -> Option<String> {
    let entries: Vec<String> = params
        .map(|p| format!("\"{}\": {}", p.name, PYTHON_NAMING.safe_name(&p.name)))
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(format!("{{{}}}", entries.join(", ")))
    }
}

impl LanguageBackend for PythonBackend {
    fn language(&self) -> &'static str {
        "python"
    }

    fn file_extension(&self) -> &'static str {
        "py"
    }

    fn package_path(&self) -> &str {
        &self.package_path
    }

    fn map_type(&self, type_ref: &TypeRef, context: TypeContext) -> Result<MappedType> {
        map_type(type_ref, context)
    }

    fn methods_prologue(&self) -> String {
        format!(
            "# {WARN_EDITING}\n\
             import datetime\n\
             from typing import MutableMapping, Optional, Sequence\n\
             \n\
             from {path}.rtl import api_methods\n\
             from {path}.sdk import models\n\
             \n\
             \n\
             class {name}(api_methods.APIMethods):\n",
            path = self.package_path,
            name = self.package_name
        )
    }

    fn models_prologue(&self) -> String {
        format!(
            "# {WARN_EDITING}\n\
             import datetime\n\
             from typing import MutableMapping, Optional, Sequence\n\
             \n\
             import attr\n\
             import cattr\n\
             \n\
             from {path}.rtl import model\n\
             from {path}.rtl import serialize as sr\n\
             \n\
             EXPLICIT_NULL = model.EXPLICIT_NULL  # type: ignore\n\
             DelimSequence = model.DelimSequence\n",
            path = self.package_path
        )
    }

    fn models_epilogue(&self, hooks: &HookRegistry) -> String {
        if hooks.is_empty() {
            return String::new();
        }
        let registrations: Vec<&str> = hooks.iter().collect();
        format!(
            "\n\n# cattrs cannot resolve the forward references used above, so a\n\
             # structure hook is registered for every model type after all\n\
             # declarations exist.\n\
             \n\
             import functools  # noqa:E402\n\
             from typing import ForwardRef  # type: ignore  # noqa:E402\n\
             \n\
             structure_hook = functools.partial(sr.structure_hook, globals())  # type: ignore\n\
             {}\n",
            registrations.join("\n")
        )
    }

    fn declare_type(
        &self,
        _model: &ApiModel,
        model_type: &ModelType,
        hooks: &mut HookRegistry,
    ) -> Result<String> {
        let bump = INDENT;
        let b2 = "        ";

        hooks.register(format!(
            "cattr.register_structure_hook(\n{INDENT}ForwardRef(\"{name}\"),  # type: ignore\n{INDENT}structure_hook,  # type: ignore\n)",
            name = model_type.name
        ));

        let mut attrs_args = "auto_attribs=True, kw_only=True".to_string();
        if model_type.writeable && !model_type.properties.is_empty() {
            attrs_args.push_str(", init=False");
        }

        let mut doc_attrs = Vec::with_capacity(model_type.properties.len());
        for property in &model_type.properties {
            let binding = PYTHON_NAMING.safe_name(&property.name);
            match &property.description {
                Some(description) => doc_attrs.push(format!("{b2}{binding}: {description}")),
                None => doc_attrs.push(format!("{b2}{binding}:")),
            }
        }

        let mut out = format!(
            "\n\n@attr.s({attrs_args})\nclass {name}(model.Model):\n{bump}\"\"\"\n",
            name = model_type.name
        );
        if let Some(description) = &model_type.description {
            out.push_str(&format!("{bump}{description}\n\n"));
        }
        out.push_str(&format!("{bump}Attributes:\n"));
        out.push_str(&doc_attrs.join("\n"));
        out.push_str(&format!("\n{bump}\"\"\"\n"));

        for property in &model_type.properties {
            out.push_str(&self.declare_property(bump, property)?);
            out.push('\n');
        }
        out.push_str(&self.construct(model_type)?);
        Ok(out)
    }

    fn declare_method(&self, model: &ApiModel, method: &Method) -> Result<String> {
        let bump = "        ";

        // The auth session runtime owns the authentication lifecycle;
        // these three never go through the generic signature+body path.
        match method.name.as_str() {
            "login" => {
                return Ok(format!(
                    "\n{INDENT}# login() with API credentials is automated in the auth session\n"
                ));
            }
            "login_user" => {
                return Ok(format!(
                    "\n{INDENT}def login_user(self, user_id: int) -> api_methods.APIMethods:\n{bump}return super().login_user(user_id)\n"
                ));
            }
            "logout" => {
                return Ok(format!(
                    "\n{INDENT}def logout(self) -> None:\n{bump}super().logout()\n"
                ));
            }
            _ => {}
        }

        let mut out = String::from("\n");
        out.push_str(&self.method_signature(model, method)?);
        out.push_str(&self.summary(bump, method.summary.as_deref()));
        out.push_str(&self.http_call(model, method)?);
        Ok(out)
    }

    fn stamp_target(&self) -> PathBuf {
        Path::new(&self.package_path)
            .join("rtl")
            .join(format!("versions.{}", self.file_extension()))
    }

    fn environment_prefix(&self) -> String {
        self.package_name.to_uppercase()
    }

    fn reformat(&self, output_dir: &Path) {
        let sdk_dir = output_dir.join(&self.package_path).join("sdk");
        let sdk_dir = sdk_dir.to_string_lossy();
        run_formatter("black", &[sdk_dir.as_ref()]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sdkgen_ir::HttpVerb;

    fn backend() -> PythonBackend {
        PythonBackend::new("AcmeSDK", "acme_sdk")
    }

    fn property(name: &str, type_name: &str, required: bool) -> Property {
        Property {
            name: name.to_string(),
            type_ref: TypeRef::scalar(type_name),
            required,
            description: None,
        }
    }

    #[test]
    fn test_declare_property_required_has_no_default() {
        let out = backend()
            .declare_property("    ", &property("id", "integer", true))
            .unwrap();
        assert_eq!(out, "    id: int");
    }

    #[test]
    fn test_declare_property_optional_wraps_and_defaults() {
        let out = backend()
            .declare_property("    ", &property("title", "string", false))
            .unwrap();
        assert_eq!(out, "    title: Optional[str] = None");
    }

    #[test]
    fn test_declare_property_escapes_keyword_binding() {
        let out = backend()
            .declare_property("    ", &property("class", "string", true))
            .unwrap();
        assert_eq!(out, "    class_: str");
    }

    #[test]
    fn test_arg_group_uses_wire_name_as_key() {
        let params = vec![Parameter {
            name: "class".to_string(),
            location: ParamLocation::Query,
            required: false,
            type_ref: TypeRef::scalar("string"),
            description: None,
        }];
        let group = arg_group(params.iter()).unwrap();
        assert_eq!(group, "{\"class\": class_}");
    }

    #[test]
    fn test_empty_arg_group_is_omitted() {
        assert_eq!(arg_group(std::iter::empty()), None);
    }

    #[test]
    fn test_endpoint_template_rewrites_escaped_placeholder() {
        let method = Method {
            name: "get_scope".to_string(),
            http_method: HttpVerb::Get,
            endpoint: "/scopes/{global}/{id}".to_string(),
            params: vec![
                Parameter {
                    name: "global".to_string(),
                    location: ParamLocation::Path,
                    required: true,
                    type_ref: TypeRef::scalar("string"),
                    description: None,
                },
                Parameter {
                    name: "id".to_string(),
                    location: ParamLocation::Path,
                    required: true,
                    type_ref: TypeRef::scalar("integer"),
                    description: None,
                },
            ],
            type_ref: TypeRef::scalar("Scope"),
            summary: None,
        };
        assert_eq!(
            backend().endpoint_template(&method),
            "/scopes/{global_}/{id}"
        );
    }

    #[test]
    fn test_body_parameter_uses_write_variant() {
        let mut model = ApiModel::default();
        model.types.insert(
            "Thing".to_string(),
            ModelType {
                name: "Thing".to_string(),
                description: None,
                properties: vec![],
                writeable: false,
            },
        );
        model.types.insert(
            "WriteThing".to_string(),
            ModelType {
                name: "WriteThing".to_string(),
                description: None,
                properties: vec![],
                writeable: true,
            },
        );

        let param = Parameter {
            name: "body".to_string(),
            location: ParamLocation::Body,
            required: true,
            type_ref: TypeRef::scalar("Thing"),
            description: None,
        };
        let out = backend().declare_parameter("", &model, &param).unwrap();
        assert_eq!(out, "body: models.WriteThing");

        // Same type outside body position keeps the declared type.
        let query = Parameter {
            location: ParamLocation::Query,
            ..param
        };
        let out = backend().declare_parameter("", &model, &query).unwrap();
        assert_eq!(out, "body: models.Thing");
    }

    #[test]
    fn test_assertion_kind_follows_return_type() {
        let model = ApiModel::default();
        let mut method = Method {
            name: "get_things".to_string(),
            http_method: HttpVerb::Get,
            endpoint: "/things".to_string(),
            params: vec![],
            type_ref: TypeRef::array(TypeRef::scalar("Thing")),
            summary: None,
        };

        let call = backend().http_call(&model, &method).unwrap();
        assert!(call.contains("assert isinstance(response, list)"));

        method.type_ref = TypeRef::hash(TypeRef::scalar("Thing"));
        let call = backend().http_call(&model, &method).unwrap();
        assert!(call.contains("assert isinstance(response, dict)"));

        method.type_ref = TypeRef::void();
        let call = backend().http_call(&model, &method).unwrap();
        assert!(call.contains("assert response is None"));

        method.type_ref = TypeRef::scalar("Thing");
        let call = backend().http_call(&model, &method).unwrap();
        assert!(call.contains("assert isinstance(response, models.Thing)"));
    }

    #[test]
    fn test_auth_methods_short_circuit() {
        let model = ApiModel::default();
        for name in ["login", "login_user", "logout"] {
            let method = Method {
                name: name.to_string(),
                http_method: HttpVerb::Post,
                endpoint: format!("/{name}"),
                params: vec![Parameter {
                    name: "credentials".to_string(),
                    location: ParamLocation::Body,
                    required: true,
                    type_ref: TypeRef::scalar("Credentials"),
                    description: None,
                }],
                type_ref: TypeRef::scalar("AuthToken"),
                summary: None,
            };
            let out = backend().declare_method(&model, &method).unwrap();
            assert!(!out.contains("response ="), "{name} must not issue requests");
            assert!(!out.contains("f\""), "{name} has no endpoint template");
        }
    }

    #[test]
    fn test_property_less_write_type_keeps_derived_init() {
        let model = ApiModel::default();
        let model_type = ModelType {
            name: "WriteEmpty".to_string(),
            description: None,
            properties: vec![],
            writeable: true,
        };
        let mut hooks = HookRegistry::new();
        let out = backend()
            .declare_type(&model, &model_type, &mut hooks)
            .unwrap();
        assert!(!out.contains("def __init__"));
        assert!(!out.contains("init=False"));
    }

    #[test]
    fn test_write_type_with_properties_gets_explicit_init() {
        let model = ApiModel::default();
        let model_type = ModelType {
            name: "WriteThing".to_string(),
            description: None,
            properties: vec![property("title", "string", false)],
            writeable: true,
        };
        let mut hooks = HookRegistry::new();
        let out = backend()
            .declare_type(&model, &model_type, &mut hooks)
            .unwrap();
        assert!(out.contains("@attr.s(auto_attribs=True, kw_only=True, init=False)"));
        assert!(out.contains("def __init__(self, *, title: Optional[str] = None):"));
        assert!(out.contains("self.title = title"));
    }

    #[test]
    fn test_stamp_target_and_env_prefix() {
        let backend = backend();
        assert_eq!(
            backend.stamp_target(),
            PathBuf::from("acme_sdk/rtl/versions.py")
        );
        assert_eq!(backend.environment_prefix(), "ACMESDK");
    }
}
