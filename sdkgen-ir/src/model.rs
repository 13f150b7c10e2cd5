//! The API model consumed by code generation.

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{HttpVerb, ParamLocation, TypeRef};

/// The full model of a REST API: declaration-ordered named types and
/// methods.
///
/// Iteration order of `types` and `methods` is the declaration order of
/// the source document; the emission pipeline depends on it for
/// reproducible output.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiModel {
    /// Named model types, keyed by type name.
    #[serde(default)]
    pub types: IndexMap<String, ModelType>,
    /// API methods in declaration order.
    #[serde(default)]
    pub methods: Vec<Method>,
}

impl ApiModel {
    /// Look up the write-capable variant of a named type, if the model
    /// declares one. Write variants follow the `Write{Base}` naming
    /// convention and carry only mutable properties.
    pub fn write_variant(&self, name: &str) -> Option<&ModelType> {
        let candidate = format!("Write{name}");
        self.types.get(&candidate).filter(|t| t.writeable)
    }
}

/// A named model type.
#[derive(Debug, Clone, Deserialize)]
pub struct ModelType {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Properties in declaration order.
    #[serde(default)]
    pub properties: Vec<Property>,
    /// True for write-capable variants, which restrict themselves to
    /// mutable properties and receive an explicit constructor.
    #[serde(default)]
    pub writeable: bool,
}

/// A property of a model type.
#[derive(Debug, Clone, Deserialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub description: Option<String>,
}

/// An API method.
#[derive(Debug, Clone, Deserialize)]
pub struct Method {
    pub name: String,
    pub http_method: HttpVerb,
    /// Endpoint template with `{name}` path placeholders.
    pub endpoint: String,
    /// Parameters in declaration order.
    #[serde(default)]
    pub params: Vec<Parameter>,
    /// Declared return type.
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub summary: Option<String>,
}

impl Method {
    /// Parameters at the given location, in declaration order.
    pub fn params_at(&self, location: ParamLocation) -> impl Iterator<Item = &Parameter> {
        self.params.iter().filter(move |p| p.location == location)
    }

    pub fn path_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params_at(ParamLocation::Path)
    }

    pub fn query_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params_at(ParamLocation::Query)
    }

    pub fn header_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params_at(ParamLocation::Header)
    }

    pub fn cookie_params(&self) -> impl Iterator<Item = &Parameter> {
        self.params_at(ParamLocation::Cookie)
    }

    /// The body parameter, if any. Locations are mutually exclusive and a
    /// method carries at most one body.
    pub fn body_param(&self) -> Option<&Parameter> {
        self.params_at(ParamLocation::Body).next()
    }
}

/// A parameter of a method.
#[derive(Debug, Clone, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub location: ParamLocation,
    #[serde(default)]
    pub required: bool,
    #[serde(rename = "type")]
    pub type_ref: TypeRef,
    #[serde(default)]
    pub description: Option<String>,
}
