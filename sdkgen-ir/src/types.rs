//! Core type definitions.

use serde::Deserialize;

/// Wrapper kind for composite types.
///
/// `Unknown` captures any kind string the model document declares that
/// this engine does not recognize; the type mapper rejects it with
/// `UnsupportedType` rather than guessing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompositeKind {
    /// Ordered sequence of elements.
    Array,
    /// String-keyed mapping of elements.
    Hash,
    /// Sequence serialized on the wire as a delimited string.
    DelimArray,
    #[serde(other)]
    Unknown,
}

/// A reference to a type in the model.
///
/// A valid reference has either a name (scalar or named model type) or an
/// element type (composite). The model document is external input, so a
/// reference carrying neither is representable here and is rejected by
/// the type mapper at generation time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TypeRef {
    /// Declared type name; absent for anonymous composites.
    #[serde(default)]
    pub name: Option<String>,
    /// Element type for composite kinds.
    #[serde(default)]
    pub element: Option<Box<TypeRef>>,
    /// Composite wrapper kind, as declared in the model document.
    #[serde(default)]
    pub kind: Option<CompositeKind>,
}

impl TypeRef {
    /// A scalar reference: a primitive or a named model type.
    pub fn scalar(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// A sequence of `element`.
    pub fn array(element: TypeRef) -> Self {
        Self::composite(CompositeKind::Array, element)
    }

    /// A string-keyed mapping of `element`.
    pub fn hash(element: TypeRef) -> Self {
        Self::composite(CompositeKind::Hash, element)
    }

    /// A delimited sequence of `element`.
    pub fn delim_array(element: TypeRef) -> Self {
        Self::composite(CompositeKind::DelimArray, element)
    }

    fn composite(kind: CompositeKind, element: TypeRef) -> Self {
        Self {
            name: None,
            element: Some(Box::new(element)),
            kind: Some(kind),
        }
    }

    /// The `void` return type.
    pub fn void() -> Self {
        Self::scalar("void")
    }
}

/// HTTP verb of a method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpVerb {
    Get,
    Head,
    Delete,
    Post,
    Put,
    Patch,
}

impl HttpVerb {
    /// Uppercase wire representation (e.g., "GET").
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Head => "HEAD",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Patch => "PATCH",
        }
    }

    /// Name of the transport operation invoked by generated code.
    pub fn transport_name(&self) -> &'static str {
        match self {
            HttpVerb::Get => "get",
            HttpVerb::Head => "head",
            HttpVerb::Delete => "delete",
            HttpVerb::Post => "post",
            HttpVerb::Put => "put",
            HttpVerb::Patch => "patch",
        }
    }
}

/// Where a parameter travels in the request. Locations are mutually
/// exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamLocation {
    Path,
    Query,
    Header,
    Cookie,
    Body,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scalar_has_name_only() {
        let t = TypeRef::scalar("Thing");
        assert_eq!(t.name.as_deref(), Some("Thing"));
        assert!(t.element.is_none());
        assert!(t.kind.is_none());
    }

    #[test]
    fn test_composite_constructors() {
        let t = TypeRef::array(TypeRef::scalar("string"));
        assert_eq!(t.kind, Some(CompositeKind::Array));
        assert_eq!(t.element.unwrap().name.as_deref(), Some("string"));

        assert_eq!(
            TypeRef::hash(TypeRef::scalar("integer")).kind,
            Some(CompositeKind::Hash)
        );
        assert_eq!(
            TypeRef::delim_array(TypeRef::scalar("integer")).kind,
            Some(CompositeKind::DelimArray)
        );
    }

    #[test]
    fn test_verb_names() {
        assert_eq!(HttpVerb::Get.as_str(), "GET");
        assert_eq!(HttpVerb::Get.transport_name(), "get");
        assert_eq!(HttpVerb::Patch.as_str(), "PATCH");
        assert_eq!(HttpVerb::Patch.transport_name(), "patch");
    }

    #[test]
    fn test_unknown_composite_kind_deserializes() {
        let t: TypeRef = serde_json::from_str(
            r#"{"element": {"name": "string"}, "kind": "tuple"}"#,
        )
        .unwrap();
        assert_eq!(t.kind, Some(CompositeKind::Unknown));
    }

    #[test]
    fn test_verb_deserializes_uppercase() {
        let v: HttpVerb = serde_json::from_str(r#""DELETE""#).unwrap();
        assert_eq!(v, HttpVerb::Delete);
    }
}
