//! Recursive mapping of model types to Python type expressions.

use sdkgen_codegen::error::{CodegenError, Result};
use sdkgen_codegen::{MappedType, TypeContext};
use sdkgen_ir::{CompositeKind, TypeRef};

/// Python's null literal, used as the default for every optional
/// binding.
pub const NULL: &str = "None";

/// Fixed table mapping spec primitive names to Python types.
fn primitive(name: &str) -> Option<&'static str> {
    Some(match name {
        "number" | "double" | "float" => "float",
        "integer" | "int32" | "int64" => "int",
        "string" | "password" | "uri" => "str",
        "byte" => "bytes",
        "boolean" => "bool",
        "void" => "None",
        "datetime" => "datetime.datetime",
        _ => return None,
    })
}

/// Map a type reference to its Python expression and default literal.
///
/// Composites recurse on the element type and wrap the inner name in the
/// composite's fixed syntax. Named non-primitive types render as a
/// quoted forward reference in model context and qualified under the
/// `models` namespace in method context.
pub fn map_type(type_ref: &TypeRef, context: TypeContext) -> Result<MappedType> {
    if let Some(element) = &type_ref.element {
        let inner = map_type(element, context)?;
        let name = match type_ref.kind {
            Some(CompositeKind::Array) => format!("Sequence[{}]", inner.name),
            Some(CompositeKind::Hash) => format!("MutableMapping[str, {}]", inner.name),
            Some(CompositeKind::DelimArray) => match context {
                // The models module aliases DelimSequence from the runtime.
                TypeContext::Model => format!("DelimSequence[{}]", inner.name),
                TypeContext::Method => format!("models.DelimSequence[{}]", inner.name),
            },
            Some(CompositeKind::Unknown) => {
                return Err(CodegenError::UnsupportedType {
                    kind: "unknown".to_string(),
                });
            }
            None => {
                return Err(CodegenError::UnsupportedType {
                    kind: "unspecified".to_string(),
                });
            }
        };
        return Ok(MappedType::new(name, NULL));
    }

    let Some(name) = &type_ref.name else {
        return Err(CodegenError::InvalidType);
    };
    if let Some(mapped) = primitive(name) {
        return Ok(MappedType::new(mapped, NULL));
    }
    let name = match context {
        TypeContext::Model => format!("\"{name}\""),
        TypeContext::Method => format!("models.{name}"),
    };
    Ok(MappedType::new(name, NULL))
}
