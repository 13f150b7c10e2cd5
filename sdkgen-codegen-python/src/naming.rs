//! Python-specific naming rules.

use sdkgen_codegen::NamingConvention;

/// Python reserved-word escaping: a colliding identifier gains a
/// trailing underscore for its local binding, while the wire name stays
/// untouched wherever it is emitted as a literal.
pub const PYTHON_NAMING: NamingConvention = NamingConvention {
    // keyword.kwlist
    reserved_words: &[
        "False",
        "None",
        "True",
        "and",
        "as",
        "assert",
        "async",
        "await",
        "break",
        "class",
        "continue",
        "def",
        "del",
        "elif",
        "else",
        "except",
        "finally",
        "for",
        "from",
        "global",
        "if",
        "import",
        "in",
        "is",
        "lambda",
        "nonlocal",
        "not",
        "or",
        "pass",
        "raise",
        "return",
        "try",
        "while",
        "with",
        "yield",
    ],
    escape_suffix: "_",
};
