//! Reserved-word escaping for generated local bindings.

/// Language-specific identifier escaping.
///
/// Escaping is a display/binding concern, not a protocol concern: the
/// escaped name is used for the generated local binding only, while the
/// original wire name is emitted wherever an identifier crosses the API
/// boundary (argument-group keys, endpoint templates).
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Reserved words of the target language.
    pub reserved_words: &'static [&'static str],
    /// Fixed suffix appended to a colliding identifier (e.g., "_").
    pub escape_suffix: &'static str,
}

impl NamingConvention {
    /// Check if a name collides with a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Get a safe local binding name, escaping if necessary.
    pub fn safe_name(&self, name: &str) -> String {
        if self.is_reserved(name) {
            format!("{name}{}", self.escape_suffix)
        } else {
            name.to_string()
        }
    }
}
