//! Run-scoped accumulator for deserialization-hook registrations.

/// Deserialization-hook bindings accumulated while model types are
/// declared and flushed once after the last declaration.
///
/// Some target ecosystems' serialization libraries cannot resolve
/// forward references at declaration time; backends register a hook per
/// type here and emit them together in the models epilogue. The registry
/// is created fresh by the emission pipeline for every generation run,
/// so independent runs cannot observe each other's registrations.
#[derive(Debug, Default)]
pub struct HookRegistry {
    hooks: Vec<String>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook binding, in declaration order.
    pub fn register(&mut self, hook: impl Into<String>) {
        self.hooks.push(hook.into());
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Iterate registered hooks in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.hooks.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registration_order_preserved() {
        let mut hooks = HookRegistry::new();
        hooks.register("first");
        hooks.register("second");

        let collected: Vec<_> = hooks.iter().collect();
        assert_eq!(collected, vec!["first", "second"]);
        assert_eq!(hooks.len(), 2);
    }

    #[test]
    fn test_fresh_registry_is_empty() {
        assert!(HookRegistry::new().is_empty());
    }
}
