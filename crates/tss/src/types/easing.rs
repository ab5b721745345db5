//! Easing-function name registry.
//!
//! Transitions name an easing curve; the curves themselves belong to the
//! animation engine. The parser only validates the name against this
//! injected registry.

use std::collections::HashSet;

/// Easing names available by default.
pub const DEFAULT_EASING: &[&str] = &[
    "none",
    "round",
    "linear",
    "in_sine",
    "in_out_sine",
    "out_sine",
    "in_quad",
    "in_out_quad",
    "out_quad",
    "in_cubic",
    "in_out_cubic",
    "out_cubic",
    "in_quart",
    "in_out_quart",
    "out_quart",
    "in_quint",
    "in_out_quint",
    "out_quint",
    "in_expo",
    "in_out_expo",
    "out_expo",
    "in_circ",
    "in_out_circ",
    "out_circ",
    "in_back",
    "in_out_back",
    "out_back",
    "in_elastic",
    "in_out_elastic",
    "out_elastic",
    "in_bounce",
    "in_out_bounce",
    "out_bounce",
];

/// Injected set of valid easing-function names.
#[derive(Debug, Clone)]
pub struct EasingRegistry {
    names: HashSet<String>,
}

impl Default for EasingRegistry {
    fn default() -> Self {
        Self {
            names: DEFAULT_EASING.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl EasingRegistry {
    /// An empty registry, for hosts that supply their own curves.
    pub fn empty() -> Self {
        Self {
            names: HashSet::new(),
        }
    }

    pub fn register(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_contents() {
        let registry = EasingRegistry::default();
        assert!(registry.contains("in_out_cubic"));
        assert!(registry.contains("linear"));
        assert!(!registry.contains("invalid_easing_function"));
    }
}
