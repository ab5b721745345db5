//! The validated style record attached to each rule.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::{Color, Layout, ScalarOffset, Spacing, Transition};

/// Validated property values for one rule.
///
/// Every field has a neutral default; declarations overwrite fields in
/// encounter order, so a later declaration always wins over an earlier
/// one for the sides or sub-fields it mentions.
#[derive(Debug, Clone)]
pub struct Styles {
    /// Foreground color.
    pub color: Option<Color>,
    /// Background color.
    pub background: Option<Color>,
    /// Layout handle resolved from the layout registry.
    pub layout: Option<Arc<dyn Layout>>,
    /// Visual position adjustment after layout.
    pub offset: ScalarOffset,
    pub margin: Spacing,
    pub padding: Spacing,
    /// Opacity in `[0.0, 1.0]`; out-of-range input is clamped, not rejected.
    pub opacity: f64,
    /// Property-name to transition mapping.
    pub transitions: HashMap<String, Transition>,
}

impl Default for Styles {
    fn default() -> Self {
        Self {
            color: None,
            background: None,
            layout: None,
            offset: ScalarOffset::default(),
            margin: Spacing::default(),
            padding: Spacing::default(),
            opacity: 1.0,
            transitions: HashMap::new(),
        }
    }
}
