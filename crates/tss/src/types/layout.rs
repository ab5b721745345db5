//! Layout handles and the layout-name registry.
//!
//! The `layout` property only validates that a named layout exists; the
//! layout algorithms themselves live elsewhere. The registry hands back an
//! opaque, shared [`Layout`] handle that the layout engine downcasts or
//! matches by name.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An opaque handle to a named layout.
pub trait Layout: fmt::Debug + Send + Sync {
    fn name(&self) -> &str;
}

/// Docks children to the edges of their container.
#[derive(Debug, Default)]
pub struct DockLayout;

impl Layout for DockLayout {
    fn name(&self) -> &str {
        "dock"
    }
}

/// Stacks children top to bottom.
#[derive(Debug, Default)]
pub struct VerticalLayout;

impl Layout for VerticalLayout {
    fn name(&self) -> &str {
        "vertical"
    }
}

/// Arranges children left to right.
#[derive(Debug, Default)]
pub struct HorizontalLayout;

impl Layout for HorizontalLayout {
    fn name(&self) -> &str {
        "horizontal"
    }
}

/// Arranges children in a grid.
#[derive(Debug, Default)]
pub struct GridLayout;

impl Layout for GridLayout {
    fn name(&self) -> &str {
        "grid"
    }
}

/// Injected mapping from layout name to layout handle.
#[derive(Debug, Clone)]
pub struct LayoutRegistry {
    layouts: HashMap<String, Arc<dyn Layout>>,
}

impl Default for LayoutRegistry {
    fn default() -> Self {
        let mut registry = Self {
            layouts: HashMap::new(),
        };
        registry.register(Arc::new(DockLayout));
        registry.register(Arc::new(VerticalLayout));
        registry.register(Arc::new(HorizontalLayout));
        registry.register(Arc::new(GridLayout));
        registry
    }
}

impl LayoutRegistry {
    /// An empty registry, for hosts that supply their own layouts.
    pub fn empty() -> Self {
        Self {
            layouts: HashMap::new(),
        }
    }

    pub fn register(&mut self, layout: Arc<dyn Layout>) {
        self.layouts.insert(layout.name().to_string(), layout);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Layout>> {
        self.layouts.get(name).cloned()
    }

    /// Registered names, sorted for stable error messages.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.layouts.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
