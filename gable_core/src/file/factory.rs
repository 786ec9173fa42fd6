// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use hashbrown::HashMap;

use crate::core::Widget;

type Constructor = Box<dyn Fn() -> Box<dyn Widget>>;

/// Creates widgets from the type names used in widget files.
///
/// Every widget type which can appear in a loaded file must be registered
/// under its [short type name](crate::core::Widget::short_type_name).
#[derive(Default)]
pub struct WidgetFactory {
    constructors: HashMap<String, Constructor>,
}

impl fmt::Debug for WidgetFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        f.debug_struct("WidgetFactory")
            .field("types", &names)
            .finish()
    }
}

impl WidgetFactory {
    /// Create a factory which knows no widget type.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a constructor for a widget type. Replaces any previous registration.
    pub fn register(
        &mut self,
        type_name: &str,
        constructor: impl Fn() -> Box<dyn Widget> + 'static,
    ) {
        self.constructors
            .insert(type_name.to_ascii_lowercase(), Box::new(constructor));
    }

    /// Register `W` under its short type name, using its `Default` implementation.
    pub fn register_default<W: Widget + Default>(&mut self) {
        let name = W::default().short_type_name();
        self.register(name, || Box::new(W::default()));
    }

    /// Builder-style variant of [`register_default`](Self::register_default).
    pub fn with<W: Widget + Default>(mut self) -> Self {
        self.register_default::<W>();
        self
    }

    /// Create a widget of the given type, or `None` if the type is unknown.
    pub fn create(&self, type_name: &str) -> Option<Box<dyn Widget>> {
        self.constructors
            .get(&type_name.to_ascii_lowercase())
            .map(|constructor| constructor())
    }

    /// Returns `true` if the type is registered.
    pub fn knows(&self, type_name: &str) -> bool {
        self.constructors
            .contains_key(&type_name.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawList, PaintCtx};

    #[derive(Default)]
    struct Gizmo;

    impl Widget for Gizmo {
        fn paint(&self, _ctx: &PaintCtx<'_>, _scene: &mut DrawList) {}
    }

    #[test]
    fn create_registered_types() {
        let factory = WidgetFactory::new().with::<Gizmo>();
        assert!(factory.knows("Gizmo"));
        assert!(factory.knows("gizmo"));
        let widget = factory.create("Gizmo").unwrap();
        assert_eq!(widget.short_type_name(), "Gizmo");
        assert!(factory.create("Unknown").is_none());
    }
}
