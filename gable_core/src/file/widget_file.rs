// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Saving the widget tree to the text format, and loading it back.
//!
//! Each widget is a section whose header is its type and optional name.
//! Base properties come first, then widget-specific ones. A `Renderer`
//! section holds the widget's renderer overrides, a `ToolTip` section holds
//! its tooltip widget, and any other section is a child widget.
//!
//! ```text
//! Panel."Sidebar" {
//!     Size = (200, 600);
//!
//!     Button."Ok" {
//!         Position = (10, 10);
//!         Size = (80, 24);
//!         Text = "Ok";
//!
//!         Renderer {
//!             BackgroundColor = #3C3C3C;
//!         }
//!     }
//! }
//! ```

use hashbrown::HashSet;
use kurbo::Point;
use tracing::{debug, info, info_span};

use crate::app::Gui;
use crate::core::{Widget, WidgetId, WidgetRef};
use crate::file::{
    DataNode, LoadError, ParseError, format_bool, format_number, format_pair, quote_string,
    split_header,
};
use crate::passes::update::run_update_pass;
use crate::util::names_match;

const RENDERER_SECTION: &str = "Renderer";
const TOOLTIP_SECTION: &str = "ToolTip";

// --- MARK: SAVE

/// Describe every top-level widget, back to front, as children of a document root.
pub(crate) fn save_widgets(gui: &Gui) -> DataNode {
    let _span = info_span!("save_widgets").entered();
    let mut document = DataNode::new("");
    for &root in gui.widgets() {
        if let Some(widget) = gui.get_widget(root) {
            document.children.push(save_widget(gui, widget));
        }
    }
    debug!("Saved {} top-level widgets", document.children.len());
    document
}

fn save_widget(gui: &Gui, widget: WidgetRef<'_, dyn Widget>) -> DataNode {
    let state = widget.state();
    let widget_type = widget.short_type_name();
    let header = if state.name().is_empty() {
        widget_type.to_string()
    } else {
        format!("{widget_type}.{}", quote_string(state.name()))
    };
    let mut node = DataNode::new(header);

    let position = state.position();
    if position != Point::ORIGIN {
        node.push_property("Position", format_pair(position.x, position.y));
    }
    let size = state.size();
    node.push_property("Size", format_pair(size.width, size.height));
    if !state.is_visible() {
        node.push_property("Visible", format_bool(false));
    }
    if !state.is_enabled() {
        node.push_property("Enabled", format_bool(false));
    }
    if state.opacity() != 1.0 {
        node.push_property("Opacity", format_number(f64::from(state.opacity())));
    }
    if let Some(text_size) = state.text_size_override() {
        node.push_property("TextSize", format_number(text_size));
    }
    for (name, _) in widget.property_list() {
        if let Some(value) = widget.get_property(name) {
            node.push_property(name, value);
        }
    }

    let overrides = widget.renderer_overrides();
    if !overrides.is_empty() {
        let mut renderer = DataNode::new(RENDERER_SECTION);
        for (name, value) in overrides.iter() {
            renderer.push_property(name, value.to_text(gui.resource_path()));
        }
        node.children.push(renderer);
    }

    if let Some(tooltip) = widget.tooltip() {
        let mut section = DataNode::new(TOOLTIP_SECTION);
        section.children.push(save_widget(gui, tooltip));
        node.children.push(section);
    }

    for child in widget.children() {
        node.children.push(save_widget(gui, child));
    }
    node
}

// --- MARK: LOAD

/// Where a freshly created widget goes while the file is being loaded.
enum Placement<'a> {
    /// A top-level widget of the file, attached once everything loaded.
    Top(&'a mut Vec<WidgetId>),
    Child(WidgetId),
    TooltipOf(WidgetId),
}

/// Load the widgets described by `text`.
///
/// Widgets are built outside of the tree and only attached once the whole
/// file was loaded, so a failure leaves the tree untouched.
pub(crate) fn load_widgets(
    gui: &mut Gui,
    text: &str,
    replace_existing: bool,
) -> Result<(), LoadError> {
    let _span = info_span!("load_widgets").entered();
    let document = DataNode::parse(text)?;

    // Staged widgets may submit actions while their properties are set.
    let queued_actions = gui.global_state.actions.len();
    let mut staged = Vec::new();
    gui.global_state.loading_widgets = true;
    let result = stage_document(gui, &document, replace_existing, &mut staged);
    gui.global_state.loading_widgets = false;
    if let Err(err) = result {
        debug!("Loading failed, dropping {} staged widgets", staged.len());
        for id in staged {
            gui.remove_subtree(id);
        }
        gui.global_state.actions.truncate(queued_actions);
        return Err(err);
    }

    if replace_existing {
        let roots = gui.widgets().to_vec();
        for root in roots {
            gui.remove_subtree(root);
        }
    }
    let count = staged.len();
    for id in staged {
        gui.arena.attach(id, None);
    }
    run_update_pass(gui);
    info!("Loaded {count} top-level widgets");
    Ok(())
}

fn stage_document(
    gui: &mut Gui,
    document: &DataNode,
    replace_existing: bool,
    staged: &mut Vec<WidgetId>,
) -> Result<(), LoadError> {
    if let Some((key, _)) = document.properties.first() {
        return Err(LoadError::Structure(format!(
            "property '{key}' is outside of any widget"
        )));
    }

    let mut names = HashSet::new();
    if !replace_existing {
        for &root in gui.widgets() {
            if let Some(node) = gui.arena.get(root)
                && !node.state.name.is_empty()
            {
                names.insert(node.state.name.clone());
            }
        }
    }
    for section in &document.children {
        check_unique_name(section, &mut names)?;
        stage_widget(gui, section, Placement::Top(&mut *staged))?;
    }
    Ok(())
}

fn check_unique_name(section: &DataNode, names: &mut HashSet<String>) -> Result<(), LoadError> {
    let (_, name) = header_parts(section)?;
    if !name.is_empty() && !names.insert(name.clone()) {
        return Err(LoadError::Structure(format!(
            "line {}: another widget is already named '{name}' here",
            section.line
        )));
    }
    Ok(())
}

fn header_parts(section: &DataNode) -> Result<(String, String), LoadError> {
    split_header(&section.header).map_err(|err| {
        LoadError::Parse(ParseError {
            line: section.line,
            ..err
        })
    })
}

fn stage_widget(
    gui: &mut Gui,
    section: &DataNode,
    placement: Placement<'_>,
) -> Result<WidgetId, LoadError> {
    let (widget_type, name) = header_parts(section)?;
    let Some(widget) = gui.factory.create(&widget_type) else {
        return Err(LoadError::UnknownType {
            widget_type,
            line: section.line,
        });
    };

    // Link the widget before anything can fail, so that errors clean it up.
    let id = gui.create_detached(widget, &name);
    match placement {
        Placement::Top(staged) => staged.push(id),
        Placement::Child(parent) => gui.arena.attach(id, Some(parent)),
        Placement::TooltipOf(owner) => {
            if let Some(node) = gui.arena.get_mut(owner) {
                node.state.tooltip = Some(id);
            }
        }
    }
    let describe = || section.header.trim().to_string();

    for (key, value) in &section.properties {
        let result = gui.with_widget_mut(id, |mut widget| widget.set_property(key, value));
        if let Some(Err(source)) = result {
            return Err(LoadError::Property {
                widget: describe(),
                property: key.clone(),
                source,
            });
        }
    }

    let mut child_names = HashSet::new();
    let mut has_tooltip = false;
    for child in &section.children {
        let header = child.header.trim();
        if names_match(header, RENDERER_SECTION) {
            load_renderer(gui, id, child, &describe())?;
        } else if names_match(header, TOOLTIP_SECTION) {
            let [tooltip] = child.children.as_slice() else {
                return Err(LoadError::Structure(format!(
                    "line {}: the tooltip of '{}' must contain exactly one widget",
                    child.line,
                    describe()
                )));
            };
            if has_tooltip {
                return Err(LoadError::Structure(format!(
                    "line {}: '{}' has more than one tooltip",
                    child.line,
                    describe()
                )));
            }
            has_tooltip = true;
            stage_widget(gui, tooltip, Placement::TooltipOf(id))?;
        } else {
            let is_container = gui
                .arena
                .get(id)
                .is_some_and(|node| node.widget.is_container());
            if !is_container {
                return Err(LoadError::Structure(format!(
                    "line {}: '{}' can't have child widgets",
                    child.line,
                    describe()
                )));
            }
            check_unique_name(child, &mut child_names)?;
            stage_widget(gui, child, Placement::Child(id))?;
        }
    }
    Ok(id)
}

fn load_renderer(
    gui: &mut Gui,
    id: WidgetId,
    section: &DataNode,
    widget: &str,
) -> Result<(), LoadError> {
    if let Some(nested) = section.children.first() {
        return Err(LoadError::Structure(format!(
            "line {}: unexpected section '{}' in the renderer of '{widget}'",
            nested.line, nested.header
        )));
    }
    for (key, value) in &section.properties {
        let result =
            gui.with_widget_mut(id, |mut widget| widget.set_renderer_property_text(key, value));
        if let Some(Err(source)) = result {
            return Err(LoadError::Property {
                widget: widget.to_string(),
                property: key.clone(),
                source,
            });
        }
    }
    Ok(())
}

// --- MARK: TESTS

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use kurbo::{Point, Size};

    use super::*;
    use crate::app::GuiOptions;
    use crate::core::{DrawList, PaintCtx, PropertyError, PropertyKind, QueryCtx, Theme, UpdateCtx};
    use crate::file::{WidgetFactory, quote_string, unquote_string};

    #[derive(Default)]
    struct Frame;

    impl Widget for Frame {
        fn paint(&self, _ctx: &PaintCtx<'_>, _scene: &mut DrawList) {}

        fn is_container(&self) -> bool {
            true
        }
    }

    #[derive(Default)]
    struct Tag {
        text: String,
        set_while_loading: bool,
    }

    impl Widget for Tag {
        fn paint(&self, _ctx: &PaintCtx<'_>, _scene: &mut DrawList) {}

        fn set_property(
            &mut self,
            ctx: &mut UpdateCtx<'_>,
            name: &str,
            value: &str,
        ) -> Result<bool, PropertyError> {
            if !names_match(name, "Text") {
                return Ok(false);
            }
            self.text = unquote_string(value)?;
            self.set_while_loading = ctx.is_loading_widgets();
            Ok(true)
        }

        fn get_property(&self, _ctx: &QueryCtx<'_>, name: &str) -> Option<String> {
            names_match(name, "Text").then(|| quote_string(&self.text))
        }

        fn property_list(&self) -> Vec<(&'static str, PropertyKind)> {
            vec![("Text", PropertyKind::String)]
        }
    }

    fn gui() -> Gui {
        let factory = WidgetFactory::new().with::<Frame>().with::<Tag>();
        Gui::new(Theme::new(), factory, GuiOptions::default())
    }

    const FILE: &str = r#"
        Frame."Main" {
            Position = (10, 20);
            Size = (300, 200);

            Tag."Title" {
                Size = (100, 20);
                Text = "Hello";

                Renderer {
                    TextColor = #FF0000;
                }

                ToolTip {
                    Tag {
                        Text = "A tip";
                    }
                }
            }

            Tag {
                Visible = false;
            }
        }
    "#;

    #[test]
    fn load_builds_tree() {
        let mut gui = gui();
        gui.load_widgets_from_str(FILE, false).unwrap();

        let main = gui.get("Main").unwrap();
        assert_eq!(gui.widgets(), &[main]);
        assert_eq!(gui.children_of(main).len(), 2);

        let title = gui.get_in(main, "Title").unwrap();
        let widget = gui.get_widget(title).unwrap();
        assert_eq!(widget.state().size(), Size::new(100.0, 20.0));
        assert_eq!(widget.get_property("Text").as_deref(), Some("\"Hello\""));
        assert!(widget.renderer_overrides().contains("textcolor"));
        let tooltip = widget.tooltip().unwrap();
        assert_eq!(tooltip.get_property("Text").as_deref(), Some("\"A tip\""));

        let position = gui.get_widget(main).unwrap().state().position();
        assert_eq!(position, Point::new(10.0, 20.0));
        let hidden = gui.children_of(main)[1];
        assert!(!gui.get_widget(hidden).unwrap().state().is_visible());
    }

    #[test]
    fn widgets_know_when_they_are_loaded_from_a_file() {
        let mut gui = gui();
        gui.load_widgets_from_str("Tag.\"A\" { Text = \"a\"; }", false)
            .unwrap();
        let id = gui.get("A").unwrap();
        let loaded = |gui: &Gui| {
            let widget = gui.get_widget(id).unwrap();
            widget.downcast::<Tag>().unwrap().set_while_loading
        };
        assert!(loaded(&gui));

        gui.set_widget_property(id, "Text", "\"b\"").unwrap();
        assert!(!loaded(&gui));

        // The flag is reset when loading fails too.
        assert!(gui.load_widgets_from_str("Gadget { }", false).is_err());
        gui.set_widget_property(id, "Text", "\"c\"").unwrap();
        assert!(!loaded(&gui));
    }

    #[test]
    fn save_then_load_gives_same_text() {
        let mut gui = gui();
        gui.load_widgets_from_str(FILE, false).unwrap();
        let saved = gui.save_widgets_to_string();

        let mut other = self::gui();
        other.load_widgets_from_str(&saved, false).unwrap();
        assert_eq!(other.save_widgets_to_string(), saved);
    }

    #[test]
    fn unknown_type_leaves_tree_untouched() {
        let mut gui = gui();
        gui.add(Tag::default(), "Existing").unwrap();
        let before = gui.save_widgets_to_string();

        let result = gui.load_widgets_from_str("Frame { Gadget { } }", true);
        assert_matches!(result, Err(LoadError::UnknownType { widget_type, line: 1 }) if widget_type == "Gadget");
        assert_eq!(gui.save_widgets_to_string(), before);
        assert_eq!(gui.arena.len(), 1);
    }

    #[test]
    fn invalid_property_is_reported() {
        let mut gui = gui();
        let result = gui.load_widgets_from_str("Tag.\"A\" { Size = big; }", false);
        assert_matches!(result, Err(LoadError::Property { widget, property, .. }) if widget == "Tag.\"A\"" && property == "Size");
        assert!(gui.widgets().is_empty());

        let result = gui.load_widgets_from_str("Tag { Color = 3; }", false);
        assert_matches!(
            result,
            Err(LoadError::Property {
                source: PropertyError::Unknown(_),
                ..
            })
        );
    }

    #[test]
    fn structure_errors() {
        let mut gui = gui();
        assert_matches!(
            gui.load_widgets_from_str("Tag { Tag { } }", false),
            Err(LoadError::Structure(_))
        );
        assert_matches!(
            gui.load_widgets_from_str("Frame { Tag.A { } Tag.A { } }", false),
            Err(LoadError::Structure(_))
        );
        assert_matches!(
            gui.load_widgets_from_str("Tag { ToolTip { } }", false),
            Err(LoadError::Structure(_))
        );
        assert_matches!(
            gui.load_widgets_from_str("Size = (1, 1);", false),
            Err(LoadError::Structure(_))
        );
        assert_eq!(gui.arena.len(), 0);
    }

    #[test]
    fn name_conflict_with_existing_widgets() {
        let mut gui = gui();
        gui.add(Frame, "Main").unwrap();
        assert_matches!(
            gui.load_widgets_from_str("Frame.Main { }", false),
            Err(LoadError::Structure(_))
        );
        gui.load_widgets_from_str("Frame.Main { }", true).unwrap();
        assert_eq!(gui.widgets().len(), 1);
    }

    #[test]
    fn syntax_error() {
        let mut gui = gui();
        assert_matches!(
            gui.load_widgets_from_str("Frame {\n Size = (1, 1)\n}", false),
            Err(LoadError::Parse(_))
        );
    }
}
