// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::Any;
use std::path::{Path, PathBuf};
use std::time::Duration;

use kurbo::{Point, Rect, Size, Vec2};
use tracing::{debug, info_span, trace, warn};

use crate::app::{GuiOptions, GuiState};
use crate::core::{
    ConnectionId, DrawList, ErasedAction, Font, InputEvent, MutateCtx, PropertyError, TextEvent,
    TextureCache, Theme, Update, Widget, WidgetArena, WidgetId, WidgetMut, WidgetNode, WidgetRef,
    WidgetState,
};
use crate::file::{self, LoadError, WidgetFactory};
use crate::passes::event::{
    PointerInput, find_widget_under_pointer, run_on_pointer_event_pass, run_on_text_event_pass,
    run_pointer_left_pass, run_window_focus_pass,
};
use crate::passes::focus::{find_next_focusable, set_focus};
use crate::passes::paint::run_paint_pass;
use crate::passes::tooltip::{TooltipState, run_tooltip_pass};
use crate::passes::update::{run_update_pass, uncheck_radio_members};
use crate::passes::{absolute_origin, send_update};
use crate::util::sanitize_opacity;

/// An error from an operation on the widget tree.
#[derive(Debug, thiserror::Error)]
pub enum GuiError {
    /// No widget has this id.
    #[error("no widget with id {0}")]
    UnknownWidget(WidgetId),
    /// Children can only be added to containers.
    #[error("widget {0} is not a container")]
    NotAContainer(WidgetId),
    /// A sibling already has this name.
    #[error("another widget is already named '{0}' here")]
    DuplicateName(String),
    /// A property could not be set.
    #[error(transparent)]
    Property(#[from] PropertyError),
}

/// The root of a widget tree, owned by the host application.
///
/// The application forwards its window events to [`handle_event`](Self::handle_event),
/// calls [`update_time`](Self::update_time) once per frame and draws the result
/// of [`draw`](Self::draw).
///
/// Widgets are referred to by [`WidgetId`]. They are inspected with
/// [`get_widget`](Self::get_widget) and changed with [`edit_widget`](Self::edit_widget).
pub struct Gui {
    pub(crate) arena: WidgetArena,
    pub(crate) global_state: GuiState,
    pub(crate) theme: Theme,
    pub(crate) factory: WidgetFactory,
    pub(crate) tooltip: TooltipState,
    pub(crate) opacity: f32,
    pub(crate) tab_key_usage: bool,
    window_size: Size,
    view: Rect,
    /// The view tracks the window size until it is set explicitly.
    view_follows_window: bool,
}

impl std::fmt::Debug for Gui {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Gui")
            .field("widgets", &self.arena.len())
            .field("view", &self.view)
            .field("focused_widget", &self.global_state.focused_widget)
            .finish_non_exhaustive()
    }
}

// --- MARK: CREATE
impl Gui {
    /// Create an empty `Gui`.
    pub fn new(theme: Theme, factory: WidgetFactory, options: GuiOptions) -> Self {
        let view = Rect::from_origin_size(Point::ORIGIN, options.window_size);
        Self {
            arena: WidgetArena::new(),
            global_state: GuiState::new(&options),
            theme,
            factory,
            tooltip: TooltipState::new(options.tooltip_delay, options.tooltip_distance),
            opacity: sanitize_opacity(options.opacity),
            tab_key_usage: options.tab_key_usage,
            window_size: options.window_size,
            view,
            view_follows_window: true,
        }
    }

    // --- MARK: VIEW

    /// Set the part of the GUI coordinate space shown in the window.
    ///
    /// Window pixels are mapped linearly onto this rectangle.
    pub fn set_view(&mut self, view: Rect) {
        self.view = view;
        self.view_follows_window = false;
    }

    /// The part of the GUI coordinate space shown in the window.
    pub fn view(&self) -> Rect {
        self.view
    }

    /// Tell the `Gui` the size of the window, in pixels.
    pub fn set_window_size(&mut self, size: Size) {
        self.window_size = size;
        if self.view_follows_window {
            self.view = Rect::from_origin_size(Point::ORIGIN, size);
        }
    }

    /// The size of the window, in pixels.
    pub fn window_size(&self) -> Size {
        self.window_size
    }

    /// Convert a position in window pixels to GUI coordinates.
    pub fn map_pixel_to_coords(&self, pixel: Point) -> Point {
        let scale = |view: f64, window: f64| if window > 0.0 { view / window } else { 1.0 };
        Point::new(
            self.view.x0 + pixel.x * scale(self.view.width(), self.window_size.width),
            self.view.y0 + pixel.y * scale(self.view.height(), self.window_size.height),
        )
    }

    // --- MARK: EVENTS

    /// Handle an input event from the window.
    ///
    /// Returns `true` if the event was used by the GUI: the mouse was on a widget,
    /// or a widget handled the key.
    pub fn handle_event(&mut self, event: InputEvent) -> bool {
        if event.is_very_frequent() {
            trace!("Handling {}", event.short_name());
        } else {
            debug!("Handling {}", event.short_name());
        }

        let handled = match event {
            InputEvent::Resized(size) => {
                self.set_window_size(size);
                false
            }
            InputEvent::LostFocus => {
                run_window_focus_pass(self, false);
                false
            }
            InputEvent::GainedFocus => {
                run_window_focus_pass(self, true);
                false
            }
            InputEvent::MouseMoved(position) => {
                let pos = self.map_pixel_to_coords(position);
                run_on_pointer_event_pass(self, PointerInput::Move, pos)
            }
            InputEvent::MouseButtonPressed { button, position } => {
                let pos = self.map_pixel_to_coords(position);
                run_on_pointer_event_pass(self, PointerInput::Down(button), pos)
            }
            InputEvent::MouseButtonReleased { button, position } => {
                let pos = self.map_pixel_to_coords(position);
                run_on_pointer_event_pass(self, PointerInput::Up(button), pos)
            }
            InputEvent::MouseWheelScrolled { delta, position } => {
                let pos = self.map_pixel_to_coords(position);
                run_on_pointer_event_pass(self, PointerInput::Wheel(delta), pos)
            }
            InputEvent::MouseLeft => {
                run_pointer_left_pass(self);
                false
            }
            InputEvent::KeyPressed(key) => {
                run_on_text_event_pass(self, &TextEvent::KeyDown(key)).is_handled()
            }
            InputEvent::KeyReleased(key) => {
                run_on_text_event_pass(self, &TextEvent::KeyUp(key)).is_handled()
            }
            InputEvent::TextEntered(c) => {
                run_on_text_event_pass(self, &TextEvent::Text(c)).is_handled()
            }
        };

        run_update_pass(self);
        handled
    }

    /// Enable or disable moving focus with Tab.
    pub fn set_tab_key_usage_enabled(&mut self, enabled: bool) {
        self.tab_key_usage = enabled;
    }

    /// Whether Tab moves focus between widgets.
    pub fn is_tab_key_usage_enabled(&self) -> bool {
        self.tab_key_usage
    }

    /// Advance time. Call this once per frame.
    ///
    /// Returns `true` if the GUI changed and should be redrawn (a tooltip appeared).
    pub fn update_time(&mut self, elapsed: Duration) -> bool {
        run_tooltip_pass(self, elapsed)
    }

    // --- MARK: DRAW

    /// Paint all visible widgets, back to front, in GUI coordinates.
    pub fn draw(&self) -> DrawList {
        run_paint_pass(self)
    }

    /// Set the opacity of everything drawn. The value is clamped to `0.0..=1.0`.
    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = sanitize_opacity(opacity);
    }

    /// The opacity of everything drawn.
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Set the font used by all widgets.
    pub fn set_font(&mut self, font: Font) {
        self.global_state.font = font;
        self.broadcast_update(&Update::RendererChanged);
    }

    /// The font used by all widgets.
    pub fn font(&self) -> &Font {
        &self.global_state.font
    }

    /// Set the text size of all widgets, existing and future.
    ///
    /// This replaces text sizes set on individual widgets.
    pub fn set_text_size(&mut self, text_size: f64) {
        if !(text_size.is_finite() && text_size > 0.0) {
            warn!("Ignoring invalid text size {text_size}");
            return;
        }
        self.global_state.text_size = text_size;
        let ids: Vec<WidgetId> = self.arena.ids().collect();
        for id in ids {
            if let Some(node) = self.arena.get_mut(id) {
                node.state.text_size = None;
            }
            send_update(self, id, &Update::TextSizeChanged(text_size));
        }
        run_update_pass(self);
    }

    /// The text size used by widgets which don't set their own.
    pub fn text_size(&self) -> f64 {
        self.global_state.text_size
    }

    /// Replace the theme. Every widget is notified with [`Update::RendererChanged`].
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.broadcast_update(&Update::RendererChanged);
    }

    /// The theme giving default renderer properties.
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The factory used to create widgets when loading files.
    pub fn factory_mut(&mut self) -> &mut WidgetFactory {
        &mut self.factory
    }

    fn broadcast_update(&mut self, update: &Update) {
        let ids: Vec<WidgetId> = self.arena.ids().collect();
        for id in ids {
            send_update(self, id, update);
        }
        run_update_pass(self);
    }

    // --- MARK: TEXTURES

    /// The texture cache shared by all widgets.
    pub fn textures(&self) -> &TextureCache {
        &self.global_state.textures
    }

    /// Mutable access to the texture cache, e.g. to load theme textures.
    pub fn textures_mut(&mut self) -> &mut TextureCache {
        &mut self.global_state.textures
    }

    /// Set the directory relative texture paths are resolved against.
    pub fn set_resource_path(&mut self, path: impl Into<PathBuf>) {
        self.global_state.resource_path = path.into();
    }

    /// The directory relative texture paths are resolved against.
    pub fn resource_path(&self) -> &Path {
        &self.global_state.resource_path
    }

    // --- MARK: TOOLTIPS

    /// Set how long the mouse has to rest on a widget before its tooltip is shown.
    pub fn set_tooltip_delay(&mut self, delay: Duration) {
        self.tooltip.delay = delay;
    }

    /// How long the mouse has to rest on a widget before its tooltip is shown.
    pub fn tooltip_delay(&self) -> Duration {
        self.tooltip.delay
    }

    /// Set the offset between the mouse and a tooltip being shown.
    pub fn set_tooltip_distance(&mut self, distance: Vec2) {
        self.tooltip.distance = distance;
    }

    /// The offset between the mouse and a tooltip being shown.
    pub fn tooltip_distance(&self) -> Vec2 {
        self.tooltip.distance
    }

    /// The tooltip widget currently shown, if any.
    pub fn visible_tooltip(&self) -> Option<WidgetId> {
        self.tooltip.visible.map(|(tooltip, _)| tooltip)
    }

    /// Set or remove the tooltip of a widget. Returns the id of the new tooltip widget.
    ///
    /// The tooltip widget is not part of the tree: it is only drawn while shown.
    pub fn set_tooltip(
        &mut self,
        id: WidgetId,
        tooltip: Option<Box<dyn Widget>>,
    ) -> Result<Option<WidgetId>, GuiError> {
        let old = self
            .arena
            .get(id)
            .ok_or(GuiError::UnknownWidget(id))?
            .state
            .tooltip;
        if let Some(old) = old {
            self.remove_subtree(old);
        }
        let new = tooltip.map(|widget| self.create_detached(widget, ""));
        if let Some(node) = self.arena.get_mut(id) {
            node.state.tooltip = new;
        }
        run_update_pass(self);
        Ok(new)
    }

    // --- MARK: TREE

    /// Add a top-level widget. The name may be empty; otherwise it must be unique
    /// among top-level widgets.
    pub fn add(&mut self, widget: impl Widget, name: &str) -> Result<WidgetId, GuiError> {
        self.add_boxed(Box::new(widget), name)
    }

    /// Type-erased variant of [`add`](Self::add).
    pub fn add_boxed(&mut self, widget: Box<dyn Widget>, name: &str) -> Result<WidgetId, GuiError> {
        self.insert_child(None, widget, name)
    }

    /// Add a widget as the frontmost child of a container.
    pub fn add_to(
        &mut self,
        parent: WidgetId,
        widget: impl Widget,
        name: &str,
    ) -> Result<WidgetId, GuiError> {
        self.add_to_boxed(parent, Box::new(widget), name)
    }

    /// Type-erased variant of [`add_to`](Self::add_to).
    pub fn add_to_boxed(
        &mut self,
        parent: WidgetId,
        widget: Box<dyn Widget>,
        name: &str,
    ) -> Result<WidgetId, GuiError> {
        self.insert_child(Some(parent), widget, name)
    }

    fn insert_child(
        &mut self,
        parent: Option<WidgetId>,
        widget: Box<dyn Widget>,
        name: &str,
    ) -> Result<WidgetId, GuiError> {
        if let Some(parent) = parent {
            let node = self.arena.get(parent).ok_or(GuiError::UnknownWidget(parent))?;
            if !node.widget.is_container() {
                return Err(GuiError::NotAContainer(parent));
            }
        }
        if !name.is_empty() && self.arena.find_child_by_name(parent, name).is_some() {
            return Err(GuiError::DuplicateName(name.to_string()));
        }

        let id = self.create_detached(widget, name);
        self.arena.attach(id, parent);
        debug!("Added widget {id} to {parent:?}");
        run_update_pass(self);
        Ok(id)
    }

    /// Insert a widget outside of the tree and send it [`Update::WidgetAdded`].
    pub(crate) fn create_detached(&mut self, widget: Box<dyn Widget>, name: &str) -> WidgetId {
        let id = WidgetId::next();
        let state = WidgetState::new(id, name.to_string());
        self.arena.insert_detached(WidgetNode::new(widget, state));
        send_update(self, id, &Update::WidgetAdded);
        id
    }

    /// Remove a widget, its children and their tooltips.
    pub(crate) fn remove_subtree(&mut self, id: WidgetId) {
        for (removed, node) in self.arena.remove_subtree(id) {
            trace!("Removing widget {removed}");
            self.global_state.forget_widget(removed);
            if self.visible_tooltip() == Some(removed) {
                self.tooltip.visible = None;
            }
            if let Some(tooltip) = node.state.tooltip {
                self.remove_subtree(tooltip);
            }
        }
    }

    /// Find a widget by name.
    ///
    /// Top-level widgets are searched first, then their descendants, breadth first.
    pub fn get(&self, name: &str) -> Option<WidgetId> {
        self.arena.find_descendant_by_name(None, name)
    }

    /// Find a widget by name among the descendants of `parent`.
    pub fn get_in(&self, parent: WidgetId, name: &str) -> Option<WidgetId> {
        self.arena.find_descendant_by_name(Some(parent), name)
    }

    /// The top-level widgets, back to front.
    pub fn widgets(&self) -> &[WidgetId] {
        self.arena.roots()
    }

    /// The children of a widget, back to front.
    pub fn children_of(&self, id: WidgetId) -> &[WidgetId] {
        self.arena.children_of(Some(id))
    }

    /// The parent of a widget, or `None` for top-level widgets.
    pub fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.arena.parent_of(id)
    }

    /// Returns `true` if the widget exists, attached to the tree or not.
    pub fn has_widget(&self, id: WidgetId) -> bool {
        self.arena.contains(id)
    }

    /// Remove a widget and its children. Returns `false` if the widget isn't in the tree.
    ///
    /// Tooltip widgets are not in the tree: use [`set_tooltip`](Self::set_tooltip) to remove them.
    pub fn remove(&mut self, id: WidgetId) -> bool {
        if !self.arena.is_attached(id) {
            debug!("Widget {id} is not in the tree, not removing it");
            return false;
        }
        let _span = info_span!("remove_widget", id = id.trace()).entered();
        self.remove_subtree(id);
        run_update_pass(self);
        true
    }

    /// Remove every top-level widget.
    pub fn remove_all_widgets(&mut self) {
        let roots = self.arena.roots().to_vec();
        for root in roots {
            self.remove_subtree(root);
        }
        run_update_pass(self);
    }

    /// Rename a widget. The name must be unique among its siblings.
    pub fn set_widget_name(&mut self, id: WidgetId, name: &str) -> Result<(), GuiError> {
        if !self.arena.contains(id) {
            return Err(GuiError::UnknownWidget(id));
        }
        let conflict = self
            .arena
            .siblings_of(id)
            .into_iter()
            .any(|sibling| sibling != id && self.arena.get(sibling).is_some_and(|n| n.state.name == name));
        if !name.is_empty() && conflict {
            return Err(GuiError::DuplicateName(name.to_string()));
        }
        if let Some(node) = self.arena.get_mut(id) {
            node.state.name = name.to_string();
        }
        Ok(())
    }

    /// Draw the widget above its siblings. Returns `false` if it isn't in the tree.
    pub fn move_widget_to_front(&mut self, id: WidgetId) -> bool {
        self.arena.move_to_front(id)
    }

    /// Draw the widget below its siblings. Returns `false` if it isn't in the tree.
    pub fn move_widget_to_back(&mut self, id: WidgetId) -> bool {
        self.arena.move_to_back(id)
    }

    /// Uncheck every top-level radio member.
    pub fn uncheck_radio_buttons(&mut self) {
        let roots = self.arena.roots().to_vec();
        uncheck_radio_members(self, &roots, None);
        run_update_pass(self);
    }

    // --- MARK: FOCUS

    /// Focus a widget. Returns `false` if the widget can't be focused.
    pub fn focus_widget(&mut self, id: WidgetId) -> bool {
        set_focus(self, Some(id));
        run_update_pass(self);
        self.global_state.focused_widget == Some(id)
    }

    /// Focus the next widget in tab order, wrapping around.
    /// Returns `false` if no widget can be focused.
    pub fn focus_next_widget(&mut self) -> bool {
        let next = find_next_focusable(self, true);
        set_focus(self, next);
        run_update_pass(self);
        next.is_some()
    }

    /// Focus the previous widget in tab order, wrapping around.
    /// Returns `false` if no widget can be focused.
    pub fn focus_previous_widget(&mut self) -> bool {
        let previous = find_next_focusable(self, false);
        set_focus(self, previous);
        run_update_pass(self);
        previous.is_some()
    }

    /// Remove focus from whichever widget has it.
    pub fn unfocus_all_widgets(&mut self) {
        set_focus(self, None);
        run_update_pass(self);
    }

    /// The focused widget, if any.
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.global_state.focused_widget
    }

    /// The deepest widget under the mouse, if any.
    pub fn hovered_widget(&self) -> Option<WidgetId> {
        self.global_state.hovered_path.first().copied()
    }

    /// The widget on which a mouse button is held down, if any.
    pub fn active_widget(&self) -> Option<WidgetId> {
        self.global_state.active_widget
    }

    /// Whether the window has keyboard focus, as last reported by
    /// [`InputEvent::LostFocus`] and [`InputEvent::GainedFocus`].
    pub fn is_window_focused(&self) -> bool {
        self.global_state.window_focused
    }

    // --- MARK: WIDGET ACCESS

    /// The top-left corner of the widget as drawn, in GUI coordinates.
    ///
    /// This includes the [widget offsets](Widget::widget_offset) of the widget
    /// and its ancestors.
    pub fn widget_origin(&self, id: WidgetId) -> Option<Point> {
        self.arena
            .contains(id)
            .then(|| absolute_origin(self, id).to_point())
    }

    /// The widget which would receive a mouse event at `pos`, in GUI coordinates.
    ///
    /// Disabled widgets are returned too: they block the mouse without reacting to it.
    pub fn find_widget_at(&self, pos: Point) -> Option<WidgetId> {
        find_widget_under_pointer(self, pos)
    }

    /// Get a reference to a widget.
    pub fn get_widget(&self, id: WidgetId) -> Option<WidgetRef<'_, dyn Widget>> {
        WidgetRef::new(&self.arena, &self.theme, &self.global_state, id)
    }

    /// Mutate a widget.
    ///
    /// Requests made by the widget (focus, radio groups) are applied after `f`
    /// returns, and a widget which was hidden or disabled loses focus and hover.
    pub fn edit_widget<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(WidgetMut<'_, dyn Widget>) -> R,
    ) -> Result<R, GuiError> {
        let _span = info_span!("edit_widget", id = id.trace()).entered();
        let result = self
            .with_widget_mut(id, f)
            .ok_or(GuiError::UnknownWidget(id))?;
        run_update_pass(self);
        Ok(result)
    }

    /// Call `f` with a `WidgetMut` without running the update pass afterwards.
    pub(crate) fn with_widget_mut<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(WidgetMut<'_, dyn Widget>) -> R,
    ) -> Option<R> {
        let node = self.arena.get_mut(id)?;
        let defaults = self.theme.for_widget(node.widget.short_type_name());
        let widget_mut = WidgetMut {
            widget: &mut *node.widget,
            ctx: MutateCtx {
                global_state: &mut self.global_state,
                widget_state: &mut node.state,
                renderer: &mut node.renderer,
                defaults,
            },
        };
        Some(f(widget_mut))
    }

    /// Set a renderer property of a widget from its textual form.
    pub fn set_renderer_property(
        &mut self,
        id: WidgetId,
        name: &str,
        value: &str,
    ) -> Result<(), GuiError> {
        self.edit_widget(id, |mut widget| widget.set_renderer_property_text(name, value))??;
        Ok(())
    }

    /// Set a property of a widget from its textual form.
    pub fn set_widget_property(
        &mut self,
        id: WidgetId,
        name: &str,
        value: &str,
    ) -> Result<(), GuiError> {
        self.edit_widget(id, |mut widget| widget.set_property(name, value))??;
        Ok(())
    }

    // --- MARK: ACTIONS

    /// Take the oldest action submitted by any widget.
    pub fn pop_action(&mut self) -> Option<(ErasedAction, WidgetId)> {
        self.global_state.actions.pop_front()
    }

    /// Take the oldest action of type `A`, leaving other actions queued.
    pub fn pop_action_of<A: Any>(&mut self) -> Option<(A, WidgetId)> {
        let actions = &mut self.global_state.actions;
        let index = actions.iter().position(|(action, _)| action.is::<A>())?;
        let (action, source) = actions.remove(index)?;
        match action.downcast::<A>() {
            Ok(action) => Some((action, source)),
            Err(_) => None,
        }
    }

    /// Drop all queued actions.
    pub fn clear_actions(&mut self) {
        self.global_state.actions.clear();
    }

    /// Run `callback` every time the widget submits an action of type `A`.
    ///
    /// The action is still queued for [`pop_action`](Self::pop_action) afterwards.
    pub fn connect<A: Any>(
        &mut self,
        id: WidgetId,
        mut callback: impl FnMut(&A) + 'static,
    ) -> Result<ConnectionId, GuiError> {
        if !self.arena.contains(id) {
            return Err(GuiError::UnknownWidget(id));
        }
        let callback = Box::new(move |action: &dyn Any| {
            if let Some(action) = action.downcast_ref::<A>() {
                callback(action);
            }
        });
        Ok(self
            .global_state
            .connect(id, std::any::TypeId::of::<A>(), callback))
    }

    /// Remove a callback registered with [`connect`](Self::connect).
    /// Returns `false` if it was already removed.
    pub fn disconnect(&mut self, connection: ConnectionId) -> bool {
        self.global_state.disconnect(connection)
    }

    // --- MARK: FILES

    /// Load widgets from the text format.
    ///
    /// On error, nothing in the tree changes. If `replace_existing` is true, the
    /// current widgets are removed once the file was loaded successfully.
    pub fn load_widgets_from_str(&mut self, text: &str, replace_existing: bool) -> Result<(), LoadError> {
        file::load_widgets(self, text, replace_existing)
    }

    /// Load widgets from a file. See [`load_widgets_from_str`](Self::load_widgets_from_str).
    pub fn load_widgets_from_file(
        &mut self,
        path: impl AsRef<Path>,
        replace_existing: bool,
    ) -> Result<(), LoadError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        self.load_widgets_from_str(&text, replace_existing)
    }

    /// Save all widgets in the text format.
    pub fn save_widgets_to_string(&self) -> String {
        file::save_widgets(self).to_text()
    }

    /// Save all widgets to a file.
    pub fn save_widgets_to_file(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        std::fs::write(path, self.save_widgets_to_string())
    }
}
