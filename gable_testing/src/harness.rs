// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Tools and infrastructure for testing widgets.

use std::any::Any;
use std::time::Duration;

use tracing::debug;

use gable_core::app::{Gui, GuiOptions, try_init_test_tracing};
use gable_core::core::{
    DrawList, ErasedAction, InputEvent, Key, KeyEvent, Modifiers, PointerButton, Theme, Widget,
    WidgetId, WidgetMut, WidgetRef,
};
use gable_core::file::WidgetFactory;
use gable_core::kurbo::{Point, Size};

/// A headless environment to test widgets in.
///
/// `TestHarness` owns a [`Gui`] and simulates the window around it.
///
/// ## Workflow
///
/// - Create a harness and add some widgets.
/// - Send events to the widgets as if you were a user interacting with a window.
/// - Check that the state of the widget tree matches what you expect.
///
/// The last part is done by getting [`WidgetRef`]s with [`get_widget`](Self::get_widget),
/// by checking the actions submitted by widgets with [`pop_action`](Self::pop_action),
/// or by inspecting what [`draw`](Self::draw) returns.
///
/// ## Example
///
/// ```
/// use gable_core::core::{DrawList, EventCtx, PaintCtx, PointerEvent, Theme, Widget};
/// use gable_core::file::WidgetFactory;
/// use gable_core::kurbo::Size;
/// use gable_testing::TestHarness;
///
/// struct Clickable;
///
/// impl Widget for Clickable {
///     fn on_pointer_event(&mut self, ctx: &mut EventCtx<'_>, event: &PointerEvent) {
///         if matches!(event, PointerEvent::Up { .. }) && ctx.is_active() {
///             ctx.submit_action("clicked");
///         }
///     }
///
///     fn paint(&self, _ctx: &PaintCtx<'_>, _scene: &mut DrawList) {}
/// }
///
/// let mut harness = TestHarness::create(Theme::new(), WidgetFactory::new());
/// let id = harness.add(Clickable, "clickable");
/// harness.edit_widget(id, |mut widget| widget.set_size(Size::new(50., 20.)));
///
/// harness.mouse_click_on(id);
/// assert_eq!(harness.pop_action::<&str>(), Some(("clicked", id)));
/// ```
pub struct TestHarness {
    gui: Gui,
    mouse_position: Point,
    modifiers: Modifiers,
}

impl std::fmt::Debug for TestHarness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TestHarness")
            .field("gui", &self.gui)
            .field("mouse_position", &self.mouse_position)
            .finish_non_exhaustive()
    }
}

// --- MARK: CREATE
impl TestHarness {
    /// Builds harness with an empty GUI, using the default options.
    pub fn create(theme: Theme, factory: WidgetFactory) -> Self {
        Self::create_with(theme, factory, GuiOptions::default())
    }

    /// Builds harness with an empty GUI and a window of the given size.
    pub fn create_with_size(theme: Theme, factory: WidgetFactory, window_size: Size) -> Self {
        Self::create_with(
            theme,
            factory,
            GuiOptions::default().with_window_size(window_size),
        )
    }

    /// Builds harness with an empty GUI and custom options.
    pub fn create_with(theme: Theme, factory: WidgetFactory, options: GuiOptions) -> Self {
        // If there is an error setting the subscriber, another test in the same
        // process already set one up.
        let _ = try_init_test_tracing();

        Self {
            gui: Gui::new(theme, factory, options),
            mouse_position: Point::ORIGIN,
            modifiers: Modifiers::empty(),
        }
    }

    /// Add a top-level widget.
    ///
    /// ## Panics
    ///
    /// If a top-level widget already has this name.
    #[track_caller]
    pub fn add(&mut self, widget: impl Widget, name: &str) -> WidgetId {
        self.gui
            .add(widget, name)
            .unwrap_or_else(|err| panic!("could not add widget '{name}': {err}"))
    }

    /// Add a widget to a container.
    ///
    /// ## Panics
    ///
    /// If the parent isn't a container, or a sibling already has this name.
    #[track_caller]
    pub fn add_to(&mut self, parent: WidgetId, widget: impl Widget, name: &str) -> WidgetId {
        self.gui
            .add_to(parent, widget, name)
            .unwrap_or_else(|err| panic!("could not add widget '{name}' to {parent}: {err}"))
    }

    // --- MARK: EVENTS

    /// Send an event to the GUI, as the window would.
    pub fn process_event(&mut self, event: InputEvent) -> bool {
        self.gui.handle_event(event)
    }

    /// Move the mouse, in window pixels.
    pub fn mouse_move(&mut self, pos: impl Into<Point>) -> bool {
        let pos = pos.into();
        self.mouse_position = pos;
        debug!("Harness mouse moved to {}, {}", pos.x, pos.y);
        self.process_event(InputEvent::MouseMoved(pos))
    }

    /// Press a mouse button at the current mouse position.
    pub fn mouse_button_press(&mut self, button: PointerButton) -> bool {
        self.process_event(InputEvent::MouseButtonPressed {
            button,
            position: self.mouse_position,
        })
    }

    /// Release a mouse button at the current mouse position.
    pub fn mouse_button_release(&mut self, button: PointerButton) -> bool {
        self.process_event(InputEvent::MouseButtonReleased {
            button,
            position: self.mouse_position,
        })
    }

    /// Scroll the wheel at the current mouse position.
    pub fn mouse_wheel(&mut self, delta: f64) -> bool {
        self.process_event(InputEvent::MouseWheelScrolled {
            delta,
            position: self.mouse_position,
        })
    }

    /// Move the mouse out of the window.
    pub fn mouse_leave(&mut self) {
        self.process_event(InputEvent::MouseLeft);
    }

    /// Send events that lead to a given widget being clicked with the left button.
    ///
    /// ## Panics
    ///
    /// See [`mouse_move_to`](Self::mouse_move_to).
    #[track_caller]
    pub fn mouse_click_on(&mut self, id: WidgetId) {
        self.mouse_move_to(id);
        self.mouse_button_press(PointerButton::Left);
        self.mouse_button_release(PointerButton::Left);
    }

    /// Move the mouse to the center of the given widget.
    ///
    /// ## Panics
    ///
    /// - If the widget is not found in the tree.
    /// - If the widget is disabled.
    /// - If another widget covers its center.
    #[track_caller]
    pub fn mouse_move_to(&mut self, id: WidgetId) {
        let widget = self.get_widget(id);
        if widget.ctx().is_disabled() {
            panic!("Widget {id} is disabled");
        }
        let Some(origin) = self.gui.widget_origin(id) else {
            panic!("could not find widget {id}");
        };
        let center = origin + (widget.ctx().size() / 2.0).to_vec2();
        if self.gui.find_widget_at(center) != Some(id) {
            panic!("Widget {id} is not visible at its center {center:?}");
        }
        // The harness window shows the GUI without scaling unless the view was changed.
        let view = self.gui.view();
        let window = self.gui.window_size();
        let pixel = Point::new(
            (center.x - view.x0) * window.width / view.width(),
            (center.y - view.y0) * window.height / view.height(),
        );
        self.mouse_move(pixel);
    }

    /// Set the modifiers held down for subsequent key events.
    pub fn set_modifiers(&mut self, modifiers: Modifiers) {
        self.modifiers = modifiers;
    }

    /// Press and release a key. Returns `true` if the key press was handled.
    pub fn press_key(&mut self, key: Key) -> bool {
        let event = KeyEvent::with_modifiers(key, self.modifiers);
        let handled = self.process_event(InputEvent::KeyPressed(event.clone()));
        self.process_event(InputEvent::KeyReleased(event));
        handled
    }

    /// Press Tab, with Shift if `shift` is true.
    pub fn press_tab_key(&mut self, shift: bool) -> bool {
        let modifiers = if shift {
            Modifiers::SHIFT
        } else {
            Modifiers::empty()
        };
        let event = KeyEvent::with_modifiers(Key::Tab, modifiers);
        let handled = self.process_event(InputEvent::KeyPressed(event.clone()));
        self.process_event(InputEvent::KeyReleased(event));
        handled
    }

    /// Send a [`TextEntered`](InputEvent::TextEntered) event for each character.
    pub fn keyboard_type_chars(&mut self, text: &str) {
        for c in text.chars() {
            self.process_event(InputEvent::TextEntered(c));
        }
    }

    /// Focus a widget, or clear the focus.
    ///
    /// ## Panics
    ///
    /// If the widget can't be focused.
    #[track_caller]
    pub fn focus_on(&mut self, id: Option<WidgetId>) {
        match id {
            Some(id) => {
                let succeeded = self.gui.focus_widget(id);
                assert!(succeeded, "Cannot focus widget {id}");
            }
            None => self.gui.unfocus_all_widgets(),
        }
    }

    /// Let time pass. Returns `true` if a tooltip appeared.
    pub fn advance_time(&mut self, elapsed: Duration) -> bool {
        self.gui.update_time(elapsed)
    }

    /// Let `ms` milliseconds pass.
    pub fn advance_time_ms(&mut self, ms: u64) -> bool {
        self.advance_time(Duration::from_millis(ms))
    }

    // --- MARK: GETTERS

    /// The GUI driven by this harness.
    pub fn gui(&self) -> &Gui {
        &self.gui
    }

    /// Mutable access to the GUI driven by this harness.
    pub fn gui_mut(&mut self) -> &mut Gui {
        &mut self.gui
    }

    /// Paint the GUI.
    pub fn draw(&self) -> DrawList {
        self.gui.draw()
    }

    /// Return a [`WidgetRef`] to the widget with the given id.
    ///
    /// ## Panics
    ///
    /// Panics if no widget with this id can be found.
    #[track_caller]
    pub fn get_widget(&self, id: WidgetId) -> WidgetRef<'_, dyn Widget> {
        self.gui
            .get_widget(id)
            .unwrap_or_else(|| panic!("could not find widget {id}"))
    }

    /// Try to return a [`WidgetRef`] to the widget with the given id.
    pub fn try_get_widget(&self, id: WidgetId) -> Option<WidgetRef<'_, dyn Widget>> {
        self.gui.get_widget(id)
    }

    /// The id of the focused widget.
    pub fn focused_widget(&self) -> Option<WidgetId> {
        self.gui.focused_widget()
    }

    /// The id of the deepest widget under the mouse.
    pub fn hovered_widget(&self) -> Option<WidgetId> {
        self.gui.hovered_widget()
    }

    /// Get a [`WidgetMut`] to a specific widget.
    ///
    /// Because of how `WidgetMut` works, it can only be passed to a user-provided callback.
    ///
    /// ## Panics
    ///
    /// Panics if no widget with this id can be found.
    #[track_caller]
    pub fn edit_widget<R>(
        &mut self,
        id: WidgetId,
        f: impl FnOnce(WidgetMut<'_, dyn Widget>) -> R,
    ) -> R {
        self.gui
            .edit_widget(id, f)
            .unwrap_or_else(|err| panic!("could not edit widget: {err}"))
    }

    /// Pop the oldest action of type `A` submitted by any widget.
    pub fn pop_action<A: Any>(&mut self) -> Option<(A, WidgetId)> {
        self.gui.pop_action_of::<A>()
    }

    /// Pop the oldest action submitted by any widget, whatever its type.
    pub fn pop_action_erased(&mut self) -> Option<(ErasedAction, WidgetId)> {
        self.gui.pop_action()
    }
}
