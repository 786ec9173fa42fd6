// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! The context types that are passed into various widget methods.

use std::any::Any;
use std::path::Path;

use kurbo::{Point, Size};
use tracing::{trace, warn};

use crate::app::GuiState;
use crate::core::{
    ErasedAction, Font, PropertyMap, Renderer, RendererRef, Texture, TextureError, WidgetId,
    WidgetState,
};

// Most methods defined in this file read or write `WidgetState` fields.
// Status flags (hovered, active, focused) are only ever written by the passes.

/// A macro for implementing methods on multiple contexts.
///
/// There are a lot of methods defined on multiple contexts; this lets us only
/// have to write them out once.
macro_rules! impl_context_method {
    ($ty:ty,  { $($method:item)+ } ) => {
        impl $ty { $($method)+ }
    };
    ( $ty:ty, $($more:ty),+, { $($method:item)+ } ) => {
        impl_context_method!($ty, { $($method)+ });
        impl_context_method!($($more),+, { $($method)+ });
    };
}

/// A context provided inside of [`WidgetMut`](crate::core::WidgetMut).
///
/// When you declare a mutable reference type for your widget, methods of this type
/// will have access to a `MutateCtx`.
pub struct MutateCtx<'a> {
    pub(crate) global_state: &'a mut GuiState,
    pub(crate) widget_state: &'a mut WidgetState,
    pub(crate) renderer: &'a mut Renderer,
    pub(crate) defaults: &'a PropertyMap,
}

/// A context provided inside of [`WidgetRef`](crate::core::WidgetRef) and to
/// hit-testing methods.
///
/// This context is passed to methods of widgets requiring shared, read-only access.
#[derive(Clone, Copy)]
pub struct QueryCtx<'a> {
    pub(crate) global_state: &'a GuiState,
    pub(crate) widget_state: &'a WidgetState,
    pub(crate) renderer: &'a Renderer,
    pub(crate) defaults: &'a PropertyMap,
}

/// A context provided to event-handling [`Widget`](crate::core::Widget) methods.
pub struct EventCtx<'a> {
    pub(crate) global_state: &'a mut GuiState,
    pub(crate) widget_state: &'a mut WidgetState,
    pub(crate) renderer: &'a Renderer,
    pub(crate) defaults: &'a PropertyMap,
    pub(crate) target: WidgetId,
    pub(crate) is_handled: bool,
}

/// A context provided to the [`Widget::update`](crate::core::Widget::update) and
/// [`Widget::set_property`](crate::core::Widget::set_property) methods.
pub struct UpdateCtx<'a> {
    pub(crate) global_state: &'a mut GuiState,
    pub(crate) widget_state: &'a mut WidgetState,
    pub(crate) renderer: &'a Renderer,
    pub(crate) defaults: &'a PropertyMap,
}

/// A context passed to the [`Widget::paint`](crate::core::Widget::paint) method.
pub struct PaintCtx<'a> {
    pub(crate) global_state: &'a GuiState,
    pub(crate) widget_state: &'a WidgetState,
    pub(crate) renderer: &'a Renderer,
    pub(crate) defaults: &'a PropertyMap,
}

// --- MARK: GETTERS
// Methods for all context types
impl_context_method!(
    MutateCtx<'_>,
    QueryCtx<'_>,
    EventCtx<'_>,
    UpdateCtx<'_>,
    PaintCtx<'_>,
    {
        /// The `WidgetId` of the current widget.
        pub fn widget_id(&self) -> WidgetId {
            self.widget_state.id
        }

        /// The name of the current widget.
        pub fn name(&self) -> &str {
            &self.widget_state.name
        }

        /// The size of the widget.
        pub fn size(&self) -> Size {
            self.widget_state.size
        }

        /// The position of the widget, relative to its parent.
        pub fn position(&self) -> Point {
            self.widget_state.position
        }

        /// Whether the mouse is on this widget.
        ///
        /// Hovered status is shared by all widgets on the path from the widget
        /// under the mouse to the root, unless a disabled widget stops it.
        pub fn is_hovered(&self) -> bool {
            self.widget_state.is_hovered
        }

        /// Whether a mouse button was pressed on this widget and not released yet.
        pub fn is_active(&self) -> bool {
            self.widget_state.is_active
        }

        /// Whether this widget has keyboard focus.
        pub fn is_focused(&self) -> bool {
            self.widget_state.is_focused
        }

        /// Whether this widget is shown.
        pub fn is_visible(&self) -> bool {
            self.widget_state.visible
        }

        /// Whether this widget is disabled.
        ///
        /// Disabled widgets don't receive pointer or keyboard events.
        pub fn is_disabled(&self) -> bool {
            !self.widget_state.enabled
        }

        /// The opacity of the widget, not including the opacity of its ancestors.
        pub fn opacity(&self) -> f32 {
            self.widget_state.opacity
        }

        /// The effective text size: the one set on this widget, or else the one set on the `Gui`.
        pub fn text_size(&self) -> f64 {
            self.widget_state
                .text_size
                .unwrap_or(self.global_state.text_size)
        }

        /// The font used by all widgets.
        pub fn font(&self) -> &Font {
            &self.global_state.font
        }

        /// Whether the widget is being built from a widget file.
        ///
        /// Properties are then applied in file order, so the size may come
        /// before the content it would have been computed from.
        pub fn is_loading_widgets(&self) -> bool {
            self.global_state.loading_widgets
        }

        /// Whether the host window has keyboard focus.
        pub fn is_window_focused(&self) -> bool {
            self.global_state.window_focused
        }

        /// The renderer properties of this widget, merged with the theme defaults.
        pub fn renderer(&self) -> RendererRef<'_> {
            RendererRef::new(&*self.renderer, self.defaults)
        }

        /// A read-only context for the same widget, as needed by
        /// [`Widget::hit_test`](crate::core::Widget::hit_test) and friends.
        pub fn query_ctx(&self) -> QueryCtx<'_> {
            QueryCtx {
                global_state: &*self.global_state,
                widget_state: &*self.widget_state,
                renderer: &*self.renderer,
                defaults: self.defaults,
            }
        }
    }
);

// --- MARK: UPDATE FLAGS
impl_context_method!(MutateCtx<'_>, EventCtx<'_>, UpdateCtx<'_>, {
    /// Set the size of the widget.
    ///
    /// Unlike [`WidgetMut::set_size`](crate::core::WidgetMut::set_size), this doesn't
    /// send [`Update::SizeChanged`](crate::core::Update::SizeChanged) back to the widget,
    /// so widgets use it to size themselves (e.g. a label fitting its text).
    pub fn set_size(&mut self, size: Size) {
        if !(size.width >= 0.0 && size.height >= 0.0) {
            warn!(
                "Ignoring invalid size {size:?} for widget {}",
                self.widget_state.id
            );
            return;
        }
        self.widget_state.size = size;
    }

    /// Submits an action, which indicates that this widget requires something be handled
    /// by the application, such as user input.
    ///
    /// Callbacks registered with [`Gui::connect`](crate::app::Gui::connect) for this
    /// widget and this action type are run immediately; the action is then queued.
    pub fn submit_action<A: Any>(&mut self, action: A) {
        trace!("submit_action");
        self.global_state
            .submit_action(self.widget_state.id, ErasedAction::new(action));
    }

    /// Submits a type-erased action.
    pub fn submit_untyped_action(&mut self, action: ErasedAction) {
        trace!("submit_untyped_action");
        self.global_state
            .submit_action(self.widget_state.id, action);
    }

    /// Requests keyboard focus.
    ///
    /// The request is applied after the current event or mutation. If multiple
    /// widgets request focus, the last request wins.
    pub fn request_focus(&mut self) {
        trace!("request_focus");
        self.global_state.focus_request = Some(Some(self.widget_state.id));
    }

    /// Gives up keyboard focus.
    ///
    /// This should only be called by the focused widget.
    pub fn resign_focus(&mut self) {
        trace!("resign_focus");
        if self.widget_state.is_focused
            || self.global_state.focus_request == Some(Some(self.widget_state.id))
        {
            self.global_state.focus_request = Some(None);
        } else {
            warn!(
                "resign_focus can only be called by the currently focused widget, not {}",
                self.widget_state.id
            );
        }
    }

    /// Uncheck the radio members which share a parent with this widget.
    ///
    /// The siblings are unchecked after the current event or mutation.
    pub fn uncheck_radio_siblings(&mut self) {
        trace!("uncheck_radio_siblings");
        self.global_state.radio_checks.push(self.widget_state.id);
    }

    /// Load a texture through the `Gui`'s texture cache.
    ///
    /// Relative paths are resolved against the `Gui`'s resource path.
    pub fn load_texture(&mut self, path: &Path) -> Result<Texture, TextureError> {
        if path.as_os_str().is_empty() {
            return Err(TextureError::EmptyPath);
        }
        let full_path = self.global_state.resource_path.join(path);
        self.global_state.textures.load(full_path)
    }

    /// The directory relative texture paths are resolved against.
    pub fn resource_path(&self) -> &Path {
        &self.global_state.resource_path
    }
});

// --- MARK: EVENT HANDLING
impl EventCtx<'_> {
    /// Sets the event as "handled", which stops its propagation to parent
    /// widgets.
    pub fn set_handled(&mut self) {
        trace!("set_handled");
        self.is_handled = true;
    }

    /// Determines whether the event has been handled.
    pub fn is_handled(&self) -> bool {
        self.is_handled
    }

    /// The widget originally targeted by the event.
    ///
    /// This will be different from [`widget_id`](Self::widget_id) during event bubbling.
    pub fn target(&self) -> WidgetId {
        self.target
    }
}

// --- MARK: REBORROW
impl MutateCtx<'_> {
    /// Returns a `MutateCtx` with a shorter lifetime.
    pub fn reborrow_mut(&mut self) -> MutateCtx<'_> {
        MutateCtx {
            global_state: &mut *self.global_state,
            widget_state: &mut *self.widget_state,
            renderer: &mut *self.renderer,
            defaults: self.defaults,
        }
    }

    /// An update context for the same widget, used to call widget methods
    /// from a mutation.
    pub(crate) fn update_ctx(&mut self) -> UpdateCtx<'_> {
        UpdateCtx {
            global_state: &mut *self.global_state,
            widget_state: &mut *self.widget_state,
            renderer: &*self.renderer,
            defaults: self.defaults,
        }
    }
}
