// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::ops::Deref;

use smallvec::SmallVec;

use crate::app::GuiState;
use crate::core::{
    FromDynWidget, QueryCtx, Renderer, Theme, Widget, WidgetArena, WidgetId, WidgetState,
};

/// A rich reference to a [`Widget`].
///
/// A `WidgetRef` carries both a reference to the widget and to the data the
/// library keeps for it. It can [`Deref`] to the referenced widget.
///
/// This type is mostly used to inspect the widget tree. It also implements
/// [`std::fmt::Debug`]; printing it will display its widget subtree.
///
/// This is only for shared access to widgets. For widget mutation, see [`WidgetMut`](crate::core::WidgetMut).
pub struct WidgetRef<'w, W: Widget + ?Sized> {
    pub(crate) ctx: QueryCtx<'w>,
    pub(crate) widget: &'w W,
    pub(crate) arena: &'w WidgetArena,
    pub(crate) theme: &'w Theme,
}

// --- MARK: TRAIT IMPLS

impl<W: Widget + ?Sized> Clone for WidgetRef<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W: Widget + ?Sized> Copy for WidgetRef<'_, W> {}

impl<W: Widget + ?Sized> std::fmt::Debug for WidgetRef<'_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let widget_name = self.widget.short_type_name();
        let display_name = if let Some(debug_text) = self.widget.get_debug_text() {
            format!("{widget_name}<{debug_text}>").into()
        } else {
            std::borrow::Cow::Borrowed(widget_name)
        };

        let children = self.children();

        if children.is_empty() {
            f.write_str(&display_name)
        } else {
            let mut f_tuple = f.debug_tuple(&display_name);
            for child in children {
                f_tuple.field(&child);
            }
            f_tuple.finish()
        }
    }
}

impl<W: Widget + ?Sized> Deref for WidgetRef<'_, W> {
    type Target = W;

    fn deref(&self) -> &Self::Target {
        self.widget
    }
}

// --- MARK: IMPLS

impl<'w> WidgetRef<'w, dyn Widget> {
    pub(crate) fn new(
        arena: &'w WidgetArena,
        theme: &'w Theme,
        global_state: &'w GuiState,
        id: WidgetId,
    ) -> Option<Self> {
        let node = arena.get(id)?;
        let widget = &*node.widget;
        Some(Self {
            ctx: QueryCtx {
                global_state,
                widget_state: &node.state,
                renderer: &node.renderer,
                defaults: theme.for_widget(widget.short_type_name()),
            },
            widget,
            arena,
            theme,
        })
    }
}

impl<'w, W: Widget + ?Sized> WidgetRef<'w, W> {
    /// Gets a [`QueryCtx`] with information about the current widget.
    pub fn ctx(&self) -> &'_ QueryCtx<'w> {
        &self.ctx
    }

    /// Gets the actual referenced `Widget`.
    pub fn inner(self) -> &'w W {
        self.widget
    }

    /// The widget's id.
    pub fn id(&self) -> WidgetId {
        self.ctx.widget_state.id
    }

    /// The generic state of the widget: position, size, flags.
    pub fn state(&self) -> &'w WidgetState {
        self.ctx.widget_state
    }

    /// The renderer properties set on this widget, without theme defaults.
    pub fn renderer_overrides(&self) -> &'w Renderer {
        self.ctx.renderer
    }

    /// The id of the parent widget, or `None` for top-level and detached widgets.
    pub fn parent_id(&self) -> Option<WidgetId> {
        self.arena.parent_of(self.id())
    }

    /// Attempts to downcast to `WidgetRef` of concrete widget type.
    pub fn downcast<W2: Widget + FromDynWidget + ?Sized>(&self) -> Option<WidgetRef<'w, W2>> {
        Some(WidgetRef {
            ctx: self.ctx,
            widget: W2::from_dyn(self.widget.as_dyn())?,
            arena: self.arena,
            theme: self.theme,
        })
    }

    /// Returns `WidgetRef`s to the children of this widget, back to front.
    pub fn children(&self) -> SmallVec<[WidgetRef<'w, dyn Widget>; 16]> {
        self.arena
            .children_of(Some(self.id()))
            .iter()
            .filter_map(|child| {
                WidgetRef::new(self.arena, self.theme, self.ctx.global_state, *child)
            })
            .collect()
    }

    /// The tooltip widget set on this widget, if any.
    pub fn tooltip(&self) -> Option<WidgetRef<'w, dyn Widget>> {
        let tooltip = self.ctx.widget_state.tooltip?;
        WidgetRef::new(self.arena, self.theme, self.ctx.global_state, tooltip)
    }

    /// Returns a type-erased `WidgetRef`.
    pub fn as_dyn(&self) -> WidgetRef<'w, dyn Widget> {
        WidgetRef {
            ctx: self.ctx,
            widget: self.widget.as_dyn(),
            arena: self.arena,
            theme: self.theme,
        }
    }

    /// Recursively finds a child widget with the given id.
    pub fn find_widget_by_id(&self, id: WidgetId) -> Option<WidgetRef<'w, dyn Widget>> {
        if self.id() == id {
            return Some(self.as_dyn());
        }
        if !self.arena.is_ancestor(self.id(), id) {
            return None;
        }
        WidgetRef::new(self.arena, self.theme, self.ctx.global_state, id)
    }
}
