// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Basic types and traits Gable is built on.

mod action;
mod arena;
mod contexts;
mod draw;
mod events;
mod property;
mod renderer;
mod texture;
mod widget;
mod widget_mut;
mod widget_ref;
mod widget_state;

pub use action::{ConnectionId, ErasedAction};
pub use contexts::{EventCtx, MutateCtx, PaintCtx, QueryCtx, UpdateCtx};
pub use draw::{DrawCommand, DrawList, Font};
pub use events::{
    Handled, InputEvent, KeyEvent, PointerButton, PointerEvent, TextEvent, Update,
};
pub use property::{PropertyError, PropertyKind};
pub use renderer::{Outline, PropertyMap, PropertyValue, Renderer, RendererRef, Theme};
pub use texture::{Texture, TextureCache, TextureError};
pub use widget::{AsDynWidget, FromDynWidget, RadioMember, Widget, WidgetId};
pub use widget_mut::{BASE_PROPERTIES, WidgetMut};
pub use widget_ref::WidgetRef;
pub use widget_state::WidgetState;

pub use keyboard_types::{Key, Modifiers};

pub(crate) use arena::{WidgetArena, WidgetNode};
pub(crate) use widget_mut::base_property;
