// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::{Any, TypeId};
use std::collections::VecDeque;
use std::path::PathBuf;

use hashbrown::HashMap;
use kurbo::Point;
use tracing::{debug, trace};

use crate::app::GuiOptions;
use crate::core::{ConnectionId, ErasedAction, Font, TextureCache, WidgetId};

pub(crate) struct Connection {
    pub(crate) id: ConnectionId,
    pub(crate) action_type: TypeId,
    pub(crate) callback: Box<dyn FnMut(&dyn Any)>,
}

/// State shared by all widgets of a [`Gui`](crate::app::Gui), reachable from the contexts.
pub(crate) struct GuiState {
    pub(crate) focused_widget: Option<WidgetId>,
    /// Focus change requested by a widget during the current pass.
    /// `Some(None)` means focus should be cleared.
    pub(crate) focus_request: Option<Option<WidgetId>>,
    /// Widgets under the mouse, deepest first.
    pub(crate) hovered_path: Vec<WidgetId>,
    /// The widget on which a mouse button is held down.
    pub(crate) active_widget: Option<WidgetId>,
    pub(crate) window_focused: bool,
    /// Set while widgets are being built from a widget file.
    pub(crate) loading_widgets: bool,
    /// Last mouse position, in GUI coordinates.
    pub(crate) last_mouse_position: Option<Point>,
    pub(crate) text_size: f64,
    pub(crate) font: Font,
    pub(crate) textures: TextureCache,
    pub(crate) resource_path: PathBuf,
    pub(crate) actions: VecDeque<(ErasedAction, WidgetId)>,
    pub(crate) connections: HashMap<WidgetId, Vec<Connection>>,
    next_connection_id: u64,
    /// Radio members which were checked during the current pass.
    pub(crate) radio_checks: Vec<WidgetId>,
}

impl GuiState {
    pub(crate) fn new(options: &GuiOptions) -> Self {
        Self {
            focused_widget: None,
            focus_request: None,
            hovered_path: Vec::new(),
            active_widget: None,
            window_focused: true,
            loading_widgets: false,
            last_mouse_position: None,
            text_size: options.text_size,
            font: options.font.clone(),
            textures: TextureCache::new(),
            resource_path: options.resource_path.clone(),
            actions: VecDeque::new(),
            connections: HashMap::new(),
            next_connection_id: 1,
            radio_checks: Vec::new(),
        }
    }

    /// Run the callbacks connected to `source` for this action type, then queue the action.
    pub(crate) fn submit_action(&mut self, source: WidgetId, action: ErasedAction) {
        debug!("Widget {source} submitted {action:?}");
        if let Some(connections) = self.connections.get_mut(&source) {
            let action_type = action.action_type_id();
            for connection in connections
                .iter_mut()
                .filter(|connection| connection.action_type == action_type)
            {
                trace!("Running callback {:?}", connection.id);
                (connection.callback)(action.as_any());
            }
        }
        self.actions.push_back((action, source));
    }

    pub(crate) fn connect(
        &mut self,
        source: WidgetId,
        action_type: TypeId,
        callback: Box<dyn FnMut(&dyn Any)>,
    ) -> ConnectionId {
        let id = ConnectionId(self.next_connection_id);
        self.next_connection_id += 1;
        self.connections.entry(source).or_default().push(Connection {
            id,
            action_type,
            callback,
        });
        id
    }

    pub(crate) fn disconnect(&mut self, id: ConnectionId) -> bool {
        let mut found = false;
        self.connections.retain(|_, connections| {
            let before = connections.len();
            connections.retain(|connection| connection.id != id);
            found |= connections.len() != before;
            !connections.is_empty()
        });
        found
    }

    /// Forget everything about a widget which was removed from the tree.
    pub(crate) fn forget_widget(&mut self, id: WidgetId) {
        if self.focused_widget == Some(id) {
            self.focused_widget = None;
        }
        if self.focus_request == Some(Some(id)) {
            self.focus_request = None;
        }
        if self.active_widget == Some(id) {
            self.active_widget = None;
        }
        self.hovered_path.retain(|hovered| *hovered != id);
        self.radio_checks.retain(|checked| *checked != id);
        self.connections.remove(&id);
    }
}
