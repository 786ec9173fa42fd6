// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

//! Storage for the widget tree.

use hashbrown::HashMap;

use crate::core::{Renderer, Widget, WidgetId, WidgetState};

/// A widget along with the data the library keeps for it.
pub(crate) struct WidgetNode {
    pub(crate) widget: Box<dyn Widget>,
    pub(crate) state: WidgetState,
    pub(crate) renderer: Renderer,
    pub(crate) parent: Option<WidgetId>,
    /// Children in z-order: the last child is drawn on top.
    ///
    /// This is also the order in which Tab moves focus.
    pub(crate) children: Vec<WidgetId>,
}

impl WidgetNode {
    pub(crate) fn new(widget: Box<dyn Widget>, state: WidgetState) -> Self {
        Self {
            widget,
            state,
            renderer: Renderer::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

/// All widgets of a [`Gui`](crate::app::Gui), keyed by id.
///
/// Top-level widgets form the `roots` list. Nodes without a parent which are
/// not in that list are "detached": tooltips and widgets being loaded.
#[derive(Default)]
pub(crate) struct WidgetArena {
    nodes: HashMap<WidgetId, WidgetNode>,
    roots: Vec<WidgetId>,
}

impl WidgetArena {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn contains(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub(crate) fn get(&self, id: WidgetId) -> Option<&WidgetNode> {
        self.nodes.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: WidgetId) -> Option<&mut WidgetNode> {
        self.nodes.get_mut(&id)
    }

    pub(crate) fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.nodes.keys().copied()
    }

    /// Insert a node without attaching it anywhere.
    pub(crate) fn insert_detached(&mut self, node: WidgetNode) -> WidgetId {
        let id = node.state.id;
        if self.nodes.insert(id, node).is_some() {
            crate::debug_panic!("Widget {id} was inserted twice");
        }
        id
    }

    /// Attach a detached node, as the last (frontmost) child of `parent`,
    /// or as a top-level widget if `parent` is `None`.
    pub(crate) fn attach(&mut self, id: WidgetId, parent: Option<WidgetId>) {
        debug_assert!(self.nodes.get(&id).is_some_and(|n| n.parent.is_none()));
        match parent {
            Some(parent_id) => {
                let Some(parent) = self.nodes.get_mut(&parent_id) else {
                    crate::debug_panic!("Cannot attach {id} to unknown parent {parent_id}");
                    return;
                };
                parent.children.push(id);
                if let Some(node) = self.nodes.get_mut(&id) {
                    node.parent = Some(parent_id);
                }
            }
            None => self.roots.push(id),
        }
    }

    /// Unlink a node from its parent (or from the top-level list), keeping its subtree.
    pub(crate) fn detach(&mut self, id: WidgetId) {
        let parent = self.nodes.get_mut(&id).and_then(|node| node.parent.take());
        let siblings = match parent {
            Some(parent_id) => match self.nodes.get_mut(&parent_id) {
                Some(parent) => &mut parent.children,
                None => return,
            },
            None => &mut self.roots,
        };
        siblings.retain(|sibling| *sibling != id);
    }

    /// Remove a node and all of its descendants. Returns the removed nodes, parents first.
    pub(crate) fn remove_subtree(&mut self, id: WidgetId) -> Vec<(WidgetId, WidgetNode)> {
        if !self.nodes.contains_key(&id) {
            return Vec::new();
        }
        self.detach(id);

        let mut removed = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.nodes.remove(&current) {
                stack.extend(node.children.iter().rev().copied());
                removed.push((current, node));
            }
        }
        removed
    }

    /// The top-level widgets, back to front.
    pub(crate) fn roots(&self) -> &[WidgetId] {
        &self.roots
    }

    pub(crate) fn parent_of(&self, id: WidgetId) -> Option<WidgetId> {
        self.nodes.get(&id).and_then(|node| node.parent)
    }

    /// Children of `parent`, back to front. `None` means the top-level widgets.
    pub(crate) fn children_of(&self, parent: Option<WidgetId>) -> &[WidgetId] {
        match parent {
            Some(id) => self
                .nodes
                .get(&id)
                .map(|node| node.children.as_slice())
                .unwrap_or_default(),
            None => &self.roots,
        }
    }

    /// The widget and its ancestors, starting with the widget itself.
    pub(crate) fn path_to_root(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(current_id) = current {
            if !self.nodes.contains_key(&current_id) {
                break;
            }
            path.push(current_id);
            current = self.parent_of(current_id);
        }
        path
    }

    /// The topmost ancestor of `id`, which may be `id` itself.
    pub(crate) fn top_of(&self, id: WidgetId) -> WidgetId {
        self.path_to_root(id).last().copied().unwrap_or(id)
    }

    /// Whether the widget is part of the visible tree rather than detached.
    pub(crate) fn is_attached(&self, id: WidgetId) -> bool {
        self.nodes.contains_key(&id) && self.roots.contains(&self.top_of(id))
    }

    /// Returns `true` if `ancestor` is a strict ancestor of `id`.
    pub(crate) fn is_ancestor(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        ancestor != id && self.path_to_root(id).contains(&ancestor)
    }

    /// The children list the widget belongs to: its parent's children, or the top-level list.
    fn siblings_mut(&mut self, id: WidgetId) -> Option<&mut Vec<WidgetId>> {
        match self.nodes.get(&id)?.parent {
            Some(parent_id) => self.nodes.get_mut(&parent_id).map(|p| &mut p.children),
            None => self.roots.contains(&id).then_some(&mut self.roots),
        }
    }

    /// The widgets sharing a parent with `id`, including `id` itself.
    pub(crate) fn siblings_of(&self, id: WidgetId) -> Vec<WidgetId> {
        match self.nodes.get(&id).and_then(|node| node.parent) {
            Some(parent_id) => self.children_of(Some(parent_id)).to_vec(),
            None if self.roots.contains(&id) => self.roots.clone(),
            None => vec![id],
        }
    }

    /// Move the widget so that it is drawn on top of its siblings.
    pub(crate) fn move_to_front(&mut self, id: WidgetId) -> bool {
        let Some(siblings) = self.siblings_mut(id) else {
            return false;
        };
        siblings.retain(|sibling| *sibling != id);
        siblings.push(id);
        true
    }

    /// Move the widget so that it is drawn below its siblings.
    pub(crate) fn move_to_back(&mut self, id: WidgetId) -> bool {
        let Some(siblings) = self.siblings_mut(id) else {
            return false;
        };
        siblings.retain(|sibling| *sibling != id);
        siblings.insert(0, id);
        true
    }

    /// Find a direct child of `parent` (or a top-level widget) by name, case-sensitively.
    pub(crate) fn find_child_by_name(&self, parent: Option<WidgetId>, name: &str) -> Option<WidgetId> {
        self.children_of(parent).iter().copied().find(|child| {
            self.nodes
                .get(child)
                .is_some_and(|node| node.state.name == name)
        })
    }

    /// Find a widget by name in the subtree below `parent`, breadth first.
    pub(crate) fn find_descendant_by_name(
        &self,
        parent: Option<WidgetId>,
        name: &str,
    ) -> Option<WidgetId> {
        let mut queue: Vec<WidgetId> = self.children_of(parent).to_vec();
        let mut index = 0;
        while let Some(&id) = queue.get(index) {
            if self.nodes.get(&id).is_some_and(|node| node.state.name == name) {
                return Some(id);
            }
            queue.extend_from_slice(self.children_of(Some(id)));
            index += 1;
        }
        None
    }

    /// All widgets below `parent` in depth-first order, parents before children.
    pub(crate) fn depth_first(&self, parent: Option<WidgetId>) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack: Vec<WidgetId> = self.children_of(parent).iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.children_of(Some(id)).iter().rev().copied());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DrawList, PaintCtx};

    struct Leaf;

    impl Widget for Leaf {
        fn paint(&self, _ctx: &PaintCtx<'_>, _scene: &mut DrawList) {}
    }

    fn add(arena: &mut WidgetArena, parent: Option<WidgetId>, name: &str) -> WidgetId {
        let id = WidgetId::next();
        let node = WidgetNode::new(Box::new(Leaf), WidgetState::new(id, name.to_string()));
        arena.insert_detached(node);
        arena.attach(id, parent);
        id
    }

    #[test]
    fn attach_and_query() {
        let mut arena = WidgetArena::new();
        let panel = add(&mut arena, None, "panel");
        let a = add(&mut arena, Some(panel), "a");
        let b = add(&mut arena, Some(panel), "b");
        let inner = add(&mut arena, Some(a), "inner");

        assert_eq!(arena.roots(), &[panel]);
        assert_eq!(arena.children_of(Some(panel)), &[a, b]);
        assert_eq!(arena.parent_of(inner), Some(a));
        assert_eq!(arena.path_to_root(inner), vec![inner, a, panel]);
        assert!(arena.is_ancestor(panel, inner));
        assert!(!arena.is_ancestor(inner, inner));
        assert!(arena.is_attached(inner));
        assert_eq!(arena.find_child_by_name(Some(panel), "b"), Some(b));
        assert_eq!(arena.find_child_by_name(None, "inner"), None);
        assert_eq!(arena.find_descendant_by_name(None, "inner"), Some(inner));
        assert_eq!(arena.depth_first(None), vec![panel, a, inner, b]);
        assert_eq!(arena.siblings_of(a), vec![a, b]);
    }

    #[test]
    fn z_order_moves() {
        let mut arena = WidgetArena::new();
        let a = add(&mut arena, None, "a");
        let b = add(&mut arena, None, "b");
        let c = add(&mut arena, None, "c");

        assert!(arena.move_to_front(a));
        assert_eq!(arena.roots(), &[b, c, a]);
        assert!(arena.move_to_back(c));
        assert_eq!(arena.roots(), &[c, b, a]);
    }

    #[test]
    fn detached_nodes_are_not_in_the_tree() {
        let mut arena = WidgetArena::new();
        let id = WidgetId::next();
        arena.insert_detached(WidgetNode::new(
            Box::new(Leaf),
            WidgetState::new(id, String::new()),
        ));
        assert!(arena.contains(id));
        assert!(!arena.is_attached(id));
        assert!(!arena.move_to_front(id));
        assert_eq!(arena.siblings_of(id), vec![id]);
    }

    #[test]
    fn remove_subtree() {
        let mut arena = WidgetArena::new();
        let panel = add(&mut arena, None, "panel");
        let a = add(&mut arena, Some(panel), "a");
        let inner = add(&mut arena, Some(a), "inner");
        let other = add(&mut arena, None, "other");

        let removed: Vec<WidgetId> = arena.remove_subtree(a).into_iter().map(|(id, _)| id).collect();
        assert_eq!(removed, vec![a, inner]);
        assert!(arena.children_of(Some(panel)).is_empty());
        assert!(!arena.contains(inner));
        assert_eq!(arena.len(), 2);

        arena.remove_subtree(panel);
        assert_eq!(arena.roots(), &[other]);
        assert!(arena.remove_subtree(panel).is_empty());
    }
}
