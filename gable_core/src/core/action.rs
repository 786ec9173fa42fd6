// Copyright 2026 the Gable Authors
// SPDX-License-Identifier: Apache-2.0

use std::any::{Any, TypeId};
use std::fmt;

/// A type-erased action submitted by a widget.
///
/// Actions are how widgets tell the application that something happened,
/// e.g. that a button was pressed. Each widget type defines its own action
/// types; the application gets them back with
/// [`Gui::pop_action`](crate::app::Gui::pop_action) and downcasts them, or
/// registers a callback with [`Gui::connect`](crate::app::Gui::connect).
pub struct ErasedAction {
    type_name: &'static str,
    value: Box<dyn Any>,
}

impl ErasedAction {
    /// Wrap an action value.
    pub fn new<A: Any>(action: A) -> Self {
        Self {
            type_name: std::any::type_name::<A>(),
            value: Box::new(action),
        }
    }

    /// Full type name of the wrapped action.
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Type id of the wrapped action.
    pub fn action_type_id(&self) -> TypeId {
        (*self.value).type_id()
    }

    /// Returns `true` if the wrapped action is an `A`.
    pub fn is<A: Any>(&self) -> bool {
        self.value.is::<A>()
    }

    /// Get a reference to the wrapped action if it is an `A`.
    pub fn downcast_ref<A: Any>(&self) -> Option<&A> {
        self.value.downcast_ref()
    }

    /// Unwrap the action if it is an `A`, or give it back unchanged.
    pub fn downcast<A: Any>(self) -> Result<A, Self> {
        match self.value.downcast::<A>() {
            Ok(action) => Ok(*action),
            Err(value) => Err(Self {
                type_name: self.type_name,
                value,
            }),
        }
    }

    pub(crate) fn as_any(&self) -> &dyn Any {
        &*self.value
    }
}

impl fmt::Debug for ErasedAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ErasedAction<{}>", self.type_name)
    }
}

/// Handle to a callback registered with [`Gui::connect`](crate::app::Gui::connect).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ConnectionId(pub(crate) u64);

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Pressed(u32);

    #[test]
    fn downcast_actions() {
        let action = ErasedAction::new(Pressed(3));
        assert!(action.is::<Pressed>());
        assert!(!action.is::<u32>());
        assert_eq!(action.downcast_ref::<Pressed>(), Some(&Pressed(3)));
        assert!(action.type_name().ends_with("Pressed"));
        assert_eq!(action.action_type_id(), TypeId::of::<Pressed>());

        let action = action.downcast::<u32>().unwrap_err();
        assert_eq!(action.downcast::<Pressed>().unwrap(), Pressed(3));
    }
}
