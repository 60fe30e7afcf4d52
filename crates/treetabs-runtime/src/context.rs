#![forbid(unsafe_code)]

//! Ad-hoc shared-context container.
//!
//! A [`ContextProvider`] owns the state; [`SharedContext`] handles are
//! cheap clones that read and write through it. Handles hold a weak
//! reference: using one after its provider has been dropped is a
//! programmer error, not a data error, and panics immediately rather than
//! limping along with detached state.

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::{Rc, Weak};

use crate::container::{StateContainer, TreeId, TreeSlot, TreeSlots};

/// Owner of the shared tree state.
#[derive(Debug, Default)]
pub struct ContextProvider {
    slots: Rc<RefCell<TreeSlots>>,
}

impl ContextProvider {
    /// Create a provider with empty state for both trees.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handle that reads and writes this provider's state.
    #[must_use]
    pub fn handle(&self) -> SharedContext {
        SharedContext {
            slots: Rc::downgrade(&self.slots),
        }
    }
}

/// A consumer handle onto a [`ContextProvider`].
#[derive(Debug, Clone)]
pub struct SharedContext {
    slots: Weak<RefCell<TreeSlots>>,
}

impl SharedContext {
    /// Panics if the provider has been dropped. A detached handle is a
    /// programmer error and fails at first use.
    fn slots(&self) -> Rc<RefCell<TreeSlots>> {
        self.slots.upgrade().unwrap_or_else(|| {
            panic!("SharedContext used outside the lifetime of its ContextProvider")
        })
    }
}

impl StateContainer for SharedContext {
    fn slot(&self, id: TreeId) -> TreeSlot {
        self.slots().borrow().get(id).clone()
    }

    fn set_checked(&mut self, id: TreeId, keys: HashSet<String>) {
        self.slots().borrow_mut().get_mut(id).checked = keys;
    }

    fn set_expanded(&mut self, id: TreeId, keys: HashSet<String>) {
        self.slots().borrow_mut().get_mut(id).expanded = keys;
    }

    fn set_active(&mut self, id: TreeId, key: Option<String>) {
        self.slots().borrow_mut().get_mut(id).active = key;
    }
}
