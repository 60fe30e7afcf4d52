#![forbid(unsafe_code)]

//! Tabbed application model.
//!
//! [`App`] is an Elm-style model: [`App::update`] consumes one event,
//! rewrites container state through the core transition functions, and
//! returns a [`Cmd`] for the host loop. The only deferred effect is focus:
//! switching to a tree tab yields [`Cmd::FocusAfterRender`], and the host
//! applies it with [`App::apply_pending_focus`] after the render pass, once
//! the target surface exists. Until then the tree receives no key routing.

use std::collections::HashSet;

use treetabs_core::event::{Event, KeyCode, KeyEvent};
use treetabs_core::nav::{NavEvent, NavOutcome, NavState};
use treetabs_core::selection::toggle;
use treetabs_core::tree::TreeData;
use treetabs_widgets::{StyledLine, SummaryEntry, TreeGuides, TreeRow};

use crate::container::{StateContainer, TreeId};

/// The visible tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    /// First tree.
    Tree1,
    /// Second tree.
    Tree2,
    /// Read-only selection summary for both trees.
    Summary,
}

impl Tab {
    /// The next tab in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Tree1 => Self::Tree2,
            Self::Tree2 => Self::Summary,
            Self::Summary => Self::Tree1,
        }
    }

    /// The previous tab in cycle order.
    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Tree1 => Self::Summary,
            Self::Tree2 => Self::Tree1,
            Self::Summary => Self::Tree2,
        }
    }

    /// The tree shown on this tab, if it is a tree tab.
    #[must_use]
    pub const fn tree(self) -> Option<TreeId> {
        match self {
            Self::Tree1 => Some(TreeId::Tree1),
            Self::Tree2 => Some(TreeId::Tree2),
            Self::Summary => None,
        }
    }

    /// Display label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Tree1 => "Tree 1",
            Self::Tree2 => "Tree 2",
            Self::Summary => "Selections",
        }
    }
}

/// Instruction to the host loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Nothing to do.
    None,
    /// Exit the event loop.
    Quit,
    /// Move focus to this tree after the current render pass completes.
    FocusAfterRender(TreeId),
}

/// Application model: two trees, a state container, and the tab bar.
#[derive(Debug)]
pub struct App<C: StateContainer> {
    tree1: TreeData,
    tree2: TreeData,
    container: C,
    tab: Tab,
    focused: Option<TreeId>,
    pending_focus: Option<TreeId>,
}

impl<C: StateContainer> App<C> {
    /// Create an app over the sample datasets.
    ///
    /// The first tree's focus is deferred, mirroring the mount-time focus
    /// hand-off: it lands only after the first render pass.
    #[must_use]
    pub fn new(container: C) -> Self {
        Self::with_trees(container, TreeData::sample_tree1(), TreeData::sample_tree2())
    }

    /// Create an app over custom datasets.
    #[must_use]
    pub fn with_trees(container: C, tree1: TreeData, tree2: TreeData) -> Self {
        Self {
            tree1,
            tree2,
            container,
            tab: Tab::Tree1,
            focused: None,
            pending_focus: Some(TreeId::Tree1),
        }
    }

    /// The currently visible tab.
    #[must_use]
    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// The tree currently receiving key routing, if any.
    #[must_use]
    pub fn focused(&self) -> Option<TreeId> {
        self.focused
    }

    /// The dataset for a tree.
    #[must_use]
    pub fn tree(&self, id: TreeId) -> &TreeData {
        match id {
            TreeId::Tree1 => &self.tree1,
            TreeId::Tree2 => &self.tree2,
        }
    }

    /// The hosting state container.
    #[must_use]
    pub fn container(&self) -> &C {
        &self.container
    }

    /// Consume one event and return the follow-up command.
    pub fn update(&mut self, event: Event) -> Cmd {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Focus(false) => {
                self.focused = None;
                Cmd::None
            }
            Event::Focus(true) => {
                // Terminal focus returned; restore the active tree tab's focus
                // on the next render pass.
                if self.focused.is_none() && self.pending_focus.is_none() {
                    self.pending_focus = self.tab.tree();
                }
                Cmd::None
            }
            Event::Resize { .. } | Event::Tick => Cmd::None,
        }
    }

    /// Apply a deferred focus request, returning the newly focused tree.
    ///
    /// Hosts call this once per loop iteration, after rendering.
    pub fn apply_pending_focus(&mut self) -> Option<TreeId> {
        let id = self.pending_focus.take()?;
        self.focused = Some(id);
        crate::debug!(?id, "focus applied after render");
        Some(id)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Cmd {
        if !key.is_press() {
            return Cmd::None;
        }
        if key.is_char('q') || key.code == KeyCode::Escape {
            return Cmd::Quit;
        }
        match key.code {
            KeyCode::Tab => return self.switch_tab(self.tab.next()),
            KeyCode::BackTab => return self.switch_tab(self.tab.prev()),
            _ => {}
        }
        if let Some(id) = self.focused {
            if let Some(nav_event) = NavEvent::from_key(&key) {
                self.step_tree(id, nav_event);
            }
        }
        Cmd::None
    }

    fn switch_tab(&mut self, tab: Tab) -> Cmd {
        if tab == self.tab {
            return Cmd::None;
        }
        self.tab = tab;
        self.focused = None;
        match tab.tree() {
            Some(id) => {
                self.pending_focus = Some(id);
                crate::debug!(tab = tab.title(), "tab switched, focus deferred");
                Cmd::FocusAfterRender(id)
            }
            None => {
                self.pending_focus = None;
                Cmd::None
            }
        }
    }

    /// Run one navigation transition for a tree and write the results back
    /// to the container.
    fn step_tree(&mut self, id: TreeId, event: NavEvent) {
        let slot = self.container.slot(id);
        let mut nav = NavState::from_parts(slot.expanded, slot.active);
        let tree = match id {
            TreeId::Tree1 => &self.tree1,
            TreeId::Tree2 => &self.tree2,
        };

        let outcome = nav.apply(tree, event);
        if let NavOutcome::Toggled(key) = &outcome {
            let next = toggle(tree, &slot.checked, key);
            crate::debug!(?id, key = %key, checked = next.len(), "selection toggled");
            self.container.set_checked(id, next);
        }

        let (expanded, active) = nav.into_parts();
        self.container.set_expanded(id, expanded);
        self.container.set_active(id, active);
    }

    /// Render-ready rows for a tree, from the container's current state.
    #[must_use]
    pub fn rows(&self, id: TreeId) -> Vec<TreeRow> {
        let slot = self.container.slot(id);
        let nav = NavState::from_parts(slot.expanded, slot.active);
        treetabs_widgets::render_rows(self.tree(id), &nav, &slot.checked)
    }

    /// Guide-decorated text lines for a tree.
    #[must_use]
    pub fn lines(&self, id: TreeId, guides: TreeGuides, max_width: usize) -> Vec<StyledLine> {
        let slot = self.container.slot(id);
        let nav = NavState::from_parts(slot.expanded, slot.active);
        treetabs_widgets::render_lines(self.tree(id), &nav, &slot.checked, guides, max_width)
    }

    /// Selection summary entries for a tree.
    #[must_use]
    pub fn summary(&self, id: TreeId) -> Vec<SummaryEntry> {
        let checked = self.container.slot(id).checked;
        treetabs_widgets::summarize(self.tree(id), &checked)
    }

    /// Checked keys for a tree, as currently stored.
    #[must_use]
    pub fn checked(&self, id: TreeId) -> HashSet<String> {
        self.container.slot(id).checked
    }
}
