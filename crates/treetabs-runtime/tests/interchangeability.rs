//! The two state containers must be functionally interchangeable: the same
//! keyboard session against either one produces identical tree state.

use treetabs_core::event::{Event, KeyCode, KeyEvent};
use treetabs_core::selection::is_consistent;
use treetabs_runtime::{App, CentralStore, Cmd, ContextProvider, StateContainer, TreeId};

fn press(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code))
}

/// A session exercising both trees: navigate, expand, toggle, switch tabs.
const SCRIPT: &[KeyCode] = &[
    KeyCode::Down,      // cursor 0-0
    KeyCode::Down,      // expand 0-0
    KeyCode::Down,      // cursor 0-0-0
    KeyCode::Char(' '), // check 0-0-0 subtree
    KeyCode::Down,      // expand 0-0-0
    KeyCode::Down,      // cursor 0-0-0-0
    KeyCode::Char(' '), // uncheck 0-0-0-0, cascade up
    KeyCode::Up,        // cursor 0-0-0
    KeyCode::Left,      // collapse 0-0-0
    KeyCode::Tab,       // tree 2 (focus deferred)
    KeyCode::Down,      // cursor a-0
    KeyCode::Right,     // expand a-0
    KeyCode::Down,      // cursor a-0-0
    KeyCode::Char(' '), // check a-0-0
    KeyCode::Down,      // cursor a-0-1
    KeyCode::Char(' '), // check a-0-1, completes a-0
];

fn run_script<C: StateContainer>(app: &mut App<C>) {
    // The host loop: render (elided), then apply deferred focus, then read
    // the next event.
    app.apply_pending_focus();
    for &code in SCRIPT {
        let cmd = app.update(press(code));
        if let Cmd::FocusAfterRender(_) = cmd {
            app.apply_pending_focus();
        }
    }
}

#[test]
fn context_and_store_produce_identical_state() {
    let provider = ContextProvider::new();
    let mut with_context = App::new(provider.handle());
    let mut with_store = App::new(CentralStore::new());

    run_script(&mut with_context);
    run_script(&mut with_store);

    for id in TreeId::ALL {
        assert_eq!(
            with_context.container().slot(id),
            with_store.container().slot(id),
            "containers diverged for {id:?}"
        );
    }
}

#[test]
fn scripted_session_end_state() {
    let mut app = App::new(CentralStore::new());
    run_script(&mut app);

    let tree1 = app.container().slot(TreeId::Tree1);
    // 0-0-0-0 was unchecked after checking the 0-0-0 subtree: only the
    // untouched sibling grandchild stays checked.
    let checked1: Vec<&str> = {
        let mut keys: Vec<&str> = tree1.checked.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    };
    assert_eq!(checked1, vec!["0-0-0-1"]);
    assert_eq!(tree1.active, Some("0-0-0".to_string()));
    // 0-0 stays expanded; 0-0-0 was collapsed again.
    assert!(tree1.expanded.contains("0-0"));
    assert!(!tree1.expanded.contains("0-0-0"));

    let tree2 = app.container().slot(TreeId::Tree2);
    let checked2: Vec<&str> = {
        let mut keys: Vec<&str> = tree2.checked.iter().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    };
    // Both children checked, so a-0 completed automatically.
    assert_eq!(checked2, vec!["a-0", "a-0-0", "a-0-1"]);

    assert!(is_consistent(app.tree(TreeId::Tree1), &tree1.checked));
    assert!(is_consistent(app.tree(TreeId::Tree2), &tree2.checked));
}

#[test]
fn tree_states_stay_independent_across_tabs() {
    let mut app = App::new(CentralStore::new());
    run_script(&mut app);

    let tree1 = app.container().slot(TreeId::Tree1);
    let tree2 = app.container().slot(TreeId::Tree2);
    for key in &tree1.checked {
        assert!(!tree2.checked.contains(key));
    }
    for key in &tree1.expanded {
        assert!(!tree2.expanded.contains(key));
    }
}
