use combo_select::widgets::selector_widget::{SelectorAction, SelectorState, SelectorWidget};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Helper to create a key event
fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn widget(candidates: &[&str]) -> SelectorWidget {
    SelectorWidget::new(candidates.iter().map(|s| s.to_string()).collect())
}

fn type_text(widget: &mut SelectorWidget, text: &str) {
    for ch in text.chars() {
        widget.handle_key(key(KeyCode::Char(ch)));
    }
}

#[test]
fn typing_narrows_then_arrow_and_enter_commit() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    type_text(&mut selector, "am");
    assert!(selector.is_open());
    assert_eq!(selector.visible_candidates(), &["Aman".to_string()][..]);
    assert_eq!(selector.highlight(), None);

    selector.handle_key(key(KeyCode::Down));
    assert_eq!(selector.highlight(), Some(0));

    let action = selector.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SelectorAction::Committed("Aman".to_string()));
    assert_eq!(selector.query(), "Aman");
    assert!(!selector.is_open());
}

#[test]
fn substring_matching_keeps_every_containing_candidate() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    // "an" occurs in all three names, mid-word or word-final
    type_text(&mut selector, "an");
    assert_eq!(
        selector.visible_candidates(),
        &[
            "Aman".to_string(),
            "Bhushan".to_string(),
            "Chetan".to_string()
        ][..]
    );
}

#[test]
fn no_match_leaves_an_empty_panel_and_arrows_do_not_move() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    type_text(&mut selector, "z");
    assert!(selector.is_open());
    assert!(selector.visible_candidates().is_empty());

    selector.handle_key(key(KeyCode::Down));
    assert_eq!(selector.highlight(), None);

    let action = selector.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SelectorAction::Continue);
    assert!(selector.is_open());
}

#[test]
fn focus_gain_opens_with_the_full_list() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    assert!(!selector.is_open());

    selector.handle_focus_gained();
    assert!(selector.is_open());
    assert_eq!(selector.visible_candidates().len(), 3);
    assert_eq!(selector.highlight(), None);
    assert_eq!(selector.query(), "");
}

#[test]
fn narrowing_resets_the_highlight_instead_of_clamping() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    selector.handle_key(key(KeyCode::Down));
    selector.handle_key(key(KeyCode::Down));
    selector.handle_key(key(KeyCode::Down));
    assert_eq!(selector.highlight(), Some(2));

    // narrows the list to one entry; the highlight resets, it is not
    // clamped onto the surviving row
    type_text(&mut selector, "am");
    assert_eq!(selector.visible_candidates().len(), 1);
    assert_eq!(selector.highlight(), None);
}

#[test]
fn escape_closes_without_touching_the_query() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    type_text(&mut selector, "che");
    assert!(selector.is_open());

    let action = selector.handle_key(key(KeyCode::Esc));
    assert_eq!(action, SelectorAction::Continue);
    assert!(!selector.is_open());
    assert_eq!(selector.query(), "che");

    // reopening shows the panel filtered by whatever the query still holds
    selector.handle_focus_gained();
    assert!(selector.is_open());
    assert_eq!(selector.visible_candidates(), &["Chetan".to_string()][..]);
}

#[test]
fn focus_moving_within_the_subtree_does_not_close() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    selector.handle_focus_lost(true);
    assert!(selector.is_open());

    // only the explicit activation closes, via its commit
    let action = selector.pointer_activate(0);
    assert_eq!(action, SelectorAction::Committed("Aman".to_string()));
    assert!(!selector.is_open());
}

#[test]
fn focus_leaving_the_subtree_closes() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    selector.handle_focus_lost(false);
    assert!(!selector.is_open());
}

#[test]
fn pointer_activation_commits_the_exact_text() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    let action = selector.pointer_activate(1);
    assert_eq!(action, SelectorAction::Committed("Bhushan".to_string()));
    assert_eq!(selector.query(), "Bhushan");
    assert!(!selector.is_open());
    assert_eq!(selector.highlight(), None);
}

#[test]
fn pointer_activation_out_of_range_is_a_no_op() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    let action = selector.pointer_activate(99);
    assert_eq!(action, SelectorAction::Continue);
    assert!(selector.is_open());
    assert_eq!(selector.query(), "");
}

#[test]
fn enter_without_a_highlight_keeps_the_panel_open() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();

    let action = selector.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SelectorAction::Continue);
    assert!(selector.is_open());
    assert_eq!(selector.query(), "");
}

#[test]
fn enter_and_escape_pass_through_while_closed() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    assert_eq!(
        selector.handle_key(key(KeyCode::Enter)),
        SelectorAction::PassThrough
    );
    assert_eq!(
        selector.handle_key(key(KeyCode::Esc)),
        SelectorAction::PassThrough
    );
}

#[test]
fn arrow_down_while_closed_opens_without_moving() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    selector.handle_key(key(KeyCode::Down));
    assert!(selector.is_open());
    assert_eq!(selector.highlight(), None);

    // the next ArrowDown is a navigation key again
    selector.handle_key(key(KeyCode::Down));
    assert_eq!(selector.highlight(), Some(0));
}

#[test]
fn arrow_up_moves_even_while_closed() {
    // ArrowUp is not gated on the panel being open: the highlight moves
    // without opening, asymmetric with ArrowDown
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    selector.handle_key(key(KeyCode::Up));
    assert!(!selector.is_open());
    assert_eq!(selector.highlight(), Some(0));
}

#[test]
fn commit_refilters_by_the_committed_text_without_reopening() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.handle_focus_gained();
    selector.handle_key(key(KeyCode::Down));

    let action = selector.handle_key(key(KeyCode::Enter));
    assert_eq!(action, SelectorAction::Committed("Aman".to_string()));
    assert!(!selector.is_open());
    assert_eq!(selector.visible_candidates(), &["Aman".to_string()][..]);
    assert_eq!(selector.highlight(), None);

    // a later user keystroke reopens as usual
    selector.handle_key(key(KeyCode::Backspace));
    assert!(selector.is_open());
    assert_eq!(selector.query(), "Ama");
}

#[test]
fn backspace_refilters_like_any_text_change() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);

    type_text(&mut selector, "am");
    assert_eq!(selector.visible_candidates().len(), 1);

    selector.handle_key(key(KeyCode::Backspace));
    assert_eq!(selector.query(), "a");
    assert_eq!(selector.visible_candidates().len(), 3);
    assert_eq!(selector.highlight(), None);
}

#[test]
fn unrecognized_keys_pass_through() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    assert_eq!(
        selector.handle_key(key(KeyCode::F(2))),
        SelectorAction::PassThrough
    );
}

#[test]
fn state_snapshot_restores_onto_a_fresh_widget() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    type_text(&mut selector, "an");
    selector.handle_key(key(KeyCode::Down));
    let saved = selector.state();

    let mut restored = widget(&["Aman", "Bhushan", "Chetan"]);
    restored.restore_state(saved.clone());

    assert_eq!(restored.query(), "an");
    assert!(restored.is_open());
    assert_eq!(restored.highlight(), Some(0));
    assert_eq!(
        restored.visible_candidates(),
        selector.visible_candidates()
    );
    assert_eq!(restored.state(), saved);
}

#[test]
fn restoring_a_stale_highlight_drops_it() {
    let mut selector = widget(&["Aman", "Bhushan", "Chetan"]);
    selector.restore_state(SelectorState {
        query: "q".to_string(),
        is_open: true,
        highlight: Some(4),
    });

    assert!(selector.visible_candidates().is_empty());
    assert_eq!(selector.highlight(), None);
    assert_eq!(selector.current(), None);
}

#[test]
fn duplicate_candidates_resolve_by_row() {
    // uniqueness is the documented precondition; with duplicates anyway,
    // activation addresses the clicked row, deterministically
    let mut selector = widget(&["Aman", "Aman", "Bhushan"]);
    selector.handle_focus_gained();

    let action = selector.pointer_activate(1);
    assert_eq!(action, SelectorAction::Committed("Aman".to_string()));
    assert_eq!(selector.query(), "Aman");
}
