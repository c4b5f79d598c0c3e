use combo_select::cursor::NavigationCursor;

fn visible(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("item-{i}")).collect()
}

#[test]
fn starts_with_nothing_highlighted() {
    let cursor = NavigationCursor::new();
    assert_eq!(cursor.highlight(), None);
}

#[test]
fn move_down_walks_the_list_and_saturates_at_the_last_row() {
    let mut cursor = NavigationCursor::new();
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(0));
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(1));
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(2));

    // repeated moves past the end are idempotent, no wraparound
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(2));
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(2));
}

#[test]
fn move_down_on_an_empty_list_keeps_nothing_highlighted() {
    let mut cursor = NavigationCursor::new();
    cursor.move_down(0);
    assert_eq!(cursor.highlight(), None);
}

#[test]
fn move_up_from_nothing_lands_on_the_first_row() {
    // deliberately asymmetric with move_down's saturation
    let mut cursor = NavigationCursor::new();
    cursor.move_up(3);
    assert_eq!(cursor.highlight(), Some(0));
}

#[test]
fn move_up_saturates_at_the_first_row() {
    let mut cursor = NavigationCursor::new();
    cursor.move_down(3);
    cursor.move_down(3);
    assert_eq!(cursor.highlight(), Some(1));

    cursor.move_up(3);
    assert_eq!(cursor.highlight(), Some(0));
    cursor.move_up(3);
    assert_eq!(cursor.highlight(), Some(0));
}

#[test]
fn move_up_on_an_empty_list_keeps_nothing_highlighted() {
    let mut cursor = NavigationCursor::new();
    cursor.move_up(0);
    assert_eq!(cursor.highlight(), None);
}

#[test]
fn reset_clears_the_highlight() {
    let mut cursor = NavigationCursor::new();
    cursor.move_down(3);
    cursor.reset();
    assert_eq!(cursor.highlight(), None);
}

#[test]
fn current_is_bounds_checked() {
    let mut cursor = NavigationCursor::new();
    let list = visible(3);

    assert_eq!(cursor.current(&list), None);

    cursor.move_down(list.len());
    assert_eq!(cursor.current(&list), Some("item-0"));

    // a shorter list than the stored index yields no selection
    let shorter = visible(0);
    cursor.move_down(list.len());
    assert_eq!(cursor.current(&shorter), None);
}

#[test]
fn restore_drops_a_highlight_that_no_longer_fits() {
    let mut cursor = NavigationCursor::new();
    cursor.restore(Some(5), 3);
    assert_eq!(cursor.highlight(), None);

    cursor.restore(Some(2), 3);
    assert_eq!(cursor.highlight(), Some(2));

    cursor.restore(None, 3);
    assert_eq!(cursor.highlight(), None);
}
