use super::*;

#[test]
fn collapsed_shows_first_five() {
    let links = visible_links(false);
    assert_eq!(links.len(), SIDEBAR_VISIBLE);
    assert_eq!(links[0].label, "Friends");
}

#[test]
fn expanded_shows_all_links() {
    assert_eq!(visible_links(true).len(), SIDEBAR_LINKS.len());
}

#[test]
fn collapsed_is_prefix_of_expanded() {
    assert_eq!(visible_links(false), &visible_links(true)[..SIDEBAR_VISIBLE]);
}

#[test]
fn toggle_present_with_hidden_links() {
    assert!(has_more_links());
}

#[test]
fn toggle_label_tracks_state() {
    assert_eq!(toggle_label(false), "See More");
    assert_eq!(toggle_label(true), "See Less");
}
