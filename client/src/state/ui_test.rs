use super::*;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_search_empty() {
    let state = UiState::default();
    assert!(state.search_query.is_empty());
}

#[test]
fn ui_state_default_sidebar_collapsed() {
    let state = UiState::default();
    assert!(!state.sidebar_expanded);
}

// =============================================================
// Sidebar toggle
// =============================================================

#[test]
fn toggle_sidebar_flips_and_returns_new_value() {
    let mut state = UiState::default();
    assert!(state.toggle_sidebar());
    assert!(state.sidebar_expanded);
    assert!(!state.toggle_sidebar());
    assert!(!state.sidebar_expanded);
}

// =============================================================
// Search matching
// =============================================================

#[test]
fn blank_query_matches_everything() {
    let state = UiState { search_query: "   ".to_owned(), ..UiState::default() };
    assert!(state.matches_search("Bill Gates"));
}

#[test]
fn query_matches_case_insensitively() {
    let state = UiState { search_query: "gAt".to_owned(), ..UiState::default() };
    assert!(state.matches_search("Bill Gates"));
    assert!(!state.matches_search("Elon Musk"));
}

#[test]
fn query_is_trimmed_before_matching() {
    let state = UiState { search_query: "  leo ".to_owned(), ..UiState::default() };
    assert!(state.matches_search("Leo Messi"));
}
