#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Chrome state shared between the header, sidebar and contacts column.
///
/// Provided as an `RwSignal<UiState>` context by the root component.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    /// Header search box value; filters the contacts column.
    pub search_query: String,
    /// Left sidebar "See More" expansion.
    pub sidebar_expanded: bool,
}

impl UiState {
    /// Flip the sidebar expansion and return the new value.
    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_expanded = !self.sidebar_expanded;
        self.sidebar_expanded
    }

    /// Case-insensitive substring match of `name` against the search query.
    /// An empty or blank query matches everything.
    pub fn matches_search(&self, name: &str) -> bool {
        let query = self.search_query.trim();
        query.is_empty() || name.to_lowercase().contains(&query.to_lowercase())
    }
}
