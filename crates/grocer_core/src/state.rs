use crate::model::{Category, ListId};

/// Which screen the presentation layer shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum View {
    /// Overview of all lists
    #[default]
    Lists,
    /// Detail of the current list
    Items,
}

/// UI-facing session state that sits alongside the list collection.
///
/// `current_list` always names an existing list while `view` is
/// [`View::Items`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub view: View,
    pub current_list: Option<ListId>,
    /// Pending text in the search/entry box
    pub search_text: String,
    pub quick_add_open: bool,
    pub category_dialog_open: bool,
    /// Last category picked in the category dialog
    pub selected_category: Category,
}
