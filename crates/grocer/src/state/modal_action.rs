/// Domain-scoped actions a modal reports back when confirmed.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalAction {
    List(ListAction),
    Entry(EntryAction),
    /// Informational modal with nothing to do on confirm
    Dismiss,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListAction {
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryAction {
    /// Text typed into the search/entry box
    Submit,
    /// Category chosen for an unknown item name
    PickCategory,
    /// Catalog item chosen from the quick-add panel
    QuickAdd,
}

impl ModalAction {
    pub const DELETE_LIST: Self = Self::List(ListAction::Delete);
    pub const SUBMIT_ENTRY: Self = Self::Entry(EntryAction::Submit);
    pub const PICK_CATEGORY: Self = Self::Entry(EntryAction::PickCategory);
    pub const QUICK_ADD: Self = Self::Entry(EntryAction::QuickAdd);
}
