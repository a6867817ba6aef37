//! The list manager: single owner of application state
//!
//! Every mutation goes through a method on [`ListManager`]. Each effective
//! change is broadcast to the registered [`StateObserver`]s so the
//! presentation layer can redraw or track unsaved work.
//!
//! Lookups of unknown list or item ids are silently ignored unless the
//! manager was built with [`Lookups::Strict`], in which case they surface
//! as [`LookupError`].

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::catalog::{Catalog, CatalogMatch};
use crate::error::{LookupError, Result, SnapshotError};
use crate::model::{Category, ItemId, ListId, ShoppingList};
use crate::observer::{StateChange, StateObserver};
use crate::snapshot::Snapshot;
use crate::state::{Session, View};

/// How failed id lookups are reported
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lookups {
    /// Unknown ids are a no-op
    #[default]
    Permissive,
    /// Unknown ids produce a [`LookupError`]
    Strict,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManagerOptions {
    pub lookups: Lookups,
    pub catalog_match: CatalogMatch,
}

/// Result of submitting the entry box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryOutcome {
    /// Nothing but whitespace was entered
    Empty,
    /// A catalog item was added straight away
    Added { item: ItemId, category: Category },
    /// The name is unknown; the category dialog is now open
    NeedsCategory,
    /// The target list no longer exists
    Ignored,
}

pub struct ListManager {
    lists: Vec<ShoppingList>,
    session: Session,
    next_list_id: u32,
    options: ManagerOptions,
    observers: Vec<Box<dyn StateObserver>>,
}

impl Default for ListManager {
    fn default() -> Self {
        Self::new(ManagerOptions::default())
    }
}

impl fmt::Debug for ListManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListManager")
            .field("lists", &self.lists)
            .field("session", &self.session)
            .field("next_list_id", &self.next_list_id)
            .field("options", &self.options)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl ListManager {
    pub fn new(options: ManagerOptions) -> Self {
        Self {
            lists: Vec::new(),
            session: Session::default(),
            next_list_id: 1,
            options,
            observers: Vec::new(),
        }
    }

    /// The starter data shown on first launch
    pub fn with_sample_data(options: ManagerOptions) -> Self {
        let mut weekly = ShoppingList::new(ListId(1), "Weekly Groceries");
        weekly.push_item("Milk", Category::Dairy);
        weekly.push_item("Eggs", Category::Dairy);
        weekly.push_item("Onions", Category::Vegetables);
        let apples = weekly.push_item("Apples", Category::Fruits);
        if let Some(item) = apples.and_then(|id| weekly.item_mut(id)) {
            item.completed = true;
        }

        let party = ShoppingList::new(ListId(2), "Party Shopping");

        let mut manager = Self::new(options);
        manager.lists = vec![weekly, party];
        manager.next_list_id = 3;
        manager.session.current_list = Some(ListId(1));
        manager
    }

    pub fn subscribe(&mut self, observer: impl StateObserver + 'static) {
        self.observers.push(Box::new(observer));
    }

    pub fn options(&self) -> ManagerOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ManagerOptions) {
        self.options = options;
    }

    // ========== Queries ==========

    pub fn lists(&self) -> &[ShoppingList] {
        &self.lists
    }

    pub fn list(&self, id: ListId) -> Option<&ShoppingList> {
        self.lists.iter().find(|list| list.id == id)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> View {
        self.session.view
    }

    pub fn current_list_id(&self) -> Option<ListId> {
        self.session.current_list
    }

    /// The list being viewed, if it still exists
    pub fn current_list(&self) -> Option<&ShoppingList> {
        self.session.current_list.and_then(|id| self.list(id))
    }

    pub fn search_text(&self) -> &str {
        &self.session.search_text
    }

    /// Resolve the final name and category for a new item.
    ///
    /// A catalog hit always wins over `explicit`; with no hit the explicit
    /// category is used, falling back to `Miscellaneous`.
    pub fn categorize(&self, name: &str, explicit: Option<Category>) -> (String, Category) {
        match Catalog::global().lookup(name, self.options.catalog_match) {
            Some(entry) => (entry.name.to_string(), entry.category),
            None => (name.to_string(), explicit.unwrap_or_default()),
        }
    }

    // ========== List operations ==========

    pub fn create_list(&mut self) -> Result<ListId> {
        let name = format!("New List {}", self.lists.len() + 1);
        let id = self.allocate_list_id()?;
        info!(list = id.0, %name, "created list");
        self.lists.push(ShoppingList::new(id, name));
        self.notify(StateChange::ListCreated(id));
        Ok(id)
    }

    pub fn duplicate_list(&mut self, source: ListId) -> Result<Option<ListId>> {
        let Some(index) = self.index_of(source) else {
            return self.miss(LookupError::ListNotFound(source), None);
        };
        let id = self.allocate_list_id()?;
        let name = format!("{} (Copy)", self.lists[index].name);
        let copy = self.lists[index].duplicate(id, name);
        info!(source = source.0, list = id.0, items = copy.items.len(), "duplicated list");
        self.lists.push(copy);
        self.notify(StateChange::ListDuplicated { source, copy: id });
        Ok(Some(id))
    }

    /// Remove a list. Deleting the list being viewed returns to the overview.
    pub fn delete_list(&mut self, id: ListId) -> Result<()> {
        let Some(index) = self.index_of(id) else {
            return self.miss(LookupError::ListNotFound(id), ());
        };
        let removed = self.lists.remove(index);
        info!(list = id.0, name = %removed.name, "deleted list");
        self.notify(StateChange::ListDeleted(id));

        if self.session.current_list == Some(id) {
            self.leave_current_list();
        }
        Ok(())
    }

    // ========== Item operations ==========

    pub fn add_item(
        &mut self,
        list: ListId,
        name: &str,
        explicit: Option<Category>,
    ) -> Result<Option<ItemId>> {
        let (name, category) = self.categorize(name, explicit);
        let Some(index) = self.index_of(list) else {
            return self.miss(LookupError::ListNotFound(list), None);
        };
        let Some(item) = self.lists[index].push_item(name, category) else {
            return Err(LookupError::IdsExhausted { list: Some(list) });
        };
        debug!(list = list.0, item = item.0, %category, "added item");
        self.notify(StateChange::ItemAdded {
            list,
            item,
            category,
        });
        Ok(Some(item))
    }

    /// Flip completion. Returns the new state, or `None` on a permissive miss.
    pub fn toggle_item(&mut self, list: ListId, item: ItemId) -> Result<Option<bool>> {
        let Some(index) = self.index_of(list) else {
            return self.miss(LookupError::ListNotFound(list), None);
        };
        let Some(entry) = self.lists[index].item_mut(item) else {
            return self.miss(LookupError::ItemNotFound { list, item }, None);
        };
        entry.completed = !entry.completed;
        let completed = entry.completed;
        self.notify(StateChange::ItemToggled {
            list,
            item,
            completed,
        });
        Ok(Some(completed))
    }

    // ========== Navigation ==========

    pub fn select_list(&mut self, id: ListId) -> Result<()> {
        if self.index_of(id).is_none() {
            return self.miss(LookupError::ListNotFound(id), ());
        }
        if self.session.current_list != Some(id) {
            self.session.current_list = Some(id);
            self.notify(StateChange::ListSelected(id));
        }
        if self.session.view != View::Items {
            self.session.view = View::Items;
            self.notify(StateChange::ViewChanged(View::Items));
        }
        Ok(())
    }

    pub fn back(&mut self) {
        if self.session.view == View::Lists {
            return;
        }
        self.session.view = View::Lists;
        self.notify(StateChange::ViewChanged(View::Lists));
        self.close_quick_add();
        self.cancel_category_dialog();
    }

    // ========== Entry box and dialogs ==========

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.session.search_text == text {
            return;
        }
        self.session.search_text = text;
        self.notify(StateChange::EntryChanged);
    }

    /// Returns whether the quick-add panel is now open
    pub fn toggle_quick_add(&mut self) -> bool {
        self.session.quick_add_open = !self.session.quick_add_open;
        let open = self.session.quick_add_open;
        self.notify(StateChange::QuickAddToggled(open));
        open
    }

    /// Add a catalog item to the current list and close the quick-add panel
    pub fn quick_add(&mut self, name: &str) -> Result<Option<ItemId>> {
        let Some(list) = self.session.current_list else {
            return self.miss(LookupError::NoCurrentList, None);
        };
        let added = self.add_item(list, name, None)?;
        self.close_quick_add();
        Ok(added)
    }

    /// Submit the entry box.
    ///
    /// Catalog names are added to the current list at once. Anything else
    /// opens the category dialog and waits for [`choose_category`].
    ///
    /// [`choose_category`]: ListManager::choose_category
    pub fn resolve_entry(&mut self, text: &str) -> Result<EntryOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(EntryOutcome::Empty);
        }
        self.set_search_text(text);

        match Catalog::global().lookup(trimmed, self.options.catalog_match) {
            Some(entry) => {
                let Some(list) = self.session.current_list else {
                    return self.miss(LookupError::NoCurrentList, EntryOutcome::Ignored);
                };
                let added = self.add_item(list, trimmed, Some(entry.category))?;
                self.clear_entry();
                Ok(match added {
                    Some(item) => EntryOutcome::Added {
                        item,
                        category: entry.category,
                    },
                    None => EntryOutcome::Ignored,
                })
            }
            None => {
                if !self.session.category_dialog_open {
                    self.session.category_dialog_open = true;
                    self.notify(StateChange::CategoryDialogOpened);
                }
                Ok(EntryOutcome::NeedsCategory)
            }
        }
    }

    /// Finish a deferred entry with the picked category
    pub fn choose_category(&mut self, category: Category) -> Result<Option<ItemId>> {
        if !self.session.category_dialog_open {
            return Ok(None);
        }
        self.session.selected_category = category;

        let name = self.session.search_text.trim().to_string();
        if name.is_empty() {
            self.clear_entry();
            return Ok(None);
        }
        let Some(list) = self.session.current_list else {
            self.cancel_category_dialog();
            return self.miss(LookupError::NoCurrentList, None);
        };
        let added = self.add_item(list, &name, Some(category))?;
        self.clear_entry();
        Ok(added)
    }

    /// Close the category dialog, keeping the typed text
    pub fn cancel_category_dialog(&mut self) {
        if self.session.category_dialog_open {
            self.session.category_dialog_open = false;
            self.notify(StateChange::CategoryDialogClosed);
        }
    }

    // ========== Snapshots ==========

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            lists: self.lists.clone(),
        }
    }

    /// Replace every list with the snapshot's and return to the overview.
    /// Ids handed out afterwards never collide with ids seen this session.
    pub fn restore(&mut self, snapshot: Snapshot) -> std::result::Result<(), SnapshotError> {
        snapshot.validate()?;
        self.next_list_id = self.next_list_id.max(snapshot.next_list_id());
        self.lists = snapshot.lists;
        self.leave_current_list();
        info!(lists = self.lists.len(), "restored snapshot");
        self.notify(StateChange::Loaded);
        Ok(())
    }

    // ========== Internals ==========

    fn index_of(&self, id: ListId) -> Option<usize> {
        self.lists.iter().position(|list| list.id == id)
    }

    fn allocate_list_id(&mut self) -> Result<ListId> {
        let next = self
            .next_list_id
            .checked_add(1)
            .ok_or(LookupError::IdsExhausted { list: None })?;
        let id = ListId(self.next_list_id);
        self.next_list_id = next;
        Ok(id)
    }

    /// Return to the overview with no list selected, dropping the entry box
    /// and both panels. Each piece that was actually reset is reported.
    fn leave_current_list(&mut self) {
        self.session.current_list = None;
        if self.session.view != View::Lists {
            self.session.view = View::Lists;
            self.notify(StateChange::ViewChanged(View::Lists));
        }
        self.close_quick_add();
        self.clear_entry();
    }

    fn close_quick_add(&mut self) {
        if self.session.quick_add_open {
            self.session.quick_add_open = false;
            self.notify(StateChange::QuickAddToggled(false));
        }
    }

    fn clear_entry(&mut self) {
        if !self.session.search_text.is_empty() {
            self.session.search_text.clear();
            self.notify(StateChange::EntryChanged);
        }
        if self.session.category_dialog_open {
            self.session.category_dialog_open = false;
            self.notify(StateChange::CategoryDialogClosed);
        }
    }

    fn miss<T>(&self, err: LookupError, fallback: T) -> Result<T> {
        match self.options.lookups {
            Lookups::Strict => Err(err),
            Lookups::Permissive => {
                debug!(%err, "lookup missed, ignoring");
                Ok(fallback)
            }
        }
    }

    fn notify(&mut self, change: StateChange) {
        for observer in &mut self.observers {
            observer.on_change(&change);
        }
    }
}
