//! # Model Manager
//!
//! [`ModelManager`] is the single mutation and query surface over the
//! address book, the seller address book and the user preferences. Command
//! handlers call into it; UIs hold the [`FilteredList`] handles it vends.
//!
//! ## Ownership
//!
//! The manager copies its books in at construction and owns them from then
//! on; the snapshots it was built from are never touched again. The books sit
//! behind `Rc<RefCell<_>>` only so the filtered-list handles can read them.
//! All writes go through the manager.
//!
//! ## Atomicity
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the model exactly as it was.

use crate::book::{
    AddressBook, ReadOnlyAddressBook, ReadOnlySellerAddressBook, SellerAddressBook,
};
use crate::error::Result;
use crate::filter::{FilteredClientList, FilteredList, FilteredSellerList, Predicate};
use crate::model::{Client, Seller};
use crate::prefs::{GuiSettings, ReadOnlyUserPrefs, UserPrefs};
use std::cell::{Ref, RefCell};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info};

pub struct ModelManager {
    address_book: Rc<RefCell<AddressBook>>,
    seller_address_book: Rc<RefCell<SellerAddressBook>>,
    user_prefs: UserPrefs,
    filtered_clients: FilteredClientList,
    filtered_sellers: FilteredSellerList,
}

impl ModelManager {
    /// Builds a model from independent copies of the given snapshots.
    pub fn new(
        address_book: &dyn ReadOnlyAddressBook,
        user_prefs: &dyn ReadOnlyUserPrefs,
        seller_address_book: &dyn ReadOnlySellerAddressBook,
    ) -> Result<Self> {
        let address_book = AddressBook::from_read_only(address_book)?;
        let seller_address_book = SellerAddressBook::from_read_only(seller_address_book)?;
        let user_prefs = UserPrefs::from_read_only(user_prefs)?;

        debug!(
            "Initializing with address book: {} and user prefs {} and seller address book: {}",
            address_book, user_prefs, seller_address_book
        );

        let address_book = Rc::new(RefCell::new(address_book));
        let seller_address_book = Rc::new(RefCell::new(seller_address_book));

        Ok(Self {
            filtered_clients: FilteredList::new(Rc::clone(&address_book)),
            filtered_sellers: FilteredList::new(Rc::clone(&seller_address_book)),
            address_book,
            seller_address_book,
            user_prefs,
        })
    }

    // --- User prefs ---

    pub fn set_user_prefs(&mut self, user_prefs: &dyn ReadOnlyUserPrefs) -> Result<()> {
        self.user_prefs.reset_data(user_prefs)
    }

    pub fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    pub fn gui_settings(&self) -> GuiSettings {
        self.user_prefs.gui_settings()
    }

    pub fn set_gui_settings(&mut self, gui_settings: GuiSettings) {
        self.user_prefs.set_gui_settings(gui_settings);
    }

    pub fn address_book_file_path(&self) -> &Path {
        self.user_prefs.address_book_file_path()
    }

    pub fn set_address_book_file_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.user_prefs.set_address_book_file_path(path)
    }

    pub fn seller_address_book_file_path(&self) -> &Path {
        self.user_prefs.seller_address_book_file_path()
    }

    pub fn set_seller_address_book_file_path(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        self.user_prefs.set_seller_address_book_file_path(path)
    }

    // --- Address book ---

    /// Replaces every client with a copy of `address_book`'s.
    pub fn set_address_book(&mut self, address_book: &dyn ReadOnlyAddressBook) -> Result<()> {
        self.address_book.borrow_mut().reset_data(address_book)
    }

    pub fn address_book(&self) -> Ref<'_, AddressBook> {
        self.address_book.borrow()
    }

    pub fn has_client(&self, client: &Client) -> bool {
        self.address_book.borrow().has_client(client)
    }

    pub fn delete_client(&mut self, target: &Client) -> Result<()> {
        self.address_book.borrow_mut().remove_client(target)?;
        info!(name = %target.name, "deleted client");
        Ok(())
    }

    /// Adds `client` and resets the client view to show everything.
    pub fn add_client(&mut self, client: Client) -> Result<()> {
        let name = client.name.clone();
        self.address_book.borrow_mut().add_client(client)?;
        info!(%name, "added client");
        self.update_filtered_client_list(Predicate::all());
        Ok(())
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<()> {
        let name = edited.name.clone();
        self.address_book.borrow_mut().set_client(target, edited)?;
        info!(from = %target.name, to = %name, "edited client");
        Ok(())
    }

    /// Adds a buyer to the client collection and resets the client view.
    pub fn add_buyer(&mut self, buyer: Client) -> Result<()> {
        let name = buyer.name.clone();
        self.address_book.borrow_mut().add_buyer(buyer)?;
        info!(%name, "added buyer");
        self.update_filtered_client_list(Predicate::all());
        Ok(())
    }

    pub fn has_buyer(&self, buyer: &Client) -> bool {
        self.address_book.borrow().has_buyer(buyer)
    }

    // --- Seller address book ---

    pub fn set_seller_address_book(
        &mut self,
        seller_address_book: &dyn ReadOnlySellerAddressBook,
    ) -> Result<()> {
        self.seller_address_book
            .borrow_mut()
            .reset_data(seller_address_book)
    }

    pub fn seller_address_book(&self) -> Ref<'_, SellerAddressBook> {
        self.seller_address_book.borrow()
    }

    /// Adds `seller` and resets the seller view to show everything.
    pub fn add_seller(&mut self, seller: Seller) -> Result<()> {
        let name = seller.name.clone();
        self.seller_address_book.borrow_mut().add_seller(seller)?;
        info!(%name, "added seller");
        self.update_filtered_seller_list(Predicate::all());
        Ok(())
    }

    pub fn has_seller(&self, seller: &Seller) -> bool {
        self.seller_address_book.borrow().has_seller(seller)
    }

    pub fn delete_seller(&mut self, target: &Seller) -> Result<()> {
        self.seller_address_book.borrow_mut().remove_seller(target)?;
        info!(name = %target.name, "deleted seller");
        Ok(())
    }

    pub fn set_seller(&mut self, target: &Seller, edited: Seller) -> Result<()> {
        let name = edited.name.clone();
        self.seller_address_book
            .borrow_mut()
            .set_seller(target, edited)?;
        info!(from = %target.name, to = %name, "edited seller");
        Ok(())
    }

    // --- Filtered lists ---

    /// A live handle on the clients visible under the current predicate.
    pub fn filtered_client_list(&self) -> FilteredClientList {
        self.filtered_clients.clone()
    }

    pub fn update_filtered_client_list(&mut self, predicate: Predicate<Client>) {
        self.filtered_clients.set_predicate(predicate);
    }

    /// Sorts the client book by name; the filtered view follows.
    pub fn sort_filtered_client_list(&mut self) {
        self.address_book.borrow_mut().sort_clients();
        debug!("sorted clients by name");
    }

    pub fn filtered_seller_list(&self) -> FilteredSellerList {
        self.filtered_sellers.clone()
    }

    pub fn update_filtered_seller_list(&mut self, predicate: Predicate<Seller>) {
        self.filtered_sellers.set_predicate(predicate);
    }
}

impl Default for ModelManager {
    fn default() -> Self {
        let address_book = Rc::new(RefCell::new(AddressBook::new()));
        let seller_address_book = Rc::new(RefCell::new(SellerAddressBook::new()));
        Self {
            filtered_clients: FilteredList::new(Rc::clone(&address_book)),
            filtered_sellers: FilteredList::new(Rc::clone(&seller_address_book)),
            address_book,
            seller_address_book,
            user_prefs: UserPrefs::default(),
        }
    }
}

/// Value equality: books, prefs and what the client view currently shows.
impl PartialEq for ModelManager {
    fn eq(&self, other: &Self) -> bool {
        *self.address_book.borrow() == *other.address_book.borrow()
            && *self.seller_address_book.borrow() == *other.seller_address_book.borrow()
            && self.user_prefs == other.user_prefs
            && self.filtered_clients.to_vec() == other.filtered_clients.to_vec()
    }
}

impl std::fmt::Debug for ModelManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelManager")
            .field("address_book", &*self.address_book.borrow())
            .field("seller_address_book", &*self.seller_address_book.borrow())
            .field("user_prefs", &self.user_prefs)
            .field("filtered_clients", &self.filtered_clients)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClientbookError;
    use crate::model::{Entity, Phone};
    use crate::store::memory::fixtures::{
        buyer, client, seller, typical_address_book, typical_seller_address_book,
    };
    use pretty_assertions::assert_eq;

    fn visible_names(model: &ModelManager) -> Vec<String> {
        model
            .filtered_client_list()
            .to_vec()
            .iter()
            .map(|c| c.name().to_string())
            .collect()
    }

    #[test]
    fn test_default_is_empty() {
        let model = ModelManager::default();
        assert_eq!(model.user_prefs(), &UserPrefs::default());
        assert!(model.address_book().is_empty());
        assert!(model.seller_address_book().is_empty());
        assert!(model.filtered_client_list().is_empty());
    }

    #[test]
    fn test_add_client_then_has_client() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();

        assert!(model.has_client(&client("Alice")));
        assert!(model.filtered_client_list().contains(&client("Alice")));
    }

    #[test]
    fn test_add_duplicate_client_fails() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();

        let mut twin = client("Alice");
        twin.phone = Phone::new("000").unwrap();
        let err = model.add_client(twin).unwrap_err();
        assert!(matches!(err, ClientbookError::DuplicateEntity { .. }));
        assert_eq!(model.address_book().len(), 1);
    }

    #[test]
    fn test_delete_absent_client_fails() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();

        let err = model.delete_client(&client("Bob")).unwrap_err();
        assert!(matches!(err, ClientbookError::EntityNotFound { .. }));
        assert_eq!(model.address_book().clients(), [client("Alice")]);
    }

    #[test]
    fn test_set_client_preserves_slot() {
        let mut model = ModelManager::default();
        for name in ["Alice", "Bob", "Carl"] {
            model.add_client(client(name)).unwrap();
        }
        model.set_client(&client("Bob"), client("Bernice")).unwrap();

        assert_eq!(visible_names(&model), ["Alice", "Bernice", "Carl"]);
    }

    #[test]
    fn test_filter_scenario() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();
        model.add_client(client("Bob")).unwrap();

        model.update_filtered_client_list(Predicate::new(|c: &Client| c.name.as_str() == "Alice"));
        assert_eq!(visible_names(&model), ["Alice"]);

        model.update_filtered_client_list(Predicate::all());
        assert_eq!(visible_names(&model), ["Alice", "Bob"]);
    }

    #[test]
    fn test_add_client_resets_filter() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();
        model.update_filtered_client_list(Predicate::name_contains_keywords(["nobody"]));
        assert!(model.filtered_client_list().is_empty());

        model.add_client(client("Bob")).unwrap();
        assert_eq!(visible_names(&model), ["Alice", "Bob"]);
    }

    #[test]
    fn test_failed_add_keeps_filter() {
        let mut model = ModelManager::default();
        model.add_client(client("Alice")).unwrap();
        model.update_filtered_client_list(Predicate::name_contains_keywords(["nobody"]));

        assert!(model.add_client(client("Alice")).is_err());
        assert!(model.filtered_client_list().is_empty());
    }

    #[test]
    fn test_held_view_is_live() {
        let mut model = ModelManager::default();
        let view = model.filtered_client_list();

        model.add_client(client("Alice")).unwrap();
        model.add_client(client("Bob")).unwrap();
        assert_eq!(view.len(), 2);

        model.update_filtered_client_list(Predicate::name_contains_keywords(["bob"]));
        assert_eq!(view.to_vec(), [client("Bob")]);

        model.delete_client(&client("Bob")).unwrap();
        assert!(view.is_empty());
    }

    #[test]
    fn test_sort_reorders_view() {
        let mut model = ModelManager::default();
        for name in ["Carl", "alice", "Bob"] {
            model.add_client(client(name)).unwrap();
        }
        let view = model.filtered_client_list();
        model.sort_filtered_client_list();

        let names: Vec<_> = view.to_vec().into_iter().map(|c| c.name.to_string()).collect();
        assert_eq!(names, ["alice", "Bob", "Carl"]);
    }

    #[test]
    fn test_buyer_membership() {
        let mut model = ModelManager::default();
        model.add_buyer(buyer("Benson")).unwrap();

        assert!(model.has_buyer(&buyer("Benson")));
        assert!(model.has_client(&client("Benson")));
        assert!(model.filtered_client_list().contains(&buyer("Benson")));
    }

    #[test]
    fn test_add_buyer_rejects_general_client() {
        let mut model = ModelManager::default();
        let err = model.add_buyer(client("Alice")).unwrap_err();
        assert!(matches!(err, ClientbookError::InvalidArgument(_)));
    }

    #[test]
    fn test_seller_operations() {
        let mut model = ModelManager::default();
        let view = model.filtered_seller_list();

        model.add_seller(seller("Carl")).unwrap();
        model.add_seller(seller("Daniel")).unwrap();
        assert!(model.has_seller(&seller("Carl")));
        assert!(matches!(
            model.add_seller(seller("Carl")).unwrap_err(),
            ClientbookError::DuplicateEntity { kind: "seller", .. }
        ));

        model.set_seller(&seller("Daniel"), seller("Dana")).unwrap();
        model.update_filtered_seller_list(Predicate::name_contains_keywords(["dana"]));
        assert_eq!(view.to_vec(), [seller("Dana")]);

        model.delete_seller(&seller("Dana")).unwrap();
        assert!(view.is_empty());
        assert!(matches!(
            model.delete_seller(&seller("Dana")).unwrap_err(),
            ClientbookError::EntityNotFound { .. }
        ));
    }

    #[test]
    fn test_construction_copies_snapshots() {
        let snapshot = typical_address_book();
        let mut model =
            ModelManager::new(&snapshot, &UserPrefs::default(), &SellerAddressBook::new())
                .unwrap();
        assert_eq!(*model.address_book(), snapshot);

        model.add_client(client("Zed")).unwrap();
        assert!(!snapshot.has_client(&client("Zed")));
        assert_ne!(*model.address_book(), snapshot);
    }

    struct RawSellers(Vec<Seller>);

    impl ReadOnlySellerAddressBook for RawSellers {
        fn sellers(&self) -> &[Seller] {
            &self.0
        }
    }

    #[test]
    fn test_construction_copies_seller_snapshot() {
        let snapshot = typical_seller_address_book();
        let mut model =
            ModelManager::new(&AddressBook::new(), &UserPrefs::default(), &snapshot).unwrap();
        assert_eq!(*model.seller_address_book(), snapshot);

        model.add_seller(seller("Zed")).unwrap();
        model.delete_seller(&seller("Elle Meyer")).unwrap();
        assert_eq!(snapshot, typical_seller_address_book());
        assert_ne!(*model.seller_address_book(), snapshot);
    }

    #[test]
    fn test_set_seller_address_book_replaces_contents() {
        let mut model = ModelManager::default();
        model.add_seller(seller("Zed")).unwrap();
        let view = model.filtered_seller_list();

        model
            .set_seller_address_book(&typical_seller_address_book())
            .unwrap();
        assert!(!model.has_seller(&seller("Zed")));
        assert_eq!(*model.seller_address_book(), typical_seller_address_book());
        assert_eq!(view.to_vec(), typical_seller_address_book().sellers());
    }

    #[test]
    fn test_set_seller_address_book_rejects_duplicates() {
        let mut model = ModelManager::default();
        model.add_seller(seller("Zed")).unwrap();
        let view = model.filtered_seller_list();

        let mut twin = seller("Carl");
        twin.phone = Phone::new("000").unwrap();
        let err = model
            .set_seller_address_book(&RawSellers(vec![seller("Carl"), twin]))
            .unwrap_err();
        assert!(matches!(
            err,
            ClientbookError::DuplicateEntity { kind: "seller", .. }
        ));
        assert_eq!(model.seller_address_book().sellers(), [seller("Zed")]);
        assert_eq!(view.to_vec(), [seller("Zed")]);
    }

    struct BlankPaths;

    impl ReadOnlyUserPrefs for BlankPaths {
        fn gui_settings(&self) -> GuiSettings {
            GuiSettings::default()
        }

        fn address_book_file_path(&self) -> &Path {
            Path::new("")
        }

        fn seller_address_book_file_path(&self) -> &Path {
            Path::new("")
        }
    }

    #[test]
    fn test_prefs_with_empty_paths_rejected() {
        let mut model = ModelManager::default();
        let err = model.set_user_prefs(&BlankPaths).unwrap_err();
        assert!(matches!(err, ClientbookError::InvalidArgument(_)));
        assert_eq!(model.user_prefs(), &UserPrefs::default());

        let result = ModelManager::new(&AddressBook::new(), &BlankPaths, &SellerAddressBook::new());
        assert!(matches!(result, Err(ClientbookError::InvalidArgument(_))));
    }

    #[test]
    fn test_set_address_book_replaces_contents() {
        let mut model = ModelManager::default();
        model.add_client(client("Zed")).unwrap();
        let view = model.filtered_client_list();

        model.set_address_book(&typical_address_book()).unwrap();
        assert!(!model.has_client(&client("Zed")));
        assert_eq!(view.len(), typical_address_book().len());
    }

    #[test]
    fn test_prefs_accessors() {
        let mut model = ModelManager::default();
        let gui = GuiSettings::new(1.0, 2.0, 3, 4);
        model.set_gui_settings(gui);
        assert_eq!(model.gui_settings(), gui);

        model.set_address_book_file_path("a/b.json").unwrap();
        model.set_seller_address_book_file_path("c/d.json").unwrap();
        assert_eq!(model.address_book_file_path(), Path::new("a/b.json"));
        assert_eq!(model.seller_address_book_file_path(), Path::new("c/d.json"));
        assert!(model.set_address_book_file_path("").is_err());

        model.set_user_prefs(&UserPrefs::default()).unwrap();
        assert_eq!(model.user_prefs(), &UserPrefs::default());
    }

    #[test]
    fn test_equality() {
        let book = typical_address_book();
        let prefs = UserPrefs::default();
        let sellers = SellerAddressBook::new();

        let model = ModelManager::new(&book, &prefs, &sellers).unwrap();
        let same = ModelManager::new(&book, &prefs, &sellers).unwrap();
        assert_eq!(model, same);

        let mut filtered = ModelManager::new(&book, &prefs, &sellers).unwrap();
        filtered.update_filtered_client_list(Predicate::name_contains_keywords(["alice"]));
        assert_ne!(model, filtered);

        let mut other_prefs = UserPrefs::default();
        other_prefs.set_address_book_file_path("different").unwrap();
        let different = ModelManager::new(&book, &other_prefs, &sellers).unwrap();
        assert_ne!(model, different);

        assert_ne!(model, ModelManager::default());
    }
}
