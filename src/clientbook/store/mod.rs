//! # Storage Layer
//!
//! This module defines how the books and the user preferences reach disk.
//! The [`Storage`] trait lets startup code and tests work against different
//! backends.
//!
//! ## Implementations
//!
//! - [`fs::JsonStorage`]: production, one JSON file per book plus one for
//!   preferences. Paths come from [`UserPrefs`].
//! - [`memory::InMemoryStorage`]: keeps snapshots in memory, for tests.
//!
//! ## Storage Format
//!
//! ```text
//! preferences.json        # camelCase UserPrefs
//! data/
//! ├── addressbook.json    # {"clients": [...]}
//! └── sellerbook.json     # {"sellers": [...]}
//! ```
//!
//! Reads return `Ok(None)` when nothing has been stored yet, so callers can
//! tell "first run" apart from "file is broken".

use crate::book::{AddressBook, ReadOnlyAddressBook, ReadOnlySellerAddressBook, SellerAddressBook};
use crate::error::Result;
use crate::manager::ModelManager;
use crate::prefs::{ReadOnlyUserPrefs, UserPrefs};

pub mod fs;
pub mod memory;
pub mod sample;

/// Abstract interface for persisting books and preferences.
pub trait Storage {
    fn read_address_book(&self) -> Result<Option<AddressBook>>;

    fn save_address_book(&mut self, book: &dyn ReadOnlyAddressBook) -> Result<()>;

    fn read_seller_address_book(&self) -> Result<Option<SellerAddressBook>>;

    fn save_seller_address_book(&mut self, book: &dyn ReadOnlySellerAddressBook) -> Result<()>;

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>>;

    fn save_user_prefs(&mut self, prefs: &dyn ReadOnlyUserPrefs) -> Result<()>;

    /// Writes both books and the preferences held by `model`.
    fn save_model(&mut self, model: &ModelManager) -> Result<()> {
        self.save_address_book(&*model.address_book())?;
        self.save_seller_address_book(&*model.seller_address_book())?;
        self.save_user_prefs(model.user_prefs())
    }
}
