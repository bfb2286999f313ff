use super::Storage;
use crate::book::address_book::SerializedAddressBook;
use crate::book::seller_book::SerializedSellerAddressBook;
use crate::book::{AddressBook, ReadOnlyAddressBook, ReadOnlySellerAddressBook, SellerAddressBook};
use crate::error::{ClientbookError, Result};
use crate::prefs::{ReadOnlyUserPrefs, UserPrefs};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// JSON file storage. Each book and the preferences live in their own file.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    address_book_path: PathBuf,
    seller_address_book_path: PathBuf,
    user_prefs_path: PathBuf,
}

impl JsonStorage {
    pub fn new(
        address_book_path: impl Into<PathBuf>,
        seller_address_book_path: impl Into<PathBuf>,
        user_prefs_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            address_book_path: address_book_path.into(),
            seller_address_book_path: seller_address_book_path.into(),
            user_prefs_path: user_prefs_path.into(),
        }
    }

    /// Book locations taken from `prefs`.
    pub fn from_prefs(prefs: &dyn ReadOnlyUserPrefs, user_prefs_path: impl Into<PathBuf>) -> Self {
        Self::new(
            prefs.address_book_file_path(),
            prefs.seller_address_book_file_path(),
            user_prefs_path,
        )
    }

    pub fn address_book_path(&self) -> &Path {
        &self.address_book_path
    }

    pub fn seller_address_book_path(&self) -> &Path {
        &self.seller_address_book_path
    }

    pub fn user_prefs_path(&self) -> &Path {
        &self.user_prefs_path
    }
}

impl Storage for JsonStorage {
    fn read_address_book(&self) -> Result<Option<AddressBook>> {
        read_json::<SerializedAddressBook>(&self.address_book_path)?
            .map(AddressBook::try_from)
            .transpose()
    }

    fn save_address_book(&mut self, book: &dyn ReadOnlyAddressBook) -> Result<()> {
        write_json(&self.address_book_path, &SerializedAddressBook::from(book))
    }

    fn read_seller_address_book(&self) -> Result<Option<SellerAddressBook>> {
        read_json::<SerializedSellerAddressBook>(&self.seller_address_book_path)?
            .map(SellerAddressBook::try_from)
            .transpose()
    }

    fn save_seller_address_book(&mut self, book: &dyn ReadOnlySellerAddressBook) -> Result<()> {
        write_json(
            &self.seller_address_book_path,
            &SerializedSellerAddressBook::from(book),
        )
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>> {
        read_json(&self.user_prefs_path)
    }

    fn save_user_prefs(&mut self, prefs: &dyn ReadOnlyUserPrefs) -> Result<()> {
        write_json(&self.user_prefs_path, &UserPrefs::from_read_only(prefs)?)
    }
}

/// Reads and parses `path`, or `None` if the file does not exist.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        debug!(path = %path.display(), "data file not found");
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(ClientbookError::Io)?;
    let value = serde_json::from_str(&content).map_err(ClientbookError::Serialization)?;
    Ok(Some(value))
}

/// Pretty-prints `value` to `path`, creating parent directories as needed.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(ClientbookError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(value).map_err(ClientbookError::Serialization)?;
    fs::write(path, content).map_err(ClientbookError::Io)?;
    debug!(path = %path.display(), "wrote data file");
    Ok(())
}
