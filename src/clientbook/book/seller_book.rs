use super::{Listing, UniqueList};
use crate::error::{ClientbookError, Result};
use crate::model::Seller;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read access to a seller collection.
pub trait ReadOnlySellerAddressBook {
    fn sellers(&self) -> &[Seller];
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SellerAddressBook {
    sellers: UniqueList<Seller>,
}

impl SellerAddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_read_only(source: &dyn ReadOnlySellerAddressBook) -> Result<Self> {
        let mut book = Self::new();
        book.reset_data(source)?;
        Ok(book)
    }

    pub fn set_sellers(&mut self, sellers: Vec<Seller>) -> Result<()> {
        self.sellers.set_all(sellers)
    }

    pub fn reset_data(&mut self, source: &dyn ReadOnlySellerAddressBook) -> Result<()> {
        self.set_sellers(source.sellers().to_vec())
    }

    pub fn has_seller(&self, seller: &Seller) -> bool {
        self.sellers.contains(seller)
    }

    pub fn add_seller(&mut self, seller: Seller) -> Result<()> {
        self.sellers.add(seller)
    }

    pub fn set_seller(&mut self, target: &Seller, edited: Seller) -> Result<()> {
        self.sellers.set(target, edited)
    }

    pub fn remove_seller(&mut self, target: &Seller) -> Result<Seller> {
        self.sellers.remove(target)
    }

    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }
}

impl ReadOnlySellerAddressBook for SellerAddressBook {
    fn sellers(&self) -> &[Seller] {
        self.sellers.as_slice()
    }
}

impl Listing for SellerAddressBook {
    type Item = Seller;

    fn items(&self) -> &[Seller] {
        self.sellers.as_slice()
    }

    fn version(&self) -> u64 {
        self.sellers.version()
    }
}

impl fmt::Display for SellerAddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sellers", self.sellers.len())
    }
}

/// On-disk shape: `{"sellers": [...]}`.
#[derive(Serialize, Deserialize)]
pub(crate) struct SerializedSellerAddressBook {
    #[serde(default)]
    sellers: Vec<Seller>,
}

impl From<&dyn ReadOnlySellerAddressBook> for SerializedSellerAddressBook {
    fn from(book: &dyn ReadOnlySellerAddressBook) -> Self {
        Self {
            sellers: book.sellers().to_vec(),
        }
    }
}

impl TryFrom<SerializedSellerAddressBook> for SellerAddressBook {
    type Error = ClientbookError;

    fn try_from(value: SerializedSellerAddressBook) -> Result<Self> {
        let mut book = SellerAddressBook::new();
        book.set_sellers(value.sellers)?;
        Ok(book)
    }
}
