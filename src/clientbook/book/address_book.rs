use super::{Listing, UniqueList};
use crate::error::{ClientbookError, Result};
use crate::model::{Client, Entity};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Read access to a client collection.
pub trait ReadOnlyAddressBook {
    fn clients(&self) -> &[Client];
}

/// All clients, buyers included, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AddressBook {
    clients: UniqueList<Client>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies the clients out of `source`.
    pub fn from_read_only(source: &dyn ReadOnlyAddressBook) -> Result<Self> {
        let mut book = Self::new();
        book.reset_data(source)?;
        Ok(book)
    }

    pub fn set_clients(&mut self, clients: Vec<Client>) -> Result<()> {
        self.clients.set_all(clients)
    }

    pub fn reset_data(&mut self, source: &dyn ReadOnlyAddressBook) -> Result<()> {
        self.set_clients(source.clients().to_vec())
    }

    pub fn has_client(&self, client: &Client) -> bool {
        self.clients.contains(client)
    }

    pub fn add_client(&mut self, client: Client) -> Result<()> {
        self.clients.add(client)
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> Result<()> {
        self.clients.set(target, edited)
    }

    pub fn remove_client(&mut self, target: &Client) -> Result<Client> {
        self.clients.remove(target)
    }

    /// True only if a matching entry exists and it is a buyer.
    pub fn has_buyer(&self, buyer: &Client) -> bool {
        self.clients.iter().any(|c| c.is_same_buyer(buyer))
    }

    pub fn add_buyer(&mut self, buyer: Client) -> Result<()> {
        if !buyer.is_buyer() {
            return Err(ClientbookError::InvalidArgument(format!(
                "{} is not a buyer",
                buyer.name
            )));
        }
        self.clients.add(buyer)
    }

    pub fn buyers(&self) -> impl Iterator<Item = &Client> {
        self.clients.iter().filter(|c| c.is_buyer())
    }

    /// Sorts case-insensitively by name; exact name breaks ties.
    pub fn sort_clients(&mut self) {
        self.clients.sort_by(|a, b| {
            let (a, b) = (a.name().as_str(), b.name().as_str());
            a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
        });
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl ReadOnlyAddressBook for AddressBook {
    fn clients(&self) -> &[Client] {
        self.clients.as_slice()
    }
}

impl Listing for AddressBook {
    type Item = Client;

    fn items(&self) -> &[Client] {
        self.clients.as_slice()
    }

    fn version(&self) -> u64 {
        self.clients.version()
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} clients", self.clients.len())
    }
}

/// On-disk shape: `{"clients": [...]}`.
#[derive(Serialize, Deserialize)]
pub(crate) struct SerializedAddressBook {
    #[serde(default)]
    clients: Vec<Client>,
}

impl From<&dyn ReadOnlyAddressBook> for SerializedAddressBook {
    fn from(book: &dyn ReadOnlyAddressBook) -> Self {
        Self {
            clients: book.clients().to_vec(),
        }
    }
}

impl TryFrom<SerializedAddressBook> for AddressBook {
    type Error = ClientbookError;

    fn try_from(value: SerializedAddressBook) -> Result<Self> {
        let mut book = AddressBook::new();
        book.set_clients(value.clients)?;
        Ok(book)
    }
}
