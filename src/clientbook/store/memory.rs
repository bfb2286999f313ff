use super::Storage;
use crate::book::{AddressBook, ReadOnlyAddressBook, ReadOnlySellerAddressBook, SellerAddressBook};
use crate::error::Result;
use crate::prefs::{ReadOnlyUserPrefs, UserPrefs};

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    address_book: Option<AddressBook>,
    seller_address_book: Option<SellerAddressBook>,
    user_prefs: Option<UserPrefs>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for InMemoryStorage {
    fn read_address_book(&self) -> Result<Option<AddressBook>> {
        Ok(self.address_book.clone())
    }

    fn save_address_book(&mut self, book: &dyn ReadOnlyAddressBook) -> Result<()> {
        self.address_book = Some(AddressBook::from_read_only(book)?);
        Ok(())
    }

    fn read_seller_address_book(&self) -> Result<Option<SellerAddressBook>> {
        Ok(self.seller_address_book.clone())
    }

    fn save_seller_address_book(&mut self, book: &dyn ReadOnlySellerAddressBook) -> Result<()> {
        self.seller_address_book = Some(SellerAddressBook::from_read_only(book)?);
        Ok(())
    }

    fn read_user_prefs(&self) -> Result<Option<UserPrefs>> {
        Ok(self.user_prefs.clone())
    }

    fn save_user_prefs(&mut self, prefs: &dyn ReadOnlyUserPrefs) -> Result<()> {
        self.user_prefs = Some(UserPrefs::from_read_only(prefs)?);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Address, Client, Email, Name, Phone, Preference, Seller, Tag};

    /// A general client tagged `friends`, with contact details derived from
    /// `name` so different names never collide.
    pub fn client(name: &str) -> Client {
        let handle: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .collect::<String>()
            .to_lowercase();
        Client::new(
            Name::new(name).unwrap(),
            Phone::new("94351253").unwrap(),
            Email::new(format!("{}@example.com", handle)).unwrap(),
            Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
            [Tag::new("friends").unwrap()],
        )
    }

    pub fn buyer(name: &str) -> Client {
        client(name).into_buyer(Preference::new("4-room flat near an MRT station").unwrap())
    }

    pub fn seller(name: &str) -> Seller {
        let client = client(name);
        Seller::new(
            client.name,
            Phone::new("95352563").unwrap(),
            client.email,
            Address::new("wall street").unwrap(),
            Address::new("Blk 30 Geylang Street 29, #06-40").unwrap(),
            [Tag::new("urgent").unwrap()],
        )
    }

    pub fn typical_address_book() -> AddressBook {
        let mut book = AddressBook::new();
        for name in ["Alice Pauline", "Benson Meier", "Carl Kurz"] {
            book.add_client(client(name)).unwrap();
        }
        book.add_buyer(buyer("Daniel Meier")).unwrap();
        book
    }

    pub fn typical_seller_address_book() -> SellerAddressBook {
        let mut book = SellerAddressBook::new();
        for name in ["Elle Meyer", "Fiona Kunz", "George Best"] {
            book.add_seller(seller(name)).unwrap();
        }
        book
    }

    pub struct StoreFixture {
        pub storage: InMemoryStorage,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                storage: InMemoryStorage::new(),
            }
        }

        pub fn with_typical_books(mut self) -> Self {
            self.storage
                .save_address_book(&typical_address_book())
                .unwrap();
            self.storage
                .save_seller_address_book(&typical_seller_address_book())
                .unwrap();
            self
        }

        pub fn with_clients(mut self, count: usize) -> Self {
            let mut book = self
                .storage
                .read_address_book()
                .unwrap()
                .unwrap_or_default();
            for i in 0..count {
                book.add_client(client(&format!("Test Client {}", i + 1)))
                    .unwrap();
            }
            self.storage.save_address_book(&book).unwrap();
            self
        }

        pub fn with_user_prefs(mut self, prefs: UserPrefs) -> Self {
            self.storage.save_user_prefs(&prefs).unwrap();
            self
        }
    }
}
