//! # Clientbook Architecture
//!
//! Clientbook is the **model layer** of a property agent's address book: clients (some of
//! them buyers) in one book, sellers in another, and the user's preferences. It is a library
//! with no opinion on the UI. A GUI, a text command interpreter, or a test all drive it the
//! same way.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Collaborators (not in this crate)                          │
//! │  - Command interpreter: parses text, calls the manager      │
//! │  - GUI: renders filtered lists and window settings          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model Manager (manager.rs)                                 │
//! │  - Sole mutation/query surface                              │
//! │  - Vends live filtered views (filter.rs)                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Books (book/) and Preferences (prefs.rs)                   │
//! │  - AddressBook, SellerAddressBook over a UniqueList         │
//! │  - Entities and validated fields (model/)                   │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract Storage trait                                   │
//! │  - JsonStorage (production), InMemoryStorage (testing)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principles
//!
//! - **Single owner.** The [`ModelManager`] owns both books and the preferences. It copies
//!   them in at construction and never aliases the caller's snapshots.
//! - **No duplicates.** Two entries with the same name never coexist in a book. Adding or
//!   editing into a collision fails with [`ClientbookError::DuplicateEntity`].
//! - **Live, lazy views.** [`FilteredList`] handles re-filter on read, only when the book or
//!   the predicate changed since the last read.
//! - **Synchronous.** Everything runs on the caller's thread and completes before returning.
//!
//! ## Module Overview
//!
//! - [`manager`]: The model manager, entry point for all operations
//! - [`filter`]: Predicates and live filtered views
//! - [`book`]: Entity collections and their read-only snapshot traits
//! - [`model`]: Clients, buyers, sellers and their validated fields
//! - [`prefs`]: GUI settings and data file locations
//! - [`store`]: Storage abstraction, JSON and in-memory backends, sample data
//! - [`config`]: Application configuration (log level, preferences location)
//! - [`init`]: Startup wiring with fallbacks
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod book;
pub mod config;
pub mod error;
pub mod filter;
pub mod init;
pub mod logging;
pub mod manager;
pub mod model;
pub mod prefs;
pub mod store;

pub use book::{AddressBook, ReadOnlyAddressBook, ReadOnlySellerAddressBook, SellerAddressBook};
pub use error::{ClientbookError, Result};
pub use filter::{FilteredClientList, FilteredList, FilteredSellerList, Predicate, ViewStamp};
pub use manager::ModelManager;
pub use model::{Client, ClientKind, Entity, Seller};
pub use prefs::{GuiSettings, ReadOnlyUserPrefs, UserPrefs};
