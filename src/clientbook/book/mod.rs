//! # Entity Collections
//!
//! [`AddressBook`] holds every [`Client`](crate::model::Client) (buyers
//! included) and [`SellerAddressBook`] holds every
//! [`Seller`](crate::model::Seller). Both are thin, typed wrappers over a
//! shared [`UniqueList`], which owns the no-duplicates rule and the change
//! counter.
//!
//! The `ReadOnly*` traits are how snapshots cross the boundary to storage:
//! the model manager copies *in* from them at construction and hands them
//! *out* for saving, so callers never alias the live collections.

pub mod address_book;
pub mod seller_book;
pub mod unique_list;

pub use address_book::{AddressBook, ReadOnlyAddressBook};
pub use seller_book::{ReadOnlySellerAddressBook, SellerAddressBook};
pub use unique_list::UniqueList;

use crate::model::Entity;

/// A collection a [`FilteredList`](crate::filter::FilteredList) can project.
pub trait Listing {
    type Item: Entity;

    fn items(&self) -> &[Self::Item];

    /// Changes whenever `items` may have changed.
    fn version(&self) -> u64;
}
