//! # Domain Model
//!
//! Two entity types live in the books:
//!
//! - [`Client`]: held in the address book. A client is either a general
//!   contact or a buyer ([`ClientKind::Buyer`]); buyers are stored alongside
//!   every other client rather than in a collection of their own.
//! - [`Seller`]: held in the separate seller address book.
//!
//! ## Two Notions of Equality
//!
//! `PartialEq` compares every field. Uniqueness and lookup use the weaker
//! *domain equality* exposed through [`Entity::is_same`]: two entries with the
//! same [`Name`] are the same person, even if their phone numbers differ.
//! Collections never hold two entries that are the same under domain equality.

use std::collections::BTreeSet;
use std::fmt;

pub mod client;
pub mod fields;
pub mod seller;

pub use client::{Client, ClientKind};
pub use fields::{Address, Email, Name, Phone, Preference, Tag};
pub use seller::Seller;

/// Capabilities shared by everything stored in a unique list.
pub trait Entity: Clone + PartialEq + fmt::Debug + fmt::Display {
    /// Human-readable kind, used in error messages ("client", "seller").
    const KIND: &'static str;

    fn name(&self) -> &Name;

    fn tags(&self) -> &BTreeSet<Tag>;

    /// Domain equality: same person, regardless of other fields.
    fn is_same(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

fn write_tags<'a>(f: &mut fmt::Formatter<'_>, tags: impl Iterator<Item = &'a Tag>) -> fmt::Result {
    write!(f, "; Tags: ")?;
    for tag in tags {
        write!(f, "[{}]", tag)?;
    }
    Ok(())
}
