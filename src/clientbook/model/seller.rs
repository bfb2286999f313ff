use super::fields::{Address, Email, Name, Phone, Tag};
use super::{write_tags, Entity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Someone with a property on the market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seller {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    /// Address of the property being sold.
    pub selling_address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
}

impl Seller {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        selling_address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            selling_address,
            tags: tags.into_iter().collect(),
        }
    }

    pub fn is_same_seller(&self, other: &Seller) -> bool {
        self.is_same(other)
    }
}

impl Entity for Seller {
    const KIND: &'static str = "seller";

    fn name(&self) -> &Name {
        &self.name
    }

    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Selling: {}",
            self.name, self.phone, self.email, self.address, self.selling_address
        )?;
        write_tags(f, self.tags.iter())
    }
}
