use super::fields::{Address, Email, Name, Phone, Preference, Tag};
use super::{write_tags, Entity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// What role a client plays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ClientKind {
    #[default]
    General,
    Buyer {
        preference: Preference,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Client {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    #[serde(default)]
    pub tags: BTreeSet<Tag>,
    #[serde(default)]
    pub kind: ClientKind,
}

impl Client {
    pub fn new(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            address,
            tags: tags.into_iter().collect(),
            kind: ClientKind::General,
        }
    }

    pub fn buyer(
        name: Name,
        phone: Phone,
        email: Email,
        address: Address,
        tags: impl IntoIterator<Item = Tag>,
        preference: Preference,
    ) -> Self {
        Self::new(name, phone, email, address, tags).into_buyer(preference)
    }

    /// Turns this client into a buyer looking for `preference`.
    pub fn into_buyer(mut self, preference: Preference) -> Self {
        self.kind = ClientKind::Buyer { preference };
        self
    }

    pub fn is_buyer(&self) -> bool {
        matches!(self.kind, ClientKind::Buyer { .. })
    }

    pub fn preference(&self) -> Option<&Preference> {
        match &self.kind {
            ClientKind::Buyer { preference } => Some(preference),
            ClientKind::General => None,
        }
    }

    pub fn is_same_client(&self, other: &Client) -> bool {
        self.is_same(other)
    }

    /// Domain equality restricted to buyers: both sides must be buyers.
    pub fn is_same_buyer(&self, other: &Client) -> bool {
        self.is_buyer() && other.is_buyer() && self.is_same(other)
    }
}

impl Entity for Client {
    const KIND: &'static str = "client";

    fn name(&self) -> &Name {
        &self.name
    }

    fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }
}

impl fmt::Display for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}",
            self.name, self.phone, self.email, self.address
        )?;
        if let Some(preference) = self.preference() {
            write!(f, "; Looking for: {}", preference)?;
        }
        write_tags(f, self.tags.iter())
    }
}
