//! Validated field values shared by clients and sellers.
//!
//! Every field is a string newtype. Construction trims surrounding
//! whitespace and validates; invalid text is rejected with
//! [`ClientbookError::InvalidArgument`]. The same checks run when a value is
//! deserialized, so a hand-edited data file cannot smuggle in bad values.

use crate::error::{ClientbookError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

const ALNUM: &str = "[A-Za-z0-9]+";

static NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("name pattern"));

static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{3,}$").expect("phone pattern"));

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").expect("tag pattern"));

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    let local = format!(r"{ALNUM}([+_.\-]{ALNUM})*");
    let label = format!("{ALNUM}(-{ALNUM})*");
    Regex::new(&format!(r"^{local}@({label}\.)*{label}$")).expect("email pattern")
});

macro_rules! string_field {
    ($(#[$meta:meta])* $name:ident, $label:literal, $constraint:literal, $check:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            pub const CONSTRAINTS: &'static str = $constraint;

            pub fn new(value: impl Into<String>) -> Result<Self> {
                let value = value.into();
                let trimmed = value.trim();
                if $check(trimmed) {
                    Ok(Self(trimmed.to_string()))
                } else {
                    Err(ClientbookError::InvalidArgument(format!(
                        "{} '{}': {}",
                        $label,
                        value,
                        Self::CONSTRAINTS
                    )))
                }
            }

            /// Whether `new` would accept `value`.
            pub fn is_valid(value: &str) -> bool {
                $check(value.trim())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = ClientbookError;

            fn try_from(value: String) -> Result<Self> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl std::str::FromStr for $name {
            type Err = ClientbookError;

            fn from_str(s: &str) -> Result<Self> {
                Self::new(s)
            }
        }
    };
}

fn valid_name(s: &str) -> bool {
    NAME_RE.is_match(s)
}

fn valid_phone(s: &str) -> bool {
    PHONE_RE.is_match(s)
}

fn valid_email(s: &str) -> bool {
    if !EMAIL_RE.is_match(s) {
        return false;
    }
    // The top-level label must be at least two characters long.
    s.rsplit(|c| c == '.' || c == '@')
        .next()
        .is_some_and(|last| last.len() >= 2)
}

fn valid_text(s: &str) -> bool {
    s.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn valid_tag(s: &str) -> bool {
    TAG_RE.is_match(s)
}

string_field!(
    /// A person's name. Doubles as the identity key for domain equality.
    Name,
    "Name",
    "Names should only contain alphanumeric characters and spaces, and it should not be blank",
    valid_name
);

string_field!(
    Phone,
    "Phone",
    "Phone numbers should only contain numbers, and it should be at least 3 digits long",
    valid_phone
);

string_field!(
    Email,
    "Email",
    "Emails should be of the format local-part@domain, where the local part holds alphanumerics \
     and the special characters +_.- (not at either end) and the domain is made of alphanumeric \
     labels separated by '.' or '-', ending in a label at least 2 characters long",
    valid_email
);

string_field!(
    /// A postal address. Any non-blank text.
    Address,
    "Address",
    "Addresses can take any values, and it should not be blank",
    valid_text
);

string_field!(
    /// What a buyer is looking for, e.g. "4-room flat near Bishan".
    Preference,
    "Preference",
    "Housing preferences can take any values, and it should not be blank",
    valid_text
);

string_field!(
    Tag,
    "Tag",
    "Tag names should be a single alphanumeric word",
    valid_tag
);
