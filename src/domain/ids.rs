//! Identifier newtypes
//!
//! Strongly-typed identifiers so the account-id, account-number, and
//! customer-id namespaces cannot be mixed up at call sites.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Unique account identifier, assigned at creation and immutable.
/// This is the lookup key of the account store.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

/// Public account number, assigned at creation and immutable.
/// Drawn from the same 16-digit space as `AccountId` but never
/// interchangeable with it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountNumber(String);

/// Caller-supplied customer identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(String);

macro_rules! id_impls {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
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
    };
}

id_impls!(AccountId);
id_impls!(AccountNumber);
id_impls!(CustomerId);
