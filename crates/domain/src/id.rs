//! Typed identifier newtypes backed by store-assigned integers.
//!
//! Identifiers are never minted by the domain: the store hands them out on
//! insert and they stay fixed for the lifetime of the record.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw key handed out by the store.
            #[must_use]
            pub fn from_raw(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the raw key.
            #[must_use]
            pub fn as_raw(self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId {
                        value: s.to_string(),
                    })
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Person`](crate::person::Person).
    PersonId
);

define_id!(
    /// Unique identifier for an [`Event`](crate::event::Event).
    EventId
);
