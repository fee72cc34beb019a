//! Entity ids
//!
//! Each entity gets its own uuid newtype so a goal id can never be passed
//! where a trip id is expected. Ids display as a short tagged form
//! (`gol-550e8400`) and are resolved from user input by prefix.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Behaviour shared by every entity id
pub trait EntityId: Copy + Eq + fmt::Display {
    /// Entity name used in messages ("Goal", "Trip", ...)
    const ENTITY: &'static str;

    /// Tag shown in front of the short id
    const TAG: &'static str;

    fn uuid(&self) -> Uuid;

    /// True when `input`, with or without the tag, starts this id's uuid
    ///
    /// Hyphens are ignored on both sides, so prefixes of the hyphenated and
    /// the simple form both match.
    fn matches_prefix(&self, input: &str) -> bool {
        let input = input.trim();
        let bare: String = input
            .strip_prefix(Self::TAG)
            .unwrap_or(input)
            .chars()
            .filter(|c| *c != '-')
            .collect();
        !bare.is_empty()
            && self
                .uuid()
                .simple()
                .to_string()
                .starts_with(&bare.to_ascii_lowercase())
    }
}

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $tag:literal, $entity:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// A fresh random id
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl EntityId for $name {
            const ENTITY: &'static str = $entity;
            const TAG: &'static str = $tag;

            fn uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                Self(uuid)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.simple().to_string();
                write!(f, "{}{}", $tag, &hex[..8])
            }
        }

        /// Parses a full uuid, optionally tagged
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                Uuid::parse_str(s.strip_prefix($tag).unwrap_or(s)).map(Self)
            }
        }
    };
}

entity_id!(
    /// Identifies a [`Transaction`](super::Transaction)
    TransactionId,
    "txn-",
    "Transaction"
);
entity_id!(BudgetId, "bud-", "Budget");
entity_id!(TripId, "trp-", "Trip");
entity_id!(GoalId, "gol-", "Goal");

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "550e8400-e29b-41d4-a716-446655440000";

    #[test]
    fn test_short_display_is_tagged() {
        let id: GoalId = UUID.parse().unwrap();
        assert_eq!(id.to_string(), "gol-550e8400");
        assert_eq!(TripId::new().to_string().len(), 12);
    }

    #[test]
    fn test_fresh_ids_differ() {
        let ids: std::collections::HashSet<_> = (0..100).map(|_| TransactionId::new()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_serialized_as_bare_uuid() {
        let id: TripId = UUID.parse().unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", UUID));
        assert_eq!(serde_json::from_str::<TripId>(&json).unwrap(), id);
    }

    #[test]
    fn test_parse_accepts_tag() {
        let id: BudgetId = format!("bud-{}", UUID).parse().unwrap();
        assert_eq!(id.as_uuid().to_string(), UUID);
        assert!("bud-550e8400".parse::<BudgetId>().is_err());
    }

    #[test]
    fn test_matches_prefix() {
        let id: TransactionId = UUID.parse().unwrap();
        assert!(id.matches_prefix("550e84"));
        assert!(id.matches_prefix("txn-550e8400"));
        assert!(id.matches_prefix("550E84"));
        assert!(id.matches_prefix("550e8400-e29b"));
        assert!(!id.matches_prefix("660e"));
        assert!(!id.matches_prefix(""));
        assert!(!id.matches_prefix("txn-"));
    }

    #[test]
    fn test_matches_prefix_ignores_hyphens() {
        let id: TransactionId = UUID.parse().unwrap();
        assert!(id.matches_prefix("550e8400e29b"));
        assert!(id.matches_prefix("txn-550e8400e29b41d4"));
        assert!(id.matches_prefix("550e8400-e29b-41d4"));
        assert!(!id.matches_prefix("550e8400e29c"));
        assert!(!id.matches_prefix("---"));
    }

    #[test]
    fn test_entity_names() {
        assert_eq!(GoalId::ENTITY, "Goal");
        assert_eq!(TransactionId::TAG, "txn-");
    }
}
