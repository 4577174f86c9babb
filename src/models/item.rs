//! # Work Item Model
//!
//! The stored unit of work. Only `status` takes part in batch processing; the
//! descriptive fields travel with the item untouched.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a stored item
pub type ItemId = i64;

/// Processing status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ItemStatus {
    #[default]
    Unprocessed,
    Processed,
}

impl ItemStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unprocessed => "UNPROCESSED",
            Self::Processed => "PROCESSED",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown item status: {0}")]
pub struct ParseStatusError(pub String);

impl FromStr for ItemStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNPROCESSED" => Ok(Self::Unprocessed),
            "PROCESSED" => Ok(Self::Processed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

impl TryFrom<String> for ItemStatus {
    type Error = ParseStatusError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A stored work item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct WorkItem {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub status: ItemStatus,
    pub email: Option<String>,
}

impl WorkItem {
    /// Bare item carrying only an identifier
    pub fn with_id(id: ItemId) -> Self {
        Self {
            id,
            name: String::new(),
            description: String::new(),
            status: ItemStatus::Unprocessed,
            email: None,
        }
    }

    pub fn is_processed(&self) -> bool {
        self.status == ItemStatus::Processed
    }

    pub fn mark_processed(&mut self) {
        self.status = ItemStatus::Processed;
    }
}

/// Payload for creating or replacing an item
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Optional; only a present address is checked
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub status: Option<ItemStatus>,
}

impl NewItem {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            email: Some(email.into()),
            status: None,
        }
    }

    /// Materialize the payload as a stored item with the given id and status
    pub fn into_item(self, id: ItemId, status: ItemStatus) -> WorkItem {
        WorkItem {
            id,
            name: self.name,
            description: self.description,
            status,
            email: self.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&ItemStatus::Unprocessed).unwrap(),
            "\"UNPROCESSED\""
        );
        assert_eq!(
            serde_json::from_str::<ItemStatus>("\"PROCESSED\"").unwrap(),
            ItemStatus::Processed
        );
    }

    #[test]
    fn test_status_parsing_rejects_unknown_values() {
        assert_eq!("PROCESSED".parse::<ItemStatus>(), Ok(ItemStatus::Processed));
        assert_eq!(
            "done".parse::<ItemStatus>(),
            Err(ParseStatusError("done".to_string()))
        );
    }

    #[test]
    fn test_mark_processed_is_unconditional() {
        let mut item = WorkItem::with_id(3);
        item.mark_processed();
        item.mark_processed();
        assert!(item.is_processed());
    }

    #[test]
    fn test_new_item_deserializes_without_status() {
        let payload: NewItem =
            serde_json::from_str(r#"{"name":"a","description":"b","email":"c@d"}"#).unwrap();
        assert_eq!(payload.status, None);

        let item = payload.into_item(9, ItemStatus::Unprocessed);
        assert_eq!(item.id, 9);
        assert_eq!(item.email.as_deref(), Some("c@d"));
    }

    #[test]
    fn test_new_item_email_is_optional() {
        let payload: NewItem = serde_json::from_str(r#"{"name":"a","description":"b"}"#).unwrap();
        assert_eq!(payload.email, None);
    }
}
