//! Shared builders and doubles for unit tests.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::ports::Sleeper;
use crate::domain::{Item, ItemDraft, Stock};

/// Build a valid item with the given core fields.
pub fn sample_item(id: &str, name: &str, price: f64, category: &str) -> Item {
    item_from(draft(id, name, price, category))
}

/// Draft with the given core fields and defaults elsewhere.
pub fn draft(id: &str, name: &str, price: f64, category: &str) -> ItemDraft {
    ItemDraft {
        id: id.to_owned(),
        name: name.to_owned(),
        description: format!("{name} description"),
        price,
        category: category.to_owned(),
        stock: Some(Stock::Status("In Stock".to_owned())),
        ..ItemDraft::default()
    }
}

/// Validate a draft, panicking on invalid fixtures.
pub fn item_from(draft: ItemDraft) -> Item {
    match Item::new(draft) {
        Ok(item) => item,
        Err(error) => panic!("invalid test item: {error}"),
    }
}

/// Parse an RFC 3339 timestamp fixture.
pub fn timestamp(raw: &str) -> DateTime<Utc> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(value) => value.with_timezone(&Utc),
        Err(error) => panic!("invalid timestamp fixture {raw}: {error}"),
    }
}

/// Sleeper that returns immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct ImmediateSleeper;

#[async_trait]
impl Sleeper for ImmediateSleeper {
    async fn sleep(&self, _duration: Duration) {}
}

/// Sleeper recording each requested duration.
#[derive(Default)]
pub struct RecordingSleeper(pub Mutex<Vec<Duration>>);

impl RecordingSleeper {
    /// Durations requested so far, in call order.
    pub fn recorded(&self) -> Vec<Duration> {
        match self.0.lock() {
            Ok(entries) => entries.clone(),
            Err(_) => panic!("sleeper mutex"),
        }
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        let mut entries = match self.0.lock() {
            Ok(entries) => entries,
            Err(_) => panic!("sleeper mutex"),
        };
        entries.push(duration);
    }
}
