//! Durable storage: a key to JSON-document table, one row per collection.
//!
//! Each save is a whole-collection overwrite with last-write-wins
//! semantics. The three collections are written independently; there is
//! no cross-collection transaction, and a crash between two writes leaves
//! whatever each collection last durably held.
//!
//! Read failures are contained here: an absent key or an unparsable value
//! loads as an empty collection so the caller always has something to
//! show. Only real I/O errors (the database cannot be opened or written)
//! propagate.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::migrate;
use crate::models::{InventoryItem, Meal};

pub const MEALS_KEY: &str = "meals";
pub const INVENTORY_KEY: &str = "inventory";
pub const CATALOG_KEY: &str = "catalog";

pub struct Store {
    conn: Connection,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open store: {}", path.display()))?;
        let store = Store { conn };
        store.migrate()?;
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Store { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<()> {
        let version: i64 = self
            .conn
            .pragma_query_value(None, "user_version", |row| row.get(0))?;

        if version < 1 {
            self.conn.execute_batch(
                "CREATE TABLE IF NOT EXISTS collections (
                    key TEXT PRIMARY KEY NOT NULL,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );

                PRAGMA user_version = 1;",
            )?;
        }

        Ok(())
    }

    fn read_raw(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(
                "SELECT value FROM collections WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()
            .with_context(|| format!("Failed to read collection '{key}'"))
    }

    fn write_raw(&self, key: &str, value: &str) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        self.conn
            .execute(
                "INSERT INTO collections (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                                updated_at = excluded.updated_at",
                params![key, value, now],
            )
            .with_context(|| format!("Failed to write collection '{key}'"))?;
        Ok(())
    }

    fn load_collection<T: DeserializeOwned>(&self, key: &str) -> Result<Vec<T>> {
        let Some(raw) = self.read_raw(key)? else {
            return Ok(Vec::new());
        };
        Ok(serde_json::from_str(&raw).unwrap_or_default())
    }

    fn save_collection<T: Serialize>(&self, key: &str, value: &[T]) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.write_raw(key, &raw)
    }

    /// Load the meal schedule, upgrading legacy records on the way in.
    pub fn load_meals(&self) -> Result<Vec<Meal>> {
        let Some(raw) = self.read_raw(MEALS_KEY)? else {
            return Ok(Vec::new());
        };
        let Ok(Value::Array(mut records)) = serde_json::from_str(&raw) else {
            return Ok(Vec::new());
        };
        for record in &mut records {
            migrate::upgrade_meal_record(record);
        }
        Ok(serde_json::from_value(Value::Array(records)).unwrap_or_default())
    }

    pub fn save_meals(&self, meals: &[Meal]) -> Result<()> {
        self.save_collection(MEALS_KEY, meals)
    }

    pub fn load_inventory(&self) -> Result<Vec<InventoryItem>> {
        self.load_collection(INVENTORY_KEY)
    }

    pub fn save_inventory(&self, items: &[InventoryItem]) -> Result<()> {
        self.save_collection(INVENTORY_KEY, items)
    }

    pub fn load_catalog(&self) -> Result<Vec<String>> {
        self.load_collection(CATALOG_KEY)
    }

    pub fn save_catalog(&self, names: &[String]) -> Result<()> {
        self.save_collection(CATALOG_KEY, names)
    }
}
