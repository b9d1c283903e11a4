//! In-memory store for short URL records and their click ledgers.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{ClickEvent, ShortUrl};
use crate::error::AppError;

struct StoreInner {
    records: HashMap<String, ShortUrl>,
    clicks: HashMap<String, Vec<ClickEvent>>,
}

/// Process-memory registry of short URLs plus the per-shortcode click ledger.
///
/// Both maps live behind one coarse `RwLock`: reads run concurrently, writes
/// are serialized, and a record plus its empty ledger entry appear in the
/// same critical section. Records and clicks are never deleted; expiry is a
/// read-time decision against the caller-supplied clock value.
///
/// All operations are synchronous and hold the lock only for map access, so
/// they are safe to call from async handlers without blocking concerns.
pub struct ShortUrlStore {
    inner: RwLock<StoreInner>,
}

impl ShortUrlStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: HashMap::new(),
                clicks: HashMap::new(),
            }),
        }
    }

    /// Inserts a record if its shortcode is free, seeding an empty click
    /// ledger entry in the same critical section.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the shortcode is already taken,
    /// whether the existing record is live or expired.
    pub fn insert(&self, record: ShortUrl) -> Result<(), AppError> {
        let mut inner = self.write_inner()?;

        if inner.records.contains_key(&record.shortcode) {
            return Err(AppError::conflict(
                "Shortcode already exists",
                json!({ "shortcode": record.shortcode }),
            ));
        }

        inner.clicks.insert(record.shortcode.clone(), Vec::new());
        inner.records.insert(record.shortcode.clone(), record);
        Ok(())
    }

    /// Looks up a live record by shortcode.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the shortcode was never allocated,
    /// [`AppError::Expired`] if its validity window has passed at `now`.
    pub fn resolve(&self, code: &str, now: DateTime<Utc>) -> Result<ShortUrl, AppError> {
        let inner = self.read_inner()?;

        let record = inner.records.get(code).ok_or_else(|| {
            AppError::not_found("Shortcode not found", json!({ "shortcode": code }))
        })?;

        if record.is_expired(now) {
            return Err(AppError::expired(
                "URL has expired",
                json!({ "shortcode": code, "expired_at": record.expires_at }),
            ));
        }

        Ok(record.clone())
    }

    /// Appends a click to a shortcode's ledger.
    ///
    /// Callers are expected to have resolved the shortcode first; a missing
    /// ledger entry here means the store is inconsistent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the shortcode has no ledger entry.
    pub fn append_click(&self, code: &str, event: ClickEvent) -> Result<(), AppError> {
        let mut inner = self.write_inner()?;

        match inner.clicks.get_mut(code) {
            Some(ledger) => {
                ledger.push(event);
                Ok(())
            }
            None => Err(AppError::internal(
                "Click ledger missing for shortcode",
                json!({ "shortcode": code }),
            )),
        }
    }

    /// Returns an owned snapshot of a shortcode's click history in append
    /// order. Unknown shortcodes yield an empty history.
    pub fn clicks(&self, code: &str) -> Result<Vec<ClickEvent>, AppError> {
        let inner = self.read_inner()?;
        Ok(inner.clicks.get(code).cloned().unwrap_or_default())
    }

    /// Number of allocated shortcodes, live and expired.
    pub fn len(&self) -> Result<usize, AppError> {
        Ok(self.read_inner()?.records.len())
    }

    pub fn is_empty(&self) -> Result<bool, AppError> {
        Ok(self.read_inner()?.records.is_empty())
    }

    fn read_inner(&self) -> Result<RwLockReadGuard<'_, StoreInner>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))
    }

    fn write_inner(&self) -> Result<RwLockWriteGuard<'_, StoreInner>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::internal("Store lock poisoned", json!({})))
    }
}

impl Default for ShortUrlStore {
    fn default() -> Self {
        Self::new()
    }
}
