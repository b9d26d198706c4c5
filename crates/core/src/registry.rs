//! Identity registry: one live `PlainDate` per canonical key.

use std::collections::HashMap;
use std::sync::{LazyLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::date::PlainDate;
use crate::error::DateResult;
use crate::input::{DateFields, DateInput, Resolved};

static GLOBAL: LazyLock<DateRegistry> = LazyLock::new(DateRegistry::new);

/// Interning table mapping canonical keys to their shared instance.
///
/// - No IO
/// - Insert-if-absent happens under the write lock, so racing constructions
///   of the same date still observe a single instance
/// - Entries live until [`DateRegistry::clear`]; handles already given out
///   stay valid after a clear but are no longer the canonical instance
///
/// Most code uses [`DateRegistry::global`] through the `PlainDate`
/// constructors. Tests that need isolation can own a registry instead.
#[derive(Debug, Default)]
pub struct DateRegistry {
    entries: RwLock<HashMap<i64, PlainDate>>,
}

impl DateRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry, created on first use.
    pub fn global() -> &'static DateRegistry {
        &GLOBAL
    }

    /// Resolves `input` and returns the canonical instance for it.
    pub fn date(&self, input: impl Into<DateInput>) -> DateResult<PlainDate> {
        match input.into().resolve()? {
            Resolved::Existing(date) => Ok(date),
            Resolved::Fields(fields) => Ok(self.intern(fields)),
        }
    }

    /// Returns the instance registered for these fields' key, registering a
    /// new one if there is none yet. On a hit the given fields are discarded.
    pub fn intern(&self, fields: DateFields) -> PlainDate {
        let fields = fields.normalized();
        let key = fields.key();

        if let Some(existing) = self.read().get(&key) {
            return existing.clone();
        }

        self.write()
            .entry(key)
            .or_insert_with(|| {
                tracing::trace!(key, "interning date");
                PlainDate::from_parts(fields, key)
            })
            .clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Forgets every registered instance.
    pub fn clear(&self) {
        let mut entries = self.write();
        tracing::debug!(entries = entries.len(), "clearing date registry");
        entries.clear();
    }

    // Every mutation is a single map call, so a poisoned map is still whole.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<i64, PlainDate>> {
        self.entries.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<i64, PlainDate>> {
        self.entries.write().unwrap_or_else(PoisonError::into_inner)
    }
}
