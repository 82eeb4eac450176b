use std::collections::BTreeMap;

use crate::domain::model::{ContactMessage, Override};
use crate::utils::error::Result;

/// Persistence seam for per-date schedule overrides. `load` is total: a
/// missing or unreadable backing store yields an empty map. Implementations
/// must serialize read-modify-write sequences so concurrent administrative
/// edits cannot lose updates.
pub trait OverrideStore: Send + Sync {
    fn load(&self) -> BTreeMap<String, Override>;
    fn set(&self, date: &str, entry: Override) -> Result<()>;
    fn remove(&self, date: &str) -> Result<bool>;
}

pub trait MessageArchive: Send + Sync {
    fn archive(&self, message: &ContactMessage) -> Result<()>;
}
