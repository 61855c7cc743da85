//! Controller configuration.
//!
//! # Invariants
//! - Defaults reproduce the historical behavior: slot `notes`, 3 second
//!   error auto-clear, English strings.

use crate::repo::kv_repo::KvRepository;
use crate::repo::note_repo::{KvNoteRepository, DEFAULT_NOTES_KEY};
use crate::view::messages::Locale;
use std::time::Duration;

pub const DEFAULT_ERROR_CLEAR_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreConfig {
    /// Slot holding the serialized note collection.
    pub storage_key: String,
    /// Delay before pending validation messages are dismissed.
    pub error_clear_delay: Duration,
    pub locale: Locale,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_NOTES_KEY.to_string(),
            error_clear_delay: DEFAULT_ERROR_CLEAR_DELAY,
            locale: Locale::default(),
        }
    }
}

impl CoreConfig {
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    pub fn with_error_clear_delay(mut self, delay: Duration) -> Self {
        self.error_clear_delay = delay;
        self
    }

    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Builds the note repository bound to `storage_key`.
    pub fn note_repository<K: KvRepository>(&self, kv: K) -> KvNoteRepository<K> {
        KvNoteRepository::with_key(kv, self.storage_key.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::{CoreConfig, DEFAULT_ERROR_CLEAR_DELAY};
    use crate::repo::kv_repo::MemoryKvRepository;
    use crate::view::messages::Locale;
    use std::time::Duration;

    #[test]
    fn defaults_match_historical_layout() {
        let config = CoreConfig::default();
        assert_eq!(config.storage_key, "notes");
        assert_eq!(config.error_clear_delay, DEFAULT_ERROR_CLEAR_DELAY);
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn note_repository_uses_configured_key() {
        let config = CoreConfig::default()
            .with_storage_key("scratch")
            .with_error_clear_delay(Duration::from_millis(10));
        let repo = config.note_repository(MemoryKvRepository::new());
        assert_eq!(repo.key(), "scratch");
    }
}
