//! Process-wide default configuration and messages.
//!
//! The global config is held as an immutable snapshot behind a lock: readers
//! clone the `Arc`, writers build a merged snapshot and swap it in, so a
//! reader always sees a complete configuration from before or after a write.
//!
//! Message stores are keyed by locale. The `None` locale is the fallback used
//! when no entry exists for the requested locale.

use crate::Config;
use std::collections::HashMap;
use std::sync::{Arc, LazyLock, PoisonError, RwLock};
use tracing::debug;
use ward_ir::{ErrorMessage, Reference};

type LocaleKey = Option<String>;

static GLOBAL_CONFIG: LazyLock<RwLock<Arc<Config>>> =
    LazyLock::new(|| RwLock::new(Arc::new(Config::default())));

static GLOBAL_MESSAGES: LazyLock<RwLock<HashMap<LocaleKey, ErrorMessage>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static SCHEMA_MESSAGES: LazyLock<RwLock<HashMap<LocaleKey, ErrorMessage>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

static SPECIFIC_MESSAGES: LazyLock<RwLock<HashMap<(Reference, LocaleKey), ErrorMessage>>> =
    LazyLock::new(|| RwLock::new(HashMap::new()));

/// Current global configuration snapshot.
///
/// An empty configuration is created on first access.
pub fn get_global_config() -> Arc<Config> {
    GLOBAL_CONFIG
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Shallow-merge `partial` into the global configuration.
///
/// Fields set on `partial` replace the stored ones; unset fields keep their
/// current value. Use [`delete_global_config`] to clear everything.
pub fn set_global_config(partial: &Config) {
    let mut guard = GLOBAL_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    let merged = guard.merge(partial);
    debug!(lang = ?merged.lang, abort_early = ?merged.abort_early, abort_pipe_early = ?merged.abort_pipe_early, "Global config updated");
    *guard = Arc::new(merged);
}

/// Reset the global configuration to empty
pub fn delete_global_config() {
    let mut guard = GLOBAL_CONFIG
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Arc::new(Config::default());
    debug!("Global config cleared");
}

fn lookup(store: &HashMap<LocaleKey, ErrorMessage>, lang: Option<&str>) -> Option<ErrorMessage> {
    lang.and_then(|lang| store.get(&Some(lang.to_string())))
        .or_else(|| store.get(&None::<String>))
        .cloned()
}

/// Set the last-resort message for a locale (`None` for every locale)
pub fn set_global_message(message: impl Into<ErrorMessage>, lang: Option<&str>) {
    GLOBAL_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(lang.map(str::to_string), message.into());
    debug!(lang = ?lang, "Global message set");
}

/// Last-resort message for a locale, falling back to the `None` entry
pub fn get_global_message(lang: Option<&str>) -> Option<ErrorMessage> {
    lookup(
        &GLOBAL_MESSAGES.read().unwrap_or_else(PoisonError::into_inner),
        lang,
    )
}

/// Remove the last-resort message for a locale
pub fn delete_global_message(lang: Option<&str>) {
    GLOBAL_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&lang.map(str::to_string));
}

/// Set the message used by every schema type check in a locale
pub fn set_schema_message(message: impl Into<ErrorMessage>, lang: Option<&str>) {
    SCHEMA_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert(lang.map(str::to_string), message.into());
    debug!(lang = ?lang, "Schema message set");
}

/// Schema type-check message for a locale, falling back to the `None` entry
pub fn get_schema_message(lang: Option<&str>) -> Option<ErrorMessage> {
    lookup(
        &SCHEMA_MESSAGES.read().unwrap_or_else(PoisonError::into_inner),
        lang,
    )
}

/// Remove the schema type-check message for a locale
pub fn delete_schema_message(lang: Option<&str>) {
    SCHEMA_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&lang.map(str::to_string));
}

/// Set the message for one kind of action or schema in a locale
pub fn set_specific_message(
    reference: Reference,
    message: impl Into<ErrorMessage>,
    lang: Option<&str>,
) {
    SPECIFIC_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .insert((reference, lang.map(str::to_string)), message.into());
    debug!(%reference, lang = ?lang, "Specific message set");
}

/// Message for one kind of action or schema, falling back to the `None` locale
pub fn get_specific_message(reference: Reference, lang: Option<&str>) -> Option<ErrorMessage> {
    let store = SPECIFIC_MESSAGES
        .read()
        .unwrap_or_else(PoisonError::into_inner);
    lang.and_then(|lang| store.get(&(reference, Some(lang.to_string()))))
        .or_else(|| store.get(&(reference, None::<String>)))
        .cloned()
}

/// Remove the message for one kind of action or schema in a locale
pub fn delete_specific_message(reference: Reference, lang: Option<&str>) {
    SPECIFIC_MESSAGES
        .write()
        .unwrap_or_else(PoisonError::into_inner)
        .remove(&(reference, lang.map(str::to_string)));
}

#[cfg(test)]
mod tests {
    use super::*;

    // Unit tests only touch locale keys no other test uses; the shared
    // global config is exercised in tests/global_store_test.rs.

    #[test]
    fn test_lookup_falls_back_to_default_locale() {
        let mut store = HashMap::new();
        store.insert(None, ErrorMessage::from("fallback"));
        store.insert(Some("de".to_string()), ErrorMessage::from("Ungültig"));

        assert_eq!(lookup(&store, Some("de")), Some(ErrorMessage::from("Ungültig")));
        assert_eq!(lookup(&store, Some("fr")), Some(ErrorMessage::from("fallback")));
        assert_eq!(lookup(&store, None), Some(ErrorMessage::from("fallback")));
        assert_eq!(lookup(&HashMap::new(), Some("de")), None);
    }

    #[test]
    fn test_specific_message_roundtrip() {
        let reference = Reference("store::tests::specific");
        assert_eq!(get_specific_message(reference, Some("xx-test")), None);

        set_specific_message(reference, "only here", Some("xx-test"));
        assert_eq!(
            get_specific_message(reference, Some("xx-test")),
            Some(ErrorMessage::from("only here"))
        );
        assert_eq!(get_specific_message(reference, Some("yy-test")), None);

        delete_specific_message(reference, Some("xx-test"));
        assert_eq!(get_specific_message(reference, Some("xx-test")), None);
    }
}
