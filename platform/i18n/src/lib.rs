//! Localization port shared by the suite's presentation slices.
//!
//! Callers never format user-facing text themselves: they name a [`MessageKey`]
//! and hand interpolation arguments to a [`Translator`]. [`Catalog`] is the
//! JSON-backed implementation; keys it does not carry fall back to English.

mod keys;

use std::{collections::HashMap, path::Path};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use keys::MessageKey;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid catalog json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown message key: {0}")]
    UnknownKey(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Turns a message key plus positional arguments into display text.
pub trait Translator: Send + Sync {
    fn translate(&self, key: MessageKey, args: &[&str]) -> String;

    fn text(&self, key: MessageKey) -> String {
        self.translate(key, &[])
    }
}

/// On-disk catalog shape.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct CatalogFile {
    pub locale: String,
    #[serde(default)]
    pub messages: HashMap<String, String>,
}

#[derive(Clone, Debug)]
pub struct Catalog {
    locale: String,
    messages: HashMap<MessageKey, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::english()
    }
}

impl Catalog {
    /// Built-in catalog; every key resolves to its default text.
    pub fn english() -> Self {
        Self {
            locale: "en".into(),
            messages: HashMap::new(),
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn from_file(file: CatalogFile) -> CatalogResult<Self> {
        let mut messages = HashMap::with_capacity(file.messages.len());
        for (id, text) in file.messages {
            let key = MessageKey::from_id(&id).ok_or(CatalogError::UnknownKey(id))?;
            messages.insert(key, text);
        }
        Ok(Self {
            locale: file.locale,
            messages,
        })
    }

    pub fn from_json_str(raw: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(raw)?;
        Self::from_file(file)
    }

    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_json_str(&raw)?;
        debug!(
            locale = %catalog.locale,
            overrides = catalog.messages.len(),
            "message catalog loaded"
        );
        Ok(catalog)
    }

    /// Every key with the text this catalog would produce for it.
    pub fn to_file(&self) -> CatalogFile {
        let messages = MessageKey::ALL
            .iter()
            .map(|key| (key.id().to_string(), self.template(*key).to_string()))
            .collect();
        CatalogFile {
            locale: self.locale.clone(),
            messages,
        }
    }

    fn template(&self, key: MessageKey) -> &str {
        self.messages
            .get(&key)
            .map(String::as_str)
            .unwrap_or_else(|| key.default_text())
    }
}

impl Translator for Catalog {
    fn translate(&self, key: MessageKey, args: &[&str]) -> String {
        interpolate(self.template(key), args)
    }
}

/// Replaces `{0}`, `{1}`, ... with the matching argument. Placeholders with no
/// argument are left as-is.
pub fn interpolate(template: &str, args: &[&str]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        let arg = tail.find('}').and_then(|close| {
            let idx: usize = tail[1..close].parse().ok()?;
            Some((args.get(idx)?, close))
        });
        match arg {
            Some((arg, close)) => {
                out.push_str(arg);
                rest = &tail[close + 1..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_uses_default_text() {
        let catalog = Catalog::english();
        assert_eq!(catalog.text(MessageKey::You), "You");
        assert_eq!(
            catalog.translate(MessageKey::TimeMinutes, &["4"]),
            "4 minutes ago"
        );
    }

    #[test]
    fn overrides_replace_defaults_and_keep_fallbacks() {
        let catalog = Catalog::from_json_str(
            r#"{"locale": "es", "messages": {"activity.user.you": "Tú", "time.minutes_ago": "hace {0} minutos"}}"#,
        )
        .unwrap();
        assert_eq!(catalog.locale(), "es");
        assert_eq!(catalog.text(MessageKey::You), "Tú");
        assert_eq!(
            catalog.translate(MessageKey::TimeMinutes, &["3"]),
            "hace 3 minutos"
        );
        assert_eq!(catalog.text(MessageKey::SystemUser), "Metabase");
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Catalog::from_json_str(r#"{"locale": "xx", "messages": {"nope": "x"}}"#)
            .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownKey(ref id) if id == "nope"));
    }

    #[test]
    fn malformed_json_is_reported() {
        let err = Catalog::from_json_str("{").unwrap_err();
        assert!(matches!(err, CatalogError::Json(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Catalog::load("/definitely/not/here.json").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }

    #[test]
    fn interpolation_leaves_unmatched_placeholders() {
        assert_eq!(interpolate("{0} and {1}", &["a"]), "a and {1}");
        assert_eq!(interpolate("{x} {", &["a"]), "{x} {");
    }

    #[test]
    fn arguments_are_not_rescanned() {
        assert_eq!(interpolate("{0}, {1}", &["{1}", "b"]), "{1}, b");
        assert_eq!(interpolate("{1} {0} {1}", &["a", "b"]), "b a b");
    }

    #[test]
    fn dump_covers_every_key() {
        let file = Catalog::english().to_file();
        assert_eq!(file.messages.len(), MessageKey::ALL.len());
        assert_eq!(file.messages["feed.loading"], "Loading...");
    }
}
