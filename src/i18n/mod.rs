//! Message catalogs for user-facing text.
//!
//! Catalogs are flat JSON objects (`locales/<lang>.json`) embedded into the
//! binary. Templates use `{name}` placeholders.

use std::collections::HashMap;

use anyhow::{Context, Result, bail};
use lazy_static::lazy_static;
use rust_embed::RustEmbed;
use tracing::warn;

use crate::error::Error;

pub const DEFAULT_LANGUAGE: &str = "en";

#[derive(RustEmbed)]
#[folder = "locales/"]
struct Locales;

type Catalog = HashMap<String, String>;

lazy_static! {
    /// Every embedded catalog, keyed by language code.
    static ref BUNDLE: HashMap<String, Catalog> = load_bundle();
}

fn load_bundle() -> HashMap<String, Catalog> {
    Locales::iter()
        .filter_map(|name| {
            let lang = name.strip_suffix(".json")?.to_string();
            let file = Locales::get(&name)?;
            match serde_json::from_slice::<Catalog>(&file.data) {
                Ok(catalog) => Some((lang, catalog)),
                Err(e) => {
                    warn!(file = %name, error = %e, "skipping malformed locale file");
                    None
                }
            }
        })
        .collect()
}

/// Looks up messages in one language.
#[derive(Clone, Debug)]
pub struct Translator {
    language: String,
    catalog: &'static Catalog,
}

impl Translator {
    /// Create a translator for a language tag such as `en` or `fa-IR`.
    ///
    /// Only the primary subtag is used for the lookup.
    pub fn new(tag: &str) -> Result<Self> {
        let well_formed = !tag.is_empty()
            && tag
                .split(['-', '_'])
                .all(|part| !part.is_empty() && part.chars().all(|c| c.is_ascii_alphanumeric()));
        if !well_formed {
            bail!("Invalid language tag {tag:?}");
        }

        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or(tag)
            .to_ascii_lowercase();
        let catalog = BUNDLE
            .get(&language)
            .with_context(|| format!("Unsupported language: {tag}"))?;

        Ok(Self { language, catalog })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Translate `id`, filling `{name}` placeholders from `args`.
    ///
    /// Unknown ids are returned unchanged.
    pub fn t(&self, id: &str, args: &[(&str, &str)]) -> String {
        let Some(template) = self.catalog.get(id) else {
            return id.to_string();
        };

        args.iter().fold(template.clone(), |text, (name, value)| {
            text.replace(&format!("{{{name}}}"), value)
        })
    }

    /// Render a calculator error.
    pub fn error(&self, error: &Error) -> String {
        let detail = error.detail().unwrap_or_default();
        self.t(error.message_id(), &[("detail", detail.as_str())])
    }
}

/// Translate `id` in the default language.
pub fn t(id: &str, args: &[(&str, &str)]) -> String {
    t_with_lang(DEFAULT_LANGUAGE, id, args)
}

/// Translate `id` in `lang`, falling back to the id itself.
pub fn t_with_lang(lang: &str, id: &str, args: &[(&str, &str)]) -> String {
    match Translator::new(lang) {
        Ok(translator) => translator.t(id, args),
        Err(_) => id.to_string(),
    }
}

/// Language codes with an embedded catalog, sorted.
pub fn supported_languages() -> Vec<String> {
    let mut languages: Vec<String> = BUNDLE.keys().cloned().collect();
    languages.sort();
    languages
}
