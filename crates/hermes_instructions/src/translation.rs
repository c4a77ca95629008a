use std::{fmt::Display, path::Path};

use fxhash::FxHashMap;
use tracing::{debug, warn};

pub const DEFAULT_LOCALE: &str = "en";

const BUNDLES: [(&str, &str); 2] = [
    ("en", include_str!("../locales/en.txt")),
    ("de", include_str!("../locales/de.txt")),
];

/// Turns message keys into display strings.
pub trait Translation {
    fn tr(&self, key: &str, params: &[&dyn Display]) -> String;

    fn locale(&self) -> &str;
}

/// Translation bundle read from `key=value` lines.
///
/// Values use `%1$s`, `%2$s`, ... for positional parameters and `%s` for the
/// next parameter in order. Unknown keys translate to the key itself.
#[derive(Debug, Clone)]
pub struct TranslationMap {
    locale: String,
    entries: FxHashMap<String, String>,
}

impl TranslationMap {
    pub fn parse(locale: impl Into<String>, content: &str) -> Self {
        let mut entries = FxHashMap::default();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            match line.split_once('=') {
                Some((key, value)) => {
                    entries.insert(key.trim().to_lowercase(), value.trim().to_owned());
                }
                None => debug!("Skipping translation line without '=': {}", line),
            }
        }

        TranslationMap {
            locale: locale.into(),
            entries,
        }
    }

    pub fn from_file<P: AsRef<Path>>(locale: impl Into<String>, file: P) -> std::io::Result<Self> {
        let content = std::fs::read_to_string(file)?;
        Ok(TranslationMap::parse(locale, &content))
    }

    /// Embedded bundle for `locale`. `de_DE` resolves to `de`, unknown locales
    /// fall back to English.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale
            .split(['_', '-'])
            .next()
            .unwrap_or(DEFAULT_LOCALE)
            .to_lowercase();

        let bundle = BUNDLES
            .iter()
            .find(|(name, _)| *name == language)
            .or_else(|| {
                warn!("No translation for locale {}, using {}", locale, DEFAULT_LOCALE);
                BUNDLES.iter().find(|(name, _)| *name == DEFAULT_LOCALE)
            });

        match bundle {
            Some((name, content)) => TranslationMap::parse(*name, content),
            None => TranslationMap::parse(DEFAULT_LOCALE, ""),
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&key.to_lowercase())
    }
}

impl Default for TranslationMap {
    fn default() -> Self {
        TranslationMap::for_locale(DEFAULT_LOCALE)
    }
}

impl Translation for TranslationMap {
    fn tr(&self, key: &str, params: &[&dyn Display]) -> String {
        match self.entries.get(&key.to_lowercase()) {
            Some(template) if !template.is_empty() => format_message(template, params),
            _ => {
                warn!("Missing translation for key {} in {}", key, self.locale);
                key.to_owned()
            }
        }
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

fn format_message(template: &str, params: &[&dyn Display]) -> String {
    let mut message = String::with_capacity(template.len());
    let mut next_param = 0;
    let mut rest = template;

    while let Some(position) = rest.find('%') {
        message.push_str(&rest[..position]);
        let after = &rest[position + 1..];

        if let Some(stripped) = after.strip_prefix('%') {
            message.push('%');
            rest = stripped;
            continue;
        }

        if let Some(stripped) = after.strip_prefix('s') {
            push_param(&mut message, params, next_param, "%s");
            next_param += 1;
            rest = stripped;
            continue;
        }

        let digits = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        let positional = after[digits..].starts_with("$s");

        match after[..digits].parse::<usize>() {
            Ok(index) if positional && index > 0 => {
                push_param(&mut message, params, index - 1, &rest[position..position + digits + 3]);
                rest = &after[digits + 2..];
            }
            _ => {
                message.push('%');
                rest = after;
            }
        }
    }

    message.push_str(rest);
    message
}

/// Missing parameters keep their placeholder.
fn push_param(message: &mut String, params: &[&dyn Display], index: usize, placeholder: &str) {
    match params.get(index) {
        Some(param) => message.push_str(&param.to_string()),
        None => message.push_str(placeholder),
    }
}
