// SPDX-License-Identifier: MPL-2.0
use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    pub available_locales: Vec<LanguageIdentifier>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, None, &Config::default())
    }
}

impl I18n {
    /// Builds the localization bundles, from an override directory when
    /// `i18n_dir` is given, otherwise from the embedded `.ftl` assets.
    /// Override files that fail to parse are skipped; if none of them
    /// yields a bundle, the embedded assets are used instead.
    pub fn new(cli_lang: Option<String>, i18n_dir: Option<String>, config: &Config) -> Self {
        let (mut bundles, mut available_locales) = match &i18n_dir {
            Some(dir) => build_bundles(read_dir_sources(dir)),
            None => build_bundles(embedded_sources()),
        };
        if bundles.is_empty() && i18n_dir.is_some() {
            (bundles, available_locales) = build_bundles(embedded_sources());
        }

        let default_locale: LanguageIdentifier = "en-US".parse().unwrap();
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(default_locale);

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn set_locale(&mut self, locale: LanguageIdentifier) {
        if self.bundles.contains_key(&locale) {
            self.current_locale = locale;
        }
    }

    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(msg) = bundle.get_message(key) {
                if let Some(pattern) = msg.value() {
                    let mut errors = vec![];
                    let value = bundle.format_pattern(pattern, None, &mut errors);
                    if errors.is_empty() {
                        return value.to_string();
                    }
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn embedded_sources() -> Vec<(String, String)> {
    let mut sources = Vec::new();
    for file in Asset::iter() {
        let filename = file.as_ref().to_string();
        if let Some(content) = Asset::get(&filename) {
            sources.push((
                filename,
                String::from_utf8_lossy(content.data.as_ref()).to_string(),
            ));
        }
    }
    sources
}

fn read_dir_sources(dir: &str) -> Vec<(String, String)> {
    let mut sources = Vec::new();
    if let Ok(entries) = std::fs::read_dir(dir) {
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.ends_with(".ftl") {
                if let Ok(content) = std::fs::read_to_string(entry.path()) {
                    sources.push((name, content));
                }
            }
        }
    }
    sources
}

type Bundles = HashMap<LanguageIdentifier, FluentBundle<FluentResource>>;

/// Parses each source into a bundle keyed by the locale in its filename.
/// A source that fails to parse is reported and skipped, never fatal;
/// override directories can contain arbitrary files.
fn build_bundles(sources: Vec<(String, String)>) -> (Bundles, Vec<LanguageIdentifier>) {
    let mut bundles = HashMap::new();
    let mut available_locales = Vec::new();

    for (filename, content) in sources {
        let Some(locale_str) = filename.strip_suffix(".ftl") else {
            continue;
        };
        let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
            continue;
        };
        let res = match FluentResource::try_new(content) {
            Ok(res) => res,
            Err((_, errors)) => {
                eprintln!("Skipping translation file {}: {:?}", filename, errors);
                continue;
            }
        };
        let mut bundle = FluentBundle::new(vec![locale.clone()]);
        if let Err(errors) = bundle.add_resource(res) {
            eprintln!("Errors in translation file {}: {:?}", filename, errors);
        }
        bundles.insert(locale.clone(), bundle);
        available_locales.push(locale);
    }

    (bundles, available_locales)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    // 1. Check CLI args
    if let Some(lang_str) = cli_lang {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 2. Check config file
    if let Some(lang_str) = &config.language {
        if let Ok(lang) = lang_str.parse::<LanguageIdentifier>() {
            if available.contains(&lang) {
                return Some(lang);
            }
        }
    }

    // 3. Check OS locale
    if let Some(os_locale_str) = sys_locale::get_locale() {
        if let Ok(os_lang) = os_locale_str.parse::<LanguageIdentifier>() {
            if available.contains(&os_lang) {
                return Some(os_lang);
            }
        }
    }

    None
}
