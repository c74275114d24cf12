// SPDX-License-Identifier: MPL-2.0
//! Fluent bundles and locale resolution.

use crate::app::config::{Config, DEFAULT_LOCALE};
use fluent_bundle::{FluentArgs, FluentBundle, FluentResource, FluentValue};
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
        Self::new(None, &Config::default())
    }
}

impl std::fmt::Debug for I18n {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("I18n")
            .field("available_locales", &self.available_locales)
            .field("current_locale", &self.current_locale)
            .finish_non_exhaustive()
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Asset::iter() {
            let filename = file.as_ref();
            let Some(locale) = filename
                .strip_suffix(".ftl")
                .and_then(|stem| stem.parse::<LanguageIdentifier>().ok())
            else {
                continue;
            };
            let Some(content) = Asset::get(filename) else {
                continue;
            };
            match load_bundle(&locale, &content.data) {
                Some(bundle) => {
                    bundles.insert(locale.clone(), bundle);
                    available_locales.push(locale);
                }
                None => log::error!("skipping translation file {filename}"),
            }
        }
        available_locales.sort_by_key(ToString::to_string);

        let current_locale = resolve_locale(cli_lang, config, &available_locales)
            .unwrap_or_else(|| DEFAULT_LOCALE.parse().unwrap_or_default());
        log::debug!("using locale {current_locale}");

        Self {
            bundles,
            available_locales,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    pub fn tr(&self, key: &str) -> String {
        self.format(key, None)
    }

    /// Translates `key`, substituting `{ $name }` placeables from `args`.
    pub fn tr_with_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        let mut fluent_args = FluentArgs::new();
        for (name, value) in args {
            fluent_args.set(*name, FluentValue::from(*value));
        }
        self.format(key, Some(&fluent_args))
    }

    fn format(&self, key: &str, args: Option<&FluentArgs>) -> String {
        let Some(bundle) = self.bundles.get(&self.current_locale) else {
            return missing(key);
        };
        let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) else {
            return missing(key);
        };

        let mut errors = vec![];
        let value = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            value.into_owned()
        } else {
            log::warn!("failed to format {key}: {errors:?}");
            missing(key)
        }
    }
}

fn missing(key: &str) -> String {
    format!("MISSING: {}", key)
}

fn load_bundle(
    locale: &LanguageIdentifier,
    data: &[u8],
) -> Option<FluentBundle<FluentResource>> {
    let source = String::from_utf8_lossy(data).into_owned();
    let resource = FluentResource::try_new(source)
        .map_err(|(_, errors)| log::error!("invalid FTL for {locale}: {errors:?}"))
        .ok()?;

    let mut bundle = FluentBundle::new(vec![locale.clone()]);
    // Unicode isolation marks around placeables render as stray glyphs in Iced
    bundle.set_use_isolating(false);
    bundle
        .add_resource(resource)
        .map_err(|errors| log::error!("duplicate FTL entries for {locale}: {errors:?}"))
        .ok()?;
    Some(bundle)
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let pick = |candidate: &str| {
        candidate
            .parse::<LanguageIdentifier>()
            .ok()
            .filter(|lang| available.contains(lang))
    };

    // 1. CLI args
    if let Some(lang) = cli_lang.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 2. Config file
    if let Some(lang) = config.general.language.as_deref().and_then(pick) {
        return Some(lang);
    }

    // 3. OS locale
    sys_locale::get_locale().as_deref().and_then(pick)
}
