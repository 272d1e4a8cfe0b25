use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use strum::IntoEnumIterator;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const FALLBACK_LANG: SupportedLang = SupportedLang::English;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter, strum::Display)]
pub enum SupportedLang {
    #[strum(to_string = "English")]
    English,
    #[strum(to_string = "Tagalog")]
    Tagalog,
}

impl SupportedLang {
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLang::English => "en",
            SupportedLang::Tagalog => "tl",
        }
    }

    /// Accepts "en", "tl", "fil" and region-qualified forms like "en-US" or "fil_PH".
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        let sep = code.find(['-', '_']).unwrap_or(code.len());
        match &code[..sep] {
            "en" => Some(SupportedLang::English),
            "tl" | "fil" => Some(SupportedLang::Tagalog),
            _ => None,
        }
    }

    fn ftl_source(&self) -> &'static str {
        match self {
            SupportedLang::English => include_str!("resources/en.ftl"),
            SupportedLang::Tagalog => include_str!("resources/tl.ftl"),
        }
    }
}

fn detect_system_lang() -> SupportedLang {
    sys_locale::get_locale()
        .and_then(|s| SupportedLang::from_code(&s))
        .unwrap_or(FALLBACK_LANG)
}

fn build_bundle(lang: SupportedLang) -> Option<Bundle> {
    let langid = lang
        .code()
        .parse::<LanguageIdentifier>()
        .unwrap_or_default();
    let mut bundle: Bundle = FluentBundle::new(vec![langid]);
    // Keep interpolated values (tag names) free of bidi isolation marks.
    bundle.set_use_isolating(false);
    let res = match FluentResource::try_new(lang.ftl_source().to_string()) {
        Ok(res) => res,
        Err((_, errs)) => {
            log::error!("FTL parse failed for {}: {:?}", lang.code(), errs);
            return None;
        }
    };
    if let Err(errs) = bundle.add_resource(res) {
        log::error!("FTL resource rejected for {}: {:?}", lang.code(), errs);
        return None;
    }
    Some(bundle)
}

struct LocalizationManager {
    current: SupportedLang,
    bundles: HashMap<SupportedLang, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let bundles = SupportedLang::iter()
            .filter_map(|lang| build_bundle(lang).map(|b| (lang, b)))
            .collect();
        Self {
            current: FALLBACK_LANG,
            bundles,
        }
    }

    fn set_current(&mut self, lang: SupportedLang) -> Result<(), LocalizationError> {
        if !self.bundles.contains_key(&lang) {
            return Err(LocalizationError::UnsupportedLanguage(lang.code().to_string()));
        }
        self.current = lang;
        Ok(())
    }

    fn format_in(&self, lang: SupportedLang, id: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(id)?.value()?;
        let mut errors = vec![];
        let s = bundle.format_pattern(pattern, args, &mut errors).to_string();
        if !errors.is_empty() {
            log::debug!("fluent errors for '{id}': {errors:?}");
        }
        Some(s)
    }

    fn format_with_args(&self, id: &str, args: Option<&FluentArgs>) -> String {
        self.format_in(self.current, id, args)
            .or_else(|| self.format_in(FALLBACK_LANG, id, args))
            .unwrap_or_else(|| format!("[missing: {}]", id))
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Select the UI language. `None` picks the system locale; anything unusable falls back to English.
pub fn initialize_localization(preferred: Option<SupportedLang>) -> Result<(), LocalizationError> {
    let lang = preferred.unwrap_or_else(detect_system_lang);
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        mgr.set_current(lang).or_else(|e| {
            log::warn!("{e}; falling back to {}", FALLBACK_LANG.code());
            mgr.set_current(FALLBACK_LANG)
        })
    })
}

pub fn current_language() -> SupportedLang {
    LOCALIZATION.with(|cell| cell.borrow().current)
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format_with_args(message_id, Some(&fargs)))
}
