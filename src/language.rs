//! Supported languages and preferred-language detection
//!
//! The supported set is closed: English (en), German (de), Chinese (zh).
//! English is the fallback whenever the system locale is absent or maps to
//! an unsupported language.

use std::fmt;

use sys_locale::get_locale;

/// A language from the closed supported set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SupportedLanguage {
    #[default]
    En,
    De,
    Zh,
}

/// All supported languages, in display order.
pub const ALL: [SupportedLanguage; 3] = [
    SupportedLanguage::En,
    SupportedLanguage::De,
    SupportedLanguage::Zh,
];

impl SupportedLanguage {
    /// Get the ISO 639-1 language code ("en", "de", "zh").
    pub fn code(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "en",
            SupportedLanguage::De => "de",
            SupportedLanguage::Zh => "zh",
        }
    }

    /// Get the language name in its native form.
    pub fn native_name(&self) -> &'static str {
        match self {
            SupportedLanguage::En => "English",
            SupportedLanguage::De => "Deutsch",
            SupportedLanguage::Zh => "中文",
        }
    }

    /// Create a language from an exact code match.
    ///
    /// Returns `None` for anything outside the supported set; no
    /// normalization is performed here.
    pub fn from_code(code: &str) -> Option<SupportedLanguage> {
        match code {
            "en" => Some(SupportedLanguage::En),
            "de" => Some(SupportedLanguage::De),
            "zh" => Some(SupportedLanguage::Zh),
            _ => None,
        }
    }

    /// Map a BCP-47-like locale string to a supported language.
    ///
    /// Only the primary subtag is significant (e.g., "de-DE" -> de,
    /// "zh_CN.UTF-8" -> zh). Unsupported or empty input falls back to
    /// English. Total: never fails.
    pub fn from_locale(raw: &str) -> SupportedLanguage {
        let subtag = raw
            .split(&['-', '_', '.'][..])
            .next()
            .unwrap_or_default();
        SupportedLanguage::from_code(subtag).unwrap_or_default()
    }

    /// Detect the preferred language from the system locale.
    ///
    /// Reads the ambient locale (LC_ALL, LC_MESSAGES or LANG, depending on
    /// the platform) and constrains it to the supported set. An absent
    /// locale falls back to English.
    pub fn detect() -> SupportedLanguage {
        match get_locale() {
            Some(locale) => SupportedLanguage::from_locale(&locale),
            None => SupportedLanguage::default(),
        }
    }
}

impl fmt::Display for SupportedLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(SupportedLanguage::En.code(), "en");
        assert_eq!(SupportedLanguage::De.code(), "de");
        assert_eq!(SupportedLanguage::Zh.code(), "zh");
    }

    #[test]
    fn test_from_code_exact() {
        assert_eq!(SupportedLanguage::from_code("de"), Some(SupportedLanguage::De));
        assert_eq!(SupportedLanguage::from_code("fr"), None);
        assert_eq!(SupportedLanguage::from_code("DE"), None);
        assert_eq!(SupportedLanguage::from_code(""), None);
    }

    #[test]
    fn test_from_locale_passthrough() {
        assert_eq!(SupportedLanguage::from_locale("de-DE"), SupportedLanguage::De);
        assert_eq!(SupportedLanguage::from_locale("zh-CN"), SupportedLanguage::Zh);
        assert_eq!(SupportedLanguage::from_locale("en"), SupportedLanguage::En);
    }

    #[test]
    fn test_from_locale_fallback() {
        assert_eq!(SupportedLanguage::from_locale("fr-FR"), SupportedLanguage::En);
        assert_eq!(SupportedLanguage::from_locale("ko_KR.UTF-8"), SupportedLanguage::En);
        assert_eq!(SupportedLanguage::from_locale(""), SupportedLanguage::En);
    }

    #[test]
    fn test_from_locale_posix_separator() {
        assert_eq!(SupportedLanguage::from_locale("de_DE.UTF-8"), SupportedLanguage::De);
        assert_eq!(SupportedLanguage::from_locale("zh.UTF-8"), SupportedLanguage::Zh);
    }

    #[test]
    fn test_detect_returns_supported() {
        // Detection is environment-dependent; it must always land in the
        // supported set.
        let lang = SupportedLanguage::detect();
        assert!(ALL.contains(&lang));
    }

    #[test]
    fn test_display_is_code() {
        assert_eq!(SupportedLanguage::Zh.to_string(), "zh");
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(SupportedLanguage::default(), SupportedLanguage::En);
    }
}
