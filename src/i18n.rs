//! Internationalization (i18n) support for the CLI's own messages
//!
//! The message locale is detected from the system locale and constrained to
//! the same supported set as page selection: English (en), German (de),
//! Chinese (zh). Falls back to English.

use rust_i18n::set_locale;

use crate::language::SupportedLanguage;

/// Initialize the message locale from system settings
///
/// Detects the preferred language and sets the message catalog accordingly.
/// Falls back to English if the system locale is not supported.
pub fn init_locale() {
    let lang = SupportedLanguage::detect();
    set_locale(lang.code());
}
