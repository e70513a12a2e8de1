//! langctl - Language selection for page documents
//!
//! This crate implements a language switcher over an abstract page document:
//! - Show/hide elements tagged with a language code
//! - Route a matching title element's text to the document title
//! - Mark the matching switcher button active
//! - Detect the preferred language from the system locale, constrained to
//!   the supported set (English, German, Chinese) with English as fallback
//!
//! The selection logic operates on the [`page::Document`] trait so it can be
//! exercised against the JSON-backed [`page::Page`] model or any other
//! document representation.

pub mod i18n;
pub mod language;
pub mod page;
pub mod switcher;

rust_i18n::i18n!("locales", fallback = "en");
