//! Page document model
//!
//! This module defines the [`Document`] trait the selection logic runs
//! against, plus a concrete JSON-backed [`Page`] implementation:
//! - Elements carry a language code, optional title role and a hidden flag
//! - Buttons carry a language-code id and an active flag
//! - The document title is a plain string the title special case writes to
//!
//! Handles returned by the list operations are valid by construction;
//! mutations through an out-of-range handle are ignored, never a panic.

use anyhow::{bail, Context, Result};
use rust_i18n::t;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Maximum page file size accepted by [`Page::load`]
const MAX_PAGE_FILE_SIZE: u64 = 1024 * 1024;

/// A language-taggable element as seen by the selection logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub handle: usize,
    pub lang: String,
    pub is_title: bool,
    pub text: String,
}

/// A switcher button as seen by the selection logic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonInfo {
    pub handle: usize,
    pub id: String,
}

/// Minimal document interface for language selection
///
/// Abstracts the page so the selection logic can be unit-tested without a
/// real one. All operations are total.
pub trait Document {
    /// List every element carrying a language tag.
    fn list_taggable_elements(&self) -> Vec<ElementInfo>;

    /// List every language-switcher button.
    fn list_buttons(&self) -> Vec<ButtonInfo>;

    /// Set an element's visibility flag.
    fn set_hidden(&mut self, element: usize, hidden: bool);

    /// Set the document's displayed title.
    fn set_title(&mut self, text: &str);

    /// Set a button's active mark.
    fn set_active(&mut self, button: usize, active: bool);
}

/// A language-tagged page element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Element {
    /// Language code this element belongs to (compared for exact equality)
    pub lang: String,
    /// Text content; only meaningful to the title special case
    #[serde(default)]
    pub text: String,
    /// Whether this element represents the page title
    #[serde(default)]
    pub is_title: bool,
    /// Visibility flag, mutated by selection
    #[serde(default)]
    pub hidden: bool,
}

/// A language-switcher button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Button {
    /// Identifier; equals a language code for the button to ever activate
    pub id: String,
    /// Active mark, mutated by selection
    #[serde(default)]
    pub active: bool,
}

/// A page document backed by plain data, serializable as JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    /// Displayed document title
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub elements: Vec<Element>,
    #[serde(default)]
    pub buttons: Vec<Button>,
}

impl Page {
    /// Parse a page from a JSON string.
    pub fn from_json(json: &str) -> Result<Page> {
        serde_json::from_str(json).context(t!("page.failed_parse").to_string())
    }

    /// Serialize the page as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context(t!("page.failed_serialize").to_string())
    }

    /// Load a page from a JSON file
    ///
    /// Rejects files above a fixed size cap before reading.
    pub fn load(path: &Path) -> Result<Page> {
        let metadata = fs::metadata(path)
            .context(t!("page.failed_stat", path = path.display().to_string()).to_string())?;

        if metadata.len() > MAX_PAGE_FILE_SIZE {
            bail!("{}", t!("page.file_too_large", path = path.display().to_string()));
        }

        let content = fs::read_to_string(path)
            .context(t!("page.failed_read", path = path.display().to_string()).to_string())?;

        Page::from_json(&content)
    }

    /// Write the page to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .context(t!("page.failed_write", path = path.display().to_string()).to_string())?;
        Ok(())
    }
}

impl Document for Page {
    fn list_taggable_elements(&self) -> Vec<ElementInfo> {
        self.elements
            .iter()
            .enumerate()
            .map(|(handle, element)| ElementInfo {
                handle,
                lang: element.lang.clone(),
                is_title: element.is_title,
                text: element.text.clone(),
            })
            .collect()
    }

    fn list_buttons(&self) -> Vec<ButtonInfo> {
        self.buttons
            .iter()
            .enumerate()
            .map(|(handle, button)| ButtonInfo {
                handle,
                id: button.id.clone(),
            })
            .collect()
    }

    fn set_hidden(&mut self, element: usize, hidden: bool) {
        if let Some(element) = self.elements.get_mut(element) {
            element.hidden = hidden;
        }
    }

    fn set_title(&mut self, text: &str) {
        self.title = text.to_string();
    }

    fn set_active(&mut self, button: usize, active: bool) {
        if let Some(button) = self.buttons.get_mut(button) {
            button.active = active;
        }
    }
}
