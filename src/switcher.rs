//! Language selection over a page document
//!
//! [`LanguageSwitcher`] applies a language to its document: elements whose
//! language tag matches the selection are revealed, everything else is
//! hidden, a matching title element routes its text to the document title,
//! and the matching button receives the active mark. Every application is a
//! full, idempotent re-render; no selection state is kept between calls.

use crate::language::SupportedLanguage;
use crate::page::Document;

/// Applies language selections to an owned page document.
#[derive(Debug)]
pub struct LanguageSwitcher<D: Document> {
    doc: D,
    /// Button-id snapshot click dispatch goes through, captured at
    /// construction and refreshed by `bind_button_handlers`
    bindings: Vec<String>,
}

impl<D: Document> LanguageSwitcher<D> {
    /// Create a switcher over a document, binding its buttons.
    pub fn new(doc: D) -> LanguageSwitcher<D> {
        let mut switcher = LanguageSwitcher {
            doc,
            bindings: Vec::new(),
        };
        switcher.bind_button_handlers();
        switcher
    }

    /// Snapshot the document's buttons for click dispatch
    ///
    /// Buttons added to the document afterwards are not dispatchable until
    /// the next call.
    pub fn bind_button_handlers(&mut self) {
        self.bindings = self
            .doc
            .list_buttons()
            .into_iter()
            .map(|button| button.id)
            .collect();
    }

    /// Apply a language selection to the document
    ///
    /// The code is compared raw, with no validation against the supported
    /// set: an unrecognized code hides every element and leaves no button
    /// active. Empty documents are a no-op.
    pub fn apply_selection(&mut self, code: &str) {
        for element in self.doc.list_taggable_elements() {
            if element.lang == code {
                // A matching title element routes its text to the document
                // title instead of being unhidden.
                if element.is_title {
                    self.doc.set_title(&element.text);
                } else {
                    self.doc.set_hidden(element.handle, false);
                }
            } else {
                self.doc.set_hidden(element.handle, true);
            }
        }

        for button in self.doc.list_buttons() {
            self.doc.set_active(button.handle, button.id == code);
        }
    }

    /// Dispatch a click on a bound button
    ///
    /// The button's id is applied as the selection, unvalidated. Unknown
    /// handles are ignored.
    pub fn click(&mut self, button: usize) {
        if let Some(code) = self.bindings.get(button).cloned() {
            self.apply_selection(&code);
        }
    }

    /// Run the load-time sequence: detect the preferred language and apply it.
    pub fn initialize(&mut self) {
        let lang = SupportedLanguage::detect();
        self.apply_selection(lang.code());
    }

    /// Borrow the underlying document.
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// Mutably borrow the underlying document.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// Consume the switcher and return its document.
    pub fn into_document(self) -> D {
        self.doc
    }
}
