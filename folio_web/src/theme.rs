// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme persistence and document painting.

use alloc::format;
use alloc::string::String;

use folio_core::theme::{STORAGE_KEY, ThemeError, ThemeMode, ThemeStorage, ThemeSurface};
use web_sys::{Document, Storage, Window};

/// `window.localStorage` under [`STORAGE_KEY`].
///
/// Private browsing modes can deny storage entirely; a missing store reads as
/// empty and refuses writes.
#[derive(Debug)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Opens the window's local storage.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = window.local_storage().ok().flatten();
        if storage.is_none() {
            tracing::warn!("localStorage unavailable; theme will not persist");
        }
        Self { storage }
    }
}

impl ThemeStorage for LocalStorage {
    fn load(&self) -> Option<String> {
        self.storage.as_ref()?.get_item(STORAGE_KEY).ok().flatten()
    }

    fn save(&mut self, value: &str) -> Result<(), ThemeError> {
        let Some(storage) = &self.storage else {
            return Err(ThemeError::StorageUnavailable(String::from("no localStorage")));
        };
        storage
            .set_item(STORAGE_KEY, value)
            .map_err(|err| ThemeError::StorageUnavailable(format!("{err:?}")))
    }
}

/// The `<html>` root class list and `<body>` colors.
#[derive(Debug)]
pub struct DocumentSurface {
    window: Window,
    document: Document,
}

impl DocumentSurface {
    /// Paints onto `window`'s document.
    #[must_use]
    pub fn new(window: Window, document: Document) -> Self {
        Self { window, document }
    }
}

impl ThemeSurface for DocumentSurface {
    fn prefers_dark(&self) -> bool {
        self.window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches())
    }

    fn apply(&mut self, mode: ThemeMode) {
        if let Some(root) = self.document.document_element() {
            let classes = root.class_list();
            let _ = classes.toggle_with_force("dark", mode.is_dark());
            let _ = classes.toggle_with_force("light", !mode.is_dark());
        }
        if let Some(body) = self.document.body() {
            let style = body.style();
            let _ = style.set_property("background-color", mode.background());
            let _ = style.set_property("color", mode.foreground());
            let _ = style.set_property("transition", "background-color 0.5s, color 0.5s");
        }
    }
}
