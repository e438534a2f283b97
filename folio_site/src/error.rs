// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page-level errors.

use folio_core::carousel::CarouselError;
use folio_core::gallery::PoolError;
use wasm_bindgen::JsValue;

/// Why the page could not be built.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A DOM call threw.
    #[error("DOM call failed: {0}")]
    Dom(String),
    /// The document lacks an element the page needs.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// The project carousel could not be built.
    #[error(transparent)]
    Carousel(#[from] CarouselError),
    /// The case-study image manifest is invalid.
    #[error(transparent)]
    Gallery(#[from] PoolError),
}

impl From<JsValue> for SiteError {
    fn from(err: JsValue) -> Self {
        Self::Dom(err.as_string().unwrap_or_else(|| format!("{err:?}")))
    }
}

impl From<SiteError> for JsValue {
    fn from(err: SiteError) -> Self {
        Self::from_str(&err.to_string())
    }
}

/// Result alias for page construction.
pub type SiteResult<T> = Result<T, SiteError>;
