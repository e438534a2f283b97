// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Light/dark theme state with a single writer.
//!
//! [`ThemeStore`] owns the current [`ThemeMode`]. It is initialized once from
//! persisted storage (falling back to the platform color-scheme preference)
//! and only changes through [`ThemeStore::toggle`]. Views read the mode and
//! may subscribe to changes, but never write it.
//!
//! Toggling applies the new mode to the [`ThemeSurface`] *before* it is
//! written to [`ThemeStorage`], so anything reading storage right after a
//! toggle observes the new value.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::time::{Duration, Timestamp};

/// Storage key holding the persisted mode.
pub const STORAGE_KEY: &str = "theme";

/// How long the toggle button's transition animation runs.
pub const THEME_ANIMATION: Duration = Duration::from_millis(1300);

/// The two supported color schemes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum ThemeMode {
    /// Light background, dark text.
    #[default]
    Light,
    /// Black background, white text.
    Dark,
}

impl ThemeMode {
    /// The persisted string form, `"light"` or `"dark"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Returns `true` for [`ThemeMode::Dark`].
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Page background color.
    #[must_use]
    pub const fn background(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#000000",
        }
    }

    /// Body text color.
    #[must_use]
    pub const fn foreground(self) -> &'static str {
        match self {
            Self::Light => "#111827",
            Self::Dark => "#ffffff",
        }
    }

    /// Muted secondary text color.
    #[must_use]
    pub const fn muted(self) -> &'static str {
        match self {
            Self::Light => "#4b5563",
            Self::Dark => "#d1d5db",
        }
    }

    /// Accent color for links, the cursor trail and highlights.
    #[must_use]
    pub const fn accent(self) -> &'static str {
        match self {
            Self::Light => "rgba(99, 102, 241, 0.7)",
            Self::Dark => "rgba(129, 140, 248, 0.7)",
        }
    }

    /// Card surface color.
    #[must_use]
    pub const fn surface(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#0a0a0a",
        }
    }

    /// Card border color.
    #[must_use]
    pub const fn border(self) -> &'static str {
        match self {
            Self::Light => "#e5e7eb",
            Self::Dark => "#1f2937",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(ThemeError::UnknownMode(String::from(other))),
        }
    }
}

/// Errors raised by theme parsing and persistence.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ThemeError {
    /// A stored value was neither `"light"` nor `"dark"`.
    #[error("unknown theme mode {0:?}")]
    UnknownMode(String),
    /// Client storage is missing or refused the write.
    #[error("theme storage unavailable: {0}")]
    StorageUnavailable(String),
}

/// Persistence for the theme flag (one string key).
pub trait ThemeStorage {
    /// Reads the raw persisted value, if any.
    fn load(&self) -> Option<String>;

    /// Persists the raw value.
    fn save(&mut self, value: &str) -> Result<(), ThemeError>;
}

/// The document-level target that a mode is applied to.
pub trait ThemeSurface {
    /// Whether the platform asks for a dark color scheme.
    fn prefers_dark(&self) -> bool;

    /// Applies `mode` to the document (root class, body colors).
    fn apply(&mut self, mode: ThemeMode);
}

/// Handle returned by [`ThemeStore::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u32);

type Listener = Box<dyn FnMut(ThemeMode)>;

/// The process-wide theme state and its only writer.
pub struct ThemeStore<St, Su> {
    mode: ThemeMode,
    storage: St,
    surface: Su,
    animating_until: Option<Timestamp>,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_id: u32,
}

impl<St: ThemeStorage, Su: ThemeSurface> ThemeStore<St, Su> {
    /// Reads the initial mode and applies it to `surface`.
    ///
    /// A stored value that fails to parse is ignored in favor of the platform
    /// preference.
    pub fn init(storage: St, mut surface: Su) -> Self {
        let stored = storage.load().and_then(|raw| match raw.parse::<ThemeMode>() {
            Ok(mode) => Some(mode),
            Err(err) => {
                tracing::warn!(%err, "ignoring persisted theme");
                None
            }
        });
        let mode = stored.unwrap_or(if surface.prefers_dark() {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        });
        tracing::debug!(%mode, from_storage = stored.is_some(), "theme initialized");
        surface.apply(mode);

        Self {
            mode,
            storage,
            surface,
            animating_until: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// The current mode.
    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Shorthand for `self.mode().is_dark()`.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Whether the toggle animation started by the last toggle is still
    /// running at `now`.
    #[must_use]
    pub fn is_animating(&self, now: Timestamp) -> bool {
        self.animating_until.is_some_and(|until| now < until)
    }

    /// Flips the mode, applies it, persists it, and notifies subscribers.
    ///
    /// A storage failure does not undo the toggle: the in-memory mode stays
    /// authoritative for the rest of the page's lifetime.
    pub fn toggle(&mut self, now: Timestamp) -> ThemeMode {
        let next = self.mode.toggled();
        self.mode = next;
        self.surface.apply(next);
        if let Err(err) = self.storage.save(next.as_str()) {
            tracing::warn!(%err, "theme not persisted");
        }
        self.animating_until = now.checked_add(THEME_ANIMATION);
        tracing::debug!(mode = %next, "theme toggled");
        for (_, listener) in &mut self.listeners {
            listener(next);
        }
        next
    }

    /// Registers `listener` to be called after every toggle.
    pub fn subscribe(&mut self, listener: impl FnMut(ThemeMode) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Unknown ids are ignored.
    pub fn unsubscribe(&mut self, id: SubscriptionId) {
        self.listeners.retain(|(existing, _)| *existing != id);
    }

    /// Read access to the backing storage.
    #[must_use]
    pub fn storage(&self) -> &St {
        &self.storage
    }
}

impl<St, Su> fmt::Debug for ThemeStore<St, Su> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("mode", &self.mode)
            .field("animating_until", &self.animating_until)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use core::cell::RefCell;

    #[derive(Default)]
    struct MemoryStorage {
        value: Option<String>,
        fail: bool,
    }

    impl ThemeStorage for MemoryStorage {
        fn load(&self) -> Option<String> {
            self.value.clone()
        }

        fn save(&mut self, value: &str) -> Result<(), ThemeError> {
            if self.fail {
                return Err(ThemeError::StorageUnavailable(String::from("quota")));
            }
            self.value = Some(String::from(value));
            Ok(())
        }
    }

    /// Records every applied mode; shares the log so tests can inspect order.
    struct RecordingSurface {
        prefers_dark: bool,
        log: Rc<RefCell<Vec<ThemeMode>>>,
    }

    impl ThemeSurface for RecordingSurface {
        fn prefers_dark(&self) -> bool {
            self.prefers_dark
        }

        fn apply(&mut self, mode: ThemeMode) {
            self.log.borrow_mut().push(mode);
        }
    }

    fn surface(prefers_dark: bool) -> (RecordingSurface, Rc<RefCell<Vec<ThemeMode>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        (
            RecordingSurface {
                prefers_dark,
                log: Rc::clone(&log),
            },
            log,
        )
    }

    #[test]
    fn parse_round_trips_both_modes() {
        assert_eq!("dark".parse::<ThemeMode>(), Ok(ThemeMode::Dark));
        assert_eq!("light".parse::<ThemeMode>(), Ok(ThemeMode::Light));
        assert!("Dark".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn stored_value_wins_over_preference() {
        let storage = MemoryStorage {
            value: Some(String::from("light")),
            fail: false,
        };
        let (surface, log) = surface(true);
        let store = ThemeStore::init(storage, surface);
        assert_eq!(store.mode(), ThemeMode::Light);
        assert_eq!(*log.borrow(), [ThemeMode::Light]);
    }

    #[test]
    fn garbage_falls_back_to_preference() {
        let storage = MemoryStorage {
            value: Some(String::from("sepia")),
            fail: false,
        };
        let (surface, _) = surface(true);
        let store = ThemeStore::init(storage, surface);
        assert_eq!(store.mode(), ThemeMode::Dark);
    }

    #[test]
    fn toggle_applies_persists_and_broadcasts() {
        let (surface, log) = surface(false);
        let mut store = ThemeStore::init(MemoryStorage::default(), surface);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        store.subscribe(move |mode| sink.borrow_mut().push(mode));

        let mode = store.toggle(Timestamp(1000));
        assert_eq!(mode, ThemeMode::Dark);
        assert_eq!(store.storage().load().as_deref(), Some("dark"));
        assert_eq!(*log.borrow(), [ThemeMode::Light, ThemeMode::Dark]);
        assert_eq!(*seen.borrow(), [ThemeMode::Dark]);
    }

    #[derive(Clone, Debug, PartialEq)]
    enum Step {
        Applied(ThemeMode),
        Saved(String),
        Notified(ThemeMode),
    }

    type Journal = Rc<RefCell<Vec<Step>>>;

    struct JournalStorage(Journal);

    impl ThemeStorage for JournalStorage {
        fn load(&self) -> Option<String> {
            None
        }

        fn save(&mut self, value: &str) -> Result<(), ThemeError> {
            self.0.borrow_mut().push(Step::Saved(String::from(value)));
            Ok(())
        }
    }

    struct JournalSurface(Journal);

    impl ThemeSurface for JournalSurface {
        fn prefers_dark(&self) -> bool {
            false
        }

        fn apply(&mut self, mode: ThemeMode) {
            self.0.borrow_mut().push(Step::Applied(mode));
        }
    }

    #[test]
    fn toggle_applies_before_saving_then_notifies() {
        let journal: Journal = Rc::default();
        let mut store = ThemeStore::init(
            JournalStorage(Rc::clone(&journal)),
            JournalSurface(Rc::clone(&journal)),
        );
        let sink = Rc::clone(&journal);
        store.subscribe(move |mode| sink.borrow_mut().push(Step::Notified(mode)));
        journal.borrow_mut().clear();

        store.toggle(Timestamp(0));
        assert_eq!(
            *journal.borrow(),
            [
                Step::Applied(ThemeMode::Dark),
                Step::Saved(String::from("dark")),
                Step::Notified(ThemeMode::Dark),
            ]
        );
    }

    #[test]
    fn animation_window_expires() {
        let (surface, _) = surface(false);
        let mut store = ThemeStore::init(MemoryStorage::default(), surface);
        assert!(!store.is_animating(Timestamp(0)));
        store.toggle(Timestamp(500));
        assert!(store.is_animating(Timestamp(1799)));
        assert!(!store.is_animating(Timestamp(1800)));
    }

    #[test]
    fn failed_save_keeps_new_mode() {
        let storage = MemoryStorage {
            value: None,
            fail: true,
        };
        let (surface, _) = surface(false);
        let mut store = ThemeStore::init(storage, surface);
        assert_eq!(store.toggle(Timestamp(0)), ThemeMode::Dark);
        assert!(store.is_dark());
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let (surface, _) = surface(false);
        let mut store = ThemeStore::init(MemoryStorage::default(), surface);
        let hits = Rc::new(RefCell::new(0_u32));
        let sink = Rc::clone(&hits);
        let id = store.subscribe(move |_| *sink.borrow_mut() += 1);
        store.toggle(Timestamp(0));
        store.unsubscribe(id);
        store.toggle(Timestamp(10));
        assert_eq!(*hits.borrow(), 1);
    }
}
