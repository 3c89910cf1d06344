//! Theme module - observable light/dark preference shared across the app
//!
//! The preferred theme used to live in ambient globals that every consumer
//! read and wrote directly. Here it is an explicit store: handles are cloned
//! into whatever needs the value, and interested parties register callbacks
//! that fire on every preference change.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, Weak};

use thiserror::Error;

/// The two color schemes a reader can prefer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Light
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown theme {0:?}, expected \"light\" or \"dark\"")]
pub struct ParseThemeError(String);

impl FromStr for Theme {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

type Callback = Arc<dyn Fn(Theme) + Send + Sync + 'static>;

struct Inner {
    current: Mutex<Theme>,
    subscribers: Mutex<HashMap<u64, Callback>>,
    next_id: AtomicU64,
}

/// Observable container for the preferred theme.
///
/// Handles are cheap to clone and all share one underlying state.
/// Subscribers are notified on every `set_preferred`, whether or not the
/// value actually changed.
#[derive(Clone)]
pub struct ThemeStore {
    inner: Arc<Inner>,
}

impl ThemeStore {
    pub fn new(initial: Theme) -> Self {
        Self {
            inner: Arc::new(Inner {
                current: Mutex::new(initial),
                subscribers: Mutex::new(HashMap::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// The currently preferred theme.
    pub fn current(&self) -> Theme {
        *self.inner.current.lock().unwrap()
    }

    /// Store a new preference and notify every subscriber.
    pub fn set_preferred(&self, theme: Theme) {
        *self.inner.current.lock().unwrap() = theme;

        // Snapshot the callbacks so no lock is held while they run. A
        // callback is allowed to subscribe, unsubscribe, or read the store.
        let callbacks: Vec<Callback> = {
            let subscribers = self.inner.subscribers.lock().unwrap();
            subscribers.values().cloned().collect()
        };
        for callback in callbacks {
            callback(theme);
        }
    }

    /// Flip between light and dark, returning the new preference.
    pub fn toggle(&self) -> Theme {
        let next = self.current().toggled();
        self.set_preferred(next);
        next
    }

    /// Register a callback that fires on every preference change.
    ///
    /// The callback stays registered for as long as the returned
    /// subscription is alive; dropping the subscription unsubscribes.
    #[must_use = "dropping the subscription immediately unsubscribes the callback"]
    pub fn subscribe<F>(&self, callback: F) -> ThemeSubscription
    where
        F: Fn(Theme) + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .subscribers
            .lock()
            .unwrap()
            .insert(id, Arc::new(callback));
        ThemeSubscription {
            store: Arc::downgrade(&self.inner),
            id,
        }
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new(Theme::default())
    }
}

impl fmt::Debug for ThemeStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeStore")
            .field("current", &self.current())
            .finish_non_exhaustive()
    }
}

/// Keeps a theme callback registered; dropping it unsubscribes.
#[derive(Debug)]
pub struct ThemeSubscription {
    store: Weak<Inner>,
    id: u64,
}

impl Drop for ThemeSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.store.upgrade() {
            inner.subscribers.lock().unwrap().remove(&self.id);
        }
    }
}
