use crate::configs::CacheChecks;
use crate::environment::Environment;
use crate::store::{
    KeyValueStore, KEY_APP_VERSION, KEY_BUILD_NUMBER, KEY_OS_VERSION, KEY_USER_AGENT,
};
use std::sync::Arc;

/// The conditions a user-agent was computed under.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fingerprint {
    /// OS version, e.g. `14.0`.
    pub os_version: String,
    /// App marketing version, e.g. `30.0`.
    pub app_version: String,
    /// App build number.
    pub build_number: String,
}

impl Fingerprint {
    /// Build from the three fields.
    pub fn new(
        os_version: impl Into<String>,
        app_version: impl Into<String>,
        build_number: impl Into<String>,
    ) -> Self {
        Self {
            os_version: os_version.into(),
            app_version: app_version.into(),
            build_number: build_number.into(),
        }
    }

    /// Snapshot the current fingerprint of the host.
    pub fn current(env: &dyn Environment) -> Self {
        Self {
            os_version: env.os_version(),
            app_version: env.app_version(),
            build_number: env.build_number(),
        }
    }

    /// Does `self` match `other` on every field enabled in `checks`.
    pub fn matches(&self, other: &Fingerprint, checks: CacheChecks) -> bool {
        (!checks.os_version || self.os_version == other.os_version)
            && (!checks.app_version || self.app_version == other.app_version)
            && (!checks.build_number || self.build_number == other.build_number)
    }
}

/// A cached user-agent with the fingerprint it was derived under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheEntry {
    /// The branded user-agent.
    pub user_agent: String,
    /// The fingerprint at derivation time.
    pub fingerprint: Fingerprint,
}

/// Sole owner of the persisted user-agent cache entry.
///
/// Cloning is cheap and every clone shares the same store, so a clone can be
/// handed to threads that only ever do permissive reads.
#[derive(Clone)]
pub struct VersionCache {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for VersionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VersionCache").finish_non_exhaustive()
    }
}

impl VersionCache {
    /// Cache over `store`.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The stored entry, if a user-agent and all three fingerprint markers exist.
    pub fn read(&self) -> Option<CacheEntry> {
        let user_agent = self.store.get(KEY_USER_AGENT)?;
        let fingerprint = Fingerprint {
            os_version: self.store.get(KEY_OS_VERSION)?,
            app_version: self.store.get(KEY_APP_VERSION)?,
            build_number: self.store.get(KEY_BUILD_NUMBER)?,
        };

        Some(CacheEntry {
            user_agent,
            fingerprint,
        })
    }

    /// Overwrite the entry.
    pub fn write(&self, entry: &CacheEntry) {
        self.write_fingerprint(&entry.fingerprint);
        self.store.set(KEY_USER_AGENT, &entry.user_agent);
    }

    /// Write only the fingerprint markers, leaving the user-agent body as is.
    ///
    /// The writes are not grouped: a crash before the body is written leaves
    /// fresh markers next to a stale body.
    pub fn write_fingerprint(&self, fingerprint: &Fingerprint) {
        self.store.set(KEY_OS_VERSION, &fingerprint.os_version);
        self.store.set(KEY_APP_VERSION, &fingerprint.app_version);
        self.store.set(KEY_BUILD_NUMBER, &fingerprint.build_number);
    }

    /// Is `entry` still usable under `current` for the enabled `checks`.
    pub fn is_valid(entry: &CacheEntry, current: &Fingerprint, checks: CacheChecks) -> bool {
        entry.fingerprint.matches(current, checks)
    }

    /// The cached user-agent if it is valid for the host right now.
    ///
    /// Never derives anything, so it is safe from any thread.
    pub fn cached_user_agent(&self, env: &dyn Environment, checks: CacheChecks) -> Option<String> {
        let current = Fingerprint::current(env);
        self.read()
            .filter(|entry| Self::is_valid(entry, &current, checks))
            .map(|entry| entry.user_agent)
    }
}
