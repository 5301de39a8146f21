use crate::client;
use crate::configs::{CacheChecks, ClientKind};
use crate::engine::{fetch_native_user_agent, ScriptEngine};
use crate::environment::Environment;
use crate::error::{ForgeError, Result};
use crate::spoof_user_agent::{desktop_user_agent_from, rebrand_user_agent};
use crate::version_cache::{CacheEntry, Fingerprint, VersionCache};
use std::sync::Arc;
use std::thread::{self, ThreadId};

/// Derives, caches and spoofs the branded user-agent.
///
/// The forge is bound to the thread it was created on, the only thread
/// allowed to drive the engine. Other threads should read through
/// [`VersionCache::cached_user_agent`] instead.
pub struct UserAgentForge<E> {
    engine: E,
    cache: VersionCache,
    env: Arc<dyn Environment>,
    engine_thread: ThreadId,
}

impl<E: ScriptEngine> UserAgentForge<E> {
    /// Create a forge bound to the current thread.
    pub fn new(engine: E, cache: VersionCache, env: Arc<dyn Environment>) -> Self {
        Self {
            engine,
            cache,
            env,
            engine_thread: thread::current().id(),
        }
    }

    /// Rebind the forge to the current thread.
    pub fn bind_to_current_thread(&mut self) {
        self.engine_thread = thread::current().id();
    }

    /// The cache backing this forge.
    pub fn cache(&self) -> &VersionCache {
        &self.cache
    }

    /// The host environment.
    pub fn environment(&self) -> &dyn Environment {
        self.env.as_ref()
    }

    /// The cached user-agent if valid under `checks`. Never drives the engine.
    pub fn cached_user_agent(&self, checks: CacheChecks) -> Option<String> {
        self.cache.cached_user_agent(self.env.as_ref(), checks)
    }

    /// The branded user-agent, derived from the engine on a cache miss.
    ///
    /// Never fails: engine or format problems return the raw engine string,
    /// and a call off the engine thread returns the cached value or `""`.
    pub fn user_agent(&self) -> String {
        match self.derive() {
            Ok(user_agent) => user_agent,
            Err((err, fallback)) => {
                match &err {
                    ForgeError::EngineUnavailable(_) | ForgeError::WrongThread => {
                        tracing::error!("user-agent derivation failed: {err}");
                    }
                    _ => {
                        tracing::warn!("falling back to the engine user-agent: {err}");
                    }
                }
                fallback
            }
        }
    }

    /// Desktop variant of [`Self::user_agent`]. Not cached.
    pub fn desktop_user_agent(&self) -> String {
        desktop_user_agent_from(&self.user_agent(), &self.env.os_version())
    }

    /// Client user-agent for one of our own services.
    pub fn client_user_agent(&self, kind: ClientKind) -> String {
        client::client_user_agent_for(kind, self.env.as_ref())
    }

    /// Resolve the user-agent, returning the error with the degraded string on failure.
    fn derive(&self) -> std::result::Result<String, (ForgeError, String)> {
        if thread::current().id() != self.engine_thread {
            let fallback = self.cached_user_agent(CacheChecks::all()).unwrap_or_default();
            return Err((ForgeError::WrongThread, fallback));
        }

        let fingerprint = Fingerprint::current(self.env.as_ref());

        if let Some(entry) = self.cache.read() {
            if VersionCache::is_valid(&entry, &fingerprint, CacheChecks::all()) {
                tracing::debug!("user-agent cache hit");
                return Ok(entry.user_agent);
            }
        }

        // markers go out before the body so permissive readers see the new versions.
        tracing::debug!(
            os_version = %fingerprint.os_version,
            app_version = %fingerprint.app_version,
            build_number = %fingerprint.build_number,
            "user-agent cache miss"
        );
        self.cache.write_fingerprint(&fingerprint);

        let raw = fetch_native_user_agent(&self.engine).map_err(|err| (err, String::new()))?;
        let user_agent = self
            .brand(&raw, &fingerprint)
            .map_err(|err| (err, raw))?;

        self.cache.write(&CacheEntry {
            user_agent: user_agent.clone(),
            fingerprint,
        });
        tracing::info!(user_agent = %user_agent, "derived user-agent");

        Ok(user_agent)
    }

    fn brand(&self, raw: &str, fingerprint: &Fingerprint) -> Result<String> {
        rebrand_user_agent(raw, &fingerprint.app_version, &fingerprint.build_number)
    }
}

impl<E> std::fmt::Debug for UserAgentForge<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAgentForge")
            .field("cache", &self.cache)
            .field("engine_thread", &self.engine_thread)
            .finish_non_exhaustive()
    }
}
