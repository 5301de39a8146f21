/// Client identifier builders.
pub mod client;
/// Configuration types.
pub mod configs;
/// Engine bridge.
pub mod engine;
/// Host identity.
pub mod environment;
/// Errors.
pub mod error;
/// The coordinating forge.
pub mod forge;
/// Segment extractors.
pub mod patterns;
/// User agent rebranding and desktop spoofing.
pub mod spoof_user_agent;
/// Key-value stores.
pub mod store;
/// Fingerprint keyed cache.
pub mod version_cache;

pub use client::{
    client_user_agent, default_client_user_agent, fxa_user_agent, sync_user_agent,
    token_server_client_user_agent,
};
pub use configs::{CacheChecks, ClientKind};
pub use engine::{fetch_native_user_agent, EvaluationCallback, EvaluationError, ScriptEngine};
pub use environment::{AppInfo, Environment};
pub use error::{ForgeError, Result};
pub use forge::UserAgentForge;
#[cfg(feature = "serde")]
pub use store::JsonFileStore;
pub use store::{KeyValueStore, MemoryStore};
pub use version_cache::{CacheEntry, Fingerprint, VersionCache};

#[cfg(feature = "headers")]
pub use http;

lazy_static::lazy_static! {
    /// Desktop platform indicators.
    pub static ref DESKTOP_MATCHER: aho_corasick::AhoCorasick = aho_corasick::AhoCorasickBuilder::new()
        .ascii_case_insensitive(true)
        .build(["intel mac"])
        .expect("failed to compile AhoCorasick patterns");
}

/// Returns `true` if the user-agent claims a desktop Mac platform.
pub fn is_desktop_user_agent(user_agent: &str) -> bool {
    DESKTOP_MATCHER.find(user_agent).is_some()
}

/// The user-agent as a `User-Agent` header value, if it is a valid one.
#[cfg(feature = "headers")]
pub fn user_agent_header(user_agent: &str) -> Option<http::HeaderValue> {
    http::HeaderValue::from_str(user_agent).ok()
}
