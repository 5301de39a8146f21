use crate::error::{ForgeError, Result};
use std::sync::mpsc;

/// Failure reported by the engine while evaluating a script.
pub type EvaluationError = Box<dyn std::error::Error + Send + Sync>;

/// Completion for [`ScriptEngine::evaluate`]. Fires at most once.
pub type EvaluationCallback = Box<dyn FnOnce(std::result::Result<String, EvaluationError>) + Send>;

/// Minimal surface of the embedded rendering engine.
///
/// Implementations may complete `evaluate` inline or later from another
/// thread; they must not be driven from any thread but the one that owns them.
pub trait ScriptEngine {
    /// Load an HTML document.
    fn load_html(&self, html: &str);
    /// Evaluate `script` in the loaded document and report the string result.
    fn evaluate(&self, script: &str, completion: EvaluationCallback);
}

/// The empty document loaded before asking for the user-agent.
pub const BLANK_DOCUMENT: &str = "<html></html>";
/// Script reporting the engine's native user-agent.
pub const USER_AGENT_SCRIPT: &str = "navigator.userAgent";

/// Ask the engine for its native user-agent, blocking until it answers.
///
/// There is no timeout: an engine that never completes blocks forever. A
/// completion that is dropped without firing is reported as unavailable.
pub fn fetch_native_user_agent<E: ScriptEngine + ?Sized>(engine: &E) -> Result<String> {
    engine.load_html(BLANK_DOCUMENT);

    let (tx, rx) = mpsc::sync_channel(1);

    engine.evaluate(
        USER_AGENT_SCRIPT,
        Box::new(move |result: std::result::Result<String, EvaluationError>| {
            // the receiver outlives the call, a send error only means it gave up.
            let _ = tx.send(result);
        }),
    );

    match rx.recv() {
        Ok(Ok(user_agent)) => Ok(user_agent),
        Ok(Err(err)) => Err(ForgeError::EngineUnavailable(err.to_string())),
        Err(_) => Err(ForgeError::EngineUnavailable(
            "completion dropped without a result".into(),
        )),
    }
}
