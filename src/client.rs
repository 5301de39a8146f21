use crate::configs::ClientKind;
use crate::environment::Environment;

/// `<prefix>/<version>b<build> (<model>; iPhone OS <os>) (<display name>)`.
pub fn client_user_agent(prefix: &str, env: &dyn Environment) -> String {
    format!(
        "{}/{}b{} ({}; iPhone OS {}) ({})",
        prefix,
        env.app_version(),
        env.build_number(),
        env.device_model(),
        env.os_version(),
        env.display_name()
    )
}

/// Client user-agent for a given service.
pub fn client_user_agent_for(kind: ClientKind, env: &dyn Environment) -> String {
    client_user_agent(kind.prefix(), env)
}

/// Sync storage client.
pub fn sync_user_agent(env: &dyn Environment) -> String {
    client_user_agent_for(ClientKind::Sync, env)
}

/// Token server client.
pub fn token_server_client_user_agent(env: &dyn Environment) -> String {
    client_user_agent_for(ClientKind::TokenServer, env)
}

/// Accounts client.
pub fn fxa_user_agent(env: &dyn Environment) -> String {
    client_user_agent_for(ClientKind::Fxa, env)
}

/// Default client.
pub fn default_client_user_agent(env: &dyn Environment) -> String {
    client_user_agent_for(ClientKind::Default, env)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::environment::AppInfo;

    fn info() -> AppInfo {
        AppInfo::new("14.0", "30.0", "1")
            .with_device_model("iPhone12,1")
            .with_display_name("Firefox")
    }

    #[test]
    fn sync_format() {
        assert_eq!(
            sync_user_agent(&info()),
            "Firefox-iOS-Sync/30.0b1 (iPhone12,1; iPhone OS 14.0) (Firefox)"
        );
    }

    #[test]
    fn variants_differ_only_by_prefix() {
        let env = info();
        let suffix = "/30.0b1 (iPhone12,1; iPhone OS 14.0) (Firefox)";
        assert_eq!(
            token_server_client_user_agent(&env),
            format!("Firefox-iOS-Token{suffix}")
        );
        assert_eq!(fxa_user_agent(&env), format!("Firefox-iOS-FxA{suffix}"));
        assert_eq!(default_client_user_agent(&env), format!("Firefox-iOS{suffix}"));
    }
}
