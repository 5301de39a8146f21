/// Which parts of the fingerprint must match for a cached user-agent to be reused.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CacheChecks {
    /// Compare the OS version.
    pub os_version: bool,
    /// Compare the app marketing version.
    pub app_version: bool,
    /// Compare the app build number.
    pub build_number: bool,
}

impl Default for CacheChecks {
    fn default() -> Self {
        Self::all()
    }
}

impl CacheChecks {
    /// Every field must match.
    pub const fn all() -> Self {
        Self {
            os_version: true,
            app_version: true,
            build_number: true,
        }
    }

    /// Survive build-number bumps but not OS or version upgrades.
    pub const fn without_build_number() -> Self {
        Self {
            build_number: false,
            ..Self::all()
        }
    }

    /// Only an OS upgrade invalidates.
    pub const fn only_os_version() -> Self {
        Self {
            os_version: true,
            app_version: false,
            build_number: false,
        }
    }
}

/// The client user-agent flavours sent to our own services.
#[derive(PartialEq, Eq, Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClientKind {
    /// Sync storage client.
    Sync,
    /// Token server client.
    TokenServer,
    /// Accounts client.
    Fxa,
    #[default]
    /// Everything else.
    Default,
}

impl ClientKind {
    /// The product token prefixed to the client user-agent.
    pub fn prefix(&self) -> &'static str {
        match self {
            ClientKind::Sync => "Firefox-iOS-Sync",
            ClientKind::TokenServer => "Firefox-iOS-Token",
            ClientKind::Fxa => "Firefox-iOS-FxA",
            ClientKind::Default => "Firefox-iOS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_checks_everything() {
        assert_eq!(CacheChecks::default(), CacheChecks::all());
        assert!(!CacheChecks::without_build_number().build_number);
        assert!(CacheChecks::without_build_number().app_version);
    }

    #[test]
    fn prefixes_are_distinct() {
        let kinds = [
            ClientKind::Sync,
            ClientKind::TokenServer,
            ClientKind::Fxa,
            ClientKind::Default,
        ];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a.prefix(), b.prefix());
            }
        }
    }
}
