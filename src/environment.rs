/// Host accessors for the device and application identity.
pub trait Environment: Send + Sync {
    /// The OS version, e.g. `14.0`.
    fn os_version(&self) -> String;
    /// The app marketing version, e.g. `30.0`.
    fn app_version(&self) -> String;
    /// The app build number.
    fn build_number(&self) -> String;
    /// The device model descriptor, e.g. `iPhone12,1`.
    fn device_model(&self) -> String;
    /// The app display name.
    fn display_name(&self) -> String;
}

/// Static application and device identity.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AppInfo {
    /// OS version.
    pub os_version: String,
    /// App marketing version.
    pub app_version: String,
    /// App build number.
    pub build_number: String,
    /// Device model.
    pub device_model: String,
    /// Display name.
    pub display_name: String,
}

impl AppInfo {
    /// Build with the three fingerprint fields; model and name fall back to generic values.
    pub fn new(
        os_version: impl Into<String>,
        app_version: impl Into<String>,
        build_number: impl Into<String>,
    ) -> Self {
        Self {
            os_version: os_version.into(),
            app_version: app_version.into(),
            build_number: build_number.into(),
            device_model: "iPhone".into(),
            display_name: "Firefox".into(),
        }
    }

    /// Set the device model.
    pub fn with_device_model(mut self, device_model: impl Into<String>) -> Self {
        self.device_model = device_model.into();
        self
    }

    /// Set the display name.
    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    /// Read the identity from `UA_FORGE_*` environment variables.
    pub fn from_env() -> Self {
        let var = |key: &str, fallback: &str| {
            std::env::var(key)
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| fallback.into())
        };

        Self {
            os_version: var("UA_FORGE_OS_VERSION", "14.0"),
            app_version: var("UA_FORGE_APP_VERSION", "0.0"),
            build_number: var("UA_FORGE_BUILD_NUMBER", "0"),
            device_model: var("UA_FORGE_DEVICE_MODEL", "iPhone"),
            display_name: var("UA_FORGE_DISPLAY_NAME", "Firefox"),
        }
    }
}

impl Environment for AppInfo {
    fn os_version(&self) -> String {
        self.os_version.clone()
    }

    fn app_version(&self) -> String {
        self.app_version.clone()
    }

    fn build_number(&self) -> String {
        self.build_number.clone()
    }

    fn device_model(&self) -> String {
        self.device_model.clone()
    }

    fn display_name(&self) -> String {
        self.display_name.clone()
    }
}

/// The major component of an OS version, e.g. `14` for `14.0.1`.
pub fn major_os_version(os_version: &str) -> &str {
    os_version.split('.').next().unwrap_or(os_version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn major_version() {
        assert_eq!(major_os_version("14.0.1"), "14");
        assert_eq!(major_os_version("17"), "17");
        assert_eq!(major_os_version(""), "");
    }

    #[test]
    fn from_env_falls_back_on_empty() {
        std::env::set_var("UA_FORGE_OS_VERSION", "");
        std::env::set_var("UA_FORGE_APP_VERSION", "99.0");

        let info = AppInfo::from_env();
        assert_eq!(info.os_version, "14.0");
        assert_eq!(info.app_version, "99.0");

        std::env::remove_var("UA_FORGE_OS_VERSION");
        std::env::remove_var("UA_FORGE_APP_VERSION");
    }

    #[test]
    fn builder_overrides() {
        let info = AppInfo::new("14.0", "30.0", "1")
            .with_device_model("iPhone12,1")
            .with_display_name("Firefox Beta");
        assert_eq!(info.device_model(), "iPhone12,1");
        assert_eq!(info.display_name(), "Firefox Beta");
        assert_eq!(info.build_number(), "1");
    }
}
