use crate::environment::major_os_version;
use crate::error::{ForgeError, Result};
use crate::patterns::{
    brand_mobile_section, mobile_marker_offset, platform_descriptor, webkit_version,
};

/// Platform descriptor used for the desktop variant.
pub const DESKTOP_PLATFORM: &str = "(Macintosh; Intel Mac OS X 10_11_1)";

/// The brand token inserted before `Mobile/`, trailing space included.
///
/// # Example
/// ```
/// use ua_forge::spoof_user_agent::brand_token;
///
/// assert_eq!(brand_token("30.0", "1"), "FxiOS/30.0b1 ");
/// ```
pub fn brand_token(app_version: &str, build_number: &str) -> String {
    format!("FxiOS/{app_version}b{build_number} ")
}

/// Brand a raw engine user-agent.
///
/// Inserts the brand token before `Mobile/` and appends `Safari/<webkit>`,
/// reusing the WebKit version as the Safari version.
pub fn rebrand_user_agent(raw: &str, app_version: &str, build_number: &str) -> Result<String> {
    let webkit = webkit_version(raw).ok_or(ForgeError::MalformedEngineUa("AppleWebKit version"))?;
    let mobile = mobile_marker_offset(raw).ok_or(ForgeError::MalformedEngineUa("Mobile section"))?;

    let brand = brand_token(app_version, build_number);
    let (prefix, rest) = raw.split_at(mobile);

    let mut out = String::with_capacity(raw.len() + brand.len() + webkit.len() + 8);
    out.push_str(prefix);
    out.push_str(&brand);
    out.push_str(rest);
    out.push_str(" Safari/");
    out.push_str(webkit);

    Ok(out)
}

/// Swap the first platform descriptor for [`DESKTOP_PLATFORM`].
pub fn spoof_desktop_platform(user_agent: &str) -> Result<String> {
    let range = platform_descriptor(user_agent).ok_or(ForgeError::MalformedUa("platform"))?;
    let mut out = user_agent.to_string();
    out.replace_range(range, DESKTOP_PLATFORM);
    Ok(out)
}

/// Replace ` FxiOS/.. Mobile/..` with ` Version/<major>.0`.
///
/// The iOS major version is the Safari major version.
pub fn strip_mobile_section(user_agent: &str, major_version: &str) -> Result<String> {
    let range =
        brand_mobile_section(user_agent).ok_or(ForgeError::MalformedUa("Mobile section"))?;
    let mut out = user_agent.to_string();
    out.replace_range(range, &format!(" Version/{major_version}.0"));
    Ok(out)
}

/// Build the desktop variant of a branded user-agent.
///
/// The two passes fail independently: a missing platform returns the input
/// untouched, a missing mobile section returns it with the platform swapped.
pub fn desktop_user_agent_from(user_agent: &str, os_version: &str) -> String {
    let spoofed = match spoof_desktop_platform(user_agent) {
        Ok(spoofed) => spoofed,
        Err(err) => {
            tracing::warn!("desktop spoof skipped: {err}");
            return user_agent.to_string();
        }
    };

    match strip_mobile_section(&spoofed, major_os_version(os_version)) {
        Ok(desktop) => desktop,
        Err(err) => {
            tracing::warn!("desktop spoof incomplete: {err}");
            spoofed
        }
    }
}
