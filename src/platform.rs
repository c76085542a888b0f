//! Platform detection
//!
//! The matching core never asks which platform it runs on; it is handed an
//! `is_mac` flag resolved here once at startup.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Keyboard convention the quiz asks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Cmd / Option / Ctrl
    Mac,
    /// Ctrl / Alt
    Windows,
}

impl Platform {
    pub fn from_is_mac(is_mac: bool) -> Self {
        if is_mac {
            Self::Mac
        } else {
            Self::Windows
        }
    }

    pub fn is_mac(self) -> bool {
        matches!(self, Self::Mac)
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Mac => Self::Windows,
            Self::Windows => Self::Mac,
        }
    }
}

/// Source of the host platform
#[cfg_attr(test, mockall::automock)]
pub trait PlatformProbe {
    /// Whether the host uses Mac keyboard conventions
    fn is_mac(&self) -> bool;
}

/// Probe for the platform the binary was built for
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn is_mac(&self) -> bool {
        cfg!(target_os = "macos")
    }
}

/// Pick the platform: command line first, then config, then the host
pub fn resolve_platform(
    cli: Option<Platform>,
    configured: Option<Platform>,
    probe: &dyn PlatformProbe,
) -> Platform {
    cli.or(configured)
        .unwrap_or_else(|| Platform::from_is_mac(probe.is_mac()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cli_wins() {
        let mut probe = MockPlatformProbe::new();
        probe.expect_is_mac().never();
        assert_eq!(
            resolve_platform(Some(Platform::Mac), Some(Platform::Windows), &probe),
            Platform::Mac
        );
    }

    #[test]
    fn test_config_before_probe() {
        let mut probe = MockPlatformProbe::new();
        probe.expect_is_mac().never();
        assert_eq!(
            resolve_platform(None, Some(Platform::Windows), &probe),
            Platform::Windows
        );
    }

    #[test]
    fn test_probe_fallback() {
        let mut probe = MockPlatformProbe::new();
        probe.expect_is_mac().times(1).return_const(true);
        assert_eq!(resolve_platform(None, None, &probe), Platform::Mac);
    }

    #[test]
    fn test_host_platform_matches_target() {
        assert_eq!(HostPlatform.is_mac(), cfg!(target_os = "macos"));
    }

    #[test]
    fn test_toggle() {
        assert_eq!(Platform::Mac.toggle(), Platform::Windows);
        assert_eq!(Platform::Windows.toggle(), Platform::Mac);
        assert!(Platform::from_is_mac(true).is_mac());
    }

    #[test]
    fn test_serde_names() {
        assert_eq!(serde_json::to_string(&Platform::Mac).unwrap(), "\"mac\"");
        let parsed: Platform = serde_json::from_str("\"windows\"").unwrap();
        assert_eq!(parsed, Platform::Windows);
    }
}
