//! Host platform identity

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// The host a picker is rendered on
///
/// Only identity matters here: the picker never talks to the platform
/// directly, it only asks which presentation mechanisms the host offers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostPlatform {
    /// iOS - overlays are detached modal sheets with a wheel picker
    Ios,
    /// Android - inline native dropdown
    Android,
    /// Desktop (macOS, Windows, Linux)
    Desktop,
    /// HarmonyOS
    Harmony,
}

impl HostPlatform {
    /// All known hosts, in declaration order
    pub const ALL: [HostPlatform; 4] = [
        HostPlatform::Ios,
        HostPlatform::Android,
        HostPlatform::Desktop,
        HostPlatform::Harmony,
    ];

    /// The host this binary was compiled for
    pub fn current() -> Self {
        if cfg!(target_os = "ios") {
            HostPlatform::Ios
        } else if cfg!(target_os = "android") {
            HostPlatform::Android
        } else if cfg!(target_env = "ohos") {
            HostPlatform::Harmony
        } else {
            HostPlatform::Desktop
        }
    }

    /// Get the platform name
    ///
    /// Returns a string like "ios", "android", "desktop", or "harmony".
    pub fn name(&self) -> &'static str {
        match self {
            HostPlatform::Ios => "ios",
            HostPlatform::Android => "android",
            HostPlatform::Desktop => "desktop",
            HostPlatform::Harmony => "harmony",
        }
    }

    /// Whether overlays are presented as detached modal sheets
    ///
    /// This is the only host property the render strategy selection reads.
    pub fn presents_modal_sheets(&self) -> bool {
        matches!(self, HostPlatform::Ios)
    }
}

impl Default for HostPlatform {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for HostPlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostPlatform {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HostPlatform::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PlatformError::UnknownPlatform(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ios_presents_modal_sheets() {
        assert!(HostPlatform::Ios.presents_modal_sheets());
        assert!(!HostPlatform::Android.presents_modal_sheets());
        assert!(!HostPlatform::Desktop.presents_modal_sheets());
        assert!(!HostPlatform::Harmony.presents_modal_sheets());
    }

    #[test]
    fn test_parse_platform_names() {
        assert_eq!("ios".parse::<HostPlatform>(), Ok(HostPlatform::Ios));
        assert_eq!(" Android ".parse::<HostPlatform>(), Ok(HostPlatform::Android));
        assert_eq!(
            "symbian".parse::<HostPlatform>(),
            Err(PlatformError::UnknownPlatform("symbian".to_string()))
        );
    }

    #[test]
    fn test_name_round_trips_through_display() {
        for host in HostPlatform::ALL {
            assert_eq!(host.to_string().parse::<HostPlatform>(), Ok(host));
        }
    }
}
