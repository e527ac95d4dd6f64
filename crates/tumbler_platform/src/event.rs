//! Host events and overlay orientation

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PlatformError;

/// Overlay orientation as reported by the host modal primitive
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn name(&self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Orientation {
    type Err = PlatformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portrait" => Ok(Orientation::Portrait),
            "landscape" => Ok(Orientation::Landscape),
            _ => Err(PlatformError::UnknownOrientation(s.to_string())),
        }
    }
}

/// Events reported by the host's modal presentation primitive
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    /// The modal sheet was rotated
    OrientationChanged(Orientation),
    /// The modal sheet went away without the picker asking for it
    ModalDismissed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_default() {
        assert_eq!(Orientation::default(), Orientation::Portrait);
    }

    #[test]
    fn test_orientation_parse() {
        assert_eq!("Landscape".parse::<Orientation>(), Ok(Orientation::Landscape));
        assert!("sideways".parse::<Orientation>().is_err());
    }
}
