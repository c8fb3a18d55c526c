use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// Travel profile understood by the shortest-path provider.
#[derive(Debug, Default, Deserialize, Serialize, Copy, Clone, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TravelProfile {
    #[default]
    Driving,
    Cycling,
    Walking,
}

impl Display for TravelProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelProfile::Driving => "driving",
                TravelProfile::Cycling => "cycling",
                TravelProfile::Walking => "walking",
            }
        )
    }
}

/// The `modo` a client asks for. `Manhattan` drives, and additionally asks for
/// the right-angle alternative.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum TravelMode {
    #[default]
    Auto,
    Bici,
    Peaton,
    Manhattan,
}

impl TravelMode {
    /// Lenient parsing for request bodies: a missing or unknown mode drives.
    pub fn from_request(value: Option<&str>) -> TravelMode {
        value
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    pub fn profile(&self) -> TravelProfile {
        match self {
            TravelMode::Auto | TravelMode::Manhattan => TravelProfile::Driving,
            TravelMode::Bici => TravelProfile::Cycling,
            TravelMode::Peaton => TravelProfile::Walking,
        }
    }

    pub fn wants_manhattan(&self) -> bool {
        matches!(self, TravelMode::Manhattan)
    }
}

impl FromStr for TravelMode {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TravelMode::Auto),
            "bici" => Ok(TravelMode::Bici),
            "peaton" => Ok(TravelMode::Peaton),
            "manhattan" => Ok(TravelMode::Manhattan),
            other => Err(format!(
                "unknown mode '{other}', expected one of: auto, bici, peaton, manhattan"
            )),
        }
    }
}

impl Display for TravelMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                TravelMode::Auto => "auto",
                TravelMode::Bici => "bici",
                TravelMode::Peaton => "peaton",
                TravelMode::Manhattan => "manhattan",
            }
        )
    }
}
