use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown inspection status: {0:?}")]
pub struct StatusParseError(pub String);

/// Outcome recorded by an inspection. A plain attribute; there are no
/// transition rules between values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InspectionStatus {
    OnSchedule,
    Delayed,
    Stopped,
}

impl InspectionStatus {
    /// Stored label.
    pub fn label(self) -> &'static str {
        match self {
            InspectionStatus::OnSchedule => "On Schedule",
            InspectionStatus::Delayed => "Delayed",
            InspectionStatus::Stopped => "Stopped",
        }
    }

    /// Work is still going on at the site (on schedule or behind it).
    pub fn is_active(self) -> bool {
        matches!(
            self,
            InspectionStatus::OnSchedule | InspectionStatus::Delayed
        )
    }
}

impl fmt::Display for InspectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for InspectionStatus {
    type Err = StatusParseError;

    /// Case-insensitive and whitespace-tolerant. Also accepts the legacy
    /// Portuguese labels ("Em Dia", "Atrasada", "Parada").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "on schedule" | "on_schedule" | "onschedule" | "em dia" => {
                Ok(InspectionStatus::OnSchedule)
            }
            "delayed" | "atrasada" => Ok(InspectionStatus::Delayed),
            "stopped" | "parada" => Ok(InspectionStatus::Stopped),
            _ => Err(StatusParseError(s.to_string())),
        }
    }
}

impl Serialize for InspectionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for InspectionStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
