use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serde wire name of each variant is its `as_str` value.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Clinical category of an interaction. Declaration order is clinical
    /// importance, so `Ord` ranks CONTRAINDICATED highest.
    SeverityLevel {
        Mild => "mild",
        Moderate => "moderate",
        Severe => "severe",
        Contraindicated => "contraindicated",
    }
);

str_enum!(
    /// Coarse risk category derived from the normalized score.
    ClinicalBand {
        Low => "Low",
        Moderate => "Moderate",
        High => "High",
        Critical => "Critical",
    }
);

str_enum!(AdherenceStatus {
    Taken => "TAKEN",
    Missed => "MISSED",
});

str_enum!(GuardianAlertType {
    ConsecutiveMisses => "CONSECUTIVE_MISSES",
});

impl SeverityLevel {
    /// All severities in declaration order (mildest first).
    pub const ALL: [SeverityLevel; 4] = [
        Self::Mild,
        Self::Moderate,
        Self::Severe,
        Self::Contraindicated,
    ];

    /// Order used to pick the dominant driver of a risk score.
    pub const PRIORITY: [SeverityLevel; 4] = [
        Self::Contraindicated,
        Self::Severe,
        Self::Moderate,
        Self::Mild,
    ];

    /// Fixed contribution of one interaction to the raw risk weight.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Mild => 1,
            Self::Moderate => 2,
            Self::Severe => 4,
            Self::Contraindicated => 5,
        }
    }

    /// Minimum hours two interacting drugs must be apart in a daily schedule.
    /// 24h cannot fit inside the waking-day window, so contraindicated pairs
    /// are never co-scheduled.
    pub const fn min_separation_hours(self) -> u32 {
        match self {
            Self::Mild => 0,
            Self::Moderate => 2,
            Self::Severe => 4,
            Self::Contraindicated => 24,
        }
    }

    /// Whether a successful schedule should explain the separation it applied.
    pub fn requires_separation_note(self) -> bool {
        matches!(
            self,
            Self::Moderate | Self::Severe | Self::Contraindicated
        )
    }

    /// UI colour for interaction graph edges.
    pub fn display_color(self) -> &'static str {
        match self {
            Self::Mild => "green",
            Self::Moderate => "yellow",
            Self::Severe => "red",
            Self::Contraindicated => "black",
        }
    }
}

impl ClinicalBand {
    /// Band thresholds on the final normalized score.
    pub fn from_score(score: u32) -> Self {
        if score < 25 {
            Self::Low
        } else if score < 50 {
            Self::Moderate
        } else if score < 80 {
            Self::High
        } else {
            Self::Critical
        }
    }
}
