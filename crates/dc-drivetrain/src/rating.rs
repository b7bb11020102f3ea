//! Qualitative ratings: bucket continuous figures into labeled ranges.
//!
//! Buckets partition the axis with lower-bound-inclusive thresholds, so a
//! value sitting exactly on a threshold lands in the bucket that threshold
//! opens.

use core::fmt;
use dc_core::Real;
use serde::{Deserialize, Serialize};

/// Character of a reduction: what the drive trades away and what it gains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatioCharacter {
    SpeedFocused,
    Balanced,
    TorqueFocused,
}

impl RatioCharacter {
    pub const BALANCED_MIN: Real = 1.5;
    pub const TORQUE_MIN: Real = 3.0;

    pub fn from_ratio(ratio: Real) -> Self {
        if ratio < Self::BALANCED_MIN {
            Self::SpeedFocused
        } else if ratio < Self::TORQUE_MIN {
            Self::Balanced
        } else {
            Self::TorqueFocused
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::SpeedFocused => "Speed-focused",
            Self::Balanced => "Balanced",
            Self::TorqueFocused => "Torque-focused",
        }
    }
}

impl fmt::Display for RatioCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Top-speed rating in ft/s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpeedRating {
    Slow,
    Moderate,
    Fast,
    VeryFast,
}

impl SpeedRating {
    pub const MODERATE_MIN: Real = 3.0;
    pub const FAST_MIN: Real = 6.0;
    pub const VERY_FAST_MIN: Real = 10.0;

    pub fn from_speed(speed_ft_per_s: Real) -> Self {
        if speed_ft_per_s < Self::MODERATE_MIN {
            Self::Slow
        } else if speed_ft_per_s < Self::FAST_MIN {
            Self::Moderate
        } else if speed_ft_per_s < Self::VERY_FAST_MIN {
            Self::Fast
        } else {
            Self::VeryFast
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Moderate => "Moderate",
            Self::Fast => "Fast",
            Self::VeryFast => "Very fast",
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Self::Slow => "good for precise tasks",
            Self::Moderate => "balanced approach",
            Self::Fast => "good for crossing the field",
            Self::VeryFast => "racing speed",
        }
    }
}

impl fmt::Display for SpeedRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total-torque rating in N·m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TorqueRating {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl TorqueRating {
    pub const MODERATE_MIN: Real = 10.0;
    pub const HIGH_MIN: Real = 20.0;
    pub const VERY_HIGH_MIN: Real = 40.0;

    pub fn from_total_torque(total_torque_nm: Real) -> Self {
        if total_torque_nm < Self::MODERATE_MIN {
            Self::Low
        } else if total_torque_nm < Self::HIGH_MIN {
            Self::Moderate
        } else if total_torque_nm < Self::VERY_HIGH_MIN {
            Self::High
        } else {
            Self::VeryHigh
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
            Self::VeryHigh => "Very high",
        }
    }

    pub fn note(&self) -> &'static str {
        match self {
            Self::Low => "will struggle when pushing",
            Self::Moderate => "decent pushing power",
            Self::High => "strong pushing capability",
            Self::VeryHigh => "excellent pushing power",
        }
    }
}

impl fmt::Display for TorqueRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How an achieved speed compares to the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetMatch {
    OnTarget,
    TooFast,
    TooSlow,
}

impl TargetMatch {
    /// Speeds within this band of the target count as a match, ft/s.
    pub const TOLERANCE_FT_PER_S: Real = 0.5;

    pub fn classify(actual_ft_per_s: Real, desired_ft_per_s: Real) -> Self {
        if (actual_ft_per_s - desired_ft_per_s).abs() < Self::TOLERANCE_FT_PER_S {
            Self::OnTarget
        } else if actual_ft_per_s > desired_ft_per_s {
            Self::TooFast
        } else {
            Self::TooSlow
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::OnTarget => "good match to target speed",
            Self::TooFast => "too fast, increase the ratio",
            Self::TooSlow => "too slow, decrease the ratio",
        }
    }
}

impl fmt::Display for TargetMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
