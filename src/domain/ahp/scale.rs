//! Saaty 1-9 scale for pairwise judgments.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// Tolerance used when mapping a numeric ratio back onto the scale.
const RATIO_TOLERANCE: f64 = 1e-6;

/// Intensity of importance on the Saaty scale (1 = equal, 9 = extreme).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Intensity {
    #[default]
    Equal = 1,
    EqualToModerate = 2,
    Moderate = 3,
    ModerateToStrong = 4,
    Strong = 5,
    StrongToVeryStrong = 6,
    VeryStrong = 7,
    VeryStrongToExtreme = 8,
    Extreme = 9,
}

impl Intensity {
    /// All scale points in ascending order.
    pub const ALL: [Intensity; 9] = [
        Intensity::Equal,
        Intensity::EqualToModerate,
        Intensity::Moderate,
        Intensity::ModerateToStrong,
        Intensity::Strong,
        Intensity::StrongToVeryStrong,
        Intensity::VeryStrong,
        Intensity::VeryStrongToExtreme,
        Intensity::Extreme,
    ];

    /// Creates an Intensity from an integer, returning error if out of range.
    pub fn try_from_u8(value: u8) -> Result<Self, ValidationError> {
        value
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(idx as usize).copied())
            .ok_or_else(|| ValidationError::out_of_range("intensity", 1, 9, value as i32))
    }

    /// Returns the numeric scale value.
    pub fn value(&self) -> u8 {
        *self as u8
    }

    /// Returns the semantic label shown next to the scale point.
    pub fn label(&self) -> &'static str {
        match self {
            Intensity::Equal => "Equally important",
            Intensity::EqualToModerate => "Equally to moderately more important",
            Intensity::Moderate => "Moderately more important",
            Intensity::ModerateToStrong => "Moderately to strongly more important",
            Intensity::Strong => "Strongly more important",
            Intensity::StrongToVeryStrong => "Strongly to very strongly more important",
            Intensity::VeryStrong => "Very strongly more important",
            Intensity::VeryStrongToExtreme => "Very strongly to extremely more important",
            Intensity::Extreme => "Extremely more important",
        }
    }
}

impl TryFrom<u8> for Intensity {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_u8(value)
    }
}

impl From<Intensity> for u8 {
    fn from(intensity: Intensity) -> Self {
        intensity.value()
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// A pairwise judgment between the first (row) and second (column) item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Judgment {
    /// The first item is preferred with the given intensity.
    FavorsFirst(Intensity),
    /// The second item is preferred with the given intensity.
    FavorsSecond(Intensity),
}

impl Judgment {
    /// Both items equally important.
    pub const EQUAL: Judgment = Judgment::FavorsFirst(Intensity::Equal);

    /// Maps a ratio such as `3.0` or `0.5` onto the scale.
    ///
    /// Only the 17 Saaty ratios 1/9..=9 are accepted.
    pub fn try_from_ratio(ratio: f64) -> Result<Self, ValidationError> {
        if !ratio.is_finite() || ratio <= 0.0 {
            return Err(ValidationError::invalid_format(
                "judgment",
                format!("{} is not a positive ratio", ratio),
            ));
        }

        let (magnitude, favors_first) = if ratio >= 1.0 {
            (ratio, true)
        } else {
            (1.0 / ratio, false)
        };

        let rounded = magnitude.round();
        if (magnitude - rounded).abs() > RATIO_TOLERANCE || rounded > 9.0 {
            return Err(ValidationError::invalid_format(
                "judgment",
                format!("{} is not on the 1/9..9 Saaty scale", ratio),
            ));
        }

        let intensity = Intensity::try_from_u8(rounded as u8)?;
        Ok(if favors_first {
            Judgment::FavorsFirst(intensity)
        } else {
            Judgment::FavorsSecond(intensity)
        })
    }

    /// Returns the value stored at (first, second).
    pub fn ratio(&self) -> f64 {
        match self {
            Judgment::FavorsFirst(i) => f64::from(i.value()),
            Judgment::FavorsSecond(i) => 1.0 / f64::from(i.value()),
        }
    }

    /// Returns the same judgment seen from the other item.
    pub fn inverted(&self) -> Self {
        match *self {
            Judgment::FavorsFirst(Intensity::Equal) => *self,
            Judgment::FavorsFirst(i) => Judgment::FavorsSecond(i),
            Judgment::FavorsSecond(i) => Judgment::FavorsFirst(i),
        }
    }

    /// Returns the intensity regardless of direction.
    pub fn intensity(&self) -> Intensity {
        match self {
            Judgment::FavorsFirst(i) | Judgment::FavorsSecond(i) => *i,
        }
    }
}

impl From<Intensity> for Judgment {
    fn from(intensity: Intensity) -> Self {
        Judgment::FavorsFirst(intensity)
    }
}

impl TryFrom<f64> for Judgment {
    type Error = ValidationError;

    fn try_from(ratio: f64) -> Result<Self, Self::Error> {
        Self::try_from_ratio(ratio)
    }
}

impl From<Judgment> for f64 {
    fn from(judgment: Judgment) -> Self {
        judgment.ratio()
    }
}

impl fmt::Display for Judgment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Judgment::FavorsFirst(i) => write!(f, "{}", i),
            Judgment::FavorsSecond(i) if *i == Intensity::Equal => write!(f, "1"),
            Judgment::FavorsSecond(i) => write!(f, "1/{}", i),
        }
    }
}
