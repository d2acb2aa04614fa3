//! Personality presets that scale how play affects a pet

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::PetError;

/// Multipliers applied when a pet plays
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityProfile {
    /// Scales happiness gained from play
    pub happiness_gain: f64,
    /// Scales hunger built up by play
    pub hunger_drain: f64,
}

/// The closed set of pet personalities
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Balanced,
    Energetic,
    Chill,
    Curious,
    Grumpy,
}

impl Personality {
    pub const ALL: [Personality; 5] = [
        Personality::Balanced,
        Personality::Energetic,
        Personality::Chill,
        Personality::Curious,
        Personality::Grumpy,
    ];

    /// Static multipliers for this personality
    pub const fn profile(self) -> PersonalityProfile {
        let (happiness_gain, hunger_drain) = match self {
            Personality::Balanced => (1.0, 1.0),
            Personality::Energetic => (1.2, 1.3),
            Personality::Chill => (0.9, 0.8),
            Personality::Curious => (1.1, 1.0),
            Personality::Grumpy => (0.8, 1.0),
        };
        PersonalityProfile {
            happiness_gain,
            hunger_drain,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Personality::Balanced => "balanced",
            Personality::Energetic => "energetic",
            Personality::Chill => "chill",
            Personality::Curious => "curious",
            Personality::Grumpy => "grumpy",
        }
    }

    /// Lenient lookup: unrecognized names fall back to `Balanced`
    pub fn from_name(name: &str) -> Self {
        name.parse().unwrap_or_else(|_| {
            tracing::debug!(name, "Unknown personality, falling back to balanced");
            Personality::Balanced
        })
    }
}

impl FromStr for Personality {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Personality::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| PetError::UnknownPersonality(s.to_string()))
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
