//! Mood labels and care recommendations derived from needs
//!
//! Both are recomputed from the current needs on every read. Nothing here
//! is stored on the pet.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::CareConfig;
use crate::entity::needs::Needs;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Joyful,
    Content,
    Starving,
    Sad,
    Restless,
}

impl Mood {
    /// Classify needs into a mood; the first matching rule wins
    pub fn derive(needs: &Needs, config: &CareConfig) -> Self {
        let Needs { hunger, happiness } = *needs;

        if happiness >= config.joyful_min_happiness && hunger <= config.joyful_max_hunger {
            Mood::Joyful
        } else if happiness >= config.content_min_happiness && hunger <= config.content_max_hunger {
            Mood::Content
        } else if hunger >= config.starving_min_hunger {
            Mood::Starving
        } else if happiness <= config.sad_max_happiness {
            Mood::Sad
        } else {
            Mood::Restless
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Mood::Joyful => "joyful",
            Mood::Content => "content",
            Mood::Starving => "starving",
            Mood::Sad => "sad",
            Mood::Restless => "restless",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A care recommendation for the owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CareNeed {
    #[serde(rename = "feed soon")]
    FeedSoon,
    #[serde(rename = "play together")]
    PlayTogether,
    #[serde(rename = "doing fine")]
    DoingFine,
}

impl CareNeed {
    /// Recommendations in fixed order: feeding, then play, else "doing fine"
    pub fn derive(needs: &Needs, config: &CareConfig) -> Vec<CareNeed> {
        let mut out = Vec::with_capacity(2);
        if needs.hunger >= config.feed_soon_hunger {
            out.push(CareNeed::FeedSoon);
        }
        if needs.happiness <= config.play_together_happiness {
            out.push(CareNeed::PlayTogether);
        }
        if out.is_empty() {
            out.push(CareNeed::DoingFine);
        }
        out
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            CareNeed::FeedSoon => "feed soon",
            CareNeed::PlayTogether => "play together",
            CareNeed::DoingFine => "doing fine",
        }
    }
}

impl fmt::Display for CareNeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
