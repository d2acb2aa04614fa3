//! The pet entity and its status snapshot

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::config::{config, CareConfig};
use crate::entity::mood::{CareNeed, Mood};
use crate::entity::needs::Needs;
use crate::entity::personality::Personality;

/// Point-in-time view of a pet, as returned by every action
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Status {
    pub name: String,
    pub personality: Personality,
    /// Rounded to one decimal place
    pub hunger: f64,
    /// Rounded to one decimal place
    pub happiness: f64,
    pub mood: Mood,
    pub needs: Vec<CareNeed>,
}

/// Round half away from zero to one decimal place
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A single virtual pet
///
/// State changes only through [`Pet::feed`] and [`Pet::play`]. Hunger and
/// happiness are clamped after every change. Each pet keeps the
/// [`CareConfig`] it was built with and uses it for every later action and
/// read. `feed` and `play` are read-modify-write over two fields, so callers
/// sharing a pet across threads must wrap it in a lock.
#[derive(Debug, Clone, PartialEq)]
pub struct Pet {
    name: String,
    personality: Personality,
    needs: Needs,
    config: CareConfig,
}

impl Pet {
    /// A balanced pet with default hunger and happiness
    pub fn new(name: impl Into<String>) -> Self {
        let config = config();
        Self::with_config(
            name,
            Personality::Balanced,
            config.initial_hunger,
            config.initial_happiness,
            config,
        )
    }

    /// Build with the process-wide config
    pub fn with_state(
        name: impl Into<String>,
        personality: Personality,
        hunger: f64,
        happiness: f64,
    ) -> Self {
        Self::with_config(name, personality, hunger, happiness, config())
    }

    /// Build from a personality name; unknown names become `balanced`
    pub fn from_personality_name(
        name: impl Into<String>,
        personality: &str,
        hunger: f64,
        happiness: f64,
    ) -> Self {
        Self::with_state(name, Personality::from_name(personality), hunger, happiness)
    }

    /// Build with an explicit config, kept for the pet's whole lifetime
    pub fn with_config(
        name: impl Into<String>,
        personality: Personality,
        hunger: f64,
        happiness: f64,
        config: &CareConfig,
    ) -> Self {
        Self {
            name: name.into(),
            personality,
            needs: Needs::new(hunger, happiness, config),
            config: config.clone(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn personality(&self) -> Personality {
        self.personality
    }

    pub fn config(&self) -> &CareConfig {
        &self.config
    }

    /// Unrounded hunger
    pub fn hunger(&self) -> f64 {
        self.needs.hunger
    }

    /// Unrounded happiness
    pub fn happiness(&self) -> f64 {
        self.needs.happiness
    }

    pub fn mood(&self) -> Mood {
        Mood::derive(&self.needs, &self.config)
    }

    pub fn needs(&self) -> Vec<CareNeed> {
        CareNeed::derive(&self.needs, &self.config)
    }

    /// Feed the pet. Negative amounts are applied as given.
    pub fn feed(&mut self, amount: f64) -> Status {
        self.needs.adjust_hunger(-amount, &self.config);
        self.needs
            .adjust_happiness(amount * self.config.feed_happiness_ratio, &self.config);
        tracing::trace!(
            pet = %self.name,
            amount,
            hunger = self.needs.hunger,
            happiness = self.needs.happiness,
            "Fed pet"
        );
        self.status()
    }

    pub fn feed_default(&mut self) -> Status {
        self.feed(self.config.default_feed_amount)
    }

    /// Play with the pet, scaled by its personality. Negative durations
    /// are applied as given.
    pub fn play(&mut self, duration: f64) -> Status {
        let profile = self.personality.profile();
        self.needs.adjust_happiness(
            duration * self.config.play_happiness_rate * profile.happiness_gain,
            &self.config,
        );
        self.needs.adjust_hunger(
            duration * self.config.play_hunger_rate * profile.hunger_drain,
            &self.config,
        );
        tracing::trace!(
            pet = %self.name,
            personality = %self.personality,
            duration,
            hunger = self.needs.hunger,
            happiness = self.needs.happiness,
            "Played with pet"
        );
        self.status()
    }

    pub fn play_default(&mut self) -> Status {
        self.play(self.config.default_play_duration)
    }

    pub fn status(&self) -> Status {
        Status {
            name: self.name.clone(),
            personality: self.personality,
            hunger: round_tenth(self.needs.hunger),
            happiness: round_tenth(self.needs.happiness),
            mood: self.mood(),
            needs: self.needs(),
        }
    }
}

impl fmt::Display for Pet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = self.status();
        write!(
            f,
            "Pet(name='{}', personality='{}', hunger={:.1}, happiness={:.1}, mood='{}')",
            status.name, status.personality, status.hunger, status.happiness, status.mood
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults() {
        let pet = Pet::new("Rex");
        assert_eq!(pet.name(), "Rex");
        assert_eq!(pet.personality(), Personality::Balanced);
        assert_eq!(pet.hunger(), 50.0);
        assert_eq!(pet.happiness(), 50.0);
    }

    #[test]
    fn test_construction_clamps() {
        let pet = Pet::with_state("Rex", Personality::Chill, 140.0, -3.0);
        assert_eq!(pet.hunger(), 100.0);
        assert_eq!(pet.happiness(), 0.0);
    }

    #[test]
    fn test_unknown_personality_falls_back() {
        let pet = Pet::from_personality_name("Rex", "nonexistent", 50.0, 50.0);
        assert_eq!(pet.personality(), Personality::Balanced);
        assert_eq!(pet.status().personality.as_str(), "balanced");
    }

    #[test]
    fn test_feed_default() {
        let mut pet = Pet::new("Rex");
        let status = pet.feed_default();
        assert_eq!(status.hunger, 35.0);
        assert_eq!(status.happiness, 51.5);
    }

    #[test]
    fn test_feed_clamps_hunger_at_zero() {
        let mut pet = Pet::with_state("Rex", Personality::Balanced, 5.0, 99.5);
        let status = pet.feed(30.0);
        assert_eq!(status.hunger, 0.0);
        assert_eq!(status.happiness, 100.0);
    }

    #[test]
    fn test_negative_feed_is_applied() {
        let mut pet = Pet::new("Rex");
        let status = pet.feed(-10.0);
        assert_eq!(status.hunger, 60.0);
        assert_eq!(status.happiness, 49.0);
    }

    #[test]
    fn test_play_default_balanced() {
        let mut pet = Pet::new("Rex");
        let status = pet.play_default();
        assert_eq!(status.happiness, 58.0);
        assert_eq!(status.hunger, 56.0);
    }

    #[test]
    fn test_play_scaled_by_personality() {
        let mut pet = Pet::with_state("Zip", Personality::Energetic, 50.0, 50.0);
        let status = pet.play(10.0);
        assert_eq!(status.happiness, 59.6);
        assert_eq!(status.hunger, 57.8);
    }

    #[test]
    fn test_status_rounds_to_one_decimal() {
        let pet = Pet::with_state("Rex", Personality::Balanced, 33.333, 66.666);
        let status = pet.status();
        assert_eq!(status.hunger, 33.3);
        assert_eq!(status.happiness, 66.7);
        // raw state is untouched by rounding
        assert_eq!(pet.hunger(), 33.333);
    }

    #[test]
    fn test_mood_and_needs_follow_state() {
        let mut pet = Pet::with_state("Rex", Personality::Balanced, 85.0, 20.0);
        assert_eq!(pet.mood(), Mood::Starving);
        assert_eq!(pet.needs(), vec![CareNeed::FeedSoon, CareNeed::PlayTogether]);

        pet.feed(50.0);
        assert_eq!(pet.mood(), Mood::Sad);
        assert_eq!(pet.needs(), vec![CareNeed::PlayTogether]);
    }

    #[test]
    fn test_custom_config_changes_feed() {
        let config = CareConfig {
            feed_happiness_ratio: 0.5,
            ..CareConfig::default()
        };
        let mut pet = Pet::with_config("Rex", Personality::Balanced, 50.0, 50.0, &config);
        let status = pet.feed(10.0);
        assert_eq!(status.hunger, 40.0);
        assert_eq!(status.happiness, 55.0);
    }

    #[test]
    fn test_custom_config_used_for_reads_after_construction() {
        let config = CareConfig {
            sad_max_happiness: 45.0,
            play_together_happiness: 45.0,
            default_play_duration: 20.0,
            ..CareConfig::default()
        };
        let mut pet = Pet::with_config("Rex", Personality::Balanced, 65.0, 40.0, &config);
        assert_eq!(pet.config(), &config);

        // the global default would call this restless and doing fine
        assert_eq!(pet.mood(), Mood::Sad);
        assert_eq!(pet.needs(), vec![CareNeed::PlayTogether]);
        assert_eq!(pet.status().mood, Mood::Sad);
        assert!(pet.to_string().ends_with("mood='sad')"));

        let status = pet.play_default();
        assert_eq!(status.happiness, 56.0);
        assert_eq!(status.hunger, 77.0);
    }

    #[test]
    fn test_display() {
        let pet = Pet::with_state("Rex", Personality::Curious, 30.0, 80.0);
        assert_eq!(
            pet.to_string(),
            "Pet(name='Rex', personality='curious', hunger=30.0, happiness=80.0, mood='joyful')"
        );
    }

    #[test]
    fn test_status_json_shape() {
        let status = Pet::new("Rex").status();
        let json = serde_json::to_value(&status).unwrap();
        assert_eq!(json["name"], "Rex");
        assert_eq!(json["personality"], "balanced");
        assert_eq!(json["hunger"], 50.0);
        assert_eq!(json["mood"], "content");
        assert_eq!(json["needs"], serde_json::json!(["doing fine"]));
    }
}
