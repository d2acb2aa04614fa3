pub mod mood;
pub mod needs;
pub mod personality;
pub mod pet;

pub use mood::{CareNeed, Mood};
pub use needs::Needs;
pub use personality::{Personality, PersonalityProfile};
pub use pet::{Pet, Status};
