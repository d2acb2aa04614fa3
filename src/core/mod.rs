pub mod config;
pub mod error;

pub use config::{config, set_config, CareConfig};
pub use error::{PetError, Result};
