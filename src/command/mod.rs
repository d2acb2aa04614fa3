//! Care commands: text such as `feed:20` parsed into actions on a pet

pub mod executor;

pub use executor::CommandExecutor;

use std::str::FromStr;

use crate::core::error::PetError;

/// One owner action
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CareCommand {
    /// Feed; `None` uses the configured default amount
    Feed(Option<f64>),
    /// Play; `None` uses the configured default duration
    Play(Option<f64>),
    Status,
}

impl FromStr for CareCommand {
    type Err = PetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let value = arg
            .map(|a| {
                a.parse::<f64>()
                    .map_err(|_| PetError::InvalidAction(format!("bad number in {:?}", s)))
            })
            .transpose()?;

        match (verb, value) {
            ("feed", amount) => Ok(CareCommand::Feed(amount)),
            ("play", duration) => Ok(CareCommand::Play(duration)),
            ("status", None) => Ok(CareCommand::Status),
            ("status", Some(_)) => Err(PetError::InvalidAction(
                "status takes no argument".to_string(),
            )),
            _ => Err(PetError::InvalidAction(s.to_string())),
        }
    }
}
