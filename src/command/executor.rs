//! Command execution - applies parsed care commands to a pet

use crate::command::CareCommand;
use crate::entity::pet::{Pet, Status};

/// Runs care commands against a pet
pub struct CommandExecutor;

impl CommandExecutor {
    /// Apply one command, returning the pet's status afterwards
    ///
    /// Commands without an argument use the pet's configured defaults.
    pub fn execute(pet: &mut Pet, command: CareCommand) -> Status {
        match command {
            CareCommand::Feed(Some(amount)) => pet.feed(amount),
            CareCommand::Feed(None) => pet.feed_default(),
            CareCommand::Play(Some(duration)) => pet.play(duration),
            CareCommand::Play(None) => pet.play_default(),
            CareCommand::Status => pet.status(),
        }
    }

    /// Apply commands in order, collecting the status after each
    pub fn execute_all<'a>(
        pet: &mut Pet,
        commands: impl IntoIterator<Item = &'a CareCommand>,
    ) -> Vec<Status> {
        commands
            .into_iter()
            .map(|command| Self::execute(pet, *command))
            .collect()
    }
}
