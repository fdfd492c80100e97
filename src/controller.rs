//! Command dispatch: normalization and rule matching

use log::{debug, trace};
use smallvec::SmallVec;

use crate::{
    errors::{InvalidCommandSnafu, RcError},
    rules::Rule,
    state::DeviceState,
};

/// Phrase stripped from every command before matching.
const CHANGE_PHRASE: &str = "options change ";

/// Normalized command. Commands rarely have more than a few words.
pub(crate) type Tokens = SmallVec<[String; 4]>;

/// Strip the change phrase (anywhere, any case), lower-case and split on
/// single spaces. Repeated spaces produce empty tokens.
pub(crate) fn normalize(command: &str) -> Tokens {
    command
        .to_lowercase()
        .replace(CHANGE_PHRASE, "")
        .split(' ')
        .map(str::to_owned)
        .collect()
}

#[derive(Debug)]
pub(crate) struct RemoteController {
    state: DeviceState,
    rules: [Rule; 3],
}

impl RemoteController {
    pub(crate) fn new() -> Self {
        Self {
            state: DeviceState::new(),
            rules: Rule::ORDER,
        }
    }

    pub(crate) fn state(&self) -> &DeviceState {
        &self.state
    }

    /// Execute one command. The first rule accepting the normalized tokens
    /// wins.
    pub(crate) fn call(&mut self, command: &str) -> Result<String, RcError> {
        let tokens = normalize(command);
        trace!("Tokens: {tokens:?}");

        let Some((rule, action)) = self
            .rules
            .iter()
            .find_map(|&r| r.activate(&tokens).map(|action| (r, action)))
        else {
            debug!("Rejected command {command:?}");
            return InvalidCommandSnafu { command }.fail();
        };
        debug!("Command {command:?} handled by {rule:?}: {action:?}");
        Ok(action.apply(&mut self.state))
    }

    pub(crate) fn options_show(&self) -> String {
        self.state.to_string()
    }
}

impl Default for RemoteController {
    fn default() -> Self {
        Self::new()
    }
}
