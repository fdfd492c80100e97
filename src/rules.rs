//! Rules matching the supported command shapes

use log::debug;

use crate::state::{DeviceState, Setting};

/// Token to power state.
const POWER_OPTIONS: [(&str, bool); 2] = [("on", true), ("off", false)];

/// Token to setting delta.
const ADJUST_OPTIONS: [(&str, i64); 2] = [("up", 10), ("down", -10)];

/// Look up a token in an options table.
fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table.iter().find(|(key, _)| *key == token).map(|(_, v)| *v)
}

/// One supported command shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rule {
    /// `tv on` / `tv off`
    Power,
    /// `options show`
    OptionsDisplay,
    /// `<setting> up` / `<setting> down`
    SettingsAdjustment,
}

/// What a matched rule does, with its tokens already parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Action {
    SetPower(bool),
    ShowOptions,
    Adjust(Setting, i64),
}

impl Rule {
    /// All rules, in the order they are tried.
    pub(crate) const ORDER: [Rule; 3] = [Rule::Power, Rule::OptionsDisplay, Rule::SettingsAdjustment];

    /// The action to run if this rule handles the tokens. Short token lists
    /// never match.
    pub(crate) fn activate(self, tokens: &[String]) -> Option<Action> {
        let (first, second) = (tokens.first()?, tokens.get(1)?);
        match self {
            Rule::Power if first == "tv" => lookup(&POWER_OPTIONS, second).map(Action::SetPower),
            Rule::OptionsDisplay if first == "options" && second == "show" => Some(Action::ShowOptions),
            Rule::SettingsAdjustment => Some(Action::Adjust(
                Setting::from_token(first)?,
                lookup(&ADJUST_OPTIONS, second)?,
            )),
            _ => None,
        }
    }
}

impl Action {
    /// Run against the device state. Returns the text to display, which is
    /// empty for everything but `options show`.
    pub(crate) fn apply(self, state: &mut DeviceState) -> String {
        match self {
            Action::SetPower(on) => {
                state.is_online = on;
                String::new()
            }
            Action::ShowOptions => state.to_string(),
            Action::Adjust(setting, delta) => {
                state.adjust(setting, delta);
                debug!("{} is now {}", setting.name(), state.get(setting));
                String::new()
            }
        }
    }
}
