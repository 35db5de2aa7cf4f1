//! Interactive prompts
//!
//! Every field is read through a [`FieldPrompt`], a small state machine that
//! keeps asking until the validator accepts the input. Terminal access goes
//! through the [`Console`] trait so tests can script the operator.

use crate::client::Organization;
use crate::error::{Error, Result};
use crate::lookup;
use crate::validate::{self, ProductType};

#[cfg(test)]
pub mod scripted;
pub mod terminal;

#[cfg(test)]
pub use scripted::ScriptedConsole;
pub use terminal::TerminalConsole;

/// Operator-facing input and output
pub trait Console {
    /// Read one line of echoed text
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    /// Read a secret without echo
    fn read_secret(&mut self, prompt: &str) -> Result<String>;

    /// Show a message to the operator
    fn say(&mut self, message: &str);
}

/// How raw input is read for a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Echoed text, trimmed before validation
    Text,
    /// Echoed text, validated exactly as typed
    Raw,
    /// Secret without echo, validated as typed
    Secret,
}

/// States of a single field prompt
#[derive(Debug)]
enum FieldState<T> {
    AwaitingInput,
    Validating(String),
    Accepted(T),
}

/// Prompt for one field until the validator accepts it.
pub struct FieldPrompt<'a, T> {
    prompt: &'a str,
    mode: InputMode,
    validate: Box<dyn Fn(&str) -> Result<T> + 'a>,
}

impl<'a, T> FieldPrompt<'a, T> {
    pub fn new(prompt: &'a str, mode: InputMode, validate: impl Fn(&str) -> Result<T> + 'a) -> Self {
        Self {
            prompt,
            mode,
            validate: Box::new(validate),
        }
    }

    /// Run the prompt to completion.
    ///
    /// Recoverable errors are shown and the field is asked again; anything
    /// else (terminal failure, exhausted input) is returned.
    pub fn run(&self, console: &mut dyn Console) -> Result<T> {
        let mut state = FieldState::AwaitingInput;
        loop {
            state = match state {
                FieldState::AwaitingInput => {
                    let raw = match self.mode {
                        InputMode::Text => console.read_line(self.prompt)?.trim().to_string(),
                        InputMode::Raw => console.read_line(self.prompt)?,
                        InputMode::Secret => console.read_secret(self.prompt)?,
                    };
                    FieldState::Validating(raw)
                }
                FieldState::Validating(raw) => match (self.validate)(&raw) {
                    Ok(value) => FieldState::Accepted(value),
                    Err(err) if err.is_recoverable() => {
                        console.say(&format!("-> {}", err));
                        FieldState::AwaitingInput
                    }
                    Err(err) => return Err(err),
                },
                FieldState::Accepted(value) => return Ok(value),
            };
        }
    }
}

/// Prompt for the Dashboard API key (no echo). Returns the trimmed key.
pub fn input_api_key(console: &mut dyn Console) -> Result<String> {
    FieldPrompt::new(
        "Enter your Meraki dashboard API key",
        InputMode::Secret,
        |raw| Ok(validate::validate_api_key(raw)?),
    )
    .run(console)
}

/// Prompt for an organization name until it matches exactly one organization.
pub fn input_org(console: &mut dyn Console, orgs: &[Organization]) -> Result<Organization> {
    FieldPrompt::new(
        "Enter the name of the Meraki dashboard organization",
        InputMode::Raw,
        |raw| Ok(lookup::resolve_org(orgs, raw)?),
    )
    .run(console)
}

/// Prompt for a network name.
pub fn input_net_name(console: &mut dyn Console) -> Result<String> {
    FieldPrompt::new("Enter network name", InputMode::Text, |raw| {
        Ok(validate::validate_net_name(raw)?.to_string())
    })
    .run(console)
}

/// Prompt for tags. `tag_type` names what is being tagged, e.g. "network".
pub fn input_tags(console: &mut dyn Console, tag_type: &str) -> Result<String> {
    let prompt = format!(
        "Enter the {} tags separated by space (default: no tags)",
        tag_type
    );
    FieldPrompt::new(&prompt, InputMode::Text, |raw| {
        Ok(validate::validate_tags(raw)?.to_string())
    })
    .run(console)
}

/// Prompt for one or more device codes, returning their product types.
pub fn input_net_type(console: &mut dyn Console) -> Result<Vec<ProductType>> {
    let prompt = format!(
        "Enter a device type for a single network type, or several separated by space \
         for a combined network. Valid device types (case insensitive) are {}",
        validate::device_codes_display()
    );
    FieldPrompt::new(&prompt, InputMode::Text, |raw| {
        validate::validate_device_codes(raw).map_err(Error::from)
    })
    .run(console)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::mock::org;

    #[test]
    fn test_field_prompt_retries_until_valid() {
        let mut console = ScriptedConsole::new(["bad!", "", "Lab-01"]);

        let name = input_net_name(&mut console).unwrap();

        assert_eq!(name, "Lab-01");
        assert_eq!(console.prompts().len(), 3);
        let errors = console.messages_starting_with("-> Data Error");
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("'bad!'"));
        assert!(errors[1].contains("blank"));
    }

    #[test]
    fn test_field_prompt_trims_text() {
        let mut console = ScriptedConsole::new(["  Lab 01  "]);
        assert_eq!(input_net_name(&mut console).unwrap(), "Lab 01");
    }

    #[test]
    fn test_field_prompt_exhausted_input() {
        let mut console = ScriptedConsole::new(["no/slashes"]);
        assert!(matches!(
            input_net_name(&mut console),
            Err(Error::InputExhausted)
        ));
    }

    #[test]
    fn test_api_key_rejects_blank_and_whitespace() {
        let mut console = ScriptedConsole::new(Vec::<&str>::new()).with_secrets(["", "  ", " k3y "]);

        assert_eq!(input_api_key(&mut console).unwrap(), "k3y");
        assert_eq!(
            console.messages(),
            [
                "-> Data Error: API key can't be a blank value.",
                "-> Data Error: API key contains all whitespace characters.",
            ]
        );
    }

    #[test]
    fn test_input_org_reprompts_on_unknown_and_ambiguous() {
        let orgs = vec![org("1", "Acme"), org("2", "Acme"), org("3", "Globex")];
        let mut console = ScriptedConsole::new(["Initech", "Acme", "Globex"]);

        let chosen = input_org(&mut console, &orgs).unwrap();

        assert_eq!(chosen.id, "3");
        let messages = console.messages();
        assert!(messages[0].contains("'Initech' does not exist"));
        assert!(messages[1].contains("Ambiguous organization name"));
    }

    #[test]
    fn test_input_tags_empty_means_none() {
        let mut console = ScriptedConsole::new(["#hash", ""]);

        assert_eq!(input_tags(&mut console, "network").unwrap(), "");
        assert!(console.prompts()[0].contains("network tags"));
    }

    #[test]
    fn test_input_net_type_combined() {
        let mut console = ScriptedConsole::new(["mx zz", "MX MS"]);

        let types = input_net_type(&mut console).unwrap();

        assert_eq!(types, vec![ProductType::Appliance, ProductType::Switch]);
        assert!(console.messages()[0].contains("'ZZ'"));
    }
}
