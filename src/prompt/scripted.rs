//! Scripted console for tests
//!
//! Replays a fixed list of answers and records everything shown to the
//! operator. Running out of answers ends the prompt with
//! [`Error::InputExhausted`] instead of blocking.

use std::collections::VecDeque;

use super::Console;
use crate::error::{Error, Result};

#[derive(Debug, Default)]
pub struct ScriptedConsole {
    lines: VecDeque<String>,
    secrets: VecDeque<String>,
    prompts: Vec<String>,
    messages: Vec<String>,
}

impl ScriptedConsole {
    /// Console answering text prompts with `lines`, in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Answers for secret prompts, in order
    pub fn with_secrets<I, S>(mut self, secrets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.secrets = secrets.into_iter().map(Into::into).collect();
        self
    }

    /// Every prompt shown, text and secret
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every message shown
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn messages_starting_with(&self, prefix: &str) -> Vec<&String> {
        self.messages
            .iter()
            .filter(|m| m.starts_with(prefix))
            .collect()
    }

    /// All output joined, for substring assertions
    pub fn output(&self) -> String {
        self.messages.join("\n")
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.lines.pop_front().ok_or(Error::InputExhausted)
    }

    fn read_secret(&mut self, prompt: &str) -> Result<String> {
        self.prompts.push(prompt.to_string());
        self.secrets.pop_front().ok_or(Error::InputExhausted)
    }

    fn say(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
