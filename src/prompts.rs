//! Prompt bank
//!
//! Questions drawn at the start of each round. The bank is never allowed to
//! become empty, so a draw from a bank built with [`PromptBank::new`] always
//! succeeds.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Built-in prompts the bank is seeded with
pub const DEFAULT_PROMPTS: &[&str] = &[
    "When was the last time you went out for drinks?",
    "What is your favourite drink?",
    "What is the most embarrassing thing you have done after a few drinks?",
    "What was the funniest moment you have seen at a party?",
    "What is the one thing you never do at a party?",
    "Propose a toast to the person on your left",
    "What is the strongest drink you have ever had?",
    "What kind of party guest annoys you the most?",
    "What is the worst decision you have made after a few drinks?",
    "What manners should everyone keep at a party?",
];

#[derive(Debug, Clone)]
pub struct PromptBank {
    prompts: Vec<String>,
}

impl Default for PromptBank {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptBank {
    /// Bank seeded with [`DEFAULT_PROMPTS`]
    pub fn new() -> Self {
        Self {
            prompts: DEFAULT_PROMPTS.iter().map(|p| p.to_string()).collect(),
        }
    }

    /// Uniform random draw. `None` only if the bank is empty.
    pub fn draw<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<String> {
        self.prompts.choose(rng).cloned()
    }

    /// Append a prompt (duplicates allowed). Empty prompts are rejected.
    pub fn add(&mut self, prompt: &str) -> bool {
        if prompt.is_empty() {
            return false;
        }
        self.prompts.push(prompt.to_string());
        true
    }

    /// Remove the first matching prompt.
    ///
    /// Fails if the prompt is absent or is the last one left.
    pub fn remove(&mut self, prompt: &str) -> bool {
        if self.prompts.len() <= 1 {
            return false;
        }
        match self.prompts.iter().position(|p| p == prompt) {
            Some(pos) => {
                self.prompts.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}
