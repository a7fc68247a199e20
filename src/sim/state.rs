//! Game state and snapshot types
//!
//! [`Game`] owns everything a session needs: roster, prompts, selector,
//! timer, RNG and the current round. The view only ever sees a
//! [`Snapshot`].

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spin::{SpinSelector, SpinState};
use super::timer::{Clock, RoundTimer};
use crate::consts::*;
use crate::prompts::PromptBank;
use crate::roster::Roster;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen
    Menu,
    /// Adding and removing players
    Registration,
    /// A prompt has been drawn, waiting to spin
    PromptSelection,
    /// Wheel is spinning or showing who it stopped on
    Spinning,
    /// Selected player is answering against the clock
    Answering,
    /// Round finished
    Result,
}

/// How a round ended, captured when it ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// Player answered in time
    Answered,
    /// Countdown ran out
    TimedOut,
}

/// Who answers what in the current round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundContext {
    pub player: String,
    pub prompt: String,
}

/// Read-only view of the game for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub roster: Vec<String>,
    pub current_prompt: Option<String>,
    pub current_player: Option<String>,
    pub spin: SpinState,
    /// Countdown seconds left (0 outside a running countdown)
    pub remaining_secs: f32,
    /// Countdown left as a 0-1 fraction
    pub timer_fraction: f32,
    pub time_running_low: bool,
    /// Set only in the Result phase
    pub outcome: Option<RoundOutcome>,
    /// Enough players registered to start
    pub can_start: bool,
}

/// Complete game session
#[derive(Debug)]
pub struct Game {
    /// Seed the RNG was created from
    pub seed: u64,
    pub(super) rng: Pcg32,
    pub(super) phase: GamePhase,
    pub(super) roster: Roster,
    pub(super) prompts: PromptBank,
    pub(super) selector: SpinSelector,
    pub(super) timer: RoundTimer,
    /// Prompt drawn for the round being set up
    pub(super) pending_prompt: Option<String>,
    pub(super) round: Option<RoundContext>,
    pub(super) outcome: Option<RoundOutcome>,
}

impl Game {
    /// Create a new session in the menu
    pub fn new(roster: Roster, clock: Box<dyn Clock>, seed: u64, answer_secs: f32) -> Self {
        log::info!("New game (seed {}, {} players)", seed, roster.len());
        let selector = SpinSelector::new(roster.players());
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Menu,
            roster,
            prompts: PromptBank::new(),
            selector,
            timer: RoundTimer::new(clock, answer_secs),
            pending_prompt: None,
            round: None,
            outcome: None,
        }
    }

    /// Replace the built-in prompt bank
    pub fn with_prompts(mut self, prompts: PromptBank) -> Self {
        self.prompts = prompts;
        self
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn prompts(&self) -> &PromptBank {
        &self.prompts
    }

    pub fn selector(&self) -> &SpinSelector {
        &self.selector
    }

    pub fn timer(&self) -> &RoundTimer {
        &self.timer
    }

    pub fn round(&self) -> Option<&RoundContext> {
        self.round.as_ref()
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn can_start(&self) -> bool {
        self.roster.len() >= MIN_PLAYERS_TO_START
    }

    /// Prompt on screen: the round's once answering, otherwise the one just drawn
    pub fn current_prompt(&self) -> Option<&str> {
        self.round
            .as_ref()
            .map(|r| r.prompt.as_str())
            .or(self.pending_prompt.as_deref())
    }

    pub fn current_player(&self) -> Option<&str> {
        self.round.as_ref().map(|r| r.player.as_str())
    }

    pub fn snapshot(&self) -> Snapshot {
        let counting = self.phase == GamePhase::Answering;
        Snapshot {
            phase: self.phase,
            roster: self.roster.players().to_vec(),
            current_prompt: self.current_prompt().map(str::to_string),
            current_player: self.current_player().map(str::to_string),
            spin: self.selector.state(),
            remaining_secs: if counting { self.timer.remaining() } else { 0.0 },
            timer_fraction: if counting { self.timer.fraction_remaining() } else { 0.0 },
            time_running_low: counting && self.timer.is_running_low(),
            outcome: self.outcome,
            can_start: self.can_start(),
        }
    }

    pub(super) fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("Phase {:?} -> {:?}", self.phase, phase);
            self.phase = phase;
        }
    }

    /// Build a fresh selector over the current roster order
    pub(super) fn rebuild_selector(&mut self) {
        self.selector = SpinSelector::new(self.roster.players());
    }

    /// Drop everything scoped to a round, including the last spin's pick
    pub(super) fn clear_round(&mut self) {
        self.selector.reset();
        self.pending_prompt = None;
        self.round = None;
        self.outcome = None;
    }
}
