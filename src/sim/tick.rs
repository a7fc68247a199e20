//! Command handling and per-frame tick
//!
//! Commands whose precondition does not hold are ignored: they return
//! false and leave the game untouched.

use super::state::{Game, GamePhase, RoundContext, RoundOutcome, Snapshot};

/// Discrete commands from the input layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Add a player (Menu/Registration only)
    RegisterPlayer(String),
    /// Remove a player (Menu/Registration only)
    RemovePlayer(String),
    /// Go from the menu to the registration screen
    OpenRegistration,
    StartGame,
    /// Spin from PromptSelection, or confirm the selected player once stopped
    Advance,
    /// Spin from PromptSelection
    Spin,
    SubmitAnswer,
    NextRound,
    ReturnToMenu,
    /// Add a prompt to the bank (Menu/Registration only)
    AddPrompt(String),
    /// Remove a prompt from the bank (Menu/Registration only)
    RemovePrompt(String),
}

/// Input collected since the last tick, applied in order
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub commands: Vec<Command>,
}

impl TickInput {
    pub fn single(command: Command) -> Self {
        Self {
            commands: vec![command],
        }
    }
}

/// Apply one command. Returns false if it was rejected.
pub fn apply(game: &mut Game, command: Command) -> bool {
    let phase = game.phase;
    let accepted = match command {
        Command::RegisterPlayer(name) => editing_roster(phase) && register_player(game, &name),
        Command::RemovePlayer(name) => editing_roster(phase) && remove_player(game, &name),
        Command::OpenRegistration => {
            if phase == GamePhase::Menu {
                game.set_phase(GamePhase::Registration);
                true
            } else {
                false
            }
        }
        Command::StartGame => start_game(game),
        Command::Advance => match phase {
            GamePhase::PromptSelection => start_spin(game),
            GamePhase::Spinning => begin_answer(game),
            _ => false,
        },
        Command::Spin => phase == GamePhase::PromptSelection && start_spin(game),
        Command::SubmitAnswer => submit_answer(game),
        Command::NextRound => phase == GamePhase::Result && enter_prompt_selection(game),
        Command::ReturnToMenu => {
            return_to_menu(game);
            true
        }
        Command::AddPrompt(prompt) => editing_roster(phase) && game.prompts.add(&prompt),
        Command::RemovePrompt(prompt) => editing_roster(phase) && game.prompts.remove(&prompt),
    };
    if !accepted {
        log::debug!("Ignored command in {:?}", phase);
    }
    accepted
}

/// Run one frame: apply queued commands, advance the spin, check the
/// countdown and return the resulting snapshot.
pub fn tick(game: &mut Game, input: &TickInput) -> Snapshot {
    for command in &input.commands {
        apply(game, command.clone());
    }

    match game.phase {
        GamePhase::Spinning => {
            game.selector.tick();
        }
        GamePhase::Answering => {
            if game.timer.is_expired() {
                log::info!("Time up");
                finish_round(game, RoundOutcome::TimedOut);
            }
        }
        _ => {}
    }

    game.snapshot()
}

fn editing_roster(phase: GamePhase) -> bool {
    matches!(phase, GamePhase::Menu | GamePhase::Registration)
}

fn register_player(game: &mut Game, name: &str) -> bool {
    if !game.roster.add(name) {
        return false;
    }
    log::info!("Registered {}", name);
    game.rebuild_selector();
    true
}

fn remove_player(game: &mut Game, name: &str) -> bool {
    if !game.roster.remove(name) {
        return false;
    }
    log::info!("Removed {}", name);
    game.rebuild_selector();
    true
}

fn start_game(game: &mut Game) -> bool {
    match game.phase {
        GamePhase::Menu | GamePhase::Registration if game.can_start() => {
            enter_prompt_selection(game)
        }
        GamePhase::Menu => {
            game.set_phase(GamePhase::Registration);
            true
        }
        _ => false,
    }
}

fn enter_prompt_selection(game: &mut Game) -> bool {
    let Some(prompt) = game.prompts.draw(&mut game.rng) else {
        log::warn!("Prompt bank is empty");
        return false;
    };
    game.clear_round();
    game.pending_prompt = Some(prompt);
    game.set_phase(GamePhase::PromptSelection);
    true
}

fn start_spin(game: &mut Game) -> bool {
    if !game.selector.start_spin(&mut game.rng) {
        return false;
    }
    game.set_phase(GamePhase::Spinning);
    true
}

fn begin_answer(game: &mut Game) -> bool {
    if game.selector.is_spinning() {
        return false;
    }
    let Some(player) = game.selector.selected_player().map(str::to_string) else {
        return false;
    };
    let Some(prompt) = game.pending_prompt.take() else {
        return false;
    };
    game.round = Some(RoundContext { player, prompt });
    game.timer.start();
    game.set_phase(GamePhase::Answering);
    true
}

fn submit_answer(game: &mut Game) -> bool {
    if game.phase != GamePhase::Answering {
        return false;
    }
    // An answer that arrives after the countdown ran out still loses
    let outcome = if game.timer.is_expired() {
        RoundOutcome::TimedOut
    } else {
        RoundOutcome::Answered
    };
    finish_round(game, outcome);
    true
}

fn finish_round(game: &mut Game, outcome: RoundOutcome) {
    game.outcome = Some(outcome);
    game.set_phase(GamePhase::Result);
}

fn return_to_menu(game: &mut Game) {
    game.clear_round();
    game.set_phase(GamePhase::Menu);
}
