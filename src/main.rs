//! Jimokwang entry point
//!
//! Minimal line-driven frontend: each line becomes a command, the game is
//! ticked at the configured rate while the wheel spins, and the snapshot is
//! printed after every step.

use std::io::{self, BufRead, Write};

use jimokwang::{Settings, normalize_degrees};
use jimokwang::persistence::JsonFileStore;
use jimokwang::roster::Roster;
use jimokwang::sim::{Command, Game, GamePhase, RoundOutcome, Snapshot, SystemClock, TickInput, tick};

const HELP: &str = "\
commands:
  register           open player registration
  add <name>         register a player
  remove <name>      remove a player
  start              start the game
  next               spin / confirm the selected player
  answer             answer submitted
  round              next round
  prompt+ <text>     add a prompt
  prompt- <text>     remove a prompt
  menu               back to the menu
  state              print the snapshot as JSON
  quit               leave (from the menu)

The countdown only refreshes when a line is entered: press Enter while
answering to see the time left (and whether it ran out).";

/// What a typed line asks for
enum Line {
    Command(Command),
    Refresh,
    State,
    Help,
    Quit,
    Unknown,
}

fn parse_line(line: &str) -> Line {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim().to_string()),
        None => (line, String::new()),
    };
    match word {
        "" => Line::Refresh,
        "register" => Line::Command(Command::OpenRegistration),
        "add" => Line::Command(Command::RegisterPlayer(rest)),
        "remove" => Line::Command(Command::RemovePlayer(rest)),
        "start" => Line::Command(Command::StartGame),
        "next" => Line::Command(Command::Advance),
        "spin" => Line::Command(Command::Spin),
        "answer" => Line::Command(Command::SubmitAnswer),
        "round" => Line::Command(Command::NextRound),
        "menu" => Line::Command(Command::ReturnToMenu),
        "prompt+" => Line::Command(Command::AddPrompt(rest)),
        "prompt-" => Line::Command(Command::RemovePrompt(rest)),
        "state" => Line::State,
        "help" => Line::Help,
        "quit" => Line::Quit,
        _ => Line::Unknown,
    }
}

fn render(snapshot: &Snapshot) {
    match snapshot.phase {
        GamePhase::Menu => {
            println!("== JIMOKWANG ==");
            if snapshot.roster.is_empty() {
                println!("No players registered");
            } else {
                println!("Players: {}", snapshot.roster.join(", "));
            }
            if !snapshot.can_start {
                println!("(register at least two players to start)");
            }
        }
        GamePhase::Registration => {
            println!("== Player registration ==");
            println!("Players: {}", snapshot.roster.join(", "));
        }
        GamePhase::PromptSelection => {
            println!("== Random question ==");
            println!("{}", snapshot.current_prompt.as_deref().unwrap_or_default());
        }
        GamePhase::Spinning => {
            if let Some(player) = &snapshot.spin.selected_player {
                println!("The wheel picked: {}", player);
            }
        }
        GamePhase::Answering => {
            let player = snapshot.current_player.as_deref().unwrap_or_default();
            println!("{}, answer now!", player);
            println!("{}", snapshot.current_prompt.as_deref().unwrap_or_default());
            let bar = "#".repeat((snapshot.timer_fraction * 20.0).round() as usize);
            let warn = if snapshot.time_running_low { " !" } else { "" };
            println!("[{:<20}] {:.1}s{}", bar, snapshot.remaining_secs, warn);
        }
        GamePhase::Result => {
            let player = snapshot.current_player.as_deref().unwrap_or_default();
            match snapshot.outcome {
                Some(RoundOutcome::Answered) => println!("Well done, {}!", player),
                Some(RoundOutcome::TimedOut) => println!("Time's up! {}, take the penalty!", player),
                None => {}
            }
            println!("{}", snapshot.current_prompt.as_deref().unwrap_or_default());
        }
    }
}

fn main() {
    env_logger::init();

    let settings = Settings::load(&Settings::path_from_env());
    let seed = settings.seed.unwrap_or_else(rand::random);
    let roster = Roster::load(Box::new(JsonFileStore::new(&settings.roster_path)));
    let mut game = Game::new(roster, Box::new(SystemClock), seed, settings.answer_secs);
    let frame = settings.frame_duration();

    log::info!("Jimokwang starting (roster at {})", settings.roster_path.display());
    println!("{}", HELP);
    render(&game.snapshot());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                log::error!("Failed to read input: {}", e);
                break;
            }
            None => break,
        };

        let input = match parse_line(&line) {
            Line::Command(command) => TickInput::single(command),
            Line::Refresh => TickInput::default(),
            Line::State => {
                match serde_json::to_string_pretty(&game.snapshot()) {
                    Ok(json) => println!("{}", json),
                    Err(e) => log::warn!("Snapshot serialization failed: {}", e),
                }
                continue;
            }
            Line::Help => {
                println!("{}", HELP);
                continue;
            }
            // Quit leaves from the menu, anywhere else it backs out to the menu
            Line::Quit if game.phase() == GamePhase::Menu => break,
            Line::Quit => TickInput::single(Command::ReturnToMenu),
            Line::Unknown => {
                println!("unknown command, try 'help'");
                continue;
            }
        };

        let mut snapshot = tick(&mut game, &input);
        let mut frames = 0u32;
        while snapshot.spin.spinning {
            std::thread::sleep(frame);
            snapshot = tick(&mut game, &TickInput::default());
            frames += 1;
            if frames % 20 == 0 {
                print!("\rspinning... {:>6.1}°", normalize_degrees(snapshot.spin.angle));
                let _ = io::stdout().flush();
            }
        }
        if frames > 0 {
            println!();
        }
        render(&snapshot);
    }

    log::info!("Bye");
}
