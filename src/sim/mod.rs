//! Game simulation module
//!
//! All game logic lives here. This module must stay free of drawing and
//! input handling:
//! - Seeded RNG only
//! - Time comes from an injected clock
//! - The view reads snapshots and sends commands, nothing else

pub mod spin;
pub mod state;
pub mod tick;
pub mod timer;

pub use spin::{SpinSelector, SpinState, selection_index};
pub use state::{Game, GamePhase, RoundContext, RoundOutcome, Snapshot};
pub use tick::{Command, TickInput, apply, tick};
pub use timer::{Clock, ManualClock, RoundTimer, SystemClock};
