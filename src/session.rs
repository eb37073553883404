//! Round control for the host loop
//!
//! The host polls input once per frame into a [`FrameInput`] and hands it to
//! [`Session::frame`] together with the elapsed time. The session owns the
//! Idle/Active phase and resets the round state when the ship is hit.

use rand_pcg::Pcg32;

use crate::sim::{GameState, RandomSource, TickInput, tick};
use crate::tuning::Tuning;

/// Held gameplay controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    RotateLeft,
    RotateRight,
    Thrust,
    Fire,
}

/// Whatever delivers keyboard/controller state to the host
pub trait InputSource {
    fn is_held(&self, action: Action) -> bool;
    fn start_pressed(&self) -> bool;
    fn quit_pressed(&self) -> bool;
}

/// One frame's worth of polled input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub start: bool,
    pub quit: bool,
    pub controls: TickInput,
}

impl FrameInput {
    /// Poll every query exactly once
    pub fn poll(source: &impl InputSource) -> Self {
        Self {
            start: source.start_pressed(),
            quit: source.quit_pressed(),
            controls: TickInput {
                rotate_left: source.is_held(Action::RotateLeft),
                rotate_right: source.is_held(Action::RotateRight),
                thrust: source.is_held(Action::Thrust),
                fire: source.is_held(Action::Fire),
            },
        }
    }
}

/// Whether a round is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundPhase {
    /// Waiting for the start input
    #[default]
    Idle,
    /// Round in progress
    Active,
}

/// Result of one host frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    /// The ship was hit; the round has been reset and the session is Idle again
    RoundLost { score: u32 },
    Quit,
}

pub struct Session<R = Pcg32> {
    phase: RoundPhase,
    state: GameState<R>,
    rounds_played: u32,
    last_score: Option<u32>,
}

impl Session<Pcg32> {
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self::with_state(GameState::new(seed, tuning))
    }
}

impl<R: RandomSource> Session<R> {
    pub fn with_state(state: GameState<R>) -> Self {
        Self {
            phase: RoundPhase::Idle,
            state,
            rounds_played: 0,
            last_score: None,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Read-only round state for rendering
    pub fn state(&self) -> &GameState<R> {
        &self.state
    }

    /// Number of rounds that ended in a loss
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// Score of the most recently lost round
    pub fn last_score(&self) -> Option<u32> {
        self.last_score
    }

    /// Advance one host frame
    pub fn frame(&mut self, input: &FrameInput, dt: f32) -> FrameOutcome {
        if input.quit {
            return FrameOutcome::Quit;
        }

        if self.phase == RoundPhase::Idle {
            if !input.start {
                return FrameOutcome::Continue;
            }
            log::info!("Round {} started", self.rounds_played + 1);
            self.phase = RoundPhase::Active;
        }

        tick(&mut self.state, &input.controls, dt);

        if self.state.check_for_loss() {
            let score = self.state.score;
            self.rounds_played += 1;
            self.last_score = Some(score);
            log::info!("Round {} lost with score {}", self.rounds_played, score);
            self.state.reset();
            self.phase = RoundPhase::Idle;
            return FrameOutcome::RoundLost { score };
        }

        FrameOutcome::Continue
    }
}
