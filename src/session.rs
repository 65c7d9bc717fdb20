//! Exercise session state machine.
//!
//! One session plays a practice tier or the exam as an explicit
//! Visual → Audio → Answer → Results cycle. The presentation collaborator
//! renders each phase, runs its own timers and audio pacing, and reports back
//! with phase-complete events; the core only turns configurations into rounds
//! and answers into results.

use crate::difficulty::{exam_stage, resolve, ConfigError, Difficulty, RoundConfig};
use crate::exam::{self, ExamProgress};
use crate::round::{generate, InsufficientCities, RoundData};
use crate::scoring::{score, RoundResult};
use rand::Rng;
use thiserror::Error;

/// Phases of one round, in play order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Restricted corridors are highlighted on the board.
    Visual,
    /// Announcements play in sequence order.
    Audio,
    /// The player selects cities.
    Answer,
    /// Per-city feedback is on screen.
    Results,
}

/// What kind of session is being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Practice(Difficulty),
    Exam,
}

/// Transition triggers supplied by the presentation collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    VisualComplete,
    AudioComplete,
    AnswersSubmitted(Vec<String>),
    ResultsAcknowledged,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Generation(#[from] InsufficientCities),
}

/// One play-through of a practice tier or the exam.
#[derive(Debug, Clone)]
pub struct Session {
    mode: SessionMode,
    /// 1-based round number within the session.
    round: u32,
    phase: Phase,
    round_data: RoundData,
    last_result: Option<RoundResult>,
    exam: Option<ExamProgress>,
    complete: bool,
}

impl Session {
    /// Start a session and generate its first round.
    pub fn start(mode: SessionMode, rng: &mut impl Rng) -> Result<Self, SessionError> {
        let config = round_config(mode, 1)?;
        let round_data = generate(&config, rng)?;
        Ok(Session {
            mode,
            round: 1,
            phase: Phase::Visual,
            round_data,
            last_result: None,
            exam: match mode {
                SessionMode::Exam => Some(ExamProgress::new()),
                SessionMode::Practice(_) => None,
            },
            complete: false,
        })
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// The round currently being played (or just played, in Results phase).
    pub fn round_data(&self) -> &RoundData {
        &self.round_data
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn exam_progress(&self) -> Option<&ExamProgress> {
        self.exam.as_ref()
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Feed one presentation event into the machine. Returns `true` when the
    /// event matched the current phase and was applied; out-of-phase or
    /// post-completion events are ignored.
    pub fn handle_event(
        &mut self,
        event: SessionEvent,
        rng: &mut impl Rng,
    ) -> Result<bool, SessionError> {
        if self.complete {
            return Ok(false);
        }
        match (self.phase, event) {
            (Phase::Visual, SessionEvent::VisualComplete) => {
                self.phase = Phase::Audio;
                Ok(true)
            }
            (Phase::Audio, SessionEvent::AudioComplete) => {
                self.phase = Phase::Answer;
                Ok(true)
            }
            (Phase::Answer, SessionEvent::AnswersSubmitted(answers)) => {
                let result = score(
                    &self.round_data.mapping,
                    &self.round_data.target_cities,
                    &self.round_data.restricted_corridors,
                    &answers,
                );
                if let Some(progress) = self.exam.as_mut() {
                    exam::record_round(progress, &result);
                }
                self.last_result = Some(result);
                self.phase = Phase::Results;
                Ok(true)
            }
            (Phase::Results, SessionEvent::ResultsAcknowledged) => {
                self.advance(rng)?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Move on from the Results phase: either the next round or completion.
    fn advance(&mut self, rng: &mut impl Rng) -> Result<(), SessionError> {
        let finished = match self.mode {
            SessionMode::Practice(difficulty) => self.round >= difficulty.max_rounds(),
            SessionMode::Exam => self.exam.as_ref().is_some_and(|p| p.is_complete()),
        };
        if finished {
            self.complete = true;
            return Ok(());
        }

        self.round += 1;
        let config = round_config(self.mode, self.round)?;
        self.round_data = generate(&config, rng)?;
        self.phase = Phase::Visual;
        Ok(())
    }
}

fn round_config(mode: SessionMode, round: u32) -> Result<RoundConfig, ConfigError> {
    match mode {
        SessionMode::Practice(difficulty) => resolve(difficulty, round),
        SessionMode::Exam => Ok(exam_stage(round as usize - 1)?.config),
    }
}
