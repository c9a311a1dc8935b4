//! Frame driver
//!
//! Owns one session together with its collaborators: a fixed-step clock, an
//! input source, a random source and a render sink. The platform calls
//! [`Game::frame`] once per rendered frame.

use crate::consts::MAX_FRAME_DT;
use crate::platform::InputSource;
use crate::renderer::{RenderFrame, RenderSink};
use crate::sim::{FixedTimestep, GameSession, RandomSource, TickInput, tick};
use crate::tuning::Tuning;

/// Game instance holding the session and its collaborators
pub struct Game<R: RandomSource> {
    session: GameSession,
    clock: FixedTimestep,
    rng: R,
    /// Detached once the session is over
    input: Option<Box<dyn InputSource>>,
    /// Commands waiting for the next simulation step
    pending: TickInput,
    sink: Box<dyn RenderSink>,
    /// Seconds of frame time fed so far
    now: f64,
    frames: u64,
}

impl<R: RandomSource> Game<R> {
    pub fn new(
        tuning: Tuning,
        rng: R,
        input: Box<dyn InputSource>,
        sink: Box<dyn RenderSink>,
    ) -> Self {
        let clock = FixedTimestep::new(tuning.sim_dt, tuning.max_substeps, MAX_FRAME_DT);
        Self {
            session: GameSession::new(tuning),
            clock,
            rng,
            input: Some(input),
            pending: TickInput::default(),
            sink,
            now: 0.0,
            frames: 0,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn is_over(&self) -> bool {
        self.session.is_over()
    }

    /// Whether an input source is still attached
    pub fn is_listening(&self) -> bool {
        self.input.is_some()
    }

    /// Seconds of frame time processed
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Run the simulation steps owed for one rendered frame, then present
    pub fn frame(&mut self, frame_dt: f32) {
        self.now += f64::from(frame_dt.max(0.0));
        self.frames += 1;

        let events = match self.input.as_mut() {
            Some(input) => input.poll(self.now, &self.session),
            None => Vec::new(),
        };
        // A press waits for the next step, even across a frame with none
        if TickInput::from_events(&events).activate {
            self.pending.activate = true;
        }

        let steps = self.clock.advance(frame_dt);
        let dt = self.clock.step();
        for _ in 0..steps {
            let input = std::mem::take(&mut self.pending);
            tick(&mut self.session, &input, dt, &mut self.rng);
            if self.session.is_over() {
                break;
            }
        }

        if self.session.is_over() && self.input.take().is_some() {
            log::debug!("Input detached after game over");
        }

        let events = self.session.drain_events();
        let snapshot = RenderFrame::capture(&self.session);
        self.sink.present(&snapshot, &events);
    }

    /// Drive frames of `frame_dt` until game over or `max_secs` elapse
    ///
    /// Returns the score at the point the run stopped.
    pub fn run_for(&mut self, frame_dt: f32, max_secs: f64) -> u32 {
        while !self.is_over() && self.now < max_secs {
            self.frame(frame_dt);
        }
        log::info!(
            "Stopped after {:.2}s ({} frames), score {}",
            self.now,
            self.frames,
            self.session.score()
        );
        self.session.score()
    }
}
