//! Input events and sources

use serde::{Deserialize, Serialize};

use crate::sim::{GamePhase, GameSession, TickInput};

/// Keys the game distinguishes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    Space,
    Other,
}

/// A raw input event from the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    PointerDown,
    PointerUp,
    KeyDown(Key),
    KeyUp(Key),
}

impl InputEvent {
    /// Pointer press or the designated key
    pub fn is_activation(&self) -> bool {
        matches!(self, InputEvent::PointerDown | InputEvent::KeyDown(Key::Space))
    }
}

impl TickInput {
    /// Collapse a frame's events into one tick's commands
    pub fn from_events(events: &[InputEvent]) -> Self {
        Self {
            activate: events.iter().any(InputEvent::is_activation),
        }
    }
}

/// Delivers input events to the driver once per frame
pub trait InputSource {
    /// Events that happened up to `now` seconds since the driver started
    fn poll(&mut self, now: f64, session: &GameSession) -> Vec<InputEvent>;
}

/// Replays a fixed schedule of timed events
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    /// (time in seconds, event), sorted by time
    schedule: Vec<(f64, InputEvent)>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(mut schedule: Vec<(f64, InputEvent)>) -> Self {
        schedule.sort_by(|a, b| a.0.total_cmp(&b.0));
        Self {
            schedule,
            cursor: 0,
        }
    }

    /// Pointer presses at each of the given times
    pub fn presses(times: &[f64]) -> Self {
        Self::new(times.iter().map(|&t| (t, InputEvent::PointerDown)).collect())
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.schedule.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, now: f64, _session: &GameSession) -> Vec<InputEvent> {
        let due = self.schedule[self.cursor..]
            .iter()
            .take_while(|(t, _)| *t <= now)
            .map(|&(_, e)| e)
            .collect::<Vec<_>>();
        self.cursor += due.len();
        due
    }
}

/// Presses at a fixed period, starting immediately
#[derive(Debug, Clone)]
pub struct AutoFlapper {
    period: f64,
    next: f64,
}

impl AutoFlapper {
    pub fn new(period_secs: f64) -> Self {
        Self {
            period: period_secs,
            next: 0.0,
        }
    }
}

impl InputSource for AutoFlapper {
    fn poll(&mut self, now: f64, _session: &GameSession) -> Vec<InputEvent> {
        if self.period <= 0.0 || now < self.next {
            return Vec::new();
        }
        // One press per frame, however long the frame was
        while self.next <= now {
            self.next += self.period;
        }
        vec![InputEvent::KeyDown(Key::Space)]
    }
}

/// Simple bot: flaps when falling below the next gap's center
#[derive(Debug, Clone)]
pub struct Autopilot {
    /// How far below the gap center to let the player sink before flapping
    pub slack: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self { slack: 20.0 }
    }
}

impl InputSource for Autopilot {
    fn poll(&mut self, _now: f64, session: &GameSession) -> Vec<InputEvent> {
        match session.phase {
            GamePhase::Title => vec![InputEvent::KeyDown(Key::Space)],
            GamePhase::GameOver => Vec::new(),
            GamePhase::Playing => {
                let Some(player) = session.player.as_ref() else {
                    return Vec::new();
                };
                let player_left = player.bounds().left();
                let target = session
                    .pairs
                    .iter()
                    .find(|p| p.right_edge() > player_left)
                    .map(|p| p.gap_center)
                    .unwrap_or(session.tuning.playfield_height / 2.0);

                if player.pos.y > target + self.slack && player.vel_y > 0.0 {
                    vec![InputEvent::KeyDown(Key::Space)]
                } else {
                    Vec::new()
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;

    #[test]
    fn test_activation_events() {
        assert!(InputEvent::PointerDown.is_activation());
        assert!(InputEvent::KeyDown(Key::Space).is_activation());
        assert!(!InputEvent::KeyDown(Key::Other).is_activation());
        assert!(!InputEvent::KeyUp(Key::Space).is_activation());
        assert!(!InputEvent::PointerUp.is_activation());
    }

    #[test]
    fn test_tick_input_from_events() {
        assert!(!TickInput::from_events(&[]).activate);
        assert!(!TickInput::from_events(&[InputEvent::KeyDown(Key::Other)]).activate);
        assert!(
            TickInput::from_events(&[InputEvent::PointerUp, InputEvent::PointerDown]).activate
        );
    }

    #[test]
    fn test_scripted_input_releases_in_order() {
        let session = GameSession::new(Tuning::default());
        let mut input = ScriptedInput::presses(&[0.5, 0.1, 1.0]);
        assert_eq!(input.poll(0.0, &session), vec![]);
        assert_eq!(input.poll(0.6, &session).len(), 2);
        assert_eq!(input.poll(0.9, &session), vec![]);
        assert_eq!(input.poll(2.0, &session).len(), 1);
        assert!(input.is_exhausted());
    }

    #[test]
    fn test_auto_flapper_period() {
        let session = GameSession::new(Tuning::default());
        let mut input = AutoFlapper::new(0.5);
        assert_eq!(input.poll(0.0, &session).len(), 1);
        assert!(input.poll(0.2, &session).is_empty());
        assert_eq!(input.poll(0.5, &session).len(), 1);
        // A long stall yields a single press
        assert_eq!(input.poll(3.0, &session).len(), 1);
        assert!(input.poll(3.2, &session).is_empty());
    }

    #[test]
    fn test_autopilot_starts_and_flaps() {
        let mut session = GameSession::new(Tuning::default());
        let mut pilot = Autopilot::default();
        assert_eq!(pilot.poll(0.0, &session).len(), 1);

        session.start();
        let player = session.player.as_mut().unwrap();
        player.pos.y = 400.0;
        player.vel_y = 50.0;
        assert_eq!(pilot.poll(0.0, &session).len(), 1);

        session.player.as_mut().unwrap().vel_y = -50.0;
        assert!(pilot.poll(0.0, &session).is_empty());
    }
}
