//! Session lifecycle: Title -> Playing -> GameOver
//!
//! Transitions are the only place the player is created or removed, the
//! spawner is started or stopped, and the ledger is reset or closed.

use glam::Vec2;

use super::state::{GameEvent, GamePhase, GameSession, LossCause, Player};

/// What an activation press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Started,
    Flapped,
    /// Out-of-phase press, silently dropped
    Ignored,
}

impl GameSession {
    /// Route one activation press according to the current phase
    pub fn activate(&mut self) -> Activation {
        match self.phase {
            GamePhase::Title => {
                self.start();
                Activation::Started
            }
            GamePhase::Playing if self.player.is_some() => {
                self.flap();
                Activation::Flapped
            }
            GamePhase::Playing | GamePhase::GameOver => {
                log::trace!("Ignoring activation in {:?}", self.phase);
                Activation::Ignored
            }
        }
    }

    /// Title -> Playing
    ///
    /// Creates the player at the start position, clears obstacles, resets the
    /// score and starts the spawner. No-op outside Title.
    pub fn start(&mut self) {
        if self.phase != GamePhase::Title {
            return;
        }
        self.player = Some(Player::new(
            self.tuning.player_start,
            self.tuning.player_size,
        ));
        self.pairs.clear();
        self.ledger.reset();
        self.pairs_spawned = 0;
        self.zones_latched = 0;
        self.time_ticks = 0;
        self.elapsed = 0.0;
        self.spawner.start();
        self.phase = GamePhase::Playing;
        self.emit(GameEvent::Started);
        log::info!("Game started");
    }

    /// Set the player's vertical velocity to the flap impulse
    pub fn flap(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let impulse = self.tuning.flap_impulse;
        if let Some(player) = self.player.as_mut() {
            player.flap(impulse);
            self.emit(GameEvent::Flapped);
        }
    }

    /// Playing -> GameOver
    ///
    /// Removes the player, stops the spawner and clears every pair. Calling
    /// this again, or outside Playing, does nothing.
    pub fn end(&mut self, cause: LossCause) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let at = self.player.take().map(|p| p.pos).unwrap_or(Vec2::ZERO);
        self.spawner.stop();
        self.pairs.clear();
        let final_score = self.ledger.close();
        self.phase = GamePhase::GameOver;
        self.emit(GameEvent::Lost {
            cause,
            at,
            final_score,
        });
        log::info!("Game over ({:?}), final score {}", cause, final_score);
    }
}
