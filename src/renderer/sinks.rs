//! Built-in render sinks

use std::io::Write;

use serde::Serialize;

use super::frame::RenderFrame;
use crate::sim::GameEvent;

/// Receives one snapshot per rendered frame (fire-and-forget)
pub trait RenderSink {
    fn present(&mut self, frame: &RenderFrame, events: &[GameEvent]);
}

/// Narrates events through the `log` facade
#[derive(Debug, Default)]
pub struct LogSink;

impl RenderSink for LogSink {
    fn present(&mut self, frame: &RenderFrame, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::Started => log::info!("Session started"),
                GameEvent::Flapped => log::trace!("Flap at tick {}", frame.tick),
                GameEvent::PairSpawned {
                    pair_id,
                    gap_center,
                } => log::debug!("Pair {} entered, gap at y={}", pair_id, gap_center),
                GameEvent::Scored { score, .. } => log::info!("Score: {}", score),
                GameEvent::Lost {
                    cause, final_score, ..
                } => log::info!("Lost ({:?}) with final score {}", cause, final_score),
            }
        }
    }
}

#[derive(Serialize)]
struct JsonLine<'a> {
    frame: &'a RenderFrame,
    events: &'a [GameEvent],
}

/// Writes each frame and its events as one JSON object per line
#[derive(Debug)]
pub struct JsonLinesSink<W: Write> {
    out: W,
    /// Only frames with events are written when set
    events_only: bool,
    failed: bool,
}

impl<W: Write> JsonLinesSink<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            events_only: false,
            failed: false,
        }
    }

    pub fn events_only(mut self, events_only: bool) -> Self {
        self.events_only = events_only;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for JsonLinesSink<W> {
    fn present(&mut self, frame: &RenderFrame, events: &[GameEvent]) {
        if self.failed || (self.events_only && events.is_empty()) {
            return;
        }
        let line = JsonLine { frame, events };
        let result = serde_json::to_writer(&mut self.out, &line)
            .map_err(std::io::Error::from)
            .and_then(|()| self.out.write_all(b"\n"));
        if let Err(e) = result {
            // Rendering never stops the game; report once and go quiet
            log::warn!("JSON sink write failed, disabling: {}", e);
            self.failed = true;
        }
    }
}
