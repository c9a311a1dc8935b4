//! Text rasterizer for terminals and logs

use std::io::Write;

use super::frame::RenderFrame;
use super::sinks::RenderSink;
use crate::sim::{Aabb, GameEvent, GamePhase};

const OBSTACLE_CELL: char = '#';
const PLAYER_CELL: char = '@';
const EMPTY_CELL: char = ' ';

/// Draw the frame onto a `cols` x `rows` character grid
///
/// A cell is filled when its rectangle overlaps an entity. The player is
/// drawn over obstacles. Scoring zones are invisible.
pub fn rasterize(frame: &RenderFrame, cols: usize, rows: usize) -> String {
    let cols = cols.max(1);
    let rows = rows.max(1);
    let cell_w = frame.playfield.x / cols as f32;
    let cell_h = frame.playfield.y / rows as f32;

    let mut out = String::with_capacity((cols + 3) * (rows + 3));
    out.push_str(&format!("score {} [{:?}]\n", frame.score, frame.phase));
    out.push('+');
    out.push_str(&"-".repeat(cols));
    out.push_str("+\n");

    for row in 0..rows {
        out.push('|');
        for col in 0..cols {
            let cell = Aabb::new(col as f32 * cell_w, row as f32 * cell_h, cell_w, cell_h);
            let on_player = frame
                .player
                .as_ref()
                .is_some_and(|p| p.bounds.overlaps(&cell));
            let on_obstacle = frame.obstacles.iter().any(|o| o.bounds.overlaps(&cell));
            out.push(if on_player {
                PLAYER_CELL
            } else if on_obstacle {
                OBSTACLE_CELL
            } else {
                EMPTY_CELL
            });
        }
        out.push_str("|\n");
    }

    out.push('+');
    out.push_str(&"-".repeat(cols));
    out.push_str("+\n");
    out
}

/// Prints a rasterized frame every `every` ticks and on game over
#[derive(Debug)]
pub struct AsciiSink<W: Write> {
    out: W,
    cols: usize,
    rows: usize,
    every: u64,
    failed: bool,
}

impl<W: Write> AsciiSink<W> {
    pub fn new(out: W, cols: usize, rows: usize, every: u64) -> Self {
        Self {
            out,
            cols,
            rows,
            every: every.max(1),
            failed: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> RenderSink for AsciiSink<W> {
    fn present(&mut self, frame: &RenderFrame, events: &[GameEvent]) {
        if self.failed {
            return;
        }
        let lost = events.iter().any(|e| matches!(e, GameEvent::Lost { .. }));
        let due = frame.phase == GamePhase::Playing && frame.tick % self.every == 0;
        if !(lost || due) {
            return;
        }
        let text = rasterize(frame, self.cols, self.rows);
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            log::warn!("ASCII sink write failed, disabling: {}", e);
            self.failed = true;
        }
    }
}
