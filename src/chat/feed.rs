//! Scripted chat feed standing in for the host's chat stream.
use bevy::prelude::*;

/// Raw lines replayed on a loop. "Eve" has no avatar in the scene, so her
/// lines exercise the presence gate; the join line matches no pattern.
const SCRIPTED_LINES: [&str; 8] = [
    "<Alice> hey, anyone around?",
    "Bryn: over by the well!",
    "<Cedric> hold on, coming",
    "Eve: can anyone hear me?",
    "<Alice> we were just talking about the market",
    "Bryn: prices doubled again, it's madness",
    "Eve joined the game",
    "<Cedric> save your coin, trade with me instead",
];

const DEFAULT_LINE_INTERVAL_SECS: f32 = 2.5;

/// Replays the scripted lines at a fixed cadence.
#[derive(Resource, Debug)]
pub struct ChatFeed {
    timer: Timer,
    cursor: usize,
}

impl ChatFeed {
    pub fn new(interval_secs: f32) -> Self {
        Self {
            timer: Timer::from_seconds(interval_secs.max(0.1), TimerMode::Repeating),
            cursor: 0,
        }
    }

    /// Advances the feed and returns the lines due this frame.
    pub fn tick(&mut self, delta: std::time::Duration) -> Vec<&'static str> {
        self.timer.tick(delta);
        let due = self.timer.times_finished_this_tick() as usize;

        let mut lines = Vec::with_capacity(due);
        for _ in 0..due {
            lines.push(SCRIPTED_LINES[self.cursor % SCRIPTED_LINES.len()]);
            self.cursor += 1;
        }
        lines
    }
}

impl Default for ChatFeed {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_INTERVAL_SECS)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn feed_emits_in_script_order_and_wraps() {
        let mut feed = ChatFeed::new(1.0);

        assert!(feed.tick(Duration::from_millis(500)).is_empty());

        let first = feed.tick(Duration::from_millis(500));
        assert_eq!(first, vec![SCRIPTED_LINES[0]]);

        for expected in SCRIPTED_LINES.iter().skip(1) {
            assert_eq!(feed.tick(Duration::from_secs(1)), vec![*expected]);
        }

        // Wrapped back to the start.
        assert_eq!(feed.tick(Duration::from_secs(1)), vec![SCRIPTED_LINES[0]]);
    }

    #[test]
    fn long_frame_emits_multiple_lines() {
        let mut feed = ChatFeed::new(1.0);
        let lines = feed.tick(Duration::from_secs(3));
        assert_eq!(lines, vec![SCRIPTED_LINES[0], SCRIPTED_LINES[1], SCRIPTED_LINES[2]]);
    }
}
