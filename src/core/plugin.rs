//! CorePlugin wires the shared chat clock used for bubble timing.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;
use std::time::Duration;

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct DebugTickTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for DebugTickTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(1.0, TimerMode::Repeating),
        }
    }
}

/// Millisecond clock accumulated from real frame deltas.
///
/// Promotion stamps and expiry comparisons both read this clock, so the
/// scheduler never mixes time sources.
#[derive(Resource, Debug, Default)]
pub struct ChatClock {
    elapsed: Duration,
    last_delta: Duration,
}

impl ChatClock {
    /// Current clock reading in whole milliseconds.
    pub fn now_ms(&self) -> u64 {
        self.elapsed.as_millis() as u64
    }

    /// Last real delta reported by Bevy's Time resource.
    #[cfg_attr(not(feature = "core_debug"), allow(dead_code))]
    pub fn last_delta(&self) -> Duration {
        self.last_delta
    }

    /// Applies a real frame delta to the clock.
    pub fn tick(&mut self, delta: Duration) {
        self.last_delta = delta;
        self.elapsed += delta;
    }
}

/// Registers the chat clock and its per-frame advance.
pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ChatClock>()
            .add_systems(Update, advance_chat_clock);

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(DebugTickTimer::default())
                .add_systems(Update, log_clock_ticks);
        }
    }
}

fn advance_chat_clock(mut clock: ResMut<ChatClock>, time: Res<Time>) {
    clock.tick(time.delta());
}

#[cfg(feature = "core_debug")]
fn log_clock_ticks(mut timer: ResMut<DebugTickTimer>, clock: Res<ChatClock>) {
    if timer.timer.tick(clock.last_delta()).just_finished() {
        info!(
            target: "core_debug",
            "Chat clock: {}ms | dt: {:.4}s",
            clock.now_ms(),
            clock.last_delta().as_secs_f32(),
        );
    }
}
