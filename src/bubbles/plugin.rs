//! Bubble plugin wiring the scheduler, presence roster, and config.
use bevy::prelude::*;
#[cfg(feature = "core_debug")]
use bevy::time::TimerMode;

use super::{config::BubbleConfig, presence::PresenceRoster, scheduler::BubbleScheduler};

#[cfg(feature = "core_debug")]
#[derive(Resource)]
struct MetricsLogTimer {
    timer: Timer,
}

#[cfg(feature = "core_debug")]
impl Default for MetricsLogTimer {
    fn default() -> Self {
        Self {
            timer: Timer::from_seconds(5.0, TimerMode::Repeating),
        }
    }
}

pub struct BubblePlugin;

impl Plugin for BubblePlugin {
    fn build(&self, app: &mut App) {
        let config = BubbleConfig::load_or_default();
        let scheduler = BubbleScheduler::new(config.display.duration_ms);
        info!(
            "BubblePlugin initialised: display window {}ms, pop {}ms",
            scheduler.duration_ms(),
            config.display.pop_ms
        );

        app.insert_resource(config)
            .insert_resource(scheduler)
            .init_resource::<PresenceRoster>();

        #[cfg(feature = "core_debug")]
        {
            app.insert_resource(MetricsLogTimer::default())
                .add_systems(Update, log_scheduler_metrics);
        }
    }
}

#[cfg(feature = "core_debug")]
fn log_scheduler_metrics(
    time: Res<Time>,
    mut timer: ResMut<MetricsLogTimer>,
    scheduler: Res<BubbleScheduler>,
) {
    if timer.timer.tick(time.delta()).just_finished() {
        let metrics = scheduler.metrics();
        info!(
            target: "core_debug",
            "Bubble traffic: enqueued={} dropped_absent={} promoted={} retired={} speakers={}",
            metrics.enqueued,
            metrics.dropped_absent,
            metrics.promoted,
            metrics.retired,
            scheduler.speaker_count(),
        );
    }
}
