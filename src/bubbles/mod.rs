//! Bubble module hosting the display scheduler, presence gate, and config.
pub mod config;
pub mod plugin;
pub mod presence;
pub mod scheduler;

pub use plugin::BubblePlugin;

#[cfg(test)]
mod tests {
    use super::{
        config::BubbleConfig,
        presence::{PresenceRoster, PresenceSource},
        scheduler::BubbleScheduler,
    };

    #[test]
    fn reexports_are_usable() {
        let config = BubbleConfig::default();
        let mut scheduler = BubbleScheduler::new(config.display.duration_ms);

        let mut roster = PresenceRoster::default();
        roster.replace(["Alice".to_string()]);

        scheduler.enqueue("Alice", "hello there", &roster);
        scheduler.enqueue("Eve", "ignored", &roster);

        assert_eq!(scheduler.metrics().enqueued, 1);
        assert_eq!(scheduler.metrics().dropped_absent, 1);

        let active = scheduler.query("Alice", 10).expect("admitted entry shows");
        assert_eq!(active.body, "hello there");
        assert!(roster.is_present("Alice"));
    }
}
