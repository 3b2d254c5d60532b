//! Per-speaker bubble queues and display-timing logic.
use std::collections::{HashMap, VecDeque};

use bevy::prelude::*;

use super::presence::PresenceSource;

/// Default display window for a promoted bubble, in milliseconds.
pub const DEFAULT_DISPLAY_DURATION_MS: u64 = 5000;

/// One chat message tracked from arrival to retirement.
///
/// An entry is pending until the scheduler promotes it, at which point
/// `displayed_at` is stamped exactly once and never changes afterwards.
#[derive(Debug, Clone)]
pub struct BubbleEntry {
    body: String,
    displayed_at: Option<u64>,
}

impl BubbleEntry {
    fn new(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            displayed_at: None,
        }
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn displayed_at(&self) -> Option<u64> {
        self.displayed_at
    }
}

/// Read-only view of the bubble currently visible for a speaker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveBubble<'a> {
    pub body: &'a str,
    /// Clock reading at which this entry was promoted, in milliseconds.
    pub displayed_at: u64,
}

/// Counters describing scheduler traffic since startup.
#[derive(Debug, Default, Clone)]
pub struct BubbleSchedulerMetrics {
    pub enqueued: u64,
    pub dropped_absent: u64,
    pub promoted: u64,
    pub retired: u64,
}

/// FIFO bubble queues keyed by speaker display name.
///
/// The scheduler owns all entries outright and advances their state only
/// when polled: `query` retires expired heads and promotes pending ones in
/// the same call. There are no background timers.
#[derive(Resource, Debug)]
pub struct BubbleScheduler {
    queues: HashMap<String, VecDeque<BubbleEntry>>,
    duration_ms: u64,
    metrics: BubbleSchedulerMetrics,
}

impl Default for BubbleScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_DISPLAY_DURATION_MS)
    }
}

impl BubbleScheduler {
    pub fn new(duration_ms: u64) -> Self {
        Self {
            queues: HashMap::new(),
            duration_ms: duration_ms.max(1),
            metrics: BubbleSchedulerMetrics::default(),
        }
    }

    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn metrics(&self) -> &BubbleSchedulerMetrics {
        &self.metrics
    }

    /// Number of speakers with at least one queued entry.
    #[cfg_attr(not(any(test, feature = "core_debug")), allow(dead_code))]
    pub fn speaker_count(&self) -> usize {
        self.queues.len()
    }

    /// Queue length for a speaker (0 when no queue exists).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn queue_depth(&self, speaker: &str) -> usize {
        self.queues.get(speaker).map_or(0, VecDeque::len)
    }

    /// Queues a chat message for a speaker.
    ///
    /// Messages for speakers the presence source does not know are dropped
    /// outright: queueing chat for someone who is not in the scene would
    /// only produce a stale backlog the moment they reappear. Admitted
    /// entries are appended in arrival order and never reordered.
    pub fn enqueue(
        &mut self,
        speaker: &str,
        body: impl Into<String>,
        presence: &dyn PresenceSource,
    ) {
        if !presence.is_present(speaker) {
            self.metrics.dropped_absent += 1;
            debug!(
                target: "bubbles",
                "Dropping chat for absent speaker '{speaker}'"
            );
            return;
        }

        self.queues
            .entry(speaker.to_owned())
            .or_default()
            .push_back(BubbleEntry::new(body));
        self.metrics.enqueued += 1;
    }

    /// Returns the bubble that should be visible for `speaker` at `now_ms`.
    ///
    /// Expired heads are retired within this call, so a long gap between
    /// polls never leaves a dead entry blocking its successor. A pending
    /// head reached by this call is promoted (stamped with `now_ms`) and
    /// returned immediately. Draining a queue to empty evicts the speaker
    /// key so the outer map only holds speakers with live traffic.
    pub fn query(&mut self, speaker: &str, now_ms: u64) -> Option<ActiveBubble<'_>> {
        let queue = self.queues.get_mut(speaker)?;

        // Retire the head for as long as it has outlived its window. Only
        // the head can ever be displayed, so pending entries behind it are
        // untouched.
        while queue
            .front()
            .and_then(BubbleEntry::displayed_at)
            .is_some_and(|displayed_at| now_ms >= displayed_at + self.duration_ms)
        {
            queue.pop_front();
            self.metrics.retired += 1;
        }

        match queue.front_mut() {
            Some(entry) => {
                if entry.displayed_at.is_none() {
                    entry.displayed_at = Some(now_ms);
                    self.metrics.promoted += 1;
                }
            }
            None => {
                self.queues.remove(speaker);
                return None;
            }
        }

        let entry = self.queues.get(speaker).and_then(VecDeque::front)?;
        entry.displayed_at().map(|displayed_at| ActiveBubble {
            body: entry.body(),
            displayed_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bubbles::presence::PresenceSource;

    struct Everyone;

    impl PresenceSource for Everyone {
        fn is_present(&self, _speaker: &str) -> bool {
            true
        }
    }

    struct Nobody;

    impl PresenceSource for Nobody {
        fn is_present(&self, _speaker: &str) -> bool {
            false
        }
    }

    fn make_scheduler() -> BubbleScheduler {
        BubbleScheduler::new(5000)
    }

    #[test]
    fn query_without_queue_returns_none_repeatedly() {
        let mut scheduler = make_scheduler();
        assert_eq!(scheduler.query("Alice", 0), None);
        assert_eq!(scheduler.query("Alice", 10_000), None);
    }

    #[test]
    fn absent_speaker_messages_are_dropped() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "hello", &Nobody);

        assert_eq!(scheduler.queue_depth("Alice"), 0);
        assert_eq!(scheduler.speaker_count(), 0);
        assert_eq!(scheduler.metrics().dropped_absent, 1);
        assert_eq!(scheduler.query("Alice", 0), None);
    }

    #[test]
    fn first_query_promotes_head_and_stamps_it() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "hi", &Everyone);

        let active = scheduler.query("Alice", 1234).expect("head should promote");
        assert_eq!(active.body, "hi");
        assert_eq!(active.displayed_at, 1234);
    }

    #[test]
    fn displayed_head_persists_until_window_elapses() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "hi", &Everyone);

        scheduler.query("Alice", 1000);

        // One tick before the boundary the entry is still visible with its
        // original stamp; at the boundary it is gone.
        let active = scheduler.query("Alice", 5999).expect("still inside window");
        assert_eq!(active.displayed_at, 1000);
        assert_eq!(scheduler.query("Alice", 6000), None);
        assert_eq!(scheduler.metrics().retired, 1);
    }

    #[test]
    fn entries_become_visible_in_arrival_order() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "first", &Everyone);
        scheduler.enqueue("Alice", "second", &Everyone);
        scheduler.enqueue("Alice", "third", &Everyone);

        let mut now = 0;
        let mut seen = Vec::new();
        while let Some(active) = scheduler.query("Alice", now) {
            seen.push(active.body.to_owned());
            now = active.displayed_at + 5000;
        }

        assert_eq!(seen, ["first", "second", "third"]);
    }

    #[test]
    fn expired_head_never_blocks_its_successor() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "old", &Everyone);
        scheduler.enqueue("Alice", "new", &Everyone);

        scheduler.query("Alice", 0);

        // A single call retires the expired head and promotes the next
        // entry, stamped with this call's clock.
        let active = scheduler.query("Alice", 20_000).expect("successor promotes");
        assert_eq!(active.body, "new");
        assert_eq!(active.displayed_at, 20_000);
    }

    #[test]
    fn at_most_one_entry_is_displayed_per_speaker() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "first", &Everyone);
        scheduler.enqueue("Alice", "second", &Everyone);

        scheduler.query("Alice", 100);
        scheduler.query("Alice", 200);

        let stamped = scheduler
            .queues
            .get("Alice")
            .map(|queue| {
                queue
                    .iter()
                    .filter(|entry| entry.displayed_at().is_some())
                    .count()
            })
            .unwrap_or(0);
        assert_eq!(stamped, 1);
        assert!(scheduler.queues["Alice"][0].displayed_at().is_some());
    }

    #[test]
    fn speaker_key_is_evicted_once_drained() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "hi", &Everyone);

        scheduler.query("Alice", 0);
        assert_eq!(scheduler.speaker_count(), 1);

        assert_eq!(scheduler.query("Alice", 5000), None);
        assert_eq!(scheduler.speaker_count(), 0);
        assert_eq!(scheduler.query("Alice", 5001), None);
    }

    #[test]
    fn speakers_queues_are_independent() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "from alice", &Everyone);
        scheduler.enqueue("Bryn", "from bryn", &Everyone);

        let alice = scheduler.query("Alice", 50).map(|a| a.body.to_owned());
        let bryn = scheduler.query("Bryn", 4000).map(|a| a.body.to_owned());

        assert_eq!(alice.as_deref(), Some("from alice"));
        assert_eq!(bryn.as_deref(), Some("from bryn"));

        // Alice expiring has no effect on Bryn's window.
        assert_eq!(scheduler.query("Alice", 6000), None);
        assert!(scheduler.query("Bryn", 6000).is_some());
    }

    #[test]
    fn reference_timeline_matches() {
        let mut scheduler = make_scheduler();

        scheduler.enqueue("Alice", "hi", &Everyone);

        let active = scheduler.query("Alice", 1000).expect("hi promotes");
        assert_eq!((active.body, active.displayed_at), ("hi", 1000));

        let active = scheduler.query("Alice", 3000).expect("hi still active");
        assert_eq!((active.body, active.displayed_at), ("hi", 1000));

        scheduler.enqueue("Alice", "second", &Everyone);
        assert_eq!(scheduler.queue_depth("Alice"), 2);

        let active = scheduler.query("Alice", 6000).expect("second promotes");
        assert_eq!((active.body, active.displayed_at), ("second", 6000));

        assert_eq!(scheduler.query("Alice", 11_000), None);
        assert_eq!(scheduler.metrics().retired, 2);
        assert_eq!(scheduler.metrics().promoted, 2);
    }

    #[test]
    fn empty_body_is_accepted_verbatim() {
        let mut scheduler = make_scheduler();
        scheduler.enqueue("Alice", "", &Everyone);

        let active = scheduler.query("Alice", 10).expect("empty body still queues");
        assert_eq!(active.body, "");
    }
}
