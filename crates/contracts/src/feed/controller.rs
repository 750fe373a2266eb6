use std::time::Duration;

use thiserror::Error;

use super::buffer::{FeedBuffer, FeedOrder};
use super::criteria::{apply, Criteria};
use super::source::RecordSource;

/// Construction-time configuration of one feed instance.
#[derive(Debug, Clone, Copy)]
pub struct FeedConfig {
    /// Maximum number of records kept; the oldest are evicted beyond this.
    pub capacity: usize,
    /// Fixed tick interval; never a per-tick decision.
    pub interval: Duration,
    pub order: FeedOrder,
    /// Whether the feed starts in the running state.
    pub autostart: bool,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FeedConfigError {
    #[error("tick interval must be greater than zero")]
    ZeroInterval,
}

/// One live feed: bounded buffer + filter criteria + run state.
///
/// Ticks are pull-driven: the owning scheduler calls [`Feed::tick`] once per
/// interval, and the feed decides whether to consult the generator. While
/// paused the generator is never invoked, so a pause issued between ticks is
/// honored before the next append. Pause and resume are idempotent and never
/// touch the buffer or the criteria.
#[derive(Debug, Clone)]
pub struct Feed<R, C> {
    buffer: FeedBuffer<R>,
    criteria: C,
    interval: Duration,
    running: bool,
    ticks: u64,
    last_error: Option<String>,
}

impl<R: Clone, C: Criteria<R> + Default> Feed<R, C> {
    pub fn new(config: FeedConfig) -> Result<Self, FeedConfigError> {
        if config.interval.is_zero() {
            return Err(FeedConfigError::ZeroInterval);
        }
        Ok(Self {
            buffer: FeedBuffer::new(config.capacity, config.order),
            criteria: C::default(),
            interval: config.interval,
            running: config.autostart,
            ticks: 0,
            last_error: None,
        })
    }

    /// One-shot initial population, in feed order (see [`FeedBuffer::seed`]).
    pub fn seed<I: IntoIterator<Item = R>>(&mut self, records: I) {
        self.buffer.seed(records);
    }

    /// One scheduler tick. Appends exactly one generated record while
    /// running; a generation failure skips the append and leaves buffer and
    /// run state untouched. Returns true if a record was appended.
    pub fn tick(&mut self, source: &mut impl RecordSource<R>) -> bool {
        if !self.running {
            return false;
        }
        self.ticks += 1;
        match source.next_record() {
            Ok(record) => {
                self.buffer.append(record);
                self.last_error = None;
                true
            }
            Err(err) => {
                self.last_error = Some(err.to_string());
                false
            }
        }
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self) {
        self.running = true;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Ticks that actually ran (i.e. while the feed was running).
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Non-fatal notice from the most recent tick, cleared by the next
    /// successful append.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn snapshot(&self) -> Vec<R> {
        self.buffer.snapshot()
    }

    /// The filtered, read-only projection of the current buffer.
    pub fn visible(&self) -> Vec<R> {
        apply(&self.buffer.snapshot(), &self.criteria)
    }

    pub fn total_count(&self) -> usize {
        self.buffer.len()
    }

    pub fn visible_count(&self) -> usize {
        self.buffer
            .iter()
            .filter(|record| self.criteria.accepts(record))
            .count()
    }

    /// Most recently appended record (the "last updated" footer).
    pub fn newest(&self) -> Option<&R> {
        self.buffer.newest()
    }

    pub fn criteria(&self) -> &C {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut C {
        &mut self.criteria
    }

    pub fn has_active_criteria(&self) -> bool {
        !self.criteria.is_default()
    }

    /// Reset every predicate to its all-pass default. Independent of the run
    /// state.
    pub fn clear_criteria(&mut self) {
        self.criteria = C::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::criteria::{text_match, DimensionFilter};
    use anyhow::anyhow;

    #[derive(Debug, Clone, PartialEq)]
    struct Line {
        text: String,
        kind: u8,
    }

    fn line(text: &str, kind: u8) -> Line {
        Line { text: text.to_string(), kind }
    }

    #[derive(Debug, Default, Clone)]
    struct LineCriteria {
        search: String,
        kind: DimensionFilter<u8>,
    }

    impl Criteria<Line> for LineCriteria {
        fn accepts(&self, record: &Line) -> bool {
            text_match(&[&record.text], &self.search) && self.kind.matches(&record.kind)
        }

        fn is_default(&self) -> bool {
            self.search.trim().is_empty() && self.kind.is_all()
        }
    }

    /// Deterministic source: hands out prepared lines, counts invocations.
    struct ScriptedSource {
        lines: Vec<Line>,
        next: usize,
        calls: usize,
    }

    impl ScriptedSource {
        fn new(lines: Vec<Line>) -> Self {
            Self { lines, next: 0, calls: 0 }
        }
    }

    impl RecordSource<Line> for ScriptedSource {
        fn next_record(&mut self) -> anyhow::Result<Line> {
            self.calls += 1;
            let record = self.lines[self.next % self.lines.len()].clone();
            self.next += 1;
            Ok(record)
        }
    }

    struct FailingSource;

    impl RecordSource<Line> for FailingSource {
        fn next_record(&mut self) -> anyhow::Result<Line> {
            Err(anyhow!("generator offline"))
        }
    }

    fn config(capacity: usize) -> FeedConfig {
        FeedConfig {
            capacity,
            interval: Duration::from_millis(2000),
            order: FeedOrder::OldestFirst,
            autostart: true,
        }
    }

    fn feed(capacity: usize) -> Feed<Line, LineCriteria> {
        Feed::new(config(capacity)).unwrap()
    }

    #[test]
    fn test_zero_interval_rejected_at_construction() {
        let result: Result<Feed<Line, LineCriteria>, _> = Feed::new(FeedConfig {
            interval: Duration::ZERO,
            ..config(10)
        });
        assert_eq!(result.unwrap_err(), FeedConfigError::ZeroInterval);
    }

    #[test]
    fn test_ticks_append_in_order_up_to_capacity() {
        let mut feed = feed(3);
        let mut source = ScriptedSource::new(vec![
            line("A", 0),
            line("B", 0),
            line("C", 0),
            line("D", 0),
        ]);
        for n in 0..4 {
            feed.tick(&mut source);
            assert_eq!(feed.total_count(), (n + 1).min(3));
        }
        assert_eq!(feed.snapshot(), vec![line("B", 0), line("C", 0), line("D", 0)]);
        assert_eq!(feed.newest(), Some(&line("D", 0)));
    }

    #[test]
    fn test_pause_stops_generator_calls_and_freezes_buffer() {
        let mut feed = feed(10);
        let mut source = ScriptedSource::new(vec![line("tick", 0)]);
        feed.tick(&mut source);
        feed.tick(&mut source);
        feed.pause();
        let frozen_len = feed.total_count();
        let calls_at_pause = source.calls;
        for _ in 0..3 {
            assert!(!feed.tick(&mut source));
        }
        assert_eq!(feed.total_count(), frozen_len);
        assert_eq!(source.calls, calls_at_pause);
        feed.resume();
        assert!(feed.tick(&mut source));
        assert_eq!(feed.total_count(), frozen_len + 1);
    }

    #[test]
    fn test_pause_and_resume_are_idempotent() {
        let mut feed = feed(10);
        feed.pause();
        feed.pause();
        assert!(!feed.is_running());
        feed.resume();
        feed.resume();
        assert!(feed.is_running());
    }

    #[test]
    fn test_generation_failure_skips_tick_without_state_change() {
        let mut feed = feed(10);
        let mut ok = ScriptedSource::new(vec![line("good", 0)]);
        feed.tick(&mut ok);
        assert!(!feed.tick(&mut FailingSource));
        assert_eq!(feed.total_count(), 1);
        assert!(feed.is_running());
        assert_eq!(feed.last_error(), Some("generator offline"));
        // Next successful append clears the notice.
        feed.tick(&mut ok);
        assert_eq!(feed.last_error(), None);
    }

    #[test]
    fn test_default_criteria_visible_equals_snapshot() {
        let mut feed = feed(10);
        let mut source = ScriptedSource::new(vec![line("Pod scaling event", 1), line("Backup failed", 2)]);
        feed.tick(&mut source);
        feed.tick(&mut source);
        assert!(!feed.has_active_criteria());
        assert_eq!(feed.visible(), feed.snapshot());
        assert_eq!(feed.visible_count(), feed.total_count());
    }

    #[test]
    fn test_clear_criteria_restores_unfiltered_view() {
        let mut feed = feed(10);
        let mut source = ScriptedSource::new(vec![line("Pod scaling event", 1), line("Backup failed", 2)]);
        feed.tick(&mut source);
        feed.tick(&mut source);

        feed.criteria_mut().search = "x".to_string();
        feed.criteria_mut().kind = DimensionFilter::only(1);
        assert!(feed.has_active_criteria());
        assert!(feed.visible_count() < feed.total_count());

        feed.clear_criteria();
        assert!(!feed.has_active_criteria());
        assert_eq!(feed.visible(), feed.snapshot());
    }

    #[test]
    fn test_filtering_is_a_pure_projection_of_the_buffer() {
        let mut feed = feed(10);
        let mut source = ScriptedSource::new(vec![
            line("Pod scaling event", 1),
            line("Backup failed", 2),
            line("Pod restarted", 1),
        ]);
        for _ in 0..3 {
            feed.tick(&mut source);
        }
        feed.criteria_mut().search = "pod".to_string();
        let before = feed.snapshot();
        assert_eq!(
            feed.visible(),
            vec![line("Pod scaling event", 1), line("Pod restarted", 1)]
        );
        // Applying criteria never mutates the buffer.
        assert_eq!(feed.snapshot(), before);
    }
}
