//! Mounts a [`Feed`] into Leptos reactivity and drives it from a browser
//! interval. Each feed instance owns its own cancellable handle; the handle
//! is cancelled when the owning component is disposed, so no tick can append
//! after teardown.

use std::time::Duration;

use contracts::feed::{Criteria, Feed, RecordSource, TickHandle, TickScheduler};
use gloo_timers::callback::Interval;
use leptos::prelude::*;

/// Browser-backed tick scheduler over `gloo_timers`.
pub struct IntervalScheduler;

struct IntervalHandle(Option<Interval>);

impl TickHandle for IntervalHandle {
    fn cancel(&mut self) {
        if let Some(interval) = self.0.take() {
            interval.cancel();
        }
    }
}

impl TickScheduler for IntervalScheduler {
    fn every(&self, interval: Duration, mut tick: Box<dyn FnMut()>) -> Box<dyn TickHandle> {
        let millis = interval.as_millis() as u32;
        Box::new(IntervalHandle(Some(Interval::new(millis, move || tick()))))
    }
}

/// Put `feed` into a signal and schedule its ticks at the feed's own
/// interval, pulling records from `source`. Pausing the feed keeps the
/// interval alive but makes every tick a no-op, so resume picks up on the
/// very next tick. The interval is cancelled on component cleanup.
pub fn use_live_feed<R, C, S>(feed: Feed<R, C>, source: S) -> RwSignal<Feed<R, C>>
where
    R: Clone + Send + Sync + 'static,
    C: Criteria<R> + Default + Clone + Send + Sync + 'static,
    S: RecordSource<R> + 'static,
{
    let state = RwSignal::new(feed);
    let interval = state.with_untracked(|feed| feed.interval());
    let source = StoredValue::new_local(source);

    let handle = IntervalScheduler.every(
        interval,
        Box::new(move || {
            source.update_value(|source| {
                state.update(|feed| {
                    let appended = feed.tick(source);
                    if !appended && feed.is_running() {
                        if let Some(err) = feed.last_error() {
                            log::warn!("feed tick skipped: {}", err);
                        }
                    }
                });
            });
        }),
    );

    let handle = StoredValue::new_local(Some(handle));
    on_cleanup(move || {
        handle.update_value(|handle| {
            if let Some(mut handle) = handle.take() {
                handle.cancel();
            }
        });
    });

    state
}
