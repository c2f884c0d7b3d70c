//! Live wall clock for the sidebar.
//!
//! A [`Ticker`] fires once per [`CLOCK_PERIOD`] on a background tokio task;
//! [`ClockState`] turns each tick into a `HH:MM:SS` string while mounted.

use std::time::Duration;

use chrono::{Local, Timelike};
use dioxus::prelude::*;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Refresh period of the clock.
pub const CLOCK_PERIOD: Duration = Duration::from_millis(1000);

/// Formats a time of day as 24-hour, zero-padded `HH:MM:SS`.
pub fn format_clock<T: Timelike>(time: &T) -> String {
    format!("{:02}:{:02}:{:02}", time.hour(), time.minute(), time.second())
}

/// Displayed clock value plus its mount lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockState {
    value: String,
    mounted: bool,
}

impl ClockState {
    /// Create a mounted clock showing `now`.
    pub fn mount<T: Timelike>(now: &T) -> Self {
        Self {
            value: format_clock(now),
            mounted: true,
        }
    }

    /// The formatted time currently displayed.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Whether ticks are still being accepted.
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Refreshes the value from `now`. Returns whether the display changed.
    ///
    /// Ticks arriving after [`unmount`](Self::unmount) are ignored.
    pub fn tick<T: Timelike>(&mut self, now: &T) -> bool {
        if !self.mounted {
            return false;
        }
        let next = format_clock(now);
        if next == self.value {
            return false;
        }
        self.value = next;
        true
    }

    /// Stops accepting ticks.
    pub fn unmount(&mut self) {
        self.mounted = false;
    }
}

/// Periodic tick source running on a spawned tokio task.
///
/// The first tick arrives one period after [`start`](Self::start). At most
/// one undelivered tick is buffered; further ticks are dropped until the
/// consumer catches up. Dropping the ticker cancels it.
#[derive(Debug)]
pub struct Ticker {
    task: JoinHandle<()>,
    ticks: mpsc::Receiver<Instant>,
    cancelled: bool,
}

impl Ticker {
    /// Spawns the tick task. Must be called inside a tokio runtime.
    pub fn start(period: Duration) -> Self {
        Self::with_callback(period, |_| {})
    }

    /// Like [`start`](Self::start), but also runs `on_tick` on the tick task
    /// each time the interval fires, whether or not the tick is delivered.
    pub fn with_callback<F>(period: Duration, mut on_tick: F) -> Self
    where
        F: FnMut(Instant) + Send + 'static,
    {
        let (tx, ticks) = mpsc::channel(1);
        let first = Instant::now() + period;

        let task = tokio::spawn(async move {
            let mut interval = time::interval_at(first, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                let at = interval.tick().await;
                on_tick(at);
                match tx.try_send(at) {
                    Ok(()) | Err(TrySendError::Full(_)) => {}
                    Err(TrySendError::Closed(_)) => break,
                }
            }
        });

        tracing::trace!(period_ms = period.as_millis() as u64, "ticker started");
        Self {
            task,
            ticks,
            cancelled: false,
        }
    }

    /// Waits for the next tick. Returns `None` once cancelled.
    pub async fn tick(&mut self) -> Option<Instant> {
        if self.cancelled {
            return None;
        }
        self.ticks.recv().await
    }

    /// Stops the ticker. No tick is delivered after this returns.
    pub fn cancel(&mut self) {
        if self.cancelled {
            return;
        }
        self.cancelled = true;
        self.task.abort();
        self.ticks.close();
        tracing::trace!("ticker cancelled");
    }

    /// Whether the tick task is still running and not cancelled.
    pub fn is_active(&self) -> bool {
        !self.cancelled && !self.task.is_finished()
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Wall clock text refreshed every second while mounted.
#[component]
pub fn LiveClock() -> Element {
    let mut clock = use_signal(|| ClockState::mount(&Local::now()));

    // The ticker lives inside the future, so unmounting drops and cancels it
    use_future(move || async move {
        let mut ticker = Ticker::start(CLOCK_PERIOD);
        while ticker.tick().await.is_some() {
            clock.write().tick(&Local::now());
        }
    });

    use_drop(move || {
        if let Ok(mut state) = clock.try_write() {
            state.unmount();
        }
    });

    rsx! {
        span {
            class: "live-clock",
            "{clock.read().value()}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveTime, TimeDelta};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn at(h: u32, m: u32, s: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, s).unwrap()
    }

    fn is_clock_shaped(value: &str) -> bool {
        let bytes = value.as_bytes();
        bytes.len() == 8
            && bytes[2] == b':'
            && bytes[5] == b':'
            && [0, 1, 3, 4, 6, 7].iter().all(|&i| bytes[i].is_ascii_digit())
    }

    #[test]
    fn test_format_clock_zero_pads() {
        assert_eq!(format_clock(&at(0, 0, 0)), "00:00:00");
        assert_eq!(format_clock(&at(9, 5, 7)), "09:05:07");
        assert_eq!(format_clock(&at(23, 59, 59)), "23:59:59");
    }

    #[test]
    fn test_format_clock_is_24_hour() {
        assert_eq!(format_clock(&at(13, 30, 0)), "13:30:00");
    }

    #[test]
    fn test_consecutive_ticks_roll_over() {
        let mut now = at(23, 58, 57);
        let mut state = ClockState::mount(&now);
        let mut seen = vec![state.value().to_string()];

        for _ in 0..4 {
            now += TimeDelta::seconds(1);
            assert!(state.tick(&now));
            seen.push(state.value().to_string());
        }

        assert_eq!(
            seen,
            vec!["23:58:57", "23:58:58", "23:58:59", "23:59:00", "23:59:01"]
        );

        now = at(23, 59, 59);
        state.tick(&now);
        now += TimeDelta::seconds(1);
        state.tick(&now);
        assert_eq!(state.value(), "00:00:00");
    }

    #[test]
    fn test_ticking_through_a_day_keeps_clock_well_formed() {
        let start = at(0, 0, 0);
        let mut now = start;
        let mut state = ClockState::mount(&now);
        let mut prev = state.value().to_string();

        for _ in 0..86_400 {
            now += TimeDelta::seconds(1);
            assert!(state.tick(&now), "no change after {prev}");

            let value = state.value().to_string();
            assert!(is_clock_shaped(&value), "bad clock value {value}");

            let prev_secs: u32 = prev[6..].parse().unwrap();
            let secs: u32 = value[6..].parse().unwrap();
            assert_eq!(secs, (prev_secs + 1) % 60, "{prev} -> {value}");
            if secs == 0 {
                assert_ne!(value[..5], prev[..5], "minute did not roll over at {value}");
            } else {
                assert_eq!(value[..5], prev[..5]);
            }
            prev = value;
        }

        assert_eq!(state.value(), format_clock(&start));
    }

    #[test]
    fn test_tick_same_second_reports_no_change() {
        let mut state = ClockState::mount(&at(10, 0, 0));
        assert!(!state.tick(&at(10, 0, 0)));
    }

    #[test]
    fn test_no_update_after_unmount() {
        let mut state = ClockState::mount(&at(12, 0, 0));
        assert!(state.tick(&at(12, 0, 1)));

        state.unmount();
        assert!(!state.is_mounted());
        assert!(!state.tick(&at(12, 0, 2)));
        assert_eq!(state.value(), "12:00:01");
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_fires_once_per_period() {
        let start = Instant::now();
        let mut ticker = Ticker::start(CLOCK_PERIOD);

        let first = ticker.tick().await.unwrap();
        assert_eq!(first - start, CLOCK_PERIOD);

        let second = ticker.tick().await.unwrap();
        assert_eq!(second - first, CLOCK_PERIOD);
        assert!(ticker.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_ticker_stops_delivering() {
        let mut ticker = Ticker::start(CLOCK_PERIOD);
        assert!(ticker.tick().await.is_some());

        ticker.cancel();
        assert!(!ticker.is_active());

        time::advance(CLOCK_PERIOD * 3).await;
        assert!(ticker.tick().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticker_drives_clock_until_teardown() {
        let mut now = at(8, 0, 0);
        let mut state = ClockState::mount(&now);
        let mut ticker = Ticker::start(CLOCK_PERIOD);

        for _ in 0..3 {
            ticker.tick().await.unwrap();
            now += TimeDelta::seconds(1);
            state.tick(&now);
        }
        assert_eq!(state.value(), "08:00:03");

        ticker.cancel();
        state.unmount();

        now += TimeDelta::seconds(1);
        if ticker.tick().await.is_some() {
            state.tick(&now);
        }
        assert_eq!(state.value(), "08:00:03");
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_ticker_stops_its_task() {
        let fired = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&fired);
        let mut ticker = Ticker::with_callback(CLOCK_PERIOD, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        ticker.tick().await.unwrap();
        ticker.tick().await.unwrap();
        let before_drop = fired.load(Ordering::SeqCst);
        assert_eq!(before_drop, 2);

        drop(ticker);
        tokio::task::yield_now().await;

        time::advance(CLOCK_PERIOD * 5).await;
        tokio::task::yield_now().await;

        assert_eq!(fired.load(Ordering::SeqCst), before_drop);
        assert_eq!(Arc::strong_count(&fired), 1, "tick task still holds its callback");
    }
}
