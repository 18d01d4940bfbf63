use std::fmt;
use std::ops::{Deref, DerefMut};
use std::time::Instant;

use tracing::trace;

use crate::reading::Reading;
use crate::sink::{ConsoleSink, Sink};
use crate::threshold::{Category, Thresholds};

/// Stopwatch with an optional start and an optional end timestamp.
///
/// Calling [`start`](Self::start) again resets the start but keeps any end
/// recorded by a previous run.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopwatch {
    start_time: Option<Instant>,
    end_time: Option<Instant>,
}

impl Stopwatch {
    /// Not started.
    pub fn new() -> Self {
        Self::default()
    }

    /// Already running.
    pub fn started() -> Self {
        Self::with_start(true)
    }

    pub fn with_start(start: bool) -> Self {
        let mut stopwatch = Self::new();
        if start {
            stopwatch.start();
        }
        stopwatch
    }

    /// Build from timestamps captured elsewhere.
    pub fn from_instants(start_time: Option<Instant>, end_time: Option<Instant>) -> Self {
        Self {
            start_time,
            end_time,
        }
    }

    /// Run `f` on a fresh stopwatch and hand both back.
    pub fn time<F, T>(f: F) -> (T, Self)
    where
        F: FnOnce() -> T,
    {
        let mut stopwatch = Self::new();
        let output = stopwatch.measure(f);
        (output, stopwatch)
    }

    pub fn start(&mut self) -> &mut Self {
        self.start_time = Some(Instant::now());
        trace!("stopwatch started");
        self
    }

    pub fn stop(&mut self) {
        self.end_time = Some(Instant::now());
        trace!(reading = %self.reading(), "stopwatch stopped");
    }

    /// Start now and stop when the returned guard is dropped, however the
    /// enclosing block exits.
    pub fn scope(&mut self) -> Scope<'_> {
        self.start();
        Scope { stopwatch: self }
    }

    /// Time `f` and return its output untouched.
    pub fn measure<F, T>(&mut self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let _scope = self.scope();
        f()
    }

    pub fn start_time(&self) -> Option<Instant> {
        self.start_time
    }

    pub fn end_time(&self) -> Option<Instant> {
        self.end_time
    }

    pub fn reading(&self) -> Reading {
        match (self.start_time, self.end_time) {
            (None, _) => Reading::NotStarted,
            (Some(_), None) => Reading::Running,
            (Some(start), Some(end)) => Reading::Elapsed(signed_secs(start, end)),
        }
    }

    /// Duration in seconds, `-inf` if never started and `inf` while running.
    pub fn as_secs_f64(&self) -> f64 {
        self.reading().as_secs_f64()
    }

    /// Print the duration on one line, styled by how it compares to
    /// `thresholds`.
    pub fn print_result(&self, thresholds: Thresholds) {
        self.report(&mut ConsoleSink, thresholds);
    }

    pub fn report<S>(&self, sink: &mut S, thresholds: Thresholds)
    where
        S: Sink + ?Sized,
    {
        let reading = self.reading();
        let category = thresholds.classify(reading);
        match category {
            Category::Skipped => sink.emit(category, "skipped"),
            Category::Running => sink.emit(category, "running"),
            Category::VerySlow | Category::Slow | Category::Normal => {
                sink.emit(category, &reading.to_string());
            }
        }
    }
}

fn signed_secs(start: Instant, end: Instant) -> f64 {
    match end.checked_duration_since(start) {
        Some(elapsed) => elapsed.as_secs_f64(),
        None => -start.duration_since(end).as_secs_f64(),
    }
}

impl From<&Stopwatch> for f64 {
    fn from(stopwatch: &Stopwatch) -> Self {
        stopwatch.as_secs_f64()
    }
}

impl fmt::Display for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reading(), f)
    }
}

impl fmt::Debug for Stopwatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Guard returned by [`Stopwatch::scope`]. Stops the stopwatch on drop.
pub struct Scope<'a> {
    stopwatch: &'a mut Stopwatch,
}

impl Deref for Scope<'_> {
    type Target = Stopwatch;

    fn deref(&self) -> &Stopwatch {
        &*self.stopwatch
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Stopwatch {
        &mut *self.stopwatch
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.stopwatch.stop();
    }
}
