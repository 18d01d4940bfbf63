//! Stopwatch for timing blocks of code and reporting the result against
//! slow/very-slow thresholds.
//!
//! ```no_run
//! use bench_timer::{Stopwatch, Thresholds};
//!
//! let mut stopwatch = Stopwatch::new();
//! stopwatch.measure(|| std::thread::sleep(std::time::Duration::from_millis(20)));
//! stopwatch.print_result(Thresholds::new(0.5, 2.0));
//! ```

pub mod reading;
pub mod sink;
pub mod stopwatch;
pub mod threshold;

pub use crate::reading::Reading;
pub use crate::sink::{CaptureSink, ConsoleSink, Sink};
pub use crate::stopwatch::{Scope, Stopwatch};
pub use crate::threshold::{Category, Thresholds};
