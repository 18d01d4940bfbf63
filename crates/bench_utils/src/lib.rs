pub mod logger;

pub use crate::logger::init_logging;
