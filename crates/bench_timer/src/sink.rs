//! Output targets for threshold reports.

use colored::{ColoredString, Colorize};

use crate::threshold::Category;

/// Receives one categorized line per report.
pub trait Sink {
    fn emit(&mut self, category: Category, text: &str);
}

impl<F> Sink for F
where
    F: FnMut(Category, &str),
{
    fn emit(&mut self, category: Category, text: &str) {
        self(category, text);
    }
}

/// Writes colored lines to stdout.
///
/// Coloring follows `colored`'s global control, so `NO_COLOR` and
/// `colored::control::set_override` apply.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn paint(category: Category, text: &str) -> ColoredString {
        match category {
            Category::Skipped => text.blue(),
            Category::Running => text.red(),
            Category::VerySlow => text.red().bold(),
            Category::Slow => text.yellow().bold(),
            Category::Normal => text.green().bold(),
        }
    }
}

impl Sink for ConsoleSink {
    fn emit(&mut self, category: Category, text: &str) {
        println!("{}", Self::paint(category, text));
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default, Clone)]
pub struct CaptureSink {
    lines: Vec<(Category, String)>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[(Category, String)] {
        &self.lines
    }

    pub fn last(&self) -> Option<&(Category, String)> {
        self.lines.last()
    }
}

impl Sink for CaptureSink {
    fn emit(&mut self, category: Category, text: &str) {
        self.lines.push((category, text.to_owned()));
    }
}

#[cfg(test)]
mod tests {
    use colored::Color;

    use super::*;

    #[test]
    fn test_capture_sink_records_in_order() {
        let mut sink = CaptureSink::new();
        sink.emit(Category::Skipped, "skipped");
        sink.emit(Category::Normal, "0.10000");

        assert_eq!(sink.lines().len(), 2);
        assert_eq!(sink.last(), Some(&(Category::Normal, "0.10000".to_owned())));
    }

    #[test]
    fn test_closure_is_a_sink() {
        let mut seen = Vec::new();
        let mut sink = |category: Category, text: &str| seen.push((category, text.len()));
        sink.emit(Category::Slow, "1.00000");
        assert_eq!(seen, vec![(Category::Slow, 7)]);
    }

    #[test]
    fn test_paint_styles() {
        let skipped = ConsoleSink::paint(Category::Skipped, "skipped");
        assert_eq!(skipped.fgcolor(), Some(Color::Blue));
        assert!(!skipped.style().contains(colored::Styles::Bold));

        let very_slow = ConsoleSink::paint(Category::VerySlow, "9.00000");
        assert_eq!(very_slow.fgcolor(), Some(Color::Red));
        assert!(very_slow.style().contains(colored::Styles::Bold));

        let slow = ConsoleSink::paint(Category::Slow, "2.00000");
        assert_eq!(slow.fgcolor(), Some(Color::Yellow));

        let normal = ConsoleSink::paint(Category::Normal, "0.50000");
        assert_eq!(normal.fgcolor(), Some(Color::Green));
        assert!(normal.style().contains(colored::Styles::Bold));
    }
}
