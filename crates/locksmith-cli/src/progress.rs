//! Terminal progress indicator for the enrichment run.
//!
//! Fed by the pipeline's per-item completion hook; rendering is a pure
//! side effect and failures to draw are ignored.

use console::Term;

const BAR_LENGTH: usize = 10;

/// Minimal single-line progress bar on stderr.
pub struct ProgressBar {
    term: Term,
}

impl ProgressBar {
    /// Create a bar writing to stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
        }
    }

    /// Redraw the bar for `completed` of `total` items.
    pub fn draw(&self, completed: usize, total: usize) {
        if total == 0 {
            return;
        }

        let percent = completed * 100 / total;
        let filled = completed * BAR_LENGTH / total;
        let bar = format!(
            "\r[{}{}] {percent}% complete",
            "\u{25a0}".repeat(filled),
            " ".repeat(BAR_LENGTH - filled)
        );

        let _ = self.term.write_str(&bar);
    }

    /// End the progress line.
    pub fn finish(&self) {
        let _ = self.term.write_line("");
    }
}

impl Default for ProgressBar {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_does_not_panic_on_bounds() {
        let bar = ProgressBar::new();
        bar.draw(0, 10);
        bar.draw(10, 10);
        bar.draw(0, 0);
        bar.finish();
    }
}
