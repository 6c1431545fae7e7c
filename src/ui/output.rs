//! Table rendering for check results

use crate::core::CheckResult;
use crate::core::constants::table;
use crate::ui::color::Palette;

/// Renders check results as an aligned, color-coded table.
#[derive(Debug, Clone, Copy, Default)]
pub struct TableFormatter {
    palette: Palette,
}

impl TableFormatter {
    pub fn new(palette: Palette) -> Self {
        Self { palette }
    }

    /// Formatter that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(Palette::plain())
    }

    /// Width of the URL column: the longest URL, but never narrower than the
    /// header.
    pub fn url_column_width(results: &[CheckResult]) -> usize {
        results
            .iter()
            .map(|result| result.url().chars().count())
            .max()
            .unwrap_or(0)
            .max(table::URL_HEADER.len())
    }

    /// Render `results` into a string without a trailing newline.
    pub fn render(&self, results: &[CheckResult]) -> String {
        if results.is_empty() {
            return table::EMPTY_MESSAGE.to_string();
        }

        let width = Self::url_column_width(results);

        let mut lines = Vec::with_capacity(results.len() + 2);
        lines.push(format!(
            "{:<width$}{}{}",
            table::URL_HEADER,
            table::COLUMN_SEPARATOR,
            table::STATUS_HEADER
        ));
        lines.push(
            table::RULE_CHAR
                .to_string()
                .repeat(width + table::COLUMN_SEPARATOR.len() + table::STATUS_COLUMN_BUDGET),
        );

        for result in results {
            let color = if result.is_success() {
                self.palette.success
            } else {
                self.palette.failure
            };
            lines.push(format!(
                "{color}{:<width$}{}{}{}",
                result.url(),
                table::COLUMN_SEPARATOR,
                result.status(),
                self.palette.reset
            ));
        }

        lines.join("\n")
    }

    /// Print the rendered table to stdout.
    pub fn print_results(&self, results: &[CheckResult]) {
        println!("{}", self.render(results));
    }
}
