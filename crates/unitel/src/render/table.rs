use super::ansi;

/// One table cell. Width is measured on `text`; `style` wraps the padded
/// cell so escape codes never shift the column borders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub style: Option<&'static str>,
}

impl Cell {
    pub fn styled(text: String, style: &'static str) -> Self {
        Self {
            text,
            style: Some(style),
        }
    }
}

impl From<String> for Cell {
    fn from(text: String) -> Self {
        Self { text, style: None }
    }
}

/// Box-drawn table with per-column widths sized to the content.
pub struct TableFormatter {
    widths: Vec<usize>,
}

/// Upper bound for a single column, keeps rows within a terminal line.
const MAX_COLUMN_WIDTH: usize = 40;

impl TableFormatter {
    pub fn new(headers: &[&str], rows: &[Vec<Cell>]) -> Self {
        let widths = headers
            .iter()
            .enumerate()
            .map(|(i, header)| {
                let header_width = header.chars().count();
                rows.iter()
                    .filter_map(|row| row.get(i))
                    .map(|cell| cell.text.chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(header_width)
                    .clamp(header_width, MAX_COLUMN_WIDTH.max(header_width))
            })
            .collect();

        Self { widths }
    }

    pub fn lines(&self, headers: &[&str], rows: &[Vec<Cell>]) -> Vec<String> {
        let mut lines = Vec::with_capacity(rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        lines.push(self.row(headers.iter().map(|h| (*h, None))));
        lines.push(self.border('├', '┼', '┤'));
        for row in rows {
            lines.push(self.row(row.iter().map(|c| (c.text.as_str(), c.style))));
        }
        lines.push(self.border('└', '┴', '┘'));
        lines
    }

    fn row<'a>(&self, cells: impl Iterator<Item = (&'a str, Option<&'static str>)>) -> String {
        let cells: Vec<String> = cells
            .zip(&self.widths)
            .map(|((text, style), width)| {
                let padded = truncate(text, *width);
                match style {
                    Some(code) => format!("{}{}{}", code, padded, ansi::RESET),
                    None => padded,
                }
            })
            .collect();
        format!("│ {} │", cells.join(" │ "))
    }

    fn border(&self, left: char, middle: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}", left, segments.join(&middle.to_string()), right)
    }
}

/// Truncate a string to a maximum display width, adding "..." if truncated.
///
/// Uses character count (not byte count) so accented names stay intact.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        format!("{:<width$}", s, width = max_len)
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{:<width$}", format!("{}...", truncated), width = max_len)
    }
}
