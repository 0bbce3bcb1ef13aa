/// Width below which columns are never squeezed.
const MIN_COLUMN_WIDTH: usize = 6;

#[derive(Clone, Copy, Debug, Default)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Fit to `$COLUMNS` when the shell exports it.
    pub fn from_env() -> Self {
        Self {
            max_width: std::env::var("COLUMNS")
                .ok()
                .and_then(|value| value.trim().parse().ok())
                .filter(|width: &usize| *width > 0),
        }
    }
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.chars().count())
                .max(MIN_COLUMN_WIDTH)
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| format_cell(&truncate_text(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(header_line.chars().count());

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                format_cell(&truncated, *width, numeric)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

/// Shrink the widest columns one char at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].chars().count().max(MIN_COLUMN_WIDTH))
            .max_by_key(|(idx, width)| (**width, std::cmp::Reverse(*idx)))
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };

        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim_end_matches('%').trim();
    !trimmed.is_empty()
        && trimmed
            .chars()
            .all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '+' | '.' | '/'))
}

fn format_cell(value: &str, width: usize, numeric: bool) -> String {
    let pad = width.saturating_sub(value.chars().count());
    if numeric {
        format!("{}{}", " ".repeat(pad), value)
    } else {
        format!("{}{}", value, " ".repeat(pad))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| (*c).to_string()).collect()
    }

    #[test]
    fn alignment_handles_mixed_widths() {
        let headers = ["id", "name"];
        let rows = vec![row(&["1", "Brown Spot"]), row(&["12", "Bacterial Leaf Blight"])];
        let table = render_table(&headers, &rows, TableOptions::default());
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("id"));
        assert!(lines[1].chars().all(|c| c == '-'));
        // numbers are right-aligned in a six-wide column
        assert!(lines[2].starts_with("     1  Brown Spot"));
        assert!(lines[3].starts_with("    12  Bacterial"));
    }

    #[test]
    fn max_width_truncates_widest_column() {
        let headers = ["id", "description"];
        let rows = vec![row(&["1", "A long description that will not fit"])];
        let table = render_table(
            &headers,
            &rows,
            TableOptions {
                max_width: Some(24),
            },
        );
        let last = table.lines().last().unwrap();
        assert!(last.ends_with('…'));
        assert!(last.chars().count() <= 24);
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_table(&["a", "b"], &[row(&["x"])], TableOptions::default());
        assert!(table.lines().last().unwrap().ends_with('-'));
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_text("héllo wörld", 5), "héll…");
        assert_eq!(truncate_text("abc", 1), "…");
    }
}
