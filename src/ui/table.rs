//! Box-drawn tables for listing templates.

/// A table whose columns grow to fit their widest cell.
#[derive(Debug)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    widths: Vec<usize>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let headers: Vec<String> = headers.into_iter().map(Into::into).collect();
        let widths = headers.iter().map(|h| h.chars().count()).collect();
        Self {
            headers,
            rows: Vec::new(),
            widths,
        }
    }

    /// Append a row. Cells past the last header are dropped; missing
    /// cells render blank.
    pub fn add_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = cells.into_iter().map(Into::into).collect();
        row.truncate(self.headers.len());
        for (width, cell) in self.widths.iter_mut().zip(&row) {
            *width = (*width).max(cell.chars().count());
        }
        self.rows.push(row);
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.border('┌', '┬', '┐'));
        lines.push(self.line(&self.headers));
        lines.push(self.border('├', '┼', '┤'));
        lines.extend(self.rows.iter().map(|row| self.line(row)));
        lines.push(self.border('└', '┴', '┘'));
        lines.join("\n")
    }

    fn border(&self, left: char, mid: char, right: char) -> String {
        let segments: Vec<String> = self.widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{left}{}{right}", segments.join(&mid.to_string()))
    }

    fn line(&self, row: &[String]) -> String {
        let cells: String = self
            .widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let cell = row.get(i).map(String::as_str).unwrap_or("");
                let pad = width - cell.chars().count();
                format!(" {cell}{} │", " ".repeat(pad))
            })
            .collect();
        format!("│{cells}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_still_has_headers() {
        let table = Table::new(["Name", "Category"]);
        assert!(table.is_empty());
        let output = table.render();
        assert!(output.contains("Name"));
        assert!(output.contains("Category"));
        assert_eq!(output.lines().count(), 4);
    }

    #[test]
    fn exact_rendering() {
        let mut table = Table::new(["Name", "Orientation"]);
        table.add_row(["Week", "landscape"]);
        table.add_row(vec!["Todo".to_string(), "portrait".to_string()]);

        let expected = "\
┌──────┬─────────────┐
│ Name │ Orientation │
├──────┼─────────────┤
│ Week │ landscape   │
│ Todo │ portrait    │
└──────┴─────────────┘";
        assert_eq!(table.render(), expected);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn short_and_long_rows() {
        let mut table = Table::new(["A", "B", "C"]);
        table.add_row(["only", "two"]);
        table.add_row(["1", "2", "3", "overflow"]);

        let output = table.render();
        assert!(output.contains("only"));
        assert!(!output.contains("overflow"));
    }

    #[test]
    fn non_ascii_cells_keep_rows_aligned() {
        let mut table = Table::new(["Name"]);
        table.add_row(["Wochenübersicht"]);
        table.add_row(["Grid"]);

        let output = table.render();
        let widths: Vec<_> = output.lines().map(|l| l.chars().count()).collect();
        assert!(widths.iter().all(|w| *w == widths[0]));
    }
}
