//! Result tables and their aligned text layout.
//!
//! `ResultTable` is the presentation-ready shape every query returns:
//! a header row and data rows of strings. `TableFormatter` sizes each
//! column from the table it is given and lays rows out left-justified.
//!
//! Widths are local to one table. Two tables formatted separately get
//! independent widths.

use serde::{Deserialize, Serialize};

/// Spaces added to the widest cell of a column.
pub const COLUMN_GAP: usize = 4;

/// A single row of display-ready cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultRow {
    cells: Vec<String>,
}

impl ResultRow {
    pub fn new<I, S>(cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            cells: cells.into_iter().map(Into::into).collect(),
        }
    }

    pub fn cells(&self) -> &[String] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Header plus data rows, all sharing the header's column count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultTable {
    header: ResultRow,
    rows: Vec<ResultRow>,
}

impl ResultTable {
    /// Create an empty table with the given column headers.
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: ResultRow::new(header),
            rows: Vec::new(),
        }
    }

    /// Append a data row.
    ///
    /// The row must have as many cells as the header; debug builds panic
    /// on a mismatch. In release builds extra cells are not rendered.
    pub fn push(&mut self, row: ResultRow) {
        debug_assert_eq!(
            row.len(),
            self.header.len(),
            "row has {} cells, header has {}",
            row.len(),
            self.header.len()
        );
        self.rows.push(row);
    }

    pub fn header(&self) -> &ResultRow {
        &self.header
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    /// Header first, then data rows in order.
    pub fn all_rows(&self) -> impl Iterator<Item = &ResultRow> {
        std::iter::once(&self.header).chain(self.rows.iter())
    }
}

/// Lays a [`ResultTable`] out as left-justified, space-padded text.
///
/// Each column is as wide as its longest cell (header included) plus
/// [`COLUMN_GAP`]. Lengths are counted in characters.
#[derive(Debug, Clone)]
pub struct TableFormatter<'a> {
    table: &'a ResultTable,
    widths: Vec<usize>,
}

impl<'a> TableFormatter<'a> {
    pub fn new(table: &'a ResultTable) -> Self {
        let widths = column_widths(table);
        Self { table, widths }
    }

    /// Field width of every column, in column order.
    pub fn widths(&self) -> &[usize] {
        &self.widths
    }

    /// Format one row against this table's widths.
    pub fn format_row(&self, row: &ResultRow) -> String {
        row.cells()
            .iter()
            .zip(&self.widths)
            .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
            .collect()
    }

    /// One line per row, header first. A table without data rows still
    /// renders its header line.
    pub fn render(&self) -> Vec<String> {
        self.table
            .all_rows()
            .map(|row| self.format_row(row))
            .collect()
    }
}

/// Max cell length per column position across header and rows, plus the gap.
fn column_widths(table: &ResultTable) -> Vec<usize> {
    let mut widths = vec![0; table.column_count()];
    for row in table.all_rows() {
        for (i, cell) in row.cells().iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    widths.into_iter().map(|w| w + COLUMN_GAP).collect()
}

/// Shortest round-trip decimal for a coordinate, always with a fractional
/// part (`51.0`, never `51`).
///
/// Never uses exponent notation: `-5e-05` renders as `-0.00005`, where
/// Python's `str()` would print `-5e-05`.
pub fn decimal_cell(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{text}.0")
    } else {
        text
    }
}

/// Distance in metres rounded to one decimal place.
pub fn distance_cell(metres: f64) -> String {
    format!("{:.1}", metres)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_table() -> ResultTable {
        let mut table = ResultTable::new(["ID", "Name", "Latitude", "Longitude"]);
        table.push(ResultRow::new([
            "BikePoints_1",
            "River Street , Clerkenwell",
            "51.529163",
            "-0.10997",
        ]));
        table.push(ResultRow::new(["BP2", "Soho", "51.5", "-0.13"]));
        table
    }

    #[test]
    fn test_widths_include_header() {
        let table = sample_table();
        let formatter = TableFormatter::new(&table);
        // "BikePoints_1", "River Street , Clerkenwell", "Latitude", "Longitude"
        assert_eq!(formatter.widths(), &[16, 30, 13, 13]);
    }

    #[test]
    fn test_render_lines() {
        let table = sample_table();
        let lines = TableFormatter::new(&table).render();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("ID              Name"));
        assert_eq!(
            lines[2],
            format!("{:<16}{:<30}{:<13}{:<13}", "BP2", "Soho", "51.5", "-0.13")
        );
        assert!(lines.iter().all(|l| l.chars().count() == 16 + 30 + 13 + 13));
    }

    #[test]
    fn test_header_only_table() {
        let table = ResultTable::new(["ID", "Name"]);
        let lines = TableFormatter::new(&table).render();
        assert_eq!(lines, vec!["ID    Name    ".to_string()]);
    }

    #[test]
    fn test_repeated_values_in_row() {
        // Same text in two columns must size each column independently
        let mut table = ResultTable::new(["A", "B"]);
        table.push(ResultRow::new(["x", "x"]));
        table.push(ResultRow::new(["longer", "y"]));
        let formatter = TableFormatter::new(&table);
        assert_eq!(formatter.widths(), &[10, 5]);
    }

    #[test]
    fn test_widths_are_local_to_table() {
        let mut wide = ResultTable::new(["Name"]);
        wide.push(ResultRow::new(["A very long station name indeed"]));
        let narrow = ResultTable::new(["Name"]);

        assert_eq!(TableFormatter::new(&wide).widths(), &[35]);
        assert_eq!(TableFormatter::new(&narrow).widths(), &[8]);
    }

    #[test]
    fn test_non_ascii_counts_characters() {
        let mut table = ResultTable::new(["Name"]);
        table.push(ResultRow::new(["Café"]));
        let formatter = TableFormatter::new(&table);
        assert_eq!(formatter.widths(), &[8]);
        assert_eq!(formatter.format_row(&table.rows()[0]), "Café    ");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "row has 1 cells, header has 2")]
    fn test_push_rejects_ragged_row() {
        let mut table = ResultTable::new(["ID", "Name"]);
        table.push(ResultRow::new(["BP1"]));
    }

    #[test]
    fn test_decimal_cell() {
        assert_eq!(decimal_cell(51.5027), "51.5027");
        assert_eq!(decimal_cell(-0.1527), "-0.1527");
        assert_eq!(decimal_cell(51.0), "51.0");
        assert_eq!(decimal_cell(0.0), "0.0");
    }

    #[test]
    fn test_decimal_cell_small_values_stay_positional() {
        assert_eq!(decimal_cell(-5e-05), "-0.00005");
        assert_eq!(decimal_cell(1e-7), "0.0000001");
        assert_eq!(decimal_cell(1e21), "1000000000000000000000.0");
    }

    #[test]
    fn test_distance_cell() {
        assert_eq!(distance_cell(0.0), "0.0");
        assert_eq!(distance_cell(692.2311), "692.2");
        assert_eq!(distance_cell(12.96), "13.0");
    }

    #[test]
    fn test_serialize_shape() {
        let mut table = ResultTable::new(["ID"]);
        table.push(ResultRow::new(["BP1"]));
        let value = serde_json::to_value(&table).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"header": ["ID"], "rows": [["BP1"]]})
        );
    }

    fn table_strategy() -> impl Strategy<Value = ResultTable> {
        (1usize..6).prop_flat_map(|cols| {
            (
                proptest::collection::vec("[a-zA-Z0-9 ,.]{0,12}", cols),
                proptest::collection::vec(
                    proptest::collection::vec("[a-zA-Z0-9 ,.]{0,20}", cols),
                    0..8,
                ),
            )
                .prop_map(|(header, rows)| {
                    let mut table = ResultTable::new(header);
                    for row in rows {
                        table.push(ResultRow::new(row));
                    }
                    table
                })
        })
    }

    proptest! {
        /// Every width is the longest cell in its column plus the gap
        #[test]
        fn width_is_max_plus_gap(table in table_strategy()) {
            let formatter = TableFormatter::new(&table);
            for (i, &width) in formatter.widths().iter().enumerate() {
                let longest = table
                    .all_rows()
                    .map(|r| r.cells()[i].chars().count())
                    .max()
                    .unwrap_or(0);
                prop_assert_eq!(width, longest + COLUMN_GAP);
            }
        }

        /// One line per row, every line exactly the sum of the widths
        #[test]
        fn lines_are_aligned(table in table_strategy()) {
            let formatter = TableFormatter::new(&table);
            let lines = formatter.render();
            let total: usize = formatter.widths().iter().sum();
            prop_assert_eq!(lines.len(), table.rows().len() + 1);
            for line in &lines {
                prop_assert_eq!(line.chars().count(), total);
            }
        }
    }
}
