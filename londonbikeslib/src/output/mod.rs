//! Output formatting: present query results as tables.
//!
//! This module handles the final stage of the pipeline. It provides:
//!
//! - **ResultRow**: one row of display-ready string cells
//! - **ResultTable**: header plus rows, all with the same column count
//! - **TableFormatter**: per-column widths and aligned text lines
//!
//! Tables carry only strings. All matching, filtering and number
//! formatting happens in the query stage.
//!
//! ## Example
//!
//! ```rust
//! use londonbikeslib::output::{ResultRow, ResultTable, TableFormatter};
//!
//! let mut table = ResultTable::new(["ID", "Name"]);
//! table.push(ResultRow::new(["BP1", "Hyde Park Corner"]));
//!
//! let lines = TableFormatter::new(&table).render();
//! assert_eq!(lines[0], "ID     Name                ");
//! assert_eq!(lines[1], "BP1    Hyde Park Corner    ");
//! ```

pub mod table;

pub use table::{decimal_cell, distance_cell, ResultRow, ResultTable, TableFormatter, COLUMN_GAP};
