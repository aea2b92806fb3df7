//! Plain-text table rendering
//!
//! Columns are declared up front by name; rows fill cells by column name.
//! Cells may hold multi-line text. Column widths and row heights are
//! measured when the table is rendered, so cells can change freely until
//! then.
//!
//! ```
//! use splitplus::table::StringTableBuilder;
//!
//! let mut table = StringTableBuilder::new();
//! table.add_column("a")?;
//! table.add_column("b")?;
//! table.draw_borders(true);
//! let mut row = table.add_row();
//! row.set_cell("a", "1")?;
//! row.set_cell("b", "22")?;
//!
//! assert_eq!(table.render(), "+-+--+\n|1|22|\n+-+--+");
//! # Ok::<(), splitplus::table::TableError>(())
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod row;

pub use cell::{Cell, HAlign, VAlign};
pub use column::Column;
pub use error::TableError;
pub use row::{Row, RowMut};

use crate::config::compile_time::table::MAX_PADDING;
use crate::{log_debug, log_error};
use std::collections::HashMap;
use std::fmt;

const BORDER_CORNER: char = '+';
const BORDER_HORIZONTAL: char = '-';
const BORDER_VERTICAL: char = '|';
const FILL: char = ' ';

/// Builder for a fixed-width text table
#[derive(Debug, Clone, Default)]
pub struct StringTableBuilder {
    columns: Vec<Column>,
    column_index: HashMap<String, usize>,
    rows: Vec<Row>,
    draw_borders: bool,
    cell_row_padding: usize,
    cell_column_padding: usize,
    inner_cell_row_padding: usize,
    inner_cell_column_padding: usize,
}

impl StringTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a column. Columns render in declaration order.
    pub fn add_column(&mut self, name: &str) -> Result<&mut Column, TableError> {
        if self.column_index.contains_key(name) {
            let error = TableError::DuplicateColumn {
                name: name.to_string(),
            };
            log_error!(error.error_code(), "Column declared twice", "column" => name);
            return Err(error);
        }

        let index = self.columns.len();
        self.column_index.insert(name.to_string(), index);
        self.columns.push(Column::new(name));
        Ok(&mut self.columns[index])
    }

    /// Append a row with no cells set
    pub fn add_row(&mut self) -> RowMut<'_> {
        self.rows.push(Row::default());
        let index = self.rows.len() - 1;
        RowMut {
            column_index: &self.column_index,
            row: &mut self.rows[index],
        }
    }

    /// Append a row with an empty cell in every declared column
    pub fn add_empty_row(&mut self) -> RowMut<'_> {
        let mut row = Row::default();
        for column in &self.columns {
            row.insert_cell(column.name(), Cell::new(""));
        }
        self.rows.push(row);
        let index = self.rows.len() - 1;
        RowMut {
            column_index: &self.column_index,
            row: &mut self.rows[index],
        }
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.column_index.get(name).map(|&index| &self.columns[index])
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        let index = *self.column_index.get(name)?;
        self.columns.get_mut(index)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Mutable handle to an existing row
    pub fn row_mut(&mut self, index: usize) -> Option<RowMut<'_>> {
        let row = self.rows.get_mut(index)?;
        Some(RowMut {
            column_index: &self.column_index,
            row,
        })
    }

    pub fn draw_borders(&mut self, draw: bool) -> &mut Self {
        self.draw_borders = draw;
        self
    }

    pub fn has_borders(&self) -> bool {
        self.draw_borders
    }

    /// Padding between a cell and its border, on all four sides
    pub fn cell_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.cell_row_padding(padding)?.cell_column_padding(padding)
    }

    /// Extra padding between neighbouring cells, in both directions
    pub fn inner_cell_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.inner_cell_row_padding(padding)?
            .inner_cell_column_padding(padding)
    }

    /// Blank lines above and below each cell
    pub fn cell_row_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.cell_row_padding = checked_padding("cell_row_padding", padding)?;
        Ok(self)
    }

    /// Spaces left and right of each cell
    pub fn cell_column_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.cell_column_padding = checked_padding("cell_column_padding", padding)?;
        Ok(self)
    }

    /// Blank lines between rows only
    pub fn inner_cell_row_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.inner_cell_row_padding = checked_padding("inner_cell_row_padding", padding)?;
        Ok(self)
    }

    /// Spaces between columns only
    pub fn inner_cell_column_padding(&mut self, padding: usize) -> Result<&mut Self, TableError> {
        self.inner_cell_column_padding = checked_padding("inner_cell_column_padding", padding)?;
        Ok(self)
    }

    /// Render the table. Lines are joined with `\n` and there is no
    /// trailing newline. A table without rows or columns renders empty.
    pub fn render(&self) -> String {
        if self.rows.is_empty() || self.columns.is_empty() {
            return String::new();
        }

        let widths = self.column_widths();
        let mut lines = Vec::new();

        if self.draw_borders {
            lines.push(self.border_line(&widths));
        }
        for _ in 0..self.cell_row_padding {
            lines.push(self.padding_line(&widths));
        }

        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                self.push_row_separator(&mut lines, &widths);
            }
            for line_index in 0..row.height() {
                lines.push(self.content_line(row, line_index, &widths));
            }
        }

        for _ in 0..self.cell_row_padding {
            lines.push(self.padding_line(&widths));
        }
        if self.draw_borders {
            lines.push(self.border_line(&widths));
        }

        log_debug!("Table rendered",
            "columns" => self.columns.len(),
            "rows" => self.rows.len(),
            "lines" => lines.len()
        );

        lines.join("\n")
    }

    /// Width in characters of each column's widest cell line
    fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .map(|column| {
                self.rows
                    .iter()
                    .filter_map(|row| row.cell(column.name()))
                    .map(Cell::width)
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    fn push_row_separator(&self, lines: &mut Vec<String>, widths: &[usize]) {
        let padding_rows = self.cell_row_padding + self.inner_cell_row_padding;
        for _ in 0..padding_rows {
            lines.push(self.padding_line(widths));
        }
        if self.draw_borders {
            lines.push(self.border_line(widths));
            for _ in 0..padding_rows {
                lines.push(self.padding_line(widths));
            }
        }
    }

    fn border_line(&self, widths: &[usize]) -> String {
        self.draw_line(BORDER_CORNER, BORDER_HORIZONTAL, widths, |_, width| {
            fill(BORDER_HORIZONTAL, width)
        })
    }

    fn padding_line(&self, widths: &[usize]) -> String {
        self.draw_line(BORDER_VERTICAL, FILL, widths, |_, width| fill(FILL, width))
    }

    fn content_line(&self, row: &Row, line_index: usize, widths: &[usize]) -> String {
        let height = row.height();
        self.draw_line(BORDER_VERTICAL, FILL, widths, |column, width| {
            let (h_align, v_align) = row.resolve_alignment(column);
            let text = row
                .cell(column.name())
                .and_then(|cell| cell.line_at(v_align, line_index, height))
                .unwrap_or("");
            match h_align {
                HAlign::Left => format!("{:<width$}", text),
                HAlign::Right => format!("{:>width$}", text),
            }
        })
    }

    /// Lay out one output line: border, padding, then each column's slot
    /// separated by padding and inner padding, closed the same way.
    fn draw_line<F>(&self, border: char, pad: char, widths: &[usize], mut slot: F) -> String
    where
        F: FnMut(&Column, usize) -> String,
    {
        let padding = fill(pad, self.cell_column_padding);
        let separator = format!("{}{}", padding, fill(pad, self.inner_cell_column_padding));

        let mut line = String::new();
        if self.draw_borders {
            line.push(border);
        }
        line.push_str(&padding);

        for (index, (column, &width)) in self.columns.iter().zip(widths).enumerate() {
            if index > 0 {
                line.push_str(&separator);
                if self.draw_borders {
                    line.push(border);
                    line.push_str(&separator);
                }
            }
            line.push_str(&slot(column, width));
        }

        line.push_str(&padding);
        if self.draw_borders {
            line.push(border);
        }
        line
    }
}

impl fmt::Display for StringTableBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn fill(c: char, count: usize) -> String {
    std::iter::repeat(c).take(count).collect()
}

fn checked_padding(field: &'static str, padding: usize) -> Result<usize, TableError> {
    if padding > MAX_PADDING {
        let error = TableError::PaddingTooLarge {
            requested: padding,
            max: MAX_PADDING,
        };
        log_error!(error.error_code(), "Table padding rejected",
            "field" => field,
            "requested" => padding,
            "max" => MAX_PADDING
        );
        return Err(error);
    }
    Ok(padding)
}
