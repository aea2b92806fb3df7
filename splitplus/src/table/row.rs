use super::cell::{Cell, HAlign, VAlign};
use super::column::Column;
use super::error::TableError;
use crate::log_error;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Cells keyed by column name, with optional row-wide alignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    cells: HashMap<String, Cell>,
    pub(crate) h_align: Option<HAlign>,
    pub(crate) v_align: Option<VAlign>,
}

impl Row {
    pub fn cell(&self, column: &str) -> Option<&Cell> {
        self.cells.get(column)
    }

    pub fn h_align(&self) -> Option<HAlign> {
        self.h_align
    }

    pub fn v_align(&self) -> Option<VAlign> {
        self.v_align
    }

    /// Height in lines of the tallest cell, at least one
    pub fn height(&self) -> usize {
        self.cells.values().map(Cell::height).max().unwrap_or(1).max(1)
    }

    pub(crate) fn insert_cell(&mut self, column: &str, cell: Cell) {
        self.cells.insert(column.to_string(), cell);
    }

    /// Effective alignment of the cell in `column`
    pub(crate) fn resolve_alignment(&self, column: &Column) -> (HAlign, VAlign) {
        let cell = self.cells.get(column.name());
        let h_align = cell
            .and_then(Cell::h_align)
            .or(self.h_align)
            .or(column.h_align)
            .unwrap_or_default();
        let v_align = cell
            .and_then(Cell::v_align)
            .or(self.v_align)
            .or(column.v_align)
            .unwrap_or_default();
        (h_align, v_align)
    }
}

/// Mutable handle to a row, able to check column names
pub struct RowMut<'a> {
    pub(crate) column_index: &'a HashMap<String, usize>,
    pub(crate) row: &'a mut Row,
}

impl<'a> RowMut<'a> {
    /// Set the text of the cell in `column`, replacing any previous value.
    /// Multi-line text is split on `\r\n` and `\n`.
    pub fn set_cell(&mut self, column: &str, value: &str) -> Result<&mut Cell, TableError> {
        if !self.column_index.contains_key(column) {
            let error = TableError::UnknownColumn {
                name: column.to_string(),
            };
            log_error!(error.error_code(), "Cell set on unknown column",
                "column" => column,
                "known_columns" => self.column_index.len()
            );
            return Err(error);
        }

        let cell = Cell::new(value);
        match self.row.cells.entry(column.to_string()) {
            Entry::Occupied(mut slot) => {
                slot.insert(cell);
                Ok(slot.into_mut())
            }
            Entry::Vacant(slot) => Ok(slot.insert(cell)),
        }
    }

    pub fn align_left(&mut self) -> &mut Self {
        self.row.h_align = Some(HAlign::Left);
        self
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.row.h_align = Some(HAlign::Right);
        self
    }

    pub fn align_top(&mut self) -> &mut Self {
        self.row.v_align = Some(VAlign::Top);
        self
    }

    pub fn align_bottom(&mut self) -> &mut Self {
        self.row.v_align = Some(VAlign::Bottom);
        self
    }

    pub fn row(&self) -> &Row {
        self.row
    }
}
