use crate::text::split_lines;

/// Horizontal alignment of cell text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    #[default]
    Left,
    Right,
}

/// Vertical alignment of a cell within a taller row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    #[default]
    Top,
    Bottom,
}

/// Cell text split into lines, with optional alignment overrides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    lines: Vec<String>,
    pub(crate) h_align: Option<HAlign>,
    pub(crate) v_align: Option<VAlign>,
}

impl Cell {
    pub(crate) fn new(value: &str) -> Self {
        Self {
            lines: split_lines(value),
            h_align: None,
            v_align: None,
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Cell text with lines joined by `\n`
    pub fn value(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines
    pub fn height(&self) -> usize {
        self.lines.len()
    }

    /// Widest line in characters
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn h_align(&self) -> Option<HAlign> {
        self.h_align
    }

    pub fn v_align(&self) -> Option<VAlign> {
        self.v_align
    }

    pub fn align_left(&mut self) -> &mut Self {
        self.h_align = Some(HAlign::Left);
        self
    }

    pub fn align_right(&mut self) -> &mut Self {
        self.h_align = Some(HAlign::Right);
        self
    }

    pub fn align_top(&mut self) -> &mut Self {
        self.v_align = Some(VAlign::Top);
        self
    }

    pub fn align_bottom(&mut self) -> &mut Self {
        self.v_align = Some(VAlign::Bottom);
        self
    }

    /// Line shown at `line_index` of a row `row_height` lines tall, or
    /// `None` where the cell has no text.
    pub(crate) fn line_at(&self, v_align: VAlign, line_index: usize, row_height: usize) -> Option<&str> {
        let index = match v_align {
            VAlign::Top => Some(line_index),
            VAlign::Bottom => (line_index + self.lines.len()).checked_sub(row_height),
        }?;
        self.lines.get(index).map(String::as_str)
    }
}
