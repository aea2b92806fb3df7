use super::cell::{HAlign, VAlign};

/// Named table column with optional default alignment for its cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    name: String,
    pub(crate) h_align: Option<HAlign>,
    pub(crate) v_align: Option<VAlign>,
}

impl Column {
    pub(crate) fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            h_align: None,
            v_align: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
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
}
