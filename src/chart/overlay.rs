use crate::constants::chart::OVERLAY_OFFSET;
use egui::{Pos2, pos2};

/// Tooltip attached to one hovered mark
///
/// A renderer holds at most one of these; showing a new overlay replaces the old value, so two
/// can never coexist.
#[derive(Clone, Debug, PartialEq)]
pub struct Overlay {
    /// Index of the mark it describes
    pub mark: usize,
    /// Top-left corner in screen coordinates
    pub position: Pos2,
    pub lines: Vec<String>,
}

impl Overlay {
    /// Overlay for `mark`, placed at the pointer plus the standard offset
    pub fn at_pointer(mark: usize, pointer: Pos2, lines: Vec<String>) -> Self {
        Self {
            mark,
            position: pos2(pointer.x + OVERLAY_OFFSET[0], pointer.y + OVERLAY_OFFSET[1]),
            lines,
        }
    }

    pub fn title(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }

    pub fn body(&self) -> &[String] {
        self.lines.get(1..).unwrap_or(&[])
    }
}
