use crate::rect::Rect;
use crate::units::Pt;

/// The size of the finished canvas. The width is caller-supplied; the
/// height is computed by the layout engine and grows to fit the content.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CanvasSize {
    pub width: Pt,
    pub height: Pt,
}

/// One positioned, sized visual element of the output. Bands carry their
/// wrapped text lines so the renderer makes no layout decisions of its own.
#[derive(Debug, Clone, PartialEq)]
pub enum Band {
    /// The title block at the top of the canvas, with the subtitle (if any)
    /// drawn beneath the title inside the same block
    Title {
        rect: Rect,
        text: String,
        subtitle: Option<String>,
    },
    /// A section heading band spanning the full content width
    Header { rect: Rect, text: String },
    /// One checklist row: a checkbox glyph nested inside the row with the
    /// label immediately to its right
    Item {
        rect: Rect,
        checkbox: Rect,
        /// Top-left corner of the label's first line
        label: (Pt, Pt),
        text: String,
        lines: Vec<String>,
    },
    /// The trailing note box
    Note {
        rect: Rect,
        text: String,
        lines: Vec<String>,
    },
    /// A table header cell
    TableHeader {
        rect: Rect,
        text: String,
        lines: Vec<String>,
        col: usize,
    },
    /// A table data cell. The row index is emitted so the renderer can
    /// alternate row backgrounds; the engine itself makes no colour
    /// decisions
    TableCell {
        rect: Rect,
        text: String,
        lines: Vec<String>,
        row: usize,
        col: usize,
    },
}

impl Band {
    /// The band's outer rectangle
    pub fn rect(&self) -> Rect {
        match self {
            Band::Title { rect, .. }
            | Band::Header { rect, .. }
            | Band::Item { rect, .. }
            | Band::Note { rect, .. }
            | Band::TableHeader { rect, .. }
            | Band::TableCell { rect, .. } => *rect,
        }
    }

    /// The band's vertical span as (top, bottom)
    pub fn v_span(&self) -> (Pt, Pt) {
        let rect = self.rect();
        (rect.y1, rect.y2)
    }
}

/// The complete output of one layout pass: an ordered list of bands plus
/// the canvas size needed to fit them all. Freshly allocated on every call;
/// consumed once by a renderer and discarded.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub bands: Vec<Band>,
    pub canvas: CanvasSize,
}
