use crate::units::*;

/// Margins are used when laying out content on the canvas. There is no
/// control preventing bands from overflowing the margins—the margins are
/// guidelines that the layout engines position their content within.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Margins {
    pub top: Pt,
    pub right: Pt,
    pub bottom: Pt,
    pub left: Pt,
}

impl Margins {
    /// Create margins by specifying individual components in a clockwise fashion
    /// starting at the top (in the same order as CSS margins)
    pub fn trbl(
        top: impl Into<Pt>,
        right: impl Into<Pt>,
        bottom: impl Into<Pt>,
        left: impl Into<Pt>,
    ) -> Margins {
        Margins {
            top: top.into(),
            right: right.into(),
            bottom: bottom.into(),
            left: left.into(),
        }
    }

    /// Create margins where all values are equal
    pub fn all(value: impl Into<Pt>) -> Margins {
        let value = value.into();
        Margins {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create margins by specifying different values for vertical (top and bottom)
    /// and horizontal (left and right) margins
    pub fn symmetric(vertical: impl Into<Pt>, horizontal: impl Into<Pt>) -> Margins {
        let vertical = vertical.into();
        let horizontal = horizontal.into();
        Margins {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Create margins where all values are 0.0
    pub fn empty() -> Margins {
        Margins::default()
    }

    /// The sum of the left and right margins
    pub fn horizontal(&self) -> Pt {
        self.left + self.right
    }

    /// The sum of the top and bottom margins
    pub fn vertical(&self) -> Pt {
        self.top + self.bottom
    }
}

/// Abstract metrics of the base body font. The engines never touch font
/// files; character budgets and line heights are derived from these averages,
/// which is plenty for short authored strings.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FontMetrics {
    /// Nominal glyph size
    pub size: Pt,
    /// Vertical advance per wrapped line
    pub line_height: Pt,
    /// Average horizontal advance per character, used to turn a column
    /// width into a character budget
    pub avg_char_width: Pt,
}

impl FontMetrics {
    /// Metrics for a font of the given size, with conventional ratios for
    /// line height (1.4×) and average character width (0.6×)
    pub fn of_size(size: impl Into<Pt>) -> FontMetrics {
        let size = size.into();
        FontMetrics {
            size,
            line_height: size * 1.4,
            avg_char_width: size * 0.6,
        }
    }

    /// The number of characters that fit in a column `width` wide, never
    /// less than one so that wrapping always makes progress
    pub fn budget(&self, width: Pt) -> usize {
        ((width / self.avg_char_width).floor() as usize).max(1)
    }
}

/// Every fixed offset the layout engines use, gathered in one place and
/// passed explicitly instead of being scattered across call sites.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Canvas margins; all content is laid out between them
    pub margins: Margins,
    /// Metrics of the body font used for items, notes, and table cells
    pub font: FontMetrics,
    /// Height reserved for the title line
    pub title_height: Pt,
    /// Additional height reserved when a subtitle is present
    pub subtitle_height: Pt,
    /// Height of a section heading band (fixed; headings are short by
    /// convention)
    pub header_height: Pt,
    /// Gap between a heading band and the first item under it
    pub header_gap: Pt,
    /// Gap below each item row
    pub item_gap: Pt,
    /// Gap below a section, keeping sections visually separated (larger
    /// than `item_gap`)
    pub section_gap: Pt,
    /// Side length of the checkbox glyph, centered on an item's first line
    pub checkbox_size: Pt,
    /// Left inset of the checkbox from the content edge
    pub checkbox_inset: Pt,
    /// Gap between the checkbox and its label
    pub label_gap: Pt,
    /// Gap between the last section and the note box
    pub note_gap: Pt,
    /// Vertical padding inside the note box
    pub note_padding: Pt,
    /// Horizontal gap between table columns
    pub column_gap: Pt,
    /// Minimum height of the table header row; it grows if any header
    /// wraps to more lines than fit
    pub header_row_height: Pt,
    /// Horizontal text inset inside table cells
    pub cell_inset: Pt,
    /// Shorter documents are padded up to this height so they stay
    /// visually consistent; the canvas only ever grows beyond it
    pub min_canvas_height: Pt,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            margins: Margins::all(In(0.8)),
            font: FontMetrics::of_size(Pt(13.0)),
            title_height: Pt(58.0),
            subtitle_height: Pt(43.0),
            header_height: Pt(47.0),
            header_gap: Pt(25.0),
            item_gap: Pt(9.0),
            section_gap: Pt(58.0),
            checkbox_size: Pt(14.0),
            checkbox_inset: Pt(72.0),
            label_gap: Pt(18.0),
            note_gap: Pt(72.0),
            note_padding: Pt(11.0),
            column_gap: Pt(14.0),
            header_row_height: Pt(40.0),
            cell_inset: Pt(10.0),
            min_canvas_height: Pt(864.0),
        }
    }
}
