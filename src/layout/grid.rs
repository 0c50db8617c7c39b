use log::debug;

use crate::config::LayoutConfig;
use crate::content::TableSpec;
use crate::error::LayoutError;
use crate::geometry::{Band, CanvasSize, Geometry};
use crate::rect::Rect;
use crate::units::Pt;
use crate::wrap::wrap;

/// Lays out comparison-table content ([TableSpec]): a title block, a header
/// row, and one row of cells per data row.
///
/// Column widths are the normalized relative weights of the columns applied
/// to whatever width remains inside the margins and inter-column gaps. Each
/// data row is as tall as its tallest wrapped cell, so long text in one
/// column never gets clipped while its neighbours sit on under-filled cells.
/// The canvas height grows to fit, as with
/// [FlowLayoutEngine](crate::layout::FlowLayoutEngine).
pub struct GridTableLayoutEngine {
    config: LayoutConfig,
}

impl GridTableLayoutEngine {
    pub fn new(config: LayoutConfig) -> GridTableLayoutEngine {
        GridTableLayoutEngine { config }
    }

    /// Compute geometry for `spec` on a canvas `canvas_width` points wide.
    ///
    /// Fails fast—before any geometry is produced—with
    /// [SchemaMismatch](LayoutError::SchemaMismatch) if any row's cell count
    /// differs from the column count, and with
    /// [InvalidArgument](LayoutError::InvalidArgument) for a non-positive
    /// canvas width or column weight.
    pub fn layout(&self, spec: &TableSpec, canvas_width: Pt) -> Result<Geometry, LayoutError> {
        let c = &self.config;

        if canvas_width <= Pt(0.0) {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas width must be positive, got {canvas_width}"
            )));
        }
        if spec.columns.is_empty() {
            return Err(LayoutError::InvalidArgument(
                "table must have at least one column".into(),
            ));
        }
        for column in &spec.columns {
            if column.relative_width <= 0.0 {
                return Err(LayoutError::InvalidArgument(format!(
                    "column {:?} has non-positive width weight {}",
                    column.header, column.relative_width
                )));
            }
        }
        for (row, cells) in spec.rows.iter().enumerate() {
            if cells.len() != spec.columns.len() {
                return Err(LayoutError::SchemaMismatch {
                    row,
                    expected: spec.columns.len(),
                    found: cells.len(),
                });
            }
        }

        let gaps = c.column_gap * (spec.columns.len() - 1) as f32;
        let available = canvas_width - c.margins.horizontal() - gaps;
        if available <= Pt(0.0) {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas width {canvas_width} leaves no room for {} columns",
                spec.columns.len()
            )));
        }

        // normalize the column weights to absolute widths
        let total_weight: f32 = spec.columns.iter().map(|col| col.relative_width).sum();
        let widths: Vec<Pt> = spec
            .columns
            .iter()
            .map(|col| available * (col.relative_width / total_weight))
            .collect();
        let mut origins: Vec<Pt> = Vec::with_capacity(widths.len());
        let mut x = c.margins.left;
        for width in &widths {
            origins.push(x);
            x += *width + c.column_gap;
        }

        let mut bands: Vec<Band> = Vec::new();
        let mut cursor = c.margins.top;

        bands.push(Band::Title {
            rect: Rect::from_origin(
                c.margins.left,
                cursor,
                canvas_width - c.margins.horizontal(),
                c.title_height,
            ),
            text: spec.title.clone(),
            subtitle: None,
        });
        cursor += c.title_height;

        // the header row grows to fit the tallest wrapped header
        let header_lines: Vec<Vec<String>> = spec
            .columns
            .iter()
            .zip(&widths)
            .map(|(col, width)| wrap(&col.header, c.font.budget(*width - c.cell_inset * 2.0)))
            .collect::<Result<_, _>>()?;
        let tallest = header_lines.iter().map(Vec::len).max().unwrap_or(1);
        let header_height = c
            .header_row_height
            .max(c.font.line_height * tallest as f32);
        for (col, lines) in header_lines.into_iter().enumerate() {
            bands.push(Band::TableHeader {
                rect: Rect::from_origin(origins[col], cursor, widths[col], header_height),
                text: spec.columns[col].header.clone(),
                lines,
                col,
            });
        }
        cursor += header_height;

        for (row, cells) in spec.rows.iter().enumerate() {
            let wrapped: Vec<Vec<String>> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| wrap(cell, c.font.budget(*width - c.cell_inset * 2.0)))
                .collect::<Result<_, _>>()?;

            // the tallest cell governs the whole row
            let tallest = wrapped.iter().map(Vec::len).max().unwrap_or(1);
            let row_height = c.font.line_height * tallest as f32;

            for (col, lines) in wrapped.into_iter().enumerate() {
                bands.push(Band::TableCell {
                    rect: Rect::from_origin(origins[col], cursor, widths[col], row_height),
                    text: cells[col].clone(),
                    lines,
                    row,
                    col,
                });
            }
            cursor += row_height;
        }

        let height = (cursor + c.margins.bottom).max(c.min_canvas_height);
        debug!(
            "grid layout: {} columns x {} rows -> {} bands, canvas {}x{}",
            spec.columns.len(),
            spec.rows.len(),
            bands.len(),
            canvas_width,
            height
        );

        Ok(Geometry {
            bands,
            canvas: CanvasSize {
                width: canvas_width,
                height,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> LayoutConfig {
        LayoutConfig {
            min_canvas_height: Pt(0.0),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn mismatched_row_fails_before_layout() {
        let engine = GridTableLayoutEngine::new(config());
        let mut spec = TableSpec::new("t");
        spec.column("A", 1.0).column("B", 1.0);
        spec.row(&["one", "two"]);
        spec.row(&["only one"]);
        match engine.layout(&spec, Pt(1008.0)) {
            Err(LayoutError::SchemaMismatch {
                row,
                expected,
                found,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected SchemaMismatch, got {other:?}"),
        }
    }

    #[test]
    fn non_positive_weight_is_rejected() {
        let engine = GridTableLayoutEngine::new(config());
        let mut spec = TableSpec::new("t");
        spec.column("A", 0.0);
        assert!(matches!(
            engine.layout(&spec, Pt(1008.0)),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn column_widths_are_normalized() {
        let c = config();
        let engine = GridTableLayoutEngine::new(c.clone());
        let mut spec = TableSpec::new("t");
        // weights sum to 8, not 1; the engine normalizes them
        spec.column("A", 2.0).column("B", 6.0);
        let geometry = engine.layout(&spec, Pt(1008.0)).unwrap();

        let widths: Vec<Pt> = geometry
            .bands
            .iter()
            .filter_map(|band| match band {
                Band::TableHeader { rect, .. } => Some(rect.width()),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 2);
        let available = Pt(1008.0) - c.margins.horizontal() - c.column_gap;
        assert!((widths[0] - available * 0.25).0.abs() < 0.001);
        assert!((widths[1] - available * 0.75).0.abs() < 0.001);
    }

    #[test]
    fn header_row_grows_for_wrapping_headers() {
        let c = config();
        let engine = GridTableLayoutEngine::new(c.clone());
        let mut spec = TableSpec::new("t");
        spec.column("Short", 1.0).column(
            "an extremely long header that cannot possibly fit on a single wrapped line here",
            1.0,
        );
        let geometry = engine.layout(&spec, Pt(600.0)).unwrap();
        let heights: Vec<Pt> = geometry
            .bands
            .iter()
            .filter_map(|band| match band {
                Band::TableHeader { rect, .. } => Some(rect.height()),
                _ => None,
            })
            .collect();
        assert_eq!(heights[0], heights[1]);
        assert!(heights[0] > c.header_row_height);
    }
}
