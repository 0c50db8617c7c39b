use log::debug;

use crate::config::LayoutConfig;
use crate::content::ContentTree;
use crate::error::LayoutError;
use crate::geometry::{Band, CanvasSize, Geometry};
use crate::rect::Rect;
use crate::units::Pt;
use crate::wrap::wrap;

/// Lays out checklist-style content ([ContentTree]) in a single top-to-bottom
/// pass with no backtracking: title block, then for each section a heading
/// band followed by its item rows, then the optional note box.
///
/// Item rows grow with their wrapped line count, and the canvas height grows
/// with the content (it never shrinks below
/// [`LayoutConfig::min_canvas_height`]), so every band always lies fully
/// within the canvas. Growing is the only accommodation mechanism—the engine
/// never truncates text or shrinks fonts.
pub struct FlowLayoutEngine {
    config: LayoutConfig,
}

impl FlowLayoutEngine {
    pub fn new(config: LayoutConfig) -> FlowLayoutEngine {
        FlowLayoutEngine { config }
    }

    /// Compute geometry for `tree` on a canvas `canvas_width` points wide.
    ///
    /// A non-positive width (or one narrower than the configured margins) is
    /// an [InvalidArgument](LayoutError::InvalidArgument); every other input
    /// produces a complete geometry.
    pub fn layout(&self, tree: &ContentTree, canvas_width: Pt) -> Result<Geometry, LayoutError> {
        let c = &self.config;

        if canvas_width <= Pt(0.0) {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas width must be positive, got {canvas_width}"
            )));
        }
        let content_width = canvas_width - c.margins.horizontal();
        if content_width <= Pt(0.0) {
            return Err(LayoutError::InvalidArgument(format!(
                "canvas width {canvas_width} leaves no room inside the margins"
            )));
        }

        let mut bands: Vec<Band> = Vec::new();
        let mut cursor = c.margins.top;

        // the title block is a fixed reservation; titles are short by convention
        let title_height = if tree.subtitle.is_some() {
            c.title_height + c.subtitle_height
        } else {
            c.title_height
        };
        bands.push(Band::Title {
            rect: Rect::from_origin(c.margins.left, cursor, content_width, title_height),
            text: tree.title.clone(),
            subtitle: tree.subtitle.clone(),
        });
        cursor += title_height;

        let label_x = c.margins.left + c.checkbox_inset + c.checkbox_size + c.label_gap;
        let label_budget = c.font.budget(canvas_width - label_x - c.margins.right);

        for section in &tree.sections {
            bands.push(Band::Header {
                rect: Rect::from_origin(c.margins.left, cursor, content_width, c.header_height),
                text: section.heading.clone(),
            });
            cursor += c.header_height;

            // the header-to-items gap only applies when items follow, so an
            // empty section advances by exactly header height + section gap
            if !section.items.is_empty() {
                cursor += c.header_gap;
                for item in &section.items {
                    let lines = wrap(item, label_budget)?;
                    let height = c.font.line_height * lines.len() as f32;
                    let checkbox = Rect::from_origin(
                        c.margins.left + c.checkbox_inset,
                        cursor + (c.font.line_height - c.checkbox_size) / 2.0,
                        c.checkbox_size,
                        c.checkbox_size,
                    );
                    bands.push(Band::Item {
                        rect: Rect::from_origin(c.margins.left, cursor, content_width, height),
                        checkbox,
                        label: (label_x, cursor),
                        text: item.clone(),
                        lines,
                    });
                    cursor += height + c.item_gap;
                }
            }
            cursor += c.section_gap;
        }

        // an empty note is treated as absent
        if let Some(note) = tree.note.as_deref().filter(|note| !note.is_empty()) {
            cursor += c.note_gap;
            let budget = c.font.budget(content_width - c.note_padding * 2.0);
            let lines = wrap(note, budget)?;
            let height = c.font.line_height * lines.len() as f32 + c.note_padding * 2.0;
            bands.push(Band::Note {
                rect: Rect::from_origin(c.margins.left, cursor, content_width, height),
                text: note.to_string(),
                lines,
            });
            cursor += height;
        }

        let height = (cursor + c.margins.bottom).max(c.min_canvas_height);
        debug!(
            "flow layout: {} sections -> {} bands, canvas {}x{}",
            tree.sections.len(),
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
    use crate::content::Section;

    fn config() -> LayoutConfig {
        LayoutConfig {
            min_canvas_height: Pt(0.0),
            ..LayoutConfig::default()
        }
    }

    #[test]
    fn zero_width_is_rejected() {
        let engine = FlowLayoutEngine::new(config());
        let tree = ContentTree::new("t");
        assert!(matches!(
            engine.layout(&tree, Pt(0.0)),
            Err(LayoutError::InvalidArgument(_))
        ));
        assert!(matches!(
            engine.layout(&tree, Pt(-100.0)),
            Err(LayoutError::InvalidArgument(_))
        ));
    }

    #[test]
    fn title_only_tree_gets_minimum_height() {
        let c = LayoutConfig::default();
        let engine = FlowLayoutEngine::new(c.clone());
        let geometry = engine
            .layout(&ContentTree::new("Short"), Pt(1008.0))
            .unwrap();
        assert_eq!(geometry.canvas.height, c.min_canvas_height);
    }

    #[test]
    fn subtitle_extends_the_title_block() {
        let c = config();
        let engine = FlowLayoutEngine::new(c.clone());
        let mut with = ContentTree::new("Title");
        with.subtitle("Subtitle");
        let without = ContentTree::new("Title");

        let with = engine.layout(&with, Pt(1008.0)).unwrap();
        let without = engine.layout(&without, Pt(1008.0)).unwrap();
        let delta = with.canvas.height - without.canvas.height;
        assert!((delta - c.subtitle_height).0.abs() < 0.001);
    }

    #[test]
    fn checkbox_nests_inside_its_item_row() {
        let engine = FlowLayoutEngine::new(config());
        let mut tree = ContentTree::new("t");
        let mut section = Section::new("s");
        section.item("a single line item");
        tree.section(section);

        let geometry = engine.layout(&tree, Pt(1008.0)).unwrap();
        let item = geometry
            .bands
            .iter()
            .find_map(|band| match band {
                Band::Item { rect, checkbox, .. } => Some((*rect, *checkbox)),
                _ => None,
            })
            .expect("tree has an item band");
        assert!(item.0.contains(&item.1));
    }

    #[test]
    fn empty_note_emits_no_band() {
        let engine = FlowLayoutEngine::new(config());
        let mut tree = ContentTree::new("t");
        tree.note("");
        let geometry = engine.layout(&tree, Pt(1008.0)).unwrap();
        assert!(!geometry
            .bands
            .iter()
            .any(|band| matches!(band, Band::Note { .. })));
    }
}
