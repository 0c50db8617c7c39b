use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::colour::{colours, Colour};
use crate::config::FontMetrics;
use crate::error::LayoutError;
use crate::geometry::{Band, Geometry};
use crate::rect::Rect;
use crate::units::Pt;

/// The colours a renderer draws geometry with. Defaults match the palette
/// the generated articles use; the layout engines themselves emit no
/// colours, and alternate row shading keys off each cell's row index.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Colour,
    /// Heading box outlines and the table header row fill
    pub accent: Colour,
    /// Heading and note box fills
    pub accent_tint: Colour,
    /// Fill of every other table data row
    pub row_shade: Colour,
    /// Body text
    pub ink: Colour,
    /// Heading text
    pub heading_ink: Colour,
}

impl Default for Theme {
    fn default() -> Theme {
        Theme {
            background: colours::WHITE,
            accent: colours::ACCENT_BLUE,
            accent_tint: colours::ACCENT_TINT,
            row_shade: colours::ROW_SHADE,
            ink: colours::BLACK,
            heading_ink: colours::HEADING_INK,
        }
    }
}

/// Draws a [Geometry] into an image document. The renderer makes no layout
/// decisions: every rectangle and every wrapped line it draws was computed
/// by a layout engine.
pub trait Renderer {
    /// Render `geometry` to an arbitrary stream
    fn render<W: Write>(&self, geometry: &Geometry, w: W) -> Result<(), LayoutError>;

    /// Render `geometry` to a file, creating parent directories as needed
    fn save<P: AsRef<Path>>(&self, geometry: &Geometry, path: P) -> Result<(), LayoutError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        self.render(geometry, BufWriter::new(file))
    }
}

/// Renders geometry as an SVG document: rounded heading and note boxes,
/// checkbox squares, bordered table cells with alternating fills, and
/// multi-line text as `tspan` runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgRenderer {
    pub theme: Theme,
    /// Font stack written into the document verbatim
    pub font_family: String,
    /// Metrics used for baseline placement within bands. These should match
    /// the metrics the geometry was laid out with, or text will sit oddly
    /// inside its (unchanged) bands
    pub font: FontMetrics,
}

impl Default for SvgRenderer {
    fn default() -> SvgRenderer {
        SvgRenderer {
            theme: Theme::default(),
            font_family: "'Hiragino Sans', 'Yu Gothic', sans-serif".into(),
            font: FontMetrics::of_size(Pt(13.0)),
        }
    }
}

impl SvgRenderer {
    pub fn new(theme: Theme, font: FontMetrics) -> SvgRenderer {
        SvgRenderer {
            theme,
            font,
            ..SvgRenderer::default()
        }
    }

    /// The baseline y for line `index` of a band whose text starts at `top`
    fn baseline(&self, top: Pt, index: usize) -> Pt {
        top + self.font.line_height * index as f32 + (self.font.line_height + self.font.size) / 2.0
            - self.font.size * 0.15
    }

    fn text_block<W: Write>(
        &self,
        w: &mut W,
        x: Pt,
        top: Pt,
        lines: &[String],
        anchor: &str,
        colour: &Colour,
        size: Pt,
        weight: &str,
    ) -> Result<(), LayoutError> {
        writeln!(
            w,
            r#"  <text x="{}" text-anchor="{anchor}" fill="{}" font-size="{}" font-weight="{weight}">"#,
            x.0,
            fill(colour),
            size.0,
        )?;
        for (index, line) in lines.iter().enumerate() {
            writeln!(
                w,
                r#"    <tspan x="{}" y="{}">{}</tspan>"#,
                x.0,
                self.baseline(top, index).0,
                escape(line)
            )?;
        }
        writeln!(w, "  </text>")?;
        Ok(())
    }

    fn rect<W: Write>(
        &self,
        w: &mut W,
        rect: &Rect,
        radius: Pt,
        fill_colour: &Colour,
        stroke: Option<(&Colour, f32)>,
    ) -> Result<(), LayoutError> {
        let stroke = match stroke {
            Some((colour, width)) => {
                format!(r#" stroke="{}" stroke-width="{width}""#, fill(colour))
            }
            None => String::new(),
        };
        writeln!(
            w,
            r#"  <rect x="{}" y="{}" width="{}" height="{}" rx="{}" fill="{}"{stroke}/>"#,
            rect.x1.0,
            rect.y1.0,
            rect.width().0,
            rect.height().0,
            radius.0,
            fill(fill_colour),
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn render<W: Write>(&self, geometry: &Geometry, mut w: W) -> Result<(), LayoutError> {
        let canvas = geometry.canvas;
        writeln!(
            w,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w_}" height="{h}" viewBox="0 0 {w_} {h}" font-family="{family}">"#,
            w_ = canvas.width.0,
            h = canvas.height.0,
            family = escape(&self.font_family),
        )?;
        writeln!(
            w,
            r#"  <rect width="{}" height="{}" fill="{}"/>"#,
            canvas.width.0,
            canvas.height.0,
            fill(&self.theme.background),
        )?;

        let centre = canvas.width / 2.0;
        for band in &geometry.bands {
            match band {
                Band::Title {
                    rect,
                    text,
                    subtitle,
                } => {
                    let title_size = self.font.size * 1.6;
                    writeln!(
                        w,
                        r#"  <text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{}" font-weight="bold">{}</text>"#,
                        centre.0,
                        (rect.y1 + title_size * 1.2).0,
                        fill(&self.theme.ink),
                        title_size.0,
                        escape(text),
                    )?;
                    if let Some(subtitle) = subtitle {
                        writeln!(
                            w,
                            r#"  <text x="{}" y="{}" text-anchor="middle" fill="{}" font-size="{}" font-style="italic">{}</text>"#,
                            centre.0,
                            (rect.y2 - self.font.size * 0.6).0,
                            fill(&self.theme.ink),
                            (self.font.size * 1.2).0,
                            escape(subtitle),
                        )?;
                    }
                }
                Band::Header { rect, text } => {
                    self.rect(&mut w, rect, Pt(8.0), &self.theme.accent_tint, Some((&self.theme.accent, 2.0)))?;
                    writeln!(
                        w,
                        r#"  <text x="{}" y="{}" fill="{}" font-size="{}" font-weight="bold">{}</text>"#,
                        (rect.x1 + Pt(14.0)).0,
                        (rect.y1 + rect.height() / 2.0 + self.font.size * 0.35).0,
                        fill(&self.theme.heading_ink),
                        (self.font.size * 1.1).0,
                        escape(text),
                    )?;
                }
                Band::Item {
                    checkbox,
                    label,
                    lines,
                    ..
                } => {
                    self.rect(&mut w, checkbox, Pt(3.0), &self.theme.background, Some((&self.theme.ink, 1.5)))?;
                    self.text_block(
                        &mut w,
                        label.0,
                        label.1,
                        lines,
                        "start",
                        &self.theme.ink,
                        self.font.size,
                        "normal",
                    )?;
                }
                Band::Note { rect, lines, .. } => {
                    self.rect(&mut w, rect, Pt(8.0), &self.theme.accent_tint, Some((&self.theme.accent, 2.0)))?;
                    // lines are centered within the padded box
                    let top = rect.y1 + (rect.height() - self.font.line_height * lines.len() as f32) / 2.0;
                    self.text_block(
                        &mut w,
                        centre,
                        top,
                        lines,
                        "middle",
                        &self.theme.ink,
                        self.font.size,
                        "normal",
                    )?;
                }
                Band::TableHeader { rect, lines, .. } => {
                    self.rect(&mut w, rect, Pt(0.0), &self.theme.accent, Some((&self.theme.ink, 1.0)))?;
                    let top = rect.y1 + (rect.height() - self.font.line_height * lines.len() as f32) / 2.0;
                    self.text_block(
                        &mut w,
                        rect.x1 + rect.width() / 2.0,
                        top,
                        lines,
                        "middle",
                        &colours::WHITE,
                        self.font.size,
                        "bold",
                    )?;
                }
                Band::TableCell {
                    rect, lines, row, ..
                } => {
                    let shade = if row % 2 == 0 {
                        &self.theme.row_shade
                    } else {
                        &self.theme.background
                    };
                    self.rect(&mut w, rect, Pt(0.0), shade, Some((&colours::GRID_LINE, 1.0)))?;
                    self.text_block(
                        &mut w,
                        rect.x1 + rect.width() / 2.0,
                        rect.y1,
                        lines,
                        "middle",
                        &self.theme.ink,
                        self.font.size * 0.9,
                        "normal",
                    )?;
                }
            }
        }

        writeln!(w, "</svg>")?;
        w.flush()?;
        Ok(())
    }
}

fn fill(colour: &Colour) -> String {
    let (r, g, b) = colour.to_rgb_bytes();
    format!("rgb({r},{g},{b})")
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LayoutConfig;
    use crate::content::{ContentTree, Section};
    use crate::layout::FlowLayoutEngine;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
    }

    #[test]
    fn renders_a_complete_document() {
        let mut tree = ContentTree::new("Title & Co");
        let mut section = Section::new("Basics");
        section.item("Check <everything>");
        tree.section(section);

        let engine = FlowLayoutEngine::new(LayoutConfig::default());
        let geometry = engine.layout(&tree, Pt(1008.0)).unwrap();

        let mut out = Vec::new();
        SvgRenderer::default().render(&geometry, &mut out).unwrap();
        let svg = String::from_utf8(out).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.trim_end().ends_with("</svg>"));
        assert!(svg.contains("Title &amp; Co"));
        assert!(svg.contains("Check &lt;everything&gt;"));
    }
}
