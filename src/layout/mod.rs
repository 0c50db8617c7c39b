//! Layout engines that turn hand-authored content into positioned geometry.
//!
//! Both engines walk their content once, top to bottom, accumulating a
//! vertical cursor; the canvas height is whatever the cursor ends up at
//! (plus the bottom margin), so content can never overflow the canvas. They
//! are pure functions of their inputs: no clocks, no randomness, no state
//! carried between calls.
//!
//! # Engines
//!
//! Two engines are available:
//!
//! - [`FlowLayoutEngine`](crate::layout::FlowLayoutEngine) - single-column vertical flow for checklist documents
//! - [`GridTableLayoutEngine`](crate::layout::GridTableLayoutEngine) - fixed columns and rows for comparison tables
//!
//! # Example
//!
//! ```
//! use info_gen::{ContentTree, LayoutConfig, Pt, Section};
//! use info_gen::layout::FlowLayoutEngine;
//!
//! let mut tree = ContentTree::new("Launch Checklist");
//! let mut basics = Section::new("Before you start");
//! basics.item("Backups verified?").item("Status page ready?");
//! tree.section(basics);
//!
//! let engine = FlowLayoutEngine::new(LayoutConfig::default());
//! let geometry = engine.layout(&tree, Pt(1008.0)).expect("can lay out tree");
//! assert!(geometry.canvas.height > Pt(0.0));
//! ```

mod flow;
mod grid;

pub use flow::*;
pub use grid::*;
