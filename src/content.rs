/// The hand-authored content of a checklist-style infographic: a title, an
/// optional subtitle, ordered sections of items, and an optional trailing
/// note. The tree is owned by the caller and never mutated by the layout
/// engine.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ContentTree {
    /// The document title, drawn centered at the top of the canvas
    pub title: String,
    /// An optional subtitle drawn beneath the title
    pub subtitle: Option<String>,
    /// Ordered sections, rendered top-to-bottom
    pub sections: Vec<Section>,
    /// An optional note box drawn below the last section. An empty string
    /// is treated the same as no note at all
    pub note: Option<String>,
}

impl ContentTree {
    /// Create a new tree with the given title and nothing else
    pub fn new<S: ToString>(title: S) -> ContentTree {
        ContentTree {
            title: title.to_string(),
            ..ContentTree::default()
        }
    }

    /// Set the subtitle, modifying `self`
    pub fn subtitle<S: ToString>(&mut self, subtitle: S) -> &mut Self {
        self.subtitle = Some(subtitle.to_string());
        self
    }

    /// Set the trailing note, modifying `self`
    pub fn note<S: ToString>(&mut self, note: S) -> &mut Self {
        self.note = Some(note.to_string());
        self
    }

    /// Append a section to the end of the tree
    pub fn section(&mut self, section: Section) -> &mut Self {
        self.sections.push(section);
        self
    }
}

/// One section of a checklist: a heading band followed by its items. An
/// empty item list is legal and produces only the heading band.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Section {
    pub heading: String,
    pub items: Vec<String>,
}

impl Section {
    pub fn new<S: ToString>(heading: S) -> Section {
        Section {
            heading: heading.to_string(),
            items: Vec::new(),
        }
    }

    /// Append an item to the end of the section
    pub fn item<S: ToString>(&mut self, item: S) -> &mut Self {
        self.items.push(item.to_string());
        self
    }
}

/// The content of a comparison-table infographic: a title, column
/// definitions, and rows of cell text. Every row must have exactly as many
/// cells as there are columns; the grid engine rejects the spec otherwise.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TableSpec {
    pub title: String,
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<String>>,
}

impl TableSpec {
    pub fn new<S: ToString>(title: S) -> TableSpec {
        TableSpec {
            title: title.to_string(),
            ..TableSpec::default()
        }
    }

    /// Append a column. `relative_width` is a weight, not a fraction—the
    /// engine normalizes the weights across all columns, so they need not
    /// sum to 1
    pub fn column<S: ToString>(&mut self, header: S, relative_width: f32) -> &mut Self {
        self.columns.push(ColumnSpec {
            header: header.to_string(),
            relative_width,
        });
        self
    }

    /// Append a data row
    pub fn row<S: ToString>(&mut self, cells: &[S]) -> &mut Self {
        self.rows.push(cells.iter().map(ToString::to_string).collect());
        self
    }
}

/// One column of a [TableSpec]
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSpec {
    pub header: String,
    /// Positive weight determining this column's share of the content width
    pub relative_width: f32,
}
