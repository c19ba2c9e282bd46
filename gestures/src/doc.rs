//! Template model: the text and image blocks placed on a print template.
//!
//! Elements are plain serde types so the host can hand the list to whatever
//! key-value store it persists templates in and restore it later with
//! [`ElementStore::load_snapshot`].

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::geometry::{Point, Size};

/// Unique identifier for a template element.
pub type ElementId = Uuid;

/// Horizontal alignment for text content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// What an element holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ElementKind {
    /// A block of text.
    Text {
        /// Display content.
        content: String,
        /// Font size in CSS pixels.
        font_size: f64,
        /// Horizontal alignment.
        align: TextAlign,
        #[serde(default)]
        bold: bool,
        #[serde(default)]
        italic: bool,
    },
    /// An image, referenced by URL or data URI.
    Image {
        /// Image source as the host understands it.
        src: String,
    },
}

/// One block on the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateElement {
    /// Unique identifier for this element.
    pub id: ElementId,
    /// Content and per-kind styling.
    #[serde(flatten)]
    pub kind: ElementKind,
    /// Left edge relative to the template's top-left corner.
    pub x: f64,
    /// Top edge relative to the template's top-left corner.
    pub y: f64,
    /// Box width.
    pub width: f64,
    /// Box height.
    pub height: f64,
    /// Stacking order; later elements are drawn above earlier ones.
    pub z_index: i64,
}

impl TemplateElement {
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.kind, ElementKind::Text { .. })
    }
}

/// Named text styles offered by the edit panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Title,
    Subtitle,
    Body,
    Small,
    Emphasis,
}

impl StylePreset {
    /// Overwrite the styling fields of a text kind. Other kinds are untouched.
    pub fn apply(self, kind: &mut ElementKind) {
        let ElementKind::Text { font_size, bold, italic, .. } = kind else {
            return;
        };
        *bold = false;
        *italic = false;
        match self {
            Self::Title => {
                *font_size = 24.0;
                *bold = true;
            }
            Self::Subtitle => {
                *font_size = 18.0;
                *bold = true;
            }
            Self::Body => *font_size = 14.0,
            Self::Small => *font_size = 12.0,
            Self::Emphasis => {
                *bold = true;
                *italic = true;
            }
        }
    }

    /// Best preset match for a text kind's current styling, if any.
    #[must_use]
    pub fn detect(kind: &ElementKind) -> Option<Self> {
        let ElementKind::Text { font_size, bold, italic, .. } = *kind else {
            return None;
        };
        if font_size >= 24.0 && bold {
            Some(Self::Title)
        } else if font_size >= 18.0 && bold {
            Some(Self::Subtitle)
        } else if (font_size - 14.0).abs() < f64::EPSILON && !bold {
            Some(Self::Body)
        } else if font_size <= 12.0 {
            Some(Self::Small)
        } else if bold || italic {
            Some(Self::Emphasis)
        } else {
            None
        }
    }
}

/// In-memory store of template elements.
#[derive(Debug, Default)]
pub struct ElementStore {
    elements: HashMap<ElementId, TemplateElement>,
    next_z: i64,
}

impl ElementStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an element on top of everything else, overwriting any element with the same id.
    pub fn insert(&mut self, mut element: TemplateElement) {
        element.z_index = self.next_z;
        self.next_z += 1;
        self.elements.insert(element.id, element);
    }

    /// Remove an element by id, returning it if it was present.
    pub fn remove(&mut self, id: &ElementId) -> Option<TemplateElement> {
        self.elements.remove(id)
    }

    #[must_use]
    pub fn get(&self, id: &ElementId) -> Option<&TemplateElement> {
        self.elements.get(id)
    }

    pub fn get_mut(&mut self, id: &ElementId) -> Option<&mut TemplateElement> {
        self.elements.get_mut(id)
    }

    #[must_use]
    pub fn contains(&self, id: &ElementId) -> bool {
        self.elements.contains_key(id)
    }

    /// Replace all elements with a restored snapshot, keeping their stacking order.
    pub fn load_snapshot(&mut self, elements: Vec<TemplateElement>) {
        self.elements.clear();
        self.next_z = elements.iter().map(|e| e.z_index + 1).max().unwrap_or(0);
        for element in elements {
            self.elements.insert(element.id, element);
        }
    }

    /// All elements sorted by `(z_index, id)`, bottom first.
    #[must_use]
    pub fn sorted(&self) -> Vec<&TemplateElement> {
        let mut out: Vec<&TemplateElement> = self.elements.values().collect();
        out.sort_by(|a, b| a.z_index.cmp(&b.z_index).then_with(|| a.id.cmp(&b.id)));
        out
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
