//! Host-side editor model: what the template does with each gesture.
//!
//! `Editor` owns the element store, the current selection, and whether the
//! edit panel is open. Gestures come in from the recognizer; the returned
//! [`EditorAction`]s tell the DOM layer what to restyle. Nothing here touches
//! the DOM directly.

#[cfg(test)]
#[path = "editor_test.rs"]
mod editor_test;

use tracing::{debug, info};
use uuid::Uuid;

use crate::consts::{
    DEFAULT_FONT_SIZE_PX, DEFAULT_TEXT_CONTENT, DEFAULT_TEXT_HEIGHT_PX, DEFAULT_TEXT_WIDTH_PX, MIN_ELEMENT_SIZE_PX,
    NEW_ELEMENT_OFFSET_PX,
};
use crate::doc::{ElementId, ElementKind, ElementStore, StylePreset, TemplateElement, TextAlign};
use crate::error::EditorError;
use crate::geometry::{Delta, Point, Size, clamp_to_container};
use crate::recognizer::Gesture;
use crate::scan::{TextScanner, normalize_scanned_text};

/// What the DOM layer should do in response to a gesture.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorAction {
    /// Highlight `id`; open the edit panel when `panel` is set.
    Selected { id: ElementId, panel: bool },
    /// Move `id` to a new top-left position.
    ElementMoved { id: ElementId, x: f64, y: f64 },
    /// A drag on `id` finished at this position.
    DragFinished { id: ElementId, x: f64, y: f64 },
}

/// Text edits submitted from the edit panel.
#[derive(Debug, Clone, Default)]
pub struct TextEdit {
    pub content: Option<String>,
    pub font_size: Option<f64>,
    pub align: Option<TextAlign>,
    pub preset: Option<StylePreset>,
}

/// An in-flight drag: where the element started and how far the finger has gone.
#[derive(Debug, Clone, Copy)]
struct DragTrack {
    id: ElementId,
    origin: Point,
    travelled: Delta,
}

/// The print template being edited.
pub struct Editor {
    store: ElementStore,
    container: Size,
    selected: Option<ElementId>,
    panel_open: bool,
    drag: Option<DragTrack>,
}

impl Editor {
    /// Create an empty template of the given size.
    #[must_use]
    pub fn new(container: Size) -> Self {
        Self { store: ElementStore::new(), container, selected: None, panel_open: false, drag: None }
    }

    // --- Gestures ---

    /// React to one recognizer classification.
    pub fn apply(&mut self, gesture: Gesture) -> Vec<EditorAction> {
        let id = gesture.element_id();
        if !self.store.contains(&id) {
            debug!(%id, ?gesture, "gesture for unknown element ignored");
            return Vec::new();
        }

        match gesture {
            Gesture::Tap { element_id } => {
                self.drag = None;
                self.select(element_id, false);
                vec![EditorAction::Selected { id: element_id, panel: false }]
            }
            Gesture::LongPress { element_id } => {
                self.drag = None;
                self.select(element_id, true);
                vec![EditorAction::Selected { id: element_id, panel: true }]
            }
            Gesture::DragUpdate { element_id, dx, dy } => self.drag_by(element_id, Delta::new(dx, dy)),
            Gesture::DragEnd { element_id } => self.finish_drag(element_id),
        }
    }

    fn drag_by(&mut self, id: ElementId, delta: Delta) -> Vec<EditorAction> {
        let mut actions = Vec::new();
        let Some((origin, size)) = self.store.get(&id).map(|e| (e.position(), e.size())) else {
            return actions;
        };

        let mut track = match self.drag {
            Some(track) if track.id == id => track,
            _ => {
                self.select(id, false);
                actions.push(EditorAction::Selected { id, panel: false });
                DragTrack { id, origin, travelled: Delta::default() }
            }
        };
        track.travelled.dx += delta.dx;
        track.travelled.dy += delta.dy;
        self.drag = Some(track);

        let wanted = Point::new(track.origin.x + track.travelled.dx, track.origin.y + track.travelled.dy);
        let next = clamp_to_container(wanted, size, self.container);
        if let Some(element) = self.store.get_mut(&id) {
            if element.position() != next {
                element.x = next.x;
                element.y = next.y;
                actions.push(EditorAction::ElementMoved { id, x: next.x, y: next.y });
            }
        }
        actions
    }

    fn finish_drag(&mut self, id: ElementId) -> Vec<EditorAction> {
        match self.drag.take() {
            Some(track) if track.id == id => {}
            other => {
                self.drag = other;
                debug!(%id, "drag end without a tracked drag");
                return Vec::new();
            }
        }
        let Some(element) = self.store.get(&id) else {
            return Vec::new();
        };
        debug!(%id, x = element.x, y = element.y, "element moved");
        vec![EditorAction::DragFinished { id, x: element.x, y: element.y }]
    }

    /// Forget the in-flight drag after the browser cancelled the contact.
    ///
    /// A cancelled drag never sees `DragEnd`; the element keeps the position
    /// it was last moved to and the next drag starts from there.
    pub fn cancel_drag(&mut self) {
        if let Some(track) = self.drag.take() {
            debug!(id = %track.id, "drag cancelled");
        }
    }

    // --- Selection ---

    /// Select `id`, optionally opening the edit panel. Returns false for unknown ids.
    pub fn select(&mut self, id: ElementId, open_panel: bool) -> bool {
        if !self.store.contains(&id) {
            return false;
        }
        self.selected = Some(id);
        self.panel_open = open_panel;
        true
    }

    /// Clear the selection and close the panel (a tap on the empty template).
    pub fn deselect(&mut self) {
        self.selected = None;
        self.panel_open = false;
    }

    // --- Element lifecycle ---

    /// Add a text block at the default position. `None` uses placeholder content.
    pub fn add_text(&mut self, content: Option<&str>) -> ElementId {
        let element = TemplateElement {
            id: Uuid::new_v4(),
            kind: ElementKind::Text {
                content: content.unwrap_or(DEFAULT_TEXT_CONTENT).to_string(),
                font_size: DEFAULT_FONT_SIZE_PX,
                align: TextAlign::Left,
                bold: false,
                italic: false,
            },
            x: NEW_ELEMENT_OFFSET_PX,
            y: NEW_ELEMENT_OFFSET_PX,
            width: DEFAULT_TEXT_WIDTH_PX,
            height: DEFAULT_TEXT_HEIGHT_PX,
            z_index: 0,
        };
        self.insert_placed(element)
    }

    /// Add an image block at the default position.
    pub fn add_image(&mut self, src: impl Into<String>, size: Size) -> ElementId {
        let element = TemplateElement {
            id: Uuid::new_v4(),
            kind: ElementKind::Image { src: src.into() },
            x: NEW_ELEMENT_OFFSET_PX,
            y: NEW_ELEMENT_OFFSET_PX,
            width: size.width.max(MIN_ELEMENT_SIZE_PX),
            height: size.height.max(MIN_ELEMENT_SIZE_PX),
            z_index: 0,
        };
        self.insert_placed(element)
    }

    /// Run the scanner and drop whatever it read onto the template as text.
    ///
    /// The new block is selected with its edit panel open so the user can fix
    /// recognition mistakes straight away.
    pub async fn insert_scanned<T: TextScanner>(&mut self, scanner: &mut T) -> Result<ElementId, EditorError> {
        let raw = scanner.scan().await?;
        let text = normalize_scanned_text(&raw)?;
        let id = self.add_text(Some(&text));
        self.select(id, true);
        info!(%id, chars = text.chars().count(), "scanned text inserted");
        Ok(id)
    }

    /// Delete the selected element, if any.
    pub fn delete_selected(&mut self) -> Option<ElementId> {
        let id = self.selected.take()?;
        self.panel_open = false;
        if self.drag.is_some_and(|d| d.id == id) {
            self.drag = None;
        }
        self.store.remove(&id).map(|e| e.id)
    }

    /// Resize an image block, never below the minimum block size.
    ///
    /// Text blocks size to their content and have no resize handle.
    pub fn resize(&mut self, id: ElementId, size: Size) -> Result<Size, EditorError> {
        let element = self.store.get_mut(&id).ok_or(EditorError::UnknownElement(id))?;
        if element.is_text() {
            return Err(EditorError::NotImage(id));
        }
        element.width = size.width.max(MIN_ELEMENT_SIZE_PX);
        element.height = size.height.max(MIN_ELEMENT_SIZE_PX);
        Ok(element.size())
    }

    /// Apply edit-panel changes to a text block and close the panel.
    pub fn update_text(&mut self, id: ElementId, edit: TextEdit) -> Result<(), EditorError> {
        let element = self.store.get_mut(&id).ok_or(EditorError::UnknownElement(id))?;
        let ElementKind::Text { content, font_size, align, .. } = &mut element.kind else {
            return Err(EditorError::NotText(id));
        };
        if let Some(new_content) = edit.content {
            *content = new_content;
        }
        if let Some(size) = edit.font_size {
            *font_size = size;
        }
        if let Some(new_align) = edit.align {
            *align = new_align;
        }
        if let Some(preset) = edit.preset {
            preset.apply(&mut element.kind);
        }
        if self.selected == Some(id) {
            self.panel_open = false;
        }
        Ok(())
    }

    /// Swap the source of an image block.
    pub fn replace_image(&mut self, id: ElementId, new_src: impl Into<String>) -> Result<(), EditorError> {
        let element = self.store.get_mut(&id).ok_or(EditorError::UnknownElement(id))?;
        match &mut element.kind {
            ElementKind::Image { src } => {
                *src = new_src.into();
                Ok(())
            }
            ElementKind::Text { .. } => Err(EditorError::NotImage(id)),
        }
    }

    /// Restore a saved template.
    pub fn load_snapshot(&mut self, elements: Vec<TemplateElement>) {
        self.store.load_snapshot(elements);
        self.deselect();
        self.drag = None;
    }

    /// Elements in stacking order, ready to hand to the persistence collaborator.
    #[must_use]
    pub fn snapshot(&self) -> Vec<TemplateElement> {
        self.store.sorted().into_iter().cloned().collect()
    }

    fn insert_placed(&mut self, mut element: TemplateElement) -> ElementId {
        let placed = clamp_to_container(element.position(), element.size(), self.container);
        element.x = placed.x;
        element.y = placed.y;
        let id = element.id;
        self.store.insert(element);
        debug!(%id, "element added");
        id
    }

    // --- Queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ElementId> {
        self.selected
    }

    #[must_use]
    pub fn panel_open(&self) -> bool {
        self.panel_open
    }

    /// Preset to pre-fill the open edit panel with, from the selected text block's styling.
    #[must_use]
    pub fn panel_preset(&self) -> Option<StylePreset> {
        if !self.panel_open {
            return None;
        }
        let element = self.store.get(&self.selected?)?;
        StylePreset::detect(&element.kind)
    }

    #[must_use]
    pub fn container(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn element(&self, id: &ElementId) -> Option<&TemplateElement> {
        self.store.get(id)
    }

    #[must_use]
    pub fn elements(&self) -> Vec<&TemplateElement> {
        self.store.sorted()
    }
}
