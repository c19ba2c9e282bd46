#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn text_element(content: &str) -> TemplateElement {
    TemplateElement {
        id: Uuid::new_v4(),
        kind: ElementKind::Text {
            content: content.into(),
            font_size: 14.0,
            align: TextAlign::Left,
            bold: false,
            italic: false,
        },
        x: 50.0,
        y: 50.0,
        width: 160.0,
        height: 24.0,
        z_index: 0,
    }
}

fn image_element() -> TemplateElement {
    TemplateElement {
        id: Uuid::new_v4(),
        kind: ElementKind::Image { src: "logo.png".into() },
        x: 0.0,
        y: 0.0,
        width: 120.0,
        height: 80.0,
        z_index: 0,
    }
}

#[test]
fn insert_assigns_increasing_z() {
    let mut store = ElementStore::new();
    let a = text_element("a");
    let b = image_element();
    store.insert(a.clone());
    store.insert(b.clone());
    assert_eq!(store.get(&a.id).unwrap().z_index, 0);
    assert_eq!(store.get(&b.id).unwrap().z_index, 1);
    let order: Vec<ElementId> = store.sorted().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![a.id, b.id]);
}

#[test]
fn remove_returns_element() {
    let mut store = ElementStore::new();
    let a = text_element("a");
    store.insert(a.clone());
    assert!(store.contains(&a.id));
    assert_eq!(store.remove(&a.id).map(|e| e.id), Some(a.id));
    assert!(store.is_empty());
    assert!(store.remove(&a.id).is_none());
}

#[test]
fn snapshot_keeps_z_and_continues_above_it() {
    let mut store = ElementStore::new();
    let mut a = text_element("a");
    a.z_index = 7;
    let mut b = image_element();
    b.z_index = 3;
    store.load_snapshot(vec![a.clone(), b.clone()]);
    assert_eq!(store.len(), 2);
    let order: Vec<ElementId> = store.sorted().iter().map(|e| e.id).collect();
    assert_eq!(order, vec![b.id, a.id]);

    let c = text_element("c");
    store.insert(c.clone());
    assert_eq!(store.get(&c.id).unwrap().z_index, 8);
}

#[test]
fn element_serializes_flat_with_type_tag() {
    let el = text_element("hello");
    let value = serde_json::to_value(&el).unwrap();
    assert_eq!(value["type"], "text");
    assert_eq!(value["content"], "hello");
    assert_eq!(value["align"], "left");
    assert_eq!(value["x"], 50.0);
}

#[test]
fn element_deserializes_from_stored_json() {
    let id = Uuid::new_v4();
    let raw = json!({
        "id": id,
        "type": "image",
        "src": "data:image/png;base64,AAAA",
        "x": 10.0,
        "y": 20.0,
        "width": 100.0,
        "height": 60.0,
        "z_index": 2,
    });
    let el: TemplateElement = serde_json::from_value(raw).unwrap();
    assert_eq!(el.id, id);
    assert!(!el.is_text());
    assert_eq!(el.position(), Point::new(10.0, 20.0));
    assert_eq!(el.size(), Size::new(100.0, 60.0));
}

#[test]
fn text_without_style_flags_deserializes() {
    let raw = json!({
        "id": Uuid::new_v4(),
        "type": "text",
        "content": "old template",
        "font_size": 16.0,
        "align": "center",
        "x": 0.0,
        "y": 0.0,
        "width": 100.0,
        "height": 20.0,
        "z_index": 0,
    });
    let el: TemplateElement = serde_json::from_value(raw).unwrap();
    assert!(matches!(el.kind, ElementKind::Text { bold: false, italic: false, align: TextAlign::Center, .. }));
}

#[test]
fn preset_apply_then_detect_agrees() {
    for preset in [StylePreset::Title, StylePreset::Subtitle, StylePreset::Body, StylePreset::Small] {
        let mut kind = text_element("x").kind;
        preset.apply(&mut kind);
        assert_eq!(StylePreset::detect(&kind), Some(preset), "{preset:?}");
    }
}

#[test]
fn emphasis_keeps_size_and_sets_both_flags() {
    let mut kind = text_element("x").kind;
    StylePreset::Title.apply(&mut kind);
    StylePreset::Emphasis.apply(&mut kind);
    assert!(matches!(kind, ElementKind::Text { font_size, bold: true, italic: true, .. } if font_size == 24.0));
}

#[test]
fn preset_ignores_images() {
    let mut kind = image_element().kind;
    let before = kind.clone();
    StylePreset::Title.apply(&mut kind);
    assert_eq!(kind, before);
    assert_eq!(StylePreset::detect(&kind), None);
}
