use uuid::Uuid;

use super::*;
use crate::doc::ElementId;

const QUIET: Duration = Duration::from_secs(5);

fn down(element_id: ElementId) -> PointerInput {
    PointerInput::Down { pointer_id: 1, element_id, x: 0.0, y: 0.0 }
}

fn up(x: f64, y: f64) -> PointerInput {
    PointerInput::Up { pointer_id: 1, x, y }
}

async fn sleep_ms(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

#[tokio::test(start_paused = true)]
async fn quick_release_is_tap() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    let id = Uuid::new_v4();
    h.input.send(down(id)).await.unwrap();
    sleep_ms(100).await;
    h.input.send(up(0.0, 0.0)).await.unwrap();
    assert_eq!(h.gestures.recv().await, Some(Gesture::Tap { element_id: id }));
}

#[tokio::test(start_paused = true)]
async fn hold_fires_long_press_on_its_own() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    let id = Uuid::new_v4();
    let start = Instant::now();
    h.input.send(down(id)).await.unwrap();
    assert_eq!(h.gestures.recv().await, Some(Gesture::LongPress { element_id: id }));
    assert_eq!(start.elapsed(), Duration::from_millis(500));

    sleep_ms(100).await;
    h.input.send(up(0.0, 0.0)).await.unwrap();
    assert!(tokio::time::timeout(QUIET, h.gestures.recv()).await.is_err(), "release after long-press must be silent");
}

#[tokio::test(start_paused = true)]
async fn drag_cancels_long_press() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    let id = Uuid::new_v4();
    h.input.send(down(id)).await.unwrap();
    sleep_ms(50).await;
    h.input.send(PointerInput::Move { pointer_id: 1, x: 20.0, y: 0.0 }).await.unwrap();
    assert_eq!(h.gestures.recv().await, Some(Gesture::DragUpdate { element_id: id, dx: 20.0, dy: 0.0 }));

    // Sit still well past the long-press duration, then lift.
    sleep_ms(2_000).await;
    h.input.send(up(20.0, 0.0)).await.unwrap();
    assert_eq!(h.gestures.recv().await, Some(Gesture::DragEnd { element_id: id }));
}

#[tokio::test(start_paused = true)]
async fn slow_stationary_release_is_silent() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    h.input.send(down(Uuid::new_v4())).await.unwrap();
    sleep_ms(400).await;
    h.input.send(up(0.0, 0.0)).await.unwrap();
    assert!(tokio::time::timeout(QUIET, h.gestures.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn cancel_disarms_timer() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    h.input.send(down(Uuid::new_v4())).await.unwrap();
    sleep_ms(100).await;
    h.input.send(PointerInput::Cancel { pointer_id: 1 }).await.unwrap();
    assert!(tokio::time::timeout(QUIET, h.gestures.recv()).await.is_err());
}

#[tokio::test(start_paused = true)]
async fn bad_input_is_skipped() {
    let mut h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    let id = Uuid::new_v4();
    h.input.send(up(0.0, 0.0)).await.unwrap();
    h.input.send(down(id)).await.unwrap();
    sleep_ms(10).await;
    h.input.send(up(0.0, 0.0)).await.unwrap();
    assert_eq!(h.gestures.recv().await, Some(Gesture::Tap { element_id: id }));
}

#[tokio::test(start_paused = true)]
async fn dropping_input_stops_task() {
    let h = spawn_gesture_driver(GestureConfig::default(), 8).unwrap();
    drop(h.input);
    assert!(h.task.await.is_ok());
}

#[tokio::test]
async fn invalid_config_is_rejected() {
    let cfg = GestureConfig { tap_max_ms: 900, ..GestureConfig::default() };
    assert!(spawn_gesture_driver(cfg, 8).is_err());
}

#[tokio::test]
async fn zero_capacity_is_rejected() {
    assert!(matches!(spawn_gesture_driver(GestureConfig::default(), 0), Err(GestureError::InvalidConfig(_))));
}
