#![allow(clippy::float_cmp)]

use super::*;

/// # Safety
/// Tests touching the environment only set/remove the `GESTURE_*` keys and
/// must not run concurrently with each other.
unsafe fn clear_gesture_env() {
    unsafe {
        std::env::remove_var("GESTURE_LONG_PRESS_MS");
        std::env::remove_var("GESTURE_MOVE_THRESHOLD_PX");
        std::env::remove_var("GESTURE_TAP_MAX_MS");
    }
}

#[test]
fn default_is_touch_profile() {
    let cfg = GestureConfig::default();
    assert_eq!(cfg.long_press_ms, 500);
    assert_eq!(cfg.move_threshold_px, 10.0);
    assert_eq!(cfg.tap_max_ms, 300);
    assert_eq!(cfg, DeviceProfile::Touch.config());
}

#[test]
fn profiles_differ_where_expected() {
    assert_eq!(DeviceProfile::Mouse.config().move_threshold_px, 5.0);
    assert_eq!(DeviceProfile::LenientTouch.config().long_press_ms, 1000);
    for profile in [DeviceProfile::Mouse, DeviceProfile::Touch, DeviceProfile::LenientTouch] {
        assert!(profile.config().validate().is_ok(), "{profile:?} preset should validate");
    }
}

#[test]
fn validate_rejects_zero_long_press() {
    let cfg = GestureConfig { long_press_ms: 0, ..GestureConfig::default() };
    assert!(matches!(cfg.validate(), Err(GestureError::InvalidConfig(_))));
}

#[test]
fn validate_rejects_bad_threshold() {
    for bad in [0.0, -3.0, f64::NAN, f64::INFINITY] {
        let cfg = GestureConfig { move_threshold_px: bad, ..GestureConfig::default() };
        assert!(cfg.validate().is_err(), "threshold {bad} should be rejected");
    }
}

#[test]
fn validate_rejects_tap_longer_than_long_press() {
    let cfg = GestureConfig { long_press_ms: 200, tap_max_ms: 300, ..GestureConfig::default() };
    let err = cfg.validate().unwrap_err();
    assert!(err.to_string().contains("tap_max_ms (300)"));
}

#[test]
fn deserialize_fills_missing_fields_with_defaults() {
    let cfg: GestureConfig = serde_json::from_str(r#"{"long_press_ms": 800}"#).unwrap();
    assert_eq!(cfg.long_press_ms, 800);
    assert_eq!(cfg.tap_max_ms, 300);
    assert_eq!(cfg.move_threshold_px, 10.0);
}

#[test]
fn profile_serde_is_snake_case() {
    let json = serde_json::to_string(&DeviceProfile::LenientTouch).unwrap();
    assert_eq!(json, "\"lenient_touch\"");
}

// Env tests are folded into one function so they never race each other.
#[test]
fn from_env_reads_overrides_and_falls_back() {
    unsafe {
        clear_gesture_env();
    }
    assert_eq!(GestureConfig::from_env().unwrap(), GestureConfig::default());

    unsafe {
        std::env::set_var("GESTURE_LONG_PRESS_MS", "750");
        std::env::set_var("GESTURE_MOVE_THRESHOLD_PX", "6.5");
        std::env::set_var("GESTURE_TAP_MAX_MS", "not-a-number");
    }
    let cfg = GestureConfig::from_env().unwrap();
    assert_eq!(cfg.long_press_ms, 750);
    assert_eq!(cfg.move_threshold_px, 6.5);
    assert_eq!(cfg.tap_max_ms, 300);

    unsafe {
        std::env::set_var("GESTURE_LONG_PRESS_MS", "100");
    }
    assert!(GestureConfig::from_env().is_err());

    // Unset keys keep the profile's values.
    unsafe {
        clear_gesture_env();
        std::env::set_var("GESTURE_TAP_MAX_MS", "250");
    }
    let cfg = DeviceProfile::Mouse.config().with_env_overrides().unwrap();
    assert_eq!(cfg.move_threshold_px, 5.0);
    assert_eq!(cfg.tap_max_ms, 250);

    unsafe { clear_gesture_env() };
}
