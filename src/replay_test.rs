use serde_json::Value;
use uuid::Uuid;

use super::*;

fn run(trace: &str) -> (ReplaySummary, Vec<Value>) {
    let mut out = Vec::new();
    let summary = replay(GestureConfig::default(), trace.as_bytes(), &mut out).unwrap();
    let lines = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    (summary, lines)
}

#[test]
fn tap_trace() {
    let id = Uuid::new_v4();
    let trace = format!(
        "{{\"t\":0,\"kind\":\"down\",\"pointer_id\":1,\"element_id\":\"{id}\",\"x\":0,\"y\":0}}\n\
         {{\"t\":100,\"kind\":\"up\",\"pointer_id\":1,\"x\":0,\"y\":0}}\n"
    );
    let (summary, out) = run(&trace);
    assert_eq!(summary, ReplaySummary { samples: 2, rejected: 0, gestures: 1 });
    assert_eq!(out[0]["type"], "tap");
    assert_eq!(out[0]["t"], 100);
    assert_eq!(out[0]["element_id"], id.to_string());
}

#[test]
fn long_press_fires_before_next_sample() {
    let id = Uuid::new_v4();
    let trace = format!(
        "# held, then released late\n\
         {{\"t\":0,\"kind\":\"down\",\"pointer_id\":1,\"element_id\":\"{id}\",\"x\":0,\"y\":0}}\n\
         \n\
         {{\"t\":600,\"kind\":\"up\",\"pointer_id\":1,\"x\":0,\"y\":0}}\n"
    );
    let (summary, out) = run(&trace);
    assert_eq!(summary.gestures, 1);
    assert_eq!(out[0]["type"], "long_press");
    assert_eq!(out[0]["t"], 500, "reported at the deadline, not at the release");
}

#[test]
fn held_press_at_end_of_trace_fires_at_deadline() {
    let id = Uuid::new_v4();
    let trace = format!("{{\"t\":40,\"kind\":\"down\",\"pointer_id\":1,\"element_id\":\"{id}\",\"x\":0,\"y\":0}}\n");
    let (_, out) = run(&trace);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0]["type"], "long_press");
    assert_eq!(out[0]["t"], 540);
}

#[test]
fn drag_trace_emits_updates_then_end() {
    let id = Uuid::new_v4();
    let trace = format!(
        "{{\"t\":0,\"kind\":\"down\",\"pointer_id\":1,\"element_id\":\"{id}\",\"x\":0,\"y\":0}}\n\
         {{\"t\":50,\"kind\":\"move\",\"pointer_id\":1,\"x\":20,\"y\":0}}\n\
         {{\"t\":900,\"kind\":\"move\",\"pointer_id\":1,\"x\":25,\"y\":5}}\n\
         {{\"t\":950,\"kind\":\"up\",\"pointer_id\":1,\"x\":25,\"y\":5}}\n"
    );
    let (_, out) = run(&trace);
    let kinds: Vec<&str> = out.iter().map(|v| v["type"].as_str().unwrap_or_default()).collect();
    assert_eq!(kinds, vec!["drag_update", "drag_update", "drag_end"]);
    assert_eq!(out[0]["dx"], 20.0);
    assert_eq!(out[1]["dx"], 5.0);
    assert_eq!(out[1]["dy"], 5.0);
}

#[test]
fn out_of_sequence_samples_are_counted() {
    let trace = "{\"t\":0,\"kind\":\"up\",\"pointer_id\":4,\"x\":0,\"y\":0}\n";
    let (summary, out) = run(trace);
    assert_eq!(summary.rejected, 1);
    assert!(out.is_empty());
}

#[test]
fn malformed_line_reports_line_number() {
    let mut out = Vec::new();
    let err = replay(GestureConfig::default(), "\n{not json}\n".as_bytes(), &mut out).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { line: 2, .. }));
}
