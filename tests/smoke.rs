use serde_json::Value;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn binary_finishes_scenarios_with_distant_ticks() {
    let dir = std::env::temp_dir().join(format!(
        "scenekit-smoke-{}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::create_dir_all(&dir).expect("create temp dir");
    let scenario = dir.join("sparse.json");
    let log = dir.join("events.jsonl");
    std::fs::write(
        &scenario,
        r#"{
            "steps": [
                {"tick": 0, "event": {"type": "touch_start", "id": 1, "x": 0, "y": 0}},
                {"tick": 1, "event": {"type": "touch_move", "id": 1, "x": 0, "y": 8}},
                {"tick": 18446744073709551615, "event": {"type": "touch_end", "id": 1}}
            ]
        }"#,
    )
    .expect("write scenario");

    let output = Command::new(env!("CARGO_BIN_EXE_scenekit"))
        .args([
            "--scenario",
            scenario.to_str().unwrap(),
            "--event-log",
            log.to_str().unwrap(),
        ])
        .env("RUST_LOG", "warn")
        .output()
        .expect("spawn scenekit");
    assert!(
        output.status.success(),
        "scenekit failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8(output.stdout).expect("utf8 stdout");
    let summary: Value = serde_json::from_str(stdout.lines().last().expect("summary line"))
        .expect("summary is json");
    assert_eq!(summary["ticks"], u64::MAX);

    let events = std::fs::read_to_string(&log).expect("event log written");
    let inputs = events
        .lines()
        .filter(|line| line.contains("\"input\""))
        .count();
    assert_eq!(inputs, 3);
    assert!(events.lines().last().unwrap().contains("\"summary\""));

    let _ = std::fs::remove_dir_all(&dir);
}
