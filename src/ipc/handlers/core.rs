use std::path::Path;

use anyhow::Context;
use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::model::Snapshot;
use crate::seed;
use crate::view_state::Screens;

fn handle_health(state: &mut AppState, req: &Request) -> serde_json::Value {
    ok(
        &req.id,
        json!({
            "version": env!("CARGO_PKG_VERSION"),
            "snapshotLoaded": state.snapshot.is_some()
        }),
    )
}

fn load_snapshot_file(path: &Path) -> anyhow::Result<Snapshot> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read snapshot file {}", path.display()))?;
    let snapshot = serde_json::from_str(&text)
        .with_context(|| format!("parse snapshot json {}", path.display()))?;
    Ok(snapshot)
}

fn install(state: &mut AppState, snapshot: Snapshot, req: &Request) -> serde_json::Value {
    let counts = json!({
        "classrooms": snapshot.classrooms.len(),
        "students": snapshot.students.len(),
        "paymentRequests": snapshot.payment_requests.len(),
        "recentPayments": snapshot.recent_payments.len(),
    });
    state.snapshot = Some(snapshot);
    // A new dataset invalidates every screen's transient state.
    state.screens = Screens::default();
    ok(&req.id, json!({ "loaded": true, "counts": counts }))
}

fn handle_snapshot_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    if let Some(data) = req.params.get("data") {
        return match serde_json::from_value::<Snapshot>(data.clone()) {
            Ok(snapshot) => install(state, snapshot, req),
            Err(e) => err(&req.id, "snapshot_load_failed", e.to_string(), None),
        };
    }
    let Some(path) = req.params.get("path").and_then(|v| v.as_str()) else {
        return err(&req.id, "bad_params", "missing params.path or params.data", None);
    };
    match load_snapshot_file(Path::new(path)) {
        Ok(snapshot) => install(state, snapshot, req),
        Err(e) => err(&req.id, "snapshot_load_failed", format!("{e:#}"), None),
    }
}

fn handle_snapshot_load_demo(state: &mut AppState, req: &Request) -> serde_json::Value {
    install(state, seed::demo_snapshot(), req)
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "health" => Some(handle_health(state, req)),
        "snapshot.load" => Some(handle_snapshot_load(state, req)),
        "snapshot.loadDemo" => Some(handle_snapshot_load_demo(state, req)),
        _ => None,
    }
}
