use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::types::{AppState, Request};
use crate::metrics;
use crate::model::{ClassStatus, Snapshot};

fn dashboard_model(snapshot: &Snapshot) -> serde_json::Value {
    let active_classes = snapshot
        .classrooms
        .iter()
        .filter(|c| c.status == ClassStatus::Active)
        .count();
    let classes_today = snapshot
        .classrooms
        .iter()
        .filter(|c| c.next_class.starts_with("Today"))
        .count();
    let revenue = metrics::revenue_totals(&snapshot.payment_requests);

    let todays_classes: Vec<serde_json::Value> = snapshot
        .classrooms
        .iter()
        .map(|c| {
            json!({
                "id": c.id,
                "name": c.name,
                "timing": c.timing,
                "nextClass": c.next_class,
                "studentCount": c.student_count,
                "status": c.status.label(),
                "statusColor": c.status.badge_color(),
            })
        })
        .collect();

    json!({
        "teacher": {
            "name": snapshot.profile.name,
            "avatar": snapshot.profile.avatar,
        },
        "stats": {
            "activeStudents": snapshot.students.len(),
            "activeClasses": active_classes,
            "monthlyRevenue": revenue.collected,
            "classesToday": classes_today,
        },
        "todaysClasses": todays_classes,
    })
}

fn handle_dashboard_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    ok(&req.id, dashboard_model(snapshot))
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "dashboard.open" => Some(handle_dashboard_open(state, req)),
        _ => None,
    }
}
