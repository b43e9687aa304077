use serde_json::json;
use uuid::Uuid;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_bool, get_optional_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::metrics;
use crate::model::{Classroom, Snapshot};
use crate::view_state::{ClassroomsEvent, ClassroomsScreen, ClassroomsTab};

fn classroom_card(c: &Classroom) -> serde_json::Value {
    json!({
        "id": c.id,
        "name": c.name,
        "subject": c.subject,
        "studentCount": c.student_count,
        "mode": c.mode.label(),
        "modeColor": c.mode.badge_color(),
        "timing": c.timing,
        "nextClass": c.next_class,
        "status": c.status.label(),
        "statusColor": c.status.badge_color(),
        "image": c.image,
    })
}

// Present/absent totals come from attended vs. missed classes across the
// roster; there is no separate per-day attendance log in the snapshot.
fn attendance_model(snapshot: &Snapshot) -> serde_json::Value {
    let present: i64 = snapshot.students.iter().map(|s| s.attended_classes).sum();
    let absent: i64 = snapshot
        .students
        .iter()
        .map(|s| s.total_classes - s.attended_classes)
        .sum();
    let roster: Vec<serde_json::Value> = snapshot
        .students
        .iter()
        .map(|s| {
            json!({
                "id": s.id,
                "name": s.name,
                "class": s.class_label,
                "attendedClasses": s.attended_classes,
                "totalClasses": s.total_classes,
                "attendanceRate": metrics::attendance_rate(s),
            })
        })
        .collect();
    json!({
        "present": present,
        "absent": absent,
        "students": roster,
    })
}

fn classrooms_model(snapshot: &Snapshot, screen: &ClassroomsScreen) -> serde_json::Value {
    let cards: Vec<serde_json::Value> = snapshot.classrooms.iter().map(classroom_card).collect();

    let detail = screen.selected_class.as_ref().and_then(|id| {
        snapshot.classrooms.iter().find(|c| &c.id == id).map(|c| {
            let tab = screen.active_tab.unwrap_or(ClassroomsTab::Stream);
            let mut d = classroom_card(c);
            d["location"] = json!(c.location);
            d["meetingLink"] = json!(c.meeting_link);
            d["activeTab"] = json!(tab.as_str());
            match tab {
                ClassroomsTab::Stream => {}
                ClassroomsTab::Materials => {
                    let materials: Vec<serde_json::Value> = snapshot
                        .materials
                        .iter()
                        .map(|m| {
                            json!({
                                "id": m.id,
                                "title": m.title,
                                "type": m.kind.label(),
                                "uploadDate": m.upload_date,
                                "size": m.size,
                            })
                        })
                        .collect();
                    d["materials"] = json!(materials);
                }
                ClassroomsTab::Attendance => {
                    d["attendance"] = attendance_model(snapshot);
                }
            }
            d
        })
    });

    json!({
        "classrooms": cards,
        "selected": detail,
        "showCreateModal": screen.show_create_modal,
    })
}

fn handle_classrooms_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    ok(&req.id, classrooms_model(snapshot, &state.screens.classrooms))
}

fn classrooms_open(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let class_id = get_optional_str(params, "classId")?;
    {
        let Some(snapshot) = state.snapshot.as_ref() else {
            return Err(HandlerErr::new("no_snapshot", "load a snapshot first"));
        };
        if let Some(id) = class_id.as_ref() {
            if !snapshot.classrooms.iter().any(|c| &c.id == id) {
                return Err(HandlerErr::new("not_found", "classroom not found"));
            }
        }
    }
    state.screens.classrooms = state
        .screens
        .classrooms
        .clone()
        .apply(ClassroomsEvent::ClassSelected(class_id));
    let Some(snapshot) = state.snapshot.as_ref() else {
        return Err(HandlerErr::new("no_snapshot", "load a snapshot first"));
    };
    Ok(classrooms_model(snapshot, &state.screens.classrooms))
}

fn handle_classrooms_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    match classrooms_open(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_classrooms_set_tab(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    let tab = req
        .params
        .get("tab")
        .and_then(|v| v.as_str())
        .map(ClassroomsTab::parse)
        .unwrap_or(ClassroomsTab::Stream);
    state.screens.classrooms = state
        .screens
        .classrooms
        .clone()
        .apply(ClassroomsEvent::TabChanged(tab));
    ok(&req.id, classrooms_model(snapshot, &state.screens.classrooms))
}

fn handle_classrooms_toggle_create_modal(
    state: &mut AppState,
    req: &Request,
) -> serde_json::Value {
    let visible = match get_bool(&req.params, "visible") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    state.screens.classrooms = state
        .screens
        .classrooms
        .clone()
        .apply(ClassroomsEvent::CreateModalToggled(visible));
    ok(&req.id, json!({ "showCreateModal": visible }))
}

// Create is an acknowledgement only: the snapshot is immutable for the
// session, so the minted class never appears in subsequent lists.
fn handle_classrooms_create(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    let name = match req.params.get("name").and_then(|v| v.as_str()) {
        Some(v) => v.trim().to_string(),
        None => return err(&req.id, "bad_params", "missing name", None),
    };
    let subject = match req.params.get("subject").and_then(|v| v.as_str()) {
        Some(v) => v.trim().to_string(),
        None => return err(&req.id, "bad_params", "missing subject", None),
    };
    if name.is_empty() || subject.is_empty() {
        return err(&req.id, "bad_params", "name and subject must not be empty", None);
    }

    let class_id = Uuid::new_v4().to_string();
    state.screens.classrooms = state
        .screens
        .classrooms
        .clone()
        .apply(ClassroomsEvent::CreateModalToggled(false));
    ok(
        &req.id,
        json!({
            "classId": class_id,
            "name": name,
            "subject": subject,
            "message": format!("New class \"{}\" has been created.", name),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "classrooms.list" => Some(handle_classrooms_list(state, req)),
        "classrooms.open" => Some(handle_classrooms_open(state, req)),
        "classrooms.setTab" => Some(handle_classrooms_set_tab(state, req)),
        "classrooms.toggleCreateModal" => Some(handle_classrooms_toggle_create_modal(state, req)),
        "classrooms.create" => Some(handle_classrooms_create(state, req)),
        _ => None,
    }
}
