use serde_json::json;
use uuid::Uuid;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_bool, get_optional_str, get_required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::metrics;
use crate::model::{Snapshot, Student};
use crate::view_state::{StudentsEvent, StudentsScreen};

/// Filter chips shown above the roster.
const CLASS_FILTERS: [&str; 4] = ["All", "Grade 10", "Grade 11", "Grade 12"];

fn student_card(s: &Student) -> serde_json::Value {
    json!({
        "id": s.id,
        "name": s.name,
        "class": s.class_label,
        "parentName": s.parent_name,
        "attendanceRate": metrics::attendance_rate(s),
        "paymentStatus": s.payment_status.label(),
        "paymentStatusColor": s.payment_status.badge_color(),
        "performance": s.performance.label(),
        "performanceColor": s.performance.badge_color(),
        "avatar": s.avatar,
        "subjects": s.subjects,
    })
}

fn student_detail(s: &Student) -> serde_json::Value {
    let mut d = student_card(s);
    d["phone"] = json!(s.phone);
    d["email"] = json!(s.email);
    d["address"] = json!(s.address);
    d["enrollmentDate"] = json!(s.enrollment_date);
    d["totalClasses"] = json!(s.total_classes);
    d["attendedClasses"] = json!(s.attended_classes);
    d["lastPayment"] = json!(s.last_payment);
    d
}

fn students_model(snapshot: &Snapshot, screen: &StudentsScreen) -> serde_json::Value {
    let filtered = metrics::filter_students(
        &snapshot.students,
        &screen.search_query,
        &screen.class_filter,
    );
    let cards: Vec<serde_json::Value> = filtered.iter().map(|s| student_card(s)).collect();
    // Summary counts are dataset-wide; the search/chip filters do not shrink them.
    let counts = metrics::fee_status_counts(&snapshot.students);

    let selected = screen.selected_student.as_ref().and_then(|id| {
        snapshot
            .students
            .iter()
            .find(|s| &s.id == id)
            .map(student_detail)
    });

    json!({
        "students": cards,
        "summary": counts,
        "classFilters": CLASS_FILTERS,
        "searchQuery": screen.search_query,
        "classFilter": screen.class_filter,
        "selected": selected,
        "showAddModal": screen.show_add_modal,
    })
}

fn with_snapshot(
    state: &AppState,
    build: impl FnOnce(&Snapshot) -> serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return Err(HandlerErr::new("no_snapshot", "load a snapshot first"));
    };
    Ok(build(snapshot))
}

fn handle_students_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    match with_snapshot(state, |snap| students_model(snap, &state.screens.students)) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn apply_and_render(
    state: &mut AppState,
    req: &Request,
    event: StudentsEvent,
) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    state.screens.students = state.screens.students.clone().apply(event);
    match with_snapshot(state, |snap| students_model(snap, &state.screens.students)) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

fn handle_students_set_query(state: &mut AppState, req: &Request) -> serde_json::Value {
    let query = match get_required_str(&req.params, "query") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, StudentsEvent::SearchChanged(query))
}

fn handle_students_set_class_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    let filter = match get_required_str(&req.params, "filter") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, StudentsEvent::ClassFilterChanged(filter))
}

fn handle_students_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let student_id = match get_optional_str(&req.params, "studentId") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    if let Some(id) = student_id.as_ref() {
        let Some(snapshot) = state.snapshot.as_ref() else {
            return err(&req.id, "no_snapshot", "load a snapshot first", None);
        };
        if !snapshot.students.iter().any(|s| &s.id == id) {
            return err(&req.id, "not_found", "student not found", None);
        }
    }
    apply_and_render(state, req, StudentsEvent::StudentSelected(student_id))
}

fn handle_students_toggle_add_modal(state: &mut AppState, req: &Request) -> serde_json::Value {
    let visible = match get_bool(&req.params, "visible") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, StudentsEvent::AddModalToggled(visible))
}

// Acknowledgement only; the roster itself never changes mid-session.
fn handle_students_add(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    let name = req
        .params
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    let parent_name = req
        .params
        .get("parentName")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    let phone = req
        .params
        .get("phone")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    if name.is_empty() || parent_name.is_empty() || phone.is_empty() {
        return err(
            &req.id,
            "bad_params",
            "name, parentName and phone are required",
            None,
        );
    }

    let student_id = Uuid::new_v4().to_string();
    state.screens.students = state
        .screens
        .students
        .clone()
        .apply(StudentsEvent::AddModalToggled(false));
    ok(
        &req.id,
        json!({
            "studentId": student_id,
            "name": name,
            "message": format!("New student \"{}\" has been added.", name),
        }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "students.list" => Some(handle_students_list(state, req)),
        "students.setQuery" => Some(handle_students_set_query(state, req)),
        "students.setClassFilter" => Some(handle_students_set_class_filter(state, req)),
        "students.select" => Some(handle_students_select(state, req)),
        "students.toggleAddModal" => Some(handle_students_toggle_add_modal(state, req)),
        "students.add" => Some(handle_students_add(state, req)),
        _ => None,
    }
}
