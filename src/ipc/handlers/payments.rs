use chrono::Local;
use serde_json::json;
use uuid::Uuid;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{get_bool, get_optional_str, get_required_i64, get_required_str, HandlerErr};
use crate::ipc::types::{AppState, Request};
use crate::metrics;
use crate::model::{Payment, PaymentRequest, Snapshot};
use crate::view_state::{PaymentsEvent, PaymentsScreen, PaymentsTab};

/// Status chips above the requests tab.
const STATUS_FILTERS: [&str; 4] = ["All", "Active", "Completed", "Overdue"];

fn request_card(r: &PaymentRequest) -> serde_json::Value {
    let completion = metrics::request_completion(r);
    json!({
        "id": r.id,
        "title": r.title,
        "amount": r.amount,
        "dueDate": r.due_date,
        "studentsCount": r.students_count,
        "paidCount": r.paid_count,
        "status": r.status.label(),
        "statusColor": r.status.badge_color(),
        "completionPercent": completion.percent,
        "fillRatio": completion.fill_ratio,
    })
}

fn request_detail(r: &PaymentRequest) -> serde_json::Value {
    let mut d = request_card(r);
    d["description"] = json!(r.description);
    d["createdDate"] = json!(r.created_date);
    d["remainingCount"] = json!(r.students_count - r.paid_count);
    d
}

fn payment_card(p: &Payment) -> serde_json::Value {
    json!({
        "id": p.id,
        "studentName": p.student_name,
        "amount": p.amount,
        "requestTitle": p.request_title,
        "paymentDate": p.payment_date,
        "status": p.status.label(),
        "statusColor": p.status.badge_color(),
        "method": p.method.label(),
    })
}

fn payments_model(snapshot: &Snapshot, screen: &PaymentsScreen) -> serde_json::Value {
    let revenue = metrics::revenue_totals(&snapshot.payment_requests);
    let mut model = json!({
        "activeTab": screen.active_tab.as_str(),
        "searchQuery": screen.search_query,
        "summary": {
            "collected": revenue.collected,
            "outstanding": revenue.outstanding,
        },
        "showCreateModal": screen.show_create_modal,
    });

    match screen.active_tab {
        PaymentsTab::Requests => {
            let filtered = metrics::filter_requests(
                &snapshot.payment_requests,
                &screen.search_query,
                &screen.status_filter,
            );
            let cards: Vec<serde_json::Value> = filtered.iter().map(|r| request_card(r)).collect();
            model["requests"] = json!(cards);
            model["statusFilter"] = json!(screen.status_filter);
            model["statusFilters"] = json!(STATUS_FILTERS);
        }
        PaymentsTab::Recent => {
            let filtered =
                metrics::filter_payments(&snapshot.recent_payments, &screen.search_query);
            let cards: Vec<serde_json::Value> = filtered.iter().map(|p| payment_card(p)).collect();
            model["payments"] = json!(cards);
        }
    }

    if let Some(id) = screen.selected_request.as_ref() {
        if let Some(r) = snapshot.payment_requests.iter().find(|r| &r.id == id) {
            model["selected"] = request_detail(r);
        }
    }

    model
}

fn render(state: &AppState, req: &Request) -> serde_json::Value {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    ok(&req.id, payments_model(snapshot, &state.screens.payments))
}

fn apply_and_render(
    state: &mut AppState,
    req: &Request,
    event: PaymentsEvent,
) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    state.screens.payments = state.screens.payments.clone().apply(event);
    render(state, req)
}

fn handle_payments_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    render(state, req)
}

fn handle_payments_set_tab(state: &mut AppState, req: &Request) -> serde_json::Value {
    let tab = match get_required_str(&req.params, "tab") {
        Ok(v) => PaymentsTab::parse(&v),
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, PaymentsEvent::TabChanged(tab))
}

fn handle_payments_set_query(state: &mut AppState, req: &Request) -> serde_json::Value {
    let query = match get_required_str(&req.params, "query") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, PaymentsEvent::SearchChanged(query))
}

fn handle_payments_set_status_filter(state: &mut AppState, req: &Request) -> serde_json::Value {
    let filter = match get_required_str(&req.params, "filter") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, PaymentsEvent::StatusFilterChanged(filter))
}

fn handle_payments_select(state: &mut AppState, req: &Request) -> serde_json::Value {
    let request_id = match get_optional_str(&req.params, "requestId") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    if let Some(id) = request_id.as_ref() {
        let Some(snapshot) = state.snapshot.as_ref() else {
            return err(&req.id, "no_snapshot", "load a snapshot first", None);
        };
        if !snapshot.payment_requests.iter().any(|r| &r.id == id) {
            return err(&req.id, "not_found", "payment request not found", None);
        }
    }
    apply_and_render(state, req, PaymentsEvent::RequestSelected(request_id))
}

fn handle_payments_toggle_create_modal(state: &mut AppState, req: &Request) -> serde_json::Value {
    let visible = match get_bool(&req.params, "visible") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    apply_and_render(state, req, PaymentsEvent::CreateModalToggled(visible))
}

fn create_request(
    state: &mut AppState,
    params: &serde_json::Value,
) -> Result<serde_json::Value, HandlerErr> {
    if state.snapshot.is_none() {
        return Err(HandlerErr::new("no_snapshot", "load a snapshot first"));
    }
    let title = get_required_str(params, "title")?.trim().to_string();
    let amount = get_required_i64(params, "amount")?;
    let due_date = get_required_str(params, "dueDate")?.trim().to_string();
    if title.is_empty() || due_date.is_empty() {
        return Err(HandlerErr::bad_params("title and dueDate must not be empty"));
    }
    if amount < 0 {
        return Err(HandlerErr::bad_params("amount must not be negative"));
    }

    let request_id = Uuid::new_v4().to_string();
    let created_date = Local::now().format("%b %-d, %Y").to_string();
    state.screens.payments = state
        .screens
        .payments
        .clone()
        .apply(PaymentsEvent::CreateModalToggled(false));
    // Acknowledgement only; the request list is not amended.
    Ok(json!({
        "requestId": request_id,
        "title": title,
        "amount": amount,
        "dueDate": due_date,
        "createdDate": created_date,
        "message": format!("New payment request \"{}\" has been created.", title),
    }))
}

fn handle_payments_create_request(state: &mut AppState, req: &Request) -> serde_json::Value {
    match create_request(state, &req.params) {
        Ok(result) => ok(&req.id, result),
        Err(error) => error.response(&req.id),
    }
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "payments.open" => Some(handle_payments_open(state, req)),
        "payments.setTab" => Some(handle_payments_set_tab(state, req)),
        "payments.setQuery" => Some(handle_payments_set_query(state, req)),
        "payments.setStatusFilter" => Some(handle_payments_set_status_filter(state, req)),
        "payments.select" => Some(handle_payments_select(state, req)),
        "payments.toggleCreateModal" => Some(handle_payments_toggle_create_modal(state, req)),
        "payments.createRequest" => Some(handle_payments_create_request(state, req)),
        _ => None,
    }
}
