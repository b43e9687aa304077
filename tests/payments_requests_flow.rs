use serde_json::json;
use std::io::{BufRead, BufReader, Write};
use std::process::{Child, ChildStdin, ChildStdout, Command, Stdio};

fn spawn_sidecar() -> (Child, ChildStdin, BufReader<ChildStdout>) {
    let exe = env!("CARGO_BIN_EXE_tutod");
    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("spawn tutod");
    let stdin = child.stdin.take().expect("child stdin");
    let stdout = child.stdout.take().expect("child stdout");
    (child, stdin, BufReader::new(stdout))
}

fn request(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let payload = json!({
        "id": id,
        "method": method,
        "params": params,
    });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    value
}

fn request_ok(
    stdin: &mut ChildStdin,
    reader: &mut BufReader<ChildStdout>,
    id: &str,
    method: &str,
    params: serde_json::Value,
) -> serde_json::Value {
    let value = request(stdin, reader, id, method, params);
    assert!(
        value.get("ok").and_then(|v| v.as_bool()).unwrap_or(false),
        "{}",
        value
    );
    value.get("result").cloned().unwrap_or_else(|| json!({}))
}

fn titles(result: &serde_json::Value) -> Vec<String> {
    result
        .get("requests")
        .and_then(|v| v.as_array())
        .expect("requests array")
        .iter()
        .map(|r| {
            r.get("title")
                .and_then(|v| v.as_str())
                .expect("title")
                .to_string()
        })
        .collect()
}

#[test]
fn revenue_summary_sums_collected_and_outstanding() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));
    let result = request_ok(&mut stdin, &mut reader, "2", "payments.open", json!({}));

    let summary = result.get("summary").expect("summary");
    // 2500*18 + 1500*15 + 2000*22 + 2500*20.
    assert_eq!(summary.get("collected").and_then(|v| v.as_i64()), Some(161_500));
    // 2500*7 + 1500*3 + 0 + 2500*5.
    assert_eq!(summary.get("outstanding").and_then(|v| v.as_i64()), Some(34_500));
    assert_eq!(titles(&result).len(), 4);
}

#[test]
fn completion_percent_and_fill_ratio_per_request() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));
    let result = request_ok(&mut stdin, &mut reader, "2", "payments.open", json!({}));

    let first = result
        .get("requests")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.first())
        .expect("first request");
    assert_eq!(
        first.get("completionPercent").and_then(|v| v.as_i64()),
        Some(72)
    );
    let ratio = first.get("fillRatio").and_then(|v| v.as_f64()).expect("ratio");
    assert!((ratio - 0.72).abs() < 1e-12);

    let completed = result
        .get("requests")
        .and_then(|v| v.as_array())
        .and_then(|arr| arr.get(2))
        .expect("completed request");
    assert_eq!(
        completed.get("completionPercent").and_then(|v| v.as_i64()),
        Some(100)
    );
}

#[test]
fn status_chip_filters_exactly_and_search_is_title_only() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));

    let overdue = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "payments.setStatusFilter",
        json!({ "filter": "Overdue" }),
    );
    assert_eq!(titles(&overdue), vec!["September 2024 - Math Fees"]);

    let _ = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "payments.setStatusFilter",
        json!({ "filter": "All" }),
    );
    let math = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "payments.setQuery",
        json!({ "query": "math" }),
    );
    assert_eq!(
        titles(&math),
        vec!["November 2024 - Math Fees", "September 2024 - Math Fees"]
    );

    // Searching a description term finds nothing; only titles match.
    let none = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "payments.setQuery",
        json!({ "query": "exam preparation" }),
    );
    assert!(titles(&none).is_empty());
}

#[test]
fn recent_tab_searches_student_and_request_title() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));

    let recent = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "payments.setTab",
        json!({ "tab": "recent" }),
    );
    let payments = recent
        .get("payments")
        .and_then(|v| v.as_array())
        .expect("payments array");
    assert_eq!(payments.len(), 4);
    assert_eq!(
        payments[2].get("method").and_then(|v| v.as_str()),
        Some("Bank Transfer")
    );

    let hit = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "payments.setQuery",
        json!({ "query": "chemistry" }),
    );
    let filtered = hit
        .get("payments")
        .and_then(|v| v.as_array())
        .expect("payments array");
    assert_eq!(filtered.len(), 1);
    assert_eq!(
        filtered[0].get("studentName").and_then(|v| v.as_str()),
        Some("Amit Kumar")
    );
}

#[test]
fn request_detail_includes_remaining_count() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));

    let result = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "payments.select",
        json!({ "requestId": "1" }),
    );
    let selected = result.get("selected").expect("selected");
    assert_eq!(selected.get("remainingCount").and_then(|v| v.as_i64()), Some(7));
    assert_eq!(
        selected.get("createdDate").and_then(|v| v.as_str()),
        Some("Nov 1, 2024")
    );
}

#[test]
fn create_request_acknowledges_without_mutating_dataset() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));

    let ack = request_ok(
        &mut stdin,
        &mut reader,
        "2",
        "payments.createRequest",
        json!({ "title": "December 2024 - Math Fees", "amount": 2500, "dueDate": "Dec 31, 2024" }),
    );
    assert!(ack.get("requestId").and_then(|v| v.as_str()).is_some());
    assert!(ack.get("createdDate").and_then(|v| v.as_str()).is_some());

    let after = request_ok(&mut stdin, &mut reader, "3", "payments.open", json!({}));
    assert_eq!(titles(&after).len(), 4);
    assert_eq!(
        after.get("showCreateModal").and_then(|v| v.as_bool()),
        Some(false)
    );
}

#[test]
fn create_request_rejects_missing_or_negative_params() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();
    let _ = request_ok(&mut stdin, &mut reader, "1", "snapshot.loadDemo", json!({}));

    let missing = request(
        &mut stdin,
        &mut reader,
        "2",
        "payments.createRequest",
        json!({ "title": "No amount", "dueDate": "Dec 31, 2024" }),
    );
    assert_eq!(
        missing
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("bad_params")
    );

    let negative = request(
        &mut stdin,
        &mut reader,
        "3",
        "payments.createRequest",
        json!({ "title": "Bad", "amount": -5, "dueDate": "Dec 31, 2024" }),
    );
    assert_eq!(
        negative
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("bad_params")
    );
}
