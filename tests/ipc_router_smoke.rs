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
    assert!(!line.trim().is_empty(), "empty response for {}", method);
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("id").and_then(|v| v.as_str()), Some(id));
    if value.get("ok").and_then(|v| v.as_bool()) == Some(false) {
        let code = value
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        assert_ne!(
            code, "not_implemented",
            "unexpected unknown method for {}",
            method
        );
    }
    value
}

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let _ = request(&mut stdin, &mut reader, "1", "health", json!({}));
    let _ = request(&mut stdin, &mut reader, "2", "snapshot.loadDemo", json!({}));
    let _ = request(&mut stdin, &mut reader, "3", "dashboard.open", json!({}));
    let _ = request(&mut stdin, &mut reader, "4", "classrooms.list", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "5",
        "classrooms.open",
        json!({ "classId": "1" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "6",
        "classrooms.setTab",
        json!({ "tab": "materials" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "7",
        "classrooms.create",
        json!({ "name": "Smoke Class", "subject": "Biology" }),
    );
    let _ = request(&mut stdin, &mut reader, "8", "students.list", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "9",
        "students.setQuery",
        json!({ "query": "sharma" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "10",
        "students.setClassFilter",
        json!({ "filter": "Grade 10" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "11",
        "students.select",
        json!({ "studentId": "1" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "12",
        "students.add",
        json!({ "name": "Smoke Student", "parentName": "Smoke Parent", "phone": "+91 00000 00000" }),
    );
    let _ = request(&mut stdin, &mut reader, "13", "payments.open", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "14",
        "payments.setStatusFilter",
        json!({ "filter": "Active" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "15",
        "payments.setTab",
        json!({ "tab": "recent" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "16",
        "payments.select",
        json!({ "requestId": "1" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "17",
        "payments.createRequest",
        json!({ "title": "Smoke Fees", "amount": 1000, "dueDate": "Dec 31, 2024" }),
    );
    let _ = request(&mut stdin, &mut reader, "18", "settings.open", json!({}));
    let _ = request(
        &mut stdin,
        &mut reader,
        "19",
        "settings.setPreference",
        json!({ "darkMode": true }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "20",
        "settings.openModal",
        json!({ "modal": "editProfile" }),
    );
    let _ = request(
        &mut stdin,
        &mut reader,
        "21",
        "settings.updateProfile",
        json!({ "name": "Priya Sharma" }),
    );

    let unknown = request(&mut stdin, &mut reader, "22", "health", json!({}));
    assert_eq!(unknown.get("ok").and_then(|v| v.as_bool()), Some(true));

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn unknown_method_reports_not_implemented() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    let payload = json!({ "id": "x", "method": "nope.nothing", "params": {} });
    writeln!(stdin, "{}", payload).expect("write request");
    stdin.flush().expect("flush request");

    let mut line = String::new();
    reader.read_line(&mut line).expect("read response line");
    let value: serde_json::Value = serde_json::from_str(line.trim()).expect("parse response json");
    assert_eq!(value.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        value
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_implemented")
    );

    drop(stdin);
    let _ = child.wait();
}

#[test]
fn screen_methods_require_a_snapshot() {
    let (mut child, mut stdin, mut reader) = spawn_sidecar();

    for (i, method) in [
        "dashboard.open",
        "classrooms.list",
        "students.list",
        "payments.open",
        "settings.open",
    ]
    .iter()
    .enumerate()
    {
        let payload = json!({ "id": i.to_string(), "method": method, "params": {} });
        writeln!(stdin, "{}", payload).expect("write request");
        stdin.flush().expect("flush request");
        let mut line = String::new();
        reader.read_line(&mut line).expect("read response line");
        let value: serde_json::Value =
            serde_json::from_str(line.trim()).expect("parse response json");
        assert_eq!(
            value
                .get("error")
                .and_then(|e| e.get("code"))
                .and_then(|v| v.as_str()),
            Some("no_snapshot"),
            "{} should refuse without a snapshot",
            method
        );
    }

    drop(stdin);
    let _ = child.wait();
}
