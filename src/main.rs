mod ipc;
mod metrics;
mod model;
mod seed;
mod view_state;

use std::io::{self, BufRead, Write};

fn main() {
    // No snapshot until the shell loads one; screens start at their defaults.
    let mut state = ipc::AppState {
        snapshot: None,
        screens: view_state::Screens::default(),
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(v) => v,
            Err(_) => break,
        };
        if line.trim().is_empty() {
            continue;
        }

        let resp = match serde_json::from_str::<ipc::Request>(&line) {
            Ok(req) => ipc::handle_request(&mut state, req),
            Err(e) => {
                // No usable id on a parse failure, so the error goes out bare.
                serde_json::json!({
                    "ok": false,
                    "error": { "code": "bad_json", "message": e.to_string() }
                })
            }
        };

        let _ = writeln!(
            stdout,
            "{}",
            serde_json::to_string(&resp).unwrap_or_else(|_| "{\"ok\":false}".to_string())
        );
        let _ = stdout.flush();
    }
}
