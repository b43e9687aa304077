use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::get_optional_str;
use crate::ipc::types::{AppState, Request};
use crate::metrics;
use crate::model::Snapshot;
use crate::view_state::{SettingsEvent, SettingsModal, SettingsScreen};

const ACHIEVEMENTS: [(&str, bool); 4] = [
    ("Teacher Gem", true),
    ("Hundred Students", true),
    ("Annual Guru", true),
    ("Tech Teacher", false),
];

const LANGUAGES: [(&str, &str, &str); 7] = [
    ("en", "English", "English"),
    ("hi", "हिंदी", "Hindi"),
    ("ta", "தமிழ்", "Tamil"),
    ("te", "తెలుగు", "Telugu"),
    ("kn", "ಕನ್ನಡ", "Kannada"),
    ("mr", "मराठी", "Marathi"),
    ("bn", "বাংলা", "Bengali"),
];

const HELP_TOPICS: [(&str, &str); 4] = [
    (
        "How to create a class?",
        "To create a new class, press the + button on the home screen...",
    ),
    (
        "How to add students?",
        "To add students, go to the Students tab and press the + button...",
    ),
    (
        "How to track payments?",
        "Go to the Payments tab to view all payments...",
    ),
    (
        "How to share materials?",
        "In the class, go to Materials section and upload files...",
    ),
];

fn settings_model(snapshot: &Snapshot, screen: &SettingsScreen) -> serde_json::Value {
    let revenue = metrics::revenue_totals(&snapshot.payment_requests);
    let achievements: Vec<serde_json::Value> = ACHIEVEMENTS
        .iter()
        .map(|(title, earned)| json!({ "title": title, "earned": earned }))
        .collect();
    let languages: Vec<serde_json::Value> = LANGUAGES
        .iter()
        .map(|(code, name, english)| json!({ "code": code, "name": name, "english": english }))
        .collect();
    let help_topics: Vec<serde_json::Value> = HELP_TOPICS
        .iter()
        .map(|(title, content)| json!({ "title": title, "content": content }))
        .collect();

    json!({
        "profile": {
            "name": snapshot.profile.name,
            "bio": snapshot.profile.bio,
            "subjects": snapshot.profile.subjects,
            "experience": snapshot.profile.experience,
            "avatar": snapshot.profile.avatar,
        },
        "stats": {
            "totalStudents": snapshot.students.len(),
            "totalClasses": snapshot.classrooms.len(),
            "monthlyEarnings": revenue.collected,
            "rating": snapshot.profile.rating,
        },
        "preferences": {
            "notifications": screen.notifications,
            "darkMode": screen.dark_mode,
            "language": screen.language,
        },
        "openModal": screen.open_modal.map(SettingsModal::as_str),
        "achievements": achievements,
        "languages": languages,
        "helpTopics": help_topics,
    })
}

fn handle_settings_open(state: &mut AppState, req: &Request) -> serde_json::Value {
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    ok(&req.id, settings_model(snapshot, &state.screens.settings))
}

fn handle_settings_set_preference(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    let mut screen = state.screens.settings.clone();
    if let Some(v) = req.params.get("notifications").and_then(|v| v.as_bool()) {
        screen = screen.apply(SettingsEvent::NotificationsToggled(v));
    }
    if let Some(v) = req.params.get("darkMode").and_then(|v| v.as_bool()) {
        screen = screen.apply(SettingsEvent::DarkModeToggled(v));
    }
    if let Some(v) = req.params.get("language").and_then(|v| v.as_str()) {
        screen = screen.apply(SettingsEvent::LanguageChanged(v.to_string()));
    }
    state.screens.settings = screen;
    let Some(snapshot) = state.snapshot.as_ref() else {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    };
    ok(&req.id, settings_model(snapshot, &state.screens.settings))
}

fn handle_settings_open_modal(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    let modal = match get_optional_str(&req.params, "modal") {
        Ok(v) => v,
        Err(e) => return e.response(&req.id),
    };
    let modal = match modal {
        None => None,
        Some(name) => match SettingsModal::parse(&name) {
            Some(m) => Some(m),
            None => return err(&req.id, "bad_params", "unknown modal", None),
        },
    };
    state.screens.settings = state
        .screens
        .settings
        .clone()
        .apply(SettingsEvent::ModalOpened(modal));
    ok(
        &req.id,
        json!({ "openModal": modal.map(SettingsModal::as_str) }),
    )
}

// Profile edits are acknowledged but never written back; the profile is
// part of the immutable session snapshot like everything else.
fn handle_settings_update_profile(state: &mut AppState, req: &Request) -> serde_json::Value {
    if state.snapshot.is_none() {
        return err(&req.id, "no_snapshot", "load a snapshot first", None);
    }
    let name = req
        .params
        .get("name")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .unwrap_or("");
    if name.is_empty() {
        return err(&req.id, "bad_params", "name must not be empty", None);
    }
    // Saving dismisses the edit sheet.
    state.screens.settings = state
        .screens
        .settings
        .clone()
        .apply(SettingsEvent::ModalOpened(None));
    ok(
        &req.id,
        json!({ "message": "Profile updated successfully!" }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "settings.open" => Some(handle_settings_open(state, req)),
        "settings.setPreference" => Some(handle_settings_set_preference(state, req)),
        "settings.openModal" => Some(handle_settings_open_modal(state, req)),
        "settings.updateProfile" => Some(handle_settings_update_profile(state, req)),
        _ => None,
    }
}
