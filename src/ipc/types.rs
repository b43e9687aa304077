use serde::Deserialize;

use crate::model::Snapshot;
use crate::view_state::Screens;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    /// The session dataset; None until the shell loads one.
    pub snapshot: Option<Snapshot>,
    pub screens: Screens,
}
