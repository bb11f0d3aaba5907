//! Recent activity entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::enums::Department;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityKind {
    Assignment,
    Return,
    Maintenance,
}

impl ActivityKind {
    /// Status badge shown next to the entry
    pub fn status_label(&self) -> &'static str {
        match self {
            ActivityKind::Assignment => "assigned",
            ActivityKind::Return => "returned",
            ActivityKind::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u64,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    /// Asset name at the time of the event
    pub asset: String,
    pub employee: Option<String>,
    pub department: Option<Department>,
    pub at: DateTime<Utc>,
}
