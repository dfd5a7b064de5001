use serde::{Deserialize, Serialize};

/// Meeting room as returned by `toplanti-odalari`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingRoom {
    pub id: i64,
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "kapasite")]
    pub capacity: i64,
    #[serde(rename = "aciklama", default)]
    pub description: Option<String>,
}

/// Write shape for room create/update.
#[derive(Debug, Clone, Serialize)]
pub struct RoomPayload {
    #[serde(rename = "ad")]
    pub name: String,
    #[serde(rename = "kapasite")]
    pub capacity: i64,
    #[serde(rename = "aciklama")]
    pub description: Option<String>,
}
