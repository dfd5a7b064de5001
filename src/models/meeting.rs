//! Meeting entity: read shape, write payload, status and kind enums.
//!
//! Reference fields come back embedded on read (`oda`, `olusturan`,
//! `katilimcilar`) and go out as bare ids on write (`oda_id`,
//! `olusturan_id`, `katilimci_ids`). Inline external participants travel
//! under `kurum_disi_katilimcilar` on read and
//! `kurum_disi_katilimcilar_data` on write.

use serde::{Deserialize, Serialize};

use crate::duration::duration;
use crate::models::room::MeetingRoom;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingStatus {
    #[serde(rename = "BEKLIYOR")]
    Pending,
    #[serde(rename = "DEVAM_EDIYOR")]
    InProgress,
    #[serde(rename = "TAMAMLANDI")]
    Completed,
    #[serde(rename = "IPTAL")]
    Cancelled,
}

impl MeetingStatus {
    pub const ALL: [MeetingStatus; 4] = [
        MeetingStatus::Pending,
        MeetingStatus::InProgress,
        MeetingStatus::Completed,
        MeetingStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MeetingStatus::Pending => "Pending",
            MeetingStatus::InProgress => "In progress",
            MeetingStatus::Completed => "Completed",
            MeetingStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MeetingKind {
    #[serde(rename = "KURUM_ICI")]
    Internal,
    #[serde(rename = "ONLINE")]
    Online,
    #[serde(rename = "HIBRIT")]
    Hybrid,
}

impl MeetingKind {
    pub fn label(&self) -> &'static str {
        match self {
            MeetingKind::Internal => "Internal",
            MeetingKind::Online => "Online",
            MeetingKind::Hybrid => "Hybrid",
        }
    }
}

/// Participant outside the user directory, captured as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalParticipant {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "ad")]
    pub first_name: String,
    #[serde(rename = "soyad")]
    pub last_name: String,
    #[serde(rename = "kurum_unvan", default)]
    pub organization: Option<String>,
}

impl ExternalParticipant {
    pub fn display(&self) -> String {
        match self.organization.as_deref().filter(|o| !o.is_empty()) {
            Some(org) => format!("{} {} - {}", self.first_name, self.last_name, org),
            None => format!("{} {}", self.first_name, self.last_name),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Meeting {
    pub id: i64,
    #[serde(rename = "baslik")]
    pub title: String,
    #[serde(rename = "konu", default)]
    pub subject: String,
    #[serde(rename = "baslangic_zamani")]
    pub start_time: String,
    #[serde(rename = "bitis_zamani", default)]
    pub end_time: Option<String>,
    #[serde(rename = "oda")]
    pub room: MeetingRoom,
    #[serde(rename = "durum")]
    pub status: MeetingStatus,
    #[serde(rename = "tur")]
    pub kind: MeetingKind,
    #[serde(rename = "olusturan")]
    pub created_by: User,
    #[serde(rename = "katilimcilar", default)]
    pub participants: Vec<User>,
    #[serde(rename = "kurum_disi_katilimcilar", default)]
    pub external_participants: Vec<ExternalParticipant>,
    #[serde(rename = "notlar", default)]
    pub notes: Option<String>,
}

impl Meeting {
    /// Elapsed-time column value; only completed meetings show one.
    pub fn duration_display(&self) -> Option<String> {
        if self.status != MeetingStatus::Completed {
            return None;
        }
        duration(Some(&self.start_time), self.end_time.as_deref())
    }
}

/// Write shape for meeting create/update (full replace).
#[derive(Debug, Clone, Serialize)]
pub struct MeetingPayload {
    #[serde(rename = "baslik")]
    pub title: String,
    #[serde(rename = "konu")]
    pub subject: String,
    #[serde(rename = "baslangic_zamani")]
    pub start_time: String,
    #[serde(rename = "bitis_zamani")]
    pub end_time: Option<String>,
    #[serde(rename = "oda_id")]
    pub room_id: i64,
    #[serde(rename = "olusturan_id")]
    pub created_by_id: i64,
    #[serde(rename = "durum")]
    pub status: MeetingStatus,
    #[serde(rename = "tur")]
    pub kind: MeetingKind,
    #[serde(rename = "katilimci_ids")]
    pub participant_ids: Vec<i64>,
    #[serde(rename = "kurum_disi_katilimcilar_data")]
    pub external_participants: Vec<ExternalParticipant>,
    #[serde(rename = "notlar")]
    pub notes: String,
}
