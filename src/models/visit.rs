//! Visit entity: read shape, write payload, status and kind enums.
//!
//! A visit tracks either internal visitors (directory references, active
//! when `tur == KURUM_ICI`) or inline external visitors (active when
//! `tur == KURUM_DISI`), never both at once. The form layer enforces the
//! exclusivity when the kind changes.

use serde::{Deserialize, Serialize};

use crate::duration::duration;
use crate::models::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitStatus {
    #[serde(rename = "BEKLIYOR")]
    Pending,
    #[serde(rename = "GORUSME_BASLADI")]
    InterviewStarted,
    #[serde(rename = "TAMAMLANDI")]
    Completed,
    #[serde(rename = "IPTAL")]
    Cancelled,
}

impl VisitStatus {
    pub const ALL: [VisitStatus; 4] = [
        VisitStatus::Pending,
        VisitStatus::InterviewStarted,
        VisitStatus::Completed,
        VisitStatus::Cancelled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            VisitStatus::Pending => "Pending",
            VisitStatus::InterviewStarted => "Interview started",
            VisitStatus::Completed => "Completed",
            VisitStatus::Cancelled => "Cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisitKind {
    #[serde(rename = "KURUM_ICI")]
    Internal,
    #[serde(rename = "KURUM_DISI")]
    External,
}

impl VisitKind {
    pub fn label(&self) -> &'static str {
        match self {
            VisitKind::Internal => "Internal",
            VisitKind::External => "External",
        }
    }
}

/// Visitor outside the user directory, captured as free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalVisitor {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(rename = "ad")]
    pub first_name: String,
    #[serde(rename = "soyad")]
    pub last_name: String,
    #[serde(rename = "telefon", default)]
    pub phone: Option<String>,
    #[serde(rename = "kurum_unvan", default)]
    pub organization: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Visit {
    pub id: i64,
    #[serde(rename = "ziyaret_nedeni")]
    pub reason: String,
    #[serde(rename = "randevulu", default)]
    pub by_appointment: bool,
    #[serde(rename = "randevu_zamani", default)]
    pub appointment_time: Option<String>,
    #[serde(rename = "ziyaret_zamani")]
    pub start_time: String,
    #[serde(rename = "ziyaret_bitis_zamani", default)]
    pub end_time: Option<String>,
    #[serde(rename = "ziyaret_edilen")]
    pub host: User,
    #[serde(rename = "durum")]
    pub status: VisitStatus,
    #[serde(rename = "tur")]
    pub kind: VisitKind,
    #[serde(rename = "kurum_ici_ziyaretciler", default)]
    pub internal_visitors: Vec<User>,
    #[serde(rename = "kurum_disi_ziyaretciler", default)]
    pub external_visitors: Vec<ExternalVisitor>,
    #[serde(rename = "notlar", default)]
    pub notes: Option<String>,
}

impl Visit {
    /// Elapsed-time column value; only completed visits show one.
    pub fn duration_display(&self) -> Option<String> {
        if self.status != VisitStatus::Completed {
            return None;
        }
        duration(Some(&self.start_time), self.end_time.as_deref())
    }
}

/// Write shape for visit create/update (full replace).
#[derive(Debug, Clone, Serialize)]
pub struct VisitPayload {
    #[serde(rename = "ziyaret_nedeni")]
    pub reason: String,
    #[serde(rename = "randevulu")]
    pub by_appointment: bool,
    #[serde(rename = "randevu_zamani")]
    pub appointment_time: Option<String>,
    #[serde(rename = "ziyaret_zamani")]
    pub start_time: String,
    #[serde(rename = "ziyaret_bitis_zamani")]
    pub end_time: Option<String>,
    #[serde(rename = "ziyaret_edilen_id")]
    pub host_id: i64,
    #[serde(rename = "durum")]
    pub status: VisitStatus,
    #[serde(rename = "tur")]
    pub kind: VisitKind,
    #[serde(rename = "kurum_ici_ziyaretci_ids")]
    pub internal_visitor_ids: Vec<i64>,
    #[serde(rename = "kurum_disi_ziyaretciler_data")]
    pub external_visitors: Vec<ExternalVisitor>,
    #[serde(rename = "notlar")]
    pub notes: String,
}
