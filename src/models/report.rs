//! Pre-aggregated report shapes, consumed for display only.
//!
//! The backend does all aggregation; these structs just mirror what the
//! report endpoints return for a date range.

use serde::Deserialize;

/// Per-day record count split by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyCount {
    #[serde(rename = "tarih")]
    pub date: String,
    #[serde(rename = "toplam")]
    pub total: i64,
    #[serde(rename = "kurum_ici", default)]
    pub internal: i64,
    #[serde(rename = "kurum_disi", default)]
    pub external: i64,
}

/// Record count for one hour of the day.
#[derive(Debug, Clone, Deserialize)]
pub struct HourBucket {
    #[serde(rename = "saat")]
    pub hour: u32,
    #[serde(rename = "toplam")]
    pub total: i64,
}

/// Most-visited host row.
#[derive(Debug, Clone, Deserialize)]
pub struct TopHost {
    #[serde(rename = "ziyaret_edilen__username")]
    pub username: String,
    #[serde(rename = "ziyaret_edilen__first_name", default)]
    pub first_name: String,
    #[serde(rename = "ziyaret_edilen__last_name", default)]
    pub last_name: String,
    #[serde(rename = "toplam_ziyaret")]
    pub total_visits: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppointmentSplit {
    #[serde(rename = "randevulu")]
    pub with_appointment: i64,
    #[serde(rename = "randevusuz")]
    pub without_appointment: i64,
}

/// Room usage row. Average duration arrives as an opaque backend string.
#[derive(Debug, Clone, Deserialize)]
pub struct RoomUsage {
    #[serde(rename = "oda__ad")]
    pub room_name: String,
    #[serde(rename = "toplam_toplanti")]
    pub total_meetings: i64,
    #[serde(rename = "ortalama_sure", default)]
    pub average_duration: Option<String>,
}

/// Per-month record count split by kind.
#[derive(Debug, Clone, Deserialize)]
pub struct MonthlyCount {
    #[serde(rename = "ay")]
    pub month: String,
    #[serde(rename = "toplam")]
    pub total: i64,
    #[serde(rename = "kurum_ici", default)]
    pub internal: i64,
    #[serde(rename = "kurum_disi", default)]
    pub external: i64,
}

/// Date range the backend actually applied.
#[derive(Debug, Clone, Deserialize)]
pub struct DateFilter {
    #[serde(rename = "baslangic")]
    pub start: String,
    #[serde(rename = "bitis")]
    pub end: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VisitorReport {
    #[serde(rename = "gunluk_ziyaretler")]
    pub daily_visits: Vec<DailyCount>,
    #[serde(rename = "saat_dagilimi")]
    pub hour_distribution: Vec<HourBucket>,
    #[serde(rename = "en_cok_ziyaret_edilenler")]
    pub top_hosts: Vec<TopHost>,
    #[serde(rename = "randevu_durumu")]
    pub appointments: AppointmentSplit,
    #[serde(rename = "filtre")]
    pub filter: DateFilter,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingReport {
    #[serde(rename = "gunluk_toplantilar")]
    pub daily_meetings: Vec<DailyCount>,
    #[serde(rename = "oda_kullanimi")]
    pub room_usage: Vec<RoomUsage>,
    #[serde(rename = "saat_dagilimi")]
    pub hour_distribution: Vec<HourBucket>,
    #[serde(rename = "aylik_istatistikler")]
    pub monthly: Vec<MonthlyCount>,
    #[serde(rename = "filtre")]
    pub filter: DateFilter,
}

/// A year/month for which the backend holds at least one record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReportPeriod {
    #[serde(rename = "yil")]
    pub year: i32,
    #[serde(rename = "ay")]
    pub month: u32,
    #[serde(rename = "ay_adi")]
    pub month_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AvailablePeriods {
    #[serde(rename = "tarihler")]
    pub periods: Vec<ReportPeriod>,
}
