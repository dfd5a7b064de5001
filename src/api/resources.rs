//! Typed endpoints, one block per backend resource.
//!
//! All mutating calls are full-replace semantics on the backend side; the
//! caller reloads lists afterwards instead of patching them locally.

use crate::api::client::ApiClient;
use crate::errors::AppError;
use crate::models::{
    AvailablePeriods, Meeting, MeetingPayload, MeetingReport, MeetingRoom, ReportPeriod,
    RoomPayload, User, Visit, VisitPayload, VisitorReport,
};

// ---------------------------------------------------------------------------
// users (read-only)
// ---------------------------------------------------------------------------

impl ApiClient {
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.get_json("users/").await
    }

    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.get_json(&format!("users/{id}/")).await
    }
}

// ---------------------------------------------------------------------------
// toplanti-odalari (meeting rooms)
// ---------------------------------------------------------------------------

impl ApiClient {
    pub async fn list_rooms(&self) -> Result<Vec<MeetingRoom>, AppError> {
        self.get_json("toplanti-odalari/").await
    }

    pub async fn get_room(&self, id: i64) -> Result<MeetingRoom, AppError> {
        self.get_json(&format!("toplanti-odalari/{id}/")).await
    }

    pub async fn create_room(&self, payload: &RoomPayload) -> Result<MeetingRoom, AppError> {
        self.post_json("toplanti-odalari/", payload).await
    }

    pub async fn update_room(
        &self,
        id: i64,
        payload: &RoomPayload,
    ) -> Result<MeetingRoom, AppError> {
        self.put_json(&format!("toplanti-odalari/{id}/"), payload).await
    }

    pub async fn delete_room(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("toplanti-odalari/{id}/")).await
    }
}

// ---------------------------------------------------------------------------
// toplantilar (meetings)
// ---------------------------------------------------------------------------

impl ApiClient {
    pub async fn list_meetings(&self) -> Result<Vec<Meeting>, AppError> {
        self.get_json("toplantilar/").await
    }

    pub async fn get_meeting(&self, id: i64) -> Result<Meeting, AppError> {
        self.get_json(&format!("toplantilar/{id}/")).await
    }

    pub async fn create_meeting(&self, payload: &MeetingPayload) -> Result<Meeting, AppError> {
        self.post_json("toplantilar/", payload).await
    }

    pub async fn update_meeting(
        &self,
        id: i64,
        payload: &MeetingPayload,
    ) -> Result<Meeting, AppError> {
        self.put_json(&format!("toplantilar/{id}/"), payload).await
    }

    pub async fn delete_meeting(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("toplantilar/{id}/")).await
    }
}

// ---------------------------------------------------------------------------
// ziyaretciler (visits)
// ---------------------------------------------------------------------------

impl ApiClient {
    pub async fn list_visits(&self) -> Result<Vec<Visit>, AppError> {
        self.get_json("ziyaretciler/").await
    }

    pub async fn get_visit(&self, id: i64) -> Result<Visit, AppError> {
        self.get_json(&format!("ziyaretciler/{id}/")).await
    }

    pub async fn create_visit(&self, payload: &VisitPayload) -> Result<Visit, AppError> {
        self.post_json("ziyaretciler/", payload).await
    }

    pub async fn update_visit(&self, id: i64, payload: &VisitPayload) -> Result<Visit, AppError> {
        self.put_json(&format!("ziyaretciler/{id}/"), payload).await
    }

    pub async fn delete_visit(&self, id: i64) -> Result<(), AppError> {
        self.delete(&format!("ziyaretciler/{id}/")).await
    }
}

// ---------------------------------------------------------------------------
// raporlar (pre-aggregated, display only)
// ---------------------------------------------------------------------------

impl ApiClient {
    /// Visitor report for an optional `(start, end)` range of `YYYY-MM-DD`
    /// bounds; the backend defaults to the current month.
    pub async fn visitor_report(
        &self,
        range: Option<(&str, &str)>,
    ) -> Result<VisitorReport, AppError> {
        match range {
            Some((start, end)) => {
                self.get_json_query("raporlar/ziyaretci/", &[("baslangic", start), ("bitis", end)])
                    .await
            }
            None => self.get_json("raporlar/ziyaretci/").await,
        }
    }

    pub async fn meeting_report(
        &self,
        range: Option<(&str, &str)>,
    ) -> Result<MeetingReport, AppError> {
        match range {
            Some((start, end)) => {
                self.get_json_query("raporlar/toplanti/", &[("baslangic", start), ("bitis", end)])
                    .await
            }
            None => self.get_json("raporlar/toplanti/").await,
        }
    }

    /// Year/month pairs for which any record exists, newest first.
    pub async fn available_periods(&self) -> Result<Vec<ReportPeriod>, AppError> {
        let wrapper: AvailablePeriods = self.get_json("raporlar/mevcut-tarihler/").await?;
        Ok(wrapper.periods)
    }
}
