//! Meeting dialog form.

use crate::errors::AppError;
use crate::forms::require_text;
use crate::models::{ExternalParticipant, Meeting, MeetingKind, MeetingPayload, MeetingStatus};
use crate::status;
use crate::timefmt::{now_local, now_local_plus_hours, parse_timestamp};

/// Scratch row for the inline "add external participant" inputs.
#[derive(Debug, Clone, Default)]
pub struct ExternalParticipantInput {
    pub first_name: String,
    pub last_name: String,
    pub organization: String,
}

#[derive(Debug, Clone)]
pub struct MeetingForm {
    pub title: String,
    pub subject: String,
    pub start_time: String,
    pub end_time: Option<String>,
    pub room_id: Option<i64>,
    pub created_by_id: Option<i64>,
    pub status: MeetingStatus,
    pub kind: MeetingKind,
    pub participant_ids: Vec<i64>,
    pub external_participants: Vec<ExternalParticipant>,
    pub notes: String,
}

impl MeetingForm {
    /// Create-dialog defaults: pending, internal, starting now and
    /// tentatively ending an hour later.
    pub fn for_create() -> Self {
        MeetingForm {
            title: String::new(),
            subject: String::new(),
            start_time: now_local(),
            end_time: Some(now_local_plus_hours(1)),
            room_id: None,
            created_by_id: None,
            status: MeetingStatus::Pending,
            kind: MeetingKind::Internal,
            participant_ids: Vec::new(),
            external_participants: Vec::new(),
            notes: String::new(),
        }
    }

    /// Edit-dialog population: every field from the persisted record, with
    /// embedded references flattened to id lists.
    pub fn for_edit(meeting: &Meeting) -> Self {
        MeetingForm {
            title: meeting.title.clone(),
            subject: meeting.subject.clone(),
            start_time: meeting.start_time.clone(),
            end_time: meeting.end_time.clone(),
            room_id: Some(meeting.room.id),
            created_by_id: Some(meeting.created_by.id),
            status: meeting.status,
            kind: meeting.kind,
            participant_ids: meeting.participants.iter().map(|u| u.id).collect(),
            external_participants: meeting.external_participants.clone(),
            notes: meeting.notes.clone().unwrap_or_default(),
        }
    }

    /// Status change with the completion side effect: moving to Completed
    /// pre-fills an empty end field (start + 1h), an existing end stays.
    pub fn set_status(&mut self, new_status: MeetingStatus) {
        if !status::transition_allowed(self.status, new_status) {
            return;
        }
        if new_status == MeetingStatus::Completed {
            if let Some(end) =
                status::end_time_on_complete(self.end_time.as_deref(), Some(&self.start_time))
            {
                self.end_time = Some(end);
            }
        }
        self.status = new_status;
    }

    /// Meetings keep internal and external participant lists side by side,
    /// so a kind change carries no clearing side effect.
    pub fn set_kind(&mut self, kind: MeetingKind) {
        self.kind = kind;
    }

    /// Append an inline external participant. First and last name are
    /// required; on failure the list is left unchanged.
    pub fn add_external(&mut self, input: ExternalParticipantInput) -> Result<(), AppError> {
        if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "First name and last name are required".to_string(),
            ));
        }
        let organization = input.organization.trim();
        self.external_participants.push(ExternalParticipant {
            id: None,
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            organization: if organization.is_empty() {
                None
            } else {
                Some(organization.to_string())
            },
        });
        Ok(())
    }

    /// Remove by index; out-of-range indexes are ignored.
    pub fn remove_external(&mut self, index: usize) {
        if index < self.external_participants.len() {
            self.external_participants.remove(index);
        }
    }

    /// Pre-send validation; returns the first problem found.
    pub fn validate(&self) -> Option<String> {
        if let Some(msg) = require_text(&self.title, "Title is required") {
            return Some(msg);
        }
        if let Some(msg) = require_text(&self.start_time, "Start time is required") {
            return Some(msg);
        }
        if self.room_id.is_none() {
            return Some("Meeting room is required".to_string());
        }
        if self.created_by_id.is_none() {
            return Some("Creator is required".to_string());
        }
        if let (Some(start), Some(end)) = (
            parse_timestamp(&self.start_time),
            self.end_time.as_deref().and_then(parse_timestamp),
        ) {
            if start >= end {
                return Some("Start time must be before end time".to_string());
            }
        }
        None
    }

    /// Validated write payload for create or full-replace update.
    pub fn payload(&self) -> Result<MeetingPayload, AppError> {
        if let Some(msg) = self.validate() {
            return Err(AppError::Validation(msg));
        }
        Ok(MeetingPayload {
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone().filter(|e| !e.trim().is_empty()),
            // validate() guarantees both ids are present
            room_id: self.room_id.unwrap_or_default(),
            created_by_id: self.created_by_id.unwrap_or_default(),
            status: self.status,
            kind: self.kind,
            participant_ids: self.participant_ids.clone(),
            external_participants: self.external_participants.clone(),
            notes: self.notes.trim().to_string(),
        })
    }
}
