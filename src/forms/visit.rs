//! Visit dialog form.
//!
//! The interesting rule lives in `set_kind`: exactly one visitor list is
//! active at a time, so switching kind clears the list that just became
//! inactive and the form can never submit contradictory participant data.

use crate::errors::AppError;
use crate::forms::require_text;
use crate::models::{ExternalVisitor, Visit, VisitKind, VisitPayload, VisitStatus};
use crate::status;
use crate::timefmt::now_local;

/// Scratch row for the inline "add external visitor" inputs.
#[derive(Debug, Clone, Default)]
pub struct ExternalVisitorInput {
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub organization: String,
}

#[derive(Debug, Clone)]
pub struct VisitForm {
    pub reason: String,
    pub by_appointment: bool,
    pub appointment_time: Option<String>,
    pub start_time: String,
    pub end_time: Option<String>,
    pub host_id: Option<i64>,
    pub status: VisitStatus,
    pub kind: VisitKind,
    pub internal_visitor_ids: Vec<i64>,
    pub external_visitors: Vec<ExternalVisitor>,
    pub notes: String,
}

impl VisitForm {
    /// Create-dialog defaults: pending, external, starting now, no end yet.
    pub fn for_create() -> Self {
        VisitForm {
            reason: String::new(),
            by_appointment: false,
            appointment_time: None,
            start_time: now_local(),
            end_time: None,
            host_id: None,
            status: VisitStatus::Pending,
            kind: VisitKind::External,
            internal_visitor_ids: Vec::new(),
            external_visitors: Vec::new(),
            notes: String::new(),
        }
    }

    pub fn for_edit(visit: &Visit) -> Self {
        VisitForm {
            reason: visit.reason.clone(),
            by_appointment: visit.by_appointment,
            appointment_time: visit.appointment_time.clone(),
            start_time: visit.start_time.clone(),
            end_time: visit.end_time.clone(),
            host_id: Some(visit.host.id),
            status: visit.status,
            kind: visit.kind,
            internal_visitor_ids: visit.internal_visitors.iter().map(|u| u.id).collect(),
            external_visitors: visit.external_visitors.clone(),
            notes: visit.notes.clone().unwrap_or_default(),
        }
    }

    /// Status change with the completion side effect: moving to Completed
    /// pre-fills an empty end field (visit start + 1h), an existing end
    /// stays.
    pub fn set_status(&mut self, new_status: VisitStatus) {
        if !status::transition_allowed(self.status, new_status) {
            return;
        }
        if new_status == VisitStatus::Completed {
            if let Some(end) =
                status::end_time_on_complete(self.end_time.as_deref(), Some(&self.start_time))
            {
                self.end_time = Some(end);
            }
        }
        self.status = new_status;
    }

    /// Switch the active visitor list. The list that became inactive is
    /// cleared so stale selections cannot ride along on submit.
    pub fn set_kind(&mut self, kind: VisitKind) {
        if kind == self.kind {
            return;
        }
        match kind {
            VisitKind::Internal => self.external_visitors.clear(),
            VisitKind::External => self.internal_visitor_ids.clear(),
        }
        self.kind = kind;
    }

    /// Append an inline external visitor. First and last name are
    /// required; on failure the list is left unchanged.
    pub fn add_external(&mut self, input: ExternalVisitorInput) -> Result<(), AppError> {
        if input.first_name.trim().is_empty() || input.last_name.trim().is_empty() {
            return Err(AppError::Validation(
                "First name and last name are required".to_string(),
            ));
        }
        let phone = input.phone.trim();
        let organization = input.organization.trim();
        self.external_visitors.push(ExternalVisitor {
            id: None,
            first_name: input.first_name.trim().to_string(),
            last_name: input.last_name.trim().to_string(),
            phone: if phone.is_empty() {
                None
            } else {
                Some(phone.to_string())
            },
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
        if index < self.external_visitors.len() {
            self.external_visitors.remove(index);
        }
    }

    /// Pre-send validation; returns the first problem found.
    pub fn validate(&self) -> Option<String> {
        if self.host_id.is_none() {
            return Some("Person being visited is required".to_string());
        }
        if let Some(msg) = require_text(&self.reason, "Visit reason is required") {
            return Some(msg);
        }
        match self.kind {
            VisitKind::Internal => {
                if self.internal_visitor_ids.is_empty() {
                    return Some("At least one internal visitor is required".to_string());
                }
            }
            VisitKind::External => {
                if self.external_visitors.is_empty() {
                    return Some("At least one external visitor is required".to_string());
                }
            }
        }
        None
    }

    /// Validated write payload. The appointment timestamp only travels when
    /// the appointment flag is set.
    pub fn payload(&self) -> Result<VisitPayload, AppError> {
        if let Some(msg) = self.validate() {
            return Err(AppError::Validation(msg));
        }
        Ok(VisitPayload {
            reason: self.reason.trim().to_string(),
            by_appointment: self.by_appointment,
            appointment_time: if self.by_appointment {
                self.appointment_time.clone().filter(|t| !t.trim().is_empty())
            } else {
                None
            },
            start_time: self.start_time.clone(),
            end_time: self.end_time.clone().filter(|e| !e.trim().is_empty()),
            // validate() guarantees the host id is present
            host_id: self.host_id.unwrap_or_default(),
            status: self.status,
            kind: self.kind,
            internal_visitor_ids: self.internal_visitor_ids.clone(),
            external_visitors: self.external_visitors.clone(),
            notes: self.notes.trim().to_string(),
        })
    }
}
