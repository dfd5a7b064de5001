//! Visits page controller.

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::forms::{DialogMode, DialogState, VisitForm};
use crate::models::{User, Visit, VisitStatus};

/// Selectable data fetched when a dialog opens (visit dialogs only need
/// the user directory, for hosts and internal visitors).
#[derive(Debug, Clone)]
pub struct VisitDialogData {
    pub users: Vec<User>,
}

pub struct VisitPage {
    api: ApiClient,
    /// Non-authoritative cache; fully reloaded after every mutation.
    pub visits: Vec<Visit>,
    pub users: Vec<User>,
    pub state: DialogState,
    pub form: VisitForm,
    pub error: Option<String>,
    generation: u64,
}

impl VisitPage {
    pub fn new(api: ApiClient) -> Self {
        VisitPage {
            api,
            visits: Vec::new(),
            users: Vec::new(),
            state: DialogState::Closed,
            form: VisitForm::for_create(),
            error: None,
            generation: 0,
        }
    }

    /// Full page load: visits and users fetched in parallel. A failure in
    /// either fetch surfaces as one error and leaves the caches untouched.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let (visits, users) = tokio::try_join!(self.api.list_visits(), self.api.list_users())?;
        log::debug!("Loaded {} visits", visits.len());
        self.visits = visits;
        self.users = users;
        Ok(())
    }

    pub async fn fetch_dialog_data(&self) -> Result<VisitDialogData, AppError> {
        let users = self.api.list_users().await?;
        Ok(VisitDialogData { users })
    }

    /// Apply fetched dialog data; stale generations are silently dropped.
    pub fn apply_dialog_data(&mut self, generation: u64, data: VisitDialogData) -> bool {
        if generation != self.generation || !self.state.is_open() {
            log::debug!("Discarding stale dialog data (generation {generation})");
            return false;
        }
        self.users = data.users;
        true
    }

    pub fn open_create(&mut self) -> u64 {
        self.generation += 1;
        self.form = VisitForm::for_create();
        self.error = None;
        self.state = DialogState::Open(DialogMode::Create);
        self.generation
    }

    pub fn open_edit(&mut self, visit: &Visit) -> u64 {
        self.generation += 1;
        self.form = VisitForm::for_edit(visit);
        self.error = None;
        self.state = DialogState::Open(DialogMode::Edit(visit.id));
        self.generation
    }

    /// Completion shortcut; see the meetings page for the pre-fill rule.
    pub fn open_complete(&mut self, visit: &Visit) -> u64 {
        self.generation += 1;
        self.form = VisitForm::for_edit(visit);
        self.form.set_status(VisitStatus::Completed);
        self.error = None;
        self.state = DialogState::Open(DialogMode::Complete(visit.id));
        self.generation
    }

    pub fn close(&mut self) {
        self.generation += 1;
        self.state = DialogState::Closed;
        self.form = VisitForm::for_create();
        self.error = None;
    }

    /// Validate and send the open dialog's form; same contract as the
    /// meetings page (no network call on validation failure, dialog stays
    /// open on backend failure, one reload and one close on success).
    pub async fn submit(&mut self) -> Result<(), AppError> {
        let mode = match self.state {
            DialogState::Open(mode) => mode,
            _ => return Err(AppError::Validation("No dialog is open".to_string())),
        };

        let payload = match self.form.payload() {
            Ok(payload) => payload,
            Err(e) => {
                self.error = Some(e.user_message());
                return Err(e);
            }
        };

        self.state = DialogState::Submitting(mode);
        let result = match mode {
            DialogMode::Create => self.api.create_visit(&payload).await.map(|_| ()),
            DialogMode::Edit(id) | DialogMode::Complete(id) => {
                self.api.update_visit(id, &payload).await.map(|_| ())
            }
        };

        match result {
            Ok(()) => {
                self.close();
                self.load().await
            }
            Err(e) => {
                self.state = DialogState::Open(mode);
                self.error = Some(e.user_message());
                Err(e)
            }
        }
    }

    /// Delete a visit record and reload. The presentation layer asks for
    /// confirmation before calling this.
    pub async fn delete(&mut self, id: i64) -> Result<(), AppError> {
        self.api.delete_visit(id).await?;
        log::info!("Deleted visit {id}");
        self.load().await
    }
}
