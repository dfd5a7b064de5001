//! Meetings page controller.

use crate::api::ApiClient;
use crate::errors::AppError;
use crate::forms::{DialogMode, DialogState, MeetingForm};
use crate::models::{Meeting, MeetingRoom, MeetingStatus, User};

/// Selectable data fetched when a dialog opens. Fetched in parallel and
/// applied through the generation guard.
#[derive(Debug, Clone)]
pub struct MeetingDialogData {
    pub users: Vec<User>,
    pub rooms: Vec<MeetingRoom>,
}

pub struct MeetingPage {
    api: ApiClient,
    /// Non-authoritative cache; fully reloaded after every mutation.
    pub meetings: Vec<Meeting>,
    pub rooms: Vec<MeetingRoom>,
    pub users: Vec<User>,
    pub state: DialogState,
    pub form: MeetingForm,
    pub error: Option<String>,
    generation: u64,
}

impl MeetingPage {
    pub fn new(api: ApiClient) -> Self {
        MeetingPage {
            api,
            meetings: Vec::new(),
            rooms: Vec::new(),
            users: Vec::new(),
            state: DialogState::Closed,
            form: MeetingForm::for_create(),
            error: None,
            generation: 0,
        }
    }

    /// Full page load: meetings, rooms and users fetched in parallel. A
    /// failure in any fetch surfaces as one error and leaves every cached
    /// list untouched.
    pub async fn load(&mut self) -> Result<(), AppError> {
        let (meetings, rooms, users) = tokio::try_join!(
            self.api.list_meetings(),
            self.api.list_rooms(),
            self.api.list_users(),
        )?;
        log::debug!("Loaded {} meetings", meetings.len());
        self.meetings = meetings;
        self.rooms = rooms;
        self.users = users;
        Ok(())
    }

    /// Selectable users and rooms for an open dialog, fetched in parallel.
    /// Apply the result via [`apply_dialog_data`](Self::apply_dialog_data)
    /// with the generation returned by the `open_*` call.
    pub async fn fetch_dialog_data(&self) -> Result<MeetingDialogData, AppError> {
        let (users, rooms) = tokio::try_join!(self.api.list_users(), self.api.list_rooms())?;
        Ok(MeetingDialogData { users, rooms })
    }

    /// Apply fetched dialog data. Returns false (and discards the data)
    /// when the generation is stale or the dialog has been closed, so a
    /// late response can never overwrite newer state.
    pub fn apply_dialog_data(&mut self, generation: u64, data: MeetingDialogData) -> bool {
        if generation != self.generation || !self.state.is_open() {
            log::debug!("Discarding stale dialog data (generation {generation})");
            return false;
        }
        self.users = data.users;
        self.rooms = data.rooms;
        true
    }

    /// Open the create dialog with defaults. Returns the generation to use
    /// with `apply_dialog_data`.
    pub fn open_create(&mut self) -> u64 {
        self.generation += 1;
        self.form = MeetingForm::for_create();
        self.error = None;
        self.state = DialogState::Open(DialogMode::Create);
        self.generation
    }

    /// Open the edit dialog populated from a persisted record.
    pub fn open_edit(&mut self, meeting: &Meeting) -> u64 {
        self.generation += 1;
        self.form = MeetingForm::for_edit(meeting);
        self.error = None;
        self.state = DialogState::Open(DialogMode::Edit(meeting.id));
        self.generation
    }

    /// Completion shortcut: a minimal dialog exposing only the end field.
    /// An empty end field is pre-filled (start + 1h); an existing value is
    /// left untouched. All other fields carry forward unchanged.
    pub fn open_complete(&mut self, meeting: &Meeting) -> u64 {
        self.generation += 1;
        self.form = MeetingForm::for_edit(meeting);
        self.form.set_status(MeetingStatus::Completed);
        self.error = None;
        self.state = DialogState::Open(DialogMode::Complete(meeting.id));
        self.generation
    }

    /// Close the dialog and reset form state. Bumps the generation so any
    /// in-flight dialog fetch is discarded on arrival.
    pub fn close(&mut self) {
        self.generation += 1;
        self.state = DialogState::Closed;
        self.form = MeetingForm::for_create();
        self.error = None;
    }

    /// Validate and send the open dialog's form.
    ///
    /// Validation failure aborts before any network call and keeps the
    /// dialog open. Backend failure keeps the dialog open with the entered
    /// values and the backend's detail message. Success closes the dialog
    /// and triggers exactly one full list reload.
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
            DialogMode::Create => self.api.create_meeting(&payload).await.map(|_| ()),
            DialogMode::Edit(id) | DialogMode::Complete(id) => {
                self.api.update_meeting(id, &payload).await.map(|_| ())
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

    /// Delete a meeting and reload. The presentation layer asks for
    /// confirmation before calling this.
    pub async fn delete(&mut self, id: i64) -> Result<(), AppError> {
        self.api.delete_meeting(id).await?;
        log::info!("Deleted meeting {id}");
        self.load().await
    }
}
