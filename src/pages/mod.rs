//! Page controllers.
//!
//! One controller per console page: it owns the cached entity lists, the
//! single dialog instance and its form, and drives the REST client. The
//! presentation layer renders from the controller's public fields and
//! calls the methods from its event handlers.

pub mod meeting_page;
pub mod visit_page;

pub use meeting_page::{MeetingDialogData, MeetingPage};
pub use visit_page::{VisitDialogData, VisitPage};
