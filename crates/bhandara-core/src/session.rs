//! Per-visitor view state.
//!
//! A [`Session`] is the single owner of everything that changes while a
//! visitor browses: search text, the selected location, the one-shot user
//! position, and the registration form. Callers feed it [`SessionEvent`]s and
//! render from the immutable [`SessionSnapshot`] it hands back. The detail
//! view and the registration form are independent toggles.

use std::sync::Arc;

use crate::catalog::{Catalog, Location, LocationId};
use crate::geo::Coordinates;
use crate::nearby::{rank, Nearby};
use crate::registration::{MailDraft, RegistrationForm};
use crate::search::{point_hints, PointHint};
use crate::CoreError;

#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    SearchChanged(String),
    LocationActivated(LocationId),
    DetailDismissed,
    RegisterOpened,
    RegisterDismissed,
    PositionResolved(Coordinates),
    RegistrationSubmitted(RegistrationForm),
    /// The mail client has had time to open; show the confirmation.
    SubmissionSettled,
    /// The confirmation has been shown long enough; reset and close.
    ConfirmationElapsed,
}

/// Side effects the owner must carry out after an event.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Hand the draft to the platform mail client. Delivery is not observed.
    OpenMailDraft(MailDraft),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterStatus {
    Closed,
    Open,
    Submitting,
    Submitted,
}

#[derive(Debug)]
pub struct Session {
    catalog: Arc<Catalog>,
    recipient: String,
    search: String,
    selected: Option<LocationId>,
    user_position: Option<Coordinates>,
    register: RegisterStatus,
    draft: Option<MailDraft>,
}

/// Read-only view of a session at one point in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot<'a> {
    pub search: &'a str,
    pub points: Vec<PointHint>,
    pub selected: Option<&'a Location>,
    pub nearby: Nearby<'a>,
    pub user_position: Option<Coordinates>,
    pub register: RegisterStatus,
}

impl Session {
    /// `recipient` is the address registration drafts are sent to.
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, recipient: impl Into<String>) -> Self {
        Self {
            catalog,
            recipient: recipient.into(),
            search: String::new(),
            selected: None,
            user_position: None,
            register: RegisterStatus::Closed,
            draft: None,
        }
    }

    /// Apply one event.
    ///
    /// Events that make no sense in the current state (dismissing a closed
    /// view, settling a submission that never happened, activating an id not
    /// in the catalog) leave the session unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MissingFields`] when a registration is submitted
    /// with blank required fields; the form stays open.
    pub fn apply(&mut self, event: SessionEvent) -> Result<Option<Effect>, CoreError> {
        match event {
            SessionEvent::SearchChanged(text) => self.search = text,
            SessionEvent::LocationActivated(id) => {
                if self.catalog.get(id).is_some() {
                    self.selected = Some(id);
                }
            }
            SessionEvent::DetailDismissed => self.selected = None,
            SessionEvent::RegisterOpened => {
                if self.register == RegisterStatus::Closed {
                    self.register = RegisterStatus::Open;
                }
            }
            SessionEvent::RegisterDismissed => {
                self.register = RegisterStatus::Closed;
                self.draft = None;
            }
            SessionEvent::PositionResolved(position) => {
                if self.user_position.is_none() {
                    self.user_position = Some(position);
                }
            }
            SessionEvent::RegistrationSubmitted(form) => {
                if self.register != RegisterStatus::Open {
                    return Ok(None);
                }
                let draft = MailDraft::compose(&form, &self.recipient)?;
                self.register = RegisterStatus::Submitting;
                self.draft = Some(draft.clone());
                return Ok(Some(Effect::OpenMailDraft(draft)));
            }
            SessionEvent::SubmissionSettled => {
                if self.register == RegisterStatus::Submitting {
                    self.register = RegisterStatus::Submitted;
                }
            }
            SessionEvent::ConfirmationElapsed => {
                if self.register == RegisterStatus::Submitted {
                    self.register = RegisterStatus::Closed;
                    self.draft = None;
                }
            }
        }
        Ok(None)
    }

    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        let locations = self.catalog.locations();
        SessionSnapshot {
            search: &self.search,
            points: point_hints(locations, &self.search),
            selected: self.selected.and_then(|id| self.catalog.get(id)),
            nearby: rank(locations, self.user_position),
            user_position: self.user_position,
            register: self.register,
        }
    }

    /// The draft most recently handed off, until the form resets.
    #[must_use]
    pub fn pending_draft(&self) -> Option<&MailDraft> {
        self.draft.as_ref()
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
