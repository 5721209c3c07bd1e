//! Contact form submit cycle.
//!
//! Submission is two-phase so hosts with an asynchronous relay can suspend in
//! between: [`ContactForm::begin_submit`] validates, disables the submit control
//! and hands back the request; [`ContactForm::finish_submit`] takes the relay's
//! verdict, re-enables the control and yields the one notification to show.

use std::fmt;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{ContactError, RelayError};
use crate::outputs::Notification;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Message => "message",
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

impl ContactFields {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }

    pub fn validate(&self) -> Result<(), ContactError> {
        for field in [ContactField::Name, ContactField::Email, ContactField::Message] {
            if self.get(field).trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// The three opaque identifiers the relay needs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

/// Everything the relay call needs, captured at submit time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayRequest {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub params: ContactFields,
}

/// Synchronous relay seam, used by native hosts and tests.
pub trait EmailRelay {
    fn send(&mut self, request: &RelayRequest) -> Result<(), RelayError>;
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    state: SubmitState,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// The submit control is disabled while a submission is in flight.
    pub fn submit_enabled(&self) -> bool {
        self.state == SubmitState::Idle
    }

    pub fn submit_label(&self) -> &'static str {
        match self.state {
            SubmitState::Idle => "Send Message",
            SubmitState::Submitting => "Sending...",
        }
    }

    /// Fields stay editable in every state.
    pub fn edit(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.fields.name = value,
            ContactField::Email => self.fields.email = value,
            ContactField::Message => self.fields.message = value,
        }
    }

    pub fn begin_submit(&mut self, relay: &RelayConfig) -> Result<RelayRequest, ContactError> {
        if self.state == SubmitState::Submitting {
            return Err(ContactError::SubmissionInFlight);
        }
        self.fields.validate()?;
        self.state = SubmitState::Submitting;
        Ok(RelayRequest {
            service_id: relay.service_id.clone(),
            template_id: relay.template_id.clone(),
            public_key: relay.public_key.clone(),
            params: ContactFields {
                email: self.fields.email.trim().to_string(),
                ..self.fields.clone()
            },
        })
    }

    pub fn finish_submit(
        &mut self,
        outcome: Result<(), RelayError>,
    ) -> Result<Notification, ContactError> {
        if self.state != SubmitState::Submitting {
            return Err(ContactError::NoSubmissionPending);
        }
        self.state = SubmitState::Idle;
        match outcome {
            Ok(()) => {
                info!("contact: message relayed");
                self.fields = ContactFields::default();
                Ok(Notification::success(SENT_MESSAGE))
            }
            Err(err) => {
                info!("contact: relay failed: {err}");
                Ok(Notification::error(FAILED_MESSAGE))
            }
        }
    }

    /// Both phases back to back against a synchronous relay.
    pub fn submit_with<R: EmailRelay + ?Sized>(
        &mut self,
        relay: &mut R,
        cfg: &RelayConfig,
    ) -> Result<Notification, ContactError> {
        let request = self.begin_submit(cfg)?;
        let outcome = relay.send(&request);
        self.finish_submit(outcome)
    }
}

/// Browser-grade address check: the WHATWG "valid e-mail address" grammar.
pub fn is_valid_email(address: &str) -> bool {
    let Some((local, domain)) = address.split_once('@') else {
        return false;
    };
    if local.is_empty() || !local.chars().all(is_local_char) {
        return false;
    }
    !domain.is_empty() && domain.split('.').all(is_domain_label)
}

fn is_local_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || ".!#$%&'*+/=?^_`{|}~-".contains(c)
}

fn is_domain_label(label: &str) -> bool {
    let bytes = label.as_bytes();
    !bytes.is_empty()
        && bytes.len() <= 63
        && bytes[0].is_ascii_alphanumeric()
        && bytes[bytes.len() - 1].is_ascii_alphanumeric()
        && bytes.iter().all(|b| b.is_ascii_alphanumeric() || *b == b'-')
}
