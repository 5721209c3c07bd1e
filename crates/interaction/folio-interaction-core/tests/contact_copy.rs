use folio_interaction_core::{
    clipboard::{CopyFeedback, CopyIndicator},
    contact::{ContactField, ContactFields, ContactForm, EmailRelay, RelayConfig, RelayRequest, SubmitState},
    error::{ContactError, RelayError},
    outputs::NotificationKind,
};

struct RecordingRelay {
    fail_with: Option<RelayError>,
    sent: Vec<RelayRequest>,
}

impl RecordingRelay {
    fn ok() -> Self {
        Self {
            fail_with: None,
            sent: Vec::new(),
        }
    }

    fn failing() -> Self {
        Self {
            fail_with: Some(RelayError::Transport("offline".into())),
            sent: Vec::new(),
        }
    }
}

impl EmailRelay for RecordingRelay {
    fn send(&mut self, request: &RelayRequest) -> Result<(), RelayError> {
        self.sent.push(request.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

fn relay_cfg() -> RelayConfig {
    RelayConfig {
        service_id: "service_test".into(),
        template_id: "template_test".into(),
        public_key: "pk_test".into(),
    }
}

fn filled_form() -> ContactForm {
    let mut form = ContactForm::new();
    form.edit(ContactField::Name, "Ada Lovelace");
    form.edit(ContactField::Email, "ada@example.com");
    form.edit(ContactField::Message, "Let's build an engine.");
    form
}

#[test]
fn successful_submit_clears_fields_and_notifies_once() {
    let mut form = filled_form();
    let mut relay = RecordingRelay::ok();
    let note = form.submit_with(&mut relay, &relay_cfg()).unwrap();
    assert_eq!(note.kind, NotificationKind::Success);
    assert_eq!(relay.sent.len(), 1);
    assert_eq!(relay.sent[0].service_id, "service_test");
    assert_eq!(relay.sent[0].params.email, "ada@example.com");
    assert_eq!(form.fields(), &ContactFields::default());
    assert!(form.submit_enabled());
}

#[test]
fn failed_submit_keeps_fields_and_notifies_once() {
    let mut form = filled_form();
    let before = form.fields().clone();
    let mut relay = RecordingRelay::failing();
    let note = form.submit_with(&mut relay, &relay_cfg()).unwrap();
    assert_eq!(note.kind, NotificationKind::Error);
    assert_eq!(note.message, "Something went wrong. Please try again.");
    assert_eq!(form.fields(), &before);
    assert_eq!(form.state(), SubmitState::Idle);

    // Manual retry works with the preserved input.
    let mut relay = RecordingRelay::ok();
    let note = form.submit_with(&mut relay, &relay_cfg()).unwrap();
    assert_eq!(note.kind, NotificationKind::Success);
}

#[test]
fn duplicate_submit_is_rejected_while_pending() {
    let mut form = filled_form();
    form.begin_submit(&relay_cfg()).unwrap();
    assert_eq!(
        form.begin_submit(&relay_cfg()),
        Err(ContactError::SubmissionInFlight)
    );
    // Still editable while in flight.
    form.edit(ContactField::Message, "edited");
    form.finish_submit(Ok(())).unwrap();
    assert!(form.fields().message.is_empty());
}

#[test]
fn finish_without_begin_is_an_error() {
    let mut form = filled_form();
    assert_eq!(
        form.finish_submit(Ok(())),
        Err(ContactError::NoSubmissionPending)
    );
}

#[test]
fn every_field_is_required() {
    for missing in [ContactField::Name, ContactField::Email, ContactField::Message] {
        let mut form = filled_form();
        form.edit(missing, "   ");
        assert_eq!(
            form.begin_submit(&relay_cfg()),
            Err(ContactError::MissingField(missing))
        );
        assert_eq!(form.state(), SubmitState::Idle);
    }
}

#[test]
fn malformed_email_is_rejected_before_relay() {
    let mut form = filled_form();
    form.edit(ContactField::Email, "ada.example.com");
    let mut relay = RecordingRelay::ok();
    let err = form.submit_with(&mut relay, &relay_cfg()).unwrap_err();
    assert!(matches!(err, ContactError::InvalidEmail(_)));
    assert!(relay.sent.is_empty());
    assert!(form.submit_enabled());
}

#[test]
fn relay_receives_trimmed_email() {
    let mut form = filled_form();
    form.edit(ContactField::Email, "  ada@example.com \n");
    let request = form.begin_submit(&relay_cfg()).unwrap();
    assert_eq!(request.params.email, "ada@example.com");
    assert_eq!(request.params.name, "Ada Lovelace");
}

#[test]
fn copy_reverts_after_fixed_delay() {
    let mut copy = CopyFeedback::default();
    assert_eq!(copy.indicator(0.0), CopyIndicator::Copy);
    let effects = copy.copy(1000.0, "me@example.com");
    assert_eq!(effects.clipboard_text, "me@example.com");
    assert_eq!(effects.notification.message, "Email copied to clipboard!");
    assert!(copy.is_copied(1000.0));
    assert!(copy.is_copied(2999.0));
    assert!(!copy.is_copied(3000.0));
}

#[test]
fn repeated_copies_restart_the_timer() {
    let mut copy = CopyFeedback::new(2000.0);
    for t in [0.0, 500.0, 1500.0, 3000.0] {
        copy.copy(t, "me@example.com");
    }
    assert_eq!(copy.reverts_at(), Some(5000.0));
    assert_eq!(copy.indicator(4999.0), CopyIndicator::Check);
    assert_eq!(copy.indicator(5000.0), CopyIndicator::Copy);
}
