use super::*;

fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
    ContactForm {
        name: name.to_owned(),
        email: email.to_owned(),
        subject: subject.to_owned(),
        message: message.to_owned(),
    }
}

fn valid_form() -> ContactForm {
    form("A", "a@b.com", "Hi", "Hello")
}

fn state_with(form: ContactForm) -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set_field(ContactField::Name, form.name);
    state.set_field(ContactField::Email, form.email);
    state.set_field(ContactField::Subject, form.subject);
    state.set_field(ContactField::Message, form.message);
    state
}

// =============================================================
// is_valid_email
// =============================================================

#[test]
fn email_accepts_basic_shapes() {
    for email in ["a@b.com", "first.last@sub.example.org", "x+tag@d.io", "a@b.c"] {
        assert!(is_valid_email(email), "expected {email:?} to pass");
    }
}

#[test]
fn email_rejects_malformed_shapes() {
    for email in [
        "bad",
        "a@b",
        "@b.com",
        "a@.com",
        "a@b.",
        "a@@b.com",
        "a@b@c.com",
        "a b@c.com",
        " a@b.com",
        "a@b.com ",
        "a@b\t.com",
        "",
    ] {
        assert!(!is_valid_email(email), "expected {email:?} to fail");
    }
}

#[test]
fn email_accepts_non_ascii_parts() {
    assert!(is_valid_email("jé@exämple.com"));
}

// =============================================================
// ContactForm::validate
// =============================================================

#[test]
fn validate_accepts_complete_form() {
    assert_eq!(valid_form().validate(), Ok(()));
}

#[test]
fn validate_reports_first_failure_in_order() {
    assert_eq!(form("", "", "", "").validate(), Err(ValidationError::MissingName));
    assert_eq!(form("A", "", "", "").validate(), Err(ValidationError::MissingEmail));
    assert_eq!(form("A", "bad", "", "").validate(), Err(ValidationError::InvalidEmail));
    assert_eq!(form("A", "a@b.com", "", "").validate(), Err(ValidationError::MissingSubject));
    assert_eq!(form("A", "a@b.com", "Hi", "").validate(), Err(ValidationError::MissingMessage));
}

#[test]
fn validate_treats_whitespace_only_as_empty() {
    assert_eq!(form("  \t", "a@b.com", "Hi", "Hello").validate(), Err(ValidationError::MissingName));
    assert_eq!(form("A", "   ", "Hi", "Hello").validate(), Err(ValidationError::MissingEmail));
    assert_eq!(form("A", "a@b.com", "\n", "Hello").validate(), Err(ValidationError::MissingSubject));
    assert_eq!(form("A", "a@b.com", "Hi", " ").validate(), Err(ValidationError::MissingMessage));
}

#[test]
fn validation_messages_name_the_field() {
    assert_eq!(ValidationError::MissingName.to_string(), "Please enter a name.");
    assert_eq!(ValidationError::MissingEmail.to_string(), "Please enter an email.");
    assert_eq!(ValidationError::InvalidEmail.to_string(), "Please enter a valid email format.");
    assert_eq!(ValidationError::MissingSubject.to_string(), "Please enter a subject.");
    assert_eq!(ValidationError::MissingMessage.to_string(), "Please enter a message.");
}

#[test]
fn contact_form_field_accessors_round_trip() {
    let mut f = ContactForm::default();
    f.set(ContactField::Subject, "Project".to_owned());
    assert_eq!(f.field(ContactField::Subject), "Project");
    assert_eq!(f.field(ContactField::Name), "");
    f.clear();
    assert_eq!(f, ContactForm::default());
}

#[test]
fn contact_form_serializes_wire_field_names() {
    let json = serde_json::to_value(valid_form()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "name": "A", "email": "a@b.com", "subject": "Hi", "message": "Hello" })
    );
}

// =============================================================
// begin_submit
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = ContactFormState::default();
    assert_eq!(state.status(), FormStatus::Idle);
    assert_eq!(state.message(), "");
    assert_eq!(state.form(), &ContactForm::default());
    assert!(!state.is_busy());
}

#[test]
fn begin_submit_missing_name_sets_error_and_keeps_fields() {
    let mut state = state_with(form("", "a@b.com", "Hi", "Hello"));
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status(), FormStatus::Error);
    assert_eq!(state.message(), "Please enter a name.");
    assert_eq!(state.form(), &form("", "a@b.com", "Hi", "Hello"));
}

#[test]
fn begin_submit_bad_email_sets_format_error() {
    let mut state = state_with(form("A", "bad", "Hi", "Hello"));
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status(), FormStatus::Error);
    assert_eq!(state.message(), "Please enter a valid email format.");
}

#[test]
fn begin_submit_valid_enters_loading_with_snapshot() {
    let mut state = state_with(valid_form());
    let (_, payload) = state.begin_submit().unwrap();
    assert_eq!(payload, valid_form());
    assert_eq!(state.status(), FormStatus::Loading);
    assert_eq!(state.message(), SENDING_MESSAGE);
    assert!(state.is_busy());
}

#[test]
fn begin_submit_is_rejected_while_loading() {
    let mut state = state_with(valid_form());
    state.begin_submit().unwrap();
    assert!(state.begin_submit().is_none());
    assert_eq!(state.status(), FormStatus::Loading);
}

// =============================================================
// finish_submit / expire
// =============================================================

#[test]
fn full_success_cycle_clears_fields_and_returns_to_idle() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();

    let reset = state.finish_submit(ticket, Ok(())).unwrap();
    assert_eq!(state.status(), FormStatus::Success);
    assert_eq!(state.message(), SUCCESS_MESSAGE);
    assert_eq!(state.form(), &ContactForm::default());

    assert!(state.expire(reset));
    assert_eq!(state.status(), FormStatus::Idle);
    assert_eq!(state.message(), "");
}

#[test]
fn failed_delivery_keeps_fields_for_retry() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();

    let reset = state.finish_submit(ticket, Err(SubmitError::Network("offline".to_owned())));
    assert!(reset.is_none());
    assert_eq!(state.status(), FormStatus::Error);
    assert_eq!(state.message(), FAILURE_MESSAGE);
    assert_eq!(state.form(), &valid_form());

    assert!(state.begin_submit().is_some());
}

#[test]
fn stale_finish_is_ignored() {
    let mut state = state_with(valid_form());
    let (first, _) = state.begin_submit().unwrap();
    state.finish_submit(first, Err(SubmitError::Status(502)));
    let (second, _) = state.begin_submit().unwrap();

    assert!(state.finish_submit(first, Ok(())).is_none());
    assert_eq!(state.status(), FormStatus::Loading);
    assert!(state.finish_submit(second, Ok(())).is_some());
}

#[test]
fn stale_reset_does_not_clear_newer_submission() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();
    let reset = state.finish_submit(ticket, Ok(())).unwrap();

    // User sends another message before the reset timer fires.
    state.set_field(ContactField::Name, "B".to_owned());
    state.set_field(ContactField::Email, "b@c.org".to_owned());
    state.set_field(ContactField::Subject, "Again".to_owned());
    state.set_field(ContactField::Message, "Hello again".to_owned());
    state.begin_submit().unwrap();

    assert!(!state.expire(reset));
    assert_eq!(state.status(), FormStatus::Loading);
    assert_eq!(state.message(), SENDING_MESSAGE);
}

#[test]
fn stale_reset_does_not_clear_validation_error() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();
    let reset = state.finish_submit(ticket, Ok(())).unwrap();

    // Fields were cleared, so an immediate resubmit fails validation.
    assert!(state.begin_submit().is_none());
    assert!(!state.expire(reset));
    assert_eq!(state.status(), FormStatus::Error);
    assert_eq!(state.message(), "Please enter a name.");
}

#[test]
fn typing_during_success_keeps_pending_reset() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();
    let reset = state.finish_submit(ticket, Ok(())).unwrap();

    state.set_field(ContactField::Name, "C".to_owned());
    assert!(state.expire(reset));
    assert_eq!(state.status(), FormStatus::Idle);
    assert_eq!(state.form().name, "C");
}

#[test]
fn expire_twice_applies_once() {
    let mut state = state_with(valid_form());
    let (ticket, _) = state.begin_submit().unwrap();
    let reset = state.finish_submit(ticket, Ok(())).unwrap();
    assert!(state.expire(reset));
    assert!(!state.expire(reset));
}

#[test]
fn submit_error_messages_are_descriptive() {
    assert_eq!(SubmitError::Status(502).to_string(), "server returned 502");
    assert_eq!(
        SubmitError::Rejected { status: 429, message: "slow down".to_owned() }.to_string(),
        "rejected (429): slow down"
    );
}

#[test]
fn delays_match_flow_timing() {
    assert_eq!(SIMULATED_DELIVERY_DELAY, Duration::from_secs(2));
    assert_eq!(RESET_DELAY, Duration::from_secs(3));
}
