use super::*;

fn filled() -> ContactState {
    let mut state = ContactState::default();
    state.set_field(Field::Name, "Ada".to_owned());
    state.set_field(Field::Email, "ada@example.com".to_owned());
    state.set_field(Field::Subject, "Hello".to_owned());
    state.set_field(Field::Message, "Nice site".to_owned());
    state
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_complete_form() {
    assert!(validate(&filled().form).is_empty());
}

#[test]
fn validate_requires_trimmed_fields() {
    let form = ContactForm {
        name: "   ".to_owned(),
        email: String::new(),
        subject: "\t".to_owned(),
        message: "\n".to_owned(),
    };
    let errors = validate(&form);
    assert_eq!(errors.name, Some("Name is required"));
    assert_eq!(errors.email, Some("Email is required"));
    assert_eq!(errors.subject, Some("Subject is required"));
    assert_eq!(errors.message, Some("Message is required"));
}

#[test]
fn validate_rejects_malformed_email() {
    for bad in ["ada", "ada@example", "@.", "ada @example.com"] {
        let mut state = filled();
        state.set_field(Field::Email, bad.to_owned());
        assert_eq!(validate(&state.form).email, Some("Email address is invalid"), "{bad}");
    }
}

#[test]
fn validate_accepts_simple_email_shapes() {
    for good in ["a@b.c", "first.last@sub.example.org", "x+y@z.io"] {
        let mut state = filled();
        state.set_field(Field::Email, good.to_owned());
        assert_eq!(validate(&state.form).email, None, "{good}");
    }
}

// =============================================================
// submission flow
// =============================================================

#[test]
fn empty_name_yields_error_and_no_request() {
    let mut state = filled();
    state.set_field(Field::Name, String::new());
    assert!(state.begin_submit().is_none());
    assert_eq!(state.errors.get(Field::Name), Some("Name is required"));
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn valid_submit_returns_request_and_marks_in_flight() {
    let mut state = filled();
    let request = state.begin_submit().unwrap();
    assert_eq!(request.name, "Ada");
    assert_eq!(request.email, "ada@example.com");
    assert!(state.is_submitting());
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());
    assert!(state.begin_submit().is_none());
    assert!(state.is_submitting());
}

#[test]
fn failure_keeps_values_and_sets_error_status() {
    let mut state = filled();
    state.begin_submit().unwrap();
    state.finish_submit(Err("500".to_owned()));
    assert_eq!(state.status, SubmitStatus::Error);
    assert_eq!(state.form.name, "Ada");
    assert_eq!(state.form.message, "Nice site");
}

#[test]
fn error_status_allows_resubmit() {
    let mut state = filled();
    state.begin_submit().unwrap();
    state.finish_submit(Err("network".to_owned()));
    assert!(state.begin_submit().is_some());
}

#[test]
fn success_clears_form_and_reset_returns_to_idle() {
    let mut state = filled();
    state.begin_submit().unwrap();
    state.finish_submit(Ok(()));
    assert_eq!(state.status, SubmitStatus::Success);
    assert_eq!(state.form, ContactForm::default());
    state.reset_to_editing();
    assert_eq!(state.status, SubmitStatus::Idle);
}

#[test]
fn finish_without_submission_is_ignored() {
    let mut state = filled();
    state.finish_submit(Ok(()));
    assert_eq!(state.status, SubmitStatus::Idle);
    assert_eq!(state.form.name, "Ada");
}

#[test]
fn typing_clears_only_that_fields_error() {
    let mut state = ContactState::default();
    assert!(state.begin_submit().is_none());
    assert!(state.errors.name.is_some());
    assert!(state.errors.email.is_some());
    state.set_field(Field::Name, "A".to_owned());
    assert_eq!(state.errors.name, None);
    assert!(state.errors.email.is_some());
    assert_eq!(state.form.get(Field::Name), "A");
}
