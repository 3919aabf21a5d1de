use super::*;

use std::cell::RefCell;
use std::future::Future;
use std::task::Context;

use async_trait::async_trait;
use futures::executor::block_on;

use crate::net::relay::TransportError;
use crate::state::notification::Severity;

const ENDPOINT: &str = "https://formspree.io/f/test";

struct FakeTransport {
    result: Result<RelayResponse, TransportError>,
    sent: RefCell<Vec<FormSubmission>>,
}

impl FakeTransport {
    fn responding(status: u16, body: &str) -> Self {
        Self { result: Ok(RelayResponse::new(status, body)), sent: RefCell::new(Vec::new()) }
    }

    fn failing() -> Self {
        Self {
            result: Err(TransportError::Request("connection refused".to_owned())),
            sent: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl RelayTransport for FakeTransport {
    async fn post_form(&self, submission: &FormSubmission) -> Result<RelayResponse, TransportError> {
        self.sent.borrow_mut().push(submission.clone());
        self.result.clone()
    }
}

struct StalledTransport;

#[async_trait(?Send)]
impl RelayTransport for StalledTransport {
    async fn post_form(&self, _submission: &FormSubmission) -> Result<RelayResponse, TransportError> {
        futures::future::pending().await
    }
}

#[derive(Default)]
struct FakeSurface {
    fields: RefCell<ContactFields>,
    submitting: RefCell<Vec<bool>>,
    notifications: RefCell<Vec<Notification>>,
}

impl FakeSurface {
    fn with(fields: ContactFields) -> Self {
        Self { fields: RefCell::new(fields), ..Self::default() }
    }

    fn is_submitting(&self) -> bool {
        self.submitting.borrow().last().copied().unwrap_or(false)
    }

    fn last_notification(&self) -> Option<Notification> {
        self.notifications.borrow().last().cloned()
    }
}

impl FormSurface for FakeSurface {
    fn read_fields(&self) -> ContactFields {
        self.fields.borrow().clone()
    }

    fn set_submitting(&self, submitting: bool) {
        self.submitting.borrow_mut().push(submitting);
    }

    fn reset_fields(&self) {
        *self.fields.borrow_mut() = ContactFields::default();
    }

    fn show_notification(&self, notification: Notification) {
        self.notifications.borrow_mut().push(notification);
    }
}

fn ana() -> ContactFields {
    ContactFields::new("Ana", "ana@x.com", "Hi", "Hello")
}

fn controller<T: RelayTransport>(transport: T) -> ContactController<T> {
    ContactController::new(Some(ENDPOINT), transport).expect("endpoint present")
}

// =============================================================
// validate
// =============================================================

#[test]
fn validate_accepts_complete_fields() {
    assert_eq!(validate(&ana()), Ok(()));
}

#[test]
fn validate_rejects_each_missing_field() {
    let cases = [
        ContactFields::new("", "ana@x.com", "Hi", "Hello"),
        ContactFields::new("Ana", "", "Hi", "Hello"),
        ContactFields::new("Ana", "ana@x.com", "", "Hello"),
        ContactFields::new("Ana", "ana@x.com", "Hi", ""),
        ContactFields::default(),
    ];
    for fields in cases {
        assert_eq!(validate(&fields), Err(ValidationError::MissingField), "{fields:?}");
    }
}

#[test]
fn validate_counts_whitespace_as_filled() {
    let fields = ContactFields::new("  ", "ana@x.com", "Hi", "   ");
    assert_eq!(validate(&fields), Ok(()));
}

#[test]
fn validate_whitespace_email_is_malformed_not_missing() {
    let fields = ContactFields::new("Ana", "   ", "Hi", "Hello");
    assert_eq!(validate(&fields), Err(ValidationError::MalformedEmail));
}

#[test]
fn validate_reports_missing_before_malformed_email() {
    let fields = ContactFields::new("", "not-an-email", "Hi", "Hello");
    assert_eq!(validate(&fields), Err(ValidationError::MissingField));
}

#[test]
fn validate_rejects_malformed_email() {
    let fields = ContactFields::new("Ana", "ana.x.com", "Hi", "Hello");
    assert_eq!(validate(&fields), Err(ValidationError::MalformedEmail));
}

#[test]
fn validation_error_messages_are_user_facing() {
    assert_eq!(ValidationError::MissingField.to_string(), "Please fill in all fields.");
    assert_eq!(ValidationError::MalformedEmail.to_string(), "Please enter a valid email address.");
}

#[test]
fn is_valid_email_accepts_well_formed_addresses() {
    for email in ["a@b.c", "ana@x.com", "first.last@mail.example.org", "a+tag@sub.domain.io", "a@.b.c"] {
        assert!(is_valid_email(email), "{email}");
    }
}

#[test]
fn is_valid_email_rejects_malformed_addresses() {
    for email in [
        "",
        "plain",
        "no-at.example.com",
        "@b.c",
        "a@",
        "a@b",
        "a@b.",
        "a@.c",
        "a@@b.c",
        "a@b@c.d",
        "a b@c.d",
        "a@b .c",
        "a@b.c ",
        "\ta@b.c",
    ] {
        assert!(!is_valid_email(email), "{email:?}");
    }
}

// =============================================================
// FormSubmission
// =============================================================

#[test]
fn form_submission_requires_valid_fields() {
    let err = FormSubmission::new(ContactFields::default(), ENDPOINT);
    assert_eq!(err, Err(ValidationError::MissingField));
}

#[test]
fn form_submission_pairs_in_form_order() {
    let submission = FormSubmission::new(ana(), ENDPOINT).expect("valid");
    assert_eq!(submission.endpoint(), ENDPOINT);
    assert_eq!(
        submission.pairs(),
        [("name", "Ana"), ("email", "ana@x.com"), ("subject", "Hi"), ("message", "Hello")]
    );
}

// =============================================================
// SubmissionOutcome / notify
// =============================================================

#[test]
fn outcome_from_2xx_is_success() {
    assert_eq!(SubmissionOutcome::from_response(&RelayResponse::new(200, "{}")), SubmissionOutcome::Success);
    assert_eq!(SubmissionOutcome::from_response(&RelayResponse::new(201, "")), SubmissionOutcome::Success);
}

#[test]
fn outcome_from_rejection_carries_relay_messages() {
    let resp = RelayResponse::new(422, r#"{"errors":[{"message":"X"},{"message":"Y"}]}"#);
    assert_eq!(
        SubmissionOutcome::from_response(&resp),
        SubmissionOutcome::Rejected(vec!["X".to_owned(), "Y".to_owned()])
    );
}

#[test]
fn outcome_from_unparsable_rejection_uses_generic_message() {
    let resp = RelayResponse::new(500, "Internal Server Error");
    assert_eq!(
        SubmissionOutcome::from_response(&resp),
        SubmissionOutcome::Rejected(vec![GENERIC_REJECTION.to_owned()])
    );
}

#[test]
fn notify_maps_each_outcome() {
    assert_eq!(notify(&SubmissionOutcome::Success), Notification::success(SUCCESS_TEXT));
    assert_eq!(
        notify(&SubmissionOutcome::Rejected(vec!["X".to_owned(), "Y".to_owned()])),
        Notification::error("X, Y")
    );
    assert_eq!(notify(&SubmissionOutcome::NetworkFailure), Notification::error(NETWORK_FAILURE_TEXT));
}

// =============================================================
// ContactController
// =============================================================

#[test]
fn controller_requires_endpoint() {
    assert!(ContactController::new(None, FakeTransport::responding(200, "")).is_none());
    assert!(ContactController::new(Some("   "), FakeTransport::responding(200, "")).is_none());
    let ctrl = ContactController::new(Some(" https://relay.test/f "), FakeTransport::responding(200, ""))
        .expect("endpoint present");
    assert_eq!(ctrl.endpoint(), "https://relay.test/f");
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);
}

#[test]
fn successful_submission_resets_form_and_notifies() {
    let ctrl = controller(FakeTransport::responding(200, r#"{"ok":true}"#));
    let surface = FakeSurface::with(ana());

    let report = block_on(ctrl.submit(&surface));

    assert_eq!(report, SubmitReport::Completed(SubmissionOutcome::Success));
    assert!(surface.read_fields().is_empty());
    let note = surface.last_notification().expect("notification shown");
    assert_eq!(note.severity, Severity::Success);
    assert_eq!(note.text, SUCCESS_TEXT);
    assert_eq!(*surface.submitting.borrow(), vec![true, false]);
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);

    let sent = ctrl.transport.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].fields(), &ana());
    assert_eq!(sent[0].endpoint(), ENDPOINT);
}

#[test]
fn invalid_submission_never_reaches_transport() {
    let ctrl = controller(FakeTransport::responding(200, ""));
    let surface = FakeSurface::with(ContactFields::new("Ana", "", "Hi", "Hello"));

    let report = block_on(ctrl.submit(&surface));

    assert_eq!(report, SubmitReport::Invalid(ValidationError::MissingField));
    assert!(ctrl.transport.sent.borrow().is_empty());
    assert!(surface.submitting.borrow().is_empty());
    assert_eq!(surface.last_notification(), Some(Notification::error("Please fill in all fields.")));
    assert_eq!(surface.read_fields().name, "Ana");
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);
}

#[test]
fn malformed_email_never_reaches_transport() {
    let ctrl = controller(FakeTransport::responding(200, ""));
    let surface = FakeSurface::with(ContactFields::new("Ana", "ana@x", "Hi", "Hello"));

    let report = block_on(ctrl.submit(&surface));

    assert_eq!(report, SubmitReport::Invalid(ValidationError::MalformedEmail));
    assert!(ctrl.transport.sent.borrow().is_empty());
    assert_eq!(
        surface.last_notification(),
        Some(Notification::error("Please enter a valid email address."))
    );
}

#[test]
fn rejection_shows_relay_messages_and_keeps_fields() {
    let ctrl = controller(FakeTransport::responding(422, r#"{"errors":[{"message":"X"}]}"#));
    let surface = FakeSurface::with(ana());

    let report = block_on(ctrl.submit(&surface));

    assert_eq!(report, SubmitReport::Completed(SubmissionOutcome::Rejected(vec!["X".to_owned()])));
    let note = surface.last_notification().expect("notification shown");
    assert_eq!(note.severity, Severity::Error);
    assert!(note.text.contains('X'));
    assert_eq!(surface.read_fields(), ana());
    assert!(!surface.is_submitting());
}

#[test]
fn unparsable_rejection_shows_generic_message() {
    let ctrl = controller(FakeTransport::responding(400, "not json"));
    let surface = FakeSurface::with(ana());

    block_on(ctrl.submit(&surface));

    assert_eq!(surface.last_notification(), Some(Notification::error(GENERIC_REJECTION)));
    assert!(!surface.is_submitting());
}

#[test]
fn transport_failure_is_network_failure_and_reenables_control() {
    let ctrl = controller(FakeTransport::failing());
    let surface = FakeSurface::with(ana());

    let report = block_on(ctrl.submit(&surface));

    assert_eq!(report, SubmitReport::Completed(SubmissionOutcome::NetworkFailure));
    assert_eq!(surface.last_notification(), Some(Notification::error(NETWORK_FAILURE_TEXT)));
    assert_eq!(*surface.submitting.borrow(), vec![true, false]);
    assert_eq!(surface.read_fields(), ana());
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);
}

#[test]
fn exactly_one_notification_per_attempt() {
    let ctrl = controller(FakeTransport::responding(200, ""));
    let surface = FakeSurface::with(ana());
    block_on(ctrl.submit(&surface));
    assert_eq!(surface.notifications.borrow().len(), 1);
}

#[test]
fn second_submit_while_in_flight_is_refused() {
    let ctrl = controller(StalledTransport);
    let surface = FakeSurface::with(ana());

    let mut first = Box::pin(ctrl.submit(&surface));
    let mut cx = Context::from_waker(futures::task::noop_waker_ref());
    assert!(first.as_mut().poll(&mut cx).is_pending());
    assert_eq!(ctrl.phase(), SubmitPhase::InFlight);
    assert!(surface.is_submitting());

    let second = block_on(ctrl.submit(&surface));
    assert_eq!(second, SubmitReport::Busy);
    assert!(surface.notifications.borrow().is_empty());

    drop(first);
}

#[test]
fn dropping_in_flight_submission_releases_control() {
    let ctrl = controller(StalledTransport);
    let surface = FakeSurface::with(ana());

    let mut fut = Box::pin(ctrl.submit(&surface));
    let mut cx = Context::from_waker(futures::task::noop_waker_ref());
    assert!(fut.as_mut().poll(&mut cx).is_pending());
    assert!(surface.is_submitting());

    drop(fut);

    assert!(!surface.is_submitting());
    assert_eq!(ctrl.phase(), SubmitPhase::Idle);
    assert!(surface.notifications.borrow().is_empty());
}

#[test]
fn resubmitting_after_failure_sends_a_new_request() {
    let ctrl = controller(FakeTransport::failing());
    let surface = FakeSurface::with(ana());

    block_on(ctrl.submit(&surface));
    block_on(ctrl.submit(&surface));

    assert_eq!(ctrl.transport.sent.borrow().len(), 2);
}
