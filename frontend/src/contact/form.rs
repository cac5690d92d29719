//! Contact form state and the submit state machine.
//!
//! `Idle --submit--> Sending --ok--> Succeeded (fields cleared)`
//! `Sending --err--> Failed (fields kept)`. Both end states take a new submit.

use std::cell::RefCell;
use std::fmt;

use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::relay::{EmailParams, EmailRelay, RelayError};

pub const SUCCESS_MESSAGE: &str = "Message sent successfully!";
pub const FAILURE_MESSAGE: &str = "Failed to send message. Please try again.";

// The "valid e-mail address" grammar browsers apply to <input type=email>.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 5] = [Field::Name, Field::Phone, Field::Email, Field::Subject, Field::Message];

    /// The input's `name` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Your Name",
            Field::Phone => "Phone Number",
            Field::Email => "Email",
            Field::Subject => "Subject",
            Field::Message => "Your Message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormState {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Phone => &mut self.phone,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors: Vec<FieldError> = Field::ALL
            .iter()
            .filter(|f| self.get(**f).trim().is_empty())
            .map(|f| FieldError::Required(*f))
            .collect();
        let email = self.email.trim();
        if !email.is_empty() && !EMAIL_RE.is_match(email) {
            errors.push(FieldError::InvalidEmail);
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn to_params(&self) -> EmailParams {
        EmailParams {
            from_name: self.name.trim().to_string(),
            phone: self.phone.trim().to_string(),
            reply_to: self.email.trim().to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{0} is required")]
    Required(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

impl FieldError {
    pub fn field(&self) -> Field {
        match self {
            FieldError::Required(field) => *field,
            FieldError::InvalidEmail => Field::Email,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("a message is already being sent")]
    InFlight,
    #[error("{} field(s) need attention", .0.len())]
    Invalid(Vec<FieldError>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactForm {
    fields: FormState,
    status: SubmissionStatus,
    errors: Vec<FieldError>,
}

impl ContactForm {
    pub fn fields(&self) -> &FormState {
        &self.fields
    }

    #[cfg(test)]
    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    pub fn result_message(&self) -> Option<&'static str> {
        match self.status {
            SubmissionStatus::Succeeded => Some(SUCCESS_MESSAGE),
            SubmissionStatus::Failed => Some(FAILURE_MESSAGE),
            SubmissionStatus::Idle | SubmissionStatus::Sending => None,
        }
    }

    pub fn error_for(&self, field: Field) -> Option<&FieldError> {
        self.errors.iter().find(|e| e.field() == field)
    }

    /// Edits one field. Its validation error, if any, goes away with the edit.
    pub fn set(&mut self, field: Field, value: String) {
        self.fields.set(field, value);
        self.errors.retain(|e| e.field() != field);
    }

    /// Starts a submission: validates, moves to `Sending`, and hands back the
    /// payload to send. Nothing changes status-wise on rejection.
    pub fn begin(&mut self) -> Result<EmailParams, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::InFlight);
        }
        if let Err(errors) = self.fields.validate() {
            self.errors = errors.clone();
            return Err(SubmitRejected::Invalid(errors));
        }
        self.errors.clear();
        self.status = SubmissionStatus::Sending;
        Ok(self.fields.to_params())
    }

    /// Settles the in-flight submission. Ignored when nothing is in flight.
    pub fn resolve(&mut self, outcome: &Result<(), RelayError>) {
        if !self.is_sending() {
            return;
        }
        match outcome {
            Ok(()) => {
                self.fields = FormState::default();
                self.status = SubmissionStatus::Succeeded;
            }
            Err(_) => self.status = SubmissionStatus::Failed,
        }
    }
}

/// Runs one submission end to end. `changed` is called after every state
/// change so the view can re-render; the form is never borrowed across the
/// await, so a second submit during the send sees `Sending` and bounces.
pub async fn submit<R, F>(form: &RefCell<ContactForm>, relay: &R, changed: F) -> Result<(), SubmitRejected>
where
    R: EmailRelay,
    F: Fn(),
{
    let started = form.borrow_mut().begin();
    changed();
    let params = started?;

    info!("Sending contact message");
    let outcome = relay.send(&params).await;
    if let Err(e) = &outcome {
        warn!("Contact message failed: {}", e);
    }

    form.borrow_mut().resolve(&outcome);
    changed();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct MockRelay {
        outcome: Result<(), RelayError>,
        sent: RefCell<Vec<EmailParams>>,
    }

    impl MockRelay {
        fn new(outcome: Result<(), RelayError>) -> Self {
            Self {
                outcome,
                sent: RefCell::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.sent.borrow().len()
        }
    }

    impl EmailRelay for MockRelay {
        async fn send(&self, params: &EmailParams) -> Result<(), RelayError> {
            self.sent.borrow_mut().push(params.clone());
            self.outcome.clone()
        }
    }

    /// Clicks submit again while its own send is in flight.
    struct ImpatientRelay<'a> {
        form: &'a RefCell<ContactForm>,
        calls: Cell<usize>,
        second_click: RefCell<Option<Result<EmailParams, SubmitRejected>>>,
    }

    impl EmailRelay for ImpatientRelay<'_> {
        async fn send(&self, _params: &EmailParams) -> Result<(), RelayError> {
            self.calls.set(self.calls.get() + 1);
            assert!(self.form.borrow().is_sending());
            *self.second_click.borrow_mut() = Some(self.form.borrow_mut().begin());
            Ok(())
        }
    }

    fn filled() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(Field::Name, "A".into());
        form.set(Field::Phone, "123".into());
        form.set(Field::Email, "a@b.com".into());
        form.set(Field::Subject, "Hi".into());
        form.set(Field::Message, "Hello".into());
        form
    }

    #[test]
    fn every_field_is_sent_trimmed() {
        let mut form = ContactForm::default();
        form.set(Field::Name, "  A ".into());
        form.set(Field::Phone, " 123".into());
        form.set(Field::Email, "a@b.com  ".into());
        form.set(Field::Subject, "\tHi".into());
        form.set(Field::Message, "\n  Hello\n".into());

        assert_eq!(
            form.begin(),
            Ok(EmailParams {
                from_name: "A".into(),
                phone: "123".into(),
                reply_to: "a@b.com".into(),
                subject: "Hi".into(),
                message: "Hello".into(),
            })
        );
    }

    #[test]
    fn success_clears_fields_and_reports() {
        let form = RefCell::new(filled());
        let relay = MockRelay::new(Ok(()));
        let renders = Cell::new(0);
        let seen_sending = Cell::new(false);

        let result = block_on(submit(&form, &relay, || {
            renders.set(renders.get() + 1);
            if form.borrow().is_sending() {
                seen_sending.set(true);
            }
        }));

        assert_eq!(result, Ok(()));
        assert!(seen_sending.get());
        assert_eq!(renders.get(), 2);
        assert_eq!(relay.calls(), 1);
        assert_eq!(
            relay.sent.borrow()[0],
            EmailParams {
                from_name: "A".into(),
                phone: "123".into(),
                reply_to: "a@b.com".into(),
                subject: "Hi".into(),
                message: "Hello".into(),
            }
        );

        let form = form.borrow();
        assert!(form.fields().is_empty());
        assert_eq!(form.status(), SubmissionStatus::Succeeded);
        assert_eq!(form.result_message(), Some("Message sent successfully!"));
        assert!(!form.is_sending());
    }

    #[test]
    fn failure_keeps_fields_and_reports() {
        let form = RefCell::new(filled());
        let before = form.borrow().fields().clone();
        let relay = MockRelay::new(Err(RelayError::Network("offline".into())));

        assert_eq!(block_on(submit(&form, &relay, || ())), Ok(()));

        let form = form.borrow();
        assert_eq!(form.fields(), &before);
        assert_eq!(form.status(), SubmissionStatus::Failed);
        assert_eq!(form.result_message(), Some(FAILURE_MESSAGE));
        assert_eq!(relay.calls(), 1);
    }

    #[test]
    fn failed_submission_can_be_retried_by_hand() {
        let form = RefCell::new(filled());
        let failing = MockRelay::new(Err(RelayError::Rejected {
            status: 500,
            body: String::new(),
        }));
        block_on(submit(&form, &failing, || ())).unwrap();
        assert_eq!(failing.calls(), 1);

        let working = MockRelay::new(Ok(()));
        block_on(submit(&form, &working, || ())).unwrap();
        assert_eq!(working.calls(), 1);
        assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn any_empty_field_blocks_the_send() {
        for missing in Field::ALL {
            let mut state = filled();
            state.set(missing, String::new());
            let form = RefCell::new(state);
            let relay = MockRelay::new(Ok(()));

            let result = block_on(submit(&form, &relay, || ()));

            assert_eq!(result, Err(SubmitRejected::Invalid(vec![FieldError::Required(missing)])));
            assert_eq!(relay.calls(), 0, "sent with {} empty", missing);
            let form = form.borrow();
            assert_eq!(form.status(), SubmissionStatus::Idle);
            assert!(form.error_for(missing).is_some());
        }
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled();
        form.set(Field::Subject, "   ".into());
        assert_eq!(
            form.begin(),
            Err(SubmitRejected::Invalid(vec![FieldError::Required(Field::Subject)]))
        );
    }

    #[test]
    fn malformed_email_blocks_the_send() {
        for bad in ["plainaddress", "a@", "@b.com", "a b@c.com", "a@-b.com"] {
            let mut state = filled();
            state.set(Field::Email, bad.into());
            let form = RefCell::new(state);
            let relay = MockRelay::new(Ok(()));

            let result = block_on(submit(&form, &relay, || ()));
            assert_eq!(result, Err(SubmitRejected::Invalid(vec![FieldError::InvalidEmail])), "{}", bad);
            assert_eq!(relay.calls(), 0);
        }
        for good in ["a@b", "first.last+tag@sub.example.org", "x@localhost"] {
            let mut form = filled();
            form.set(Field::Email, good.into());
            assert!(form.begin().is_ok(), "{}", good);
        }
    }

    #[test]
    fn second_click_while_sending_is_a_no_op() {
        let form = RefCell::new(filled());
        let relay = ImpatientRelay {
            form: &form,
            calls: Cell::new(0),
            second_click: RefCell::new(None),
        };

        block_on(submit(&form, &relay, || ())).unwrap();

        assert_eq!(relay.calls.get(), 1);
        assert_eq!(*relay.second_click.borrow(), Some(Err(SubmitRejected::InFlight)));
        assert_eq!(form.borrow().status(), SubmissionStatus::Succeeded);
    }

    #[test]
    fn editing_a_field_clears_its_error() {
        let mut form = ContactForm::default();
        assert!(form.begin().is_err());
        assert!(form.error_for(Field::Name).is_some());
        assert!(form.error_for(Field::Phone).is_some());

        form.set(Field::Name, "A".into());
        assert!(form.error_for(Field::Name).is_none());
        assert!(form.error_for(Field::Phone).is_some());
    }

    #[test]
    fn resolve_without_send_is_ignored() {
        let mut form = filled();
        form.resolve(&Ok(()));
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields().name, "A");
    }

    #[test]
    fn error_messages_name_the_field() {
        assert_eq!(FieldError::Required(Field::Phone).to_string(), "Phone Number is required");
        assert_eq!(
            SubmitRejected::Invalid(vec![FieldError::InvalidEmail]).to_string(),
            "1 field(s) need attention"
        );
    }
}
