//! Reactive form-submission state machine backing the login and register
//! screens.
//!
//! A [`FormMachine`] is owned by exactly one presentation-layer consumer
//! and mutated only through its operations, in the order the consumer
//! issues them. The single suspension point of a submission lives in
//! [`simulated_roundtrip`]; the consumer spawns it and feeds the outcome
//! back through [`FormMachine::finish_submit`].

mod fields;

pub use fields::{FieldId, FieldSpec, FormKind, Rule};

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tracing::{info, warn};

/// Fixed latency standing in for the future API round trip.
pub const SUBMIT_LATENCY: Duration = Duration::from_millis(1500);

/// Programmer error: the presentation layer targeted a field that is not
/// declared for this form kind. Indicates a wiring bug, never shown to
/// the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("field '{field}' is not declared for the {kind} form")]
pub struct UnknownFieldError {
    pub kind: FormKind,
    pub field: FieldId,
}

/// Failure of a submission attempt as a whole.
///
/// The simulated backend never produces one, but the error transition and
/// its type stay in place: they are the integration point for a real API
/// client later.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SubmitError {
    #[error("service unreachable: {0}")]
    Unreachable(String),
    #[error("request rejected: {0}")]
    Rejected(String),
}

/// Outcome of one submission attempt.
pub type SubmitResult = Result<(), SubmitError>;

/// Which button started the submission in flight. The failure message
/// shown on completion depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitPath {
    Credentials,
    /// The Google sign-in placeholder: same transitions, no validation.
    Provider,
}

/// Identity of one submission attempt, issued when the attempt enters
/// the submitting state and echoed back with its completion. No two
/// attempts in the process share a ticket, so a result surviving the
/// machine it was started on cannot terminate a newer attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitTicket(u64);

impl SubmitTicket {
    fn issue() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        Self(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// One mutable state record per form kind, with loading/success/error
/// transitions around a single unit of asynchronous work.
#[derive(Debug, Clone)]
pub struct FormMachine {
    kind: FormKind,
    values: BTreeMap<FieldId, String>,
    errors: BTreeMap<FieldId, &'static str>,
    remember_me: bool,
    terms_accepted: bool,
    terms_error: Option<&'static str>,
    in_flight: Option<(SubmitPath, SubmitTicket)>,
    submit_succeeded: bool,
    general_error: Option<&'static str>,
}

impl FormMachine {
    /// A machine with all declared fields empty and no errors.
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind
                .fields()
                .iter()
                .map(|spec| (spec.id, String::new()))
                .collect(),
            errors: BTreeMap::new(),
            remember_me: false,
            terms_accepted: false,
            terms_error: None,
            in_flight: None,
            submit_succeeded: false,
            general_error: None,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Current value of a declared field, empty string otherwise.
    pub fn value(&self, field: FieldId) -> &str {
        self.values.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn error(&self, field: FieldId) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn remember_me(&self) -> bool {
        self.remember_me
    }

    pub fn terms_accepted(&self) -> bool {
        self.terms_accepted
    }

    pub fn terms_error(&self) -> Option<&'static str> {
        self.terms_error
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Ticket of the attempt in flight, if any.
    pub fn submit_ticket(&self) -> Option<SubmitTicket> {
        self.in_flight.map(|(_, ticket)| ticket)
    }

    pub fn submit_succeeded(&self) -> bool {
        self.submit_succeeded
    }

    pub fn general_error(&self) -> Option<&'static str> {
        self.general_error
    }

    fn spec(&self, field: FieldId) -> Result<&'static FieldSpec, UnknownFieldError> {
        self.kind
            .fields()
            .iter()
            .find(|spec| spec.id == field)
            .ok_or(UnknownFieldError {
                kind: self.kind,
                field,
            })
    }

    /// Stores a new value for `field` and clears the errors an edit of it
    /// recovers from: its own, the ones it is declared to clear (e.g. the
    /// password-confirmation mismatch when the password changes) and the
    /// general one. Other fields keep their errors. Edits are accepted
    /// while a submission is in flight.
    pub fn update_field(&mut self, field: FieldId, value: String) -> Result<(), UnknownFieldError> {
        let spec = self.spec(field)?;
        self.values.insert(field, value);
        self.errors.remove(&field);
        for cleared in spec.clears {
            self.errors.remove(cleared);
        }
        self.general_error = None;
        Ok(())
    }

    pub fn set_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn set_terms_accepted(&mut self, accepted: bool) {
        self.terms_accepted = accepted;
        self.terms_error = None;
    }

    /// Runs every declared field's rule chain, in declaration order, over
    /// the current values and recomputes the error slots it inspects.
    /// Idempotent. Returns `true` iff no slot holds an error afterwards.
    pub fn validate(&mut self) -> bool {
        for spec in self.kind.fields() {
            let value = self.values.get(&spec.id).map(String::as_str).unwrap_or("");
            let failure = spec
                .rules
                .iter()
                .find_map(|rule| rule.check(value, &self.values));
            match failure {
                Some(message) => {
                    self.errors.insert(spec.id, message);
                }
                None => {
                    self.errors.remove(&spec.id);
                }
            }
        }
        if self.kind.requires_terms() {
            self.terms_error = (!self.terms_accepted).then_some(fields::TERMS_MESSAGE);
        }
        self.errors.is_empty() && self.terms_error.is_none()
    }

    /// Starts a submission: validates first and refuses to enter the
    /// submitting state on an invalid form (the populated errors stay
    /// visible and no asynchronous work must be spawned). A submit while
    /// another one is in flight is rejected. On success the caller spawns
    /// the unit of work and hands the ticket back to
    /// [`Self::finish_submit`] together with its outcome.
    pub fn begin_submit(&mut self) -> Option<SubmitTicket> {
        if self.in_flight.is_some() {
            warn!("{} form: submit ignored, already submitting", self.kind);
            return None;
        }
        if !self.validate() {
            return None;
        }
        Some(self.start(SubmitPath::Credentials))
    }

    /// Same transitions as [`Self::begin_submit`], but the provider flow
    /// performs no field validation at all.
    pub fn begin_provider_submit(&mut self) -> Option<SubmitTicket> {
        if self.in_flight.is_some() {
            warn!("{} form: submit ignored, already submitting", self.kind);
            return None;
        }
        Some(self.start(SubmitPath::Provider))
    }

    fn start(&mut self, path: SubmitPath) -> SubmitTicket {
        info!("{} form: submission started", self.kind);
        let ticket = SubmitTicket::issue();
        self.in_flight = Some((path, ticket));
        self.submit_succeeded = false;
        self.general_error = None;
        ticket
    }

    /// Applies the outcome of the unit of work identified by `ticket`. A
    /// completion arriving when nothing is in flight, or belonging to an
    /// attempt the machine no longer knows (e.g. started on a screen
    /// discarded mid-flight), is discarded without observable effect.
    pub fn finish_submit(&mut self, ticket: SubmitTicket, result: SubmitResult) {
        let Some((path, current)) = self.in_flight else {
            warn!("{} form: stale submission result dropped", self.kind);
            return;
        };
        if current != ticket {
            warn!(
                "{} form: result of a superseded submission dropped",
                self.kind
            );
            return;
        }
        self.in_flight = None;
        match result {
            Ok(()) => {
                info!("{} form: submission succeeded", self.kind);
                self.submit_succeeded = true;
            }
            Err(e) => {
                warn!("{} form: submission failed: {}", self.kind, e);
                self.general_error = Some(match path {
                    SubmitPath::Credentials => self.kind.failure_message(),
                    SubmitPath::Provider => self.kind.provider_failure_message(),
                });
            }
        }
    }

    /// Clears the success flag once the consumer has reacted to it (e.g.
    /// triggered its one-shot navigation). No-op when already cleared.
    pub fn acknowledge_success(&mut self) {
        self.submit_succeeded = false;
    }

    /// Runs a whole submission in place: validation, the round trip and
    /// the terminal transition. Returns whether the submitting state was
    /// entered at all. GUI consumers drive the same steps through
    /// [`Self::begin_submit`]/[`Self::finish_submit`] instead, so the
    /// suspension point can live in their runtime.
    pub async fn submit(&mut self) -> bool {
        let Some(ticket) = self.begin_submit() else {
            return false;
        };
        let result = simulated_roundtrip(SUBMIT_LATENCY).await;
        self.finish_submit(ticket, result);
        true
    }

    /// In-place counterpart of [`Self::begin_provider_submit`].
    pub async fn submit_with_provider(&mut self) -> bool {
        let Some(ticket) = self.begin_provider_submit() else {
            return false;
        };
        let result = simulated_roundtrip(SUBMIT_LATENCY).await;
        self.finish_submit(ticket, result);
        true
    }
}

/// Placeholder for the backend call: one fixed-duration sleep, always
/// resolving to success. No retry, no cancellation, no timeout.
pub async fn simulated_roundtrip(latency: Duration) -> SubmitResult {
    tokio::time::sleep(latency).await;
    Ok(())
}
