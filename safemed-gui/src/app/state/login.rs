use iced::{Element, Task};
use tracing::error;

use safemed::form::{simulated_roundtrip, FormKind, FormMachine, SUBMIT_LATENCY};
use safemed::navigation::Route;

use super::{redirect, State};
use crate::app::{message::Message, view};

pub struct LoginPanel {
    form: FormMachine,
}

impl LoginPanel {
    pub fn new() -> Self {
        Self {
            form: FormMachine::new(FormKind::Login),
        }
    }

    pub fn form(&self) -> &FormMachine {
        &self.form
    }
}

impl Default for LoginPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl State for LoginPanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::auth::login(&self.form)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::FieldEdited(field, value)) => {
                if let Err(e) = self.form.update_field(field, value) {
                    error!("{}", e);
                }
            }
            Message::View(view::Message::RememberMeToggled(remember)) => {
                self.form.set_remember_me(remember);
            }
            Message::View(view::Message::SubmitPressed) => {
                if let Some(ticket) = self.form.begin_submit() {
                    return Task::perform(simulated_roundtrip(SUBMIT_LATENCY), move |result| {
                        Message::Submitted(ticket, result)
                    });
                }
            }
            Message::View(view::Message::ProviderPressed) => {
                if let Some(ticket) = self.form.begin_provider_submit() {
                    return Task::perform(simulated_roundtrip(SUBMIT_LATENCY), move |result| {
                        Message::Submitted(ticket, result)
                    });
                }
            }
            Message::View(view::Message::ForgotPasswordPressed) => {
                // Password recovery does not exist in the placeholder client.
            }
            Message::Submitted(ticket, result) => {
                self.form.finish_submit(ticket, result);
                if self.form.submit_succeeded() {
                    self.form.acknowledge_success();
                    return redirect(Route::Home);
                }
            }
            _ => {}
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use safemed::form::{FieldId, SubmitError, SubmitResult};

    fn edit(panel: &mut LoginPanel, field: FieldId, value: &str) {
        let _ = panel.update(Message::View(view::Message::FieldEdited(
            field,
            value.to_string(),
        )));
    }

    fn complete(panel: &mut LoginPanel, result: SubmitResult) {
        let ticket = panel.form().submit_ticket().unwrap();
        let _ = panel.update(Message::Submitted(ticket, result));
    }

    #[test]
    fn pressing_submit_on_an_invalid_form_starts_nothing() {
        let mut panel = LoginPanel::new();
        let _ = panel.update(Message::View(view::Message::SubmitPressed));
        assert!(!panel.form().is_submitting());
        assert_eq!(
            panel.form().error(FieldId::Email),
            Some("Please enter your email")
        );
    }

    #[test]
    fn successful_login_is_acknowledged_after_the_redirect() {
        let mut panel = LoginPanel::new();
        edit(&mut panel, FieldId::Email, "jane@example.com");
        edit(&mut panel, FieldId::Password, "secret1");

        let _ = panel.update(Message::View(view::Message::SubmitPressed));
        assert!(panel.form().is_submitting());

        complete(&mut panel, Ok(()));
        assert!(!panel.form().is_submitting());
        // The panel reacted to the success and cleared the one-shot flag.
        assert!(!panel.form().submit_succeeded());
    }

    #[test]
    fn failed_login_shows_the_banner() {
        let mut panel = LoginPanel::new();
        edit(&mut panel, FieldId::Email, "jane@example.com");
        edit(&mut panel, FieldId::Password, "secret1");

        let _ = panel.update(Message::View(view::Message::SubmitPressed));
        complete(
            &mut panel,
            Err(SubmitError::Unreachable("down".to_string())),
        );
        assert_eq!(
            panel.form().general_error(),
            Some("Login failed. Please try again.")
        );
    }

    #[test]
    fn provider_login_needs_no_fields() {
        let mut panel = LoginPanel::new();
        let _ = panel.update(Message::View(view::Message::ProviderPressed));
        assert!(panel.form().is_submitting());
        complete(&mut panel, Ok(()));
        assert!(!panel.form().is_submitting());
        assert!(!panel.form().submit_succeeded());
    }
}
