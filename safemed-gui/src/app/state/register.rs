use iced::{Element, Task};
use tracing::error;

use safemed::form::{simulated_roundtrip, FormKind, FormMachine, SUBMIT_LATENCY};
use safemed::navigation::Route;

use super::{redirect, State};
use crate::app::{message::Message, view};

pub struct RegisterPanel {
    form: FormMachine,
}

impl RegisterPanel {
    pub fn new() -> Self {
        Self {
            form: FormMachine::new(FormKind::Register),
        }
    }

    pub fn form(&self) -> &FormMachine {
        &self.form
    }
}

impl Default for RegisterPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl State for RegisterPanel {
    fn view(&self) -> Element<'_, view::Message> {
        view::auth::register(&self.form)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::View(view::Message::FieldEdited(field, value)) => {
                if let Err(e) = self.form.update_field(field, value) {
                    error!("{}", e);
                }
            }
            Message::View(view::Message::TermsToggled(accepted)) => {
                self.form.set_terms_accepted(accepted);
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
