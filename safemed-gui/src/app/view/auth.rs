use iced::widget::{button, checkbox, container, text, text_input, Column, Row, Space};
use iced::{Alignment, Element, Length};

use safemed::form::{FieldId, FormMachine};
use safemed::navigation::Route;

use super::Message;
use crate::color;

pub fn login(form: &FormMachine) -> Element<'_, Message> {
    let submitting = form.is_submitting();
    let mut col = Column::new()
        .spacing(20)
        .max_width(420)
        .align_x(Alignment::Center)
        .push(text("Welcome back").size(32))
        .push(
            text("Sign in to continue")
                .size(14)
                .color(color::TEXT_SECONDARY),
        );
    if let Some(error) = form.general_error() {
        col = col.push(banner(error));
    }
    col = col
        .push(input(form, FieldId::Email, "Email", false))
        .push(input(form, FieldId::Password, "Password", true))
        .push(
            Row::new()
                .width(Length::Fill)
                .align_y(Alignment::Center)
                .push(
                    checkbox("Remember me", form.remember_me())
                        .on_toggle(Message::RememberMeToggled),
                )
                .push(Space::with_width(Length::Fill))
                .push(
                    button(text("Forgot password?").size(14))
                        .style(button::text)
                        .on_press(Message::ForgotPasswordPressed),
                ),
        )
        .push(submit_button(
            if submitting { "Signing in..." } else { "Sign in" },
            submitting,
        ))
        .push(provider_button("Continue with Google", submitting))
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(text("No account yet?").size(14))
                .push(
                    button(text("Register").size(14))
                        .style(button::text)
                        .on_press(Message::Menu(Route::Register)),
                ),
        );

    container(col)
        .padding(30)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

pub fn register(form: &FormMachine) -> Element<'_, Message> {
    let submitting = form.is_submitting();
    let mut col = Column::new()
        .spacing(20)
        .max_width(420)
        .align_x(Alignment::Center)
        .push(text("Create account").size(32))
        .push(
            text("Join SafeMed to verify your medication")
                .size(14)
                .color(color::TEXT_SECONDARY),
        );
    if let Some(error) = form.general_error() {
        col = col.push(banner(error));
    }

    let mut terms = Column::new().spacing(5).width(Length::Fill).push(
        checkbox("I agree to the terms of use", form.terms_accepted())
            .on_toggle(Message::TermsToggled),
    );
    if let Some(message) = form.terms_error() {
        terms = terms.push(text(message).size(12).color(color::ACCENT_RED));
    }

    col = col
        .push(input(form, FieldId::FullName, "Full name", false))
        .push(input(form, FieldId::Email, "Email", false))
        .push(input(form, FieldId::Phone, "Phone number", false))
        .push(input(form, FieldId::Password, "Password", true))
        .push(input(form, FieldId::ConfirmPassword, "Confirm password", true))
        .push(terms)
        .push(submit_button(
            if submitting {
                "Creating account..."
            } else {
                "Create account"
            },
            submitting,
        ))
        .push(provider_button("Sign up with Google", submitting))
        .push(
            Row::new()
                .spacing(5)
                .align_y(Alignment::Center)
                .push(text("Already have an account?").size(14))
                .push(
                    button(text("Sign in").size(14))
                        .style(button::text)
                        .on_press(Message::Menu(Route::Login)),
                ),
        );

    container(col)
        .padding(30)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}

fn input<'a>(
    form: &'a FormMachine,
    field: FieldId,
    placeholder: &'a str,
    secure: bool,
) -> Element<'a, Message> {
    let mut col = Column::new().spacing(5).width(Length::Fill).push(
        text_input(placeholder, form.value(field))
            .on_input(move |value| Message::FieldEdited(field, value))
            .secure(secure)
            .padding(10),
    );
    if let Some(message) = form.error(field) {
        col = col.push(text(message).size(12).color(color::ACCENT_RED));
    }
    col.into()
}

fn banner(message: &str) -> Element<'_, Message> {
    container(text(message).size(14).color(color::ACCENT_RED))
        .padding(10)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

fn submit_button(label: &str, submitting: bool) -> Element<'_, Message> {
    button(text(label))
        .style(button::primary)
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe((!submitting).then_some(Message::SubmitPressed))
        .into()
}

fn provider_button(label: &str, submitting: bool) -> Element<'_, Message> {
    button(text(label))
        .style(button::secondary)
        .width(Length::Fill)
        .padding(12)
        .on_press_maybe((!submitting).then_some(Message::ProviderPressed))
        .into()
}
