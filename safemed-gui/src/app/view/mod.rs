pub mod auth;

use iced::widget::{button, container, text, Column, Row};
use iced::{Alignment, Element, Length};

use safemed::form::FieldId;
use safemed::navigation::{NavTabs, Route};

use crate::color;

/// Events coming from the widgets, routed by the app to the screen that
/// currently owns them.
#[derive(Debug, Clone)]
pub enum Message {
    Menu(Route),
    FieldEdited(FieldId, String),
    RememberMeToggled(bool),
    TermsToggled(bool),
    SubmitPressed,
    ProviderPressed,
    ForgotPasswordPressed,
}

/// Wraps the current screen content, with the bottom navigation bar on
/// the routes belonging to the configured tab set.
pub fn app_layout<'a>(
    tabs: &'a NavTabs,
    current: Route,
    content: Element<'a, Message>,
) -> Element<'a, Message> {
    let mut layout = Column::new().push(
        container(content)
            .width(Length::Fill)
            .height(Length::Fill),
    );
    if tabs.contains(current) {
        layout = layout.push(nav_bar(tabs, current));
    }
    layout.into()
}

fn nav_bar<'a>(tabs: &'a NavTabs, current: Route) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(5)
        .padding(10)
        .width(Length::Fill)
        .align_y(Alignment::Center);
    for tab in tabs.tabs() {
        bar = bar.push(
            button(text(tab.label()).size(14))
                .style(if *tab == current {
                    button::primary
                } else {
                    button::text
                })
                .width(Length::Fill)
                .on_press(Message::Menu(*tab)),
        );
    }
    container(bar)
        .width(Length::Fill)
        .style(container::bordered_box)
        .into()
}

pub fn home<'a>() -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(20)
            .align_x(Alignment::Center)
            .push(text("SafeMed").size(32))
            .push(
                text("Check your medication safely")
                    .size(14)
                    .color(color::TEXT_SECONDARY),
            )
            .push(
                button(text("Find pharmacies nearby"))
                    .style(button::primary)
                    .padding(12)
                    .on_press(Message::Menu(Route::Map)),
            ),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}

pub fn placeholder<'a>(title: &'static str, caption: &'static str) -> Element<'a, Message> {
    container(
        Column::new()
            .spacing(10)
            .align_x(Alignment::Center)
            .push(text(title).size(28))
            .push(text(caption).size(14).color(color::TEXT_SECONDARY)),
    )
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
