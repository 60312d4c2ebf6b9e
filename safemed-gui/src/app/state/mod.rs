mod login;
mod register;

pub use login::LoginPanel;
pub use register::RegisterPanel;

use iced::{Element, Task};

use safemed::navigation::Route;

use super::{message::Message, view};

pub trait State {
    fn view(&self) -> Element<'_, view::Message>;
    fn update(&mut self, _message: Message) -> Task<Message> {
        Task::none()
    }
}

/// redirect to another screen with a menu message
pub fn redirect(route: Route) -> Task<Message> {
    Task::perform(async move { route }, |route| {
        Message::View(view::Message::Menu(route))
    })
}
