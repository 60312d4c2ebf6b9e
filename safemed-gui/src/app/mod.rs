pub mod config;
pub mod message;
pub mod state;
pub mod view;

use iced::{Element, Task, Theme};
use tracing::info;

use safemed::navigation::{NavTabs, Route};

pub use config::Config;
pub use message::Message;

use crate::color;
use state::{LoginPanel, RegisterPanel, State};

struct Panels {
    current: Route,
    login: LoginPanel,
    register: RegisterPanel,
}

impl Panels {
    fn new() -> Panels {
        Self {
            current: Route::Login,
            login: LoginPanel::new(),
            register: RegisterPanel::new(),
        }
    }

    fn current_mut(&mut self) -> Option<&mut dyn State> {
        match self.current {
            Route::Login => Some(&mut self.login),
            Route::Register => Some(&mut self.register),
            _ => None,
        }
    }
}

pub struct App {
    panels: Panels,
    tabs: NavTabs,
}

impl App {
    pub fn new(config: Config) -> (App, Task<Message>) {
        (
            Self {
                panels: Panels::new(),
                tabs: config.nav_tabs,
            },
            Task::none(),
        )
    }

    pub fn title(&self) -> String {
        format!("SafeMed - {}", self.panels.current.label())
    }

    pub fn theme(&self) -> Theme {
        Theme::custom(
            "SafeMed".to_string(),
            iced::theme::Palette {
                background: color::SURFACE_LIGHT,
                text: color::TEXT_PRIMARY,
                primary: color::EMERALD_GREEN,
                success: color::EMERALD_GREEN_DARK,
                danger: color::ACCENT_RED,
            },
        )
    }

    fn navigate(&mut self, route: Route) {
        if self.panels.current == route {
            return;
        }
        info!("navigating to {}", route);
        // The auth screens do not survive being left: a fresh machine
        // backs the screen on re-entry, and a completion still in flight
        // for the old one hits the stale-completion guard.
        match self.panels.current {
            Route::Login => self.panels.login = LoginPanel::new(),
            Route::Register => self.panels.register = RegisterPanel::new(),
            _ => {}
        }
        self.panels.current = route;
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Message::View(view::Message::Menu(route)) = message {
            self.navigate(route);
            return Task::none();
        }
        match self.panels.current_mut() {
            Some(panel) => panel.update(message),
            None => Task::none(),
        }
    }

    pub fn view(&self) -> Element<Message> {
        let content = match self.panels.current {
            Route::Login => self.panels.login.view(),
            Route::Register => self.panels.register.view(),
            Route::Home => view::home(),
            Route::Map => view::placeholder("Pharmacy map", "Map integration coming soon"),
            Route::Scan => view::placeholder("Scan", "Point the camera at a medication barcode"),
            Route::Chat => view::placeholder("Chat", "Talk to a pharmacist"),
            Route::Profile => view::placeholder("Profile", "Your account"),
        };
        view::app_layout(&self.tabs, self.panels.current, content).map(Message::View)
    }
}
