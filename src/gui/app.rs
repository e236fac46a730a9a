use iced::{Element, Task};

use super::{
    AppState, Message,
    screens::{Screen, ScreenData, ScreenMessage},
};
use crate::config::Config;

pub struct ShorelineApp {
    screen: ScreenData,
    state: AppState,
}

impl ShorelineApp {
    pub fn new(config: &Config) -> (Self, Task<Message>) {
        let state = AppState::new(config);
        let screen = ScreenData::initial(&state);
        (Self { screen, state }, Task::none())
    }

    pub fn title(&self) -> String {
        match self.state.session.current_user() {
            Some(user) => format!("Shoreline - {}", user.email),
            None => "Shoreline - Restoration Projects".to_string(),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        self.screen
            .update(message, &mut self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }

    pub fn view(&self) -> Element<'_, Message> {
        self.screen
            .view(&self.state)
            .map(|message| match message {
                ScreenMessage::ScreenMessage(message) => message,
                ScreenMessage::ParentMessage(never) => match never {},
            })
    }
}

/// Opens the main window and blocks until it is closed.
pub fn run(config: Config) -> iced::Result {
    iced::application(
        move || ShorelineApp::new(&config),
        ShorelineApp::update,
        ShorelineApp::view,
    )
    .title(ShorelineApp::title)
    .run()
}
