pub mod sign_in;
pub mod sign_up;
pub mod workspace;

use iced::{Element, Task};

use crate::gui::{AppState, Message};

#[derive(Debug, Clone)]
pub enum ScreenMessage<S: Screen> {
    ScreenMessage(S::Message),
    ParentMessage(S::ParentMessage),
}

pub trait Screen: Sized {
    type Message: std::fmt::Debug;
    type ParentMessage: std::fmt::Debug;
    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>>;
    fn update(&mut self, message: Self::Message, state: &mut AppState)
    -> Task<ScreenMessage<Self>>;
}

#[derive(Debug, Clone)]
pub enum ScreenData {
    SignIn(sign_in::SignInScreen),
    SignUp(sign_up::SignUpScreen),
    Workspace(workspace::WorkspaceScreen),
}

impl ScreenData {
    /// First screen for the current identity state.
    pub fn initial(state: &AppState) -> Self {
        if state.session.is_authenticated() {
            ScreenData::Workspace(workspace::WorkspaceScreen::default())
        } else {
            ScreenData::SignIn(sign_in::SignInScreen::default())
        }
    }
}

fn change_screen(screen: ScreenData) -> Task<ScreenMessage<ScreenData>> {
    Task::done(ScreenMessage::ScreenMessage(Message::ChangeScreen(screen)))
}

impl Screen for ScreenData {
    type Message = Message;
    type ParentMessage = std::convert::Infallible;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        match self {
            ScreenData::SignIn(screen) => screen.view(state).map(Message::SignIn),
            ScreenData::SignUp(screen) => screen.view(state).map(Message::SignUp),
            ScreenData::Workspace(screen) => screen.view(state).map(Message::Workspace),
        }
        .map(ScreenMessage::ScreenMessage)
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match (self, message) {
            (x, Message::ChangeScreen(screen)) => {
                *x = screen;
                Task::none()
            }
            (ScreenData::SignIn(page), Message::SignIn(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::SignIn)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    sign_in::ParentMessage::SignedIn => change_screen(ScreenData::Workspace(
                        workspace::WorkspaceScreen::default(),
                    )),
                    sign_in::ParentMessage::OpenSignUp => {
                        change_screen(ScreenData::SignUp(sign_up::SignUpScreen::default()))
                    }
                },
            },
            (ScreenData::SignUp(page), Message::SignUp(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::SignUp)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    sign_up::ParentMessage::Verified => change_screen(ScreenData::Workspace(
                        workspace::WorkspaceScreen::default(),
                    )),
                    sign_up::ParentMessage::OpenSignIn => {
                        change_screen(ScreenData::SignIn(sign_in::SignInScreen::default()))
                    }
                },
            },
            (ScreenData::Workspace(page), Message::Workspace(msg)) => match msg {
                ScreenMessage::ScreenMessage(msg) => page
                    .update(msg, state)
                    .map(Message::Workspace)
                    .map(ScreenMessage::ScreenMessage),
                ScreenMessage::ParentMessage(parent_msg) => match parent_msg {
                    workspace::ParentMessage::SignedOut => {
                        change_screen(ScreenData::SignIn(sign_in::SignInScreen::default()))
                    }
                },
            },
            (_, message) => {
                tracing::debug!(?message, "Message for an inactive screen dropped");
                Task::none()
            }
        }
    }
}
