use crate::gui::screens::{
    ScreenData, ScreenMessage, sign_in::SignInScreen, sign_up::SignUpScreen,
    workspace::WorkspaceScreen,
};

#[derive(Debug, Clone)]
pub enum Message {
    SignIn(ScreenMessage<SignInScreen>),
    SignUp(ScreenMessage<SignUpScreen>),
    Workspace(ScreenMessage<WorkspaceScreen>),
    ChangeScreen(ScreenData),
}
