use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::{
    core::{AuthError, IdentityService, SignInForm, SignInStatus},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

#[derive(Debug, Clone, Default)]
pub struct SignInScreen {
    form: SignInForm,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum SignInMessage {
    EmailChanged(String),
    PasswordChanged(String),
    Submit,
    Finished(Result<SignInStatus, AuthError>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SignedIn,
    OpenSignUp,
}

impl Screen for SignInScreen {
    type Message = SignInMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let mut content = column![text("Welcome back").size(32)]
            .spacing(12)
            .padding(28)
            .max_width(420);
        if let Some(error) = &self.form.error {
            content = content.push(text(error.as_str()));
        }
        let mut login = button(text("Login")).width(Length::Fill);
        if !self.submitting {
            login = login.on_press(ScreenMessage::ScreenMessage(SignInMessage::Submit));
        }
        content = content
            .push(text("What's your email"))
            .push(
                text_input("email@example.com", &self.form.email)
                    .on_input(|v| ScreenMessage::ScreenMessage(SignInMessage::EmailChanged(v))),
            )
            .push(text("Enter Password"))
            .push(
                text_input("password", &self.form.password)
                    .secure(true)
                    .on_input(|v| ScreenMessage::ScreenMessage(SignInMessage::PasswordChanged(v)))
                    .on_submit(ScreenMessage::ScreenMessage(SignInMessage::Submit)),
            )
            .push(login)
            .push(
                row![
                    text("New here?"),
                    button(text("Create new Account"))
                        .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenSignUp)),
                ]
                .spacing(8)
                .align_y(Center),
            );

        container(content)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into()
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            SignInMessage::EmailChanged(email) => {
                self.form.email = email;
                Task::none()
            }
            SignInMessage::PasswordChanged(password) => {
                self.form.password = password;
                Task::none()
            }
            SignInMessage::Submit => {
                if self.submitting {
                    return Task::none();
                }
                self.submitting = true;
                let (email, password) = self.form.take_credentials();
                Task::perform(
                    state.session.identity().sign_in(email, password),
                    |result| ScreenMessage::ScreenMessage(SignInMessage::Finished(result)),
                )
            }
            SignInMessage::Finished(result) => {
                self.submitting = false;
                match self.form.apply_result(result) {
                    Some(_) => Task::done(ScreenMessage::ParentMessage(ParentMessage::SignedIn)),
                    None => Task::none(),
                }
            }
        }
    }
}
