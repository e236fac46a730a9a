use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, row, text, text_input},
};

use crate::{
    core::{AuthError, IdentityService, SessionHandle, SignUpForm, verify_and_name},
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
    },
};

#[derive(Debug, Clone, Default)]
pub struct SignUpScreen {
    form: SignUpForm,
    submitting: bool,
}

#[derive(Debug, Clone)]
pub enum SignUpMessage {
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    PasswordChanged(String),
    CodeChanged(String),
    Submit,
    SignedUp(Result<(), AuthError>),
    Verify,
    Verified(Result<SessionHandle, AuthError>),
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    Verified,
    OpenSignIn,
}

fn msg(message: SignUpMessage) -> ScreenMessage<SignUpScreen> {
    ScreenMessage::ScreenMessage(message)
}

impl SignUpScreen {
    /// Primary button, inert while a request is in flight.
    fn action(
        &self,
        label: &'static str,
        message: SignUpMessage,
    ) -> Element<'_, ScreenMessage<Self>> {
        let mut action = button(text(label)).width(Length::Fill);
        if !self.submitting {
            action = action.on_press(msg(message));
        }
        action.into()
    }

    fn verification_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Verify your email").size(28),
            text_input("Enter your verification code", &self.form.code)
                .on_input(|v| msg(SignUpMessage::CodeChanged(v)))
                .on_submit(msg(SignUpMessage::Verify)),
            self.action("Verify", SignUpMessage::Verify),
        ]
        .spacing(12)
        .padding(28)
        .max_width(420);
        if let Some(error) = &self.form.error {
            content = content.push(text(error.as_str()));
        }
        content.into()
    }

    fn registration_view(&self) -> Element<'_, ScreenMessage<Self>> {
        let mut content = column![
            text("Create an Account").size(28),
            text_input("First name", &self.form.first_name)
                .on_input(|v| msg(SignUpMessage::FirstNameChanged(v))),
            text_input("Last name", &self.form.last_name)
                .on_input(|v| msg(SignUpMessage::LastNameChanged(v))),
            text_input("Enter email", &self.form.email)
                .on_input(|v| msg(SignUpMessage::EmailChanged(v))),
            text_input("Enter password", &self.form.password)
                .secure(true)
                .on_input(|v| msg(SignUpMessage::PasswordChanged(v))),
            self.action("Continue", SignUpMessage::Submit),
        ]
        .spacing(12)
        .padding(28)
        .max_width(420);
        if let Some(error) = &self.form.error {
            content = content.push(text(error.as_str()));
        }
        content
            .push(
                row![
                    text("Already have an account?"),
                    button(text("Sign in"))
                        .on_press(ScreenMessage::ParentMessage(ParentMessage::OpenSignIn)),
                ]
                .spacing(8)
                .align_y(Center),
            )
            .into()
    }
}

impl Screen for SignUpScreen {
    type Message = SignUpMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, _state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let content = if self.form.pending_verification {
            self.verification_view()
        } else {
            self.registration_view()
        };
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
            SignUpMessage::FirstNameChanged(v) => self.form.first_name = v,
            SignUpMessage::LastNameChanged(v) => self.form.last_name = v,
            SignUpMessage::EmailChanged(v) => self.form.email = v,
            SignUpMessage::PasswordChanged(v) => self.form.password = v,
            SignUpMessage::CodeChanged(v) => self.form.code = v,
            SignUpMessage::Submit => {
                if self.submitting {
                    return Task::none();
                }
                self.submitting = true;
                return Task::perform(
                    state.session.identity().sign_up(self.form.registration()),
                    |result| msg(SignUpMessage::SignedUp(result)),
                );
            }
            SignUpMessage::SignedUp(result) => {
                self.submitting = false;
                self.form.apply_sign_up(result);
            }
            SignUpMessage::Verify => {
                if self.submitting {
                    return Task::none();
                }
                self.submitting = true;
                return Task::perform(
                    verify_and_name(
                        state.session.identity().clone(),
                        self.form.code.clone(),
                        self.form.first_name.clone(),
                        self.form.last_name.clone(),
                    ),
                    |result| msg(SignUpMessage::Verified(result)),
                );
            }
            SignUpMessage::Verified(result) => {
                self.submitting = false;
                if self.form.apply_verification(result).is_some() {
                    return Task::done(ScreenMessage::ParentMessage(ParentMessage::Verified));
                }
            }
        }
        Task::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn second_submit_is_ignored_until_the_first_finishes() {
        let mut state = AppState::new(&Config::default());
        let mut screen = SignUpScreen::default();

        assert_eq!(screen.update(SignUpMessage::Submit, &mut state).units(), 1);
        assert!(screen.submitting);
        assert_eq!(screen.update(SignUpMessage::Submit, &mut state).units(), 0);

        let _ = screen.update(SignUpMessage::SignedUp(Err(AuthError::Incomplete)), &mut state);
        assert!(!screen.submitting);
        assert_eq!(screen.update(SignUpMessage::Submit, &mut state).units(), 1);
    }

    #[test]
    fn second_verify_is_ignored_until_the_first_finishes() {
        let mut state = AppState::new(&Config::default());
        let mut screen = SignUpScreen::default();

        assert_eq!(screen.update(SignUpMessage::Verify, &mut state).units(), 1);
        assert_eq!(screen.update(SignUpMessage::Verify, &mut state).units(), 0);

        let _ = screen.update(
            SignUpMessage::Verified(Err(AuthError::VerificationFailed)),
            &mut state,
        );
        assert!(!screen.submitting);
    }
}
