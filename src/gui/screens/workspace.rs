use iced::{
    Alignment::Center,
    Element, Length, Task,
    widget::{button, column, container, pick_list, row, scrollable, text, text_input},
};

use crate::{
    core::{
        DraftField, HabitatType, PickOutcome, Project, Transition, WizardError, WizardEvent,
        WizardStep, request_images,
    },
    gui::{
        AppState,
        screens::{Screen, ScreenMessage},
        widgets::layout,
    },
};

/// Signed-in area: project list, the add-project wizard and the profile tab.
#[derive(Debug, Clone, Default)]
pub struct WorkspaceScreen {
    picking: bool,
}

#[derive(Debug, Clone)]
pub enum WorkspaceMessage {
    Wizard(WizardEvent),
    Search(String),
    PickImages,
    Picked(PickOutcome),
    DismissNotice,
    SignOut,
}

#[derive(Debug, Clone)]
pub enum ParentMessage {
    SignedOut,
}

fn msg(message: WorkspaceMessage) -> ScreenMessage<WorkspaceScreen> {
    ScreenMessage::ScreenMessage(message)
}

fn event(event: WizardEvent) -> ScreenMessage<WorkspaceScreen> {
    msg(WorkspaceMessage::Wizard(event))
}

fn project_card(project: &Project) -> Element<'_, ScreenMessage<WorkspaceScreen>> {
    container(
        column![
            text(project.title()).size(20),
            text(format!("Location: {}", project.location())),
            text(format!("Area: {}", project.area())),
            text(format!("Planted: {}", project.planted())),
            text(format!("Cover: {}", project.cover())).size(12),
        ]
        .spacing(6),
    )
    .style(iced_widget::container::bordered_box)
    .padding(16)
    .width(Length::Fill)
    .into()
}

impl WorkspaceScreen {
    fn home_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let projects = state.session.visible_projects();
        let list: Element<'a, ScreenMessage<Self>> = if projects.is_empty() {
            text("No projects match your search.").into()
        } else {
            column(projects.into_iter().map(project_card))
                .spacing(16)
                .into()
        };
        column![
            text("My Projects").size(28),
            text_input("Search projects...", state.session.query())
                .on_input(|q| msg(WorkspaceMessage::Search(q))),
            scrollable(list).height(Length::Fill),
        ]
        .spacing(16)
        .into()
    }

    fn form_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let Some(draft) = state.session.wizard().draft() else {
            return text("No draft in progress").into();
        };
        let form = column![
            text("Project Name"),
            text_input("Enter project name", &draft.title)
                .on_input(|v| event(WizardEvent::Edit(DraftField::Title(v)))),
            text("Location"),
            text_input("Enter location", &draft.location)
                .on_input(|v| event(WizardEvent::Edit(DraftField::Location(v)))),
            text("Area (hectares)"),
            text_input("Enter area", &draft.area_value)
                .on_input(|v| event(WizardEvent::Edit(DraftField::Area(v)))),
            text("Type"),
            pick_list(HabitatType::ALL, Some(draft.habitat), |h| {
                event(WizardEvent::Edit(DraftField::Habitat(h)))
            }),
            text("Date Planted"),
            button(text(draft.planted_iso())).on_press(event(WizardEvent::OpenDatePicker)),
        ]
        .spacing(8);

        column![
            row![
                button(text("Back")).on_press(event(WizardEvent::Back)),
                text("Add New Project").size(22),
            ]
            .spacing(20)
            .align_y(Center),
            scrollable(form).height(Length::Fill),
            button(text("Next"))
                .width(Length::Fill)
                .on_press(event(WizardEvent::Next)),
        ]
        .spacing(16)
        .into()
    }

    fn upload_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let wizard = state.session.wizard();
        let (Some(details), Some(selection)) = (wizard.details(), wizard.selection()) else {
            return text("No draft in progress").into();
        };
        let previews: Element<'a, ScreenMessage<Self>> = if selection.is_empty() {
            text("No images selected yet.").into()
        } else {
            column(selection.iter().map(|image| {
                let item: Element<'a, ScreenMessage<Self>> = row![
                    text(image.as_str()).width(Length::Fill),
                    button(text("x")).on_press(event(WizardEvent::RemoveImage(image.clone()))),
                ]
                .spacing(8)
                .align_y(Center)
                .into();
                item
            }))
            .spacing(8)
            .into()
        };
        let mut upload = button(
            column![text("Tap to Upload").size(18), text("Select images from gallery")]
                .align_x(Center),
        )
        .width(Length::Fill);
        if !self.picking {
            upload = upload.on_press(msg(WorkspaceMessage::PickImages));
        }

        column![
            row![
                button(text("Back")).on_press(event(WizardEvent::Back)),
                text("Upload Images").size(22),
            ]
            .spacing(20)
            .align_y(Center),
            text(format!("{} · {}", details.title, details.area)),
            text("Showcase your project's progress and impact."),
            upload,
            text(format!("Image Preview ({})", selection.len())).size(18),
            scrollable(previews).height(Length::Fill),
            button(text("Submit Project"))
                .width(Length::Fill)
                .on_press(event(WizardEvent::Submit)),
        ]
        .spacing(16)
        .into()
    }

    fn profile_view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let (name, email) = match state.session.current_user() {
            Some(user) => (
                format!("{} {}", user.first_name, user.last_name),
                user.email,
            ),
            None => (String::new(), String::new()),
        };
        container(
            column![
                text("Profile").size(28),
                text(name),
                text(email),
                button(text("Sign out")).on_press(msg(WorkspaceMessage::SignOut)),
            ]
            .spacing(12)
            .align_x(Center),
        )
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
    }

    fn dispatch(&mut self, event: WizardEvent, state: &mut AppState) -> Task<ScreenMessage<Self>> {
        state.error = None;
        let result = state.session.dispatch(event).map(Some);
        self.apply(result, state)
    }

    fn apply(
        &mut self,
        result: Result<Option<Transition>, WizardError>,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match result {
            Ok(Some(transition)) => {
                if transition.notice.is_some() {
                    state.notice = transition.notice;
                }
                Task::none()
            }
            Ok(None) => Task::none(),
            Err(WizardError::Unauthenticated) => {
                Task::done(ScreenMessage::ParentMessage(ParentMessage::SignedOut))
            }
            Err(err) => {
                state.error = Some(err.to_string());
                Task::none()
            }
        }
    }
}

impl Screen for WorkspaceScreen {
    type Message = WorkspaceMessage;
    type ParentMessage = ParentMessage;

    fn view<'a>(&'a self, state: &'a AppState) -> Element<'a, ScreenMessage<Self>> {
        let step = state.session.wizard().step();
        let body = match step {
            WizardStep::Home => self.home_view(state),
            WizardStep::ProjectForm => self.form_view(state),
            WizardStep::ImageUpload => self.upload_view(state),
            WizardStep::Profile => self.profile_view(state),
        };
        let body: Element<'a, ScreenMessage<Self>> = match &state.error {
            Some(error) => column![text(error.as_str()), body].spacing(8).into(),
            None => body,
        };
        layout(
            body,
            step,
            state.notice,
            |tab| event(WizardEvent::SwitchTab(tab)),
            msg(WorkspaceMessage::DismissNotice),
        )
    }

    fn update(
        &mut self,
        message: Self::Message,
        state: &mut AppState,
    ) -> Task<ScreenMessage<Self>> {
        match message {
            WorkspaceMessage::Wizard(event) => self.dispatch(event, state),
            WorkspaceMessage::Search(query) => {
                state.session.set_query(query);
                Task::none()
            }
            WorkspaceMessage::PickImages => {
                if self.picking {
                    return Task::none();
                }
                self.picking = true;
                let picker = state.picker;
                Task::perform(async move { request_images(&picker).await }, |outcome| {
                    msg(WorkspaceMessage::Picked(outcome))
                })
            }
            WorkspaceMessage::Picked(outcome) => {
                self.picking = false;
                state.error = None;
                let result = state.session.deliver_picked(outcome);
                self.apply(result, state)
            }
            WorkspaceMessage::DismissNotice => {
                state.notice = None;
                Task::none()
            }
            WorkspaceMessage::SignOut => {
                state.session.sign_out();
                state.notice = None;
                Task::done(ScreenMessage::ParentMessage(ParentMessage::SignedOut))
            }
        }
    }
}
