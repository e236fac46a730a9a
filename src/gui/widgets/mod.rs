use iced::{
    Alignment::Center,
    Color, Element, Length, Theme, border,
    widget::{button, column, container, container::Style, row, text},
};
use iced_widget::container::bordered_box;

use crate::core::{Notice, Tab, WizardStep};

/// Authoring stages shown in the progress strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Details,
    Images,
}

impl Stage {
    fn of(step: WizardStep) -> Option<Self> {
        match step {
            WizardStep::ProjectForm => Some(Stage::Details),
            WizardStep::ImageUpload => Some(Stage::Images),
            WizardStep::Home | WizardStep::Profile => None,
        }
    }

    fn style(self, other: Self) -> impl Fn(&Theme) -> Style {
        move |theme: &Theme| {
            let style = bordered_box(theme).border(border::width(2));
            // stages already reached are darkened
            if self >= other {
                let mut color_rgba = theme.palette().background.into_rgba8();
                color_rgba[0] /= 2;
                color_rgba[1] /= 2;
                color_rgba[2] /= 2;
                style.background(Color::from_rgb8(color_rgba[0], color_rgba[1], color_rgba[2]))
            } else {
                style.background(theme.palette().background)
            }
        }
    }
}

fn progress<'a, Message: 'a>(current: Stage) -> Element<'a, Message> {
    row![
        container(text("1. Details"))
            .style(current.style(Stage::Details))
            .padding(10),
        container(text("2. Images"))
            .style(current.style(Stage::Images))
            .padding(10),
    ]
    .spacing(10)
    .into()
}

fn tab_bar<'a, Message>(
    step: WizardStep,
    on_tab: impl Fn(Tab) -> Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let active = |tab: Tab| match (tab, step) {
        (Tab::Home, WizardStep::Home) | (Tab::Profile, WizardStep::Profile) => true,
        (Tab::AddProject, WizardStep::ProjectForm | WizardStep::ImageUpload) => true,
        _ => false,
    };
    let entry = |tab: Tab, label: &'static str| {
        let label = if active(tab) {
            format!("[{label}]")
        } else {
            label.to_string()
        };
        button(text(label)).on_press(on_tab(tab))
    };
    container(
        row![
            entry(Tab::Home, "Home"),
            entry(Tab::AddProject, "Add Project"),
            entry(Tab::Profile, "Profile"),
        ]
        .spacing(40),
    )
    .center_x(Length::Fill)
    .padding(12)
    .into()
}

fn notice_banner<'a, Message>(notice: Notice, on_dismiss: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    container(
        row![
            column![text(notice.title()).size(18), text(notice.message())].spacing(4),
            button(text("OK")).on_press(on_dismiss),
        ]
        .spacing(20)
        .align_y(Center),
    )
    .style(bordered_box)
    .padding(12)
    .width(Length::Fill)
    .into()
}

/// Page chrome: header, wizard progress, optional notice, body and tab bar.
pub fn layout<'a, Message>(
    main_content: impl Into<Element<'a, Message>>,
    step: WizardStep,
    notice: Option<Notice>,
    on_tab: impl Fn(Tab) -> Message,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let mut page = column![text("Shoreline").size(28)].spacing(16).padding(16);
    if let Some(stage) = Stage::of(step) {
        page = page.push(progress(stage));
    }
    if let Some(notice) = notice {
        page = page.push(notice_banner(notice, on_dismiss));
    }
    page = page
        .push(container(main_content.into()).height(Length::Fill))
        .push(tab_bar(step, on_tab));

    container(page)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
