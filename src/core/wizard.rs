use std::mem;

use uuid::Uuid;

use crate::core::{
    catalog::ProjectRepository,
    draft::{DraftField, DraftResult, FormDraft},
    error::WizardError,
    images::ImageSelectionSet,
    media::PickOutcome,
    model::{ImageRef, Project},
};

/// Which screen is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Home,
    ProjectForm,
    ImageUpload,
    Profile,
}

/// Entries of the bottom tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    AddProject,
    Profile,
}

#[derive(Debug, Clone)]
pub enum WizardEvent {
    StartProject,
    SwitchTab(Tab),
    Edit(DraftField),
    OpenDatePicker,
    Next,
    Back,
    ImagesPicked(PickOutcome),
    RemoveImage(ImageRef),
    Submit,
}

impl WizardEvent {
    pub fn name(&self) -> &'static str {
        match self {
            WizardEvent::StartProject => "StartProject",
            WizardEvent::SwitchTab(_) => "SwitchTab",
            WizardEvent::Edit(_) => "Edit",
            WizardEvent::OpenDatePicker => "OpenDatePicker",
            WizardEvent::Next => "Next",
            WizardEvent::Back => "Back",
            WizardEvent::ImagesPicked(_) => "ImagesPicked",
            WizardEvent::RemoveImage(_) => "RemoveImage",
            WizardEvent::Submit => "Submit",
        }
    }
}

/// User-facing message produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    PermissionRequired,
    DatePickerUnavailable,
}

impl Notice {
    pub fn title(self) -> &'static str {
        match self {
            Notice::PermissionRequired => "Permission required",
            Notice::DatePickerUnavailable => "Date Picker",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Notice::PermissionRequired => "We need access to your photos.",
            Notice::DatePickerUnavailable => "A date picker would be shown here.",
        }
    }
}

/// Result of a handled event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub step: WizardStep,
    pub notice: Option<Notice>,
    /// Id of the project committed by this event, if any.
    pub committed: Option<Uuid>,
}

#[derive(Debug, Clone)]
enum Stage {
    Home,
    Profile,
    ProjectForm {
        draft: FormDraft,
    },
    ImageUpload {
        draft: FormDraft,
        details: DraftResult,
        images: ImageSelectionSet,
    },
}

impl Stage {
    fn step(&self) -> WizardStep {
        match self {
            Stage::Home => WizardStep::Home,
            Stage::Profile => WizardStep::Profile,
            Stage::ProjectForm { .. } => WizardStep::ProjectForm,
            Stage::ImageUpload { .. } => WizardStep::ImageUpload,
        }
    }

    fn fresh_form() -> Self {
        Stage::ProjectForm {
            draft: FormDraft::default(),
        }
    }
}

/// Sequences Home → ProjectForm → ImageUpload → Home and owns the draft
/// while it is being authored.
#[derive(Debug, Clone)]
pub struct WizardController {
    stage: Stage,
    strict: bool,
}

impl Default for WizardController {
    fn default() -> Self {
        Self::new()
    }
}

impl WizardController {
    pub fn new() -> Self {
        Self {
            stage: Stage::Home,
            strict: false,
        }
    }

    /// When enabled, `Next` is refused until title, location and a numeric
    /// area are filled in.
    pub fn with_strict_validation(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn step(&self) -> WizardStep {
        self.stage.step()
    }

    pub fn draft(&self) -> Option<&FormDraft> {
        match &self.stage {
            Stage::ProjectForm { draft } | Stage::ImageUpload { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Details derived when the form was left; only set on the image step.
    pub fn details(&self) -> Option<&DraftResult> {
        match &self.stage {
            Stage::ImageUpload { details, .. } => Some(details),
            _ => None,
        }
    }

    pub fn selection(&self) -> Option<&ImageSelectionSet> {
        match &self.stage {
            Stage::ImageUpload { images, .. } => Some(images),
            _ => None,
        }
    }

    /// Applies one event. On error the controller is left unchanged.
    pub fn handle<R: ProjectRepository>(
        &mut self,
        event: WizardEvent,
        catalog: &mut R,
    ) -> Result<Transition, WizardError> {
        let from = self.step();
        let mut notice = None;
        let mut committed = None;

        let stage = mem::replace(&mut self.stage, Stage::Home);
        let next = match (stage, event) {
            (Stage::Home, WizardEvent::StartProject) => Stage::fresh_form(),

            (_, WizardEvent::SwitchTab(Tab::Home)) => Stage::Home,
            (_, WizardEvent::SwitchTab(Tab::Profile)) => Stage::Profile,
            (Stage::ProjectForm { draft }, WizardEvent::SwitchTab(Tab::AddProject)) => {
                Stage::ProjectForm { draft }
            }
            (_, WizardEvent::SwitchTab(Tab::AddProject)) => Stage::fresh_form(),

            (Stage::ProjectForm { mut draft }, WizardEvent::Edit(field)) => {
                draft.update(field);
                Stage::ProjectForm { draft }
            }
            (Stage::ProjectForm { draft }, WizardEvent::OpenDatePicker) => {
                notice = Some(Notice::DatePickerUnavailable);
                Stage::ProjectForm { draft }
            }
            (Stage::ProjectForm { .. }, WizardEvent::Back) => Stage::Home,
            (Stage::ProjectForm { draft }, WizardEvent::Next) => {
                let details = if self.strict {
                    match draft.finalize_strict() {
                        Ok(details) => details,
                        Err(err) => {
                            tracing::warn!(error = %err, "Draft rejected");
                            self.stage = Stage::ProjectForm { draft };
                            return Err(err);
                        }
                    }
                } else {
                    draft.finalize()
                };
                tracing::debug!(area = %details.area, "Draft finalized");
                Stage::ImageUpload {
                    draft,
                    details,
                    images: ImageSelectionSet::new(),
                }
            }

            (Stage::ImageUpload { draft, .. }, WizardEvent::Back) => Stage::ProjectForm { draft },
            (
                Stage::ImageUpload {
                    draft,
                    details,
                    mut images,
                },
                WizardEvent::ImagesPicked(outcome),
            ) => {
                match outcome {
                    PickOutcome::Denied => {
                        tracing::warn!("Media library permission denied");
                        notice = Some(Notice::PermissionRequired);
                    }
                    PickOutcome::Cancelled => {}
                    PickOutcome::Selected(selected) => {
                        tracing::debug!(count = selected.len(), "Images picked");
                        images.add_many(selected);
                    }
                }
                Stage::ImageUpload {
                    draft,
                    details,
                    images,
                }
            }
            (
                Stage::ImageUpload {
                    draft,
                    details,
                    mut images,
                },
                WizardEvent::RemoveImage(reference),
            ) => {
                images.remove(&reference);
                Stage::ImageUpload {
                    draft,
                    details,
                    images,
                }
            }
            (Stage::ImageUpload { details, images, .. }, WizardEvent::Submit) => {
                let project = Project::new(
                    details.title,
                    details.location,
                    details.area,
                    details.planted,
                    images.into_vec(),
                    catalog.placeholder(),
                );
                committed = Some(project.id());
                catalog.insert(project);
                Stage::Home
            }

            (stage, event) => {
                tracing::warn!(step = ?from, event = event.name(), "Ignoring event");
                let err = WizardError::unexpected(from, &event);
                self.stage = stage;
                return Err(err);
            }
        };

        self.stage = next;
        let step = self.step();
        if step != from {
            tracing::debug!(?from, to = ?step, "Wizard transition");
        }
        Ok(Transition {
            step,
            notice,
            committed,
        })
    }
}
