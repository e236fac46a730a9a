pub mod config;
pub mod core;
pub mod logging;

pub use config::{Config, ConfigError};
pub use crate::core::{
    DraftField, DraftResult, FormDraft, HabitatType, ImageRef, ImageSelectionSet, Notice,
    PickOutcome, Project, ProjectCatalog, ProjectRepository, Session, Tab, Transition,
    WizardController, WizardError, WizardEvent, WizardStep,
};

#[cfg(feature = "gui")]
pub mod gui;
