mod fixtures;
pub use fixtures::*;

// Re-export commonly used types from shoreline for tests
pub use shoreline::core::{
    DraftField, HabitatType, ImageRef, ImageSelectionSet, MemoryIdentity, Notice, PickOutcome,
    Project, ProjectCatalog, ProjectRepository, Session, Tab, WizardController, WizardError,
    WizardEvent, WizardStep,
};
