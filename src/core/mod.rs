mod catalog;
mod draft;
mod error;
mod identity;
mod images;
mod media;
mod model;
mod session;
mod wizard;

pub use catalog::{ProjectCatalog, ProjectRepository};
pub use draft::{DraftField, DraftResult, FormDraft};
pub use error::{AuthError, WizardError};
pub use identity::{
    IdentityService, MemoryIdentity, Registration, SessionHandle, SignInForm, SignInStatus,
    SignUpForm, verify_and_name,
};
pub use images::ImageSelectionSet;
pub use media::{MediaPicker, Permission, PickOutcome, PickResult, request_images};
pub use model::{HabitatType, ImageRef, Project};
pub use session::Session;
pub use wizard::{Notice, Tab, Transition, WizardController, WizardEvent, WizardStep};
