use crate::{
    config::Config,
    core::{
        catalog::{ProjectCatalog, ProjectRepository},
        error::WizardError,
        identity::{IdentityService, SessionHandle},
        media::PickOutcome,
        model::{ImageRef, Project},
        wizard::{Transition, WizardController, WizardEvent, WizardStep},
    },
};

/// Everything a signed-in user works with: the catalog, the wizard driving
/// it and the current search text.
///
/// All mutation goes through `&mut self`, so events are applied one at a time.
#[derive(Debug)]
pub struct Session<I: IdentityService> {
    identity: I,
    catalog: ProjectCatalog,
    wizard: WizardController,
    query: String,
}

impl<I: IdentityService> Session<I> {
    pub fn new(identity: I, catalog: ProjectCatalog, wizard: WizardController) -> Self {
        Self {
            identity,
            catalog,
            wizard,
            query: String::new(),
        }
    }

    pub fn from_config(identity: I, config: &Config) -> Self {
        let placeholder = ImageRef::new(config.catalog.placeholder_image.clone());
        let catalog = if config.catalog.seed {
            ProjectCatalog::seeded(placeholder)
        } else {
            ProjectCatalog::new(placeholder)
        };
        let wizard =
            WizardController::new().with_strict_validation(config.wizard.require_complete_draft);
        Self::new(identity, catalog, wizard)
    }

    /// Forwards an event to the wizard; refused while signed out.
    pub fn dispatch(&mut self, event: WizardEvent) -> Result<Transition, WizardError> {
        if !self.identity.is_authenticated() {
            tracing::warn!(event = event.name(), "Event dispatched without a session");
            return Err(WizardError::Unauthenticated);
        }
        self.wizard.handle(event, &mut self.catalog)
    }

    /// Applies a picker result if the upload step is still showing.
    ///
    /// The picker runs asynchronously, so the user may have navigated away by
    /// the time it resolves. Such results are dropped and `Ok(None)` returned.
    pub fn deliver_picked(
        &mut self,
        outcome: PickOutcome,
    ) -> Result<Option<Transition>, WizardError> {
        let step = self.wizard.step();
        if step != WizardStep::ImageUpload {
            tracing::debug!(?step, "Dropping picker result for a step that is no longer showing");
            return Ok(None);
        }
        self.dispatch(WizardEvent::ImagesPicked(outcome)).map(Some)
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Catalog entries matching the current search text.
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.catalog.filter(&self.query)
    }

    pub fn wizard(&self) -> &WizardController {
        &self.wizard
    }

    pub fn catalog(&self) -> &ProjectCatalog {
        &self.catalog
    }

    pub fn identity(&self) -> &I {
        &self.identity
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_authenticated()
    }

    pub fn current_user(&self) -> Option<SessionHandle> {
        self.identity.current_session()
    }

    /// Ends the identity session and drops any draft in progress.
    pub fn sign_out(&mut self) {
        self.identity.sign_out();
        let strict = self.wizard.is_strict();
        self.wizard = WizardController::new().with_strict_validation(strict);
        self.query.clear();
    }
}
