#![allow(dead_code)]

use shoreline::{
    Config,
    core::{
        DraftField, HabitatType, IdentityService, ImageRef, MediaPicker, MemoryIdentity,
        Permission, PickResult, ProjectCatalog, Session, WizardController, WizardEvent,
    },
};

pub const PLACEHOLDER: &str = "https://placehold.co/600x400/e2e8f0/e2e8f0?text=No%20Image";
pub const TEST_EMAIL: &str = "ranger@example.org";
pub const TEST_PASSWORD: &str = "tidepool-42";
pub const TEST_CODE: &str = "424242";

/// Catalog with the three sample projects and the default placeholder.
pub fn seeded_catalog() -> ProjectCatalog {
    ProjectCatalog::seeded(ImageRef::new(PLACEHOLDER))
}

pub fn empty_catalog() -> ProjectCatalog {
    ProjectCatalog::new(ImageRef::new(PLACEHOLDER))
}

pub fn images(refs: &[&str]) -> Vec<ImageRef> {
    refs.iter().copied().map(ImageRef::new).collect()
}

/// Moves a fresh controller to the form and types in the given fields.
pub fn filled_form(
    catalog: &mut ProjectCatalog,
    title: &str,
    location: &str,
    area: &str,
    habitat: HabitatType,
) -> anyhow::Result<WizardController> {
    let mut wizard = WizardController::new();
    wizard.handle(WizardEvent::StartProject, catalog)?;
    for field in [
        DraftField::Title(title.to_string()),
        DraftField::Location(location.to_string()),
        DraftField::Area(area.to_string()),
        DraftField::Habitat(habitat),
    ] {
        wizard.handle(WizardEvent::Edit(field), catalog)?;
    }
    Ok(wizard)
}

/// Identity provider with one verified account.
pub fn test_identity() -> MemoryIdentity {
    MemoryIdentity::new(TEST_CODE).with_account(TEST_EMAIL, TEST_PASSWORD)
}

/// Session over the seeded catalog with the test account signed in.
pub async fn signed_in_session() -> anyhow::Result<Session<MemoryIdentity>> {
    let identity = test_identity();
    identity
        .sign_in(TEST_EMAIL.to_string(), TEST_PASSWORD.to_string())
        .await?;
    Ok(Session::from_config(identity, &Config::default()))
}

/// Media picker returning canned answers.
#[derive(Debug, Clone)]
pub struct StubPicker {
    pub permission: Permission,
    pub result: PickResult,
}

impl StubPicker {
    pub fn selecting(refs: &[&str]) -> Self {
        Self {
            permission: Permission::Granted,
            result: PickResult::Selected(images(refs)),
        }
    }

    pub fn denied() -> Self {
        Self {
            permission: Permission::Denied,
            result: PickResult::Cancelled,
        }
    }

    pub fn cancelled() -> Self {
        Self {
            permission: Permission::Granted,
            result: PickResult::Cancelled,
        }
    }
}

impl MediaPicker for StubPicker {
    fn request_permission(&self) -> impl Future<Output = Permission> + Send {
        let permission = self.permission;
        async move { permission }
    }

    fn pick_images(&self, _multiple: bool) -> impl Future<Output = PickResult> + Send {
        let result = self.result.clone();
        async move { result }
    }
}
