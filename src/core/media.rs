use std::future::Future;

use crate::core::model::ImageRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// What the picker returned once the dialog closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickResult {
    Cancelled,
    Selected(Vec<ImageRef>),
}

/// Combined result of asking for access and then picking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    Denied,
    Cancelled,
    Selected(Vec<ImageRef>),
}

/// Device media library.
pub trait MediaPicker {
    fn request_permission(&self) -> impl Future<Output = Permission> + Send;
    fn pick_images(&self, multiple: bool) -> impl Future<Output = PickResult> + Send;
}

/// Requests permission and, if granted, opens a multi-select picker.
pub async fn request_images<M: MediaPicker>(picker: &M) -> PickOutcome {
    match picker.request_permission().await {
        Permission::Denied => PickOutcome::Denied,
        Permission::Granted => match picker.pick_images(true).await {
            PickResult::Cancelled => PickOutcome::Cancelled,
            PickResult::Selected(images) => PickOutcome::Selected(images),
        },
    }
}
