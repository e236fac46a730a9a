use std::future::Future;

use rfd::AsyncFileDialog;

use crate::core::{ImageRef, MediaPicker, Permission, PickResult};

const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "heic"];

/// Native file dialog standing in for a photo library.
#[derive(Debug, Clone, Copy, Default)]
pub struct RfdPicker;

impl MediaPicker for RfdPicker {
    fn request_permission(&self) -> impl Future<Output = Permission> + Send {
        // desktop file dialogs need no grant
        async { Permission::Granted }
    }

    fn pick_images(&self, multiple: bool) -> impl Future<Output = PickResult> + Send {
        async move {
            let dialog = AsyncFileDialog::new()
                .set_title("Select images")
                .add_filter("Images", IMAGE_EXTENSIONS);
            let picked = if multiple {
                dialog.pick_files().await
            } else {
                dialog.pick_file().await.map(|file| vec![file])
            };
            match picked {
                Some(files) => PickResult::Selected(
                    files
                        .iter()
                        .map(|file| ImageRef::new(format!("file://{}", file.path().display())))
                        .collect(),
                ),
                None => PickResult::Cancelled,
            }
        }
    }
}
