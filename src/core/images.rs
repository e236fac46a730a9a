use crate::core::model::ImageRef;

/// Ordered image references picked for a draft.
///
/// Repeated picks of the same reference are kept; removal drops every copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSelectionSet {
    images: Vec<ImageRef>,
}

impl ImageSelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends all references after the existing ones.
    pub fn add_many<I>(&mut self, selected: I)
    where
        I: IntoIterator<Item = ImageRef>,
    {
        self.images.extend(selected);
    }

    /// Removes all occurrences of `reference`, returning how many were dropped.
    pub fn remove(&mut self, reference: &ImageRef) -> usize {
        let before = self.images.len();
        self.images.retain(|image| image != reference);
        before - self.images.len()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageRef> {
        self.images.iter()
    }

    pub fn as_slice(&self) -> &[ImageRef] {
        &self.images
    }

    pub fn into_vec(self) -> Vec<ImageRef> {
        self.images
    }
}
