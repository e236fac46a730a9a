use std::fmt;

use time::{Date, macros::format_description};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HabitatType {
    #[default]
    Mangroves,
    Seagrass,
    Saltmarsh,
}

impl HabitatType {
    pub const ALL: &'static [HabitatType] = &[
        HabitatType::Mangroves,
        HabitatType::Seagrass,
        HabitatType::Saltmarsh,
    ];

    /// Lowercase key as stored in a draft.
    pub fn as_str(self) -> &'static str {
        match self {
            HabitatType::Mangroves => "mangroves",
            HabitatType::Seagrass => "seagrass",
            HabitatType::Saltmarsh => "saltmarsh",
        }
    }

    /// Key with its first character upper-cased, as shown in area labels.
    pub fn title_case(self) -> String {
        let key = self.as_str();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }
}

impl fmt::Display for HabitatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title_case())
    }
}

/// Opaque handle to a user-selected image. Never inspected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ImageRef {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ImageRef {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A committed restoration project.
///
/// Fields are read-only once built; `images` is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    id: Uuid,
    title: String,
    location: String,
    area: String,
    planted: String,
    images: Vec<ImageRef>,
}

impl Project {
    /// Builds a project, substituting `placeholder` when `images` is empty.
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        area: impl Into<String>,
        planted: impl Into<String>,
        images: Vec<ImageRef>,
        placeholder: &ImageRef,
    ) -> Self {
        let images = if images.is_empty() {
            vec![placeholder.clone()]
        } else {
            images
        };
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            location: location.into(),
            area: area.into(),
            planted: planted.into(),
            images,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn area(&self) -> &str {
        &self.area
    }

    /// Planting date as `YYYY-MM-DD`.
    pub fn planted(&self) -> &str {
        &self.planted
    }

    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// First image, used as the card cover.
    pub fn cover(&self) -> &ImageRef {
        &self.images[0]
    }
}

/// Formats a date as `YYYY-MM-DD`.
pub(crate) fn iso_date(date: Date) -> String {
    date.format(format_description!("[year]-[month]-[day]"))
        .unwrap_or_else(|_| date.to_string())
}
