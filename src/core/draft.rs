use time::{Date, OffsetDateTime};

use crate::core::{
    error::WizardError,
    model::{HabitatType, iso_date},
};

/// A single-field edit applied to a [`FormDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftField {
    Title(String),
    Location(String),
    Area(String),
    Habitat(HabitatType),
    Planted(Date),
}

/// In-progress fields of a new project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormDraft {
    pub title: String,
    pub location: String,
    pub area_value: String,
    pub habitat: HabitatType,
    pub planted: Date,
}

/// Snapshot of a draft taken when leaving the form step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftResult {
    pub title: String,
    pub location: String,
    pub area: String,
    pub planted: String,
    pub habitat: HabitatType,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::new(OffsetDateTime::now_utc().date())
    }
}

impl FormDraft {
    pub fn new(planted: Date) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            area_value: String::new(),
            habitat: HabitatType::default(),
            planted,
        }
    }

    /// Replaces one field. Input is taken verbatim.
    pub fn update(&mut self, field: DraftField) {
        match field {
            DraftField::Title(value) => self.title = value,
            DraftField::Location(value) => self.location = value,
            DraftField::Area(value) => self.area_value = value,
            DraftField::Habitat(value) => self.habitat = value,
            DraftField::Planted(value) => self.planted = value,
        }
    }

    /// `"{area} acres / {Habitat}"`, with the area text carried as typed.
    pub fn area_label(&self) -> String {
        format!("{} acres / {}", self.area_value, self.habitat.title_case())
    }

    /// Planting date as `YYYY-MM-DD`.
    pub fn planted_iso(&self) -> String {
        iso_date(self.planted)
    }

    /// Snapshots the draft. Never fails; empty fields pass through.
    pub fn finalize(&self) -> DraftResult {
        DraftResult {
            title: self.title.clone(),
            location: self.location.clone(),
            area: self.area_label(),
            planted: self.planted_iso(),
            habitat: self.habitat,
        }
    }

    /// Names of required fields that are blank or, for the area, not numeric.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = vec![];
        if self.title.trim().is_empty() {
            missing.push("title");
        }
        if self.location.trim().is_empty() {
            missing.push("location");
        }
        if self.area_value.trim().parse::<f64>().is_err() {
            missing.push("area");
        }
        missing
    }

    /// Like [`FormDraft::finalize`], but rejects drafts with missing fields.
    pub fn finalize_strict(&self) -> Result<DraftResult, WizardError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(self.finalize())
        } else {
            Err(WizardError::IncompleteDraft(missing.join(", ")))
        }
    }
}
