use time::macros::date;

use crate::core::model::{ImageRef, Project, iso_date};

const SEED_IMAGES: [&str; 3] = [
    "https://lh3.googleusercontent.com/aida-public/AB6AXuAIlWzdAUTdOmG3mXYm4Wkq9IvvuU9BA7NPYREB2NSisqXDjRkC3nGV0NFlDOxa_-8leXRqAUXBJGge9bGUQgaJpxSdzjY7rUm9Ldtj8ObHrqDJ0fhk_FzlzLLHVXDoMBE8NiGJCcw6kP5nWM9kr_K9nS5JcJ7lvRTJqigRewcHBswYEn9pEN52XGqLEN74CvTGaJ-YnWyGfpGctoS23-xAhAvmKy9788CRPYoY_Xo6o9dDPEWOFbY7D3d36r-6yIWzFKD3bCOZL8Q",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuACZ7qhr_t7Thurhm7biyFBh4POQJpIYQ0N_4encrO1BbRKp3nv1Qr0tPde3uf1UEOvUV2OUWhCfSH9aS2_aflgjIhf7HGKuPG_n3bykgtaXOUyiLQdkdaqzOLkzi5JExDehrr5_-i2HxCXL8cGGeyIxV5oFi-GZxchO4oSBbjV8sXMVAGZdR-hwAaIQNbYfwlXz35BxxTD1ZcOWpMmNkcf2j6vaSiNSz94BI6xtUMKPbllgASASkHp559hz5PldrVH1AodC6DSXaw",
    "https://lh3.googleusercontent.com/aida-public/AB6AXuCRR2UBZ1bQFoldPgA8s35k7dJvWAqdUPoTl_OnvB7GuOUzwJHcMDOsJRu_XHhHoj4IkVVlENU6H7cltUT-J0cg4QWUdUb_Ke_LV9AnKMvLwvmgbuiv8JNYx8mtEUuoFoDgY8Hhnpx0Yt3cvZ8gYCK9Udtv6y7v88ELrKLpcfu0uWmThmsyHgDsllvYb29ZCwuGvZU0U08owjDcRxYAnnzQQMf2ZGkoarVSEBgfgLecX-wyH5Z70jzBIAjyLtVWDxGTyvvXR3MpFn8",
];

pub trait ProjectRepository {
    /// Adds a project in front of all existing ones.
    fn insert(&mut self, project: Project);
    /// Case-insensitive substring match on title or location.
    /// An empty query yields every project.
    fn filter(&self, query: &str) -> Vec<&Project>;
    fn projects(&self) -> &[Project];
    /// Reference substituted when a project is committed without images.
    fn placeholder(&self) -> &ImageRef;
}

/// In-memory, newest-first project list.
#[derive(Debug, Clone)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    placeholder: ImageRef,
}

impl ProjectCatalog {
    pub fn new(placeholder: ImageRef) -> Self {
        Self {
            projects: Vec::new(),
            placeholder,
        }
    }

    /// Catalog pre-filled with the three sample projects.
    pub fn seeded(placeholder: ImageRef) -> Self {
        let mut catalog = Self::new(placeholder);
        let seeds = [
            (
                "Coral Reef Restoration",
                "Fiji",
                "20 acres / Coral Reef",
                date!(2024 - 01 - 10),
                SEED_IMAGES[2],
            ),
            (
                "Seagrass Bed Restoration",
                "Indonesia",
                "50 acres / Seagrass",
                date!(2023 - 08 - 22),
                SEED_IMAGES[1],
            ),
            (
                "Coastal Mangrove Restoration",
                "Philippines",
                "100 acres / Mangrove",
                date!(2023 - 05 - 15),
                SEED_IMAGES[0],
            ),
        ];
        // each insert goes to the front, so seeds are listed in reverse
        for (title, location, area, planted, image) in seeds {
            let project = Project::new(
                title,
                location,
                area,
                iso_date(planted),
                vec![ImageRef::new(image)],
                &catalog.placeholder,
            );
            catalog.projects.insert(0, project);
        }
        catalog
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}

impl ProjectRepository for ProjectCatalog {
    fn insert(&mut self, project: Project) {
        tracing::info!(
            project = %project.id(),
            title = project.title(),
            images = project.images().len(),
            "Project added to catalog"
        );
        self.projects.insert(0, project);
    }

    fn filter(&self, query: &str) -> Vec<&Project> {
        if query.is_empty() {
            return self.projects.iter().collect();
        }
        let needle = query.to_lowercase();
        self.projects
            .iter()
            .filter(|p| {
                p.title().to_lowercase().contains(&needle)
                    || p.location().to_lowercase().contains(&needle)
            })
            .collect()
    }

    fn projects(&self) -> &[Project] {
        &self.projects
    }

    fn placeholder(&self) -> &ImageRef {
        &self.placeholder
    }
}
