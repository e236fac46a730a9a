use crate::{
    config::Config,
    core::{MemoryIdentity, Notice, Session},
    gui::media::RfdPicker,
};

#[derive(Debug)]
pub struct AppState {
    pub session: Session<MemoryIdentity>,
    pub picker: RfdPicker,
    pub notice: Option<Notice>,
    pub error: Option<String>,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let identity = MemoryIdentity::new(config.auth.verification_code.clone());
        Self {
            session: Session::from_config(identity, config),
            picker: RfdPicker,
            notice: None,
            error: None,
        }
    }
}
