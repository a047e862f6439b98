//! Backend commands queued from UI to backend worker.

pub enum BackendCommand {
    /// One-shot fetch of the members feed at startup.
    LoadMembers,
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::LoadMembers => "load_members",
        }
    }
}
