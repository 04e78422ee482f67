/// Per-user display preferences relevant to listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserSettings {
    topics_per_page: u32,
}

impl UserSettings {
    /// A zero page size is raised to one so every window is non-empty.
    pub fn new(topics_per_page: u32) -> Self {
        Self {
            topics_per_page: topics_per_page.max(1),
        }
    }

    pub fn topics_per_page(&self) -> u32 {
        self.topics_per_page
    }
}
