//! Section-to-animation lookup table.
//!
//! Supplied by the host at construction and immutable afterwards. Unknown
//! indices fall back to the idle animation id so the avatar never freezes on
//! a section with no dedicated clip.

use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct SectionTable {
    animations: HashMap<usize, String>,
    idle_id: String,
}

impl SectionTable {
    pub fn new(idle_id: impl Into<String>) -> Self {
        Self {
            animations: HashMap::new(),
            idle_id: idle_id.into(),
        }
    }

    /// Builder-style association of a section with an animation id.
    pub fn with(mut self, section: usize, animation_id: impl Into<String>) -> Self {
        self.animations.insert(section, animation_id.into());
        self
    }

    /// Animation id for a section, falling back to the idle id.
    pub fn animation_id(&self, section: usize) -> &str {
        self.animations
            .get(&section)
            .map(String::as_str)
            .unwrap_or(&self.idle_id)
    }

    #[inline]
    pub fn idle_id(&self) -> &str {
        &self.idle_id
    }
}
