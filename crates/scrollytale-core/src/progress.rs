//! Scroll progress tracker.
//!
//! Derives a discrete section plus a fractional progress value from the
//! continuous scroll offset. Sections are homogeneous: one viewport height
//! each, so boundary `i` spans `[i * h, (i + 1) * h)`.

/// Position of the scroll offset relative to a section boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionProgress {
    /// Section whose span contains the offset.
    pub section: usize,
    /// Fractional progress (0..1) toward the next boundary.
    pub fraction: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct ProgressTracker {
    viewport_height: f64,
}

impl ProgressTracker {
    pub fn new(viewport_height: f64) -> Self {
        Self {
            viewport_height: viewport_height.max(1.0),
        }
    }

    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = viewport_height.max(1.0);
    }

    #[inline]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Locate an absolute offset within the section spans.
    pub fn locate(&self, offset: f64, total_sections: usize) -> SectionProgress {
        let last = total_sections.saturating_sub(1);
        let offset = offset.max(0.0);
        let section = ((offset / self.viewport_height) as usize).min(last);
        let fraction = if section == last {
            // Past the final boundary there is nothing to progress toward.
            0.0
        } else {
            ((offset - section as f64 * self.viewport_height) / self.viewport_height)
                .clamp(0.0, 1.0)
        };
        SectionProgress { section, fraction }
    }

    /// Section whose midpoint rule claims this offset: past 50% of the span
    /// between two boundaries, the next section is the nearer one.
    pub fn nearest_section(&self, offset: f64, total_sections: usize) -> usize {
        let at = self.locate(offset, total_sections);
        if at.fraction > 0.5 {
            (at.section + 1).min(total_sections.saturating_sub(1))
        } else {
            at.section
        }
    }
}
