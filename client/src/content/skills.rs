//! Skills catalogue and the category filter bar.
//!
//! The filter bar scrolls horizontally on narrow screens. Its arrow buttons
//! appear only when there is content to scroll toward in that direction.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

/// Pixels moved per arrow click.
pub const FILTER_SCROLL_STEP_PX: f64 = 150.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [&'static str],
}

pub const CATEGORIES: [SkillCategory; 6] = [
    SkillCategory { name: "Languages", skills: &["Python", "JavaScript", "C++", "HTML/CSS", "SQL"] },
    SkillCategory {
        name: "Frameworks/Libraries",
        skills: &["React", "Node.js", "Express", "Next.js", "TensorFlow", "TailwindCSS"],
    },
    SkillCategory { name: "Databases", skills: &["MongoDB", "MySQL", "Firebase"] },
    SkillCategory { name: "Cloud/DevOps", skills: &["Docker", "GCP", "Git", "Postman", "VS Code"] },
    SkillCategory {
        name: "Technologies",
        skills: &["REST APIs", "JWT", "Blockchain", "Ethereum", "Puppeteer", "OpenCV", "YOLOv5"],
    },
    SkillCategory {
        name: "Soft Skills",
        skills: &["Problem Solving", "Collaboration", "Communication", "Adaptability"],
    },
];

/// Filter selection: everything or one category by name.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SkillFilter {
    #[default]
    All,
    Category(&'static str),
}

impl SkillFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Category(name) => name,
        }
    }
}

/// `All` followed by one filter per category, in catalogue order.
#[must_use]
pub fn filters() -> Vec<SkillFilter> {
    std::iter::once(SkillFilter::All)
        .chain(CATEGORIES.iter().map(|c| SkillFilter::Category(c.name)))
        .collect()
}

/// Skill names visible under `filter`, in catalogue order.
#[must_use]
pub fn visible_skills(filter: SkillFilter) -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .filter(|c| match filter {
            SkillFilter::All => true,
            SkillFilter::Category(name) => c.name == name,
        })
        .flat_map(|c| c.skills.iter().copied())
        .collect()
}

/// Which scroll arrows to show for a horizontally scrollable strip.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollArrows {
    pub left: bool,
    pub right: bool,
}

impl Default for ScrollArrows {
    /// Before the first measurement only the right arrow shows.
    fn default() -> Self {
        Self { left: false, right: true }
    }
}

/// Arrow visibility from the strip's scroll metrics. One pixel of slack on
/// the right absorbs subpixel rounding.
#[must_use]
pub fn scroll_arrows(scroll_left: f64, client_width: f64, scroll_width: f64) -> ScrollArrows {
    ScrollArrows { left: scroll_left > 0.0, right: scroll_left + client_width < scroll_width - 1.0 }
}
