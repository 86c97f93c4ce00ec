//! Skill tags grouped by category.

/// A titled group of skill tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub tags: &'static [&'static str],
}

pub const SKILLS_HEADING: &str = "SKILLS";

/// Categories laid out in two rows.
pub const SKILL_ROWS: &[&[SkillCategory]] = &[
    &[
        SkillCategory {
            title: "Front-End Development",
            tags: &["HTML", "CSS/SCSS", "JavaScript", "React.js", "Vite.js"],
        },
        SkillCategory {
            title: "Back-End Development",
            tags: &["Node.js", "Express", "MongoDB", "API REST", "JWT"],
        },
    ],
    &[
        SkillCategory {
            title: "Version Control and Collaboration",
            tags: &["Git", "GitHub", "Notion", "Agile Scrum", "Slack", "Teams"],
        },
        SkillCategory {
            title: "Optimisation / Performance",
            tags: &["SEO", "Minification", "Accessibility", "Lighthouse", "Wave"],
        },
        SkillCategory {
            title: "Deployment / Actions",
            tags: &["Netlify", "Render", "Vercel", "GitHub Pages", "AWS", "GitHub Actions"],
        },
    ],
];

/// Iterates every category in display order.
pub fn categories() -> impl Iterator<Item = &'static SkillCategory> {
    SKILL_ROWS.iter().flat_map(|row| row.iter())
}

/// Iterates every tag in display order.
pub fn all_tags() -> impl Iterator<Item = &'static str> {
    categories().flat_map(|c| c.tags.iter().copied())
}
