//! Static page content.
//!
//! Plain immutable records; the sections only render them.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    /// Section element id
    pub target: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub icon: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub live: Option<&'static str>,
    pub source: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Percentage, 0..=100
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub name: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub glyph: &'static str,
    pub href: &'static str,
}

/// Tags shown per project card.
pub const MAX_PROJECT_TAGS: usize = 3;

pub const SITE_NAME: &str = "Portfolio";

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { name: "Home", target: "home" },
    NavLink { name: "About", target: "about" },
    NavLink { name: "Projects", target: "projects" },
    NavLink { name: "Skills", target: "skills" },
    NavLink { name: "Contact", target: "contact" },
];

pub const ABOUT_PARAGRAPHS: &[&str] = &[
    "I design and build software for the web and the desktop, with a soft spot for \
     interfaces that feel quiet and fast. I have been doing this professionally for \
     more than five years.",
    "Good design solves a problem first and decorates second. I like working close to \
     the people who use what I build, and I measure my work by whether it helps them.",
    "Away from the keyboard I read about typography, sketch buildings, and go hiking \
     whenever the weather allows.",
];

pub const STATS: &[Stat] = &[
    Stat { icon: "\u{1F4C5}", value: "5+", label: "Years Experience" },
    Stat { icon: "\u{1F4BC}", value: "50+", label: "Projects Completed" },
    Stat { icon: "\u{1F3C6}", value: "10+", label: "Awards Received" },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "BrainBrawl",
        description: "Real-time multiplayer quiz game. Rooms, live scoreboards and a \
                      question editor, backed by a websocket server.",
        image: "https://images.unsplash.com/photo-1487058792275-0ad4aaf24ca7?auto=format&fit=crop&q=80",
        tags: &["React", "Node.js", "Express.js", "Socket.io"],
        live: Some("https://example.com/brainbrawl"),
        source: Some("https://github.com/example/brainbrawl"),
    },
    Project {
        title: "Portfolio Website",
        description: "This site: a single scrolling page with entrance animations and a \
                      working contact form.",
        image: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b?auto=format&fit=crop&q=80",
        tags: &["Rust", "Dioxus", "CSS"],
        live: None,
        source: Some("https://github.com/example/folio"),
    },
    Project {
        title: "Task Management App",
        description: "Boards, deadlines and reminders with drag-and-drop ordering and \
                      progress charts.",
        image: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d?auto=format&fit=crop&q=80",
        tags: &["TypeScript", "React", "Firebase", "ChartJS"],
        live: Some("https://example.com/tasks"),
        source: Some("https://github.com/example/tasks"),
    },
];

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        name: "Frontend Development",
        skills: &[
            Skill { name: "HTML & CSS", level: 95 },
            Skill { name: "JavaScript", level: 90 },
            Skill { name: "React", level: 85 },
            Skill { name: "TypeScript", level: 80 },
            Skill { name: "TailwindCSS", level: 90 },
        ],
    },
    SkillCategory {
        name: "Backend Development",
        skills: &[
            Skill { name: "Node.js", level: 80 },
            Skill { name: "Rust", level: 70 },
            Skill { name: "PostgreSQL", level: 70 },
            Skill { name: "SQL", level: 65 },
            Skill { name: "REST APIs", level: 85 },
        ],
    },
    SkillCategory {
        name: "Tools & Others",
        skills: &[
            Skill { name: "Git & GitHub", level: 85 },
            Skill { name: "UI/UX Design", level: 80 },
            Skill { name: "Responsive Design", level: 90 },
            Skill { name: "Testing", level: 70 },
            Skill { name: "Performance Tuning", level: 75 },
        ],
    },
];

pub const CONTACT_INFO: &[ContactInfo] = &[
    ContactInfo {
        icon: "\u{2709}",
        title: "Email",
        value: "hello@example.com",
        link: Some("mailto:hello@example.com"),
    },
    ContactInfo {
        icon: "\u{260E}",
        title: "Phone",
        value: "+1 (555) 123-4567",
        link: Some("tel:+15551234567"),
    },
    ContactInfo {
        icon: "\u{1F4CD}",
        title: "Location",
        value: "San Francisco, CA",
        link: None,
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", glyph: "X", href: "https://twitter.com/" },
    SocialLink { label: "LinkedIn", glyph: "in", href: "https://www.linkedin.com/" },
    SocialLink { label: "GitHub", glyph: "GH", href: "https://github.com/" },
    SocialLink { label: "Instagram", glyph: "IG", href: "https://www.instagram.com/" },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn skill_levels_are_percentages() {
        for category in SKILL_CATEGORIES {
            assert!(!category.skills.is_empty());
            for skill in category.skills {
                assert!(skill.level <= 100, "{} has level {}", skill.name, skill.level);
            }
        }
    }

    #[test]
    fn project_titles_unique() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
    }

    #[test]
    fn nav_targets_unique() {
        let targets: HashSet<_> = NAV_LINKS.iter().map(|l| l.target).collect();
        assert_eq!(targets.len(), NAV_LINKS.len());
        assert!(targets.contains("contact"));
    }
}
