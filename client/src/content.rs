//! Static page content.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every section renders from the tables here, so copy edits never touch
//! component code. Section anchors double as element ids for smooth scrolling.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

pub const SITE_TITLE: &str = "Portfolio";
pub const OWNER_NAME: &str = "Alex Kim";
pub const OWNER_EMAIL: &str = "contact@example.com";
/// Served from `public/resume.pdf`. Replace that file with the real resume.
pub const RESUME_PATH: &str = "/resume.pdf";

// =============================================================================
// NAVIGATION
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    /// Element id of the target section.
    pub anchor: &'static str,
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem { label: "Home", anchor: "home" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Skills", anchor: "skills" },
    NavItem { label: "Projects", anchor: "projects" },
    NavItem { label: "Contact", anchor: "contact" },
];

// =============================================================================
// SOCIAL / CONTACT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub name: &'static str,
    pub icon: &'static str,
    pub url: &'static str,
}

impl SocialLink {
    /// External links open in a new tab; `mailto:` stays in place.
    #[must_use]
    pub fn is_external(&self) -> bool {
        self.url.starts_with("http")
    }
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { name: "GitHub", icon: "\u{2328}", url: "https://github.com" },
    SocialLink { name: "LinkedIn", icon: "in", url: "https://linkedin.com" },
    SocialLink { name: "Email", icon: "\u{2709}", url: "mailto:contact@example.com" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactInfo {
    pub icon: &'static str,
    pub title: &'static str,
    pub value: &'static str,
    pub link: Option<&'static str>,
}

pub const CONTACT_INFO: [ContactInfo; 3] = [
    ContactInfo { icon: "\u{2709}", title: "Email", value: OWNER_EMAIL, link: Some("mailto:contact@example.com") },
    ContactInfo { icon: "\u{260E}", title: "Phone", value: "+82 10-1234-5678", link: Some("tel:+821012345678") },
    ContactInfo { icon: "\u{2691}", title: "Location", value: "Seoul, South Korea", link: None },
];

// =============================================================================
// ABOUT
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Highlight {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const ABOUT_PARAGRAPHS: [&str; 3] = [
    "I'm a frontend developer with five years of experience, passionate about building intuitive, user-centered web applications.",
    "I mostly work with React, TypeScript, and Next.js, and my backend experience lets me take full-stack projects end to end. Performance tuning and user-experience polish are where I spend most of my curiosity.",
    "I value teamwork and enjoy growing together with colleagues through knowledge sharing and code review.",
];

pub const HIGHLIGHTS: [Highlight; 4] = [
    Highlight { icon: "</>", title: "Clean code", description: "Readability and maintainability come first; I follow clean-code principles." },
    Highlight { icon: "\u{2615}", title: "Always learning", description: "I keep up with new technologies and trends and keep growing." },
    Highlight { icon: "\u{2665}", title: "User first", description: "User experience is the top priority; I build interfaces that feel obvious." },
    Highlight { icon: "\u{2605}", title: "Quality driven", description: "I sweat the details to ship polished results." },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CareerEntry {
    pub role: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub summary: &'static str,
}

pub const CAREER: [CareerEntry; 2] = [
    CareerEntry {
        role: "Senior Frontend Developer",
        period: "2022 - Present",
        company: "Tech startup",
        summary: "Building a React-based SaaS platform and leading the frontend team.",
    },
    CareerEntry {
        role: "Frontend Developer",
        period: "2020 - 2022",
        company: "Web agency",
        summary: "Delivered a wide range of client projects.",
    },
];

// =============================================================================
// SKILLS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency, 0-100.
    pub level: u8,
    /// Bar color class.
    pub color: &'static str,
}

impl Skill {
    /// Inline style for the proficiency bar.
    #[must_use]
    pub fn bar_style(&self) -> String {
        format!("width: {}%", self.level.min(100))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

pub const SKILL_CATEGORIES: [SkillCategory; 3] = [
    SkillCategory {
        title: "Frontend",
        skills: &[
            Skill { name: "React", level: 90, color: "bg-blue-500" },
            Skill { name: "TypeScript", level: 85, color: "bg-blue-600" },
            Skill { name: "Next.js", level: 80, color: "bg-gray-800" },
            Skill { name: "TailwindCSS", level: 85, color: "bg-cyan-500" },
            Skill { name: "JavaScript", level: 90, color: "bg-yellow-500" },
            Skill { name: "Vue.js", level: 70, color: "bg-green-500" },
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Node.js", level: 75, color: "bg-green-600" },
            Skill { name: "Python", level: 70, color: "bg-blue-500" },
            Skill { name: "Express", level: 75, color: "bg-gray-600" },
            Skill { name: "PostgreSQL", level: 65, color: "bg-blue-700" },
            Skill { name: "MongoDB", level: 70, color: "bg-green-700" },
            Skill { name: "Redis", level: 60, color: "bg-red-500" },
        ],
    },
    SkillCategory {
        title: "Tools & Others",
        skills: &[
            Skill { name: "Git", level: 85, color: "bg-orange-500" },
            Skill { name: "Docker", level: 70, color: "bg-blue-600" },
            Skill { name: "AWS", level: 65, color: "bg-orange-400" },
            Skill { name: "Figma", level: 80, color: "bg-purple-500" },
            Skill { name: "Jest", level: 75, color: "bg-red-600" },
            Skill { name: "Webpack", level: 70, color: "bg-blue-400" },
        ],
    },
];

// =============================================================================
// PROJECTS
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectCategory {
    Frontend,
    FullStack,
    Mobile,
}

impl ProjectCategory {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Frontend => "Frontend",
            Self::FullStack => "Full Stack",
            Self::Mobile => "Mobile",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub category: ProjectCategory,
    pub technologies: &'static [&'static str],
    pub live_url: &'static str,
    pub github_url: &'static str,
}

pub static PROJECTS: [Project; 6] = [
    Project {
        title: "E-Commerce Platform",
        description: "A full-stack shop built with React and Node.js, with payments, an admin dashboard, and real-time notifications.",
        image: "/project1.jpg",
        category: ProjectCategory::FullStack,
        technologies: &["React", "Node.js", "PostgreSQL", "Stripe"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
    Project {
        title: "Task Management App",
        description: "A Trello-style task manager with drag and drop, real-time collaboration, and data visualization.",
        image: "/project2.jpg",
        category: ProjectCategory::Frontend,
        technologies: &["React", "TypeScript", "Redux", "Socket.io"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
    Project {
        title: "Weather Dashboard",
        description: "A responsive dashboard on top of a weather API with location-based forecasts, a five-day outlook, and charts.",
        image: "/project3.jpg",
        category: ProjectCategory::Frontend,
        technologies: &["Vue.js", "Chart.js", "OpenWeather API"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
    Project {
        title: "Blog CMS",
        description: "A static blog engine on Next.js and Markdown with SEO tuning, dark mode, and search.",
        image: "/project4.jpg",
        category: ProjectCategory::FullStack,
        technologies: &["Next.js", "Markdown", "Tailwind CSS"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
    Project {
        title: "Mobile Banking App",
        description: "A React Native banking app with biometric login, transfers, and an investment overview.",
        image: "/project5.jpg",
        category: ProjectCategory::Mobile,
        technologies: &["React Native", "Firebase", "Expo"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
    Project {
        title: "Data Analytics Platform",
        description: "An analytics platform built with Python and React featuring real-time processing, chart generation, and automated reports.",
        image: "/project6.jpg",
        category: ProjectCategory::FullStack,
        technologies: &["Python", "React", "D3.js", "PostgreSQL"],
        live_url: "https://example.com",
        github_url: "https://github.com/example",
    },
];

/// Category filter shown above the project grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

pub const PROJECT_FILTERS: [ProjectFilter; 4] = [
    ProjectFilter::All,
    ProjectFilter::Only(ProjectCategory::Frontend),
    ProjectFilter::Only(ProjectCategory::FullStack),
    ProjectFilter::Only(ProjectCategory::Mobile),
];

impl ProjectFilter {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Only(category) => category.label(),
        }
    }

    #[must_use]
    pub fn matches(self, project: &Project) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => project.category == category,
        }
    }
}

/// Projects visible under `filter`, in display order.
#[must_use]
pub fn filter_projects(filter: ProjectFilter) -> Vec<&'static Project> {
    PROJECTS.iter().filter(|p| filter.matches(p)).collect()
}
