//! Page content — biography, education, skills, projects and contact links.
//!
//! All records are compile-time literals; they have no identity beyond their
//! position in the slices below.

/// Who the page is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub full_name: &'static str,
    pub brand: &'static str,
    pub headline: &'static str,
    pub tagline: &'static str,
    pub avatar_url: &'static str,
    pub about: &'static [&'static str],
}

/// One step of the education timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationEntry {
    pub institution: &'static str,
    pub degree: &'static str,
    pub year: &'static str,
    pub grade: &'static str,
}

/// Glyph shown next to a technical skill group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Monitor,
    Database,
    Terminal,
    Git,
    Book,
}

impl SkillIcon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Code => "</>",
            Self::Monitor => "\u{1F5A5}",
            Self::Database => "\u{1F5C4}",
            Self::Terminal => ">_",
            Self::Git => "\u{2387}",
            Self::Book => "\u{1F4D6}",
        }
    }
}

/// A titled list of skills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
    pub icon: Option<SkillIcon>,
}

/// A showcased project card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub image_url: &'static str,
    pub link: &'static str,
}

/// Kind of contact channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactKind {
    Email,
    LinkedIn,
    GitHub,
}

impl ContactKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::LinkedIn => "LinkedIn",
            Self::GitHub => "GitHub",
        }
    }

    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Email => "\u{2709}",
            Self::LinkedIn => "in",
            Self::GitHub => "\u{2387}",
        }
    }
}

/// A way to reach the page owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub kind: ContactKind,
    /// Human-readable address shown in the contact list.
    pub display: &'static str,
    pub href: &'static str,
}

impl ContactLink {
    /// External links open in a new tab; `mailto:` links stay in place.
    #[must_use]
    pub fn opens_new_tab(&self) -> bool {
        !self.href.starts_with("mailto:")
    }
}

pub const PROFILE: Profile = Profile {
    name: "Sourab",
    full_name: "Sourab Das",
    brand: "Sourab.dev",
    headline: "Frontend Developer",
    tagline: "Final Year B.Tech CSE Student passionate about creating responsive and user-friendly web applications.",
    avatar_url: "https://res.cloudinary.com/dgdtfxnji/image/upload/f_auto,q_auto/spdxp5iqykrjyvusjzys",
    about: &[
        "I'm Sourab Das, a final year B.Tech CSE student and frontend developer with a passion for creating responsive and user-friendly web applications.",
        "My journey in web development started during my college years, and I've since honed my skills in React.js, JavaScript, HTML, and CSS. I enjoy solving complex problems and turning ideas into functional and aesthetically pleasing websites.",
        "When I'm not coding, you can find me exploring new technologies, working on UI/UX designs, or editing videos. I'm always eager to learn and grow in the ever-evolving field of web development.",
    ],
};

pub const EDUCATION: &[EducationEntry] = &[
    EducationEntry {
        institution: "Dr. Sudhir Chandra Sur Institute of Technology & Sports Complex, MAKAUT",
        degree: "B.Tech in Computer Science and Engineering",
        year: "2025",
        grade: "CGPA: 7.64/10",
    },
    EducationEntry {
        institution: "Kendriya Vidyalaya Ichapore (CBSE)",
        degree: "Class 12",
        year: "2020",
        grade: "73.4%",
    },
    EducationEntry {
        institution: "Kendriya Vidyalaya Ichapore (CBSE)",
        degree: "Class 10",
        year: "2018",
        grade: "78.8%",
    },
];

pub const TECHNICAL_SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Programming",
        items: &["Python", "C", "C++", "JavaScript"],
        icon: Some(SkillIcon::Code),
    },
    SkillGroup {
        category: "Web Development",
        items: &["HTML", "CSS", "React.js", "Bootstrap", "Tailwind CSS"],
        icon: Some(SkillIcon::Monitor),
    },
    SkillGroup {
        category: "Databases",
        items: &["MySQL", "PostgreSQL"],
        icon: Some(SkillIcon::Database),
    },
    SkillGroup {
        category: "Operating Systems",
        items: &["Linux (Ubuntu, Kali)", "Windows"],
        icon: Some(SkillIcon::Terminal),
    },
    SkillGroup {
        category: "Other Tools",
        items: &["Git", "GitHub", "VS Code", "Adobe Photoshop"],
        icon: Some(SkillIcon::Git),
    },
    SkillGroup {
        category: "Concepts",
        items: &[
            "Data Structures and Algorithms",
            "Object-Oriented Programming",
            "Software Development Life Cycle",
            "REST APIs",
            "Problem Solving",
        ],
        icon: Some(SkillIcon::Book),
    },
];

pub const OTHER_SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Soft Skills",
        items: &[
            "Strong Analytical Thinking",
            "Problem-Solving",
            "Team Collaboration",
            "Communication",
            "Adaptability",
        ],
        icon: None,
    },
    SkillGroup {
        category: "Creative Skills",
        items: &["Video Editing", "Adobe Photoshop", "UI/UX Designing"],
        icon: None,
    },
    SkillGroup {
        category: "Languages Known",
        items: &["English", "Hindi", "Bengali"],
        icon: None,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Portfolio Website",
        description: "Developed a fully responsive personal portfolio to display skills, projects, and contact details. Implemented smooth navigation, interactive animations, and an optimized performance setup. Integrated SEO enhancements to improve discoverability.",
        technologies: &["Rust", "Leptos", "WebAssembly", "HTML/CSS"],
        image_url: "https://images.unsplash.com/photo-1547658719-da2b51169166?auto=format&fit=crop&w=1000&q=80",
        link: "#",
    },
    Project {
        title: "Library Management System",
        description: "Designed and implemented a Python-MySQL-based CLI application for book management, issue tracking, and user authentication. Integrated error handling mechanisms, automated overdue reminders, and optimized SQL queries to ensure efficient database operations.",
        technologies: &["Python", "MySQL", "CLI", "Database Design"],
        image_url: "https://images.unsplash.com/photo-1507842217343-583bb7270b66?auto=format&fit=crop&w=1000&q=80",
        link: "#",
    },
];

pub const CONTACTS: &[ContactLink] = &[
    ContactLink {
        kind: ContactKind::Email,
        display: "dastan123.sd@gmail.com",
        href: "mailto:dastan123.sd@gmail.com",
    },
    ContactLink {
        kind: ContactKind::LinkedIn,
        display: "linkedin.com/in/sourab-das",
        href: "https://linkedin.com/in/sourab-das",
    },
    ContactLink {
        kind: ContactKind::GitHub,
        display: "github.com/HotSoup-ind",
        href: "https://github.com/HotSoup-ind",
    },
];

/// Look up the contact link of a given kind.
#[must_use]
pub fn contact(kind: ContactKind) -> Option<&'static ContactLink> {
    CONTACTS.iter().find(|c| c.kind == kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_give_every_technical_group_an_icon() {
        assert!(TECHNICAL_SKILLS.iter().all(|g| g.icon.is_some()));
        assert!(OTHER_SKILLS.iter().all(|g| g.icon.is_none()));
    }

    #[test]
    fn should_open_external_links_in_new_tab() {
        let email = contact(ContactKind::Email).unwrap();
        let github = contact(ContactKind::GitHub).unwrap();
        assert!(!email.opens_new_tab());
        assert!(github.opens_new_tab());
    }

    #[test]
    fn should_have_one_link_per_contact_kind() {
        for kind in [ContactKind::Email, ContactKind::LinkedIn, ContactKind::GitHub] {
            assert_eq!(CONTACTS.iter().filter(|c| c.kind == kind).count(), 1);
        }
    }

    #[test]
    fn should_not_have_empty_groups() {
        for group in TECHNICAL_SKILLS.iter().chain(OTHER_SKILLS) {
            assert!(!group.items.is_empty(), "{} is empty", group.category);
        }
        assert!(PROJECTS.iter().all(|p| !p.technologies.is_empty()));
    }
}
