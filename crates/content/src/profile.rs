//! The hardcoded profile data behind the section.

use crate::model::{ColorToken, Icon, Skill, SkillCategory, SkillsSection, Stat};

fn skill(name: &str, level: u8, color: ColorToken) -> Skill {
    Skill {
        name: name.into(),
        level,
        color,
    }
}

fn stat(number: &str, label: &str) -> Stat {
    Stat {
        number: number.into(),
        label: label.into(),
    }
}

/// The "Skills & Expertise" section as shown on the portfolio.
pub fn skills_section() -> SkillsSection {
    SkillsSection {
        anchor: "skills".into(),
        title: "Skills & Expertise".into(),
        subtitle: "A comprehensive overview of my technical skills and proficiency levels \
                   in various technologies and tools."
            .into(),
        categories: vec![
            SkillCategory {
                title: "Frontend Development".into(),
                icon: Icon::Code,
                color: ColorToken::Primary,
                skills: vec![
                    skill("Flutter & Dart", 95, ColorToken::Primary),
                    skill("UI/UX Design", 80, ColorToken::Accent),
                    skill("Responsive Design", 90, ColorToken::Primary),
                ],
            },
            SkillCategory {
                title: "Mobile Development".into(),
                icon: Icon::Smartphone,
                color: ColorToken::Primary,
                skills: vec![
                    skill("State Management", 85, ColorToken::Primary),
                    skill("Native Features", 80, ColorToken::Accent),
                    skill("App Store Deployment", 88, ColorToken::Primary),
                ],
            },
            SkillCategory {
                title: "Tools & Version Control".into(),
                icon: Icon::GitBranch,
                color: ColorToken::Accent,
                skills: vec![
                    skill("Git & GitHub", 85, ColorToken::Accent),
                    skill("VS Code", 92, ColorToken::Primary),
                    skill("Android Studio", 88, ColorToken::Accent),
                ],
            },
            SkillCategory {
                title: "Backend & Database".into(),
                icon: Icon::Database,
                color: ColorToken::Accent,
                skills: vec![
                    skill("Firebase", 90, ColorToken::Accent),
                    skill("REST API", 90, ColorToken::Primary),
                ],
            },
        ],
        technologies: [
            "Flutter",
            "Dart",
            "Firebase",
            "GetX",
            "REST API",
            "Git",
            "GitHub",
            "VS Code",
            "Android Studio",
            "Figma",
            "Postman",
            "Firebase Analytics",
        ]
        .into_iter()
        .map(String::from)
        .collect(),
        stats: vec![
            stat("15+", "Projects Completed"),
            stat("1+", "Years Experience"),
            stat("10+", "Happy Clients"),
            stat("2000+", "Code Commits\nSince 2024"),
            stat("1000h+", "Hours of Coding\n(May 2025 - Present)"),
        ],
    }
}
