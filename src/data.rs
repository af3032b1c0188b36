// Static portfolio content
//
// Three fixed tables (certificates, experiences, skill categories)
// plus the constellation's skill nodes. Loaded once, never mutated,
// never persisted. Links are only ever acted on by an explicit user
// keypress.

use crate::anim::Vec3;
use ratatui::style::Color;

pub struct Certificate {
    pub title: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
    pub badge: &'static str,
    pub link: &'static str,
}

pub const CERTIFICATES: &[Certificate] = &[
    Certificate {
        title: "Software Engineer Fundamentals",
        issuer: "Revou Academy",
        date: "Jan 2025",
        badge: "💻",
        link: "https://drive.google.com/file/d/1wVspSL92Gxi-ymLdQXM8YGhuLvbeJ8D6/view?usp=sharing",
    },
    Certificate {
        title: "Software Engineer Internship",
        issuer: "Hackerrank",
        date: "Dec 2025",
        badge: "🎯",
        link: "https://drive.google.com/file/d/1Jz6jTIXj_lp313-8DTmLh-eWZe4wF8V0/view?usp=sharing",
    },
    Certificate {
        title: "Master AI for Web App Development",
        issuer: "Skill Up Academy",
        date: "Dec 2025",
        badge: "🤖",
        link: "https://drive.google.com/file/d/1RHqXxKD5xxENp-gJxrccG5md8eUFeBs5/view?usp=sharing",
    },
    Certificate {
        title: "ReactJS Beginner",
        issuer: "Skill Up Academy",
        date: "Dec 2025",
        badge: "⚛️",
        link: "https://drive.google.com/file/d/1EN9wynu7zqc9eW9TET4TZqHKChh8eOIv/view?usp=sharing",
    },
    Certificate {
        title: "SQL Intermediate",
        issuer: "HackerRank",
        date: "Dec 2025",
        badge: "🗄️",
        link: "https://drive.google.com/file/d/10ZPuMlgVnGl2wlQ2Mgtd98on4Adqn2Z8/view?usp=sharing",
    },
    Certificate {
        title: "JavaScript Intermediate",
        issuer: "Hackerrank",
        date: "Dec 2025",
        badge: "⚡",
        link: "https://drive.google.com/file/d/1_qW_-kLg3EgXUhpMsnptrfTk3t5q4SKX/view?usp=sharing",
    },
    Certificate {
        title: "CSS Essentials",
        issuer: "Cisco Networking Academy",
        date: "Dec 2025",
        badge: "🎨",
        link: "https://drive.google.com/file/d/1bsdMjOJFGkT2YaTkt9O_W4P4-pybVXu3/view?usp=sharing",
    },
    Certificate {
        title: "Redis Fundamentals",
        issuer: "Redis University",
        date: "Oct 2025",
        badge: "🔴",
        link: "https://drive.google.com/file/d/1z8tnwVXzeHRuwxYLAwCZ9uTs5hR1r8xP/view?usp=sharing",
    },
    Certificate {
        title: "MongoDB Essentials",
        issuer: "MongoDB University",
        date: "Oct 2025",
        badge: "🍃",
        link: "https://www.credly.com/users/rahma-aliyyah/badges",
    },
];

pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    title: "Laboratory Assistant of Web Application Development Lab",
    company: "Brawijaya University",
    period: "Aug 2025 - Dec 2025",
    description: "Assisted in delivering web application development practicum \
sessions for 34 students, guiding them in building dynamic web applications \
using Laravel, MySQL, AJAX, and core web technologies (HTML, CSS, JavaScript)",
    skills: &["Laravel", "HTML", "CSS", "JavaScript", "MySQL", "AJAX"],
}];

pub struct SkillEntry {
    pub name: &'static str,
    pub color: Color,
}

pub struct SkillCategory {
    pub title: &'static str,
    pub icon: &'static str,
    pub color: Color,
    pub skills: &'static [SkillEntry],
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Languages",
        icon: "</>",
        color: Color::Rgb(0x3b, 0x82, 0xf6),
        skills: &[
            SkillEntry { name: "JavaScript", color: Color::Rgb(0xf7, 0xdf, 0x1e) },
            SkillEntry { name: "TypeScript", color: Color::Rgb(0x31, 0x78, 0xc6) },
            SkillEntry { name: "Python", color: Color::Rgb(0x37, 0x76, 0xab) },
            SkillEntry { name: "HTML5", color: Color::Rgb(0xe3, 0x4f, 0x26) },
            SkillEntry { name: "CSS3", color: Color::Rgb(0x15, 0x72, 0xb6) },
            SkillEntry { name: "SQL", color: Color::Rgb(0x44, 0x79, 0xa1) },
        ],
    },
    SkillCategory {
        title: "Frontend",
        icon: "🎨",
        color: Color::Rgb(0xa8, 0x55, 0xf7),
        skills: &[
            SkillEntry { name: "React", color: Color::Rgb(0x61, 0xda, 0xfb) },
            SkillEntry { name: "Next.js", color: Color::Rgb(0xd4, 0xd4, 0xd4) },
            SkillEntry { name: "Three.js", color: Color::Rgb(0xff, 0xff, 0xff) },
            SkillEntry { name: "Tailwind", color: Color::Rgb(0x06, 0xb6, 0xd4) },
            SkillEntry { name: "Framer", color: Color::Rgb(0x00, 0x55, 0xff) },
        ],
    },
    SkillCategory {
        title: "Backend",
        icon: "🗄",
        color: Color::Rgb(0x22, 0xc5, 0x5e),
        skills: &[
            SkillEntry { name: "Node.js", color: Color::Rgb(0x33, 0x99, 0x33) },
            SkillEntry { name: "Express", color: Color::Rgb(0xd4, 0xd4, 0xd4) },
            SkillEntry { name: "MongoDB", color: Color::Rgb(0x47, 0xa2, 0x48) },
            SkillEntry { name: "PostgreSQL", color: Color::Rgb(0x41, 0x69, 0xe1) },
            SkillEntry { name: "REST API", color: Color::Rgb(0x00, 0x96, 0x88) },
        ],
    },
    SkillCategory {
        title: "Tools",
        icon: "🔧",
        color: Color::Rgb(0xf9, 0x73, 0x16),
        skills: &[
            SkillEntry { name: "Git", color: Color::Rgb(0xf0, 0x50, 0x32) },
            SkillEntry { name: "Docker", color: Color::Rgb(0x24, 0x96, 0xed) },
            SkillEntry { name: "Figma", color: Color::Rgb(0xf2, 0x4e, 0x1e) },
            SkillEntry { name: "VS Code", color: Color::Rgb(0x00, 0x7a, 0xcc) },
            SkillEntry { name: "Linux", color: Color::Rgb(0xfc, 0xc6, 0x24) },
        ],
    },
];

/// One node of the skill constellation.
pub struct ConstellationSkill {
    pub name: &'static str,
    pub color: Color,
    pub position: Vec3,
}

pub const SKILLS: &[ConstellationSkill] = &[
    ConstellationSkill { name: "React", color: Color::Rgb(0x61, 0xda, 0xfb), position: Vec3::new(0.0, 0.0, 0.0) },
    ConstellationSkill { name: "TypeScript", color: Color::Rgb(0x31, 0x78, 0xc6), position: Vec3::new(2.0, 1.0, -1.0) },
    ConstellationSkill { name: "JavaScript", color: Color::Rgb(0xf7, 0xdf, 0x1e), position: Vec3::new(-2.0, 0.5, 1.0) },
    ConstellationSkill { name: "Python", color: Color::Rgb(0x37, 0x76, 0xab), position: Vec3::new(1.0, -1.0, 1.5) },
    ConstellationSkill { name: "Node.js", color: Color::Rgb(0x33, 0x99, 0x33), position: Vec3::new(-1.5, 1.5, -0.5) },
    ConstellationSkill { name: "Three.js", color: Color::Rgb(0xff, 0xff, 0xff), position: Vec3::new(2.5, -0.5, 0.5) },
    ConstellationSkill { name: "Tailwind", color: Color::Rgb(0x06, 0xb6, 0xd4), position: Vec3::new(-2.5, -1.0, -1.0) },
    ConstellationSkill { name: "MongoDB", color: Color::Rgb(0x47, 0xa2, 0x48), position: Vec3::new(0.5, 2.0, 1.0) },
    ConstellationSkill { name: "PostgreSQL", color: Color::Rgb(0x41, 0x69, 0xe1), position: Vec3::new(-1.0, -2.0, 0.0) },
    ConstellationSkill { name: "Git", color: Color::Rgb(0xf0, 0x50, 0x32), position: Vec3::new(1.5, 0.5, -2.0) },
    ConstellationSkill { name: "Docker", color: Color::Rgb(0x24, 0x96, 0xed), position: Vec3::new(-0.5, -0.5, 2.0) },
    ConstellationSkill { name: "Figma", color: Color::Rgb(0xf2, 0x4e, 0x1e), position: Vec3::new(0.0, 1.0, -1.5) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_shapes_match_the_site() {
        assert_eq!(CERTIFICATES.len(), 9);
        assert_eq!(SKILLS.len(), 12);
        assert_eq!(SKILL_CATEGORIES.len(), 4);
        assert!(!EXPERIENCES.is_empty());
    }

    #[test]
    fn every_certificate_has_a_link() {
        for cert in CERTIFICATES {
            assert!(cert.link.starts_with("https://"), "{}", cert.title);
        }
    }
}
