//! Static page content.

pub struct Profile {
    pub name: &'static str,
    pub title: &'static str,
    pub roles: &'static [&'static str],
    pub bio: &'static str,
    pub availability: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub resume_path: &'static str,
    pub resume_file_name: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Sabbir Hossain",
    title: "Frontend Developer",
    roles: &["Frontend Developer.", "React Specialist.", "Professional Coder."],
    bio: "I am a passionate Frontend Developer with experience in building responsive and interactive web applications using React, Tailwind CSS, and modern JavaScript features. I focus on creating seamless user experiences and writing clean, maintainable code.",
    availability: "I am available for freelance work. Connect with me via and call in to my account.",
    phone: "+8801854919373",
    email: "sabbir213924@gmail.com",
    location: "Naogaon, Rajshahi, Bangladesh",
    resume_path: "/resume.pdf",
    resume_file_name: "Sabbir-Hossain-Resume.pdf",
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Social {
    LinkedIn,
    GitHub,
    Facebook,
}

pub struct SocialLink {
    pub kind: Social,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { kind: Social::LinkedIn, href: "https://www.linkedin.com/in/coder-sabbir/" },
    SocialLink { kind: Social::GitHub, href: "https://github.com/Sabbir-Coder" },
    SocialLink { kind: Social::Facebook, href: "https://www.facebook.com/sabbir1647/" },
];

impl Social {
    pub fn label(self) -> &'static str {
        match self {
            Social::LinkedIn => "LinkedIn",
            Social::GitHub => "GitHub",
            Social::Facebook => "Facebook",
        }
    }

    /// Only the Facebook mark is drawn with the even-odd rule.
    pub fn fill_rule(self) -> Option<&'static str> {
        match self {
            Social::Facebook => Some("evenodd"),
            Social::LinkedIn | Social::GitHub => None,
        }
    }

    /// SVG path data for the brand icon (24x24 viewBox).
    pub fn icon_path(self) -> &'static str {
        match self {
            Social::LinkedIn => "M19 0h-14c-2.761 0-5 2.239-5 5v14c0 2.761 2.239 5 5 5h14c2.762 0 5-2.239 5-5v-14c0-2.761-2.238-5-5-5zm-11 19h-3v-11h3v11zm-1.5-12.268c-.966 0-1.75-.79-1.75-1.764s.784-1.764 1.75-1.764 1.75.79 1.75 1.764-.783 1.764-1.75 1.764zm13.5 12.268h-3v-5.604c0-3.368-4-3.113-4 0v5.604h-3v-11h3v1.765c1.396-2.586 7-2.777 7 2.476v6.759z",
            Social::GitHub => "M12 0C5.37 0 0 5.37 0 12c0 5.3 3.438 9.8 8.205 11.385.6.113.82-.263.82-.582 0-.288-.01-1.05-.015-2.06-3.338.726-4.042-1.61-4.042-1.61-.546-1.387-1.333-1.756-1.333-1.756-1.09-.745.083-.729.083-.729 1.205.085 1.84 1.237 1.84 1.237 1.07 1.834 2.807 1.304 3.492.997.108-.775.418-1.305.76-1.606-2.665-.304-5.466-1.332-5.466-5.93 0-1.31.468-2.38 1.236-3.22-.124-.303-.535-1.523.117-3.176 0 0 1.008-.322 3.3 1.23a11.52 11.52 0 013.003-.404c1.018.005 2.045.138 3.003.404 2.29-1.552 3.296-1.23 3.296-1.23.653 1.653.242 2.873.118 3.176.77.84 1.235 1.91 1.235 3.22 0 4.61-2.804 5.624-5.475 5.921.43.37.813 1.102.813 2.222 0 1.606-.014 2.898-.014 3.293 0 .322.218.699.825.58C20.565 21.796 24 17.297 24 12c0-6.63-5.37-12-12-12z",
            Social::Facebook => "M22 12c0-5.523-4.477-10-10-10S2 6.477 2 12c0 4.991 3.657 9.128 8.438 9.878v-6.987h-2.54V12h2.54V9.797c0-2.506 1.492-3.89 3.777-3.89 1.094 0 2.238.195 2.238.195v2.46h-1.26c-1.243 0-1.63.771-1.63 1.562V12h2.773l-.443 2.89h-2.33v6.988C18.343 21.128 22 16.991 22 12z",
        }
    }
}

#[derive(PartialEq)]
pub struct Feature {
    pub title: &'static str,
    pub desc: &'static str,
    pub icon: &'static str,
}

pub const FEATURES: &[Feature] = &[
    Feature {
        title: "Web Development",
        desc: "Crafting modern, responsive websites using the latest frontend technologies and best practices.",
        icon: "code",
    },
    Feature {
        title: "React Applications",
        desc: "Building scalable and high-performance web apps with React, hooks, and component-driven architecture.",
        icon: "smartphone",
    },
    Feature {
        title: "UI/UX Design",
        desc: "Designing intuitive user interfaces and seamless user experiences for web platforms.",
        icon: "search",
    },
    Feature {
        title: "Performance Optimization",
        desc: "Improving site speed, accessibility, and SEO for better user engagement and search ranking.",
        icon: "shopping_bag",
    },
];

#[derive(PartialEq)]
pub struct Skill {
    pub name: &'static str,
    pub percent: u8,
}

#[derive(PartialEq)]
pub struct SkillGroup {
    pub eyebrow: &'static str,
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, percent: u8) -> Skill {
    Skill { name, percent }
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        eyebrow: "Expertise",
        title: "Frontend Skills",
        skills: &[
            skill("REACT JS", 90),
            skill("JAVASCRIPT", 85),
            skill("NEXT.JS", 80),
            skill("TAILWIND CSS", 95),
            skill("HTML5", 90),
        ],
    },
    SkillGroup {
        eyebrow: "Expertise",
        title: "Core Skills",
        skills: &[
            skill("ExpressJS", 90),
            skill("NodeJS", 85),
            skill("MongoDB", 95),
            skill("Firebase", 90),
            skill("REST API Development", 80),
        ],
    },
    SkillGroup {
        eyebrow: "Tools",
        title: "Tools & Frameworks",
        skills: &[
            skill("GIT & GITHUB", 85),
            skill("VERSION CONTROL", 85),
            skill("REACT HOOK FORM", 80),
            skill("DAISYUI", 80),
            skill("FIGMA", 75),
        ],
    },
];

#[derive(PartialEq)]
pub struct Project {
    pub category: &'static str,
    pub likes: u32,
    pub title: &'static str,
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        category: "EXTERNAL LINK",
        likes: 238,
        title: "Green Nest Plant Care & Store.",
        image: "https://i.ibb.co/WN6tk8PJ/Green-Nest.png",
        link: "https://greennest-plants.netlify.app/",
    },
    Project {
        category: "EXTERNAL LINK",
        likes: 234,
        title: "At HERO.IO , we craft innovative apps.",
        image: "https://i.ibb.co/4gKJTsHF/Hero-in.png",
        link: "https://hero-app-in.netlify.app/",
    },
    Project {
        category: "EXTERNAL LINK",
        likes: 67,
        title: "AI Model Inventory Manager.",
        image: "https://i.ibb.co/99vzsgfQ/ai-model.png",
        link: "https://a-10-ai-model.netlify.app/",
    },
];

/// Google Maps embed URL centered on `place`.
pub fn map_embed_url(place: &str) -> String {
    format!(
        "https://maps.google.com/maps?q={}&t=&z=13&ie=UTF8&iwloc=&output=embed",
        urlencoding::encode(place)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_percentages_are_valid() {
        for group in SKILL_GROUPS {
            assert_eq!(group.skills.len(), 5, "{}", group.title);
            assert!(group.skills.iter().all(|s| s.percent <= 100));
        }
    }

    #[test]
    fn only_facebook_uses_even_odd_fill() {
        let rules: Vec<_> = SOCIAL_LINKS.iter().map(|link| (link.kind, link.kind.fill_rule())).collect();
        assert_eq!(
            rules,
            vec![
                (Social::LinkedIn, None),
                (Social::GitHub, None),
                (Social::Facebook, Some("evenodd")),
            ]
        );
    }

    #[test]
    fn map_query_is_encoded() {
        assert_eq!(
            map_embed_url(PROFILE.location),
            "https://maps.google.com/maps?q=Naogaon%2C%20Rajshahi%2C%20Bangladesh&t=&z=13&ie=UTF8&iwloc=&output=embed"
        );
    }
}
