//! Owner identity, links and downloadable documents.

/// Full display name.
pub const NAME: &str = "Shaktidhar Gupta";
/// Short brand shown in the navbar.
pub const BRAND: &str = "Shaktidhar";
/// Initials used when the avatar image is unavailable.
pub const INITIALS: &str = "SG";
pub const TAGLINE: &str = "Crafting digital experiences that blend aesthetics with functionality";
/// One-liner shown in the compact scroll-up bar.
pub const MOTTO: &str = "I Build What Matters!";
/// Roles cycled under the hero heading.
pub const ROLES: [&str; 3] = ["Software Developer", "UX Designer", "Creative Coder"];

pub const AVATAR_PATH: &str = "/projects/profile/profile.png";
pub const CV_PATH: &str = "/cv.pdf";
pub const CV_DOWNLOAD_NAME: &str = "Shaktidhar_Gupta_CV.pdf";
pub const RESUME_PATH: &str = "/resume.pdf";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sktigpta/";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLine {
    pub label: &'static str,
    pub value: &'static str,
    pub href: Option<&'static str>,
}

pub const CONTACT_LINES: [ContactLine; 4] = [
    ContactLine { label: "Location", value: "Bhilai, CG, India (490023)", href: None },
    ContactLine { label: "Email", value: "sktigpta@gmail.com", href: Some("mailto:sktigpta@gmail.com") },
    ContactLine { label: "Phone", value: "+91 9123130372", href: None },
    ContactLine { label: "Website", value: "me.pigoo.in", href: Some("https://me.pigoo.in") },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub title: &'static str,
    pub href: &'static str,
}

pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink { title: "LinkedIn", href: "https://linkedin.com/in/sktigpta" },
    SocialLink { title: "GitHub", href: "https://github.com/sktigpta" },
    SocialLink { title: "LeetCode", href: "https://leetcode.com/sktigpta" },
];

/// About-page bio paragraphs.
pub const BIO: [&str; 2] = [
    "I'm a passionate frontend developer and UI/UX designer with over 5 years of experience \
     creating digital experiences that users love. My approach combines clean code with \
     intuitive design, focusing on the details that make products stand out.",
    "I specialize in building responsive web applications and mobile interfaces that are both \
     visually appealing and highly functional. My background in design allows me to bridge the \
     gap between aesthetics and technical implementation.",
];

/// A proficiency bar on the about page. `level` is a percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Proficiency {
    pub name: &'static str,
    pub level: u8,
}

pub const PROFICIENCIES: [Proficiency; 6] = [
    Proficiency { name: "React", level: 90 },
    Proficiency { name: "JavaScript", level: 85 },
    Proficiency { name: "CSS/SCSS", level: 80 },
    Proficiency { name: "Node.js", level: 75 },
    Proficiency { name: "UI/UX Design", level: 85 },
    Proficiency { name: "Responsive Design", level: 90 },
];

/// Copyright line for the footer.
#[must_use]
pub fn copyright(year: i32) -> String {
    format!("© {year} {NAME}. All rights reserved.")
}
