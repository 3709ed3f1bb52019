//! Page content: testimonials, skills, social links and the profile block.
//!
//! The built-in content is used unless a TOML content file is given; sections missing from
//! the file keep their built-in values.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// One testimonial card. Immutable once loaded; its identity is its position in the list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SlideItem {
    pub name: String,
    #[serde(default)]
    pub role: Option<String>,
    pub message: String,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub date: Option<String>,
}

impl SlideItem {
    /// Number of stars to draw, capped at five.
    pub fn stars(&self) -> usize {
        self.rating.map_or(0, |r| r.min(5) as usize)
    }

    /// Up to two uppercase initials, used when the avatar cannot be shown.
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Skill {
    pub name: String,
    pub icon: String,
    pub desc: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Profile {
    pub name: String,
    pub image: Option<String>,
    pub greeting: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            name: "Samier".to_string(),
            image: Some("assets/img/profile.jpg".to_string()),
            greeting: "Hi, I'm".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Content {
    pub profile: Profile,
    pub testimonials: Vec<SlideItem>,
    pub skills: Vec<Skill>,
    pub social: BTreeMap<String, String>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            profile: Profile::default(),
            testimonials: builtin_testimonials(),
            skills: builtin_skills(),
            social: builtin_social(),
        }
    }
}

impl Content {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| Error::ContentParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn testimonial(
    name: &str,
    role: &str,
    message: &str,
    image: &str,
    signature: &str,
    rating: Option<u8>,
    date: &str,
) -> SlideItem {
    SlideItem {
        name: name.to_string(),
        role: Some(role.to_string()),
        message: message.to_string(),
        image: Some(image.to_string()),
        signature: Some(signature.to_string()),
        rating,
        date: Some(date.to_string()),
    }
}

pub fn builtin_testimonials() -> Vec<SlideItem> {
    vec![
        testimonial(
            "Ahmed Mohamed Al-Saeed",
            "Technical Manager",
            "An exceptional experience with a very professional team. The project was delivered precisely and on time. I strongly recommend them for any technical project.",
            "assets/img/avatars/avatar_1.png",
            "assets/img/signatures/signature_1.png",
            Some(5),
            "2024-01-01",
        ),
        testimonial(
            "Fatima Ali Al-Zahrani",
            "Project Manager",
            "Professional service that exceeded expectations. The team understood our requirements and delivered high quality work on schedule.",
            "assets/img/emojiAvatar14.png",
            "assets/img/signatures/signature_2.png",
            Some(5),
            "2024-01-15",
        ),
        testimonial(
            "Mohamed Hassan Al-Ahmadi",
            "Entrepreneur",
            "A great experience with results far beyond what I expected. Attentive to the smallest details. I will definitely work with them again.",
            "assets/img/avatars/avatar_3.png",
            "assets/img/signatures/signature_3.png",
            Some(5),
            "2024-02-01",
        ),
        testimonial(
            "Sara Ahmed Al-Qahtani",
            "Graphic Designer",
            "The best service I have ever received. The care for detail and quality made me recommend them to all my friends and colleagues.",
            "assets/img/avatars/avatar_4.png",
            "assets/img/signatures/signature_4.png",
            None,
            "2024-02-15",
        ),
        testimonial(
            "Omar Khaled Al-Mutairi",
            "App Developer",
            "Careful, professional work in every sense. Every requirement was implemented accurately and in time. Thank you for the great collaboration.",
            "assets/img/emojiAvatar14.png",
            "assets/img/signatures/signature_1.png",
            None,
            "2024-03-01",
        ),
        testimonial(
            "Noura Abdullah Al-Shammari",
            "Marketing Manager",
            "Exceptional service and a wonderful team. Quality, professionalism and punctuality were all spot on.",
            "assets/img/avatars/avatar_2.png",
            "assets/img/signatures/signature_2.png",
            None,
            "2024-03-15",
        ),
    ]
}

pub fn builtin_skills() -> Vec<Skill> {
    [
        ("HTML5", "html5", "The foundation of web pages."),
        ("CSS3", "css3", "Styles and designs web pages."),
        ("JavaScript", "javascript", "Adds interactivity to web pages."),
        ("React JS", "react", "A library for UI components."),
        ("Next Js", "nextdotjs", "A React framework for SSR & SSG."),
        ("TypeScript", "typescript", "JS with static typing."),
        ("Firebase", "firebase", "Cloud-based backend service."),
        ("Git", "git", "Version control system."),
        ("GitHub", "github", "Cloud Git repository hosting."),
        ("Bootstrap", "bootstrap", "CSS framework for responsive design."),
        ("Tailwind", "tailwindcss", "Utility-first CSS framework."),
        ("Redux", "redux", "State management for React."),
        ("Swiper", "swiper", "Touch slider for smooth UI."),
        ("Postman", "postman", "API testing & documentation."),
    ]
    .into_iter()
    .map(|(name, icon, desc)| Skill {
        name: name.to_string(),
        icon: icon.to_string(),
        desc: desc.to_string(),
    })
    .collect()
}

pub fn builtin_social() -> BTreeMap<String, String> {
    [
        ("linkedin", "https://www.linkedin.com/in/your-username"),
        ("github", "https://github.com/your-username"),
        ("facebook", ""),
        ("twitter", ""),
        ("instagram", "https://instagram.com/your-profile"),
    ]
    .into_iter()
    .map(|(platform, url)| (platform.to_string(), url.to_string()))
    .collect()
}
