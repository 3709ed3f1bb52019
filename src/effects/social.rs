use std::collections::BTreeMap;

use raylib::prelude::Vector2;
use tracing::debug;

use crate::constants::{RIPPLE_DURATION, SOCIAL_ENTRANCE, SOCIAL_REMOVE_DURATION};

/// Platforms in display order. Unknown platforms from content files follow these.
pub const PLATFORMS: [&str; 5] = ["linkedin", "github", "facebook", "twitter", "instagram"];

pub fn display_name(platform: &str) -> &str {
    match platform {
        "linkedin" => "LinkedIn",
        "github" => "GitHub",
        "facebook" => "Facebook",
        "twitter" => "Twitter",
        "instagram" => "Instagram",
        other => other,
    }
}

/// Blank and placeholder (`#`) links are not shown.
pub fn is_shown(url: &str) -> bool {
    let url = url.trim();
    !url.is_empty() && url != "#"
}

#[derive(Debug, Clone, PartialEq)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
    /// Seconds since the link appeared, capped at the entrance duration.
    pub age: f32,
    /// Seconds left of the exit animation, for links being removed.
    pub removing: Option<f32>,
}

impl SocialLink {
    pub fn entrance_progress(&self) -> f32 {
        (self.age / SOCIAL_ENTRANCE).min(1.0)
    }

    pub fn is_loading(&self) -> bool {
        self.age < SOCIAL_ENTRANCE
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Ripple {
    pub link: usize,
    pub origin: Vector2,
    pub age: f32,
}

impl Ripple {
    pub fn progress(&self) -> f32 {
        (self.age / RIPPLE_DURATION).min(1.0)
    }
}

/// The row of social profile icons on the home section.
#[derive(Debug, Clone, Default)]
pub struct SocialLinks {
    links: BTreeMap<String, String>,
    shown: Vec<SocialLink>,
    ripples: Vec<Ripple>,
}

impl SocialLinks {
    pub fn new(links: &BTreeMap<String, String>) -> Self {
        let mut social = Self { links: links.clone(), ..Self::default() };
        social.rebuild();
        social
    }

    /// Visible links, in display order.
    pub fn shown(&self) -> &[SocialLink] {
        &self.shown
    }

    pub fn ripples(&self) -> &[Ripple] {
        &self.ripples
    }

    pub fn is_container_visible(&self) -> bool {
        self.links.values().any(|url| is_shown(url))
    }

    pub fn current_links(&self) -> BTreeMap<String, String> {
        self.links.clone()
    }

    pub fn update_link(&mut self, platform: &str, url: &str) {
        self.links.insert(platform.to_string(), url.to_string());
        self.rebuild();
    }

    pub fn update_all(&mut self, links: &BTreeMap<String, String>) {
        self.links.extend(links.iter().map(|(k, v)| (k.clone(), v.clone())));
        self.rebuild();
    }

    /// Plays the exit animation, then clears the platform's URL.
    pub fn remove_link(&mut self, platform: &str) {
        if let Some(link) = self.shown.iter_mut().find(|l| l.platform == platform) {
            link.removing.get_or_insert(SOCIAL_REMOVE_DURATION);
        }
    }

    pub fn clicked(&mut self, link: usize, origin: Vector2) {
        if link < self.shown.len() {
            self.ripples.push(Ripple { link, origin, age: 0.0 });
        }
    }

    pub fn update(&mut self, dt: f32) {
        let mut finished = Vec::new();
        for link in self.shown.iter_mut() {
            link.age = (link.age + dt).min(SOCIAL_ENTRANCE);
            if let Some(left) = link.removing.as_mut() {
                *left -= dt;
                if *left <= 0.0 {
                    finished.push(link.platform.clone());
                }
            }
        }
        for ripple in self.ripples.iter_mut() {
            ripple.age += dt;
        }
        self.ripples.retain(|r| r.age < RIPPLE_DURATION);

        if !finished.is_empty() {
            for platform in finished {
                debug!(platform = %platform, "social link removed");
                self.links.insert(platform, String::new());
            }
            self.rebuild();
        }
    }

    fn rebuild(&mut self) {
        let previous = std::mem::take(&mut self.shown);
        let ordered = PLATFORMS
            .iter()
            .filter_map(|p| self.links.get_key_value(*p))
            .chain(self.links.iter().filter(|(p, _)| !PLATFORMS.contains(&p.as_str())));

        for (platform, url) in ordered {
            if !is_shown(url) {
                continue;
            }
            let kept = previous.iter().find(|l| &l.platform == platform && &l.url == url);
            self.shown.push(match kept {
                Some(link) => link.clone(),
                None => SocialLink { platform: platform.clone(), url: url.clone(), age: 0.0, removing: None },
            });
        }
        self.ripples.retain(|r| r.link < self.shown.len());
    }
}
