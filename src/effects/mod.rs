//! Self-contained page effects. Each one is a small state machine advanced by frame time or
//! queried for layout by the page engine.

pub mod header;
pub mod modal;
pub mod reveal;
pub mod skills;
pub mod social;
pub mod typewriter;

pub use header::ScrollHeader;
pub use modal::ImageModal;
pub use reveal::{visible_fraction, Reveal, RevealMode, RevealStyle};
pub use skills::SkillsGrid;
pub use social::{display_name, SocialLink, SocialLinks};
pub use typewriter::TypeWriter;
