pub const RENDER_WIDTH: i32 = 1920;           // Width of the page framebuffer
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the page framebuffer
pub const FPS: u32 = 60;                      // Frames per second
pub const FRAME_TIME: f32 = 1.0 / FPS as f32; // Time per frame (seconds)

pub const AUTOPLAY_INTERVAL: f32 = 5.0;       // Delay between automatic carousel advances (seconds)
pub const SWIPE_THRESHOLD: f32 = 50.0;        // Minimum horizontal drag recognized as a swipe (pixels)
pub const CARD_WIDTH: f32 = 350.0;            // Width of one testimonial card (pixels)
pub const CARD_GAP: f32 = 32.0;               // Space between two testimonial cards (pixels)
pub const SLIDE_DURATION: f32 = 0.5;          // Track transition when the current card changes (seconds)

pub const TYPE_SPEED: f32 = 0.12;             // Delay between typed characters (seconds)
pub const DELETE_SPEED: f32 = 0.08;           // Delay between deleted characters (seconds)
pub const TYPE_PAUSE: f32 = 2.5;              // Time a fully typed text stays on screen (seconds)

pub const HEADER_SCROLL_THRESHOLD: f32 = 50.0; // Scroll offset where the header turns solid
pub const HEADER_HIDE_THRESHOLD: f32 = 100.0;  // Scroll offset past which scrolling down hides the header

pub const REVEAL_OFFSET: f32 = 30.0;          // Initial downward offset of hidden elements (pixels)
pub const REVEAL_SCALE: f32 = 0.9;            // Initial scale of hidden elements
pub const REVEAL_DURATION: f32 = 0.6;         // Entrance animation duration (seconds)
pub const REVEAL_STAGGER: f32 = 0.1;          // Extra delay per element index (seconds)
pub const REVEAL_THRESHOLD: f32 = 0.1;        // Visible fraction that triggers an entrance
pub const REVEAL_ROOT_MARGIN: f32 = 50.0;     // Viewport bottom inset for the visibility test (pixels)

pub const SOCIAL_ENTRANCE: f32 = 1.0;         // Entrance animation of a newly shown social link (seconds)
pub const RIPPLE_DURATION: f32 = 0.6;         // Click ripple on a social link (seconds)
pub const SOCIAL_REMOVE_DURATION: f32 = 0.5;  // Exit animation of a removed social link (seconds)

pub const SKILL_CARD_MIN_WIDTH: f32 = 220.0;  // Minimum width of a skills grid cell (pixels)
pub const SKILL_CARD_HEIGHT: f32 = 180.0;     // Height of a skills grid cell (pixels)
pub const SKILL_GRID_GAP: f32 = 24.0;         // Space between skills grid cells (pixels)
