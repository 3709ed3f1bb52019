use crate::config::TypewriterConfig;

/// Types a list of phrases one character at a time, holds each complete phrase, erases it
/// and moves on to the next, forever.
#[derive(Debug, Clone)]
pub struct TypeWriter {
    texts: Vec<String>,
    type_speed: f32,
    delete_speed: f32,
    pause_time: f32,
    text_index: usize,
    char_index: usize,
    is_deleting: bool,
    wait: f32,
}

impl TypeWriter {
    /// Speeds are in seconds. The first character appears immediately.
    pub fn new(texts: Vec<String>, type_speed: f32, delete_speed: f32, pause_time: f32) -> Self {
        let mut writer = Self {
            texts,
            type_speed,
            delete_speed,
            pause_time,
            text_index: 0,
            char_index: 0,
            is_deleting: false,
            wait: 0.0,
        };
        if !writer.texts.is_empty() {
            writer.wait = writer.step();
        }
        writer
    }

    pub fn from_config(config: &TypewriterConfig) -> Self {
        Self::new(
            config.texts.clone(),
            config.type_ms as f32 / 1000.0,
            config.delete_ms as f32 / 1000.0,
            config.pause_ms as f32 / 1000.0,
        )
    }

    pub fn update(&mut self, dt: f32) {
        if self.texts.is_empty() {
            return;
        }
        self.wait -= dt;
        while self.wait <= 0.0 {
            self.wait += self.step();
        }
    }

    /// The part of the current phrase that is on screen.
    pub fn visible(&self) -> &str {
        let Some(text) = self.texts.get(self.text_index) else {
            return "";
        };
        match text.char_indices().nth(self.char_index) {
            Some((end, _)) => &text[..end],
            None => text,
        }
    }

    pub fn text_index(&self) -> usize {
        self.text_index
    }

    pub fn is_deleting(&self) -> bool {
        self.is_deleting
    }

    /// Applies one keystroke and returns the delay before the next one.
    fn step(&mut self) -> f32 {
        let len = self.texts[self.text_index].chars().count();

        if self.is_deleting {
            self.char_index = self.char_index.saturating_sub(1);
        } else {
            self.char_index = (self.char_index + 1).min(len);
        }

        let mut delay = if self.is_deleting { self.delete_speed } else { self.type_speed };

        if !self.is_deleting && self.char_index == len {
            delay = self.pause_time;
            self.is_deleting = true;
        } else if self.is_deleting && self.char_index == 0 {
            self.is_deleting = false;
            self.text_index = (self.text_index + 1) % self.texts.len();
        }

        delay
    }
}
