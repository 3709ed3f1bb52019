use raylib::prelude::Rectangle;

use crate::constants::{SKILL_CARD_HEIGHT, SKILL_CARD_MIN_WIDTH, SKILL_GRID_GAP};
use crate::content::Skill;

/// Responsive grid of skill cards.
#[derive(Debug, Clone)]
pub struct SkillsGrid {
    skills: Vec<Skill>,
}

impl SkillsGrid {
    pub fn new(skills: Vec<Skill>) -> Self {
        Self { skills }
    }

    pub fn skills(&self) -> &[Skill] {
        &self.skills
    }

    /// As many columns of at least the minimum card width as fit, never fewer than one.
    pub fn columns(width: f32) -> usize {
        let columns = ((width + SKILL_GRID_GAP) / (SKILL_CARD_MIN_WIDTH + SKILL_GRID_GAP)).floor();
        (columns as usize).max(1)
    }

    pub fn rows(&self, width: f32) -> usize {
        self.skills.len().div_ceil(Self::columns(width))
    }

    pub fn height(&self, width: f32) -> f32 {
        let rows = self.rows(width);
        if rows == 0 {
            return 0.0;
        }
        rows as f32 * SKILL_CARD_HEIGHT + (rows - 1) as f32 * SKILL_GRID_GAP
    }

    /// Card rectangles, row by row, for a grid whose top-left corner is at `(x, y)`.
    pub fn layout(&self, x: f32, y: f32, width: f32) -> Vec<Rectangle> {
        let columns = Self::columns(width);
        let cell = ((width - SKILL_GRID_GAP * (columns - 1) as f32) / columns as f32).max(0.0);
        (0..self.skills.len())
            .map(|i| {
                let (row, col) = (i / columns, i % columns);
                Rectangle::new(
                    x + col as f32 * (cell + SKILL_GRID_GAP),
                    y + row as f32 * (SKILL_CARD_HEIGHT + SKILL_GRID_GAP),
                    cell,
                    SKILL_CARD_HEIGHT,
                )
            })
            .collect()
    }
}
