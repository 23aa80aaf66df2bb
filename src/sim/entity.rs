//! Entity handles, HUD labels and the factories that build them
//!
//! A [`Sprite`] is the simulation's side of a drawable: position, size, alpha
//! and visibility plus a [`Look`] telling the renderer what to draw. The
//! renderer owns the actual textures; the simulation only references them.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Bounded, Rect};
use super::state::Surface;
use crate::tuning::Tuning;

/// Unique id, allocated once per entity and never reused
pub type EntityId = u32;

/// Which collection an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Craft,
    Enemy,
    Projectile,
    Explosion,
}

/// Image assets the renderer is expected to provide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageId {
    Craft,
    Enemy,
    Explosion,
}

/// Packed 0xRRGGBB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xffffff);
    pub const RED: Color = Color(0xff0000);
    pub const YELLOW: Color = Color(0xffff00);
    pub const ORANGE: Color = Color(0xffa500);
}

/// How an entity is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Look {
    Image { image: ImageId, scale: f32 },
    Solid(Color),
}

/// A positioned, sized, drawable entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub id: EntityId,
    pub kind: EntityKind,
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Opacity, 0-1
    pub alpha: f32,
    pub visible: bool,
    /// Mirror horizontally when drawing
    pub flip_x: bool,
    pub look: Look,
}

impl Sprite {
    fn new(id: EntityId, kind: EntityKind, pos: Vec2, size: Vec2, look: Look) -> Self {
        Self {
            id,
            kind,
            pos,
            size,
            alpha: 1.0,
            visible: true,
            flip_x: false,
            look,
        }
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Scale the sprite about its top-left corner
    pub fn grow(&mut self, factor: f32) {
        self.size *= factor;
        if let Look::Image { scale, .. } = &mut self.look {
            *scale *= factor;
        }
    }

    /// Lower alpha by `step`, never below zero
    pub fn fade(&mut self, step: f32) {
        self.alpha = (self.alpha - step).max(0.0);
    }
}

impl Bounded for Sprite {
    fn bounds(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// HUD text element
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Label {
    pub text: String,
    pub pos: Vec2,
    pub font_size: f32,
    pub color: Color,
    pub visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>, color: Color, font_size: f32, pos: Vec2) -> Self {
        Self {
            text: text.into(),
            pos,
            font_size,
            color,
            visible: true,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Where the craft starts and respawns after a hit
pub fn respawn_point(surface: Surface, tuning: &Tuning) -> Vec2 {
    Vec2::new(
        (surface.width / 2.0).floor(),
        surface.height * tuning.respawn_height,
    )
}

/// The player's craft, facing up at the respawn point
pub fn craft(id: EntityId, surface: Surface, tuning: &Tuning) -> Sprite {
    let mut craft = Sprite::new(
        id,
        EntityKind::Craft,
        respawn_point(surface, tuning),
        tuning.craft_size,
        Look::Image {
            image: ImageId::Craft,
            scale: 1.0,
        },
    );
    craft.flip_x = true;
    craft
}

pub fn enemy(id: EntityId, pos: Vec2, tuning: &Tuning) -> Sprite {
    Sprite::new(
        id,
        EntityKind::Enemy,
        pos,
        tuning.enemy_size,
        Look::Image {
            image: ImageId::Enemy,
            scale: 1.0,
        },
    )
}

/// A laser whose bottom edge sits on the craft's top edge
pub fn projectile(id: EntityId, x: f32, craft_y: f32, color: Color, tuning: &Tuning) -> Sprite {
    let size = tuning.laser_size;
    Sprite::new(
        id,
        EntityKind::Projectile,
        Vec2::new(x, craft_y - size.y),
        size,
        Look::Solid(color),
    )
}

pub fn explosion(id: EntityId, pos: Vec2, image: ImageId, scale: f32, tuning: &Tuning) -> Sprite {
    let mut explosion = Sprite::new(
        id,
        EntityKind::Explosion,
        pos,
        tuning.explosion_image_size,
        Look::Image { image, scale: 1.0 },
    );
    explosion.grow(scale);
    explosion
}
