//! Capability traits for code that works over any kind of scene entity.

use scene_geom::{Point, Tile};

use crate::{ObjectProxy, SceneHost, Surface};

pub trait Locatable {
    /// Absolute tile, [`Tile::NIL`] when unknown.
    fn location(&self) -> Tile;
}

pub trait Identifiable {
    /// Definition id, `-1` when absent.
    fn id(&self) -> i32;
}

pub trait Nameable {
    /// Display name, empty when unknown.
    fn name(&self) -> String;
}

pub trait Interactive {
    /// True while the entity is live.
    fn is_valid(&self) -> bool;

    /// True while the entity is visible.
    fn is_in_viewport(&self) -> bool;

    /// Point to click, or [`Point::OFFSCREEN`].
    fn interact_point(&self) -> Point;

    fn next_point(&self) -> Point;

    fn center_point(&self) -> Point;

    fn contains(&self, point: Point) -> bool;
}

pub trait Renderable {
    type Model;

    /// The renderable model, when the host currently has one.
    fn model(&self) -> Option<Self::Model>;
}

pub trait Drawable {
    /// Outline the entity with `alpha`.
    fn draw(&self, surface: &mut dyn Surface, alpha: u8);

    /// Outline the entity with the default alpha.
    fn draw_default(&self, surface: &mut dyn Surface);
}

/// Index of the valid entity closest to `from`, if any.
pub fn nearest<T: Locatable + Interactive>(entities: &[T], from: Tile) -> Option<usize> {
    entities
        .iter()
        .enumerate()
        .filter(|(_, entity)| entity.is_valid())
        .map(|(idx, entity)| (idx, entity.location().distance_to(from)))
        .filter(|(_, distance)| distance.is_finite())
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(idx, _)| idx)
}

impl<H: SceneHost> Locatable for ObjectProxy<H> {
    fn location(&self) -> Tile {
        Self::location(self)
    }
}

impl<H: SceneHost> Identifiable for ObjectProxy<H> {
    fn id(&self) -> i32 {
        Self::id(self)
    }
}

impl<H: SceneHost> Nameable for ObjectProxy<H> {
    fn name(&self) -> String {
        Self::name(self)
    }
}

impl<H: SceneHost> Interactive for ObjectProxy<H> {
    fn is_valid(&self) -> bool {
        Self::is_valid(self)
    }

    fn is_in_viewport(&self) -> bool {
        Self::is_in_viewport(self)
    }

    fn interact_point(&self) -> Point {
        Self::interact_point(self)
    }

    fn next_point(&self) -> Point {
        Self::next_point(self)
    }

    fn center_point(&self) -> Point {
        Self::center_point(self)
    }

    fn contains(&self, point: Point) -> bool {
        Self::contains(self, point)
    }
}

impl<H: SceneHost> Renderable for ObjectProxy<H> {
    type Model = H::Model;

    fn model(&self) -> Option<H::Model> {
        Self::model(self)
    }
}

impl<H: SceneHost> Drawable for ObjectProxy<H> {
    fn draw(&self, surface: &mut dyn Surface, alpha: u8) {
        Self::draw(self, surface, alpha);
    }

    fn draw_default(&self, surface: &mut dyn Surface) {
        Self::draw_default(self, surface);
    }
}
