//! Triangle meshes and their screen projection.

use std::sync::Arc;

use scene_geom::{FIXED_SHIFT, MapBase, Point, RelativeLocation};
use scene_proxy::{Model, Surface};

use crate::Viewport;

/// A mesh vertex as a fixed-point offset from the object's position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Vertex {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Vertex {
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }
}

/// Triangle soup shared between every object using the same shape.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Mesh {
    triangles: Vec<[Vertex; 3]>,
}

impl Mesh {
    /// Mesh from raw triangles.
    #[must_use]
    pub fn new(triangles: Vec<[Vertex; 3]>) -> Self {
        Self { triangles }
    }

    /// Axis-aligned box centered on the object, `height` units tall.
    ///
    /// Two triangles per face, twelve in total.
    #[must_use]
    pub fn cuboid(half_width: i32, half_depth: i32, height: i32) -> Self {
        let (w, d, h) = (half_width, half_depth, height);
        let v = [
            Vertex::new(-w, -d, 0),
            Vertex::new(w, -d, 0),
            Vertex::new(w, d, 0),
            Vertex::new(-w, d, 0),
            Vertex::new(-w, -d, h),
            Vertex::new(w, -d, h),
            Vertex::new(w, d, h),
            Vertex::new(-w, d, h),
        ];
        let faces = [
            [0, 1, 2, 3],
            [4, 5, 6, 7],
            [0, 1, 5, 4],
            [1, 2, 6, 5],
            [2, 3, 7, 6],
            [3, 0, 4, 7],
        ];
        let triangles = faces
            .iter()
            .flat_map(|[a, b, c, e]| [[v[*a], v[*b], v[*c]], [v[*a], v[*c], v[*e]]])
            .collect();
        Self { triangles }
    }

    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }
}

/// A mesh projected through the current viewport.
///
/// Projection happens once, at construction, so a model reflects the
/// object's position at the moment the host handed it out.
#[derive(Clone, Debug)]
pub struct BoxModel {
    triangles: Vec<[Point; 3]>,
    view: Viewport,
}

impl BoxModel {
    /// Project `mesh` anchored at `relative` on `plane`.
    ///
    /// Objects off the viewport's plane project to nothing.
    #[must_use]
    pub fn project(
        mesh: &Arc<Mesh>,
        relative: RelativeLocation,
        plane: i32,
        base: MapBase,
        view: Viewport,
    ) -> Self {
        if relative.is_nil() || plane != view.origin.plane {
            return Self {
                triangles: Vec::new(),
                view,
            };
        }
        let base = base.tile();
        let ax = (i64::from(base.x) << FIXED_SHIFT) + i64::from(relative.x);
        let ay = (i64::from(base.y) << FIXED_SHIFT) + i64::from(relative.y);
        let triangles = mesh
            .triangles
            .iter()
            .map(|tri| {
                tri.map(|v| view.project(ax + i64::from(v.x), ay + i64::from(v.y), v.z))
            })
            .collect();
        Self { triangles, view }
    }

    fn triangle(&self, index: i32) -> Option<&[Point; 3]> {
        usize::try_from(index)
            .ok()
            .and_then(|idx| self.triangles.get(idx))
    }

    fn on_screen(&self, point: Point) -> Option<Point> {
        self.view.on_screen(point).then_some(point)
    }
}

fn centroid_of([a, b, c]: &[Point; 3]) -> Point {
    let x = (i64::from(a.x) + i64::from(b.x) + i64::from(c.x)) / 3;
    let y = (i64::from(a.y) + i64::from(b.y) + i64::from(c.y)) / 3;
    Point::new(x as i32, y as i32)
}

fn edge(a: Point, b: Point, p: Point) -> i64 {
    let (ax, ay) = (i64::from(a.x), i64::from(a.y));
    (i64::from(b.x) - ax) * (i64::from(p.y) - ay) - (i64::from(b.y) - ay) * (i64::from(p.x) - ax)
}

fn triangle_contains([a, b, c]: &[Point; 3], p: Point) -> bool {
    let d1 = edge(*a, *b, p);
    let d2 = edge(*b, *c, p);
    let d3 = edge(*c, *a, p);
    let has_neg = d1 < 0 || d2 < 0 || d3 < 0;
    let has_pos = d1 > 0 || d2 > 0 || d3 > 0;
    let degenerate = edge(*a, *b, *c) == 0;
    !degenerate && !(has_neg && has_pos)
}

impl Model for BoxModel {
    fn centroid(&self, triangle: i32) -> Option<Point> {
        self.triangle(triangle)
            .map(centroid_of)
            .and_then(|point| self.on_screen(point))
    }

    /// First triangle whose centroid is on screen, `-1` when none is.
    fn next_triangle(&self) -> i32 {
        self.triangles
            .iter()
            .position(|tri| self.view.on_screen(centroid_of(tri)))
            .map_or(-1, |idx| idx as i32)
    }

    fn next_point(&self) -> Point {
        self.centroid(self.next_triangle())
            .unwrap_or(Point::OFFSCREEN)
    }

    fn center_point(&self) -> Point {
        let count = self.triangles.len() as i64 * 3;
        if count == 0 {
            return Point::OFFSCREEN;
        }
        let (sx, sy) = self
            .triangles
            .iter()
            .flatten()
            .fold((0_i64, 0_i64), |(sx, sy), p| {
                (sx + i64::from(p.x), sy + i64::from(p.y))
            });
        let center = Point::new((sx / count) as i32, (sy / count) as i32);
        self.on_screen(center).unwrap_or(Point::OFFSCREEN)
    }

    fn contains(&self, point: Point) -> bool {
        self.view.on_screen(point) && self.triangles.iter().any(|tri| triangle_contains(tri, point))
    }

    fn draw_wireframe(&self, surface: &mut dyn Surface) {
        for tri in &self.triangles {
            surface.draw_polygon(tri);
        }
    }
}
