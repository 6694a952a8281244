//! Grid/pixel conversion and axis-aligned collision tests for garden elements.
//!
//! Every function here is total: missing input or an unusable cell size falls
//! back to a default instead of failing, so drag handlers can call them on
//! every pointer move.

use crate::models::{element::GardenElement, Dimensions, Position};

/// Size of one grid cell in pixels.
pub const DEFAULT_GRID_SIZE: f64 = 30.0;

/// Smallest footprint an element may be resized to, in grid units.
pub const MIN_ELEMENT_SIZE: f64 = 1.0;

/// A point in canvas pixel space.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Axis-aligned rectangle, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn at(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Strict overlap: rectangles sharing only an edge or a corner do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && self.x + self.width > other.x
            && self.y < other.y + other.height
            && self.y + self.height > other.y
    }
}

fn cell_size_or_default(cell_size: f64) -> f64 {
    if cell_size.is_finite() && cell_size > 0.0 {
        cell_size
    } else {
        DEFAULT_GRID_SIZE
    }
}

pub fn grid_to_pixel(grid: Option<Position>, cell_size: f64) -> Point {
    let Some(grid) = grid else {
        return Point::default();
    };
    let cell = cell_size_or_default(cell_size);
    Point::new(grid.x * cell, grid.y * cell)
}

/// Snaps a pixel position to the nearest grid cell.
pub fn pixel_to_grid(pixel: Option<Point>, cell_size: f64) -> Position {
    let Some(pixel) = pixel else {
        return Position::default();
    };
    let cell = cell_size_or_default(cell_size);
    Position::new(round_half_up(pixel.x / cell), round_half_up(pixel.y / cell))
}

// Halves round towards +∞ (2.5 → 3, -2.5 → -2), unlike `f64::round`.
fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

pub fn element_pixel_position(element: Option<&GardenElement>, cell_size: f64) -> Point {
    grid_to_pixel(element.map(|e| e.position), cell_size)
}

/// Pixel footprint of an element; one cell when there is no element.
pub fn element_pixel_size(element: Option<&GardenElement>, cell_size: f64) -> Size {
    let cell = cell_size_or_default(cell_size);
    match element {
        Some(e) => Size {
            width: e.dimensions.width * cell,
            height: e.dimensions.height * cell,
        },
        None => Size {
            width: cell,
            height: cell,
        },
    }
}

pub fn element_bounds(element: &GardenElement, cell_size: f64) -> Rect {
    Rect::at(
        element_pixel_position(Some(element), cell_size),
        element_pixel_size(Some(element), cell_size),
    )
}

pub fn rectangles_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}

/// Elements the moving element would overlap if dropped at `proposed`.
///
/// The moving element itself (same id) and background elements never count.
pub fn colliding_elements<'a>(
    moving: &'a GardenElement,
    proposed: Point,
    elements: &'a [GardenElement],
    cell_size: f64,
) -> impl Iterator<Item = &'a GardenElement> + 'a {
    let moved = Rect::at(proposed, element_pixel_size(Some(moving), cell_size));
    elements.iter().filter(move |other| {
        other.id != moving.id
            && !other.is_background()
            && moved.overlaps(&element_bounds(other, cell_size))
    })
}

pub fn check_collision(
    moving: &GardenElement,
    proposed: Point,
    elements: &[GardenElement],
    cell_size: f64,
) -> bool {
    colliding_elements(moving, proposed, elements, cell_size)
        .next()
        .is_some()
}

/// Copy of `element` moved to `grid`.
pub fn update_element_position(element: &GardenElement, grid: Position) -> GardenElement {
    GardenElement {
        position: grid,
        ..element.clone()
    }
}

/// Grows a footprint to at least [`MIN_ELEMENT_SIZE`] on each axis.
pub fn clamp_dimensions(dimensions: Dimensions) -> Dimensions {
    Dimensions {
        width: dimensions.width.max(MIN_ELEMENT_SIZE),
        height: dimensions.height.max(MIN_ELEMENT_SIZE),
        ..dimensions
    }
}

/// Width / height; 1 for a degenerate height.
pub fn aspect_ratio(element: &GardenElement) -> f64 {
    if element.dimensions.height == 0.0 {
        1.0
    } else {
        element.dimensions.width / element.dimensions.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::ElementType;

    const GRID: f64 = 30.0;

    fn element(id: &str, kind: ElementType, x: f64, y: f64, w: f64, h: f64) -> GardenElement {
        GardenElement::new(id, kind, Position::new(x, y), Dimensions::new(w, h))
    }

    fn scene() -> (GardenElement, Vec<GardenElement>) {
        let moving = element("1", ElementType::RaisedBed, 3.0, 3.0, 2.0, 2.0);
        let others = vec![
            element("2", ElementType::RaisedBed, 6.0, 6.0, 2.0, 2.0),
            element("3", ElementType::RaisedBed, 3.0, 6.0, 2.0, 2.0),
            element("background", ElementType::Background, 0.0, 0.0, 50.0, 50.0),
        ];
        (moving, others)
    }

    #[test]
    fn test_grid_to_pixel() {
        let p = grid_to_pixel(Some(Position::new(3.0, 4.0)), GRID);
        assert_eq!(p, Point::new(90.0, 120.0));
    }

    #[test]
    fn test_grid_to_pixel_missing_input() {
        assert_eq!(grid_to_pixel(None, GRID), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_pixel_to_grid_rounds_to_nearest_cell() {
        let g = pixel_to_grid(Some(Point::new(91.0, 119.0)), GRID);
        assert_eq!(g, Position::new(3.0, 4.0));
    }

    #[test]
    fn test_pixel_to_grid_half_cell_rounds_up() {
        assert_eq!(pixel_to_grid(Some(Point::new(45.0, -45.0)), GRID), Position::new(2.0, -1.0));
    }

    #[test]
    fn test_pixel_to_grid_missing_input() {
        assert_eq!(pixel_to_grid(None, GRID), Position::new(0.0, 0.0));
    }

    #[test]
    fn test_round_trip_integer_grid_positions() {
        for size in [1.0, 7.5, 30.0, 64.0] {
            for x in -5..=5 {
                for y in [-3, 0, 11] {
                    let p = Position::new(f64::from(x), f64::from(y));
                    assert_eq!(pixel_to_grid(Some(grid_to_pixel(Some(p), size)), size), p);
                }
            }
        }
    }

    #[test]
    fn test_unusable_cell_size_falls_back_to_default() {
        let p = grid_to_pixel(Some(Position::new(1.0, 2.0)), 0.0);
        assert_eq!(p, Point::new(30.0, 60.0));
        let g = pixel_to_grid(Some(Point::new(60.0, 90.0)), f64::NAN);
        assert_eq!(g, Position::new(2.0, 3.0));
    }

    #[test]
    fn test_element_pixel_geometry() {
        let e = element("a", ElementType::Plant, 3.0, 4.0, 3.0, 4.0);
        assert_eq!(element_pixel_position(Some(&e), GRID), Point::new(90.0, 120.0));
        assert_eq!(
            element_pixel_size(Some(&e), GRID),
            Size { width: 90.0, height: 120.0 }
        );
    }

    #[test]
    fn test_element_pixel_geometry_missing_element() {
        assert_eq!(element_pixel_position(None, GRID), Point::default());
        assert_eq!(
            element_pixel_size(None, GRID),
            Size { width: GRID, height: GRID }
        );
    }

    #[test]
    fn test_overlapping_rectangles() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(5.0, 5.0, 10.0, 10.0);
        assert!(rectangles_overlap(&a, &b));
    }

    #[test]
    fn test_disjoint_rectangles() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 20.0, 10.0, 10.0);
        assert!(!rectangles_overlap(&a, &b));
    }

    #[test]
    fn test_edge_touching_is_not_overlap() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        for b in [
            Rect::new(10.0, 0.0, 10.0, 10.0),
            Rect::new(-10.0, 0.0, 10.0, 10.0),
            Rect::new(0.0, 10.0, 10.0, 10.0),
            Rect::new(0.0, -10.0, 10.0, 10.0),
            Rect::new(10.0, 10.0, 10.0, 10.0),
        ] {
            assert!(!rectangles_overlap(&a, &b), "{b:?} only touches {a:?}");
        }
    }

    #[test]
    fn test_overlap_is_symmetric() {
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(10.0, 0.0, 10.0, 10.0),
            Rect::new(2.0, 2.0, 1.0, 1.0),
            Rect::new(-50.0, 3.0, 100.0, 2.0),
        ];
        for a in &rects {
            for b in &rects {
                assert_eq!(rectangles_overlap(a, b), rectangles_overlap(b, a));
            }
        }
    }

    #[test]
    fn test_containment_overlaps() {
        let outer = Rect::new(0.0, 0.0, 100.0, 100.0);
        let inner = Rect::new(40.0, 40.0, 5.0, 5.0);
        assert!(rectangles_overlap(&outer, &inner));
    }

    #[test]
    fn test_collision_detected() {
        let (moving, others) = scene();
        assert!(check_collision(&moving, Point::new(150.0, 150.0), &others, GRID));
    }

    #[test]
    fn test_no_collision_when_apart() {
        let (moving, others) = scene();
        assert!(!check_collision(&moving, Point::new(240.0, 240.0), &others, GRID));
    }

    #[test]
    fn test_collision_ignores_self() {
        let (moving, mut others) = scene();
        others.insert(0, moving.clone());
        assert!(!check_collision(&moving, Point::new(90.0, 90.0), &others, GRID));
    }

    #[test]
    fn test_collision_ignores_background() {
        let (moving, others) = scene();
        assert!(!check_collision(&moving, Point::new(30.0, 30.0), &others, GRID));
    }

    #[test]
    fn test_empty_or_self_only_never_collides() {
        let (moving, _) = scene();
        assert!(!check_collision(&moving, Point::new(90.0, 90.0), &[], GRID));
        assert!(!check_collision(
            &moving,
            Point::new(90.0, 90.0),
            std::slice::from_ref(&moving),
            GRID
        ));
    }

    #[test]
    fn test_colliding_elements_lists_every_overlap() {
        let (moving, others) = scene();
        // Box x 140..200, y 150..210 cuts into "2" (x 180..240) and "3" (x 90..150).
        let ids: Vec<&str> = colliding_elements(&moving, Point::new(140.0, 150.0), &others, GRID)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_adjacent_drop_is_allowed() {
        let (moving, others) = scene();
        // Directly left of element "2", sharing its left edge at x = 180.
        assert!(!check_collision(&moving, Point::new(120.0, 180.0), &others[..1], GRID));
    }

    #[test]
    fn test_update_element_position_keeps_other_fields() {
        let e = element("a", ElementType::Tree, 1.0, 1.0, 3.0, 3.0);
        let moved = update_element_position(&e, Position::new(5.0, 6.0));
        assert_eq!(moved.position, Position::new(5.0, 6.0));
        assert_eq!(moved.id, "a");
        assert_eq!(moved.dimensions, e.dimensions);
    }

    #[test]
    fn test_clamp_dimensions_keeps_rotation() {
        let d = clamp_dimensions(Dimensions {
            width: 0.5,
            height: 4.0,
            rotation: 45.0,
        });
        assert_eq!(d.width, 1.0);
        assert_eq!(d.height, 4.0);
        assert_eq!(d.rotation, 45.0);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(aspect_ratio(&element("a", ElementType::Path, 0.0, 0.0, 1.0, 3.0)), 1.0 / 3.0);
        assert_eq!(aspect_ratio(&element("b", ElementType::Path, 0.0, 0.0, 4.0, 0.0)), 1.0);
    }
}
