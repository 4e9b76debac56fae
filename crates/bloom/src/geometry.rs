use crate::item::Item;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let (dx, dy) = (self.x - other.x, self.y - other.y);
        dx * dx + dy * dy
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn max_dimension(&self) -> f64 {
        self.width.max(self.height)
    }
}

/// Padding around the content box, in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Insets {
    pub fn uniform(value: f64) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    /// Square centered on `center` extending `half` in every direction.
    pub fn centered_square(center: Point, half: f64) -> Self {
        Self {
            left: center.x - half,
            top: center.y - half,
            right: center.x + half,
            bottom: center.y + half,
        }
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

pub fn point_in_circle(point: Point, center: Point, radius: f64) -> bool {
    point.distance_squared(center) <= radius * radius
}

pub fn button_radius(collapse_radius: f64, expand_radius: f64, progress: f64) -> f64 {
    collapse_radius + (expand_radius - collapse_radius) * progress
}

/// Where an item sits at the given progress. Items travel along a straight
/// line from the button center, so at progress 0 they all share the center.
pub fn item_center(center: Point, item: &Item, progress: f64) -> Point {
    let angle = f64::from(item.angle_degrees).to_radians();
    let (offset_x, offset_y) = (item.distance * angle.cos(), item.distance * angle.sin());
    Point::new(
        center.x - offset_x * progress,
        center.y - offset_y * progress,
    )
}

pub fn item_radius(item: &Item, progress: f64) -> f64 {
    item.radius * progress
}

/// First item, in list order, whose current circle strictly contains `point`.
pub fn hit_test_items(items: &[Item], center: Point, progress: f64, point: Point) -> Option<usize> {
    items.iter().position(|item| {
        let radius = item_radius(item, progress);
        point.distance_squared(item_center(center, item, progress)) < radius * radius
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn ring() -> Vec<Item> {
        [0, 120, 240]
            .into_iter()
            .map(|angle| Item::new(format!("item {angle}"), 20.0, None, angle, 80.0))
            .collect()
    }

    #[test]
    fn test_point_in_circle_includes_boundary() {
        let center = Point::new(10.0, 10.0);
        assert!(point_in_circle(Point::new(13.0, 14.0), center, 5.0));
        assert!(!point_in_circle(Point::new(13.0, 14.1), center, 5.0));
    }

    #[test]
    fn test_button_radius_interpolates() {
        assert_eq!(button_radius(40.0, 120.0, 0.0), 40.0);
        assert_eq!(button_radius(40.0, 120.0, 0.5), 80.0);
        assert_eq!(button_radius(40.0, 120.0, 1.0), 120.0);
    }

    #[test]
    fn test_item_center_directions() {
        let center = Point::new(100.0, 200.0);
        let left = Item::new("left", 10.0, None, 0, 50.0);
        let up = Item::new("up", 10.0, None, 90, 50.0);
        let right = Item::new("right", 10.0, None, 180, 50.0);

        let p = item_center(center, &left, 1.0);
        assert!((p.x - 50.0).abs() < EPSILON && (p.y - 200.0).abs() < EPSILON);

        let p = item_center(center, &up, 1.0);
        assert!((p.x - 100.0).abs() < EPSILON && (p.y - 150.0).abs() < EPSILON);

        let p = item_center(center, &right, 0.5);
        assert!((p.x - 125.0).abs() < EPSILON && (p.y - 200.0).abs() < EPSILON);
    }

    #[test]
    fn test_items_collapse_onto_center() {
        let center = Point::new(30.0, 40.0);
        for item in ring() {
            assert_eq!(item_center(center, &item, 0.0), center);
            assert_eq!(item_radius(&item, 0.0), 0.0);
        }
    }

    #[test]
    fn test_hit_test_items_at_full_expansion() {
        let items = ring();
        let center = Point::new(200.0, 200.0);
        for (index, item) in items.iter().enumerate() {
            let at = item_center(center, item, 1.0);
            assert_eq!(hit_test_items(&items, center, 1.0, at), Some(index));
        }
        assert_eq!(hit_test_items(&items, center, 1.0, center), None);
    }

    #[test]
    fn test_hit_test_items_when_collapsed() {
        let items = ring();
        let center = Point::new(200.0, 200.0);
        for item in &items {
            let expanded = item_center(center, item, 1.0);
            assert_eq!(hit_test_items(&items, center, 0.0, expanded), None);
        }
        assert_eq!(hit_test_items(&items, center, 0.0, center), None);
    }

    #[test]
    fn test_hit_test_items_first_match_wins() {
        let items = vec![
            Item::new("first", 30.0, None, 90, 60.0),
            Item::new("second", 30.0, None, 90, 70.0),
        ];
        let center = Point::new(0.0, 100.0);
        let between = Point::new(0.0, 100.0 - 65.0);
        assert_eq!(hit_test_items(&items, center, 1.0, between), Some(0));
    }

    #[test]
    fn test_hit_test_empty_items() {
        assert_eq!(hit_test_items(&[], Point::default(), 1.0, Point::default()), None);
    }

    #[test]
    fn test_centered_square() {
        let rect = Rect::centered_square(Point::new(10.0, 20.0), 4.0);
        assert_eq!(rect, Rect { left: 6.0, top: 16.0, right: 14.0, bottom: 24.0 });
        assert_eq!(rect.width(), 8.0);
        assert_eq!(rect.height(), 8.0);
    }
}
