//! Tests for pixel points, sizes and rectangle hit testing

#[cfg(test)]
mod tests {
    use jigsnap::spatial::{Point, Rect, Size};

    // Tests point arithmetic used for grab offsets
    #[test]
    fn test_point_add_sub() {
        let a = Point::new(40, 95);
        let b = Point::new(30, 90);

        assert_eq!(a - b, Point::new(10, 5));
        assert_eq!(b + (a - b), a);
        assert_eq!(Point::new(-5, 3) - Point::new(5, 5), Point::new(-10, -2));
    }

    // Tests saturation instead of overflow on extreme coordinates
    #[test]
    fn test_point_arithmetic_saturates() {
        let far = Point::new(i32::MAX, i32::MIN);
        assert_eq!(far + Point::new(1, 0), Point::new(i32::MAX, i32::MIN));
        assert_eq!(far - Point::new(0, 1), Point::new(i32::MAX, i32::MIN));
    }

    // Tests inclusive edges of rectangle containment
    #[test]
    fn test_rect_contains_edges_inclusive() {
        let rect = Rect::new(Point::new(30, 60), Size::new(30, 30));

        assert!(rect.contains(Point::new(30, 60)));
        assert!(rect.contains(Point::new(60, 90)));
        assert!(rect.contains(Point::new(45, 75)));
        assert!(!rect.contains(Point::new(29, 75)));
        assert!(!rect.contains(Point::new(61, 75)));
        assert!(!rect.contains(Point::new(45, 91)));
    }

    // Tests edge accessors and center computation
    #[test]
    fn test_rect_edges_and_center() {
        let rect = Rect::new(Point::new(-10, 20), Size::new(31, 10));

        assert_eq!(rect.right(), 21);
        assert_eq!(rect.bottom(), 30);
        assert_eq!(rect.center(), Point::new(5, 25));
    }

    // Tests full containment of one rectangle in another
    #[test]
    fn test_rect_contains_rect() {
        let surface = Rect::new(Point::ORIGIN, Size::new(90, 120));

        assert!(surface.contains_rect(&Rect::new(Point::new(60, 90), Size::new(30, 30))));
        assert!(surface.contains_rect(&surface));
        assert!(!surface.contains_rect(&Rect::new(Point::new(0, 120), Size::new(30, 30))));
        assert!(!surface.contains_rect(&Rect::new(Point::new(-30, 0), Size::new(30, 30))));
        assert!(!surface.contains_rect(&Rect::new(Point::new(90, 0), Size::new(30, 30))));
    }

    // Tests empty size detection
    #[test]
    fn test_size_is_empty() {
        assert!(Size::new(0, 10).is_empty());
        assert!(Size::new(10, 0).is_empty());
        assert!(!Size::new(1, 1).is_empty());
    }

    // Tests display formats used in log fields
    #[test]
    fn test_display_formats() {
        assert_eq!(Point::new(3, -4).to_string(), "(3, -4)");
        assert_eq!(Size::new(30, 20).to_string(), "30x20");
    }
}
