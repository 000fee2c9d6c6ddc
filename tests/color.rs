mod tests {
    use strip_show::color::{approach, scale_between};

    #[test]
    fn test_approach_moves_by_one() {
        assert_eq!(approach(10, 20), 11);
        assert_eq!(approach(20, 10), 19);
        assert_eq!(approach(0, 255), 1);
        assert_eq!(approach(255, 0), 254);
    }

    #[test]
    fn test_approach_saturates_at_equality() {
        assert_eq!(approach(42, 42), 42);
        assert_eq!(approach(0, 0), 0);
        assert_eq!(approach(255, 255), 255);
    }

    #[test]
    fn test_scale_between_endpoints() {
        assert_eq!(scale_between(100, 200, 0.0), 100);
        assert_eq!(scale_between(100, 200, 1.0), 200);
        // The base is always the smaller channel, regardless of order.
        assert_eq!(scale_between(200, 100, 0.0), 100);
        assert_eq!(scale_between(200, 100, 1.0), 200);
    }

    #[test]
    fn test_scale_between_midpoint() {
        assert_eq!(scale_between(0, 80, 0.25), 20);
        assert_eq!(scale_between(0, 255, 0.5), 127);
    }

    #[test]
    fn test_scale_between_clamps_out_of_range_ratios() {
        assert_eq!(scale_between(100, 200, -2.0), 0);
        assert_eq!(scale_between(100, 200, 5.0), 255);
    }
}
