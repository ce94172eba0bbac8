pub use self::closest_points_segment_segment::closest_points_segment_segment;

mod closest_points_segment_segment;
