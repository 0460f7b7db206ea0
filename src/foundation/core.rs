pub use kurbo::{BezPath, CubicBez, Point, Rect, Shape, Vec2};

/// Ordered blob outline points; index order is angular generation order.
pub type PointSequence = Vec<Point>;
