pub mod end_points;
pub mod floating_point;
pub mod point_pairs;
pub mod reversible;
pub mod trigonometry;

pub use end_points::*;
pub use floating_point::*;
pub use point_pairs::*;
pub use reversible::*;
pub use trigonometry::*;
