pub mod distance;

pub use distance::{dist_between, is_symmetric, tour_distance};
