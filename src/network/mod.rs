pub mod data;
pub mod validate;

use tracing::debug;

use crate::config::constant::{DEPOT, NUM_VEHICLES};
use crate::domain::types::NetworkConfig;
use data::DISTANCE_MATRIX;

/// Build the routing input for the surveyed road network.
pub fn create_network() -> NetworkConfig {
    let distance_matrix: Vec<Vec<f64>> = DISTANCE_MATRIX.iter().map(|row| row.to_vec()).collect();

    debug!(
        "Created road network ({} nodes, {} vehicles, depot {})",
        distance_matrix.len(),
        NUM_VEHICLES,
        DEPOT
    );

    NetworkConfig {
        distance_matrix,
        num_vehicles: NUM_VEHICLES,
        depot: DEPOT,
    }
}
