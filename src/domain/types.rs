use serde::{Deserialize, Serialize};

/// Routing input handed to a vehicle-routing solver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// `distance_matrix[i][j]` is the travel distance from node `i` to node `j`.
    pub distance_matrix: Vec<Vec<f64>>,
    pub num_vehicles: usize,
    /// Start and end node of every route.
    pub depot: usize,
}

impl NetworkConfig {
    pub fn num_nodes(&self) -> usize {
        self.distance_matrix.len()
    }

    /// Checked lookup, `None` when either node is outside the matrix.
    pub fn distance(&self, from: usize, to: usize) -> Option<f64> {
        self.distance_matrix.get(from)?.get(to).copied()
    }
}
