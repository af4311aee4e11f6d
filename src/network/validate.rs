use tracing::warn;

use crate::domain::error::{NetworkError, Result};
use crate::domain::types::NetworkConfig;

impl NetworkConfig {
    /// Check the structural invariants a solver relies on.
    ///
    /// Reports the first violation found. Symmetry is not required, see
    /// [`crate::evaluation::distance::is_symmetric`].
    pub fn validate(&self) -> Result<()> {
        let nodes = self.num_nodes();
        if nodes == 0 {
            return Err(NetworkError::EmptyMatrix);
        }

        for (row, entries) in self.distance_matrix.iter().enumerate() {
            if entries.len() != nodes {
                return Err(NetworkError::NotSquare {
                    row,
                    len: entries.len(),
                    expected: nodes,
                });
            }
        }

        for (from, entries) in self.distance_matrix.iter().enumerate() {
            for (to, &value) in entries.iter().enumerate() {
                if !value.is_finite() || value < 0.0 {
                    warn!("Rejecting distance {} from {} to {}", value, from, to);
                    return Err(NetworkError::InvalidDistance { from, to, value });
                }
            }
        }

        if let Some((node, value)) = (0..nodes)
            .map(|i| (i, self.distance_matrix[i][i]))
            .find(|&(_, value)| value != 0.0)
        {
            return Err(NetworkError::NonZeroDiagonal { node, value });
        }

        if self.depot >= nodes {
            return Err(NetworkError::DepotOutOfRange {
                depot: self.depot,
                nodes,
            });
        }

        if self.num_vehicles == 0 {
            return Err(NetworkError::NoVehicles);
        }

        Ok(())
    }
}
