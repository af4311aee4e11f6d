use itertools::{iproduct, Itertools};

use crate::domain::error::{NetworkError, Result};
use crate::domain::types::NetworkConfig;

/// Unchecked lookup.
///
/// # Panics
///
/// Panics if either index is outside `dm`. Use [`NetworkConfig::distance`] for a checked lookup.
pub fn dist_between(from_loc: usize, to_loc: usize, dm: &[Vec<f64>]) -> f64 {
    dm[from_loc][to_loc]
}

/// Exact comparison, the matrix is reference data and not computed.
pub fn is_symmetric(dm: &[Vec<f64>]) -> bool {
    let n = dm.len();
    dm.iter().all(|row| row.len() == n) && iproduct!(0..n, 0..n).all(|(i, j)| dm[i][j] == dm[j][i])
}

/// Length of a closed tour leaving from and returning to `depot`.
///
/// # Panics
///
/// Panics if `depot` or any node of `tour` is outside `dm`. Use
/// [`NetworkConfig::tour_distance`] to get `NodeOutOfRange` instead.
pub fn tour_distance(tour: &[usize], depot: usize, dm: &[Vec<f64>]) -> f64 {
    let (Some(&first), Some(&last)) = (tour.first(), tour.last()) else {
        return 0.0;
    };

    let depot_to_first = dist_between(depot, first, dm);
    let last_to_depot = dist_between(last, depot, dm);

    let legs: f64 = tour
        .iter()
        .tuple_windows()
        .map(|(&a, &b)| dist_between(a, b, dm))
        .sum();

    depot_to_first + legs + last_to_depot
}

impl NetworkConfig {
    pub fn is_symmetric(&self) -> bool {
        is_symmetric(&self.distance_matrix)
    }

    pub fn tour_distance(&self, tour: &[usize]) -> Result<f64> {
        let nodes = self.num_nodes();
        if let Some(&node) = tour.iter().chain([&self.depot]).find(|&&n| n >= nodes) {
            return Err(NetworkError::NodeOutOfRange { node, nodes });
        }
        Ok(tour_distance(tour, self.depot, &self.distance_matrix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::create_network;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn lookup_matches_matrix() {
        let network = create_network();
        assert_eq!(dist_between(7, 11, &network.distance_matrix), 1.614);
        assert_eq!(network.distance(7, 11), Some(1.614));
        assert_eq!(network.distance(16, 0), None);
        assert_eq!(network.distance(0, 16), None);
    }

    #[test]
    fn symmetry_detected() {
        let mut network = create_network();
        assert!(network.is_symmetric());
        network.distance_matrix[3][8] += 0.25;
        assert!(!network.is_symmetric());
    }

    #[test]
    fn ragged_matrix_is_not_symmetric() {
        let dm = vec![vec![0.0, 1.0], vec![1.0]];
        assert!(!is_symmetric(&dm));
    }

    #[test]
    fn empty_tour_has_no_length() {
        let network = create_network();
        assert_eq!(network.tour_distance(&[]).ok(), Some(0.0));
    }

    #[test]
    fn out_and_back_doubles_the_leg() {
        let network = create_network();
        let d = network.tour_distance(&[1]).unwrap();
        assert!(approx_eq(d, 2.0 * 1.388));
    }

    #[test]
    fn tour_sums_every_leg() {
        let network = create_network();
        // 0 -> 4 -> 9 -> 15 -> 0
        let expected = 0.677 + 1.439 + 0.743 + 0.867;
        let d = network.tour_distance(&[4, 9, 15]).unwrap();
        assert!(approx_eq(d, expected));
    }

    #[test]
    #[should_panic]
    fn unchecked_tour_panics_on_unknown_node() {
        let network = create_network();
        tour_distance(&[3, 16], network.depot, &network.distance_matrix);
    }

    #[test]
    fn tour_with_unknown_node_rejected() {
        let network = create_network();
        assert!(matches!(
            network.tour_distance(&[2, 20]),
            Err(NetworkError::NodeOutOfRange { node: 20, nodes: 16 })
        ));
    }
}
