use colored::*;
use tracing::debug;

use crate::domain::types::NetworkConfig;

// Print distance matrix for debugging
pub fn print_dist_matrix(dist_m: &[Vec<f64>]) {
    debug!("Distance matrix:");
    for row in dist_m {
        debug!("{:?}", row);
    }
}

fn heading(label: String, is_depot: bool) -> String {
    if is_depot {
        label.yellow().bold().to_string()
    } else {
        label.bold().to_string()
    }
}

/// Aligned text table, depot row and column highlighted.
pub fn render_table(network: &NetworkConfig) -> String {
    let depot = network.depot;
    let mut out = format!("{:>4}", "");
    for j in 0..network.num_nodes() {
        out.push_str(&heading(format!("{:>7}", j), j == depot));
    }
    out.push('\n');

    for (i, row) in network.distance_matrix.iter().enumerate() {
        out.push_str(&heading(format!("{:>4}", i), i == depot));
        for (j, d) in row.iter().enumerate() {
            let cell = format!("{:>7.3}", d);
            if i == depot || j == depot {
                out.push_str(&cell.yellow().to_string());
            } else {
                out.push_str(&cell);
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::create_network;

    #[test]
    fn table_has_header_plus_row_per_node() {
        colored::control::set_override(false);
        let table = render_table(&create_network());
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines[1].trim_start().starts_with("0  0.000  1.388"));
        assert!(lines[8].contains("4.381"));
    }
}
