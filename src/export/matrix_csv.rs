use std::io;
use std::path::Path;

use csv::Writer;
use tracing::info;

use crate::domain::error::Result;
use crate::domain::types::NetworkConfig;

pub fn write_matrix_csv<P: AsRef<Path>>(network: &NetworkConfig, path: P) -> Result<()> {
    let wtr = Writer::from_path(path.as_ref())?;
    write_matrix(network, wtr)?;
    info!("Wrote distance matrix to {}", path.as_ref().display());
    Ok(())
}

/// Header is `node,0,1,...`; each row starts with its node index.
pub fn write_matrix<W: io::Write>(network: &NetworkConfig, mut wtr: Writer<W>) -> Result<()> {
    let header = std::iter::once("node".to_string())
        .chain((0..network.num_nodes()).map(|i| i.to_string()));
    wtr.write_record(header)?;

    for (node, row) in network.distance_matrix.iter().enumerate() {
        wtr.write_record(
            std::iter::once(node.to_string()).chain(row.iter().map(|d| d.to_string())),
        )?;
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::create_network;

    #[test]
    fn csv_has_header_and_one_row_per_node() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dm.csv");
        write_matrix_csv(&create_network(), &path).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 17);
        assert!(lines[0].starts_with("node,0,1,2"));
        assert!(lines[0].ends_with(",15"));
        assert!(lines[1].starts_with("0,0,1.388,0.821"));
        assert!(lines[8].starts_with("7,4.381"));
    }

    #[test]
    fn csv_reads_back_as_matrix() {
        let network = create_network();
        let mut buf = Vec::new();
        write_matrix(&network, Writer::from_writer(&mut buf)).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let rows: Vec<Vec<f64>> = reader
            .records()
            .map(|r| {
                r.unwrap()
                    .iter()
                    .skip(1)
                    .map(|v| v.parse().unwrap())
                    .collect()
            })
            .collect();
        assert_eq!(rows, network.distance_matrix);
    }
}
