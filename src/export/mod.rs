pub mod json;
pub mod matrix_csv;
pub mod table;

pub use json::{from_json, to_json};
pub use matrix_csv::write_matrix_csv;
pub use table::{print_dist_matrix, render_table};
