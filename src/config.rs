pub mod constant {
    pub const NODE_COUNT: usize = 16;
    pub const NUM_VEHICLES: usize = 1;
    pub const DEPOT: usize = 0;
    pub(crate) const DEFAULT_OUTPUT_FORMAT: &str = "json";
    pub(crate) const DEFAULT_CSV_PATH: &str = "distance_matrix.csv";
}
