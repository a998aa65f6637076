pub mod dataset;
pub mod dji_loader;
pub mod edge_loader;
