pub mod dji;
pub mod edge;

pub use dji::DjiRow;
pub use edge::EdgeRow;
