pub mod config;
pub mod logging;
pub mod middleware;
pub mod number_parser;
pub mod percent;
