pub mod dataset;
pub mod encoding;
pub mod loader;
