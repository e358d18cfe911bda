pub mod public;
pub mod utils;
