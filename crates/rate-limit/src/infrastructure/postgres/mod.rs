pub mod repositories;
pub mod utils;
