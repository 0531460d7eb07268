pub mod class;
pub mod table;
pub mod tables;

pub use class::*;
pub use table::*;
