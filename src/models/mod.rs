pub mod activity;
pub mod records;

pub use activity::*;
pub use records::*;
