pub mod coach;
pub mod plan;

pub use coach::*;
pub use plan::*;
