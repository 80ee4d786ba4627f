pub mod activity;
pub mod agenda;
pub mod groups;
pub mod plan;
pub mod schedule;
pub mod status;

pub use activity::*;
pub use agenda::*;
pub use groups::*;
pub use plan::*;
pub use schedule::*;
pub use status::*;
