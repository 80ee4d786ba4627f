pub mod certificate;
pub mod coach;
pub mod experience;

pub use certificate::*;
pub use coach::*;
pub use experience::*;
