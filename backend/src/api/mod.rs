pub mod analyze;
pub mod catchers;
pub mod video;

pub use analyze::*;
pub use video::*;
