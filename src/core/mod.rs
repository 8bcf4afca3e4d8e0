pub mod layout;
pub mod loudness;

pub use layout::*;
pub use loudness::*;
