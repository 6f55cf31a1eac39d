pub mod excuse;
pub mod utility;

pub use excuse::*;
pub use utility::*;
