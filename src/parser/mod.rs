pub mod normalize;
pub mod source;

pub use normalize::*;
pub use source::*;
