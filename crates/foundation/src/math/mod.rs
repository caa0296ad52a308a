pub mod easing;
pub mod vec;

pub use easing::*;
pub use vec::*;
