pub mod coordinator;
pub mod rig;

pub use coordinator::*;
pub use rig::*;
