pub use stitch_core::*;
pub use stitch_macros::Symbolic;
