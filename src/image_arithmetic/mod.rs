//! Pixel buffers and the shared helpers every operation builds on.

pub mod color_reductions;
pub mod interop;
pub mod traits;
pub use self::traits::*;
pub mod types;
pub use self::types::*;
pub mod utilities;
pub use self::utilities::*;
