//! Shared types for the termenu menu framework.

mod flow;
mod key;
mod notice;
mod outline;

pub use flow::*;
pub use key::*;
pub use notice::*;
pub use outline::*;
