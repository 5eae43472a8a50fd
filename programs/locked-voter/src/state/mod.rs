pub mod escrow;
pub mod locker;
pub mod whitelist;

pub use escrow::*;
pub use locker::*;
pub use whitelist::*;
