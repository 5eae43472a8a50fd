pub mod governor;
pub mod proposal;
pub mod vote;

pub use governor::*;
pub use proposal::*;
pub use vote::*;
