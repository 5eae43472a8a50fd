// Instructions module
// - new_locker
// - new_escrow
// - lock (whitelist-gated for CPI callers)
// - exit
// - activate_proposal (CPI into govern)
// - cast_vote (CPI into govern)
// - set_vote_delegate (escrow owner only)
// - set_locker_params (smart wallet only)
// - approve_program_lock_privilege (smart wallet only)
// - revoke_program_lock_privilege (smart wallet only)

pub mod activate_proposal;
pub mod approve_program_lock_privilege;
pub mod cast_vote;
pub mod exit;
pub mod lock;
pub mod new_escrow;
pub mod new_locker;
pub mod revoke_program_lock_privilege;
pub mod set_locker_params;
pub mod set_vote_delegate;

pub use activate_proposal::*;
pub use approve_program_lock_privilege::*;
pub use cast_vote::*;
pub use exit::*;
pub use lock::*;
pub use new_escrow::*;
pub use new_locker::*;
pub use revoke_program_lock_privilege::*;
pub use set_locker_params::*;
pub use set_vote_delegate::*;
