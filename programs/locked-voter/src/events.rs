use anchor_lang::prelude::*;

use crate::state::LockerParams;

#[event]
pub struct NewLockerEvent {
    pub governor: Pubkey,
    pub locker: Pubkey,
    pub token_mint: Pubkey,
    pub params: LockerParams,
}

#[event]
pub struct NewEscrowEvent {
    pub escrow: Pubkey,
    pub escrow_owner: Pubkey,
    pub locker: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct LockEvent {
    pub locker: Pubkey,
    pub escrow_owner: Pubkey,
    pub token_mint: Pubkey,
    pub amount: u64,
    pub locker_supply: u64,
    pub duration: u64,
    pub prev_escrow_ends_at: i64,
    pub next_escrow_ends_at: i64,
    pub next_escrow_started_at: i64,
}

#[event]
pub struct ExitEscrowEvent {
    pub escrow_owner: Pubkey,
    pub locker: Pubkey,
    pub timestamp: i64,
    pub locker_supply: u64,
    pub released_amount: u64,
}

#[event]
pub struct LockerSetParamsEvent {
    pub locker: Pubkey,
    pub prev_params: LockerParams,
    pub params: LockerParams,
}

#[event]
pub struct SetVoteDelegateEvent {
    pub escrow_owner: Pubkey,
    pub old_delegate: Pubkey,
    pub new_delegate: Pubkey,
}

#[event]
pub struct ApproveLockPrivilegeEvent {
    pub locker: Pubkey,
    pub program_id: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}

#[event]
pub struct RevokeLockPrivilegeEvent {
    pub locker: Pubkey,
    pub program_id: Pubkey,
    pub owner: Pubkey,
    pub timestamp: i64,
}
