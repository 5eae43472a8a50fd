use anchor_lang::prelude::*;

use super::locker::{Locker, LockerParams};
use crate::errors::LockedVoterError;

// Escrow account
// One locked position per (locker, owner)
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Escrow {
    pub locker: Pubkey,
    pub owner: Pubkey,

    // PDA bump seed
    pub bump: u8,

    // Associated token account of the escrow PDA holding the locked tokens
    pub tokens: Pubkey,

    // Locked token amount
    pub amount: u64,

    // Lock window (0 until the first lock)
    pub escrow_started_at: i64,
    pub escrow_ends_at: i64,

    // Who may cast votes with this escrow's power
    pub vote_delegate: Pubkey,
}

// Lock window before and after a lock
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LockUpdate {
    pub prev_escrow_ends_at: i64,
    pub next_escrow_started_at: i64,
    pub next_escrow_ends_at: i64,
}

impl Escrow {
    pub fn voting_power_at(&self, params: &LockerParams, at: i64) -> Result<u64> {
        params.calculate_voter_power(self, at)
    }

    // Add `amount` and extend the lock to at least now + duration
    // The end time never moves backwards
    pub fn record_lock_event(
        &mut self,
        locker: &mut Locker,
        amount: u64,
        duration: u64,
        now: i64,
    ) -> Result<LockUpdate> {
        require!(
            duration >= locker.params.min_stake_duration,
            LockedVoterError::LockupDurationTooShort
        );

        let duration = i64::try_from(duration).map_err(|_| LockedVoterError::MathOverflow)?;
        let requested_ends_at = now
            .checked_add(duration)
            .ok_or(LockedVoterError::MathOverflow)?;

        let prev_escrow_ends_at = self.escrow_ends_at;
        let (next_escrow_started_at, next_escrow_ends_at) = if requested_ends_at > prev_escrow_ends_at {
            (now, requested_ends_at)
        } else {
            (self.escrow_started_at, prev_escrow_ends_at)
        };

        let next_amount = self
            .amount
            .checked_add(amount)
            .ok_or(LockedVoterError::MathOverflow)?;
        let next_locked_supply = locker
            .locked_supply
            .checked_add(amount)
            .ok_or(LockedVoterError::MathOverflow)?;

        self.amount = next_amount;
        self.escrow_started_at = next_escrow_started_at;
        self.escrow_ends_at = next_escrow_ends_at;
        locker.locked_supply = next_locked_supply;

        Ok(LockUpdate {
            prev_escrow_ends_at,
            next_escrow_started_at,
            next_escrow_ends_at,
        })
    }

    // Release everything once the lock has ended
    // Returns the released amount
    pub fn record_exit(&mut self, locker: &mut Locker, now: i64) -> Result<u64> {
        require!(
            now >= self.escrow_ends_at,
            LockedVoterError::EscrowNotEnded
        );

        let released = self.amount;
        locker.locked_supply = locker
            .locked_supply
            .checked_sub(released)
            .ok_or(LockedVoterError::MathOverflow)?;

        self.amount = 0;
        self.escrow_started_at = 0;
        self.escrow_ends_at = 0;
        Ok(released)
    }
}
