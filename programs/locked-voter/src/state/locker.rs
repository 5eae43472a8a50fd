use anchor_lang::prelude::*;

use super::escrow::Escrow;
use crate::errors::LockedVoterError;

// Locker account
// Holds the locked token supply and acts as the governor's electorate
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Locker {
    // Base keypair used to derive the locker PDA
    pub base: Pubkey,

    // PDA bump seed
    pub bump: u8,

    // Mint of the token that is locked
    pub token_mint: Pubkey,

    // Sum of the amounts of every open escrow
    pub locked_supply: u64,

    // Governor this locker votes in
    pub governor: Pubkey,

    pub params: LockerParams,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct LockerParams {
    // Gate CPI calls into lock on the whitelist
    pub whitelist_enabled: bool,

    // Power of one token locked for max_stake_duration
    pub max_stake_vote_multiplier: u8,

    // Shortest accepted lock, in seconds
    pub min_stake_duration: u64,

    // Remaining lock time beyond this earns no extra power
    pub max_stake_duration: u64,

    // Voting power needed to activate a proposal
    pub proposal_activation_min_votes: u64,
}

impl LockerParams {
    pub fn validate(&self) -> Result<()> {
        require!(
            self.max_stake_duration > 0,
            LockedVoterError::InvalidLockerParams
        );
        require!(
            self.min_stake_duration <= self.max_stake_duration,
            LockedVoterError::InvalidLockerParams
        );
        require!(
            i64::try_from(self.max_stake_duration).is_ok(),
            LockedVoterError::InvalidLockerParams
        );
        Ok(())
    }

    // Linear decay from amount * multiplier at max remaining lock to 0 at expiry
    // Rounds down so power is never overstated
    pub fn calculate_voter_power(&self, escrow: &Escrow, at: i64) -> Result<u64> {
        if escrow.escrow_started_at == 0 {
            return Ok(0);
        }
        if at < escrow.escrow_started_at || at >= escrow.escrow_ends_at {
            return Ok(0);
        }

        let seconds_remaining = escrow
            .escrow_ends_at
            .checked_sub(at)
            .ok_or(LockedVoterError::MathOverflow)? as u64;
        let capped_remaining = seconds_remaining.min(self.max_stake_duration);

        let power_at_max_lockup =
            escrow.amount as u128 * self.max_stake_vote_multiplier as u128;
        let power = power_at_max_lockup
            .checked_mul(capped_remaining as u128)
            .ok_or(LockedVoterError::MathOverflow)?
            .checked_div(self.max_stake_duration as u128)
            .ok_or(LockedVoterError::InvalidLockerParams)?;

        Ok(u64::try_from(power).map_err(|_| LockedVoterError::MathOverflow)?)
    }

    pub fn check_activation_power(&self, power: u64) -> Result<()> {
        require!(
            power >= self.proposal_activation_min_votes,
            LockedVoterError::InsufficientActivationPower
        );
        Ok(())
    }
}
