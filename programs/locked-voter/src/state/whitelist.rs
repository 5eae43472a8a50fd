use anchor_lang::prelude::*;

use super::locker::LockerParams;
use crate::errors::LockedVoterError;

// Grants a program the right to CPI into lock
// Seeds: ["whitelist_entry", locker, program_id, owner]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct LockerWhitelistEntry {
    pub bump: u8,
    pub locker: Pubkey,
    pub program_id: Pubkey,
    // Pubkey::default() grants the program access for every escrow owner
    pub owner: Pubkey,
}

impl LockerWhitelistEntry {
    pub fn is_global(&self) -> bool {
        self.owner == Pubkey::default()
    }

    pub fn allows(&self, locker: &Pubkey, program_id: &Pubkey, escrow_owner: &Pubkey) -> bool {
        self.locker == *locker
            && self.program_id == *program_id
            && (self.is_global() || self.owner == *escrow_owner)
    }
}

// Decide whether a lock may proceed
// `invoking_program` is None for a direct call and Some(program) when lock
// is reached through a CPI from that program
pub fn check_lock_privilege(
    locker: &Pubkey,
    params: &LockerParams,
    invoking_program: Option<Pubkey>,
    escrow_owner: &Pubkey,
    entry: Option<&LockerWhitelistEntry>,
) -> Result<()> {
    if !params.whitelist_enabled {
        return Ok(());
    }
    let Some(program_id) = invoking_program else {
        return Ok(());
    };

    let entry = entry.ok_or(LockedVoterError::ProgramNotWhitelisted)?;
    require!(
        entry.allows(locker, &program_id, escrow_owner),
        LockedVoterError::ProgramNotWhitelisted
    );
    Ok(())
}
