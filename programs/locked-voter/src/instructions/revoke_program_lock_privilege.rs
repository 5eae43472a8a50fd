use anchor_lang::prelude::*;
use govern::Governor;
use crate::{errors::*, events::*, state::*};

// Revoke Program Lock Privilege Instruction
//
// Smart wallet only. Closes a whitelist entry, rent goes to the payer.

#[derive(Accounts)]
pub struct RevokeProgramLockPrivilege<'info> {
    #[account(
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub locker: Account<'info, Locker>,

    #[account(
        mut,
        has_one = locker @ LockedVoterError::LockerMismatch,
        close = payer,
    )]
    pub whitelist_entry: Account<'info, LockerWhitelistEntry>,

    #[account(
        has_one = smart_wallet @ LockedVoterError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    pub smart_wallet: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,
}

impl<'info> RevokeProgramLockPrivilege<'info> {
    pub fn revoke_program_lock_privilege(&mut self) -> Result<()> {
        msg!(
            "Program {} may no longer lock into {}",
            self.whitelist_entry.program_id,
            self.locker.key()
        );
        emit!(RevokeLockPrivilegeEvent {
            locker: self.locker.key(),
            program_id: self.whitelist_entry.program_id,
            owner: self.whitelist_entry.owner,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
