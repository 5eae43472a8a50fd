use anchor_lang::prelude::*;
use govern::Governor;
use crate::{constants::*, errors::*, events::*, state::*};

// Approve Program Lock Privilege Instruction
//
// Smart wallet only. Whitelists an executable for CPI calls into lock,
// either for every escrow (owner = None) or for a single escrow owner.

#[derive(Accounts)]
#[instruction(owner: Option<Pubkey>)]
pub struct ApproveProgramLockPrivilege<'info> {
    #[account(
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub locker: Account<'info, Locker>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + LockerWhitelistEntry::INIT_SPACE,
        seeds = [
            WHITELIST_ENTRY,
            locker.key().as_ref(),
            executable_id.key().as_ref(),
            owner.unwrap_or_default().as_ref(),
        ],
        bump,
    )]
    pub whitelist_entry: Account<'info, LockerWhitelistEntry>,

    #[account(
        has_one = smart_wallet @ LockedVoterError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    pub smart_wallet: Signer<'info>,

    /// CHECK: Program being whitelisted, must be executable
    #[account(executable)]
    pub executable_id: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> ApproveProgramLockPrivilege<'info> {
    pub fn approve_program_lock_privilege(
        &mut self,
        owner: Option<Pubkey>,
        bumps: &ApproveProgramLockPrivilegeBumps,
    ) -> Result<()> {
        let owner = owner.unwrap_or_default();

        self.whitelist_entry.set_inner(LockerWhitelistEntry {
            bump: bumps.whitelist_entry,
            locker: self.locker.key(),
            program_id: self.executable_id.key(),
            owner,
        });

        msg!(
            "Program {} may lock into {}",
            self.executable_id.key(),
            self.locker.key()
        );
        emit!(ApproveLockPrivilegeEvent {
            locker: self.locker.key(),
            program_id: self.executable_id.key(),
            owner,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
