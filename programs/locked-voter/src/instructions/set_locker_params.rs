use anchor_lang::prelude::*;
use govern::Governor;
use crate::{errors::*, events::*, state::*};

// Set Locker Params Instruction
//
// Smart wallet only, so params change only through a passed proposal.
// Existing locks keep their window; power is recomputed with the new params.

#[derive(Accounts)]
pub struct SetLockerParams<'info> {
    #[account(
        mut,
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub locker: Account<'info, Locker>,

    #[account(
        has_one = smart_wallet @ LockedVoterError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    pub smart_wallet: Signer<'info>,
}

impl<'info> SetLockerParams<'info> {
    pub fn set_locker_params(&mut self, params: LockerParams) -> Result<()> {
        params.validate()?;

        let prev_params = self.locker.params;
        self.locker.params = params;

        msg!("Locker {} params updated", self.locker.key());
        emit!(LockerSetParamsEvent {
            locker: self.locker.key(),
            prev_params,
            params,
        });

        Ok(())
    }
}
