use anchor_lang::prelude::*;
use govern::program::Govern;
use govern::{Governor, Proposal};
use crate::{constants::*, errors::*, state::*};

// Activate Proposal Instruction
//
// An escrow owner with enough voting power right now activates a Draft
// proposal. The locker PDA signs the govern CPI as the electorate.

#[derive(Accounts)]
pub struct ActivateProposal<'info> {
    #[account(
        seeds = [LOCKER, locker.base.as_ref()],
        bump = locker.bump,
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub locker: Account<'info, Locker>,

    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub proposal: Account<'info, Proposal>,

    #[account(
        has_one = locker @ LockedVoterError::LockerMismatch,
        constraint = escrow.owner == escrow_owner.key() @ LockedVoterError::Unauthorized,
    )]
    pub escrow: Account<'info, Escrow>,

    pub escrow_owner: Signer<'info>,

    pub govern_program: Program<'info, Govern>,
}

impl<'info> ActivateProposal<'info> {
    pub fn activate_proposal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        let power = self.escrow.voting_power_at(&self.locker.params, now)?;
        self.locker.params.check_activation_power(power)?;

        let base = self.locker.base;
        let locker_seeds = &[LOCKER, base.as_ref(), &[self.locker.bump]];
        let signer_seeds = &[&locker_seeds[..]];

        govern::cpi::activate_proposal(CpiContext::new_with_signer(
            self.govern_program.to_account_info(),
            govern::cpi::accounts::ActivateProposal {
                governor: self.governor.to_account_info(),
                proposal: self.proposal.to_account_info(),
                electorate: self.locker.to_account_info(),
            },
            signer_seeds,
        ))?;

        msg!(
            "Proposal {} activated with voting power {}",
            self.proposal.index,
            power
        );
        Ok(())
    }
}
