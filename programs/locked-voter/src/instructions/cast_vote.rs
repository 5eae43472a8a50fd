use anchor_lang::prelude::*;
use govern::program::Govern;
use govern::{Governor, Proposal};
use crate::{constants::*, errors::*, state::*};

// Cast Vote Instruction
//
// Votes with the escrow's power measured at the end of the voting window,
// so power that decays before the vote closes is not counted.
// The vote is recorded under the escrow owner even when a delegate signs.

#[derive(Accounts)]
pub struct CastVote<'info> {
    #[account(
        seeds = [LOCKER, locker.base.as_ref()],
        bump = locker.bump,
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub locker: Account<'info, Locker>,

    #[account(
        has_one = locker @ LockedVoterError::LockerMismatch,
        has_one = vote_delegate @ LockedVoterError::Unauthorized,
    )]
    pub escrow: Account<'info, Escrow>,

    // Pays for the vote record on first cast
    #[account(mut)]
    pub vote_delegate: Signer<'info>,

    #[account(
        mut,
        has_one = governor @ LockedVoterError::GovernorMismatch,
    )]
    pub proposal: Account<'info, Proposal>,

    /// CHECK: Vote PDA, derived and created by the govern program
    #[account(mut)]
    pub vote: UncheckedAccount<'info>,

    pub governor: Account<'info, Governor>,

    pub govern_program: Program<'info, Govern>,
    pub system_program: Program<'info, System>,
}

impl<'info> CastVote<'info> {
    pub fn cast_vote(&mut self, side: u8) -> Result<()> {
        let voting_power = self
            .escrow
            .voting_power_at(&self.locker.params, self.proposal.voting_ends_at)?;

        let base = self.locker.base;
        let locker_seeds = &[LOCKER, base.as_ref(), &[self.locker.bump]];
        let signer_seeds = &[&locker_seeds[..]];

        govern::cpi::set_vote(
            CpiContext::new_with_signer(
                self.govern_program.to_account_info(),
                govern::cpi::accounts::SetVote {
                    governor: self.governor.to_account_info(),
                    proposal: self.proposal.to_account_info(),
                    vote: self.vote.to_account_info(),
                    electorate: self.locker.to_account_info(),
                    payer: self.vote_delegate.to_account_info(),
                    system_program: self.system_program.to_account_info(),
                },
                signer_seeds,
            ),
            self.escrow.owner,
            side,
            voting_power,
        )?;

        msg!(
            "Escrow {} voted with power {}",
            self.escrow.owner,
            voting_power
        );
        Ok(())
    }
}
