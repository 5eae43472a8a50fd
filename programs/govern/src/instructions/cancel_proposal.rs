use anchor_lang::prelude::*;
use crate::{errors::*, events::*, state::*};

// Cancel Proposal Instruction
//
// The proposer may cancel while the proposal is still a Draft.
// The account is kept as a terminal record.

#[derive(Accounts)]
pub struct CancelProposal<'info> {
    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernError::GovernorMismatch,
    )]
    pub proposal: Account<'info, Proposal>,

    pub proposer: Signer<'info>,
}

impl<'info> CancelProposal<'info> {
    pub fn cancel_proposal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.proposal.cancel(&self.proposer.key(), now)?;

        msg!("Proposal {} canceled", self.proposal.index);
        emit!(ProposalCancelEvent {
            governor: self.governor.key(),
            proposal: self.proposal.key(),
        });

        Ok(())
    }
}
