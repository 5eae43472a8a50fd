use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Activate Proposal Instruction
//
// Opens the voting window. Only the electorate may activate; it is expected
// to have checked the activator's voting power before invoking this.

#[derive(Accounts)]
pub struct ActivateProposal<'info> {
    #[account(
        seeds = [GOVERNOR, governor.base.as_ref()],
        bump = governor.bump,
        has_one = electorate @ GovernError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernError::GovernorMismatch,
    )]
    pub proposal: Account<'info, Proposal>,

    pub electorate: Signer<'info>,
}

impl<'info> ActivateProposal<'info> {
    pub fn activate_proposal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.proposal.activate(&self.governor.params, now)?;

        msg!(
            "Proposal {} active until {}",
            self.proposal.index,
            self.proposal.voting_ends_at
        );
        emit!(ProposalActivateEvent {
            governor: self.governor.key(),
            proposal: self.proposal.key(),
            voting_ends_at: self.proposal.voting_ends_at,
        });

        Ok(())
    }
}
