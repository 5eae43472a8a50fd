use anchor_lang::prelude::*;
use crate::{errors::*, events::*, state::*};

// Queue Proposal Instruction
//
// Records the smart wallet transaction that will execute a succeeded
// proposal. Building and approving that transaction happens in the smart
// wallet; this only links it and starts the timelock.
// Smart wallet only.

#[derive(Accounts)]
pub struct QueueProposal<'info> {
    #[account(
        constraint = governor.is_smart_wallet(&smart_wallet.key()) @ GovernError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    #[account(
        mut,
        has_one = governor @ GovernError::GovernorMismatch,
    )]
    pub proposal: Account<'info, Proposal>,

    /// CHECK: Smart wallet transaction created outside this program
    pub transaction: UncheckedAccount<'info>,

    pub smart_wallet: Signer<'info>,
}

impl<'info> QueueProposal<'info> {
    pub fn queue_proposal(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        self.proposal.queue(self.transaction.key(), now)?;

        let eta = add_seconds(now, self.governor.params.timelock_delay_seconds)?;

        msg!("Proposal {} queued, eta {}", self.proposal.index, eta);
        emit!(ProposalQueueEvent {
            governor: self.governor.key(),
            proposal: self.proposal.key(),
            transaction: self.transaction.key(),
            eta,
        });

        Ok(())
    }
}
