use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Set Vote Delegate Instruction
//
// The escrow owner picks who may cast votes with the escrow's power.

#[derive(Accounts)]
pub struct SetVoteDelegate<'info> {
    #[account(
        mut,
        seeds = [ESCROW, escrow.locker.as_ref(), escrow_owner.key().as_ref()],
        bump = escrow.bump,
        constraint = escrow.owner == escrow_owner.key() @ LockedVoterError::Unauthorized,
    )]
    pub escrow: Account<'info, Escrow>,

    pub escrow_owner: Signer<'info>,
}

impl<'info> SetVoteDelegate<'info> {
    pub fn set_vote_delegate(&mut self, new_delegate: Pubkey) -> Result<()> {
        let old_delegate = self.escrow.vote_delegate;
        self.escrow.vote_delegate = new_delegate;

        emit!(SetVoteDelegateEvent {
            escrow_owner: self.escrow.owner,
            old_delegate,
            new_delegate,
        });

        Ok(())
    }
}
