use anchor_lang::prelude::*;
use crate::{constants::*, state::*};

// New Vote Instruction
//
// Creates an empty Pending vote record for (proposal, voter).
// Optional: set_vote creates the record itself when it is missing.

#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct NewVote<'info> {
    pub proposal: Account<'info, Proposal>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Vote::INIT_SPACE,
        seeds = [VOTE, proposal.key().as_ref(), voter.as_ref()],
        bump,
    )]
    pub vote: Account<'info, Vote>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> NewVote<'info> {
    pub fn new_vote(&mut self, voter: Pubkey, bumps: &NewVoteBumps) -> Result<()> {
        self.vote.set_inner(Vote {
            proposal: self.proposal.key(),
            voter,
            bump: bumps.vote,
            side: VoteSide::Pending,
            weight: 0,
        });
        Ok(())
    }
}
