use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Set Vote Instruction
//
// Called by the electorate with the weight it computed for the voter.
// The vote record is looked up or created; any previous side/weight is
// removed from the tally before the new one is added.

#[derive(Accounts)]
#[instruction(voter: Pubkey)]
pub struct SetVote<'info> {
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

    #[account(
        init_if_needed,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Vote::INIT_SPACE,
        seeds = [VOTE, proposal.key().as_ref(), voter.as_ref()],
        bump,
    )]
    pub vote: Account<'info, Vote>,

    pub electorate: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> SetVote<'info> {
    pub fn set_vote(
        &mut self,
        voter: Pubkey,
        side: u8,
        weight: u64,
        bumps: &SetVoteBumps,
    ) -> Result<()> {
        let side = VoteSide::try_from(side)?;
        let now = Clock::get()?.unix_timestamp;

        if !self.vote.is_initialized() {
            self.vote.proposal = self.proposal.key();
            self.vote.voter = voter;
            self.vote.bump = bumps.vote;
        }

        self.proposal.apply_vote(&mut self.vote, side, weight, now)?;

        msg!(
            "Vote set on proposal {}: {:?} with weight {}",
            self.proposal.index,
            side,
            self.vote.weight
        );
        emit!(VoteSetEvent {
            governor: self.governor.key(),
            proposal: self.proposal.key(),
            voter,
            vote: self.vote.key(),
            side: side as u8,
            weight: self.vote.weight,
        });

        Ok(())
    }
}
