use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Create Proposal Instruction
//
// Anyone may create a proposal. It starts as a Draft and gets the next
// index from the governor's counter, which is never reused.

#[derive(Accounts)]
pub struct CreateProposal<'info> {
    #[account(
        mut,
        seeds = [GOVERNOR, governor.base.as_ref()],
        bump = governor.bump,
    )]
    pub governor: Account<'info, Governor>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Proposal::INIT_SPACE,
        seeds = [
            PROPOSAL,
            governor.key().as_ref(),
            &governor.proposal_count.to_le_bytes(),
        ],
        bump,
    )]
    pub proposal: Account<'info, Proposal>,

    pub proposer: Signer<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposal<'info> {
    pub fn create_proposal(
        &mut self,
        instructions: Vec<ProposalInstruction>,
        bumps: &CreateProposalBumps,
    ) -> Result<()> {
        // SECURITY CHECKS

        // 1. Size Check
        // The account is sized for a bounded instruction list
        require!(
            instructions.len() <= MAX_PROPOSAL_INSTRUCTIONS,
            GovernError::TooManyInstructions
        );
        require!(
            instructions.iter().all(|ix| {
                ix.keys.len() <= MAX_INSTRUCTION_KEYS && ix.data.len() <= MAX_INSTRUCTION_DATA_LEN
            }),
            GovernError::TooManyInstructions
        );

        let now = Clock::get()?.unix_timestamp;
        let index = self.governor.next_proposal_index()?;
        let instruction_count = instructions.len() as u64;

        self.proposal.set_inner(Proposal {
            governor: self.governor.key(),
            index,
            bump: bumps.proposal,
            proposer: self.proposer.key(),
            quorum_votes: self.governor.params.quorum_votes,
            created_at: now,
            instructions,
            ..Proposal::default()
        });

        msg!("Proposal {} created by {}", index, self.proposer.key());
        emit!(ProposalCreateEvent {
            governor: self.governor.key(),
            proposal: self.proposal.key(),
            proposer: self.proposer.key(),
            index,
            instruction_count,
        });

        Ok(())
    }
}
