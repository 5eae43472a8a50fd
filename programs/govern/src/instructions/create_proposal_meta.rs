use anchor_lang::prelude::*;
use crate::{constants::*, errors::*, events::*, state::*};

// Create Proposal Meta Instruction
//
// Attaches a title and a description link to a proposal.
// Informational only: nothing in the lifecycle reads it.

#[derive(Accounts)]
pub struct CreateProposalMeta<'info> {
    #[account(
        has_one = proposer @ GovernError::Unauthorized,
    )]
    pub proposal: Account<'info, Proposal>,

    pub proposer: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + ProposalMeta::INIT_SPACE,
        seeds = [PROPOSAL_META, proposal.key().as_ref()],
        bump,
    )]
    pub proposal_meta: Account<'info, ProposalMeta>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateProposalMeta<'info> {
    pub fn create_proposal_meta(&mut self, title: String, description_link: String) -> Result<()> {
        require!(title.len() <= MAX_TITLE_LEN, GovernError::TitleTooLong);
        require!(
            description_link.len() <= MAX_DESCRIPTION_LINK_LEN,
            GovernError::DescriptionLinkTooLong
        );

        emit!(ProposalMetaCreateEvent {
            governor: self.proposal.governor,
            proposal: self.proposal.key(),
            title: title.clone(),
            description_link: description_link.clone(),
        });

        self.proposal_meta.set_inner(ProposalMeta {
            proposal: self.proposal.key(),
            title,
            description_link,
        });

        Ok(())
    }
}
