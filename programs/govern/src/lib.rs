use anchor_lang::prelude::*;
pub mod instructions;
pub mod errors;
pub mod events;
pub mod state;
pub mod constants;

pub use instructions::*;
pub use errors::*;
pub use events::*;
pub use state::*;

declare_id!("Govz1VyoyLD5BL6CSCxUJLVLsQHRwjfFj1prNsdNg5Jw");

#[program]
pub mod govern {
    use super::*;

    // Create a governor for a base keypair
    // Stores the electorate, the smart wallet and the governance params
    pub fn create_governor(
        ctx: Context<CreateGovernor>,
        electorate: Pubkey,
        params: GovernanceParameters,
    ) -> Result<()> {
        ctx.accounts.create_governor(electorate, params, &ctx.bumps)
    }

    // Create a Draft proposal with the next index of the governor
    pub fn create_proposal(
        ctx: Context<CreateProposal>,
        instructions: Vec<ProposalInstruction>,
    ) -> Result<()> {
        ctx.accounts.create_proposal(instructions, &ctx.bumps)
    }

    // Open the voting window of a Draft proposal
    // Electorate only, after the voting delay
    pub fn activate_proposal(ctx: Context<ActivateProposal>) -> Result<()> {
        ctx.accounts.activate_proposal()
    }

    // Cancel a Draft proposal
    // Proposer only
    pub fn cancel_proposal(ctx: Context<CancelProposal>) -> Result<()> {
        ctx.accounts.cancel_proposal()
    }

    // Link a succeeded proposal to its smart wallet transaction
    pub fn queue_proposal(ctx: Context<QueueProposal>) -> Result<()> {
        ctx.accounts.queue_proposal()
    }

    // Create an empty vote record for a voter
    pub fn new_vote(ctx: Context<NewVote>, voter: Pubkey) -> Result<()> {
        ctx.accounts.new_vote(voter, &ctx.bumps)
    }

    // Set the side and weight of a vote
    // Electorate only, while the proposal is Active
    pub fn set_vote(ctx: Context<SetVote>, voter: Pubkey, side: u8, weight: u64) -> Result<()> {
        ctx.accounts.set_vote(voter, side, weight, &ctx.bumps)
    }

    // Replace the governance params
    // Smart wallet only
    pub fn set_governance_params(
        ctx: Context<SetGovernanceParams>,
        params: GovernanceParameters,
    ) -> Result<()> {
        ctx.accounts.set_governance_params(params)
    }

    // Replace the electorate
    // Smart wallet only
    pub fn set_electorate(ctx: Context<SetElectorate>, new_electorate: Pubkey) -> Result<()> {
        ctx.accounts.set_electorate(new_electorate)
    }

    // Attach a title and description link to a proposal
    // Proposer only
    pub fn create_proposal_meta(
        ctx: Context<CreateProposalMeta>,
        title: String,
        description_link: String,
    ) -> Result<()> {
        ctx.accounts.create_proposal_meta(title, description_link)
    }
}
