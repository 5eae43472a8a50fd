use anchor_lang::prelude::*;

use crate::state::GovernanceParameters;

#[event]
pub struct GovernorCreateEvent {
    pub governor: Pubkey,
    pub electorate: Pubkey,
    pub smart_wallet: Pubkey,
    pub params: GovernanceParameters,
}

#[event]
pub struct ProposalCreateEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub proposer: Pubkey,
    pub index: u64,
    pub instruction_count: u64,
}

#[event]
pub struct ProposalActivateEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub voting_ends_at: i64,
}

#[event]
pub struct ProposalCancelEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
}

#[event]
pub struct ProposalQueueEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub transaction: Pubkey,
    // Earliest time the smart wallet may execute the proposal
    pub eta: i64,
}

#[event]
pub struct VoteSetEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub vote: Pubkey,
    pub side: u8,
    pub weight: u64,
}

#[event]
pub struct GovernorSetParamsEvent {
    pub governor: Pubkey,
    pub prev_params: GovernanceParameters,
    pub params: GovernanceParameters,
}

#[event]
pub struct GovernorSetElectorateEvent {
    pub governor: Pubkey,
    pub prev_electorate: Pubkey,
    pub new_electorate: Pubkey,
}

#[event]
pub struct ProposalMetaCreateEvent {
    pub governor: Pubkey,
    pub proposal: Pubkey,
    pub title: String,
    pub description_link: String,
}
