use anchor_lang::prelude::*;

use super::governor::{add_seconds, GovernanceParameters};
use super::vote::{Vote, VoteSide};
use crate::errors::GovernError;

// Lifecycle state of a proposal, derived from its stored fields and the clock
// Never stored: always recomputed through Proposal::state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProposalState {
    // Created but not yet surfaced for voting
    Draft,
    // Voting window is open
    Active,
    // Withdrawn by the proposer before activation
    Canceled,
    // Voting closed without a strict For majority or without quorum
    Defeated,
    // Voting closed with a For majority and quorum
    Succeeded,
    // Handed to the smart wallet for execution
    Queued,
}

// Account meta of an instruction the DAO will execute
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ProposalAccountMeta {
    pub pubkey: Pubkey,
    pub is_signer: bool,
    pub is_writable: bool,
}

// Instruction run by the smart wallet if the proposal passes
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct ProposalInstruction {
    pub program_id: Pubkey,
    #[max_len(12)]
    pub keys: Vec<ProposalAccountMeta>,
    #[max_len(256)]
    pub data: Vec<u8>,
}

// Proposal account
// Seeds: ["proposal", governor, index]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Proposal {
    // Owning governor
    pub governor: Pubkey,

    // Index assigned from governor.proposal_count at creation
    pub index: u64,

    // PDA bump seed
    pub bump: u8,

    pub proposer: Pubkey,

    // Quorum snapshot taken from the governor params
    pub quorum_votes: u64,

    // Vote tallies
    pub for_votes: u64,
    pub against_votes: u64,
    pub abstain_votes: u64,

    // Lifecycle timestamps (0 means "not yet")
    pub canceled_at: i64,
    pub created_at: i64,
    pub activated_at: i64,
    pub voting_ends_at: i64,
    pub queued_at: i64,

    // Smart wallet transaction created for this proposal when queued
    pub queued_transaction: Pubkey,

    #[max_len(4)]
    pub instructions: Vec<ProposalInstruction>,
}

impl Proposal {
    // Evaluation order matters:
    // cancellation overrides everything, unmet quorum overrides a majority
    pub fn state(&self, now: i64) -> ProposalState {
        if self.canceled_at > 0 {
            return ProposalState::Canceled;
        }
        if self.activated_at == 0 {
            return ProposalState::Draft;
        }
        if now < self.voting_ends_at {
            return ProposalState::Active;
        }
        // Ties defeat the proposal
        if self.for_votes <= self.against_votes || !self.meets_quorum() {
            return ProposalState::Defeated;
        }
        if self.queued_at > 0 {
            return ProposalState::Queued;
        }
        ProposalState::Succeeded
    }

    // Abstains count toward participation only
    pub fn meets_quorum(&self) -> bool {
        let participation = self.for_votes as u128
            + self.against_votes as u128
            + self.abstain_votes as u128;
        participation >= self.quorum_votes as u128
    }

    pub fn total_votes(&self) -> u128 {
        self.for_votes as u128 + self.against_votes as u128 + self.abstain_votes as u128
    }

    pub fn cancel(&mut self, caller: &Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(*caller, self.proposer, GovernError::Unauthorized);

        match self.state(now) {
            ProposalState::Draft => {}
            ProposalState::Canceled => return err!(GovernError::ProposalCanceled),
            _ => return err!(GovernError::AlreadyActivated),
        }

        self.canceled_at = now;
        Ok(())
    }

    pub fn activate(&mut self, params: &GovernanceParameters, now: i64) -> Result<()> {
        match self.state(now) {
            ProposalState::Draft => {}
            ProposalState::Canceled => return err!(GovernError::ProposalCanceled),
            _ => return err!(GovernError::AlreadyActivated),
        }

        let earliest_activation = add_seconds(self.created_at, params.voting_delay)?;
        require!(
            now >= earliest_activation,
            GovernError::VotingDelayNotElapsed
        );

        let voting_ends_at = add_seconds(now, params.voting_period)?;

        self.activated_at = now;
        self.voting_ends_at = voting_ends_at;
        self.quorum_votes = params.quorum_votes;
        Ok(())
    }

    pub fn queue(&mut self, transaction: Pubkey, now: i64) -> Result<()> {
        match self.state(now) {
            ProposalState::Succeeded => {}
            ProposalState::Queued => return err!(GovernError::AlreadyQueued),
            _ => return err!(GovernError::ProposalNotSucceeded),
        }

        self.queued_at = now;
        self.queued_transaction = transaction;
        Ok(())
    }

    // Replace the tally contribution of `vote` with (side, weight)
    // The previous side is subtracted first so a voter is only ever counted once
    pub fn apply_vote(
        &mut self,
        vote: &mut Vote,
        side: VoteSide,
        weight: u64,
        now: i64,
    ) -> Result<()> {
        require!(
            self.state(now) == ProposalState::Active,
            GovernError::ProposalNotActive
        );

        self.subtract_vote_weight(vote.side, vote.weight)?;
        self.add_vote_weight(side, weight)?;

        vote.side = side;
        vote.weight = if side == VoteSide::Pending { 0 } else { weight };
        Ok(())
    }

    fn tally_mut(&mut self, side: VoteSide) -> Option<&mut u64> {
        match side {
            VoteSide::Pending => None,
            VoteSide::Against => Some(&mut self.against_votes),
            VoteSide::For => Some(&mut self.for_votes),
            VoteSide::Abstain => Some(&mut self.abstain_votes),
        }
    }

    fn subtract_vote_weight(&mut self, side: VoteSide, weight: u64) -> Result<()> {
        if let Some(tally) = self.tally_mut(side) {
            *tally = tally.checked_sub(weight).ok_or(GovernError::MathOverflow)?;
        }
        Ok(())
    }

    fn add_vote_weight(&mut self, side: VoteSide, weight: u64) -> Result<()> {
        if let Some(tally) = self.tally_mut(side) {
            *tally = tally.checked_add(weight).ok_or(GovernError::MathOverflow)?;
        }
        Ok(())
    }
}

// Informational metadata for a proposal
// Seeds: ["proposal_meta", proposal]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct ProposalMeta {
    pub proposal: Pubkey,
    #[max_len(64)]
    pub title: String,
    #[max_len(256)]
    pub description_link: String,
}
