use anchor_lang::prelude::*;

use crate::errors::GovernError;

// Governor account
// The DAO: numbers proposals and holds the parameters every proposal is judged by
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Governor {
    // Base keypair used to derive the governor PDA
    pub base: Pubkey,

    // PDA bump seed
    pub bump: u8,

    // Number of proposals created so far
    // The next proposal gets this value as its index
    pub proposal_count: u64,

    // Voting body allowed to activate proposals and set votes
    pub electorate: Pubkey,

    // Executor that runs queued proposals
    // Only it may change params or the electorate
    pub smart_wallet: Pubkey,

    pub params: GovernanceParameters,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq, InitSpace)]
pub struct GovernanceParameters {
    // Seconds a proposal must wait in Draft before it can be activated
    pub voting_delay: u64,

    // Seconds the voting window stays open after activation
    pub voting_period: u64,

    // Minimum For + Against + Abstain weight for a proposal to pass
    pub quorum_votes: u64,

    // Seconds the executor waits after queueing before running the proposal
    pub timelock_delay_seconds: u64,
}

impl GovernanceParameters {
    pub fn validate(&self) -> Result<()> {
        require!(self.voting_period > 0, GovernError::InvalidGovernanceParams);
        require!(
            i64::try_from(self.voting_delay).is_ok()
                && i64::try_from(self.voting_period).is_ok()
                && i64::try_from(self.timelock_delay_seconds).is_ok(),
            GovernError::InvalidGovernanceParams
        );
        Ok(())
    }
}

impl Governor {
    // Reserve the next proposal index and advance the counter
    pub fn next_proposal_index(&mut self) -> Result<u64> {
        let index = self.proposal_count;
        self.proposal_count = self
            .proposal_count
            .checked_add(1)
            .ok_or(GovernError::MathOverflow)?;
        Ok(index)
    }

    pub fn is_smart_wallet(&self, caller: &Pubkey) -> bool {
        self.smart_wallet == *caller
    }
}

// Shift a unix timestamp forward by a number of seconds
pub fn add_seconds(timestamp: i64, seconds: u64) -> Result<i64> {
    let seconds = i64::try_from(seconds).map_err(|_| GovernError::MathOverflow)?;
    Ok(timestamp
        .checked_add(seconds)
        .ok_or(GovernError::MathOverflow)?)
}
