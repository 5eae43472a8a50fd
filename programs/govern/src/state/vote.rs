use anchor_lang::prelude::*;
use anchor_lang::prelude::borsh;

use crate::errors::GovernError;

// Side of a vote, stored as a single byte
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum VoteSide {
    // Not set, or withdrawn
    Pending,
    Against,
    For,
    // Counts toward quorum but not toward the majority
    Abstain,
}

impl Default for VoteSide {
    fn default() -> Self {
        VoteSide::Pending
    }
}

impl TryFrom<u8> for VoteSide {
    type Error = anchor_lang::error::Error;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(VoteSide::Pending),
            1 => Ok(VoteSide::Against),
            2 => Ok(VoteSide::For),
            3 => Ok(VoteSide::Abstain),
            _ => err!(GovernError::InvalidVoteSide),
        }
    }
}

// Vote record, one per (proposal, voter)
// Seeds: ["vote", proposal, voter]
#[account]
#[derive(InitSpace, Debug, Default)]
pub struct Vote {
    pub proposal: Pubkey,
    pub voter: Pubkey,
    pub bump: u8,
    pub side: VoteSide,
    // Weight snapshotted when the vote was set
    pub weight: u64,
}

impl Vote {
    // A freshly allocated record has no proposal yet
    pub fn is_initialized(&self) -> bool {
        self.proposal != Pubkey::default()
    }
}
