use anchor_lang::prelude::*;

#[error_code]
pub enum GovernError {
    // Authorization errors
    #[msg("Caller is not allowed to perform this action")]
    Unauthorized,

    // Lifecycle errors
    #[msg("Proposal has already been activated")]
    AlreadyActivated,

    #[msg("Proposal has already been queued")]
    AlreadyQueued,

    #[msg("Proposal has been canceled")]
    ProposalCanceled,

    #[msg("Voting delay has not elapsed yet")]
    VotingDelayNotElapsed,

    #[msg("Proposal is not in the voting window")]
    ProposalNotActive,

    #[msg("Only succeeded proposals can be queued")]
    ProposalNotSucceeded,

    // Input validation errors
    #[msg("Invalid vote side")]
    InvalidVoteSide,

    #[msg("Invalid governance parameters")]
    InvalidGovernanceParams,

    #[msg("Too many instructions in proposal")]
    TooManyInstructions,

    #[msg("Proposal title is too long")]
    TitleTooLong,

    #[msg("Proposal description link is too long")]
    DescriptionLinkTooLong,

    // Account relationship errors
    #[msg("Account does not belong to this governor")]
    GovernorMismatch,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
