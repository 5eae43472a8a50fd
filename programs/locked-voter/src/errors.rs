use anchor_lang::prelude::*;

#[error_code]
pub enum LockedVoterError {
    // Lock errors
    #[msg("Lockup duration is below the locker minimum")]
    LockupDurationTooShort,

    #[msg("Escrow has not ended yet")]
    EscrowNotEnded,

    #[msg("Program is not whitelisted to lock into this locker")]
    ProgramNotWhitelisted,

    // Governance errors
    #[msg("Voting power is below the proposal activation minimum")]
    InsufficientActivationPower,

    #[msg("Caller is not allowed to perform this action")]
    Unauthorized,

    // Input validation errors
    #[msg("Invalid locker parameters")]
    InvalidLockerParams,

    #[msg("Token mint does not match the locker")]
    InvalidTokenMint,

    // Account relationship errors
    #[msg("Governor does not match the locker")]
    GovernorMismatch,

    #[msg("Escrow does not belong to this locker")]
    LockerMismatch,

    #[msg("Token account does not match the escrow")]
    EscrowTokensMismatch,

    #[msg("Required account was not found")]
    AccountNotFound,

    // Arithmetic errors
    #[msg("Arithmetic overflow")]
    MathOverflow,
}
