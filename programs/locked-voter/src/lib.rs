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

declare_id!("LocktDzaV1W2Bm9DeZeiyz4J9zs4fRqNiYqQyracRXw");

#[program]
pub mod locked_voter {
    use super::*;

    // Create a locker for a base keypair
    // The locker PDA acts as the electorate of its governor
    pub fn new_locker(ctx: Context<NewLocker>, params: LockerParams) -> Result<()> {
        ctx.accounts.new_locker(params, &ctx.bumps)
    }

    // Create an empty escrow and its token account for an owner
    pub fn new_escrow(ctx: Context<NewEscrow>) -> Result<()> {
        ctx.accounts.new_escrow(&ctx.bumps)
    }

    // Deposit tokens and extend the escrow's lock window
    // CPI callers must be whitelisted when the locker requires it
    pub fn lock(ctx: Context<Lock>, amount: u64, duration: u64) -> Result<()> {
        ctx.accounts.lock(amount, duration)
    }

    // Withdraw everything once the lock has ended
    pub fn exit(ctx: Context<Exit>) -> Result<()> {
        ctx.accounts.exit_escrow()
    }

    // Activate a governor proposal with the escrow's current power
    pub fn activate_proposal(ctx: Context<ActivateProposal>) -> Result<()> {
        ctx.accounts.activate_proposal()
    }

    // Vote on a governor proposal with the escrow's power at voting end
    pub fn cast_vote(ctx: Context<CastVote>, side: u8) -> Result<()> {
        ctx.accounts.cast_vote(side)
    }

    // Choose who may vote on behalf of the escrow
    pub fn set_vote_delegate(ctx: Context<SetVoteDelegate>, new_delegate: Pubkey) -> Result<()> {
        ctx.accounts.set_vote_delegate(new_delegate)
    }

    // Replace the locker params
    // Smart wallet only
    pub fn set_locker_params(ctx: Context<SetLockerParams>, params: LockerParams) -> Result<()> {
        ctx.accounts.set_locker_params(params)
    }

    // Whitelist a program for CPI calls into lock
    // Smart wallet only
    pub fn approve_program_lock_privilege(
        ctx: Context<ApproveProgramLockPrivilege>,
        owner: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.approve_program_lock_privilege(owner, &ctx.bumps)
    }

    // Remove a program from the whitelist
    // Smart wallet only
    pub fn revoke_program_lock_privilege(ctx: Context<RevokeProgramLockPrivilege>) -> Result<()> {
        ctx.accounts.revoke_program_lock_privilege()
    }
}
