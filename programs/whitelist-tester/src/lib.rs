use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use locked_voter::program::LockedVoter;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

// Forwards lock calls into locked-voter so the whitelist gate sees a
// foreign top-level program. Only used by integration tests.

#[program]
pub mod whitelist_tester {
    use super::*;

    pub fn lock_tokens(ctx: Context<LockTokens>, amount: u64, duration: u64) -> Result<()> {
        ctx.accounts.lock_tokens(amount, duration)
    }
}

#[derive(Accounts)]
pub struct LockTokens<'info> {
    /// CHECK: Validated by locked-voter
    #[account(mut)]
    pub locker: UncheckedAccount<'info>,

    /// CHECK: Validated by locked-voter
    #[account(mut)]
    pub escrow: UncheckedAccount<'info>,

    /// CHECK: Validated by locked-voter
    #[account(mut)]
    pub escrow_tokens: UncheckedAccount<'info>,

    pub escrow_owner: Signer<'info>,

    /// CHECK: Validated by locked-voter
    #[account(mut)]
    pub source_tokens: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,

    /// CHECK: Validated by locked-voter
    pub instructions_sysvar: UncheckedAccount<'info>,

    /// CHECK: Validated by locked-voter
    pub whitelist_entry: Option<UncheckedAccount<'info>>,

    pub locked_voter_program: Program<'info, LockedVoter>,
}

impl<'info> LockTokens<'info> {
    pub fn lock_tokens(&mut self, amount: u64, duration: u64) -> Result<()> {
        locked_voter::cpi::lock(
            CpiContext::new(
                self.locked_voter_program.to_account_info(),
                locked_voter::cpi::accounts::Lock {
                    locker: self.locker.to_account_info(),
                    escrow: self.escrow.to_account_info(),
                    escrow_tokens: self.escrow_tokens.to_account_info(),
                    escrow_owner: self.escrow_owner.to_account_info(),
                    source_tokens: self.source_tokens.to_account_info(),
                    token_program: self.token_program.to_account_info(),
                    instructions_sysvar: self.instructions_sysvar.to_account_info(),
                    whitelist_entry: self
                        .whitelist_entry
                        .as_ref()
                        .map(|entry| entry.to_account_info()),
                },
            ),
            amount,
            duration,
        )
    }
}
