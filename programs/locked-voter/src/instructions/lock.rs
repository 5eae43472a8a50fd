use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::instructions::{self as instructions_sysvar, get_instruction_relative};
use anchor_spl::token::{transfer, Token, TokenAccount, Transfer};
use crate::{constants::*, errors::*, events::*, state::*};

// Lock Instruction
//
// Deposits tokens into the escrow and extends its lock window.
// When the locker has the whitelist enabled and the transaction's top-level
// instruction belongs to another program, that program needs a whitelist
// entry for this locker (global or scoped to the escrow owner).

#[derive(Accounts)]
pub struct Lock<'info> {
    #[account(mut)]
    pub locker: Account<'info, Locker>,

    #[account(
        mut,
        seeds = [ESCROW, locker.key().as_ref(), escrow_owner.key().as_ref()],
        bump = escrow.bump,
        has_one = locker @ LockedVoterError::LockerMismatch,
    )]
    pub escrow: Account<'info, Escrow>,

    #[account(
        mut,
        address = escrow.tokens @ LockedVoterError::EscrowTokensMismatch,
    )]
    pub escrow_tokens: Account<'info, TokenAccount>,

    pub escrow_owner: Signer<'info>,

    // Source of the deposit, owned by the escrow owner
    #[account(
        mut,
        constraint = source_tokens.mint == locker.token_mint @ LockedVoterError::InvalidTokenMint,
        constraint = source_tokens.owner == escrow_owner.key() @ LockedVoterError::Unauthorized,
    )]
    pub source_tokens: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,

    /// CHECK: Address checked against the instructions sysvar id
    #[account(address = instructions_sysvar::ID)]
    pub instructions_sysvar: UncheckedAccount<'info>,

    // Required only when the call comes through another program
    pub whitelist_entry: Option<Account<'info, LockerWhitelistEntry>>,
}

impl<'info> Lock<'info> {
    pub fn lock(&mut self, amount: u64, duration: u64) -> Result<()> {
        // SECURITY CHECKS

        // 1. Whitelist Check
        // Gate on the program that issued the top-level instruction
        let invoking_program = self.invoking_program()?;
        check_lock_privilege(
            &self.locker.key(),
            &self.locker.params,
            invoking_program,
            &self.escrow_owner.key(),
            self.whitelist_entry.as_deref(),
        )?;

        // 2. Lock Accounting
        // Duration and overflow checks happen before any tokens move
        let now = Clock::get()?.unix_timestamp;
        let update = self
            .escrow
            .record_lock_event(&mut self.locker, amount, duration, now)?;

        // A zero-amount lock only refreshes the window
        if amount > 0 {
            transfer(
                CpiContext::new(
                    self.token_program.to_account_info(),
                    Transfer {
                        from: self.source_tokens.to_account_info(),
                        to: self.escrow_tokens.to_account_info(),
                        authority: self.escrow_owner.to_account_info(),
                    },
                ),
                amount,
            )?;
        }

        msg!(
            "Locked {} for {}s, escrow ends at {}",
            amount,
            duration,
            update.next_escrow_ends_at
        );
        emit!(LockEvent {
            locker: self.locker.key(),
            escrow_owner: self.escrow.owner,
            token_mint: self.locker.token_mint,
            amount,
            locker_supply: self.locker.locked_supply,
            duration,
            prev_escrow_ends_at: update.prev_escrow_ends_at,
            next_escrow_ends_at: update.next_escrow_ends_at,
            next_escrow_started_at: update.next_escrow_started_at,
        });

        Ok(())
    }

    // Program of the transaction's top-level instruction, not the
    // immediate caller: in A -> B -> lock this resolves to A
    // None when lock itself is the top-level instruction
    fn invoking_program(&self) -> Result<Option<Pubkey>> {
        let top_level = get_instruction_relative(0, &self.instructions_sysvar.to_account_info())
            .map_err(|_| LockedVoterError::AccountNotFound)?;
        if top_level.program_id == crate::ID {
            Ok(None)
        } else {
            Ok(Some(top_level.program_id))
        }
    }
}
