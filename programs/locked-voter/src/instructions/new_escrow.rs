use anchor_lang::prelude::*;
use anchor_spl::associated_token::AssociatedToken;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::{constants::*, errors::*, events::*, state::*};

// New Escrow Instruction
//
// Creates the escrow PDA for an owner together with its associated token
// account. Anyone may pay for it; only the owner can lock or exit.

#[derive(Accounts)]
pub struct NewEscrow<'info> {
    pub locker: Account<'info, Locker>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Escrow::INIT_SPACE,
        seeds = [ESCROW, locker.key().as_ref(), escrow_owner.key().as_ref()],
        bump,
    )]
    pub escrow: Account<'info, Escrow>,

    // Token account holding the locked tokens, owned by the escrow PDA
    // Anyone can create this ATA ahead of time, so an existing one is reused
    #[account(
        init_if_needed,
        payer = payer,
        associated_token::mint = token_mint,
        associated_token::authority = escrow,
    )]
    pub escrow_tokens: Account<'info, TokenAccount>,

    #[account(
        address = locker.token_mint @ LockedVoterError::InvalidTokenMint,
    )]
    pub token_mint: Account<'info, Mint>,

    /// CHECK: Owner of the escrow to create, only its address is stored
    pub escrow_owner: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> NewEscrow<'info> {
    pub fn new_escrow(&mut self, bumps: &NewEscrowBumps) -> Result<()> {
        self.escrow.set_inner(Escrow {
            locker: self.locker.key(),
            owner: self.escrow_owner.key(),
            bump: bumps.escrow,
            tokens: self.escrow_tokens.key(),
            amount: 0,
            escrow_started_at: 0,
            escrow_ends_at: 0,
            vote_delegate: self.escrow_owner.key(),
        });

        emit!(NewEscrowEvent {
            escrow: self.escrow.key(),
            escrow_owner: self.escrow_owner.key(),
            locker: self.locker.key(),
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
