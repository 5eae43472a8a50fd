use anchor_lang::prelude::*;
use anchor_spl::token::{close_account, transfer, CloseAccount, Token, TokenAccount, Transfer};
use crate::{constants::*, errors::*, events::*, state::*};

// Exit Instruction
//
// Withdraws the whole escrow once its lock has ended.
// The escrow PDA signs the transfer out, then both the escrow and its token
// account are closed with rent going to the payer.

#[derive(Accounts)]
pub struct Exit<'info> {
    #[account(mut)]
    pub locker: Account<'info, Locker>,

    #[account(
        mut,
        seeds = [ESCROW, locker.key().as_ref(), escrow_owner.key().as_ref()],
        bump = escrow.bump,
        has_one = locker @ LockedVoterError::LockerMismatch,
        close = payer,
    )]
    pub escrow: Account<'info, Escrow>,

    pub escrow_owner: Signer<'info>,

    #[account(
        mut,
        address = escrow.tokens @ LockedVoterError::EscrowTokensMismatch,
    )]
    pub escrow_tokens: Account<'info, TokenAccount>,

    // Destination for the released tokens
    #[account(
        mut,
        constraint = destination_tokens.mint == locker.token_mint @ LockedVoterError::InvalidTokenMint,
    )]
    pub destination_tokens: Account<'info, TokenAccount>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Exit<'info> {
    pub fn exit_escrow(&mut self) -> Result<()> {
        let now = Clock::get()?.unix_timestamp;
        msg!("Exit at {}, escrow ends at {}", now, self.escrow.escrow_ends_at);
        let released = self.escrow.record_exit(&mut self.locker, now)?;

        let locker_key = self.locker.key();
        let owner_key = self.escrow.owner;
        let escrow_seeds = &[
            ESCROW,
            locker_key.as_ref(),
            owner_key.as_ref(),
            &[self.escrow.bump],
        ];
        let signer_seeds = &[&escrow_seeds[..]];

        // Sweep the whole balance, including tokens sent directly to the
        // escrow's token account, or close_account below fails
        let balance = self.escrow_tokens.amount;
        if balance > 0 {
            transfer(
                CpiContext::new_with_signer(
                    self.token_program.to_account_info(),
                    Transfer {
                        from: self.escrow_tokens.to_account_info(),
                        to: self.destination_tokens.to_account_info(),
                        authority: self.escrow.to_account_info(),
                    },
                    signer_seeds,
                ),
                balance,
            )?;
        }

        close_account(CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            CloseAccount {
                account: self.escrow_tokens.to_account_info(),
                destination: self.payer.to_account_info(),
                authority: self.escrow.to_account_info(),
            },
            signer_seeds,
        ))?;

        msg!("Escrow of {} exited, released {}", owner_key, released);
        emit!(ExitEscrowEvent {
            escrow_owner: owner_key,
            locker: locker_key,
            timestamp: now,
            locker_supply: self.locker.locked_supply,
            released_amount: released,
        });

        Ok(())
    }
}
