use anchor_lang::prelude::*;
use anchor_spl::token::Mint;
use govern::Governor;
use crate::{constants::*, events::*, state::*};

// New Locker Instruction
//
// Creates the locker PDA for a base keypair. The locker address must be the
// electorate of the governor for activation and voting to go through.

#[derive(Accounts)]
pub struct NewLocker<'info> {
    // Base keypair, signs to prove ownership of the derivation seed
    pub base: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Locker::INIT_SPACE,
        seeds = [LOCKER, base.key().as_ref()],
        bump,
    )]
    pub locker: Account<'info, Locker>,

    // Token that gets locked for voting power
    pub token_mint: Account<'info, Mint>,

    pub governor: Account<'info, Governor>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> NewLocker<'info> {
    pub fn new_locker(&mut self, params: LockerParams, bumps: &NewLockerBumps) -> Result<()> {
        params.validate()?;

        self.locker.set_inner(Locker {
            base: self.base.key(),
            bump: bumps.locker,
            token_mint: self.token_mint.key(),
            locked_supply: 0,
            governor: self.governor.key(),
            params,
        });

        msg!(
            "Locker {} created for governor {}",
            self.locker.key(),
            self.governor.key()
        );
        emit!(NewLockerEvent {
            governor: self.governor.key(),
            locker: self.locker.key(),
            token_mint: self.token_mint.key(),
            params,
        });

        Ok(())
    }
}
