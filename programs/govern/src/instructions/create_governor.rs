use anchor_lang::prelude::*;
use crate::{constants::*, events::*, state::*};

// Create Governor Instruction
//
// Creates the governor PDA for a base keypair.
// The electorate is usually a Locker PDA from the locked-voter program,
// derived ahead of time so both accounts can point at each other.
// The smart wallet is only recorded; it is the sole authority for later
// parameter and electorate changes.

#[derive(Accounts)]
pub struct CreateGovernor<'info> {
    // Base keypair, signs to prove ownership of the derivation seed
    pub base: Signer<'info>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + Governor::INIT_SPACE,
        seeds = [GOVERNOR, base.key().as_ref()],
        bump,
    )]
    pub governor: Account<'info, Governor>,

    /// CHECK: Executor of queued proposals, only its address is stored
    pub smart_wallet: UncheckedAccount<'info>,

    #[account(mut)]
    pub payer: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateGovernor<'info> {
    pub fn create_governor(
        &mut self,
        electorate: Pubkey,
        params: GovernanceParameters,
        bumps: &CreateGovernorBumps,
    ) -> Result<()> {
        params.validate()?;

        self.governor.set_inner(Governor {
            base: self.base.key(),
            bump: bumps.governor,
            proposal_count: 0,
            electorate,
            smart_wallet: self.smart_wallet.key(),
            params,
        });

        msg!(
            "Governor {} created, electorate {}",
            self.governor.key(),
            electorate
        );
        emit!(GovernorCreateEvent {
            governor: self.governor.key(),
            electorate,
            smart_wallet: self.smart_wallet.key(),
            params,
        });

        Ok(())
    }
}
