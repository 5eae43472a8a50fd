use anchor_lang::prelude::*;
use crate::{errors::*, events::*, state::*};

// Set Electorate Instruction
//
// Swaps the voting body. Smart wallet only.

#[derive(Accounts)]
pub struct SetElectorate<'info> {
    #[account(
        mut,
        has_one = smart_wallet @ GovernError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    pub smart_wallet: Signer<'info>,
}

impl<'info> SetElectorate<'info> {
    pub fn set_electorate(&mut self, new_electorate: Pubkey) -> Result<()> {
        let prev_electorate = self.governor.electorate;
        self.governor.electorate = new_electorate;

        msg!(
            "Governor {} electorate {} -> {}",
            self.governor.key(),
            prev_electorate,
            new_electorate
        );
        emit!(GovernorSetElectorateEvent {
            governor: self.governor.key(),
            prev_electorate,
            new_electorate,
        });

        Ok(())
    }
}
