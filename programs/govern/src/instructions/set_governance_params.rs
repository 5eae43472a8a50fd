use anchor_lang::prelude::*;
use crate::{errors::*, events::*, state::*};

// Set Governance Params Instruction
//
// Only the smart wallet may change params, i.e. only as the result of a
// proposal that passed. Proposals already active keep their snapshots.

#[derive(Accounts)]
pub struct SetGovernanceParams<'info> {
    #[account(
        mut,
        has_one = smart_wallet @ GovernError::Unauthorized,
    )]
    pub governor: Account<'info, Governor>,

    pub smart_wallet: Signer<'info>,
}

impl<'info> SetGovernanceParams<'info> {
    pub fn set_governance_params(&mut self, params: GovernanceParameters) -> Result<()> {
        params.validate()?;

        let prev_params = self.governor.params;
        self.governor.params = params;

        msg!("Governor {} params updated", self.governor.key());
        emit!(GovernorSetParamsEvent {
            governor: self.governor.key(),
            prev_params,
            params,
        });

        Ok(())
    }
}
