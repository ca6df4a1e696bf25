use crate::{error::SubscriptionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ToggleAutoRenewal<'info> {
    pub subscriber: Signer<'info>,

    #[account(
        mut,
        has_one = subscriber @ SubscriptionError::UnauthorizedSubscriber
    )]
    pub subscription: Account<'info, Subscription>,
}

impl<'info> ToggleAutoRenewal<'info> {
    pub fn toggle_auto_renewal(&mut self) -> Result<()> {
        let enabled = self.subscription.toggle_auto_renewal();

        msg!(
            "Auto-renewal for subscription {} is now {}",
            self.subscription.key(),
            if enabled { "ON" } else { "OFF" }
        );

        Ok(())
    }
}
