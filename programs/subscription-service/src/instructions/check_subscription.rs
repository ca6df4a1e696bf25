use crate::{constants::*, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CheckSubscription<'info> {
    /// The subscriber whose status we're checking
    pub subscriber: Signer<'info>,

    pub content_provider: Account<'info, ContentProvider>,

    /// Absent when the subscriber never subscribed or already cancelled
    #[account(
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            content_provider.key().as_ref(),
            subscriber.key().as_ref()
        ],
        bump,
    )]
    pub subscription: Option<Account<'info, Subscription>>,
}

impl<'info> CheckSubscription<'info> {
    pub fn check_subscription(&self) -> Result<bool> {
        let current_time = Clock::get()?.unix_timestamp;

        let is_active = match &self.subscription {
            Some(subscription) => subscription.is_active_at(current_time),
            None => false,
        };

        msg!(
            "Subscriber {} to provider {}: {}",
            self.subscriber.key(),
            self.content_provider.key(),
            if is_active { "ACTIVE" } else { "INACTIVE" }
        );

        Ok(is_active)
    }
}
