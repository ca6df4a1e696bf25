use crate::{error::SubscriptionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AccessContent<'info> {
    pub subscriber: Signer<'info>,

    pub content: Account<'info, Content>,

    #[account(
        has_one = subscriber @ SubscriptionError::UnauthorizedSubscriber,
        constraint = subscription.provider == content.provider @ SubscriptionError::ProviderMismatch
    )]
    pub subscription: Account<'info, Subscription>,
}

impl<'info> AccessContent<'info> {
    pub fn access_content(&self) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;

        require!(
            self.subscription.is_active_at(current_time),
            SubscriptionError::InactiveSubscription
        );

        msg!(
            "Subscriber {} accessed content '{}'",
            self.subscriber.key(),
            self.content.content_id
        );

        Ok(())
    }
}
