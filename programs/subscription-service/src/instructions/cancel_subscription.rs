use crate::{constants::*, error::SubscriptionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct CancelSubscription<'info> {
    #[account(mut)]
    pub subscriber: Signer<'info>,

    #[account(mut)]
    pub content_provider: Account<'info, ContentProvider>,

    #[account(
        mut,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            content_provider.key().as_ref(),
            subscriber.key().as_ref()
        ],
        bump = subscription.bump,
        has_one = subscriber @ SubscriptionError::UnauthorizedSubscriber,
        close = subscriber
    )]
    pub subscription: Account<'info, Subscription>,
}

impl<'info> CancelSubscription<'info> {
    pub fn cancel_subscription(&mut self) -> Result<()> {
        self.content_provider.remove_subscriber()?;

        msg!(
            "Subscriber {} cancelled subscription to provider {} (paid through {})",
            self.subscriber.key(),
            self.content_provider.key(),
            self.subscription.end_time
        );

        Ok(())
    }
}
