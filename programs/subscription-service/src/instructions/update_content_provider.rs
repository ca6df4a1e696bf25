use crate::{error::SubscriptionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct UpdateContentProvider<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ SubscriptionError::UnauthorizedAuthority
    )]
    pub content_provider: Account<'info, ContentProvider>,
}

impl<'info> UpdateContentProvider<'info> {
    pub fn update_content_provider(
        &mut self,
        subscription_price: u64,
        subscription_duration: u64,
    ) -> Result<()> {
        let content_provider = &mut self.content_provider;
        let (old_price, old_duration) = (
            content_provider.subscription_price,
            content_provider.subscription_duration,
        );

        content_provider.set_terms(subscription_price, subscription_duration)?;

        msg!(
            "Content provider {} terms updated: price {} -> {}, duration {}s -> {}s",
            content_provider.key(),
            old_price,
            subscription_price,
            old_duration,
            subscription_duration
        );

        Ok(())
    }
}
