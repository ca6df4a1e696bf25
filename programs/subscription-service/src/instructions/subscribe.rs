use crate::{constants::*, error::SubscriptionError, state::*};
use anchor_lang::prelude::*;
use anchor_spl::token::{transfer_checked, Mint, Token, TokenAccount, TransferChecked};

#[derive(Accounts)]
pub struct Subscribe<'info> {
    #[account(mut)]
    pub subscriber: Signer<'info>,

    #[account(mut)]
    pub content_provider: Account<'info, ContentProvider>,

    #[account(
        init,
        payer = subscriber,
        space = 8 + Subscription::INIT_SPACE,
        seeds = [
            SUBSCRIPTION_SEED.as_bytes(),
            content_provider.key().as_ref(),
            subscriber.key().as_ref()
        ],
        bump
    )]
    pub subscription: Account<'info, Subscription>,

    #[account(
        address = content_provider.payment_mint @ SubscriptionError::InvalidMint
    )]
    pub payment_mint: Account<'info, Mint>,

    #[account(
        mut,
        constraint = subscriber_token_account.owner == subscriber.key() @ SubscriptionError::InvalidTokenAccount,
        constraint = subscriber_token_account.mint == payment_mint.key() @ SubscriptionError::InvalidMint
    )]
    pub subscriber_token_account: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = provider_token_account.owner == content_provider.authority @ SubscriptionError::InvalidTokenAccount,
        constraint = provider_token_account.mint == payment_mint.key() @ SubscriptionError::InvalidMint
    )]
    pub provider_token_account: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

impl<'info> Subscribe<'info> {
    pub fn subscribe(&mut self, subscription_start: i64, bumps: &SubscribeBumps) -> Result<()> {
        let current_time = Clock::get()?.unix_timestamp;
        let period_length = self.content_provider.period_length()?;

        let subscription = Subscription::new(
            self.subscriber.key(),
            self.content_provider.key(),
            subscription_start,
            period_length,
            current_time,
            bumps.subscription,
        )?;

        // Pay the first period
        let price = self.content_provider.subscription_price;
        let cpi_accounts = TransferChecked {
            from: self.subscriber_token_account.to_account_info(),
            mint: self.payment_mint.to_account_info(),
            to: self.provider_token_account.to_account_info(),
            authority: self.subscriber.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        transfer_checked(cpi_ctx, price, self.payment_mint.decimals)?;

        self.subscription.set_inner(subscription);
        self.content_provider.add_subscriber()?;

        msg!(
            "Subscriber {} paid {} to provider {} (period {} - {})",
            self.subscriber.key(),
            price,
            self.content_provider.key(),
            self.subscription.start_time,
            self.subscription.end_time
        );

        Ok(())
    }
}
