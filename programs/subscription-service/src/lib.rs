pub mod constants;
pub mod error;
pub mod instructions;
pub mod state;

use anchor_lang::prelude::*;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("GT8F97mEorgZ5PJzcFGgbZuQi9sNnmhdxydvZtzNkGb5");

#[program]
pub mod subscription_service {
    use super::*;

    pub fn initialize_content_provider(
        ctx: Context<InitializeContentProvider>,
        subscription_price: u64,
        subscription_duration: u64, // seconds
    ) -> Result<()> {
        ctx.accounts
            .initialize_content_provider(subscription_price, subscription_duration)
    }

    pub fn update_content_provider(
        ctx: Context<UpdateContentProvider>,
        subscription_price: u64,
        subscription_duration: u64,
    ) -> Result<()> {
        ctx.accounts
            .update_content_provider(subscription_price, subscription_duration)
    }

    pub fn subscribe(ctx: Context<Subscribe>, subscription_start: i64) -> Result<()> {
        ctx.accounts.subscribe(subscription_start, &ctx.bumps)
    }

    pub fn process_renewal(ctx: Context<ProcessRenewal>) -> Result<()> {
        ctx.accounts.process_renewal()
    }

    pub fn toggle_auto_renewal(ctx: Context<ToggleAutoRenewal>) -> Result<()> {
        ctx.accounts.toggle_auto_renewal()
    }

    pub fn cancel_subscription(ctx: Context<CancelSubscription>) -> Result<()> {
        ctx.accounts.cancel_subscription()
    }

    pub fn add_content(
        ctx: Context<AddContent>,
        content_id: String,
        content_hash: String,
        content_type: ContentType,
    ) -> Result<()> {
        ctx.accounts
            .add_content(content_id, content_hash, content_type)
    }

    pub fn access_content(ctx: Context<AccessContent>) -> Result<()> {
        ctx.accounts.access_content()
    }

    pub fn check_subscription(ctx: Context<CheckSubscription>) -> Result<bool> {
        ctx.accounts.check_subscription()
    }
}
