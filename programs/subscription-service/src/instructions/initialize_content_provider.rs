use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

#[derive(Accounts)]
pub struct InitializeContentProvider<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + ContentProvider::INIT_SPACE
    )]
    pub content_provider: Account<'info, ContentProvider>,

    /// Mint every subscription payment to this provider is made in
    pub payment_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeContentProvider<'info> {
    pub fn initialize_content_provider(
        &mut self,
        subscription_price: u64,
        subscription_duration: u64,
    ) -> Result<()> {
        ContentProvider::validate_terms(subscription_price, subscription_duration)?;

        self.content_provider.set_inner(ContentProvider {
            authority: self.authority.key(),
            payment_mint: self.payment_mint.key(),
            subscription_price,
            subscription_duration,
            total_subscribers: 0,
            created_at: Clock::get()?.unix_timestamp,
        });

        msg!(
            "Content provider {} initialized by {}",
            self.content_provider.key(),
            self.authority.key()
        );
        msg!(
            "Terms: {} units of mint {} every {} seconds",
            subscription_price,
            self.payment_mint.key(),
            subscription_duration
        );

        Ok(())
    }
}
