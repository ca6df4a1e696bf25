use crate::{error::SubscriptionError, state::*};
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct AddContent<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        has_one = authority @ SubscriptionError::UnauthorizedAuthority
    )]
    pub content_provider: Account<'info, ContentProvider>,

    #[account(
        init,
        payer = authority,
        space = 8 + Content::INIT_SPACE
    )]
    pub content: Account<'info, Content>,

    pub system_program: Program<'info, System>,
}

impl<'info> AddContent<'info> {
    pub fn add_content(
        &mut self,
        content_id: String,
        content_hash: String,
        content_type: ContentType,
    ) -> Result<()> {
        Content::validate_fields(&content_id, &content_hash)?;

        self.content.set_inner(Content {
            provider: self.content_provider.key(),
            content_id,
            content_hash,
            content_type,
            timestamp: Clock::get()?.unix_timestamp,
        });

        msg!(
            "Provider {} published {:?} content '{}'",
            self.content_provider.key(),
            content_type,
            self.content.content_id
        );

        Ok(())
    }
}
