use crate::{constants::*, error::SubscriptionError};
use anchor_lang::prelude::*;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentType {
    Video,
    Article,
    Audio,
    Other,
}

#[account]
#[derive(InitSpace)]
pub struct Content {
    pub provider: Pubkey, // ContentProvider account
    #[max_len(60)] // MAX_CONTENT_ID_LENGTH
    pub content_id: String,
    #[max_len(60)] // MAX_CONTENT_HASH_LENGTH
    pub content_hash: String,
    pub content_type: ContentType,
    pub timestamp: i64,
}

impl Content {
    pub fn validate_fields(content_id: &str, content_hash: &str) -> Result<()> {
        require!(
            !content_id.is_empty() && !content_hash.is_empty(),
            SubscriptionError::EmptyContentField
        );
        require!(
            content_id.len() <= MAX_CONTENT_ID_LENGTH,
            SubscriptionError::ContentIdTooLong
        );
        require!(
            content_hash.len() <= MAX_CONTENT_HASH_LENGTH,
            SubscriptionError::ContentHashTooLong
        );
        Ok(())
    }
}
