use anchor_lang::prelude::*;

#[error_code]
pub enum SubscriptionError {
    // Subscription lifecycle
    #[msg("Invalid subscription start time")]
    InvalidStartTime,
    #[msg("Auto-renewal is disabled for this subscription")]
    AutoRenewalDisabled,
    #[msg("Subscription is still active")]
    SubscriptionStillActive,
    #[msg("Subscription is not active")]
    InactiveSubscription,

    // Provider terms
    #[msg("Subscription price must be greater than zero")]
    InvalidPrice,
    #[msg("Invalid subscription duration")]
    InvalidDuration,

    // Content validation
    #[msg("Content ID is too long")]
    ContentIdTooLong,
    #[msg("Content hash is too long")]
    ContentHashTooLong,
    #[msg("Content fields must not be empty")]
    EmptyContentField,

    // Authorization
    #[msg("Unauthorized authority")]
    UnauthorizedAuthority,
    #[msg("Unauthorized subscriber")]
    UnauthorizedSubscriber,
    #[msg("Subscription does not belong to this content's provider")]
    ProviderMismatch,

    // Token accounts
    #[msg("Token account owner does not match")]
    InvalidTokenAccount,
    #[msg("Token account mint does not match the provider's payment mint")]
    InvalidMint,

    // Math
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow,
}
