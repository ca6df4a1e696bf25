use anchor_lang::prelude::*;

#[constant]
pub const SUBSCRIPTION_SEED: &str = "subscription";

// Content limits (bytes, excluding the 4-byte length prefix)
pub const MAX_CONTENT_ID_LENGTH: usize = 60;
pub const MAX_CONTENT_HASH_LENGTH: usize = 60;

// Subscription terms
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const MAX_SUBSCRIPTION_DURATION: u64 = 3_650 * SECONDS_PER_DAY; // 10 years
