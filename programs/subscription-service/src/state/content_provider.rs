use crate::{constants::*, error::SubscriptionError};
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct ContentProvider {
    pub authority: Pubkey,
    pub payment_mint: Pubkey,
    pub subscription_price: u64,    // payment mint base units per period
    pub subscription_duration: u64, // seconds
    pub total_subscribers: u64,
    pub created_at: i64,
}

impl ContentProvider {
    pub fn validate_terms(subscription_price: u64, subscription_duration: u64) -> Result<()> {
        require!(subscription_price > 0, SubscriptionError::InvalidPrice);
        require!(
            subscription_duration > 0 && subscription_duration <= MAX_SUBSCRIPTION_DURATION,
            SubscriptionError::InvalidDuration
        );
        Ok(())
    }

    /// Applies new terms. Periods that were already paid for keep their bounds.
    pub fn set_terms(&mut self, subscription_price: u64, subscription_duration: u64) -> Result<()> {
        Self::validate_terms(subscription_price, subscription_duration)?;
        self.subscription_price = subscription_price;
        self.subscription_duration = subscription_duration;
        Ok(())
    }

    /// Period length as a signed offset for unix timestamp math.
    pub fn period_length(&self) -> Result<i64> {
        Ok(i64::try_from(self.subscription_duration)
            .map_err(|_| SubscriptionError::ArithmeticOverflow)?)
    }

    pub fn add_subscriber(&mut self) -> Result<()> {
        self.total_subscribers = self
            .total_subscribers
            .checked_add(1)
            .ok_or(SubscriptionError::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn remove_subscriber(&mut self) -> Result<()> {
        self.total_subscribers = self
            .total_subscribers
            .checked_sub(1)
            .ok_or(SubscriptionError::ArithmeticUnderflow)?;
        Ok(())
    }
}
