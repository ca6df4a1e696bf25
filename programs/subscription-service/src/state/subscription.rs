use crate::error::SubscriptionError;
use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace, Debug)]
pub struct Subscription {
    pub subscriber: Pubkey,
    pub provider: Pubkey, // ContentProvider account
    pub start_time: i64,
    pub end_time: i64,
    pub last_payment: i64,
    pub auto_renewal: bool,
    pub bump: u8,
}

impl Subscription {
    /// Builds the first paid period. `start_time` may lie in the future but never in the past.
    pub fn new(
        subscriber: Pubkey,
        provider: Pubkey,
        start_time: i64,
        period_length: i64,
        now: i64,
        bump: u8,
    ) -> Result<Self> {
        require!(start_time >= now, SubscriptionError::InvalidStartTime);

        let end_time = start_time
            .checked_add(period_length)
            .ok_or(SubscriptionError::ArithmeticOverflow)?;

        Ok(Self {
            subscriber,
            provider,
            start_time,
            end_time,
            last_payment: now,
            auto_renewal: true,
            bump,
        })
    }

    /// Both period bounds are inclusive.
    pub fn is_active_at(&self, now: i64) -> bool {
        now >= self.start_time && now <= self.end_time
    }

    /// Moves the subscription to the next period, starting where the last one ended.
    pub fn renew(&mut self, period_length: i64, now: i64) -> Result<()> {
        require!(self.auto_renewal, SubscriptionError::AutoRenewalDisabled);
        require!(
            now >= self.end_time,
            SubscriptionError::SubscriptionStillActive
        );

        let next_end = self
            .end_time
            .checked_add(period_length)
            .ok_or(SubscriptionError::ArithmeticOverflow)?;

        self.start_time = self.end_time;
        self.end_time = next_end;
        self.last_payment = now;

        Ok(())
    }

    pub fn toggle_auto_renewal(&mut self) -> bool {
        self.auto_renewal = !self.auto_renewal;
        self.auto_renewal
    }
}
