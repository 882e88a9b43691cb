use soroban_sdk::Env;

use crate::storage_types::{CrowdfundError, SECONDS_PER_DAY};

/// Absolute deadline `days` whole days after the current ledger time.
pub fn deadline_after_days(env: &Env, days: u32) -> Result<u64, CrowdfundError> {
    (days as u64)
        .checked_mul(SECONDS_PER_DAY)
        .and_then(|secs| env.ledger().timestamp().checked_add(secs))
        .ok_or(CrowdfundError::InvalidDuration)
}

/// Pledging is open strictly before the deadline.
pub fn is_open(env: &Env, deadline: u64) -> bool {
    env.ledger().timestamp() < deadline
}
