use soroban_sdk::{panic_with_error, Env};

use crate::storage_types::ArtLaunchError;

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * 86400
}

/// Check whether the campaign deadline has passed
pub fn deadline_passed(env: &Env, deadline: u64) -> bool {
    env.ledger().timestamp() >= deadline
}

/// Validate funding goal is positive
pub fn validate_goal(env: &Env, goal: i128) {
    if goal <= 0 {
        panic_with_error!(env, ArtLaunchError::InvalidInput);
    }
}

/// Validate duration is at least one day
pub fn validate_duration(env: &Env, days: u32) {
    if days == 0 {
        panic_with_error!(env, ArtLaunchError::InvalidInput);
    }
}
