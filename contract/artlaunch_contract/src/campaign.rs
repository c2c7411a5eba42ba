use soroban_sdk::{panic_with_error, token, Address, Env};

use crate::storage_types::*;

/// Pull the contribution amount from the contributor into contract custody.
///
/// Raised funds stay with the contract; there is no withdrawal path.
pub fn process_contribution(env: &Env, contributor: &Address, amount: i128) {
    let payment_token: Address = env
        .storage()
        .instance()
        .get(&DataKey::PaymentToken)
        .unwrap_or_else(|| panic_with_error!(env, ArtLaunchError::NotInitialized));

    let token_client = token::TokenClient::new(env, &payment_token);

    token_client.transfer(contributor, &env.current_contract_address(), &amount);
}

/// Mint reward tokens to the contributor at the fixed exchange rate.
///
/// Requires this contract to be the admin of the reward token.
pub fn mint_reward(env: &Env, contributor: &Address, amount: i128) {
    let reward_token: Address = env
        .storage()
        .instance()
        .get(&DataKey::RewardToken)
        .unwrap_or_else(|| panic_with_error!(env, ArtLaunchError::NotInitialized));

    let reward = amount
        .checked_mul(REWARD_RATE)
        .unwrap_or_else(|| panic_with_error!(env, ArtLaunchError::Overflow));

    token::StellarAssetClient::new(env, &reward_token).mint(contributor, &reward);
}

/// Record an accepted contribution against the campaign.
///
/// `goal_reached` flips at most once, the first time the running total
/// meets the funding goal.
pub fn apply_contribution(env: &Env, campaign: &mut Campaign, amount: i128) {
    campaign.amount_raised = campaign
        .amount_raised
        .checked_add(amount)
        .unwrap_or_else(|| panic_with_error!(env, ArtLaunchError::Overflow));

    if !campaign.goal_reached && campaign.amount_raised >= campaign.funding_goal {
        campaign.goal_reached = true;
    }
}
