#![no_std]

mod campaign;
mod events;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, panic_with_error, Address, Env, String};
use storage_types::*;

pub use campaign::*;
pub use events::{CampaignCreatedEvent, GoalAchievedEvent};
pub use utils::*;

#[contract]
pub struct ArtLaunchContract;

#[contractimpl]
impl ArtLaunchContract {
    /// Bind the ledger to its payment and reward token contracts.
    ///
    /// The reward token must be a Stellar asset contract whose admin is
    /// transferred to this contract after deployment, so contributions can
    /// mint rewards.
    pub fn initialize(env: Env, payment_token: Address, reward_token: Address) {
        if env.storage().instance().has(&DataKey::PaymentToken) {
            panic_with_error!(&env, ArtLaunchError::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::PaymentToken, &payment_token);
        env.storage().instance().set(&DataKey::RewardToken, &reward_token);
        env.storage().instance().set(&DataKey::CampaignCount, &0u64);

        extend_instance(&env);
    }

    /// Create a new campaign and return its id.
    ///
    /// Ids are sequential starting at 1; campaigns are never deleted.
    pub fn create_campaign(
        env: Env,
        creator: Address,
        title: String,
        description: String,
        prototype_url: String,
        experience: String,
        funding_goal: i128,
        duration_days: u32,
        category: Category,
    ) -> u64 {
        creator.require_auth();
        check_initialized(&env);
        validate_goal(&env, funding_goal);
        validate_duration(&env, duration_days);

        let count: u64 = env.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0);
        let campaign_id = count + 1;
        let deadline = env.ledger().timestamp() + days_to_seconds(duration_days);

        let campaign = Campaign {
            creator,
            title: title.clone(),
            description,
            prototype_url,
            experience,
            funding_goal,
            deadline,
            amount_raised: 0,
            category,
            goal_reached: false,
            thanked: false,
        };

        env.storage().persistent().set(&PersistentKey::Campaign(campaign_id), &campaign);
        env.storage().instance().set(&DataKey::CampaignCount, &campaign_id);

        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));
        extend_instance(&env);

        events::emit_campaign_created(
            &env,
            events::CampaignCreatedEvent {
                campaign_id,
                title,
                goal: funding_goal,
            },
        );

        campaign_id
    }

    /// Contribute to an open campaign.
    ///
    /// Transfers the payment token into contract custody and mints reward
    /// tokens to the contributor at the fixed rate.
    pub fn contribute(env: Env, contributor: Address, campaign_id: u64, amount: i128) {
        contributor.require_auth();
        check_initialized(&env);

        let mut campaign = get_campaign(&env, campaign_id);

        if amount <= 0 {
            panic_with_error!(&env, ArtLaunchError::InvalidContribution);
        }

        if deadline_passed(&env, campaign.deadline) {
            panic_with_error!(&env, ArtLaunchError::CampaignExpired);
        }

        campaign::process_contribution(&env, &contributor, amount);
        campaign::apply_contribution(&env, &mut campaign, amount);

        env.storage().persistent().set(&PersistentKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));

        campaign::mint_reward(&env, &contributor, amount);
    }

    /// Creator-only acknowledgment once the funding goal has been reached.
    pub fn send_thanks(env: Env, caller: Address, campaign_id: u64, message: String) {
        caller.require_auth();
        check_initialized(&env);

        let mut campaign = get_campaign(&env, campaign_id);

        if caller != campaign.creator {
            panic_with_error!(&env, ArtLaunchError::Unauthorized);
        }

        if !campaign.goal_reached {
            panic_with_error!(&env, ArtLaunchError::GoalNotReached);
        }

        if campaign.thanked {
            panic_with_error!(&env, ArtLaunchError::AlreadyThanked);
        }

        campaign.thanked = true;

        env.storage().persistent().set(&PersistentKey::Campaign(campaign_id), &campaign);
        extend_persistent(&env, &PersistentKey::Campaign(campaign_id));

        events::emit_goal_achieved(
            &env,
            events::GoalAchievedEvent {
                campaign_id,
                message,
            },
        );
    }

    /// View functions
    pub fn get_campaign(env: Env, campaign_id: u64) -> Campaign {
        get_campaign(&env, campaign_id)
    }

    pub fn campaign_count(env: Env) -> u64 {
        env.storage().instance().get(&DataKey::CampaignCount).unwrap_or(0)
    }

    pub fn get_payment_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::PaymentToken)
            .unwrap_or_else(|| panic_with_error!(&env, ArtLaunchError::NotInitialized))
    }

    pub fn get_reward_token(env: Env) -> Address {
        env.storage()
            .instance()
            .get(&DataKey::RewardToken)
            .unwrap_or_else(|| panic_with_error!(&env, ArtLaunchError::NotInitialized))
    }
}

// Helper functions
fn extend_instance(env: &Env) {
    env.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(env: &Env, key: &PersistentKey) {
    env.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

fn check_initialized(env: &Env) {
    if !env.storage().instance().has(&DataKey::PaymentToken) {
        panic_with_error!(env, ArtLaunchError::NotInitialized);
    }
}

fn get_campaign(env: &Env, campaign_id: u64) -> Campaign {
    env.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .unwrap_or_else(|| panic_with_error!(env, ArtLaunchError::NotFound))
}
