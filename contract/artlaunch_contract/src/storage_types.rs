use soroban_sdk::{contracterror, contracttype, Address, String};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    PaymentToken,
    RewardToken,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(u64),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[contracttype]
#[repr(u32)]
pub enum Category {
    Art = 0,
    Games = 1,
    Startup = 2,
}

/// A crowdfunding campaign stored on-chain.
///
/// `amount_raised` only ever grows; `goal_reached` and `thanked` flip to
/// `true` at most once and never back.
#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,
    pub title: String,
    pub description: String,
    pub prototype_url: String,
    pub experience: String,
    pub funding_goal: i128,
    pub deadline: u64,
    pub amount_raised: i128,
    pub category: Category,
    pub goal_reached: bool,
    pub thanked: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ArtLaunchError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    InvalidInput = 3,
    NotFound = 4,
    InvalidContribution = 5,
    CampaignExpired = 6,
    Unauthorized = 7,
    GoalNotReached = 8,
    AlreadyThanked = 9,
    Overflow = 10,
}

// Constants
pub const REWARD_RATE: i128 = 1000; // reward units minted per unit contributed
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
