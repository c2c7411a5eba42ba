use soroban_sdk::{contracttype, String, Symbol};

#[contracttype]
#[derive(Clone)]
pub struct CampaignCreatedEvent {
    pub campaign_id: u64,
    pub title: String,
    pub goal: i128,
}

#[contracttype]
#[derive(Clone)]
pub struct GoalAchievedEvent {
    pub campaign_id: u64,
    pub message: String,
}

pub fn emit_campaign_created(
    env: &soroban_sdk::Env,
    event: CampaignCreatedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "campaign_created"),),
        event,
    );
}

pub fn emit_goal_achieved(
    env: &soroban_sdk::Env,
    event: GoalAchievedEvent,
) {
    env.events().publish(
        (Symbol::new(env, "goal_achieved"),),
        event,
    );
}
