use soroban_sdk::{token, Address, Env};

use crate::storage_types::{
    Campaign, CampaignId, CrowdfundError, DataKey, PersistentKey, TTL_INSTANCE, TTL_PERSISTENT,
};

fn extend_instance(e: &Env) {
    e.storage().instance().extend_ttl(TTL_INSTANCE, TTL_INSTANCE);
}

fn extend_persistent(e: &Env, key: &PersistentKey) {
    e.storage().persistent().extend_ttl(key, TTL_PERSISTENT, TTL_PERSISTENT);
}

pub fn has_token(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::Token)
}

pub fn read_token(e: &Env) -> Result<Address, CrowdfundError> {
    e.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(CrowdfundError::NotInitialized)
}

pub fn write_token(e: &Env, token: &Address) {
    e.storage().instance().set(&DataKey::Token, token);
    extend_instance(e);
}

pub fn read_campaign_count(e: &Env) -> CampaignId {
    e.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

pub fn write_campaign_count(e: &Env, count: CampaignId) {
    e.storage().instance().set(&DataKey::CampaignCount, &count);
    extend_instance(e);
}

pub fn read_campaign(e: &Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
    e.storage()
        .persistent()
        .get(&PersistentKey::Campaign(campaign_id))
        .ok_or(CrowdfundError::NotFound)
}

pub fn write_campaign(e: &Env, campaign_id: CampaignId, campaign: &Campaign) {
    let key = PersistentKey::Campaign(campaign_id);
    e.storage().persistent().set(&key, campaign);
    extend_persistent(e, &key);
}

/// Outstanding pledge of `contributor`; absent entries read as zero.
pub fn read_pledge(e: &Env, campaign_id: CampaignId, contributor: &Address) -> i128 {
    e.storage()
        .persistent()
        .get(&PersistentKey::Pledge(campaign_id, contributor.clone()))
        .unwrap_or(0)
}

/// Zero balances are removed rather than stored.
pub fn write_pledge(e: &Env, campaign_id: CampaignId, contributor: &Address, amount: i128) {
    let key = PersistentKey::Pledge(campaign_id, contributor.clone());
    if amount == 0 {
        e.storage().persistent().remove(&key);
    } else {
        e.storage().persistent().set(&key, &amount);
        extend_persistent(e, &key);
    }
}

/// Moves `amount` of the ledger's token between two addresses, reporting a
/// rejected transfer instead of trapping so the caller can restore its state.
pub fn transfer(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), CrowdfundError> {
    let token_client = token::Client::new(e, token);
    match token_client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(CrowdfundError::TransferFailed),
    }
}
