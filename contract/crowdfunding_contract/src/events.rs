use soroban_sdk::{contractevent, Address};

use crate::storage_types::CampaignId;

#[contractevent(topics = ["crowdfund", "campaign_created"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub goal: i128,
    pub deadline: u64,
}

#[contractevent(topics = ["crowdfund", "fund_pledged"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundPledged {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}

#[contractevent(topics = ["crowdfund", "fund_withdrawn"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FundWithdrawn {
    pub campaign_id: CampaignId,
    pub creator: Address,
    pub amount: i128,
}

#[contractevent(topics = ["crowdfund", "refund_issued"])]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundIssued {
    pub campaign_id: CampaignId,
    pub contributor: Address,
    pub amount: i128,
}
