use soroban_sdk::{contracterror, contracttype, Address};

// Storage keys for instance data
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Token,
    CampaignCount,
}

// Storage keys for persistent data
#[derive(Clone)]
#[contracttype]
pub enum PersistentKey {
    Campaign(CampaignId),
    Pledge(CampaignId, Address),
}

pub type CampaignId = u64;

/// One fundraising unit. `creator`, `goal` and `deadline` never change after
/// creation; `pledged_total` and `settled` move only through pledge, withdraw
/// and refund.
#[derive(Clone, Debug, PartialEq)]
#[contracttype]
pub struct Campaign {
    pub creator: Address,
    pub goal: i128,
    pub pledged_total: i128,
    pub deadline: u64,
    pub settled: bool,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CrowdfundError {
    InvalidGoal = 1,
    ZeroPledge = 2,
    CampaignEnded = 3,
    CampaignOngoing = 4,
    NotCreator = 5,
    GoalNotReached = 6,
    CampaignSucceeded = 7,
    AlreadySettled = 8,
    NothingToRefund = 9,
    NotFound = 10,
    TransferFailed = 11,
    AlreadyInitialized = 12,
    NotInitialized = 13,
    InvalidDuration = 14,
    ArithmeticOverflow = 15,
}

// Constants
pub const SECONDS_PER_DAY: u64 = 86_400;
pub const TTL_INSTANCE: u32 = 17280 * 30; // 30 days
pub const TTL_PERSISTENT: u32 = 17280 * 90; // 90 days
