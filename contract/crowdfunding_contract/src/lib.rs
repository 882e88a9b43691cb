#![no_std]

mod events;
mod storage;
mod storage_types;
mod utils;


use soroban_sdk::{contract, contractimpl, log, Address, Env};

use events::{CampaignCreated, FundPledged, FundWithdrawn, RefundIssued};
use storage::*;
pub use storage_types::{Campaign, CampaignId, CrowdfundError};
use utils::{deadline_after_days, is_open};

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Configure the token held in custody for every campaign. One-time.
    pub fn initialize(e: Env, token: Address) -> Result<(), CrowdfundError> {
        if has_token(&e) {
            return Err(CrowdfundError::AlreadyInitialized);
        }

        write_token(&e, &token);
        write_campaign_count(&e, 0);
        log!(&e, "crowdfund initialized", token);

        Ok(())
    }

    /// Open a new campaign; the deadline is `duration_in_days` whole days
    /// from the current ledger time.
    pub fn create_campaign(
        e: Env,
        creator: Address,
        goal: i128,
        duration_in_days: u32,
    ) -> Result<CampaignId, CrowdfundError> {
        creator.require_auth();

        if goal <= 0 {
            return Err(CrowdfundError::InvalidGoal);
        }
        let deadline = deadline_after_days(&e, duration_in_days)?;

        let campaign_id = read_campaign_count(&e)
            .checked_add(1)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;

        let campaign = Campaign {
            creator: creator.clone(),
            goal,
            pledged_total: 0,
            deadline,
            settled: false,
        };

        write_campaign(&e, campaign_id, &campaign);
        write_campaign_count(&e, campaign_id);

        CampaignCreated {
            campaign_id,
            creator,
            goal,
            deadline,
        }
        .publish(&e);

        Ok(campaign_id)
    }

    /// Move `amount` from `contributor` into the ledger's custody and credit
    /// it to their pledge.
    pub fn pledge(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
        amount: i128,
    ) -> Result<(), CrowdfundError> {
        contributor.require_auth();

        let token = read_token(&e)?;
        let mut campaign = read_campaign(&e, campaign_id)?;

        if !is_open(&e, campaign.deadline) {
            return Err(CrowdfundError::CampaignEnded);
        }
        if amount <= 0 {
            return Err(CrowdfundError::ZeroPledge);
        }

        let prior_pledge = read_pledge(&e, campaign_id, &contributor);
        let new_pledge = prior_pledge
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        let prior = campaign.clone();
        campaign.pledged_total = campaign
            .pledged_total
            .checked_add(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;

        write_campaign(&e, campaign_id, &campaign);
        write_pledge(&e, campaign_id, &contributor, new_pledge);

        if let Err(err) = transfer(
            &e,
            &token,
            &contributor,
            &e.current_contract_address(),
            amount,
        ) {
            write_pledge(&e, campaign_id, &contributor, prior_pledge);
            write_campaign(&e, campaign_id, &prior);
            log!(&e, "pledge transfer rejected", campaign_id, contributor);
            return Err(err);
        }

        FundPledged {
            campaign_id,
            contributor,
            amount,
        }
        .publish(&e);

        Ok(())
    }

    /// Pay the whole pool to the creator once the deadline has passed and
    /// the goal was met. Returns the amount paid out.
    pub fn withdraw(
        e: Env,
        campaign_id: CampaignId,
        caller: Address,
    ) -> Result<i128, CrowdfundError> {
        caller.require_auth();

        let token = read_token(&e)?;
        let mut campaign = read_campaign(&e, campaign_id)?;

        if caller != campaign.creator {
            return Err(CrowdfundError::NotCreator);
        }
        if is_open(&e, campaign.deadline) {
            return Err(CrowdfundError::CampaignOngoing);
        }
        // Checked before the goal: a settled campaign's total is already zero.
        if campaign.settled {
            return Err(CrowdfundError::AlreadySettled);
        }
        if campaign.pledged_total < campaign.goal {
            return Err(CrowdfundError::GoalNotReached);
        }

        let prior = campaign.clone();
        let amount = campaign.pledged_total;
        campaign.settled = true;
        campaign.pledged_total = 0;
        write_campaign(&e, campaign_id, &campaign);

        // Latch and zeroed total are committed before the outbound call.
        if let Err(err) = transfer(&e, &token, &e.current_contract_address(), &caller, amount) {
            write_campaign(&e, campaign_id, &prior);
            log!(&e, "withdraw transfer rejected", campaign_id, amount);
            return Err(err);
        }

        log!(&e, "campaign settled", campaign_id, amount);
        FundWithdrawn {
            campaign_id,
            creator: caller,
            amount,
        }
        .publish(&e);

        Ok(amount)
    }

    /// Return the contributor's whole outstanding pledge from a campaign that
    /// ended under its goal. Returns the amount refunded.
    pub fn refund(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        contributor.require_auth();

        let token = read_token(&e)?;
        let mut campaign = read_campaign(&e, campaign_id)?;

        if is_open(&e, campaign.deadline) {
            return Err(CrowdfundError::CampaignOngoing);
        }
        if campaign.settled || campaign.pledged_total >= campaign.goal {
            return Err(CrowdfundError::CampaignSucceeded);
        }

        let amount = read_pledge(&e, campaign_id, &contributor);
        if amount <= 0 {
            return Err(CrowdfundError::NothingToRefund);
        }

        let prior = campaign.clone();
        campaign.pledged_total = campaign
            .pledged_total
            .checked_sub(amount)
            .ok_or(CrowdfundError::ArithmeticOverflow)?;
        write_pledge(&e, campaign_id, &contributor, 0);
        write_campaign(&e, campaign_id, &campaign);

        if let Err(err) = transfer(
            &e,
            &token,
            &e.current_contract_address(),
            &contributor,
            amount,
        ) {
            write_pledge(&e, campaign_id, &contributor, amount);
            write_campaign(&e, campaign_id, &prior);
            log!(&e, "refund transfer rejected", campaign_id, contributor);
            return Err(err);
        }

        RefundIssued {
            campaign_id,
            contributor,
            amount,
        }
        .publish(&e);

        Ok(amount)
    }

    /// Campaign record; fails `NotFound` for unknown IDs.
    pub fn get_campaign(e: Env, campaign_id: CampaignId) -> Result<Campaign, CrowdfundError> {
        read_campaign(&e, campaign_id)
    }

    /// Outstanding pledge of `contributor`; zero for everyone once the
    /// creator has withdrawn.
    pub fn get_pledge(
        e: Env,
        campaign_id: CampaignId,
        contributor: Address,
    ) -> Result<i128, CrowdfundError> {
        let campaign = read_campaign(&e, campaign_id)?;
        if campaign.settled {
            return Ok(0);
        }
        Ok(read_pledge(&e, campaign_id, &contributor))
    }

    pub fn campaign_count(e: Env) -> CampaignId {
        read_campaign_count(&e)
    }

    pub fn token(e: Env) -> Result<Address, CrowdfundError> {
        read_token(&e)
    }
}
