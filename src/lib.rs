#![no_std]

multiversx_sc::imports!();

pub mod errors;
pub mod events;
pub mod membership;
pub mod proposals;
pub mod storage;
pub mod types;

use errors::{ERR_EMPTY_NAME, ERR_QUORUM_OUT_OF_RANGE, ERR_ZERO_VOTING_PERIOD};
use types::DaoInfo;

// ============================================================
// Constants
// ============================================================

/// Lowest accepted quorum: 1% of total voting power.
pub const MIN_QUORUM_PERCENTAGE: u64 = 1;

/// Highest accepted quorum: every unit of voting power must participate.
pub const MAX_QUORUM_PERCENTAGE: u64 = 100;

/// Power the creator is seeded with when the organization is created.
pub const CREATOR_VOTING_POWER: u64 = 1;

// ============================================================
// Contract
// ============================================================

/// Registry of independent organizations. Each organization owns its own
/// membership and proposal tables; the registry only allocates ids and keeps
/// the append-only index of what was created and by whom.
#[multiversx_sc::contract]
pub trait DaoFactory:
    storage::StorageModule
    + events::EventsModule
    + membership::MembershipModule
    + proposals::ProposalsModule
{
    #[init]
    fn init(&self) {}

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: createDao
    // The caller becomes creator and sole initial member.
    // ========================================================

    #[endpoint(createDao)]
    fn create_dao(&self, name: ManagedBuffer, voting_period: u64, quorum_percentage: u64) -> u64 {
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(voting_period > 0, ERR_ZERO_VOTING_PERIOD);
        require!(
            (MIN_QUORUM_PERCENTAGE..=MAX_QUORUM_PERCENTAGE).contains(&quorum_percentage),
            ERR_QUORUM_OUT_OF_RANGE
        );

        let creator = self.blockchain().get_caller();
        let timestamp = self.blockchain().get_block_timestamp();
        let dao_id = self.dao_ids().len() as u64 + 1;

        let dao = DaoInfo {
            id: dao_id,
            creator: creator.clone(),
            name,
            voting_period,
            quorum_percentage,
            created_at: timestamp,
        };

        self.daos(dao_id).set(&dao);
        self.dao_ids().push(&dao_id);
        self.daos_by_creator(&creator).push(&dao_id);

        self.insert_member(
            dao_id,
            &creator,
            &BigUint::from(CREATOR_VOTING_POWER),
            timestamp,
        );

        self.dao_created_event(
            dao_id,
            &creator,
            voting_period,
            quorum_percentage,
            timestamp,
            &dao.name,
        );

        dao_id
    }

    // ========================================================
    // VIEWS — registry index
    // ========================================================

    #[view(getAllDaos)]
    fn get_all_daos(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for dao_id in self.dao_ids().iter() {
            result.push(dao_id);
        }
        result
    }

    #[view(getDaosByCreator)]
    fn get_daos_by_creator(&self, creator: ManagedAddress) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        for dao_id in self.daos_by_creator(&creator).iter() {
            result.push(dao_id);
        }
        result
    }

    #[view(getDaoCount)]
    fn get_dao_count(&self) -> u64 {
        self.dao_ids().len() as u64
    }

    #[view(getDaoInfo)]
    fn get_dao_info(&self, dao_id: u64) -> DaoInfo<Self::Api> {
        self.require_dao_exists(dao_id)
    }

    /// (active member count, proposal count, live total voting power)
    #[view(getDaoStats)]
    fn get_dao_stats(&self, dao_id: u64) -> MultiValue3<u64, u64, BigUint> {
        self.require_dao_exists(dao_id);
        let member_count = self.active_members(dao_id).len() as u64;
        let proposal_count = self.proposal_count(dao_id).get();
        let total_voting_power = self.live_voting_power(dao_id);
        (member_count, proposal_count, total_voting_power).into()
    }
}
