multiversx_sc::imports!();

use crate::errors::ERR_DAO_NOT_FOUND;
use crate::types::{DaoInfo, Member, Proposal, VoteRecord};

#[multiversx_sc::module]
pub trait StorageModule {
    fn require_dao_exists(&self, dao_id: u64) -> DaoInfo<Self::Api> {
        require!(!self.daos(dao_id).is_empty(), ERR_DAO_NOT_FOUND);
        self.daos(dao_id).get()
    }

    fn is_active(&self, dao_id: u64, account: &ManagedAddress) -> bool {
        self.active_members(dao_id).contains(account)
    }

    /// Summed over live membership on every call, never cached.
    fn live_voting_power(&self, dao_id: u64) -> BigUint {
        let mut total = BigUint::zero();
        for account in self.active_members(dao_id).iter() {
            total += &self.members(dao_id, &account).get().voting_power;
        }
        total
    }

    // ── Registry ──

    #[storage_mapper("daos")]
    fn daos(&self, dao_id: u64) -> SingleValueMapper<DaoInfo<Self::Api>>;

    /// Append-only; its length is the number of organizations created.
    #[storage_mapper("daoIds")]
    fn dao_ids(&self) -> VecMapper<u64>;

    #[storage_mapper("daosByCreator")]
    fn daos_by_creator(&self, creator: &ManagedAddress) -> VecMapper<u64>;

    // ── Membership ──

    #[storage_mapper("members")]
    fn members(&self, dao_id: u64, account: &ManagedAddress) -> SingleValueMapper<Member<Self::Api>>;

    #[storage_mapper("activeMembers")]
    fn active_members(&self, dao_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    // ── Proposals ──

    #[storage_mapper("proposalCount")]
    fn proposal_count(&self, dao_id: u64) -> SingleValueMapper<u64>;

    #[storage_mapper("proposals")]
    fn proposals(&self, dao_id: u64, proposal_id: u64) -> SingleValueMapper<Proposal<Self::Api>>;

    #[storage_mapper("voters")]
    fn voters(&self, dao_id: u64, proposal_id: u64) -> UnorderedSetMapper<ManagedAddress>;

    #[storage_mapper("voteRecords")]
    fn vote_records(&self, dao_id: u64, proposal_id: u64) -> VecMapper<VoteRecord<Self::Api>>;
}
