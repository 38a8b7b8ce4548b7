multiversx_sc::imports!();

use crate::errors::*;
use crate::types::Member;

#[multiversx_sc::module]
pub trait MembershipModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: addMember
    // Inserts a new member or reactivates a removed one.
    // ========================================================

    #[endpoint(addMember)]
    fn add_member(&self, dao_id: u64, account: ManagedAddress, voting_power: BigUint) {
        self.require_dao_exists(dao_id);
        let caller = self.blockchain().get_caller();
        require!(self.is_active(dao_id, &caller), ERR_NOT_ACTIVE_MEMBER);
        require!(!self.is_active(dao_id, &account), ERR_ALREADY_MEMBER);
        require!(voting_power > 0u64, ERR_ZERO_VOTING_POWER);

        let timestamp = self.blockchain().get_block_timestamp();
        self.insert_member(dao_id, &account, &voting_power, timestamp);

        self.member_added_event(dao_id, &account, &voting_power);
    }

    // ========================================================
    // ENDPOINT: removeMember
    // Soft delete. Votes already cast stay in the tallies.
    // ========================================================

    #[endpoint(removeMember)]
    fn remove_member(&self, dao_id: u64, account: ManagedAddress) {
        let dao = self.require_dao_exists(dao_id);
        require!(account != dao.creator, ERR_REMOVE_CREATOR);

        let caller = self.blockchain().get_caller();
        require!(self.is_active(dao_id, &caller), ERR_NOT_ACTIVE_MEMBER);
        require!(!self.members(dao_id, &account).is_empty(), ERR_MEMBER_NOT_FOUND);
        require!(self.is_active(dao_id, &account), ERR_MEMBER_INACTIVE);

        self.members(dao_id, &account).update(|member| member.active = false);
        self.active_members(dao_id).swap_remove(&account);

        self.member_removed_event(dao_id, &account);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn insert_member(
        &self,
        dao_id: u64,
        account: &ManagedAddress,
        voting_power: &BigUint,
        timestamp: u64,
    ) {
        let member = Member {
            account: account.clone(),
            voting_power: voting_power.clone(),
            joined_at: timestamp,
            active: true,
        };
        self.members(dao_id, account).set(&member);
        self.active_members(dao_id).insert(account.clone());
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getTotalVotingPower)]
    fn get_total_voting_power(&self, dao_id: u64) -> BigUint {
        self.require_dao_exists(dao_id);
        self.live_voting_power(dao_id)
    }

    #[view(getMember)]
    fn get_member(&self, dao_id: u64, account: ManagedAddress) -> Member<Self::Api> {
        self.require_dao_exists(dao_id);
        require!(!self.members(dao_id, &account).is_empty(), ERR_MEMBER_NOT_FOUND);
        self.members(dao_id, &account).get()
    }

    #[view(isActiveMember)]
    fn is_active_member(&self, dao_id: u64, account: ManagedAddress) -> bool {
        self.require_dao_exists(dao_id);
        self.is_active(dao_id, &account)
    }

    #[view(getMemberCount)]
    fn get_member_count(&self, dao_id: u64) -> u64 {
        self.require_dao_exists(dao_id);
        self.active_members(dao_id).len() as u64
    }

    #[view(getMembers)]
    fn get_members(&self, dao_id: u64, from: u64, count: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_dao_exists(dao_id);
        let mut result = MultiValueEncoded::new();
        let end = from.saturating_add(count);

        for (idx, member) in self.active_members(dao_id).iter().enumerate() {
            let idx = idx as u64;
            if idx >= end {
                break;
            }
            if idx >= from {
                result.push(member);
            }
        }
        result
    }
}
