multiversx_sc::imports!();

use crate::errors::*;
use crate::types::{Proposal, ProposalStatus, VoteRecord};

#[multiversx_sc::module]
pub trait ProposalsModule: crate::storage::StorageModule + crate::events::EventsModule {
    // ========================================================
    // ENDPOINT: createProposal
    // Any active member can propose. The window is fixed here.
    // ========================================================

    #[endpoint(createProposal)]
    fn create_proposal(&self, dao_id: u64, description: ManagedBuffer) -> u64 {
        let dao = self.require_dao_exists(dao_id);
        let caller = self.blockchain().get_caller();
        require!(self.is_active(dao_id, &caller), ERR_NOT_ACTIVE_MEMBER);

        let proposal_id = self.proposal_count(dao_id).get() + 1u64;
        let timestamp = self.blockchain().get_block_timestamp();

        let proposal = Proposal {
            id: proposal_id,
            description,
            proposer: caller.clone(),
            for_votes: BigUint::zero(),
            against_votes: BigUint::zero(),
            start_time: timestamp,
            end_time: timestamp.saturating_add(dao.voting_period),
            executed: false,
            passed: false,
        };

        self.proposals(dao_id, proposal_id).set(&proposal);
        self.proposal_count(dao_id).set(proposal_id);

        self.proposal_created_event(dao_id, proposal_id, &caller, &proposal.description);

        proposal_id
    }

    // ========================================================
    // ENDPOINT: vote
    // One vote per member per proposal, weighted by the
    // caller's power at the time of the call.
    // ========================================================

    #[endpoint(vote)]
    fn vote(&self, dao_id: u64, proposal_id: u64, support: bool) {
        self.require_dao_exists(dao_id);
        let caller = self.blockchain().get_caller();
        require!(self.is_active(dao_id, &caller), ERR_NOT_ACTIVE_MEMBER);
        require!(
            !self.proposals(dao_id, proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(dao_id, proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        require!(
            proposal.status_at(now) == ProposalStatus::Open,
            ERR_VOTING_CLOSED
        );
        require!(
            !self.voters(dao_id, proposal_id).contains(&caller),
            ERR_ALREADY_VOTED
        );

        let weight = self.members(dao_id, &caller).get().voting_power;
        if support {
            proposal.for_votes += &weight;
        } else {
            proposal.against_votes += &weight;
        }

        self.voters(dao_id, proposal_id).insert(caller.clone());
        self.vote_records(dao_id, proposal_id).push(&VoteRecord {
            voter: caller.clone(),
            support,
            weight: weight.clone(),
        });
        self.proposals(dao_id, proposal_id).set(&proposal);

        self.vote_cast_event(dao_id, proposal_id, &caller, support, &weight);
    }

    // ========================================================
    // ENDPOINT: execute
    // Open to any caller. Fixes the outcome exactly once,
    // measured against live voting power.
    // ========================================================

    #[endpoint(execute)]
    fn execute(&self, dao_id: u64, proposal_id: u64) -> bool {
        let dao = self.require_dao_exists(dao_id);
        require!(
            !self.proposals(dao_id, proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );

        let mut proposal = self.proposals(dao_id, proposal_id).get();
        let now = self.blockchain().get_block_timestamp();
        match proposal.status_at(now) {
            ProposalStatus::Open => sc_panic!(ERR_VOTING_NOT_ENDED),
            ProposalStatus::Executed => sc_panic!(ERR_ALREADY_EXECUTED),
            ProposalStatus::ClosedPendingExecution => {}
        }

        let total_voting_power = self.live_voting_power(dao_id);
        let passed = proposal.outcome(&total_voting_power, dao.quorum_percentage);

        proposal.executed = true;
        proposal.passed = passed;
        self.proposals(dao_id, proposal_id).set(&proposal);

        self.proposal_executed_event(dao_id, proposal_id, passed);

        passed
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(getProposal)]
    fn get_proposal(&self, dao_id: u64, proposal_id: u64) -> Proposal<Self::Api> {
        self.require_dao_exists(dao_id);
        require!(
            !self.proposals(dao_id, proposal_id).is_empty(),
            ERR_PROPOSAL_NOT_FOUND
        );
        self.proposals(dao_id, proposal_id).get()
    }

    #[view(getProposalStatus)]
    fn get_proposal_status(&self, dao_id: u64, proposal_id: u64) -> ProposalStatus {
        let now = self.blockchain().get_block_timestamp();
        self.get_proposal(dao_id, proposal_id).status_at(now)
    }

    #[view(getProposalCount)]
    fn get_proposal_count(&self, dao_id: u64) -> u64 {
        self.require_dao_exists(dao_id);
        self.proposal_count(dao_id).get()
    }

    #[view(getProposals)]
    fn get_proposals(
        &self,
        dao_id: u64,
        from: u64,
        count: u64,
    ) -> MultiValueEncoded<Proposal<Self::Api>> {
        self.require_dao_exists(dao_id);
        let mut result = MultiValueEncoded::new();
        if count == 0 {
            return result;
        }
        let total = self.proposal_count(dao_id).get();
        let start = if from == 0 { 1u64 } else { from };
        if start > total {
            return result;
        }
        let end = core::cmp::min(start.saturating_add(count - 1), total);

        for proposal_id in start..=end {
            result.push(self.proposals(dao_id, proposal_id).get());
        }
        result
    }

    #[view(hasVoted)]
    fn has_voted(&self, dao_id: u64, proposal_id: u64, account: ManagedAddress) -> bool {
        self.get_proposal(dao_id, proposal_id);
        self.voters(dao_id, proposal_id).contains(&account)
    }

    #[view(getVoteRecords)]
    fn get_vote_records(
        &self,
        dao_id: u64,
        proposal_id: u64,
    ) -> MultiValueEncoded<VoteRecord<Self::Api>> {
        self.get_proposal(dao_id, proposal_id);
        let mut result = MultiValueEncoded::new();
        for record in self.vote_records(dao_id, proposal_id).iter() {
            result.push(record);
        }
        result
    }
}
