multiversx_sc::imports!();
multiversx_sc::derive_imports!();

/// Percentages are compared against this scale: `votes * 100` vs `power * quorum`.
pub const PERCENTAGE_SCALE: u64 = 100;

// ============================================================
// Registry entry — one per created organization
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct DaoInfo<M: ManagedTypeApi> {
    pub id: u64,
    pub creator: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    /// Seconds a proposal stays open for voting.
    pub voting_period: u64,
    /// Share of total voting power (1..=100) that must participate.
    pub quorum_percentage: u64,
    pub created_at: u64,
}

// ============================================================
// Member — soft-deleted, never physically removed
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Member<M: ManagedTypeApi> {
    pub account: ManagedAddress<M>,
    pub voting_power: BigUint<M>,
    pub joined_at: u64,
    pub active: bool,
}

// ============================================================
// Proposal Status — derived lazily from the block timestamp
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub enum ProposalStatus {
    /// Voting window still running.
    Open,
    /// Window closed, waiting for anyone to call `execute`.
    ClosedPendingExecution,
    /// Outcome fixed. Terminal state.
    Executed,
}

// ============================================================
// Proposal — the core governance record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Proposal<M: ManagedTypeApi> {
    pub id: u64,
    pub description: ManagedBuffer<M>,
    pub proposer: ManagedAddress<M>,
    pub for_votes: BigUint<M>,
    pub against_votes: BigUint<M>,
    pub start_time: u64,
    /// Fixed at creation: `start_time + voting_period`.
    pub end_time: u64,
    pub executed: bool,
    /// Only meaningful once `executed` is set.
    pub passed: bool,
}

impl<M: ManagedTypeApi> Proposal<M> {
    pub fn status_at(&self, now: u64) -> ProposalStatus {
        if self.executed {
            ProposalStatus::Executed
        } else if now < self.end_time {
            ProposalStatus::Open
        } else {
            ProposalStatus::ClosedPendingExecution
        }
    }

    /// `(for + against) * 100 >= total_power * quorum`. Never divides, so low
    /// power totals cannot round in the proposal's favour.
    pub fn quorum_reached(&self, total_voting_power: &BigUint<M>, quorum_percentage: u64) -> bool {
        let participation = &self.for_votes + &self.against_votes;
        &participation * PERCENTAGE_SCALE >= total_voting_power * quorum_percentage
    }

    /// Ties fail.
    pub fn has_majority(&self) -> bool {
        self.for_votes > self.against_votes
    }

    pub fn outcome(&self, total_voting_power: &BigUint<M>, quorum_percentage: u64) -> bool {
        self.quorum_reached(total_voting_power, quorum_percentage) && self.has_majority()
    }
}

// ============================================================
// Vote Record — append-only ledger of cast weights
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub support: bool,
    /// Voter's power at the moment the vote was cast.
    pub weight: BigUint<M>,
}
