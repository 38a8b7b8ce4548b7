multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("daoCreated")]
    fn dao_created_event(
        &self,
        #[indexed] dao_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] voting_period: u64,
        #[indexed] quorum_percentage: u64,
        #[indexed] timestamp: u64,
        name: &ManagedBuffer,
    );

    #[event("memberAdded")]
    fn member_added_event(
        &self,
        #[indexed] dao_id: u64,
        #[indexed] account: &ManagedAddress,
        voting_power: &BigUint,
    );

    #[event("memberRemoved")]
    fn member_removed_event(&self, #[indexed] dao_id: u64, #[indexed] account: &ManagedAddress);

    #[event("proposalCreated")]
    fn proposal_created_event(
        &self,
        #[indexed] dao_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] proposer: &ManagedAddress,
        description: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] dao_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] support: bool,
        weight: &BigUint,
    );

    #[event("proposalExecuted")]
    fn proposal_executed_event(
        &self,
        #[indexed] dao_id: u64,
        #[indexed] proposal_id: u64,
        #[indexed] passed: bool,
    );
}
