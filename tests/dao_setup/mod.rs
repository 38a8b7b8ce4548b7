// Shared whitebox fixture: one factory contract, one organization created by
// `creator`, plus two accounts that start outside it.
#![allow(dead_code)]

use dao_factory::{membership::MembershipModule, proposals::ProposalsModule, DaoFactory};
use multiversx_sc::types::Address;
use multiversx_sc_scenario::{
    managed_address, managed_biguint, managed_buffer, rust_biguint,
    whitebox_legacy::{BlockchainStateWrapper, ContractObjWrapper, TxResult},
    DebugApi,
};

pub const WASM_PATH: &str = "output/dao-factory.wasm";
pub const VOTING_PERIOD: u64 = 604_800;
pub const QUORUM_PERCENTAGE: u64 = 51;
pub const START_TIME: u64 = 1_000;

pub type DaoObjBuilder = fn() -> dao_factory::ContractObj<DebugApi>;

pub struct DaoSetup {
    pub b_mock: BlockchainStateWrapper,
    pub owner: Address,
    pub creator: Address,
    pub member_b: Address,
    pub outsider: Address,
    pub sc_wrapper: ContractObjWrapper<dao_factory::ContractObj<DebugApi>, DaoObjBuilder>,
    pub dao_id: u64,
}

impl DaoSetup {
    pub fn new() -> Self {
        let rust_zero = rust_biguint!(0);
        let mut b_mock = BlockchainStateWrapper::new();
        let owner = b_mock.create_user_account(&rust_zero);
        let creator = b_mock.create_user_account(&rust_zero);
        let member_b = b_mock.create_user_account(&rust_zero);
        let outsider = b_mock.create_user_account(&rust_zero);
        let sc_wrapper = b_mock.create_sc_account(
            &rust_zero,
            Some(&owner),
            dao_factory::contract_obj as DaoObjBuilder,
            WASM_PATH,
        );

        b_mock.set_block_timestamp(START_TIME);
        b_mock
            .execute_tx(&owner, &sc_wrapper, &rust_zero, |sc| {
                sc.init();
            })
            .assert_ok();

        let mut setup = DaoSetup {
            b_mock,
            owner,
            creator: creator.clone(),
            member_b,
            outsider,
            sc_wrapper,
            dao_id: 0,
        };
        setup.dao_id = setup.create_dao(&creator, b"Acme", VOTING_PERIOD, QUORUM_PERCENTAGE);
        setup
    }

    pub fn create_dao(
        &mut self,
        caller: &Address,
        name: &[u8],
        voting_period: u64,
        quorum_percentage: u64,
    ) -> u64 {
        let mut dao_id = 0u64;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                dao_id = sc.create_dao(managed_buffer!(name), voting_period, quorum_percentage);
            })
            .assert_ok();
        dao_id
    }

    pub fn try_create_dao(
        &mut self,
        caller: &Address,
        name: &[u8],
        voting_period: u64,
        quorum_percentage: u64,
    ) -> TxResult {
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.create_dao(managed_buffer!(name), voting_period, quorum_percentage);
            })
    }

    pub fn add_member(&mut self, caller: &Address, account: &Address, voting_power: u64) -> TxResult {
        let dao_id = self.dao_id;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.add_member(dao_id, managed_address!(account), managed_biguint!(voting_power));
            })
    }

    pub fn remove_member(&mut self, caller: &Address, account: &Address) -> TxResult {
        let dao_id = self.dao_id;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.remove_member(dao_id, managed_address!(account));
            })
    }

    pub fn create_proposal(&mut self, caller: &Address, description: &[u8]) -> u64 {
        let dao_id = self.dao_id;
        let mut proposal_id = 0u64;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                proposal_id = sc.create_proposal(dao_id, managed_buffer!(description));
            })
            .assert_ok();
        proposal_id
    }

    pub fn try_create_proposal(&mut self, caller: &Address, description: &[u8]) -> TxResult {
        let dao_id = self.dao_id;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.create_proposal(dao_id, managed_buffer!(description));
            })
    }

    pub fn vote(&mut self, caller: &Address, proposal_id: u64, support: bool) -> TxResult {
        let dao_id = self.dao_id;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.vote(dao_id, proposal_id, support);
            })
    }

    pub fn execute(&mut self, caller: &Address, proposal_id: u64) -> TxResult {
        let dao_id = self.dao_id;
        self.b_mock
            .execute_tx(caller, &self.sc_wrapper, &rust_biguint!(0), |sc| {
                sc.execute(dao_id, proposal_id);
            })
    }

    pub fn set_time(&mut self, timestamp: u64) {
        self.b_mock.set_block_timestamp(timestamp);
    }

    /// Moves the clock to the first second at which the proposal is closed.
    pub fn close_voting(&mut self) {
        self.set_time(START_TIME + VOTING_PERIOD);
    }

    pub fn total_voting_power(&mut self) -> u64 {
        let dao_id = self.dao_id;
        let mut total = 0u64;
        self.b_mock
            .execute_query(&self.sc_wrapper, |sc| {
                total = sc.get_total_voting_power(dao_id).to_u64().unwrap();
            })
            .assert_ok();
        total
    }

    /// (for, against, executed, passed)
    pub fn tally(&mut self, proposal_id: u64) -> (u64, u64, bool, bool) {
        let dao_id = self.dao_id;
        let mut tally = (0u64, 0u64, false, false);
        self.b_mock
            .execute_query(&self.sc_wrapper, |sc| {
                let proposal = sc.get_proposal(dao_id, proposal_id);
                tally = (
                    proposal.for_votes.to_u64().unwrap(),
                    proposal.against_votes.to_u64().unwrap(),
                    proposal.executed,
                    proposal.passed,
                );
            })
            .assert_ok();
        tally
    }
}
