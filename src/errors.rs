// Every message starts with its failure category so callers can classify
// a rejected transaction from the returned message alone.

pub const ERR_EMPTY_NAME: &str = "InvalidConfiguration: name must not be empty";
pub const ERR_ZERO_VOTING_PERIOD: &str =
    "InvalidConfiguration: voting period must be greater than zero";
pub const ERR_QUORUM_OUT_OF_RANGE: &str =
    "InvalidConfiguration: quorum percentage must be between 1 and 100";
pub const ERR_ZERO_VOTING_POWER: &str = "InvalidConfiguration: voting power must be at least 1";

pub const ERR_NOT_ACTIVE_MEMBER: &str = "Unauthorized: caller is not an active member";

pub const ERR_DAO_NOT_FOUND: &str = "NotFound: organization does not exist";
pub const ERR_PROPOSAL_NOT_FOUND: &str = "NotFound: proposal does not exist";
pub const ERR_MEMBER_NOT_FOUND: &str = "NotFound: account was never a member";

pub const ERR_ALREADY_MEMBER: &str = "AlreadyExists: account is already an active member";

pub const ERR_REMOVE_CREATOR: &str = "InvalidState: the creator cannot be removed";
pub const ERR_MEMBER_INACTIVE: &str = "InvalidState: member is already inactive";
pub const ERR_VOTING_CLOSED: &str = "InvalidState: voting period has ended";
pub const ERR_ALREADY_VOTED: &str = "InvalidState: already voted on this proposal";
pub const ERR_VOTING_NOT_ENDED: &str = "InvalidState: voting period has not ended";
pub const ERR_ALREADY_EXECUTED: &str = "InvalidState: proposal already executed";
