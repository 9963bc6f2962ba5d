// User-error messages raised through `require!`. Tests match on these strings,
// so treat them as part of the ABI.

// ── Validation ──

pub const ERR_INVALID_DEADLINE: &str = "Deadline must be in the future";
pub const ERR_INSUFFICIENT_REWARD: &str = "Reward below minimum";
pub const ERR_EMPTY_NAME: &str = "Name empty";
pub const ERR_NAME_TOO_LONG: &str = "Name too long";
pub const ERR_DESCRIPTION_TOO_LONG: &str = "Description too long";
pub const ERR_EMPTY_CONTENT_URI: &str = "Content URI empty";
pub const ERR_CONTENT_URI_TOO_LONG: &str = "Content URI too long";
pub const ERR_STAKE_TOO_LOW: &str = "Stake below minimum";
pub const ERR_SCORE_OUT_OF_RANGE: &str = "Score must be between 0 and 100";
pub const ERR_CREATOR_SET_MISMATCH: &str = "Scores must cover every joined creator exactly once";
pub const ERR_INVALID_CONFIG: &str = "Minimums must be positive";

// ── Authorization ──

pub const ERR_NOT_OWNER: &str = "Only owner";
pub const ERR_NOT_COMPANY: &str = "Only the bounty company can do this";
pub const ERR_COMPANY_CANNOT_PARTICIPATE: &str = "Company cannot participate in its own bounty";
pub const ERR_NOT_WINNER: &str = "Only the winner can claim the creator reward";

// ── Lifecycle state ──

pub const ERR_DEADLINE_PASSED: &str = "Deadline has passed";
pub const ERR_DEADLINE_NOT_REACHED: &str = "Deadline not reached";
pub const ERR_ALREADY_JUDGED: &str = "Bounty already judged";
pub const ERR_NOT_JUDGED: &str = "Bounty not judged";
pub const ERR_ALREADY_FINALIZED: &str = "Bounty already finalized";
pub const ERR_NOT_FINALIZED: &str = "Bounty not finalized";

// ── Duplicate actions ──

pub const ERR_ALREADY_JOINED: &str = "Already joined";
pub const ERR_ALREADY_VOTED: &str = "Already voted";
pub const ERR_ALREADY_CLAIMED: &str = "Reward already claimed";

// ── Not found ──

pub const ERR_BOUNTY_NOT_FOUND: &str = "Bounty does not exist";
pub const ERR_UNKNOWN_CREATOR: &str = "Creator has not joined this bounty";
pub const ERR_NOT_ELIGIBLE_VOTER: &str = "No winning upvote to claim";
