multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Bounty Phase: lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Eq, Debug)]
pub enum BountyPhase {
    /// Joining and voting are open until the deadline.
    Active,
    /// Deadline passed, company has not judged yet.
    /// Never stored: derived from `Active` once `now >= deadline`.
    AwaitingJudgment,
    /// Company scores recorded. Ready to finalize.
    Judged,
    /// Winner committed, claims open. Terminal state.
    Finalized,
}

// ============================================================
// Bounty: the escrowed competition record
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Bounty<M: ManagedTypeApi> {
    pub id: u64,
    pub company: ManagedAddress<M>,
    pub name: ManagedBuffer<M>,
    pub description: ManagedBuffer<M>,
    pub deadline: u64,
    /// Amount escrowed at creation. Never mutated.
    pub reward_pool: BigUint<M>,
    /// Portion of the pool still held for this bounty; only ever decreases.
    pub remaining_pool: BigUint<M>,
    /// Sum of all voter stakes escrowed for this bounty.
    pub total_staked: BigUint<M>,
    pub phase: BountyPhase,
    /// Zero address until finalized.
    pub winner: ManagedAddress<M>,
    /// Fixed at finalize (0 before).
    pub winner_reward: BigUint<M>,
    /// Per-voter share of the voter pool, fixed at finalize (0 before).
    pub voter_reward_share: BigUint<M>,
    pub created_at: u64,
}

impl<M: ManagedTypeApi> Bounty<M> {
    /// Phase as observed at `now`. A stored `Active` bounty whose deadline
    /// has passed reads as `AwaitingJudgment`.
    pub fn phase_at(&self, now: u64) -> BountyPhase {
        if self.phase == BountyPhase::Active && now >= self.deadline {
            BountyPhase::AwaitingJudgment
        } else {
            self.phase
        }
    }

    pub fn company_judged(&self) -> bool {
        matches!(self.phase, BountyPhase::Judged | BountyPhase::Finalized)
    }

    pub fn is_finalized(&self) -> bool {
        self.phase == BountyPhase::Finalized
    }
}

// ============================================================
// Creator Entry: one submission per (bounty, creator)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct CreatorEntry<M: ManagedTypeApi> {
    pub creator: ManagedAddress<M>,
    pub content_uri: ManagedBuffer<M>,
    pub upvotes: u64,
    pub downvotes: u64,
    /// 0..=100, set once at judging
    pub company_score: u64,
    /// 0..=10_000, derived at judging
    pub total_score: u64,
    pub reward_claimed: bool,
    pub joined_at: u64,
}

// ============================================================
// Vote Record: one stake-backed vote per (bounty, voter)
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct VoteRecord<M: ManagedTypeApi> {
    pub amount: BigUint<M>,
    pub voted_for: ManagedAddress<M>,
    pub is_upvote: bool,
    pub reward_claimed: bool,
    pub voted_at: u64,
}
