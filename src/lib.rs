#![no_std]

multiversx_sc::imports!();

pub mod distribution;
pub mod errors;
pub mod scoring;
pub mod types;

use errors::*;
use types::{Bounty, BountyPhase, CreatorEntry, VoteRecord};

// ============================================================
// Constants
// ============================================================

/// Longest accepted bounty name, in bytes
pub const MAX_NAME_LEN: usize = 128;

/// Longest accepted bounty description, in bytes
pub const MAX_DESCRIPTION_LEN: usize = 2_048;

/// Longest accepted submission URI (IPFS or HTTPS link), in bytes
pub const MAX_CONTENT_URI_LEN: usize = 512;

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait BountyPlatform {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, min_reward: BigUint, min_stake: BigUint) {
        self.set_minimums(min_reward, min_stake);
        self.bounty_count().set(0u64);
        self.platform_fees().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[endpoint(updateConfig)]
    fn update_config(&self, min_reward: BigUint, min_stake: BigUint) {
        self.require_owner();
        self.set_minimums(min_reward, min_stake);
        self.config_updated_event(&self.min_reward().get(), &self.min_stake().get());
    }

    // ========================================================
    // ENDPOINT: createBounty
    // Escrows the attached EGLD as the reward pool.
    // ========================================================

    #[endpoint(createBounty)]
    #[payable("EGLD")]
    fn create_bounty(
        &self,
        name: ManagedBuffer,
        description: ManagedBuffer,
        deadline: u64,
    ) -> u64 {
        let caller = self.blockchain().get_caller();
        let payment = self.call_value().egld_value().clone_value();
        let now = self.blockchain().get_block_timestamp();

        require!(deadline > now, ERR_INVALID_DEADLINE);
        require!(payment >= self.min_reward().get(), ERR_INSUFFICIENT_REWARD);
        require!(!name.is_empty(), ERR_EMPTY_NAME);
        require!(name.len() <= MAX_NAME_LEN, ERR_NAME_TOO_LONG);
        require!(
            description.len() <= MAX_DESCRIPTION_LEN,
            ERR_DESCRIPTION_TOO_LONG
        );

        let bounty_id = self.bounty_count().get();

        let bounty = Bounty {
            id: bounty_id,
            company: caller.clone(),
            name,
            description,
            deadline,
            reward_pool: payment.clone(),
            remaining_pool: payment.clone(),
            total_staked: BigUint::zero(),
            phase: BountyPhase::Active,
            winner: ManagedAddress::zero(),
            winner_reward: BigUint::zero(),
            voter_reward_share: BigUint::zero(),
            created_at: now,
        };

        self.bounties(bounty_id).set(&bounty);
        self.bounty_count().set(bounty_id + 1);

        self.bounty_created_event(bounty_id, &caller, deadline, &payment);

        bounty_id
    }

    // ========================================================
    // ENDPOINT: joinBounty
    // One submission per creator, before the deadline.
    // ========================================================

    #[endpoint(joinBounty)]
    fn join_bounty(&self, bounty_id: u64, content_uri: ManagedBuffer) {
        let caller = self.blockchain().get_caller();
        let bounty = self.require_bounty(bounty_id);
        let now = self.blockchain().get_block_timestamp();

        require!(now < bounty.deadline, ERR_DEADLINE_PASSED);
        require!(caller != bounty.company, ERR_COMPANY_CANNOT_PARTICIPATE);
        require!(
            self.creator_entries(bounty_id, &caller).is_empty(),
            ERR_ALREADY_JOINED
        );
        require!(!content_uri.is_empty(), ERR_EMPTY_CONTENT_URI);
        require!(
            content_uri.len() <= MAX_CONTENT_URI_LEN,
            ERR_CONTENT_URI_TOO_LONG
        );

        let entry = CreatorEntry {
            creator: caller.clone(),
            content_uri,
            upvotes: 0,
            downvotes: 0,
            company_score: 0,
            total_score: 0,
            reward_claimed: false,
            joined_at: now,
        };

        self.creator_entries(bounty_id, &caller).set(&entry);
        self.bounty_creators(bounty_id).push(&caller);

        self.creator_joined_event(bounty_id, &caller, now);
    }

    // ========================================================
    // ENDPOINT: vote
    // One stake-backed vote per voter per bounty. The tally
    // counts direction only; the stake is escrowed.
    // ========================================================

    #[endpoint(vote)]
    #[payable("EGLD")]
    fn vote(&self, bounty_id: u64, creator: ManagedAddress, is_upvote: bool) {
        let caller = self.blockchain().get_caller();
        let stake = self.call_value().egld_value().clone_value();
        let mut bounty = self.require_bounty(bounty_id);
        let now = self.blockchain().get_block_timestamp();

        require!(now < bounty.deadline, ERR_DEADLINE_PASSED);
        require!(caller != bounty.company, ERR_COMPANY_CANNOT_PARTICIPATE);
        require!(
            !self.creator_entries(bounty_id, &creator).is_empty(),
            ERR_UNKNOWN_CREATOR
        );
        require!(self.votes(bounty_id, &caller).is_empty(), ERR_ALREADY_VOTED);
        require!(stake >= self.min_stake().get(), ERR_STAKE_TOO_LOW);

        self.creator_entries(bounty_id, &creator).update(|entry| {
            if is_upvote {
                entry.upvotes += 1;
            } else {
                entry.downvotes += 1;
            }
        });

        if is_upvote {
            self.upvote_stake(bounty_id, &creator)
                .update(|total| *total += &stake);
        }

        bounty.total_staked += &stake;
        self.bounties(bounty_id).set(&bounty);

        let record = VoteRecord {
            amount: stake.clone(),
            voted_for: creator.clone(),
            is_upvote,
            reward_claimed: false,
            voted_at: now,
        };
        self.votes(bounty_id, &caller).set(&record);

        self.vote_cast_event(bounty_id, &caller, &creator, is_upvote, &stake);
    }

    // ========================================================
    // ENDPOINT: companyJudge
    // Company scores every joined creator once, after the
    // deadline. Total scores are fixed here.
    // ========================================================

    #[endpoint(companyJudge)]
    fn company_judge(
        &self,
        bounty_id: u64,
        creators: ManagedVec<ManagedAddress>,
        scores: ManagedVec<u64>,
    ) {
        let caller = self.blockchain().get_caller();
        let mut bounty = self.require_bounty(bounty_id);
        let now = self.blockchain().get_block_timestamp();

        require!(caller == bounty.company, ERR_NOT_COMPANY);
        require!(now >= bounty.deadline, ERR_DEADLINE_NOT_REACHED);
        require!(bounty.phase == BountyPhase::Active, ERR_ALREADY_JUDGED);

        // ── Scores must cover the roster exactly ──
        let roster_len = self.bounty_creators(bounty_id).len();
        require!(
            creators.len() == scores.len() && creators.len() == roster_len,
            ERR_CREATOR_SET_MISMATCH
        );

        let mut seen: ManagedVec<ManagedAddress> = ManagedVec::new();
        for (creator, score) in creators.iter().zip(scores.iter()) {
            require!(
                !self.creator_entries(bounty_id, &creator).is_empty(),
                ERR_CREATOR_SET_MISMATCH
            );
            require!(!seen.contains(&creator), ERR_CREATOR_SET_MISMATCH);
            require!(score <= scoring::MAX_SCORE, ERR_SCORE_OUT_OF_RANGE);
            seen.push(creator.clone_value());
        }

        // ── Community signal, normalized to the best net tally ──
        let mut max_net = 0u64;
        for creator in self.bounty_creators(bounty_id).iter() {
            let entry = self.creator_entries(bounty_id, &creator).get();
            max_net = max_net.max(scoring::net_votes(entry.upvotes, entry.downvotes));
        }

        for (creator, score) in creators.iter().zip(scores.iter()) {
            self.creator_entries(bounty_id, &creator).update(|entry| {
                let net = scoring::net_votes(entry.upvotes, entry.downvotes);
                let approval = scoring::net_approval_score(net, max_net);
                entry.company_score = score;
                entry.total_score = scoring::total_score(score, approval);
            });
        }

        bounty.phase = BountyPhase::Judged;
        self.bounties(bounty_id).set(&bounty);

        self.bounty_judged_event(bounty_id, &caller, now);
    }

    // ========================================================
    // ENDPOINT: finalizeBounty
    // Commits the winner and fixes the 70/20/10 split.
    // Judged → Finalized.
    // ========================================================

    #[endpoint(finalizeBounty)]
    fn finalize_bounty(&self, bounty_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut bounty = self.require_bounty(bounty_id);

        require!(caller == bounty.company, ERR_NOT_COMPANY);
        require!(!bounty.is_finalized(), ERR_ALREADY_FINALIZED);
        require!(bounty.phase == BountyPhase::Judged, ERR_NOT_JUDGED);

        bounty.phase = BountyPhase::Finalized;

        let winner = match self.compute_winner(bounty_id) {
            Some(winner) => winner,
            None => {
                // Nobody joined: the whole pool goes back to the company.
                let refund = bounty.remaining_pool.clone();
                bounty.remaining_pool = BigUint::zero();
                self.bounties(bounty_id).set(&bounty);

                self.bounty_refunded_event(bounty_id, &bounty.company, &refund);
                self.send().direct_egld(&bounty.company, &refund);
                return;
            }
        };

        let winning_voters = self.creator_entries(bounty_id, &winner).get().upvotes;
        let split = distribution::split_reward_pool(&bounty.reward_pool, winning_voters);

        // Stakes not backing the winner with an upvote are forfeited.
        let forfeited = &bounty.total_staked - &self.upvote_stake(bounty_id, &winner).get();

        bounty.remaining_pool -= &split.platform_fee;
        bounty.winner = winner.clone();
        bounty.winner_reward = split.winner_reward;
        bounty.voter_reward_share = split.voter_reward_share;
        self.bounties(bounty_id).set(&bounty);

        self.platform_fees().update(|fees| {
            *fees += &split.platform_fee;
            *fees += &forfeited;
        });

        self.bounty_finalized_event(bounty_id, &winner, &bounty.winner_reward);
    }

    // ========================================================
    // ENDPOINT: claimCreatorReward
    // Winner takes 70% of the pool, once.
    // ========================================================

    #[endpoint(claimCreatorReward)]
    fn claim_creator_reward(&self, bounty_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut bounty = self.require_bounty(bounty_id);

        require!(bounty.is_finalized(), ERR_NOT_FINALIZED);
        require!(caller == bounty.winner, ERR_NOT_WINNER);

        let mut entry = self.creator_entries(bounty_id, &caller).get();
        require!(!entry.reward_claimed, ERR_ALREADY_CLAIMED);

        // Mark claimed before any transfer.
        entry.reward_claimed = true;
        self.creator_entries(bounty_id, &caller).set(&entry);

        let payout = bounty.winner_reward.clone();
        bounty.remaining_pool -= &payout;
        self.bounties(bounty_id).set(&bounty);

        self.creator_reward_claimed_event(bounty_id, &caller, &payout);
        self.send().direct_egld(&caller, &payout);
    }

    // ========================================================
    // ENDPOINT: claimVoterReward
    // Upvoters of the winner get their stake back plus an
    // equal share of 20% of the pool, once.
    // ========================================================

    #[endpoint(claimVoterReward)]
    fn claim_voter_reward(&self, bounty_id: u64) {
        let caller = self.blockchain().get_caller();
        let mut bounty = self.require_bounty(bounty_id);

        require!(bounty.is_finalized(), ERR_NOT_FINALIZED);
        require!(
            !self.votes(bounty_id, &caller).is_empty(),
            ERR_NOT_ELIGIBLE_VOTER
        );

        let mut record = self.votes(bounty_id, &caller).get();
        require!(
            record.is_upvote && record.voted_for == bounty.winner,
            ERR_NOT_ELIGIBLE_VOTER
        );
        require!(!record.reward_claimed, ERR_ALREADY_CLAIMED);

        // Mark claimed before any transfer.
        record.reward_claimed = true;
        self.votes(bounty_id, &caller).set(&record);

        let share = bounty.voter_reward_share.clone();
        bounty.remaining_pool -= &share;
        self.bounties(bounty_id).set(&bounty);

        let payout = &record.amount + &share;
        self.voter_reward_claimed_event(bounty_id, &caller, &payout);
        self.send().direct_egld(&caller, &payout);
    }

    // ========================================================
    // INTERNAL
    // ========================================================

    fn require_bounty(&self, bounty_id: u64) -> Bounty<Self::Api> {
        require!(!self.bounties(bounty_id).is_empty(), ERR_BOUNTY_NOT_FOUND);
        self.bounties(bounty_id).get()
    }

    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.blockchain().get_owner_address(), ERR_NOT_OWNER);
    }

    fn set_minimums(&self, min_reward: BigUint, min_stake: BigUint) {
        require!(min_reward > 0u64 && min_stake > 0u64, ERR_INVALID_CONFIG);
        self.min_reward().set(&min_reward);
        self.min_stake().set(&min_stake);
    }

    /// Highest total score wins; ties go to the earliest join.
    /// Walks the append-only roster, so argument order at judging
    /// has no influence.
    fn compute_winner(&self, bounty_id: u64) -> Option<ManagedAddress> {
        let roster = self.bounty_creators(bounty_id);
        let winner_idx = scoring::select_winner(
            roster
                .iter()
                .map(|creator| self.creator_entries(bounty_id, &creator).get().total_score),
        )?;

        // VecMapper is 1-indexed
        Some(roster.get(winner_idx + 1))
    }

    // ========================================================
    // VIEWS: read-only queries
    // ========================================================

    #[view(getBounty)]
    fn get_bounty(&self, bounty_id: u64) -> Bounty<Self::Api> {
        let mut bounty = self.require_bounty(bounty_id);
        bounty.phase = bounty.phase_at(self.blockchain().get_block_timestamp());
        bounty
    }

    #[view(getBountyPhase)]
    fn get_bounty_phase(&self, bounty_id: u64) -> BountyPhase {
        self.require_bounty(bounty_id)
            .phase_at(self.blockchain().get_block_timestamp())
    }

    #[view(getBounties)]
    fn get_bounties(&self, from: u64, count: u64) -> MultiValueEncoded<Bounty<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.bounty_count().get();
        if count == 0 || from >= total {
            return result;
        }
        let end = core::cmp::min(from.saturating_add(count), total);
        let now = self.blockchain().get_block_timestamp();

        for id in from..end {
            let mut bounty = self.bounties(id).get();
            bounty.phase = bounty.phase_at(now);
            result.push(bounty);
        }
        result
    }

    /// Every bounty not yet finalized: open, awaiting judgment, or judged.
    #[view(getActiveBounties)]
    fn get_active_bounties(&self) -> MultiValueEncoded<u64> {
        let mut result = MultiValueEncoded::new();
        let total = self.bounty_count().get();

        for id in 0..total {
            if !self.bounties(id).get().is_finalized() {
                result.push(id);
            }
        }
        result
    }

    #[view(getBountyCreators)]
    fn get_bounty_creators(&self, bounty_id: u64) -> MultiValueEncoded<ManagedAddress> {
        self.require_bounty(bounty_id);
        let mut result = MultiValueEncoded::new();
        for creator in self.bounty_creators(bounty_id).iter() {
            result.push(creator);
        }
        result
    }

    /// Creator entries in join order.
    #[view(getLeaderboard)]
    fn get_leaderboard(&self, bounty_id: u64) -> MultiValueEncoded<CreatorEntry<Self::Api>> {
        self.require_bounty(bounty_id);
        let mut result = MultiValueEncoded::new();
        for creator in self.bounty_creators(bounty_id).iter() {
            result.push(self.creator_entries(bounty_id, &creator).get());
        }
        result
    }

    #[view(getCreatorEntry)]
    fn get_creator_entry(
        &self,
        bounty_id: u64,
        creator: ManagedAddress,
    ) -> CreatorEntry<Self::Api> {
        self.require_bounty(bounty_id);
        require!(
            !self.creator_entries(bounty_id, &creator).is_empty(),
            ERR_UNKNOWN_CREATOR
        );
        self.creator_entries(bounty_id, &creator).get()
    }

    /// `(amount, votedFor, isUpvote, exists)`
    #[view(getVoteInfo)]
    fn get_vote_info(
        &self,
        voter: ManagedAddress,
        bounty_id: u64,
    ) -> MultiValue4<BigUint, ManagedAddress, bool, bool> {
        if self.votes(bounty_id, &voter).is_empty() {
            return (BigUint::zero(), ManagedAddress::zero(), false, false).into();
        }
        let record = self.votes(bounty_id, &voter).get();
        (record.amount, record.voted_for, record.is_upvote, true).into()
    }

    #[view(hasClaimedVoterReward)]
    fn has_claimed_voter_reward(&self, bounty_id: u64, voter: ManagedAddress) -> bool {
        let record = self.votes(bounty_id, &voter);
        !record.is_empty() && record.get().reward_claimed
    }

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue4<BigUint, BigUint, u64, u64> {
        (
            self.min_reward().get(),
            self.min_stake().get(),
            scoring::COMPANY_WEIGHT,
            scoring::COMMUNITY_WEIGHT,
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("bountyCreated")]
    fn bounty_created_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] company: &ManagedAddress,
        #[indexed] deadline: u64,
        reward_pool: &BigUint,
    );

    #[event("creatorJoined")]
    fn creator_joined_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] creator: &ManagedAddress,
        joined_at: u64,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] creator: &ManagedAddress,
        #[indexed] is_upvote: bool,
        stake: &BigUint,
    );

    #[event("bountyJudged")]
    fn bounty_judged_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] company: &ManagedAddress,
        judged_at: u64,
    );

    #[event("bountyFinalized")]
    fn bounty_finalized_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] winner: &ManagedAddress,
        winner_reward: &BigUint,
    );

    #[event("bountyRefunded")]
    fn bounty_refunded_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] company: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("creatorRewardClaimed")]
    fn creator_reward_claimed_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] creator: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("voterRewardClaimed")]
    fn voter_reward_claimed_event(
        &self,
        #[indexed] bounty_id: u64,
        #[indexed] voter: &ManagedAddress,
        amount: &BigUint,
    );

    #[event("configUpdated")]
    fn config_updated_event(&self, #[indexed] min_reward: &BigUint, min_stake: &BigUint);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Configuration ──

    #[storage_mapper("minReward")]
    fn min_reward(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minStake")]
    fn min_stake(&self) -> SingleValueMapper<BigUint>;

    // ── Bounties ──

    #[view(bountyCount)]
    #[storage_mapper("bountyCount")]
    fn bounty_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("bounties")]
    fn bounties(&self, id: u64) -> SingleValueMapper<Bounty<Self::Api>>;

    /// Join order is the index in this mapper.
    #[storage_mapper("bountyCreators")]
    fn bounty_creators(&self, bounty_id: u64) -> VecMapper<ManagedAddress>;

    #[storage_mapper("creatorEntries")]
    fn creator_entries(
        &self,
        bounty_id: u64,
        creator: &ManagedAddress,
    ) -> SingleValueMapper<CreatorEntry<Self::Api>>;

    // ── Votes and stakes ──

    #[storage_mapper("votes")]
    fn votes(
        &self,
        bounty_id: u64,
        voter: &ManagedAddress,
    ) -> SingleValueMapper<VoteRecord<Self::Api>>;

    #[storage_mapper("upvoteStake")]
    fn upvote_stake(&self, bounty_id: u64, creator: &ManagedAddress) -> SingleValueMapper<BigUint>;

    // ── Platform fee (withdrawal handled outside this contract) ──

    #[view(getPlatformFees)]
    #[storage_mapper("platformFees")]
    fn platform_fees(&self) -> SingleValueMapper<BigUint>;
}
