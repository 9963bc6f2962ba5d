multiversx_sc::imports!();

/// Winner share of the reward pool: 70%
pub const WINNER_SHARE_BPS: u64 = 7_000;

/// Share split equally among voters who upvoted the winner: 20%
pub const VOTER_SHARE_BPS: u64 = 2_000;

/// Basis points denominator
pub const BPS_DENOMINATOR: u64 = 10_000;

/// How a finalized reward pool is carved up.
///
/// `winner_reward + voter_reward_share * winning_voters + platform_fee`
/// always equals the pool exactly.
pub struct RewardSplit<M: ManagedTypeApi> {
    pub winner_reward: BigUint<M>,
    pub voter_reward_share: BigUint<M>,
    pub platform_fee: BigUint<M>,
}

/// Splits `reward_pool` 70 / 20 / 10.
///
/// The voter pool is floored per voter and the remainder goes to the
/// platform fee. With no winning voters the whole voter pool does.
pub fn split_reward_pool<M: ManagedTypeApi>(
    reward_pool: &BigUint<M>,
    winning_voters: u64,
) -> RewardSplit<M> {
    let winner_reward = (reward_pool * WINNER_SHARE_BPS) / BPS_DENOMINATOR;
    let voter_pool = (reward_pool * VOTER_SHARE_BPS) / BPS_DENOMINATOR;

    let voter_reward_share = if winning_voters == 0 {
        BigUint::zero()
    } else {
        voter_pool / winning_voters
    };

    let distributed_to_voters = &voter_reward_share * winning_voters;
    let mut platform_fee = reward_pool.clone();
    platform_fee -= &winner_reward;
    platform_fee -= &distributed_to_voters;

    RewardSplit {
        winner_reward,
        voter_reward_share,
        platform_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use multiversx_sc_scenario::api::StaticApi;

    fn pool(amount: u64) -> BigUint<StaticApi> {
        BigUint::from(amount)
    }

    fn conserved(split: &RewardSplit<StaticApi>, reward_pool: u64, winning_voters: u64) -> bool {
        let total = &split.winner_reward
            + &(&split.voter_reward_share * winning_voters)
            + split.platform_fee.clone();
        total == pool(reward_pool)
    }

    #[test]
    fn test_split_single_voter() {
        let split = split_reward_pool(&pool(1_000_000), 1);
        assert_eq!(split.winner_reward, pool(700_000));
        assert_eq!(split.voter_reward_share, pool(200_000));
        assert_eq!(split.platform_fee, pool(100_000));
        assert!(conserved(&split, 1_000_000, 1));
    }

    #[test]
    fn test_split_remainder_to_platform() {
        let split = split_reward_pool(&pool(1_000_000), 3);
        assert_eq!(split.voter_reward_share, pool(66_666));
        assert_eq!(split.platform_fee, pool(100_002));
        assert!(conserved(&split, 1_000_000, 3));
    }

    #[test]
    fn test_split_without_winning_voters() {
        let split = split_reward_pool(&pool(1_000_000), 0);
        assert_eq!(split.voter_reward_share, pool(0));
        assert_eq!(split.platform_fee, pool(300_000));
    }

    #[test]
    fn test_split_odd_pool() {
        // 70% of 100_001 floors to 70_000
        let split = split_reward_pool(&pool(100_001), 7);
        assert_eq!(split.winner_reward, pool(70_000));
        assert!(conserved(&split, 100_001, 7));
    }
}
