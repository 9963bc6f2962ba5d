//! Judging arithmetic: company score blended with the community signal.
//!
//! The community signal is binary-count: each vote moves the tally by one
//! regardless of stake size, so a single large stake cannot inflate a score.

/// Company judgment share of the total score (percent)
pub const COMPANY_WEIGHT: u64 = 60;

/// Community vote share of the total score (percent)
pub const COMMUNITY_WEIGHT: u64 = 40;

/// Upper bound for company scores and for the normalized approval score
pub const MAX_SCORE: u64 = 100;

/// Net approval, clamped at zero.
pub fn net_votes(upvotes: u64, downvotes: u64) -> u64 {
    upvotes.saturating_sub(downvotes)
}

/// Scales `net` into 0..=100 relative to the best net tally of the bounty.
pub fn net_approval_score(net: u64, max_net: u64) -> u64 {
    if max_net == 0 {
        return 0;
    }
    net.min(max_net) * MAX_SCORE / max_net
}

/// Weighted total, 0..=10_000.
pub fn total_score(company_score: u64, net_approval: u64) -> u64 {
    COMPANY_WEIGHT * company_score + COMMUNITY_WEIGHT * net_approval
}

/// Index of the highest score. Ties go to the lowest index, which for a
/// bounty roster is the earliest join.
pub fn select_winner<I>(scores: I) -> Option<usize>
where
    I: IntoIterator<Item = u64>,
{
    let mut best: Option<(usize, u64)> = None;
    for (idx, score) in scores.into_iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((idx, score)),
        }
    }
    best.map(|(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_votes_clamps_at_zero() {
        assert_eq!(net_votes(5, 2), 3);
        assert_eq!(net_votes(1, 4), 0);
        assert_eq!(net_votes(0, 0), 0);
    }

    #[test]
    fn test_net_approval_normalized_to_best() {
        assert_eq!(net_approval_score(4, 4), 100);
        assert_eq!(net_approval_score(1, 3), 33);
        assert_eq!(net_approval_score(0, 3), 0);
        // nobody has positive net votes
        assert_eq!(net_approval_score(0, 0), 0);
    }

    #[test]
    fn test_total_score_weights() {
        assert_eq!(total_score(100, 100), 10_000);
        assert_eq!(total_score(80, 100), 8_800);
        assert_eq!(total_score(60, 0), 3_600);
    }

    #[test]
    fn test_winner_ties_go_to_earliest() {
        assert_eq!(select_winner([10u64, 30, 30, 5]), Some(1));
        assert_eq!(select_winner([7u64, 7, 7]), Some(0));
        assert_eq!(select_winner([1u64, 2, 3]), Some(2));
    }

    #[test]
    fn test_winner_empty_roster() {
        assert_eq!(select_winner(core::iter::empty::<u64>()), None);
    }
}
