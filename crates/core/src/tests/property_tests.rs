// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use proptest::prelude::*;

use crate::{GroupedStat, aggregate_by_key, percentage};
use vote_dashboard_domain::{CandidateId, Vote};

const COUNTRIES: [&str; 4] = ["Haiti", "Canada", "France", "Chile"];

fn arb_vote() -> impl Strategy<Value = (i64, Option<usize>)> {
    (1_i64..6, proptest::option::of(0_usize..COUNTRIES.len()))
}

fn build_votes(specs: &[(i64, Option<usize>)]) -> Vec<Vote> {
    specs
        .iter()
        .enumerate()
        .map(|(index, (candidate, country))| {
            Vote::new(
                i64::try_from(index).unwrap(),
                CandidateId::new(*candidate),
                country.map(|c| COUNTRIES[c]),
                None,
            )
        })
        .collect()
}

fn group(votes: &[Vote]) -> Vec<GroupedStat<String, CandidateId>> {
    aggregate_by_key(votes, |v| v.country.clone(), &String::from("Unknown"))
}

proptest! {
    #[test]
    fn prop_group_totals_conserve_row_count(specs in prop::collection::vec(arb_vote(), 0..200)) {
        let votes = build_votes(&specs);
        let groups = group(&votes);

        let total: u64 = groups.iter().map(|g| g.total_votes).sum();
        prop_assert_eq!(total, votes.len() as u64);
    }

    #[test]
    fn prop_member_votes_sum_to_group_total(specs in prop::collection::vec(arb_vote(), 0..200)) {
        let votes = build_votes(&specs);

        for stat in group(&votes) {
            let member_sum: u64 = stat.members.iter().map(|m| m.votes).sum();
            prop_assert_eq!(member_sum, stat.total_votes);
        }
    }

    #[test]
    fn prop_groups_and_members_sorted_descending(specs in prop::collection::vec(arb_vote(), 0..200)) {
        let votes = build_votes(&specs);
        let groups = group(&votes);

        for pair in groups.windows(2) {
            prop_assert!(pair[0].total_votes >= pair[1].total_votes);
        }
        for stat in &groups {
            for pair in stat.members.windows(2) {
                prop_assert!(pair[0].votes >= pair[1].votes);
            }
        }
    }

    #[test]
    fn prop_percentages_are_finite(specs in prop::collection::vec(arb_vote(), 0..200)) {
        let votes = build_votes(&specs);

        for stat in group(&votes) {
            prop_assert!(stat.percentage.is_finite());
            prop_assert!((0.0..=100.0).contains(&stat.percentage));
            for member in &stat.members {
                prop_assert!(member.percentage.is_finite());
            }
        }
    }

    #[test]
    fn prop_percentage_never_nan(part in 0_u64..1_000_000, whole in 0_u64..1_000_000) {
        let value = percentage(part, whole);
        prop_assert!(value.is_finite());
        if whole == 0 {
            prop_assert_eq!(value, 0.0);
        }
    }
}
