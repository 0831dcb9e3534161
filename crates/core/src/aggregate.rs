// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Grouping and percentage computations over vote rows.
//!
//! Everything in this module is a pure function of its inputs: no I/O,
//! no state carried between calls. Calling the same function twice with
//! the same rows yields identical output.
//!
//! # Ordering
//!
//! Groups are returned in descending order of their totals and members
//! within a group in descending order of their votes. Equal totals keep
//! the order in which the key (or member) was first encountered in the
//! input, so the top member of a group is the first member to appear
//! among those sharing the highest count.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::hash::Hash;

use vote_dashboard_domain::{CountryTotal, VoteWithCandidate};

/// A row that can be counted toward a group.
///
/// Raw ballots keep the default weight of one vote per row. Precomputed
/// aggregate rows override [`VoteRecord::votes`] with their cached count.
pub trait VoteRecord {
    /// Identity used to merge rows for the same member within a group.
    type MemberId: Eq + Hash + Clone;
    /// Payload reported for the member (e.g. a candidate).
    type Member: Clone;

    /// Returns the member identity of this row.
    fn member_id(&self) -> Self::MemberId;

    /// Returns the member payload of this row.
    fn member(&self) -> Self::Member;

    /// Returns the number of votes this row contributes.
    fn votes(&self) -> u64 {
        1
    }
}

/// Votes attributed to one member of a group.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberTally<M> {
    /// The member payload, taken from the first row seen for this member.
    pub member: M,
    /// The member's votes within the group.
    pub votes: u64,
    /// The member's share of the group total, in percent.
    pub percentage: f64,
}

/// Aggregate statistics for one grouping key.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedStat<K, M> {
    /// The grouping key (country, department, or candidate).
    pub key: K,
    /// Total votes across all members.
    pub total_votes: u64,
    /// The group's share of the grand total across all groups, in percent.
    pub percentage: f64,
    /// Members sorted by descending votes.
    pub members: Vec<MemberTally<M>>,
}

impl<K, M> GroupedStat<K, M> {
    /// Returns the member with the most votes in this group.
    #[must_use]
    pub fn top_member(&self) -> Option<&MemberTally<M>> {
        self.members.first()
    }
}

/// Where a resolved total came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TotalSource {
    /// The precomputed aggregate had a non-zero sum.
    Precomputed,
    /// The precomputed aggregate summed to zero and raw votes were counted.
    Raw,
}

/// A total together with the tier it was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedTotal {
    /// The vote total.
    pub value: u64,
    /// The tier the total was read from.
    pub source: TotalSource,
}

/// Computes `part` as a percentage of `whole`.
///
/// Returns `0.0` when `whole` is zero, so the result is never NaN or
/// infinite.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    (part as f64 * 100.0) / whole as f64
}

struct GroupAccumulator<K, I, M> {
    key: K,
    total: u64,
    member_slots: HashMap<I, usize>,
    members: Vec<(M, u64)>,
}

impl<K, I: Eq + Hash, M> GroupAccumulator<K, I, M> {
    fn new(key: K) -> Self {
        Self {
            key,
            total: 0,
            member_slots: HashMap::new(),
            members: Vec::new(),
        }
    }

    fn add<R>(&mut self, row: &R)
    where
        R: VoteRecord<MemberId = I, Member = M>,
    {
        let votes: u64 = row.votes();
        self.total = self.total.saturating_add(votes);

        match self.member_slots.entry(row.member_id()) {
            Entry::Occupied(slot) => {
                let tally: &mut (M, u64) = &mut self.members[*slot.get()];
                tally.1 = tally.1.saturating_add(votes);
            }
            Entry::Vacant(slot) => {
                slot.insert(self.members.len());
                self.members.push((row.member(), votes));
            }
        }
    }

    fn finish(self, grand_total: u64) -> GroupedStat<K, M> {
        let group_total: u64 = self.total;
        let mut members: Vec<MemberTally<M>> = self
            .members
            .into_iter()
            .map(|(member, votes)| MemberTally {
                member,
                votes,
                percentage: percentage(votes, group_total),
            })
            .collect();
        // Stable sort keeps encounter order among equal counts.
        members.sort_by(|a, b| b.votes.cmp(&a.votes));

        GroupedStat {
            key: self.key,
            total_votes: group_total,
            percentage: percentage(group_total, grand_total),
            members,
        }
    }
}

/// Groups rows by a key and tallies the members of each group.
///
/// Rows whose key is `None` are counted under `placeholder`.
///
/// # Arguments
///
/// * `rows` - The rows to aggregate
/// * `key_fn` - Extracts the grouping key from a row
/// * `placeholder` - Key used for rows with no key
///
/// # Returns
///
/// One `GroupedStat` per distinct key, sorted by descending total. The
/// sum of all group totals equals the sum of `votes()` over `rows`.
pub fn aggregate_by_key<R, K, F>(
    rows: &[R],
    key_fn: F,
    placeholder: &K,
) -> Vec<GroupedStat<K, R::Member>>
where
    R: VoteRecord,
    K: Eq + Hash + Clone,
    F: Fn(&R) -> Option<K>,
{
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<GroupAccumulator<K, R::MemberId, R::Member>> = Vec::new();

    for row in rows {
        let key: K = key_fn(row).unwrap_or_else(|| placeholder.clone());
        let slot: usize = match slots.entry(key) {
            Entry::Occupied(slot) => *slot.get(),
            Entry::Vacant(slot) => {
                let index: usize = groups.len();
                groups.push(GroupAccumulator::new(slot.key().clone()));
                slot.insert(index);
                index
            }
        };
        groups[slot].add(row);
    }

    let grand_total: u64 = groups
        .iter()
        .fold(0, |acc: u64, group| acc.saturating_add(group.total));

    let mut stats: Vec<GroupedStat<K, R::Member>> = groups
        .into_iter()
        .map(|group| group.finish(grand_total))
        .collect();
    stats.sort_by(|a, b| b.total_votes.cmp(&a.total_votes));
    stats
}

/// Sums precomputed rows, returning `None` when the sum is zero.
///
/// A zero sum means the precomputed tier is empty or stale and the raw
/// tier must be read instead. Every two-tier read goes through here.
#[must_use]
pub fn precomputed_total<'a, R, I>(aggregate_rows: I) -> Option<u64>
where
    R: VoteRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let sum: u64 = aggregate_rows
        .into_iter()
        .fold(0, |acc: u64, row| acc.saturating_add(row.votes()));
    (sum > 0).then_some(sum)
}

/// Resolves a total from precomputed rows, counting raw votes when the
/// precomputed rows sum to zero.
///
/// `raw_count` is invoked at most once, and only when the precomputed sum
/// is zero.
///
/// # Errors
///
/// Returns the error of `raw_count` if the raw count fails.
pub fn resolve_total<'a, R, I, F, E>(aggregate_rows: I, raw_count: F) -> Result<ResolvedTotal, E>
where
    R: VoteRecord + 'a,
    I: IntoIterator<Item = &'a R>,
    F: FnOnce() -> Result<u64, E>,
{
    if let Some(value) = precomputed_total(aggregate_rows) {
        return Ok(ResolvedTotal {
            value,
            source: TotalSource::Precomputed,
        });
    }

    Ok(ResolvedTotal {
        value: raw_count()?,
        source: TotalSource::Raw,
    })
}

/// Sums precomputed rows, falling back to a raw count when the sum is zero.
///
/// # Errors
///
/// Returns the error of `raw_count` if the raw count fails.
pub fn compute_fallback_total<'a, R, I, F, E>(aggregate_rows: I, raw_count: F) -> Result<u64, E>
where
    R: VoteRecord + 'a,
    I: IntoIterator<Item = &'a R>,
    F: FnOnce() -> Result<u64, E>,
{
    resolve_total(aggregate_rows, raw_count).map(|total| total.value)
}

/// Returns the `n` members of a group with the most votes.
///
/// Ties keep encounter order. Returns fewer than `n` members when the
/// group is smaller.
#[must_use]
pub fn top_n_within_group<K, M>(group: &GroupedStat<K, M>, n: usize) -> &[MemberTally<M>] {
    &group.members[..n.min(group.members.len())]
}

/// Collapses raw ballots into per-(country, candidate) totals.
///
/// The result has the same shape as the precomputed country view, so
/// callers can treat both tiers alike. Ballots without a country keep a
/// `None` country.
#[must_use]
pub fn country_totals_from_votes(votes: &[VoteWithCandidate]) -> Vec<CountryTotal> {
    aggregate_by_key(votes, |row| Some(row.vote.country.clone()), &None)
        .into_iter()
        .flat_map(|group| {
            let country: Option<String> = group.key;
            group
                .members
                .into_iter()
                .map(move |tally| CountryTotal {
                    country: country.clone(),
                    candidate: tally.member,
                    total_votes: tally.votes,
                })
        })
        .collect()
}
