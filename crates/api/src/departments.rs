// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Breakdown of home-country votes by department.
//!
//! Only raw ballots carry a region, so this view has no precomputed tier.

use tracing::debug;
use vote_dashboard::{
    GroupedStat, MemberTally, QueryGateway, aggregate_by_key, percentage, top_n_within_group,
};
use vote_dashboard_domain::{Candidate, ReferenceData, VoteWithCandidate};

use crate::error::{ApiError, DEPARTMENTS_FAILURE, store_failure};
use crate::request_response::{
    Coverage, DepartmentBreakdown, DepartmentCandidate, DepartmentData, DepartmentStat,
    DepartmentsResponse, NoDepartmentData,
};

/// Number of leading candidates listed per department.
pub const TOP_CANDIDATES_PER_DEPARTMENT: usize = 5;

fn department_candidate(tally: &MemberTally<Candidate>) -> DepartmentCandidate {
    DepartmentCandidate {
        id: tally.member.id.value(),
        name: tally.member.name.clone(),
        photo_url: tally.member.photo_url.clone(),
        votes: tally.votes,
        percentage: tally.percentage,
    }
}

fn department_stat(
    group: &GroupedStat<String, Candidate>,
    reference: &ReferenceData,
) -> DepartmentStat {
    let top: Option<&MemberTally<Candidate>> = group.top_member();

    DepartmentStat {
        department: group.key.clone(),
        total_votes: group.total_votes,
        percentage: group.percentage,
        top_candidate: top.map(|tally| tally.member.name.clone()),
        top_candidate_photo: top.map(|tally| tally.member.photo_url.clone()),
        top_candidate_votes: top.map_or(0, |tally| tally.votes),
        candidates: group.members.iter().map(department_candidate).collect(),
        top_candidates: top_n_within_group(group, TOP_CANDIDATES_PER_DEPARTMENT)
            .iter()
            .map(department_candidate)
            .collect(),
        official: reference.is_department(&group.key),
    }
}

/// Builds the department breakdown for the home country.
///
/// Ballots without a region are grouped under the unspecified label. When
/// the home country has no ballots at all, an explicit no-data payload is
/// returned instead of an empty breakdown.
///
/// # Errors
///
/// Returns `Internal` if the store cannot be read.
pub fn department_breakdown<G: QueryGateway>(
    gateway: &mut G,
    reference: &ReferenceData,
) -> Result<DepartmentsResponse, ApiError> {
    let ballots: Vec<VoteWithCandidate> = gateway
        .get_votes_with_region(&reference.home_country)
        .map_err(store_failure(DEPARTMENTS_FAILURE))?;

    if ballots.is_empty() {
        return Ok(DepartmentsResponse {
            success: true,
            data: DepartmentData::NoData(NoDepartmentData {
                departments: Vec::new(),
                total_votes: 0,
                message: reference.no_data_message.clone(),
            }),
        });
    }

    let groups: Vec<GroupedStat<String, Candidate>> = aggregate_by_key(
        &ballots,
        |row| row.vote.region.clone(),
        &reference.unspecified_region_label,
    );

    let total_votes: u64 = ballots.len() as u64;
    let unspecified_count: u64 = groups
        .iter()
        .find(|group| group.key == reference.unspecified_region_label)
        .map_or(0, |group| group.total_votes);
    let missing_departments: Vec<String> = reference
        .departments
        .iter()
        .filter(|name| !groups.iter().any(|group| &group.key == *name))
        .cloned()
        .collect();

    let departments: Vec<DepartmentStat> = groups
        .iter()
        .map(|group| department_stat(group, reference))
        .collect();

    debug!(
        departments = departments.len(),
        total_votes, unspecified_count, "Computed department breakdown"
    );

    Ok(DepartmentsResponse {
        success: true,
        data: DepartmentData::Breakdown(DepartmentBreakdown {
            department_count: departments.len(),
            departments,
            total_votes,
            unspecified_count,
            coverage: Coverage {
                specified: percentage(total_votes - unspecified_count, total_votes),
                unspecified: percentage(unspecified_count, total_votes),
            },
            missing_departments,
        }),
    })
}
