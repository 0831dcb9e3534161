// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, Vote, VoteWithCandidate,
};

use crate::aggregate::VoteRecord;

impl VoteRecord for Vote {
    type MemberId = CandidateId;
    type Member = CandidateId;

    fn member_id(&self) -> CandidateId {
        self.candidate_id
    }

    fn member(&self) -> CandidateId {
        self.candidate_id
    }
}

impl VoteRecord for VoteWithCandidate {
    type MemberId = CandidateId;
    type Member = Candidate;

    fn member_id(&self) -> CandidateId {
        self.vote.candidate_id
    }

    fn member(&self) -> Candidate {
        self.candidate.clone()
    }
}

impl VoteRecord for CandidateTotal {
    type MemberId = CandidateId;
    type Member = CandidateId;

    fn member_id(&self) -> CandidateId {
        self.candidate_id
    }

    fn member(&self) -> CandidateId {
        self.candidate_id
    }

    fn votes(&self) -> u64 {
        self.total_votes
    }
}

impl VoteRecord for CountryTotal {
    type MemberId = CandidateId;
    type Member = Candidate;

    fn member_id(&self) -> CandidateId {
        self.candidate.id
    }

    fn member(&self) -> Candidate {
        self.candidate.clone()
    }

    fn votes(&self) -> u64 {
        self.total_votes
    }
}
