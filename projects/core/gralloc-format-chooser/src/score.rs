//! Weighted arbitration between the candidate layouts.
//!
//! Every block whose usage mask intersects the request's usage votes on every candidate:
//!
//! - A block which can't handle a candidate disqualifies it. Disqualification is permanent for
//!   the rest of the call, whatever later blocks say.
//! - While compression is not allowed, compressed candidates are disqualified the same way.
//! - Otherwise the block's weight is added to the candidate's score.
//!
//! The board keeps a running best while the votes come in. A candidate takes over only when its
//! new total is strictly greater than the current best's total, so the first candidate to reach a
//! score keeps it against later equal scores. The outcome depends on the order blocks vote in: a
//! later block lowering the best's total does not hand the lead back to a candidate which was
//! already passed over.
//!
//! A best which gets disqualified is replaced by the highest scoring survivor (the first one
//! declared in [`InternalFormat`] on equal scores), so the winner is always supported by every
//! matching block.

use crate::block_table::BlockTable;
use crate::formats::{ExtendedFormat, InternalFormat, RequestFormat};
use crate::usage::UsageFlags;

/// State of a single candidate during arbitration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CandidateScore {
    /// No matching block has voted yet.
    #[default]
    Unscored,
    /// Accumulated weight so far.
    Scored(i32),
    /// Rejected by at least one block.
    Disqualified,
}

impl CandidateScore {
    /// The accumulated score, if the candidate is still eligible and has been scored.
    pub const fn value(self) -> Option<i32> {
        match self {
            Self::Scored(score) => Some(score),
            _ => None,
        }
    }
}

/// Scores of every candidate for one request, and the running best.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreBoard {
    scores: [CandidateScore; InternalFormat::COUNT],
    best: Option<InternalFormat>,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    /// Creates a board with every candidate unscored.
    pub const fn new() -> Self {
        Self {
            scores: [CandidateScore::Unscored; InternalFormat::COUNT],
            best: None,
        }
    }

    /// The state of `candidate`.
    pub fn score(&self, candidate: InternalFormat) -> CandidateScore {
        self.scores[candidate.index()]
    }

    /// Every candidate with its state, in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = (InternalFormat, CandidateScore)> + '_ {
        InternalFormat::all_values()
            .iter()
            .map(|candidate| (*candidate, self.score(*candidate)))
    }

    fn add(&mut self, candidate: InternalFormat, weight: i16) {
        let slot = &mut self.scores[candidate.index()];
        *slot = match *slot {
            CandidateScore::Unscored => CandidateScore::Scored(i32::from(weight)),
            CandidateScore::Scored(score) => {
                CandidateScore::Scored(score.saturating_add(i32::from(weight)))
            }
            CandidateScore::Disqualified => return,
        };

        let Some(total) = slot.value() else {
            return;
        };
        let leads = match self.best.and_then(|best| self.score(best).value()) {
            Some(best_total) => total > best_total,
            None => true,
        };
        if leads {
            self.best = Some(candidate);
        }
    }

    fn disqualify(&mut self, candidate: InternalFormat) {
        self.scores[candidate.index()] = CandidateScore::Disqualified;
        if self.best == Some(candidate) {
            self.best = self.highest_survivor();
        }
    }

    fn highest_survivor(&self) -> Option<InternalFormat> {
        let mut best: Option<(InternalFormat, i32)> = None;
        for (candidate, score) in self.iter() {
            let Some(score) = score.value() else {
                continue;
            };

            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((candidate, score)),
            }
        }

        best.map(|(candidate, _)| candidate)
    }

    /// The winning candidate: the running best, which is never disqualified.
    pub fn winner(&self) -> Option<InternalFormat> {
        self.best
    }
}

/// Runs the arbitration for `request`.
pub fn score_candidates(
    request: RequestFormat,
    usage: UsageFlags,
    afbc_allowed: bool,
    table: &BlockTable,
) -> ScoreBoard {
    let mut board = ScoreBoard::new();

    for block in table.matching(usage) {
        for candidate in InternalFormat::all_values() {
            let eligible = afbc_allowed || !candidate.is_compressed();
            match block.weight(request, *candidate) {
                Some(weight) if eligible => board.add(*candidate, weight),
                _ => board.disqualify(*candidate),
            }
        }
    }

    board
}

/// Picks the layout for `request`, or [`None`] if no candidate survives.
pub fn select(
    request: RequestFormat,
    usage: UsageFlags,
    afbc_allowed: bool,
    table: &BlockTable,
) -> Option<ExtendedFormat> {
    score_candidates(request, usage, afbc_allowed, table)
        .winner()
        .map(InternalFormat::extended_format)
}
