//! Result of one supply run

use crate::core::question::Question;
use crate::supply::policy::MaturityTier;

/// Where a question in a supply result came from.
///
/// Only used for accounting and tests; never shown to quiz takers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provenance {
    Store,
    Generated,
}

/// Questions produced by one supply run.
///
/// `provenance[i]` describes `questions[i]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplyOutcome {
    /// Shuffled questions handed back to the caller
    pub questions: Vec<Question>,
    pub provenance: Vec<Provenance>,
    /// Number requested by the caller
    pub requested: usize,
    /// Tier of the partition at lookup time
    pub tier: MaturityTier,
}

impl SupplyOutcome {
    /// Outcome of a zero-count request
    pub fn empty(tier: MaturityTier) -> Self {
        Self {
            questions: Vec::new(),
            provenance: Vec::new(),
            requested: 0,
            tier,
        }
    }

    /// Build an outcome from provenance-tagged questions, keeping their order
    pub fn from_tagged(
        tagged: Vec<(Provenance, Question)>,
        requested: usize,
        tier: MaturityTier,
    ) -> Self {
        let (provenance, questions) = tagged.into_iter().unzip();
        Self {
            questions,
            provenance,
            requested,
            tier,
        }
    }

    /// How many questions came from the store
    pub fn from_store(&self) -> usize {
        self.count_of(Provenance::Store)
    }

    /// How many questions were freshly generated
    pub fn generated(&self) -> usize {
        self.count_of(Provenance::Generated)
    }

    fn count_of(&self, source: Provenance) -> usize {
        self.provenance.iter().filter(|p| **p == source).count()
    }

    /// Fewer questions than requested (store-only fallback)
    pub fn is_partial(&self) -> bool {
        self.questions.len() < self.requested
    }

    /// How many questions are missing from a partial result
    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.questions.len())
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn into_questions(self) -> Vec<Question> {
        self.questions
    }
}
