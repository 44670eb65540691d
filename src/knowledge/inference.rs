//! Pairwise subset resolution.
//!
//! If sentence `S1` covers every cell of `S2`, the cells only in `S1` hold
//! exactly `S1.count - S2.count` mines. That residual either settles all of
//! those cells (zero mines, or one mine per cell) or becomes a new, smaller
//! sentence.
//!
//! Resolution only compares a newly observed sentence with the sentences
//! already known. It never closes over all pairs, so some facts surface only
//! after later observations.

use tracing::debug;

use crate::core::Cell;

use super::{Conflict, Sentence};

/// Result of resolving one pair of sentences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Deduction {
    /// Every cell in the difference is safe.
    Safes(Vec<Cell>),
    /// Every cell in the difference is a mine.
    Mines(Vec<Cell>),
    /// The difference carries a partial count.
    Derived(Sentence),
}

/// Facts collected from one resolution pass, applied by the caller afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Inferences {
    pub safes: Vec<Cell>,
    pub mines: Vec<Cell>,
    pub sentences: Vec<Sentence>,
}

impl Inferences {
    /// Check if nothing was learned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.safes.is_empty() && self.mines.is_empty() && self.sentences.is_empty()
    }

    fn push(&mut self, deduction: Deduction) {
        match deduction {
            Deduction::Safes(cells) => self.safes.extend(cells),
            Deduction::Mines(cells) => self.mines.extend(cells),
            Deduction::Derived(sentence) => self.sentences.push(sentence),
        }
    }
}

/// Resolve two sentences against each other.
///
/// Either may be the superset. Returns `Ok(None)` when neither contains the
/// other, when the sentences are equal, or when either is degenerate.
///
/// Fails if the sentences cover the same cells with different counts, or if
/// the superset claims fewer mines than the subset or more than its extra
/// cells can hold.
pub fn resolve_pair(a: &Sentence, b: &Sentence) -> Result<Option<Deduction>, Conflict> {
    if a.is_degenerate() || b.is_degenerate() {
        return Ok(None);
    }

    let (superset, subset) = if a.is_superset(b) {
        (a, b)
    } else if b.is_superset(a) {
        (b, a)
    } else {
        return Ok(None);
    };

    let mut diff: Vec<Cell> = superset
        .cells()
        .difference(subset.cells())
        .copied()
        .collect();
    if diff.is_empty() && superset.count() == subset.count() {
        return Ok(None);
    }
    if superset.count() < subset.count() || diff.is_empty() {
        return Err(Conflict(format!(
            "{} and {} disagree on the mines they share",
            superset, subset
        )));
    }
    diff.sort_unstable();

    let diff_count = superset.count() - subset.count();
    if diff_count > diff.len() {
        return Err(Conflict(format!(
            "{} leaves {} mines for {} cells beyond {}",
            superset,
            diff_count,
            diff.len(),
            subset
        )));
    }

    let deduction = if diff_count == 0 {
        Deduction::Safes(diff)
    } else if diff_count == diff.len() {
        Deduction::Mines(diff)
    } else {
        Deduction::Derived(Sentence::new(diff, diff_count))
    };
    Ok(Some(deduction))
}

/// Resolve a new sentence against every existing one.
///
/// Nothing is applied here: the derived facts are returned so the caller can
/// mark them once iteration over `knowledge` is finished.
pub fn resolve(new_sentence: &Sentence, knowledge: &[Sentence]) -> Result<Inferences, Conflict> {
    let mut inferences = Inferences::default();
    if new_sentence.is_degenerate() {
        return Ok(inferences);
    }

    for existing in knowledge {
        if let Some(deduction) = resolve_pair(existing, new_sentence)? {
            debug!(%existing, new = %new_sentence, ?deduction, "resolved sentence pair");
            inferences.push(deduction);
        }
    }
    Ok(inferences)
}

#[cfg(test)]
mod tests {
    use super::*;

    const A: Cell = Cell::new(0, 0);
    const B: Cell = Cell::new(0, 1);
    const C: Cell = Cell::new(0, 2);
    const D: Cell = Cell::new(1, 0);

    #[test]
    fn test_zero_residual_is_safe() {
        let existing = Sentence::new([A, B, C], 1);
        let new = Sentence::new([A, B], 1);

        assert_eq!(resolve_pair(&existing, &new), Ok(Some(Deduction::Safes(vec![C]))));
    }

    #[test]
    fn test_full_residual_is_mine() {
        let existing = Sentence::new([A, B, C], 2);
        let new = Sentence::new([A, B], 1);

        assert_eq!(resolve_pair(&existing, &new), Ok(Some(Deduction::Mines(vec![C]))));
    }

    #[test]
    fn test_partial_residual_derives_sentence() {
        let existing = Sentence::new([A, B, C, D], 2);
        let new = Sentence::new([A], 1);

        assert_eq!(
            resolve_pair(&existing, &new),
            Ok(Some(Deduction::Derived(Sentence::new([B, C, D], 1))))
        );
    }

    #[test]
    fn test_new_sentence_as_superset() {
        // The superset relation holds the other way round
        let existing = Sentence::new([A, B], 1);
        let new = Sentence::new([A, B, C], 1);

        assert_eq!(resolve_pair(&existing, &new), Ok(Some(Deduction::Safes(vec![C]))));
    }

    #[test]
    fn test_unrelated_sentences() {
        let existing = Sentence::new([A, B], 1);
        let new = Sentence::new([B, C], 1);

        assert_eq!(resolve_pair(&existing, &new), Ok(None));
    }

    #[test]
    fn test_equal_cells_yield_nothing() {
        let existing = Sentence::new([A, B], 1);
        let new = Sentence::new([B, A], 1);

        assert_eq!(resolve_pair(&existing, &new), Ok(None));
    }

    #[test]
    fn test_degenerate_skipped() {
        let degenerate = Sentence::new(Vec::<Cell>::new(), 0);
        let sentence = Sentence::new([A, B], 1);

        assert_eq!(resolve_pair(&degenerate, &sentence), Ok(None));
        assert_eq!(resolve_pair(&sentence, &degenerate), Ok(None));
        assert!(resolve(&degenerate, &[sentence]).unwrap().is_empty());
    }

    #[test]
    fn test_contradictions_are_reported() {
        // Superset holds fewer mines than its subset
        let existing = Sentence::new([A, B, C], 0);
        let new = Sentence::new([A], 1);
        assert!(resolve_pair(&existing, &new).is_err());

        // Extra cells cannot hold the remaining mines
        let existing = Sentence::new([A, B], 2);
        let new = Sentence::new([A], 0);
        assert!(resolve_pair(&existing, &new).is_err());

        // Same cells, different counts
        let existing = Sentence::new([A, B], 1);
        let new = Sentence::new([A, B], 2);
        assert!(resolve_pair(&existing, &new).is_err());
        assert!(resolve_pair(&new, &existing).is_err());
        assert!(resolve(&new, &[existing]).is_err());
    }

    #[test]
    fn test_resolve_collects_every_pair() {
        let knowledge = vec![
            Sentence::new([A, B, C], 1),
            Sentence::new([A, B, D], 2),
            Sentence::new([C, D], 1),
        ];
        let new = Sentence::new([A, B], 1);

        let inferences = resolve(&new, &knowledge).unwrap();

        assert_eq!(inferences.safes, vec![C]);
        assert_eq!(inferences.mines, vec![D]);
        assert!(inferences.sentences.is_empty());
    }

    #[test]
    fn test_resolve_defers_derived_sentences() {
        let knowledge = vec![Sentence::new([A, B, C, D], 2)];
        let new = Sentence::new([A], 0);

        let inferences = resolve(&new, &knowledge).unwrap();

        assert!(inferences.safes.is_empty());
        assert_eq!(inferences.sentences, vec![Sentence::new([B, C, D], 2)]);
    }
}
