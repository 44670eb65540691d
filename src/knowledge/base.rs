//! The knowledge base: confirmed facts plus unresolved sentences.
//!
//! ## Observation flow
//!
//! `add_knowledge(cell, count)`:
//! 1. Record the move and mark the revealed cell safe
//! 2. Build a sentence over the unknown neighbors, discounting known mines
//! 3. Resolve it against every existing sentence, collecting derived facts
//! 4. Append derived sentences, then the new one, then apply derived facts
//! 5. Deduplicate and resolve all-safe / all-mine sentences to a fixed point
//!
//! ```
//! use minesweeper_ai::core::Cell;
//! use minesweeper_ai::knowledge::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::new(3, 3);
//! kb.add_knowledge(Cell::new(1, 1), 0).unwrap();
//!
//! assert_eq!(kb.safes().len(), 9);
//! assert!(kb.knowledge().is_empty());
//! assert_eq!(kb.safe_move(), Some(Cell::new(0, 0)));
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{BoardConfig, Cell, ObservationError};

use super::inference;
use super::{Conflict, Sentence};

/// Facts and sentences known about one board.
///
/// `safes` and `mines` are disjoint and only ever grow. Every sentence in
/// `knowledge` satisfies `count <= cells.len()`.
#[derive(Clone, Debug)]
pub struct KnowledgeBase {
    height: usize,
    width: usize,
    moves_made: FxHashSet<Cell>,
    safes: FxHashSet<Cell>,
    mines: FxHashSet<Cell>,
    knowledge: Vec<Sentence>,
}

impl KnowledgeBase {
    /// Create an empty knowledge base for a `height` x `width` board.
    #[must_use]
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            moves_made: FxHashSet::default(),
            safes: FxHashSet::default(),
            mines: FxHashSet::default(),
            knowledge: Vec::new(),
        }
    }

    /// Create an empty knowledge base sized for `config`.
    #[must_use]
    pub fn for_board(config: &BoardConfig) -> Self {
        Self::new(config.height(), config.width())
    }

    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cells already chosen as moves.
    #[must_use]
    pub fn moves_made(&self) -> &FxHashSet<Cell> {
        &self.moves_made
    }

    /// Cells known to be safe.
    #[must_use]
    pub fn safes(&self) -> &FxHashSet<Cell> {
        &self.safes
    }

    /// Cells known to be mines.
    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    /// Active, unresolved sentences in insertion order.
    #[must_use]
    pub fn knowledge(&self) -> &[Sentence] {
        &self.knowledge
    }

    /// Check whether `cell` is known safe or known mined.
    #[must_use]
    pub fn is_known(&self, cell: Cell) -> bool {
        self.safes.contains(&cell) || self.mines.contains(&cell)
    }

    // === Marking ===

    /// Record `cell` as a mine and remove it from every sentence.
    ///
    /// Panics if `cell` is already known safe.
    pub fn mark_mine(&mut self, cell: Cell) {
        self.try_mark_mine(cell)
            .unwrap_or_else(|conflict| panic!("{}", conflict));
    }

    /// Record `cell` as safe and remove it from every sentence.
    ///
    /// Panics if `cell` is already known to be a mine.
    pub fn mark_safe(&mut self, cell: Cell) {
        self.try_mark_safe(cell)
            .unwrap_or_else(|conflict| panic!("{}", conflict));
    }

    fn try_mark_mine(&mut self, cell: Cell) -> Result<(), Conflict> {
        if self.safes.contains(&cell) {
            return Err(Conflict(format!(
                "Cell {} marked as mine but already known safe",
                cell
            )));
        }
        if self.mines.insert(cell) {
            debug!(%cell, "marked mine");
        }
        for sentence in &mut self.knowledge {
            sentence.try_mark_mine(cell)?;
        }
        Ok(())
    }

    fn try_mark_safe(&mut self, cell: Cell) -> Result<(), Conflict> {
        if self.mines.contains(&cell) {
            return Err(Conflict(format!(
                "Cell {} marked as safe but already known mine",
                cell
            )));
        }
        if self.safes.insert(cell) {
            debug!(%cell, "marked safe");
        }
        for sentence in &mut self.knowledge {
            sentence.try_mark_safe(cell)?;
        }
        Ok(())
    }

    // === Observations ===

    /// Learn that the revealed, safe `cell` has `count` mines among its
    /// neighbors.
    ///
    /// Returns an error, leaving the knowledge base untouched, when the
    /// observation is out of range for the cell, or when it contradicts known
    /// facts or an active sentence while being applied.
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<(), ObservationError> {
        let sentence = self.observation_sentence(cell, count)?;

        // Applied to a copy: a conflict may surface after several marks
        let mut next = self.clone();
        if let Err(conflict) = next.apply_observation(cell, sentence) {
            debug!(%cell, count, %conflict, "rejected observation");
            return Err(ObservationError::Contradiction {
                cell,
                count,
                reason: conflict.to_string(),
            });
        }
        *self = next;
        Ok(())
    }

    fn apply_observation(&mut self, cell: Cell, sentence: Sentence) -> Result<(), Conflict> {
        self.moves_made.insert(cell);
        self.try_mark_safe(cell)?;

        let inferences = inference::resolve(&sentence, &self.knowledge)?;
        debug!(%cell, %sentence, derived = inferences.sentences.len(), "added knowledge");

        self.knowledge.extend(inferences.sentences);
        self.knowledge.push(sentence);
        for safe in inferences.safes {
            self.try_mark_safe(safe)?;
        }
        for mine in inferences.mines {
            self.try_mark_mine(mine)?;
        }

        self.deduplicate();
        self.resolve_knowns()
    }

    /// Validate an observation and build its sentence over unknown neighbors.
    fn observation_sentence(&self, cell: Cell, count: usize) -> Result<Sentence, ObservationError> {
        if !cell.in_bounds(self.height, self.width) {
            return Err(ObservationError::OutOfBounds {
                cell,
                height: self.height,
                width: self.width,
            });
        }
        if self.mines.contains(&cell) {
            return Err(ObservationError::KnownMine { cell });
        }

        let neighbors = cell.neighbors(self.height, self.width);
        if count > neighbors.len() {
            return Err(ObservationError::ImpossibleCount {
                cell,
                count,
                neighbors: neighbors.len(),
            });
        }

        let known_mines = neighbors.iter().filter(|&n| self.mines.contains(n)).count();
        let unknown: Vec<Cell> = neighbors
            .iter()
            .copied()
            .filter(|&n| !self.is_known(n))
            .collect();

        let max = known_mines + unknown.len();
        if count < known_mines || count > max {
            return Err(ObservationError::InconsistentCount {
                cell,
                count,
                min: known_mines,
                max,
            });
        }

        Ok(Sentence::new(unknown, count - known_mines))
    }

    /// Remove structurally equal sentences, keeping the first occurrence.
    fn deduplicate(&mut self) {
        let mut unique: Vec<Sentence> = Vec::with_capacity(self.knowledge.len());
        for sentence in self.knowledge.drain(..) {
            if !unique.contains(&sentence) {
                unique.push(sentence);
            }
        }
        self.knowledge = unique;
    }

    /// Drop every sentence that settles its cells, marking them, until a pass
    /// settles nothing.
    ///
    /// Every productive pass removes at least one sentence and nothing here
    /// adds sentences, so `len + 1` passes always suffice.
    fn resolve_knowns(&mut self) -> Result<(), Conflict> {
        let max_passes = self.knowledge.len() + 1;
        for pass in 0..max_passes {
            if !self.resolve_pass()? {
                trace!(pass, remaining = self.knowledge.len(), "knowledge at fixed point");
                return Ok(());
            }
        }
        panic!(
            "Knowledge did not reach a fixed point within {} passes",
            max_passes
        );
    }

    /// One snapshot-then-apply pass. Returns whether any sentence resolved.
    fn resolve_pass(&mut self) -> Result<bool, Conflict> {
        let mut mines = Vec::new();
        let mut safes = Vec::new();

        let before = self.knowledge.len();
        self.knowledge.retain(|sentence| {
            if sentence.is_degenerate() {
                false
            } else if let Some(cells) = sentence.known_mines() {
                mines.extend(cells.iter().copied());
                false
            } else if let Some(cells) = sentence.known_safes() {
                safes.extend(cells.iter().copied());
                false
            } else {
                true
            }
        });
        if self.knowledge.len() == before {
            return Ok(false);
        }

        mines.sort_unstable();
        safes.sort_unstable();
        for mine in mines {
            self.try_mark_mine(mine)?;
        }
        for safe in safes {
            self.try_mark_safe(safe)?;
        }
        self.deduplicate();
        Ok(true)
    }

    // === Moves ===

    /// A known-safe cell not yet played.
    ///
    /// Picks the lowest such cell in row-major order; `None` if there is none.
    #[must_use]
    pub fn safe_move(&self) -> Option<Cell> {
        self.safes
            .iter()
            .filter(|&&cell| !self.moves_made.contains(&cell) && !self.mines.contains(&cell))
            .min()
            .copied()
    }

    /// Every cell neither played nor known to be a mine, in row-major order.
    #[must_use]
    pub fn open_cells(&self) -> Vec<Cell> {
        Cell::all(self.height, self.width)
            .filter(|cell| !self.moves_made.contains(cell) && !self.mines.contains(cell))
            .collect()
    }

    /// Capture the current state for diagnostics.
    #[must_use]
    pub fn snapshot(&self) -> KnowledgeSnapshot {
        fn sorted(cells: &FxHashSet<Cell>) -> Vec<Cell> {
            let mut out: Vec<_> = cells.iter().copied().collect();
            out.sort_unstable();
            out
        }

        KnowledgeSnapshot {
            height: self.height,
            width: self.width,
            moves_made: sorted(&self.moves_made),
            safes: sorted(&self.safes),
            mines: sorted(&self.mines),
            knowledge: self.knowledge.clone(),
        }
    }
}

/// Point-in-time view of a knowledge base with cells in row-major order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeSnapshot {
    pub height: usize,
    pub width: usize,
    pub moves_made: Vec<Cell>,
    pub safes: Vec<Cell>,
    pub mines: Vec<Cell>,
    pub knowledge: Vec<Sentence>,
}
