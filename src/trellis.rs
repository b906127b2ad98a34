//!
//! Forward trellis over the alpha positions
//!
//! # Overview of calculation
//!
//! s = x0 (M_0 P_0) (M_1 P_1) ... (M_{n-1} P_{n-1}) : candidate of length 1+3n
//!
//! T[i][P]
//!  = best score of s[:3i+4] that ends with base P
//!  = max_{F} T[i-1][F] + step(F, P, i)
//!
//! T[-1][F] = 0 for every seed base F (an empty `TrellisState`).
//!
//! Only the terminal base is carried between positions, so each position costs
//! 4x4 step evaluations. Each cell remembers its fixed base and infix and the
//! sequence is recovered by traceback.
//!
use crate::code::GeneticCode;
use crate::common::{base_index, Infix, Score, Sequence, VALID_BASES};
use crate::error::{DualCodeError, Result};
use crate::scoring::ScoringTable;
use crate::step::{Site, Step, StepOptimizer};
use log::{info, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

///
/// Best partial solution ending in a terminal base
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// cumulative score
    pub score: Score,
    /// no boundary violation on the path
    pub feasible: bool,
    /// terminal base of the previous position this cell extends
    pub fixed: u8,
    /// infix inserted between `fixed` and the terminal base
    pub infix: Infix,
}

impl Cell {
    /// `(feasible, score)` strictly greater
    fn beats(&self, other: &Cell) -> bool {
        (self.feasible, self.score) > (other.feasible, other.score)
    }
}

///
/// Checkpoint of a trellis run
///
/// `tables[i][k]` is the cell of position `i` ending in `VALID_BASES[k]`;
/// the number of tables is the number of processed positions.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrellisState {
    pub tables: Vec<[Cell; 4]>,
}

impl TrellisState {
    pub fn new() -> Self {
        TrellisState { tables: Vec::new() }
    }
    /// number of processed positions
    pub fn position(&self) -> usize {
        self.tables.len()
    }
    ///
    /// `(score, feasible)` of the 4 live slots
    ///
    pub fn slots(&self) -> [(Score, bool); 4] {
        match self.tables.last() {
            Some(table) => {
                let mut slots = [(0, true); 4];
                for (slot, cell) in slots.iter_mut().zip(table.iter()) {
                    *slot = (cell.score, cell.feasible);
                }
                slots
            }
            None => [(0, true); 4],
        }
    }
    ///
    /// Sequence of the slot ending in `VALID_BASES[terminal]`
    ///
    pub fn traceback(&self, terminal: usize) -> Result<Sequence> {
        let mut seq = Vec::with_capacity(1 + 3 * self.tables.len());
        let mut k = terminal;
        for table in self.tables.iter().rev() {
            let cell = &table[k];
            seq.push(VALID_BASES[k]);
            seq.push(cell.infix[1]);
            seq.push(cell.infix[0]);
            k = base_index(cell.fixed).ok_or_else(|| {
                DualCodeError::InvalidState(format!("fixed base `{}`", cell.fixed as char))
            })?;
        }
        seq.push(VALID_BASES[k]);
        seq.reverse();
        Ok(seq)
    }
}

impl Default for TrellisState {
    fn default() -> Self {
        TrellisState::new()
    }
}

///
/// Optimal dual encoding
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DualEncoding {
    /// nucleotide sequence of length `1 + 3 * alpha.len()`
    pub sequence: Sequence,
    /// total score of both frames
    ///
    /// Sum of the alpha scores over every position and the beta scores over
    /// every position but the last. The mandated final beta stop adds `0`,
    /// not `score(beta, '*')`.
    pub score: Score,
    /// beta index of alpha position 0
    pub beta_offset: usize,
}

///
/// One trellis run for a fixed `(alpha, beta, beta_offset)`
///
#[derive(Debug, Clone)]
pub struct Trellis<'a> {
    optimizer: StepOptimizer<'a>,
    alpha: &'a [u8],
    beta: &'a [u8],
    beta_offset: usize,
    state: TrellisState,
}

impl<'a> Trellis<'a> {
    ///
    /// Validate the inputs and create a fresh run
    ///
    /// Fails with `InvalidOffset` when `beta[beta_offset..beta_offset+alpha.len()]`
    /// is out of range, before any step is evaluated.
    ///
    pub fn new(
        code: &'a GeneticCode,
        scoring: &'a ScoringTable,
        alpha: &'a [u8],
        beta: &'a [u8],
        beta_offset: isize,
    ) -> Result<Self> {
        Trellis::resume(code, scoring, alpha, beta, beta_offset, TrellisState::new())
    }
    ///
    /// Continue a run from a checkpoint
    ///
    pub fn resume(
        code: &'a GeneticCode,
        scoring: &'a ScoringTable,
        alpha: &'a [u8],
        beta: &'a [u8],
        beta_offset: isize,
        state: TrellisState,
    ) -> Result<Self> {
        if alpha.is_empty() {
            return Err(DualCodeError::EmptyAlpha);
        }
        let end = beta_offset.checked_add(alpha.len() as isize);
        match end {
            Some(end) if beta_offset >= 0 && end <= beta.len() as isize => {}
            _ => {
                return Err(DualCodeError::InvalidOffset {
                    offset: beta_offset,
                    alpha_len: alpha.len(),
                    beta_len: beta.len(),
                    // saturated when the window end overflows
                    end: end.unwrap_or(isize::MAX),
                })
            }
        }
        if state.position() > alpha.len() {
            return Err(DualCodeError::InvalidState(format!(
                "checkpoint at position {} but alpha has length {}",
                state.position(),
                alpha.len()
            )));
        }
        let has_invalid_base = state
            .tables
            .iter()
            .flat_map(|table| table.iter())
            .any(|cell| {
                base_index(cell.fixed).is_none()
                    || base_index(cell.infix[0]).is_none()
                    || base_index(cell.infix[1]).is_none()
            });
        if has_invalid_base {
            return Err(DualCodeError::InvalidState(
                "checkpoint contains a non-ACGT base".to_string(),
            ));
        }
        Ok(Trellis {
            optimizer: StepOptimizer::new(code, scoring),
            alpha,
            beta,
            beta_offset: beta_offset as usize,
            state,
        })
    }
    /// number of processed positions
    pub fn position(&self) -> usize {
        self.state.position()
    }
    /// all positions of alpha are processed
    pub fn is_complete(&self) -> bool {
        self.position() == self.alpha.len()
    }
    /// current checkpoint
    pub fn state(&self) -> &TrellisState {
        &self.state
    }
    fn site(&self, i: usize) -> Site {
        Site {
            position: i,
            alpha: self.alpha[i],
            beta: self.beta[self.beta_offset + i],
            is_start: i == 0,
            is_end: i == self.alpha.len() - 1,
        }
    }
    ///
    /// Best cell ending in `proposed` over the 4 fixed bases
    ///
    /// Fixed bases are visited in `A, C, G, T` order and replaced only by a
    /// strictly better candidate, so ties keep the smaller fixed base.
    ///
    fn best_cell(&self, site: &Site, slots: &[(Score, bool); 4], proposed: u8) -> Result<Cell> {
        let mut best: Option<Cell> = None;
        for (&fixed, &(score, feasible)) in VALID_BASES.iter().zip(slots.iter()) {
            let Step {
                infix,
                score: step_score,
                feasible: step_feasible,
            } = self.optimizer.best_infix(fixed, proposed, site)?;
            let cell = Cell {
                score: score + step_score,
                feasible: feasible && step_feasible,
                fixed,
                infix,
            };
            if best.map_or(true, |b| cell.beats(&b)) {
                best = Some(cell);
            }
        }
        // VALID_BASES is non-empty
        best.ok_or_else(|| DualCodeError::InvalidState("no fixed base".to_string()))
    }
    fn check_not_complete(&self) -> Result<()> {
        if self.is_complete() {
            Err(DualCodeError::InvalidState(
                "trellis is already complete".to_string(),
            ))
        } else {
            Ok(())
        }
    }
    ///
    /// Process the next position
    ///
    pub fn advance(&mut self) -> Result<()> {
        self.check_not_complete()?;
        let site = self.site(self.position());
        let slots = self.state.slots();
        let mut table = [Cell {
            score: 0,
            feasible: false,
            fixed: VALID_BASES[0],
            infix: [VALID_BASES[0]; 2],
        }; 4];
        for (cell, &proposed) in table.iter_mut().zip(VALID_BASES.iter()) {
            *cell = self.best_cell(&site, &slots, proposed)?;
        }
        self.push(table);
        Ok(())
    }
    ///
    /// Process the next position, evaluating the 4 proposed bases in parallel
    ///
    pub fn advance_parallel(&mut self) -> Result<()> {
        self.check_not_complete()?;
        let site = self.site(self.position());
        let slots = self.state.slots();
        let this: &Self = self;
        let cells: Vec<Cell> = VALID_BASES
            .par_iter()
            .map(|&proposed| this.best_cell(&site, &slots, proposed))
            .collect::<Result<Vec<Cell>>>()?;
        let mut table = [cells[0]; 4];
        table.copy_from_slice(&cells);
        self.push(table);
        Ok(())
    }
    fn push(&mut self, table: [Cell; 4]) {
        trace!(
            "position={} scores={:?}",
            self.position(),
            table.iter().map(|c| c.score).collect::<Vec<_>>()
        );
        self.state.tables.push(table);
    }
    ///
    /// Run the remaining positions and extract the optimum
    ///
    pub fn run(mut self, parallel: bool) -> Result<DualEncoding> {
        info!(
            "trellis start alpha_len={} beta_offset={} position={} parallel={}",
            self.alpha.len(),
            self.beta_offset,
            self.position(),
            parallel
        );
        while !self.is_complete() {
            if parallel {
                self.advance_parallel()?;
            } else {
                self.advance()?;
            }
        }
        self.finish()
    }
    ///
    /// Extract the best of the 4 terminal slots of a complete run
    ///
    /// Ties keep the smaller terminal base. Fails with `NoFeasibleSolution`
    /// if every slot carries a boundary violation.
    ///
    pub fn finish(self) -> Result<DualEncoding> {
        if !self.is_complete() {
            return Err(DualCodeError::InvalidState(format!(
                "trellis stopped at position {} of {}",
                self.position(),
                self.alpha.len()
            )));
        }
        let slots = self.state.slots();
        let mut best = 0;
        for k in 1..slots.len() {
            let (score, feasible) = slots[k];
            if (feasible, score) > (slots[best].1, slots[best].0) {
                best = k;
            }
        }
        let (score, feasible) = slots[best];
        if !feasible {
            return Err(DualCodeError::NoFeasibleSolution);
        }
        let sequence = self.state.traceback(best)?;
        info!("trellis done score={} length={}", score, sequence.len());
        Ok(DualEncoding {
            sequence,
            score,
            beta_offset: self.beta_offset,
        })
    }
}
