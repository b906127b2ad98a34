//!
//! Joint optimization of a single trellis step
//!
//! With `F` the fixed base ending the previous step and `P` the proposed base
//! ending this one, a step inserts the infix `M = m0 m1` so that
//!
//! ```text
//! ... F m0 m1 P ...
//!     \______/        alpha codon  F m0 m1
//!        \______/     beta codon   m0 m1 P
//! ```
//!
//! and the infix maximizing
//! `score(alpha_aa, F m0 m1) + score(beta_aa, m0 m1 P)` is chosen.
//!
use crate::code::{GeneticCode, START_CODON};
use crate::common::{base_index, Codon, Infix, Score};
use crate::error::{DualCodeError, Result};
use crate::scoring::ScoringTable;
use log::debug;

///
/// Amino acids expected at one position and its boundary flags
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Site {
    /// index into alpha
    pub position: usize,
    /// expected residue in the alpha frame
    pub alpha: u8,
    /// expected residue in the beta frame
    pub beta: u8,
    /// the alpha codon must be the start codon
    pub is_start: bool,
    /// the beta codon must be a stop codon
    pub is_end: bool,
}

///
/// Chosen infix and its score contribution
///
/// `feasible == false` marks a boundary violation (start/stop codon cannot be
/// placed); its score is the stop penalty.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub infix: Infix,
    pub score: Score,
    pub feasible: bool,
}

impl Step {
    ///
    /// Higher score wins; equal scores prefer the lexicographically smaller
    /// infix (`A < C < G < T`).
    ///
    pub fn outranks(&self, other: &Step) -> bool {
        (self.feasible, self.score) > (other.feasible, other.score)
            || ((self.feasible, self.score) == (other.feasible, other.score)
                && self.infix < other.infix)
    }
}

/// position of the infix in a 4x4 table
fn infix_index(infix: Infix) -> Option<usize> {
    Some(base_index(infix[0])? * 4 + base_index(infix[1])?)
}

///
/// Step optimizer borrowing the immutable code and scoring tables
///
#[derive(Debug, Clone, Copy)]
pub struct StepOptimizer<'a> {
    code: &'a GeneticCode,
    scoring: &'a ScoringTable,
}

impl<'a> StepOptimizer<'a> {
    pub fn new(code: &'a GeneticCode, scoring: &'a ScoringTable) -> Self {
        StepOptimizer { code, scoring }
    }
    ///
    /// Best infix between `fixed` and `proposed` at `site`
    ///
    /// * interior: alpha codon and beta codon both non-stop
    /// * start: alpha codon is `ATG`
    /// * end: beta codon is a stop codon, which scores `0` as a satisfied
    ///   constraint; the infix is then selected by the alpha side only
    ///
    /// An empty candidate set at a boundary is a violation scored with the
    /// stop penalty. At an interior position it means the codon table is
    /// broken and `InfeasibleStep` is returned.
    ///
    pub fn best_infix(&self, fixed: u8, proposed: u8, site: &Site) -> Result<Step> {
        for &base in [fixed, proposed].iter() {
            if base_index(base).is_none() {
                return Err(DualCodeError::InvalidNucleotide(base as char));
            }
        }

        let start = [START_CODON];
        let alpha_codons: &[Codon] = if !site.is_start {
            self.code.codons_with_first(fixed)?
        } else if fixed == START_CODON[0] {
            &start
        } else {
            &[]
        };
        let beta_mask = self.beta_mask(proposed, site.is_end)?;

        let mut best: Option<Step> = None;
        for codon in alpha_codons {
            let infix = [codon[1], codon[2]];
            if !infix_index(infix).map_or(false, |i| beta_mask[i]) {
                continue;
            }
            let mut score = self
                .scoring
                .score(site.alpha, self.code.translate_codon(codon)?)?;
            if !site.is_end {
                let beta_codon = [infix[0], infix[1], proposed];
                score += self
                    .scoring
                    .score(site.beta, self.code.translate_codon(&beta_codon)?)?;
            }
            let step = Step {
                infix,
                score,
                feasible: true,
            };
            if best.map_or(true, |b| step.outranks(&b)) {
                best = Some(step);
            }
        }

        match best {
            Some(step) => Ok(step),
            None if site.is_start || site.is_end => {
                debug!(
                    "boundary violation at {} fixed={} proposed={}",
                    site.position, fixed as char, proposed as char
                );
                let infix = alpha_codons
                    .first()
                    .map(|c| [c[1], c[2]])
                    .unwrap_or([START_CODON[1], START_CODON[2]]);
                Ok(Step {
                    infix,
                    score: self.scoring.stop_penalty(),
                    feasible: false,
                })
            }
            None => Err(DualCodeError::InfeasibleStep {
                position: site.position,
                fixed: fixed as char,
                proposed: proposed as char,
            }),
        }
    }
    ///
    /// infixes `m0 m1` for which `m0 m1 proposed` is an allowed beta codon
    ///
    fn beta_mask(&self, proposed: u8, is_end: bool) -> Result<[bool; 16]> {
        let codons = if is_end {
            self.code.stop_codons()
        } else {
            self.code.codons_with_last(proposed)?
        };
        let mut mask = [false; 16];
        for codon in codons.iter().filter(|c| c[2] == proposed) {
            if let Some(i) = infix_index([codon[0], codon[1]]) {
                mask[i] = true;
            }
        }
        Ok(mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::VALID_BASES;
    use test_case::test_case;

    fn site(alpha: u8, beta: u8, is_start: bool, is_end: bool) -> Site {
        Site {
            position: 0,
            alpha,
            beta,
            is_start,
            is_end,
        }
    }

    #[test]
    fn interior_is_always_feasible() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        for &f in VALID_BASES.iter() {
            for &p in VALID_BASES.iter() {
                let step = opt.best_infix(f, p, &site(b'A', b'A', false, false)).unwrap();
                assert!(step.feasible);
                let alpha_codon = [f, step.infix[0], step.infix[1]];
                let beta_codon = [step.infix[0], step.infix[1], p];
                assert!(!code.is_stop(&alpha_codon));
                assert!(!code.is_stop(&beta_codon));
            }
        }
    }
    #[test]
    fn interior_exact_match() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        // alpha W = TGG, beta G = GGN: both exact with F=T, M=GG
        let step = opt.best_infix(b'T', b'C', &site(b'W', b'G', false, false)).unwrap();
        assert_eq!(&step.infix, b"GG");
        assert_eq!(step.score, 11 + 6);
    }
    #[test]
    fn interior_matches_exhaustive_search() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let residues = b"ACDEFGHIKLMNPQRSTVWY";
        for (&a, &b) in residues.iter().zip(residues.iter().rev()) {
            for &f in VALID_BASES.iter() {
                for &p in VALID_BASES.iter() {
                    let step = opt.best_infix(f, p, &site(a, b, false, false)).unwrap();
                    // exhaustive over all 16 infixes, first best in lexicographic order
                    let mut best: Option<(Score, Infix)> = None;
                    for &m0 in VALID_BASES.iter() {
                        for &m1 in VALID_BASES.iter() {
                            let ac = [f, m0, m1];
                            let bc = [m0, m1, p];
                            if code.is_stop(&ac) || code.is_stop(&bc) {
                                continue;
                            }
                            let s = scoring.score(a, code.translate_codon(&ac).unwrap()).unwrap()
                                + scoring.score(b, code.translate_codon(&bc).unwrap()).unwrap();
                            if best.map_or(true, |(bs, _)| s > bs) {
                                best = Some((s, [m0, m1]));
                            }
                        }
                    }
                    let (score, infix) = best.unwrap();
                    assert_eq!(step.score, score);
                    assert_eq!(step.infix, infix);
                }
            }
        }
    }
    #[test_case(b'A', b'C', true ; "start with A")]
    #[test_case(b'C', b'C', false ; "start needs A")]
    #[test_case(b'A', b'A', false ; "start makes TGA in beta")]
    fn start(fixed: u8, proposed: u8, feasible: bool) {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let step = opt
            .best_infix(fixed, proposed, &site(b'M', b'C', true, false))
            .unwrap();
        assert_eq!(&step.infix, b"TG");
        assert_eq!(step.feasible, feasible);
        if feasible {
            // ATG=M vs M, TGC=C vs C
            assert_eq!(step.score, 5 + 9);
        } else {
            assert_eq!(step.score, scoring.stop_penalty());
        }
    }
    #[test_case(b'A', true ; "TAA or TGA")]
    #[test_case(b'G', true ; "TAG")]
    #[test_case(b'C', false ; "no stop ends with C")]
    #[test_case(b'T', false ; "no stop ends with T")]
    fn end(proposed: u8, feasible: bool) {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let step = opt
            .best_infix(b'G', proposed, &site(b'V', b'K', false, true))
            .unwrap();
        assert_eq!(step.feasible, feasible);
        if feasible {
            // GTA/GTG = V: alpha exact, mandated stop scores nothing
            assert_eq!(step.infix[0], b'T');
            assert!(code.is_stop(&[step.infix[0], step.infix[1], proposed]));
            assert_eq!(step.score, 4);
        } else {
            assert_eq!(step.score, scoring.stop_penalty());
        }
    }
    #[test]
    fn end_tie_prefers_smaller_infix() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        // GTA and GTG are both V
        let step = opt.best_infix(b'G', b'A', &site(b'V', b'K', false, true)).unwrap();
        assert_eq!(&step.infix, b"TA");
    }
    #[test]
    fn start_and_end() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let s = site(b'M', b'K', true, true);
        let ok = opt.best_infix(b'A', b'A', &s).unwrap();
        assert!(ok.feasible);
        assert_eq!(&ok.infix, b"TG");
        assert_eq!(ok.score, 5);
        for &p in b"CGT".iter() {
            assert!(!opt.best_infix(b'A', p, &s).unwrap().feasible);
        }
        assert!(!opt.best_infix(b'T', b'A', &s).unwrap().feasible);
    }
    #[test]
    fn invalid_bases() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let s = site(b'A', b'A', false, false);
        assert!(opt.best_infix(b'N', b'A', &s).is_err());
        assert!(opt.best_infix(b'A', b'U', &s).is_err());
    }
    /// standard code with every `Cxx` and `xxT` codon turned into a stop
    fn code_without_c_first_or_t_last() -> GeneticCode {
        let mut table = *crate::code::STANDARD_TABLE;
        // TCAG order: index = 16 * first + 4 * second + third
        for (i, aa) in table.iter_mut().enumerate() {
            if i / 16 == 1 || i % 4 == 0 {
                *aa = b'*';
            }
        }
        GeneticCode::from_table(&table).unwrap()
    }
    #[test]
    fn empty_interior_intersection_is_fatal() {
        let code = code_without_c_first_or_t_last();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let s = Site {
            position: 5,
            ..site(b'K', b'V', false, false)
        };
        // no alpha codon starts with C
        let r = opt.best_infix(b'C', b'A', &s);
        assert!(matches!(
            r,
            Err(DualCodeError::InfeasibleStep {
                position: 5,
                fixed: 'C',
                proposed: 'A'
            })
        ));
        // no beta codon ends with T
        assert!(matches!(
            opt.best_infix(b'A', b'T', &s),
            Err(DualCodeError::InfeasibleStep { .. })
        ));
        // other pairs still have a candidate
        assert!(opt.best_infix(b'A', b'A', &s).unwrap().feasible);
        // at the boundary an empty intersection is a violation, not an error
        let start = opt.best_infix(b'C', b'A', &site(b'M', b'V', true, false)).unwrap();
        assert!(!start.feasible);
        assert_eq!(start.score, scoring.stop_penalty());
    }
    #[test]
    fn missing_score_is_fatal() {
        let code = GeneticCode::standard();
        let scoring = ScoringTable::blosum62();
        let opt = StepOptimizer::new(&code, &scoring);
        let r = opt.best_infix(b'A', b'A', &site(b'J', b'A', false, false));
        assert!(matches!(r, Err(DualCodeError::MissingScore(..))));
    }
    #[test]
    fn outranks_tie_break() {
        let a = Step {
            infix: *b"AC",
            score: 3,
            feasible: true,
        };
        let b = Step {
            infix: *b"AG",
            score: 3,
            feasible: true,
        };
        let c = Step {
            infix: *b"AA",
            score: 10,
            feasible: false,
        };
        assert!(a.outranks(&b));
        assert!(!b.outranks(&a));
        assert!(!a.outranks(&a));
        assert!(a.outranks(&c));
    }
}
