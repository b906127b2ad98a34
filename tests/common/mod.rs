//!
//! Exhaustive reference for the trellis, usable on tiny inputs only
//!
#![allow(dead_code)]
use dualcode::code::{GeneticCode, START_CODON};
use dualcode::common::{Score, Sequence, VALID_BASES};
use dualcode::scoring::ScoringTable;

///
/// Score of `seq` by independent re-translation, or `None` if it breaks a
/// start/stop constraint
///
/// alpha codon i = seq[3i..3i+3], beta codon i = seq[3i+1..3i+4]; the last
/// beta codon must be a stop and scores nothing.
///
pub fn rescore(
    code: &GeneticCode,
    scoring: &ScoringTable,
    seq: &[u8],
    alpha: &[u8],
    beta: &[u8],
) -> Option<Score> {
    let n = alpha.len();
    assert_eq!(seq.len(), 1 + 3 * n);
    if seq[..3] != START_CODON {
        return None;
    }
    let mut score = 0;
    for i in 0..n {
        let alpha_codon = &seq[3 * i..3 * i + 3];
        let beta_codon = &seq[3 * i + 1..3 * i + 4];
        if code.is_stop(alpha_codon) {
            return None;
        }
        score += scoring
            .score(alpha[i], code.translate_codon(alpha_codon).unwrap())
            .unwrap();
        if i == n - 1 {
            if !code.is_stop(beta_codon) {
                return None;
            }
        } else {
            if code.is_stop(beta_codon) {
                return None;
            }
            score += scoring
                .score(beta[i], code.translate_codon(beta_codon).unwrap())
                .unwrap();
        }
    }
    Some(score)
}

///
/// Enumerate all `4^(1+3n)` sequences and return the best score
///
pub fn brute_force(
    code: &GeneticCode,
    scoring: &ScoringTable,
    alpha: &[u8],
    beta: &[u8],
) -> Option<(Score, Sequence)> {
    let len = 1 + 3 * alpha.len();
    let mut seq = vec![VALID_BASES[0]; len];
    let mut best: Option<(Score, Sequence)> = None;
    for x in 0..4usize.pow(len as u32) {
        let mut y = x;
        for i in (0..len).rev() {
            seq[i] = VALID_BASES[y % 4];
            y /= 4;
        }
        if let Some(score) = rescore(code, scoring, &seq, alpha, beta) {
            if best.as_ref().map_or(true, |(s, _)| score > *s) {
                best = Some((score, seq.clone()));
            }
        }
    }
    best
}
