//!
//! Amino-acid substitution scores
//!
use crate::common::{Score, STOP};
use crate::error::{DualCodeError, Result};
use fnv::FnvHashMap;
use std::str::FromStr;

/// BLOSUM62 in NCBI text layout
const BLOSUM62_TEXT: &str = "\
#  Matrix made by matblas from blosum62.iij
#  * column uses minimum score
     A  R  N  D  C  Q  E  G  H  I  L  K  M  F  P  S  T  W  Y  V  B  Z  X  *
A    4 -1 -2 -2  0 -1 -1  0 -2 -1 -1 -1 -1 -2 -1  1  0 -3 -2  0 -2 -1  0 -4
R   -1  5  0 -2 -3  1  0 -2  0 -3 -2  2 -1 -3 -2 -1 -1 -3 -2 -3 -1  0 -1 -4
N   -2  0  6  1 -3  0  0  0  1 -3 -3  0 -2 -3 -2  1  0 -4 -2 -3  3  0 -1 -4
D   -2 -2  1  6 -3  0  2 -1 -1 -3 -4 -1 -3 -3 -1  0 -1 -4 -3 -3  4  1 -1 -4
C    0 -3 -3 -3  9 -3 -4 -3 -3 -1 -1 -3 -1 -2 -3 -1 -1 -2 -2 -1 -3 -3 -2 -4
Q   -1  1  0  0 -3  5  2 -2  0 -3 -2  1  0 -3 -1  0 -1 -2 -1 -2  0  3 -1 -4
E   -1  0  0  2 -4  2  5 -2  0 -3 -3  1 -2 -3 -1  0 -1 -3 -2 -2  1  4 -1 -4
G    0 -2  0 -1 -3 -2 -2  6 -2 -4 -4 -2 -3 -3 -2  0 -2 -2 -3 -3 -1 -2 -1 -4
H   -2  0  1 -1 -3  0  0 -2  8 -3 -3 -1 -2 -1 -2 -1 -2 -2  2 -3  0  0 -1 -4
I   -1 -3 -3 -3 -1 -3 -3 -4 -3  4  2 -3  1  0 -3 -2 -1 -3 -1  3 -3 -3 -1 -4
L   -1 -2 -3 -4 -1 -2 -3 -4 -3  2  4 -2  2  0 -3 -2 -1 -2 -1  1 -4 -3 -1 -4
K   -1  2  0 -1 -3  1  1 -2 -1 -3 -2  5 -1 -3 -1  0 -1 -3 -2 -2  0  1 -1 -4
M   -1 -1 -2 -3 -1  0 -2 -3 -2  1  2 -1  5  0 -2 -1 -1 -1 -1  1 -3 -1 -1 -4
F   -2 -3 -3 -3 -2 -3 -3 -3 -1  0  0 -3  0  6 -4 -2 -2  1  3 -1 -3 -3 -1 -4
P   -1 -2 -2 -1 -3 -1 -1 -2 -2 -3 -3 -1 -2 -4  7 -1 -1 -4 -3 -2 -2 -1 -2 -4
S    1 -1  1  0 -1  0  0  0 -1 -2 -2  0 -1 -2 -1  4  1 -3 -2 -2  0  0  0 -4
T    0 -1  0 -1 -1 -1 -1 -2 -2 -1 -1 -1 -1 -2 -1  1  5 -2 -2  0 -1 -1  0 -4
W   -3 -3 -4 -4 -2 -2 -3 -2 -2 -3 -2 -3 -1  1 -4 -3 -2 11  2 -3 -4 -3 -2 -4
Y   -2 -2 -2 -3 -2 -1 -2 -3  2 -1 -1 -2 -1  3 -3 -2 -2  2  7 -1 -3 -2 -1 -4
V    0 -3 -3 -3 -1 -2 -2 -3 -3  3  1 -2  1 -1 -2 -2  0 -3 -1  4 -3 -2 -1 -4
B   -2 -1  3  4 -3  0  1 -1  0 -3 -4  0 -3 -3 -2  0 -1 -4 -3 -3  4  1 -1 -4
Z   -1  0  0  1 -3  3  4 -2  0 -3 -3  1 -1 -3 -1  0 -1 -3 -2 -2  1  4 -1 -4
X    0 -1 -1 -1 -2 -1 -1 -1 -1 -1 -1 -1 -1 -1 -2  0  0 -2 -1 -1 -1 -1 -1 -4
*   -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4 -4  1
";

///
/// Symmetric substitution matrix over amino-acid symbols
///
/// Each unordered pair is stored once; lookup tries both orientations.
///
#[derive(Debug, Clone, PartialEq)]
pub struct SubstitutionMatrix {
    scores: FnvHashMap<(u8, u8), Score>,
    symbols: Vec<u8>,
}

impl SubstitutionMatrix {
    ///
    /// BLOSUM62 (NCBI)
    ///
    pub fn blosum62() -> SubstitutionMatrix {
        BLOSUM62_TEXT
            .parse()
            .expect("embedded BLOSUM62 is well-formed")
    }
    ///
    /// Score of the unordered pair `(a, b)`, if defined
    ///
    pub fn get(&self, a: u8, b: u8) -> Option<Score> {
        self.scores
            .get(&(a, b))
            .or_else(|| self.scores.get(&(b, a)))
            .copied()
    }
    /// symbols in the order of the header line
    pub fn symbols(&self) -> &[u8] {
        &self.symbols
    }
    /// number of stored (unordered) pairs
    pub fn n_pairs(&self) -> usize {
        self.scores.len()
    }
    fn insert(&mut self, a: u8, b: u8, score: Score) -> Result<()> {
        match self.get(a, b) {
            Some(s) if s != score => Err(DualCodeError::Parse(format!(
                "asymmetric entry ({}, {}): {} vs {}",
                a as char, b as char, s, score
            ))),
            Some(_) => Ok(()),
            None => {
                self.scores.insert((a, b), score);
                Ok(())
            }
        }
    }
}

///
/// Parse a matrix in NCBI text layout
///
/// Lines starting with `#` are comments. The first remaining line lists the
/// column symbols; each following line is a row symbol and its scores. Rows
/// may be truncated (lower-triangular files), the missing half being implied
/// by symmetry.
///
impl FromStr for SubstitutionMatrix {
    type Err = DualCodeError;
    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let header = lines
            .next()
            .ok_or_else(|| DualCodeError::Parse("empty matrix".to_string()))?;
        let symbols = header
            .split_whitespace()
            .map(parse_symbol)
            .collect::<Result<Vec<u8>>>()?;

        let mut matrix = SubstitutionMatrix {
            scores: FnvHashMap::default(),
            symbols,
        };

        for line in lines {
            let mut tokens = line.split_whitespace();
            let row = match tokens.next() {
                Some(token) => parse_symbol(token)?,
                None => continue,
            };
            let values: Vec<&str> = tokens.collect();
            if values.len() > matrix.symbols.len() {
                return Err(DualCodeError::Parse(format!(
                    "row {} has {} entries but header has {}",
                    row as char,
                    values.len(),
                    matrix.symbols.len()
                )));
            }
            for (j, value) in values.iter().enumerate() {
                let score: Score = value
                    .parse()
                    .map_err(|e| DualCodeError::Parse(format!("`{}`: {}", value, e)))?;
                let col = matrix.symbols[j];
                matrix.insert(row, col, score)?;
            }
        }

        Ok(matrix)
    }
}

fn parse_symbol(token: &str) -> Result<u8> {
    match token.as_bytes() {
        [c] => Ok(c.to_ascii_uppercase()),
        _ => Err(DualCodeError::Parse(format!(
            "symbol `{}` is not a single letter",
            token
        ))),
    }
}

///
/// Substitution matrix with the stop-codon penalty rule
///
#[derive(Debug, Clone)]
pub struct ScoringTable {
    matrix: SubstitutionMatrix,
    stop_penalty: Score,
}

impl ScoringTable {
    pub fn new(matrix: SubstitutionMatrix, stop_penalty: Score) -> Result<ScoringTable> {
        if stop_penalty >= 0 {
            return Err(DualCodeError::InvalidStopPenalty(stop_penalty));
        }
        Ok(ScoringTable {
            matrix,
            stop_penalty,
        })
    }
    /// BLOSUM62 with the default stop penalty
    pub fn blosum62() -> ScoringTable {
        ScoringTable {
            matrix: SubstitutionMatrix::blosum62(),
            stop_penalty: DEFAULT_STOP_PENALTY,
        }
    }
    ///
    /// Score of observing `b` where `a` is expected
    ///
    /// Any pair involving the stop symbol is not a substitution and scores
    /// `stop_penalty`. A pair missing from the matrix is a data defect.
    ///
    pub fn score(&self, a: u8, b: u8) -> Result<Score> {
        if a == STOP || b == STOP {
            return Ok(self.stop_penalty);
        }
        self.matrix
            .get(a, b)
            .ok_or(DualCodeError::MissingScore(a as char, b as char))
    }
    /// penalty shared by stop codons and boundary violations
    pub fn stop_penalty(&self) -> Score {
        self.stop_penalty
    }
    pub fn matrix(&self) -> &SubstitutionMatrix {
        &self.matrix
    }
}

/// default penalty for stop codons and unsatisfiable start/stop constraints
pub const DEFAULT_STOP_PENALTY: Score = -1000;
