//! Repeated longest-common-substring coverage.
//!
//! [`SubstringCover`] extracts a greedy sequence of disjoint longest common
//! substrings from two strings, largest first, and [`cover_length`] sums
//! their lengths.
//!
//! The alignment table is built once. After each extraction the consumed rows
//! and columns are excised and the surviving cells are compacted in place, so
//! the total work for one pair stays bounded by the initial `|a| * |b|` table
//! no matter how many substrings are extracted.
//!
//! ## Example
//!
//! ```
//! use simscore::matching::cover::cover_length;
//!
//! assert_eq!(cover_length("xxxyyy", "yyyxxx"), 6);
//! assert_eq!(cover_length("abcabc", "abc"), 3);
//! assert_eq!(cover_length("ab", "cd"), 0);
//! ```

use serde::Serialize;

/// Shortest common substring that counts towards coverage.
pub const MIN_SUBSTRING_LEN: usize = 3;

/// Largest cell currently in the alignment table.
///
/// `row_end` and `col_end` are one past the end of the substring, in live
/// (not original) table coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunningBest {
    pub length: usize,
    pub row_end: usize,
    pub col_end: usize,
}

impl RunningBest {
    /// Replace the running best only on a strictly greater value, so the first
    /// cell in row-major order wins ties.
    #[inline]
    fn offer(&mut self, length: usize, row: usize, col: usize) {
        if length > self.length {
            *self = Self {
                length,
                row_end: row + 1,
                col_end: col + 1,
            };
        }
    }
}

/// One extracted substring, in original character offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CoverMatch {
    /// Offset of the first matched char in `a`
    pub a_start: usize,
    /// Offset of the first matched char in `b`
    pub b_start: usize,
    /// Number of matched chars
    pub length: usize,
}

/// Incrementally maintained alignment table for one pair of strings.
///
/// The table lives in a fixed-stride arena of `|a| * |b|` cells. Only the
/// top-left `live_rows() x live_cols()` block is meaningful; `a_map` and
/// `b_map` give the original offset of every live row and column.
///
/// Iterating the engine yields each extracted [`CoverMatch`] while the running
/// best is at least [`MIN_SUBSTRING_LEN`].
#[derive(Debug)]
pub struct SubstringCover {
    cells: Vec<usize>,
    stride: usize,
    a_map: Vec<usize>,
    b_map: Vec<usize>,
    best: RunningBest,
}

impl SubstringCover {
    /// Fill the alignment table for `a` against `b`.
    #[must_use]
    pub fn build(a: &[char], b: &[char]) -> Self {
        let stride = b.len();
        let mut cells = vec![0usize; a.len() * stride];
        let mut best = RunningBest::default();

        for (i, ca) in a.iter().enumerate() {
            for (j, cb) in b.iter().enumerate() {
                if ca != cb {
                    continue;
                }
                let length = if i == 0 || j == 0 {
                    1
                } else {
                    cells[(i - 1) * stride + (j - 1)] + 1
                };
                cells[i * stride + j] = length;
                best.offer(length, i, j);
            }
        }

        Self {
            cells,
            stride,
            a_map: (0..a.len()).collect(),
            b_map: (0..b.len()).collect(),
            best,
        }
    }

    /// Current running best.
    #[must_use]
    pub fn best(&self) -> RunningBest {
        self.best
    }

    #[must_use]
    pub fn live_rows(&self) -> usize {
        self.a_map.len()
    }

    #[must_use]
    pub fn live_cols(&self) -> usize {
        self.b_map.len()
    }

    /// Original offsets of the live rows.
    #[must_use]
    pub fn a_map(&self) -> &[usize] {
        &self.a_map
    }

    /// Original offsets of the live columns.
    #[must_use]
    pub fn b_map(&self) -> &[usize] {
        &self.b_map
    }

    /// Cell value at live coordinates `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the live table.
    #[must_use]
    pub fn cell(&self, row: usize, col: usize) -> usize {
        assert!(row < self.live_rows() && col < self.live_cols());
        self.cells[row * self.stride + col]
    }

    /// Consume the running best and recompute it over what is left.
    ///
    /// Rows and columns covered by the match are removed. A surviving chain
    /// that reaches back across the removed region is clipped so it starts no
    /// earlier than the first character after the match, so no chain spans
    /// the gap.
    ///
    /// Does nothing when the running best is empty.
    pub fn advance(&mut self) {
        let RunningBest {
            length,
            row_end,
            col_end,
        } = self.best;
        if length == 0 {
            return;
        }

        let resume_a = self.a_map[row_end - 1] + 1;
        let resume_b = self.b_map[col_end - 1] + 1;
        let dropped_rows = row_end - length..row_end;
        let dropped_cols = col_end - length..col_end;

        let rows = self.live_rows();
        let cols = self.live_cols();
        let mut best = RunningBest::default();

        // Compact in place: every destination index is at or before its
        // source, and sources are visited in increasing order.
        let mut row = 0;
        for old_row in (0..rows).filter(|r| !dropped_rows.contains(r)) {
            let orig_a = self.a_map[old_row];
            let mut col = 0;
            for old_col in (0..cols).filter(|c| !dropped_cols.contains(c)) {
                let orig_b = self.b_map[old_col];
                let mut cell = self.cells[old_row * self.stride + old_col];

                if orig_a >= resume_a && orig_a < resume_a + cell {
                    cell = orig_a - resume_a + 1;
                }
                if orig_b >= resume_b && orig_b < resume_b + cell {
                    cell = orig_b - resume_b + 1;
                }

                self.cells[row * self.stride + col] = cell;
                best.offer(cell, row, col);
                col += 1;
            }
            row += 1;
        }

        self.a_map.drain(dropped_rows);
        self.b_map.drain(dropped_cols);
        self.best = best;
    }
}

impl Iterator for SubstringCover {
    type Item = CoverMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let best = self.best;
        if best.length < MIN_SUBSTRING_LEN {
            return None;
        }

        let found = CoverMatch {
            a_start: self.a_map[best.row_end - best.length],
            b_start: self.b_map[best.col_end - best.length],
            length: best.length,
        };
        self.advance();
        Some(found)
    }
}

/// Disjoint common substrings of `a` and `b`, longest first.
///
/// Strings shorter than [`MIN_SUBSTRING_LEN`] bypass the table: two equal,
/// non-empty short strings yield a single whole-string match and anything
/// else yields nothing.
#[must_use]
pub fn cover_matches(a: &str, b: &str) -> Vec<CoverMatch> {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.len() < MIN_SUBSTRING_LEN || b_chars.len() < MIN_SUBSTRING_LEN {
        return if a == b && !a_chars.is_empty() {
            vec![CoverMatch {
                a_start: 0,
                b_start: 0,
                length: a_chars.len(),
            }]
        } else {
            Vec::new()
        };
    }

    let matches: Vec<CoverMatch> = SubstringCover::build(&a_chars, &b_chars).collect();
    tracing::trace!(
        a_len = a_chars.len(),
        b_len = b_chars.len(),
        extracted = matches.len(),
        "substring cover complete"
    );
    matches
}

/// Total length, in chars, of the disjoint common substrings of `a` and `b`.
///
/// Never exceeds the shorter string's length.
#[must_use]
pub fn cover_length(a: &str, b: &str) -> usize {
    cover_matches(a, b).iter().map(|m| m.length).sum()
}
