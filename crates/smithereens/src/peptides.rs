// Standard Library Imports
use std::iter;

// Local Crate Imports
use crate::{Peptide, SubPeptides};

// Public API ==========================================================================================================

impl<'s> Peptide<'s> {
    #[must_use]
    pub const fn new(sequence: &'s str, offset: usize) -> Self {
        Self { sequence, offset }
    }

    #[must_use]
    pub const fn sequence(&self) -> &'s str {
        self.sequence
    }

    /// The number of residues preceding this peptide in its parent sequence
    #[must_use]
    pub const fn offset(&self) -> usize {
        self.offset
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.sequence.chars().count()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}

impl AsRef<str> for Peptide<'_> {
    fn as_ref(&self) -> &str {
        self.sequence
    }
}

impl<'s> SubPeptides<'s> {
    #[must_use]
    pub fn new(sequence: &'s str) -> Self {
        let boundaries = sequence
            .char_indices()
            .map(|(i, _)| i)
            .chain(iter::once(sequence.len()))
            .collect();
        Self {
            sequence,
            boundaries,
            length: 1,
            start: 0,
        }
    }

    fn residues(&self) -> usize {
        self.boundaries.len() - 1
    }
}

impl<'s> Iterator for SubPeptides<'s> {
    type Item = Peptide<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        let residues = self.residues();
        if self.start + self.length > residues {
            self.length += 1;
            self.start = 0;
        }
        // NOTE: The full-length sequence is never a candidate, only its strict sub-peptides are
        if self.length >= residues {
            return None;
        }

        let from = self.boundaries[self.start];
        let to = self.boundaries[self.start + self.length];
        let peptide = Peptide::new(&self.sequence[from..to], self.start);
        self.start += 1;

        Some(peptide)
    }
}

// Module Tests ========================================================================================================
