//! Open reading frame extraction.
//!
//! An ORF starts at a frame-aligned `ATG` and runs up to, but not including,
//! the next in-frame stop codon, or to the end of the sequence when no stop
//! follows. Within one frame of one strand ORFs never nest: scanning resumes
//! after the stop codon that closed the previous ORF.

use crate::error::GeneResult;
use crate::genetic_code;
use crate::seq::dna::DnaSeq;
use crate::seq::protein::ProteinSeq;

use memchr::memmem;
use std::ops::Range;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    pub fn symbol(self) -> char {
        match self {
            Strand::Forward => '+',
            Strand::Reverse => '-',
        }
    }
}

/// An ORF together with where it was found.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Orf {
    pub strand: Strand,
    /// Reading-frame offset (0, 1 or 2) on `strand`.
    pub frame: usize,
    /// Offset of the start codon on `strand` (on the reverse complement for
    /// [`Strand::Reverse`]).
    pub start: usize,
    pub seq: DnaSeq,
}

impl Orf {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    pub fn end(&self) -> usize {
        self.start + self.len()
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.seq.as_bytes()
    }

    /// Half-open span on the forward strand of a sequence of `seq_len` bases.
    pub fn forward_span(&self, seq_len: usize) -> Range<usize> {
        match self.strand {
            Strand::Forward => self.start..self.end(),
            Strand::Reverse => seq_len - self.end()..seq_len - self.start,
        }
    }

    pub fn translate(&self) -> GeneResult<ProteinSeq> {
        self.seq.translate()
    }
}

/// The ORF at the head of `dna`, which is assumed to begin with a start codon.
///
/// Returns the prefix before the first in-frame stop codon. Without a stop
/// the whole input comes back, including a trailing partial codon.
pub fn rest_of_orf(dna: &[u8]) -> &[u8] {
    let end = dna
        .chunks(3)
        .position(|codon| genetic_code::is_stop_codon(codon))
        .map_or(dna.len(), |i| i * 3);
    &dna[..end]
}

fn orf_spans(dna: &[u8], finder: &memmem::Finder<'_>) -> Vec<Range<usize>> {
    let mut spans = Vec::new();
    let mut cursor = 0usize;

    while cursor + 3 <= dna.len() {
        // `cursor` stays codon-aligned, so the next aligned start is the first hit at a multiple of 3.
        let next = finder
            .find_iter(&dna[cursor..])
            .map(|i| cursor + i)
            .find(|i| i % 3 == 0);
        let Some(start) = next else {
            break;
        };

        let len = rest_of_orf(&dna[start..]).len();
        spans.push(start..start + len);
        // skip the ORF's codons and the stop codon that closed it
        cursor = start + (len / 3 + 1) * 3;
    }

    spans
}

/// `dna` read from `frame` onwards; empty once `frame` passes the end.
fn reading_frame(dna: &[u8], frame: usize) -> &[u8] {
    &dna[frame.min(dna.len())..]
}

fn start_finder() -> memmem::Finder<'static> {
    memmem::Finder::new(genetic_code::START_CODON)
}

/// All non-nested ORFs of `dna` in frame 0, by ascending start.
pub fn find_orfs_oneframe(dna: &[u8]) -> Vec<&[u8]> {
    orf_spans(dna, &start_finder())
        .into_iter()
        .map(|span| &dna[span])
        .collect()
}

/// ORFs of frames 0, 1 and 2, concatenated in that order.
pub fn find_orfs(dna: &[u8]) -> Vec<&[u8]> {
    let finder = start_finder();
    let mut out = Vec::new();
    for frame in 0..3 {
        let shifted = reading_frame(dna, frame);
        out.extend(orf_spans(shifted, &finder).into_iter().map(|span| &shifted[span]));
    }
    out
}

fn collect_strand(bytes: &[u8], strand: Strand, finder: &memmem::Finder<'_>, out: &mut Vec<Orf>) {
    for frame in 0..3 {
        let shifted = reading_frame(bytes, frame);
        for span in orf_spans(shifted, finder) {
            out.push(Orf {
                strand,
                frame,
                start: frame + span.start,
                seq: DnaSeq::from_bytes_unchecked(shifted[span].to_vec()),
            });
        }
    }
}

/// ORFs of all three frames of `seq`, then all three frames of its reverse complement.
pub fn find_orfs_both_strands(seq: &DnaSeq) -> Vec<Orf> {
    let finder = start_finder();
    let mut out = Vec::new();
    collect_strand(seq.as_bytes(), Strand::Forward, &finder, &mut out);
    let rc = seq.reverse_complement();
    collect_strand(rc.as_bytes(), Strand::Reverse, &finder, &mut out);
    out
}

/// The longest ORF on either strand; the earliest one wins a tie.
pub fn longest_orf(seq: &DnaSeq) -> Option<Orf> {
    find_orfs_both_strands(seq)
        .into_iter()
        .reduce(|best, orf| if orf.len() > best.len() { orf } else { best })
}

/// Length of [`longest_orf`], or 0 when there is none. Does not materialize ORFs.
pub fn longest_orf_len(seq: &DnaSeq) -> usize {
    // No ATG on either strand (CAT is ATG on the reverse complement).
    if !seq.contains(genetic_code::START_CODON) && !seq.contains(b"CAT") {
        return 0;
    }

    let finder = start_finder();
    let longest_on = |bytes: &[u8]| {
        (0..3)
            .flat_map(|frame| orf_spans(reading_frame(bytes, frame), &finder))
            .map(|span| span.len())
            .max()
            .unwrap_or(0)
    };

    let forward = longest_on(seq.as_bytes());
    let reverse = longest_on(seq.reverse_complement().as_bytes());
    forward.max(reverse)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn dna_seq(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
        proptest::collection::vec(
            prop_oneof![Just(b'A'), Just(b'C'), Just(b'G'), Just(b'T')],
            0..=max_len,
        )
    }

    proptest! {
        #[test]
        fn stop_terminated_orfs_are_whole_codons(dna in dna_seq(120)) {
            let orf = rest_of_orf(&dna);
            prop_assert!(dna.starts_with(orf));
            if orf.len() < dna.len() {
                prop_assert_eq!(orf.len() % 3, 0);
                prop_assert!(genetic_code::is_stop_codon(&dna[orf.len()..orf.len() + 3]));
            }
        }

        #[test]
        fn oneframe_never_nests(dna in dna_seq(200)) {
            let spans = orf_spans(&dna, &start_finder());
            for pair in spans.windows(2) {
                prop_assert!(pair[1].start >= pair[0].end);
            }
            for span in &spans {
                prop_assert_eq!(span.start % 3, 0);
                prop_assert_eq!(&dna[span.start..span.start + 3], b"ATG");
            }
        }

        #[test]
        fn multi_frame_is_sum_of_single_frames(dna in dna_seq(200)) {
            let expected: usize = (0..3)
                .map(|offset| find_orfs_oneframe(reading_frame(&dna, offset)).len())
                .sum();
            prop_assert_eq!(find_orfs(&dna).len(), expected);
        }

        #[test]
        fn longest_len_matches_longest_orf(dna in dna_seq(150)) {
            let seq = DnaSeq::new(dna).unwrap();
            let expected = longest_orf(&seq).map_or(0, |orf| orf.len());
            prop_assert_eq!(longest_orf_len(&seq), expected);
        }

        #[test]
        fn reverse_strand_spans_map_back(dna in dna_seq(150)) {
            let seq = DnaSeq::new(dna).unwrap();
            let rc = seq.reverse_complement();
            for orf in find_orfs_both_strands(&seq) {
                let span = orf.forward_span(seq.len());
                let forward = &seq.as_bytes()[span];
                match orf.strand {
                    Strand::Forward => {
                        prop_assert_eq!(forward, orf.as_bytes());
                    }
                    Strand::Reverse => {
                        prop_assert_eq!(&rc.as_bytes()[orf.start..orf.end()], orf.as_bytes());
                    }
                }
            }
        }
    }
}
