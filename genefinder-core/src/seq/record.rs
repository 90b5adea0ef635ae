use crate::seq::dna::DnaSeq;

/// A named DNA sequence as read from a FASTA entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeqRecord {
    pub id: Box<str>,
    /// Header text after the identifier, if any.
    pub desc: Option<Box<str>>,
    pub seq: DnaSeq,
}

impl SeqRecord {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn desc(&self) -> Option<&str> {
        self.desc.as_deref()
    }

    pub fn seq(&self) -> &DnaSeq {
        &self.seq
    }

    pub fn into_seq(self) -> DnaSeq {
        self.seq
    }
}
