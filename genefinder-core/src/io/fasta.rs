use crate::error::{GeneError, GeneResult};
use crate::seq::dna::DnaSeq;
use crate::seq::record::SeqRecord;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Streaming reader over the DNA records of a FASTA source.
///
/// Bases are upper-cased and line breaks dropped before validation.
pub struct FastaRecords<R> {
    reader: R,
    line_no: usize,
    pending_header: Option<(String, usize)>,
    buf_line: String,
    seq_buf: Vec<u8>,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_no: 0,
            pending_header: None,
            buf_line: String::new(),
            seq_buf: Vec::new(),
        }
    }

    fn next_header(&mut self) -> Option<GeneResult<(String, usize)>> {
        if let Some(pending) = self.pending_header.take() {
            return Some(Ok(pending));
        }

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        return Some(Ok((self.buf_line.clone(), line_no)));
                    }
                    if self.buf_line.trim().is_empty() {
                        continue;
                    }
                    return Some(Err(GeneError::FastaFormat {
                        msg: "expected header line starting with '>'",
                        line: line_no,
                    }));
                }
                Err(err) => return Some(Err(GeneError::Io(err))),
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = GeneResult<SeqRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        let (header_line, header_line_no) = match self.next_header()? {
            Ok(header) => header,
            Err(err) => return Some(Err(err)),
        };

        let (id, desc) = match parse_header(&header_line, header_line_no) {
            Ok(parsed) => parsed,
            Err(err) => return Some(Err(err)),
        };

        self.seq_buf.clear();

        loop {
            self.buf_line.clear();
            match self.reader.read_line(&mut self.buf_line) {
                Ok(0) => break,
                Ok(_) => {
                    self.line_no += 1;
                    let line_no = self.line_no;
                    if self.buf_line.starts_with('>') {
                        self.pending_header = Some((self.buf_line.clone(), line_no));
                        break;
                    }
                    for b in self.buf_line.bytes() {
                        if !b.is_ascii_whitespace() {
                            self.seq_buf.push(b.to_ascii_uppercase());
                        }
                    }
                }
                Err(err) => return Some(Err(GeneError::Io(err))),
            }
        }

        let capacity = self.seq_buf.capacity();
        let bytes = std::mem::take(&mut self.seq_buf);
        let seq = match DnaSeq::new(bytes) {
            Ok(seq) => seq,
            Err(err) => return Some(Err(err)),
        };
        self.seq_buf = Vec::with_capacity(capacity);

        Some(Ok(SeqRecord { id, desc, seq }))
    }
}

/// The first record of a FASTA stream as a DNA sequence.
pub fn load_seq_from_reader<R: BufRead>(reader: R) -> GeneResult<SeqRecord> {
    FastaRecords::new(reader)
        .next()
        .unwrap_or_else(|| {
            Err(GeneError::FastaFormat {
                msg: "no fasta record found",
                line: 0,
            })
        })
}

/// The first record of the FASTA file at `path` as a DNA sequence.
pub fn load_seq(path: impl AsRef<Path>) -> GeneResult<DnaSeq> {
    let file = File::open(path)?;
    Ok(load_seq_from_reader(BufReader::new(file))?.into_seq())
}

fn parse_header(header_line: &str, line_no: usize) -> GeneResult<(Box<str>, Option<Box<str>>)> {
    let header = header_line.strip_prefix('>').ok_or(GeneError::FastaFormat {
        msg: "expected header line starting with '>'",
        line: line_no,
    })?;

    let header = header.trim_end_matches(&['\n', '\r'][..]).trim_start();
    if header.is_empty() {
        return Err(GeneError::FastaFormat {
            msg: "empty header",
            line: line_no,
        });
    }

    let (id, desc) = match header.find(|c: char| c.is_whitespace()) {
        Some(idx) => {
            let id = &header[..idx];
            let desc = header[idx..].trim();
            let desc = if desc.is_empty() { None } else { Some(desc) };
            (id, desc)
        }
        None => (header, None),
    };

    Ok((id.into(), desc.map(|s| s.into())))
}
