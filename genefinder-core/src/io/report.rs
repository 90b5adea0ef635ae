use crate::error::{GeneError, GeneResult};
use crate::gene_finder::GeneReport;
use csv::WriterBuilder;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Delimiter {
    #[default]
    Comma,
    Tab,
}

impl Delimiter {
    fn byte(self) -> u8 {
        match self {
            Delimiter::Comma => b',',
            Delimiter::Tab => b'\t',
        }
    }
}

const HEADER: [&str; 7] = ["strand", "frame", "start", "end", "nt_length", "aa_length", "protein"];

/// Write one row per gene. `start`/`end` are 0-based, half-open and on the
/// forward strand regardless of the strand the ORF was found on.
pub fn write_report<W: Write>(writer: W, report: &GeneReport, delimiter: Delimiter) -> GeneResult<()> {
    write_rows(writer, report, delimiter).map_err(|source| GeneError::CsvWrite {
        path: "<writer>".to_string(),
        source,
    })
}

pub fn write_report_to_path(
    path: impl AsRef<Path>,
    report: &GeneReport,
    delimiter: Delimiter,
) -> GeneResult<()> {
    let path_ref = path.as_ref();
    let file = File::create(path_ref)?;
    write_rows(file, report, delimiter).map_err(|source| GeneError::CsvWrite {
        path: path_ref.display().to_string(),
        source,
    })
}

fn write_rows<W: Write>(writer: W, report: &GeneReport, delimiter: Delimiter) -> Result<(), csv::Error> {
    let mut wtr = WriterBuilder::new()
        .delimiter(delimiter.byte())
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    for gene in &report.genes {
        let span = gene.orf.forward_span(report.seq_len);
        wtr.write_record([
            gene.orf.strand.symbol().to_string(),
            gene.orf.frame.to_string(),
            span.start.to_string(),
            span.end.to_string(),
            gene.orf.len().to_string(),
            gene.protein.len().to_string(),
            gene.protein.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
