mod context;
mod splitter;
mod writer;

pub use self::{
    context::{Context, Outcome},
    splitter::{ClassifyError, Splitter},
    writer::Writer,
};

pub(crate) use self::splitter::tag_name;

use std::io::{self, Read};

use noodles::{bam, sam};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("I/O error")]
    Io(#[from] io::Error),
    #[error("invalid record {0}")]
    InvalidRecord(u64, #[source] ClassifyError),
}

/// Reads all records from `reader` and writes each one to the output matching its outcome.
///
/// Records are written in input order. On error, records already written remain in the outputs.
pub fn split_records<R, W, X>(
    reader: &mut bam::io::Reader<R>,
    header: &sam::Header,
    splitter: &Splitter,
    matched_writer: &mut W,
    unmatched_writer: &mut X,
) -> Result<Context, SplitError>
where
    R: Read,
    W: sam::alignment::io::Write,
    X: sam::alignment::io::Write,
{
    let mut record = bam::Record::default();
    let mut ctx = Context::default();

    while reader.read_record(&mut record)? != 0 {
        let outcome = splitter
            .classify(&record)
            .map_err(|e| SplitError::InvalidRecord(ctx.total() + 1, e))?;

        match outcome {
            Outcome::Discard => {}
            Outcome::NoMatch => unmatched_writer.write_alignment_record(header, &record)?,
            Outcome::Match => matched_writer.write_alignment_record(header, &record)?,
        }

        ctx.add_outcome(outcome);
    }

    Ok(ctx)
}
