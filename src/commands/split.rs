use std::{
    fs::{self, File},
    io::{self, Read},
    path::{Path, PathBuf},
};

use bstr::ByteSlice;
use noodles::{bam, bgzf, sam};
use thiserror::Error;
use tracing::{info, warn};

use crate::split::{self, split_records, Context, Splitter};

const STDIN: &str = "-";

#[derive(Debug, Error)]
pub enum SplitError {
    #[error("I/O error")]
    Io(#[source] io::Error),
    #[error("could not open file: {1}")]
    OpenFile(#[source] io::Error, PathBuf),
    #[error("could not create file: {1}")]
    CreateFile(#[source] io::Error, PathBuf),
    #[error("invalid header")]
    ReadHeader(#[source] io::Error),
    #[error("could not write header: {1}")]
    WriteHeader(#[source] io::Error, PathBuf),
    #[error("could not split records")]
    Split(#[source] split::SplitError),
    #[error("could not finish file: {1}")]
    Finish(#[source] io::Error, PathBuf),
}

pub fn split<P, Q, R>(
    src: P,
    matched_dst: Q,
    unmatched_dst: R,
    splitter: &Splitter,
) -> Result<Context, SplitError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
    R: AsRef<Path>,
{
    let src = src.as_ref();
    let matched_dst = matched_dst.as_ref();
    let unmatched_dst = unmatched_dst.as_ref();

    info!(?src, "reading header");

    let mut reader = open(src).map_err(|e| SplitError::OpenFile(e, src.into()))?;
    let header = reader.read_header().map_err(SplitError::ReadHeader)?;

    info!(?matched_dst, ?unmatched_dst, "creating outputs");

    let mut matched_writer = create(matched_dst, &header)?;
    let mut unmatched_writer = match create(unmatched_dst, &header) {
        Ok(writer) => writer,
        Err(e) => {
            drop(matched_writer);
            remove_output(matched_dst);
            return Err(e);
        }
    };

    info!(
        tag = %split::tag_name(splitter.tag()),
        value = %splitter.value().as_bstr(),
        max_edit_distance = splitter.max_edit_distance(),
        discard_missing = splitter.discard_missing(),
        "splitting records"
    );

    let ctx = split_records(
        &mut reader,
        &header,
        splitter,
        &mut matched_writer,
        &mut unmatched_writer,
    )
    .map_err(SplitError::Split)?;

    matched_writer
        .try_finish()
        .map_err(|e| SplitError::Finish(e, matched_dst.into()))?;

    unmatched_writer
        .try_finish()
        .map_err(|e| SplitError::Finish(e, unmatched_dst.into()))?;

    info!(
        record_count = ctx.total(),
        discarded = ctx.discarded,
        unmatched = ctx.unmatched,
        matched = ctx.matched,
        "split records"
    );

    let stdout = io::stdout().lock();
    let mut writer = split::Writer::new(stdout);

    writer
        .write_summary(splitter, &ctx)
        .map_err(SplitError::Io)?;

    Ok(ctx)
}

fn open(src: &Path) -> io::Result<bam::io::Reader<bgzf::Reader<Box<dyn Read>>>> {
    let inner: Box<dyn Read> = if src == Path::new(STDIN) {
        Box::new(io::stdin().lock())
    } else {
        Box::new(File::open(src)?)
    };

    Ok(bam::io::Reader::new(inner))
}

fn create(
    dst: &Path,
    header: &sam::Header,
) -> Result<bam::io::Writer<bgzf::Writer<File>>, SplitError> {
    let mut writer = File::create(dst)
        .map(bam::io::Writer::new)
        .map_err(|e| SplitError::CreateFile(e, dst.into()))?;

    if let Err(e) = writer.write_header(header) {
        drop(writer);
        remove_output(dst);
        return Err(SplitError::WriteHeader(e, dst.into()));
    }

    Ok(writer)
}

fn remove_output(dst: &Path) {
    if let Err(e) = fs::remove_file(dst) {
        warn!(?dst, error = %e, "could not remove output");
    }
}
