#![allow(dead_code)]

use std::{
    env,
    fs::{self, File},
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use bstr::ByteSlice;
use noodles::{
    bam,
    sam::{self, alignment::io::Write},
};

pub fn working_prefix(name: &str) -> io::Result<PathBuf> {
    let prefix = env::temp_dir().join(env!("CARGO_PKG_NAME")).join(name);
    fs::create_dir_all(&prefix)?;
    Ok(prefix)
}

pub fn convert_sam_to_bam<P, Q>(src: P, dst: Q) -> io::Result<()>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let mut reader = File::open(src)
        .map(BufReader::new)
        .map(sam::io::Reader::new)?;

    let header = reader.read_header()?;

    let mut writer = File::create(dst).map(bam::io::Writer::new)?;
    writer.write_header(&header)?;

    for result in reader.records() {
        let record = result?;
        writer.write_alignment_record(&header, &record)?;
    }

    writer.try_finish()
}

pub fn read_header<P>(src: P) -> io::Result<sam::Header>
where
    P: AsRef<Path>,
{
    let mut reader = File::open(src).map(bam::io::Reader::new)?;
    reader.read_header()
}

pub fn read_names<P>(src: P) -> io::Result<Vec<String>>
where
    P: AsRef<Path>,
{
    let mut reader = File::open(src).map(bam::io::Reader::new)?;
    reader.read_header()?;

    let mut names = Vec::new();

    for result in reader.records() {
        let record = result?;
        let name = record
            .name()
            .map(|s| s.as_bytes().as_bstr().to_string())
            .unwrap_or_default();
        names.push(name);
    }

    Ok(names)
}
