use std::{ffi::OsString, path::PathBuf};

use clap::{builder::NonEmptyStringValueParser, Parser};
use git_testament::{git_testament, render_testament};
use noodles::sam::alignment::record::data::field::Tag;
use thiserror::Error;

git_testament!(TESTAMENT);

#[derive(Debug, Parser)]
#[command(version = render_testament!(TESTAMENT))]
pub struct Cli {
    /// Data tag to split by, e.g., RG or a user-defined tag (X?, Y?, Z?).
    #[arg(value_parser = parse_tag)]
    pub tag_id: Tag,

    /// Tag value to split by.
    ///
    /// Records with a matching tag value are written to the first output. Records with a
    /// missing or different tag value are written to the second output.
    #[arg(value_parser = NonEmptyStringValueParser::new())]
    pub tag_value: String,

    /// Maximum Hamming distance between the expected and actual tag value.
    ///
    /// When greater than 0, all tag values must have the same length as the expected value.
    #[arg(short = 'd', long = "max_edit_dist", default_value_t = 0)]
    pub max_edit_dist: usize,

    /// Input alignment file (BAM). Defaults to stdin.
    #[arg(short = 'i', long = "input_bam", default_value = "-")]
    pub input_bam: PathBuf,

    /// Output destination for records with a matching tag value (-o1).
    #[arg(long = "output_bam_1", default_value = "with_specified_tag.bam")]
    pub output_bam_1: PathBuf,

    /// Output destination for records with a missing or different tag value (-o2).
    #[arg(long = "output_bam_2", default_value = "without_specified_tag.bam")]
    pub output_bam_2: PathBuf,

    /// Drop records missing the tag instead of writing them to the second output.
    #[arg(long = "discard_missing_tags")]
    pub discard_missing_tags: bool,
}

#[derive(Debug, Eq, Error, PartialEq)]
#[error("invalid tag: expected [A-Za-z][A-Za-z0-9], got {0:?}")]
pub struct ParseTagError(String);

pub fn parse_tag(s: &str) -> Result<Tag, ParseTagError> {
    match s.as_bytes() {
        [a, b] if a.is_ascii_alphabetic() && b.is_ascii_alphanumeric() => Ok(Tag::new(*a, *b)),
        _ => Err(ParseTagError(s.into())),
    }
}

/// Rewrites the `-o1` and `-o2` short options to their long forms.
///
/// Arguments after `--` are left as is.
pub fn expand_output_options<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    const OPTIONS: [(&str, &str); 2] = [("-o1", "--output_bam_1"), ("-o2", "--output_bam_2")];

    let mut expanded = Vec::new();
    let mut is_positional_only = false;

    for arg in args {
        if is_positional_only {
            expanded.push(arg);
            continue;
        }

        let Some(s) = arg.to_str() else {
            expanded.push(arg);
            continue;
        };

        if s == "--" {
            is_positional_only = true;
            expanded.push(arg);
            continue;
        }

        let replacement = OPTIONS.iter().find_map(|(short, long)| {
            if s == *short {
                Some(OsString::from(long))
            } else {
                s.strip_prefix(short)
                    .and_then(|rest| rest.strip_prefix('='))
                    .map(|value| OsString::from(format!("{long}={value}")))
            }
        });

        expanded.push(replacement.unwrap_or(arg));
    }

    expanded
}
