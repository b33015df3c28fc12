use std::{io, slice};

use bstr::{BString, ByteSlice};
use noodles::{
    bam,
    sam::alignment::record::data::field::{Tag, Type, Value},
};
use thiserror::Error;
use tracing::debug;

use super::context::Outcome;
use crate::hamming::{self, LengthMismatchError};

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("invalid data")]
    InvalidData(#[source] io::Error),
    #[error("invalid {0} value length")]
    InvalidValueLength(BString, #[source] LengthMismatchError),
    #[error("invalid {0} value type: expected a string, got {1:?}")]
    InvalidValueType(BString, Type),
}

#[derive(Clone, Debug)]
pub struct Splitter {
    tag: Tag,
    value: Vec<u8>,
    max_edit_distance: usize,
    discard_missing: bool,
}

impl Splitter {
    pub fn tag(&self) -> Tag {
        self.tag
    }

    pub fn value(&self) -> &[u8] {
        &self.value
    }

    pub fn max_edit_distance(&self) -> usize {
        self.max_edit_distance
    }

    pub fn discard_missing(&self) -> bool {
        self.discard_missing
    }
}

impl Splitter {
    pub fn new(tag: Tag, value: Vec<u8>, max_edit_distance: usize, discard_missing: bool) -> Self {
        Self {
            tag,
            value,
            max_edit_distance,
            discard_missing,
        }
    }

    pub fn classify(&self, record: &bam::Record) -> Result<Outcome, ClassifyError> {
        let data = record.data();

        let value = data
            .get(&self.tag)
            .transpose()
            .map_err(ClassifyError::InvalidData)?;

        self.classify_value(value.as_ref())
    }

    /// Classifies a record by the value of its tag, `None` being a missing tag.
    pub fn classify_value(&self, value: Option<&Value<'_>>) -> Result<Outcome, ClassifyError> {
        let Some(value) = value else {
            return if self.discard_missing {
                Ok(Outcome::Discard)
            } else {
                Ok(Outcome::NoMatch)
            };
        };

        let Some(buf) = value_as_bytes(value) else {
            if self.max_edit_distance == 0 {
                debug!(tag = %tag_name(self.tag), ty = ?value.ty(), "tag value is not a string");
                return Ok(Outcome::NoMatch);
            }

            return Err(ClassifyError::InvalidValueType(tag_name(self.tag), value.ty()));
        };

        let is_match = if self.max_edit_distance == 0 {
            buf == self.value.as_slice()
        } else {
            let distance = hamming::distance(&self.value, buf)
                .map_err(|e| ClassifyError::InvalidValueLength(tag_name(self.tag), e))?;

            distance <= self.max_edit_distance
        };

        if is_match {
            Ok(Outcome::Match)
        } else {
            Ok(Outcome::NoMatch)
        }
    }
}

pub(crate) fn tag_name(tag: Tag) -> BString {
    let buf: &[u8; 2] = tag.as_ref();
    buf.as_bstr().into()
}

fn value_as_bytes<'a>(value: &'a Value<'_>) -> Option<&'a [u8]> {
    match value {
        Value::Character(c) => Some(slice::from_ref(c)),
        Value::String(s) | Value::Hex(s) => Some(s.as_bytes()),
        _ => None,
    }
}
