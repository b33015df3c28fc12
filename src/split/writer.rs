use std::io::{self, Write};

use bstr::ByteSlice;

use super::{splitter::tag_name, Context, Splitter};

pub struct Writer<W> {
    inner: W,
}

impl<W> Writer<W>
where
    W: Write,
{
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn write_summary(&mut self, splitter: &Splitter, ctx: &Context) -> io::Result<()> {
        let tag = tag_name(splitter.tag());
        let value = splitter.value().as_bstr();

        writeln!(self.inner, "Processed {} records", ctx.total())?;
        writeln!(
            self.inner,
            "Found {} records without the tag {tag}",
            ctx.discarded
        )?;
        writeln!(
            self.inner,
            "Found {} records where {tag} != {value}",
            ctx.unmatched
        )?;
        writeln!(
            self.inner,
            "Found {} records where {tag} == {value} with an edit distance of maximum {}",
            ctx.matched,
            splitter.max_edit_distance()
        )?;

        Ok(())
    }
}
