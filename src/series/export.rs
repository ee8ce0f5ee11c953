use crate::series::{Series, SeriesColumn};
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::Path;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumString};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum SeriesFormat {
    Csv,
    Tsv,
    Json,
}

impl Series {
    /// Writes the four aligned sequences (plus arrival index) to `path`.
    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: SeriesFormat) -> Result<(), Error> {
        let file = File::create(path)?;
        let mut w = BufWriter::new(file);
        match fmt {
            SeriesFormat::Csv => self.write_delimited(&mut w, ',')?,
            SeriesFormat::Tsv => self.write_delimited(&mut w, '\t')?,
            SeriesFormat::Json => self.write_json(&mut w)?,
        }
        w.flush()
    }

    fn write_delimited<W: Write>(&self, w: &mut W, delimiter: char) -> Result<(), Error> {
        write!(w, "index")?;
        for col in SeriesColumn::iter() {
            write!(w, "{delimiter}{col}")?;
        }
        writeln!(w)?;

        for e in self.entries() {
            write!(w, "{}", e.index)?;
            for col in SeriesColumn::iter() {
                write!(w, "{delimiter}{:.6}", e.value(col))?;
            }
            writeln!(w)?;
        }
        Ok(())
    }

    fn write_json<W: Write>(&self, w: &mut W) -> Result<(), Error> {
        writeln!(w, "[")?;
        let n = self.len();
        for (i, e) in self.entries().iter().enumerate() {
            write!(w, "  ")?;
            serde_json::to_writer(&mut *w, e)?;
            writeln!(w, "{}", if i + 1 == n { "" } else { "," })?;
        }
        writeln!(w, "]")?;
        Ok(())
    }
}
