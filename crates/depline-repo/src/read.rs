use anyhow::Context;
use camino::Utf8Path;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Lazy line source over a file. Line terminators (`\n`, `\r\n`) are stripped.
pub type FileLines = io::Lines<BufReader<File>>;

/// Open `path` for line-by-line reading.
///
/// Opening fails eagerly; decoding errors surface per line while iterating.
pub fn read_lines(path: &Utf8Path) -> anyhow::Result<FileLines> {
    let file = File::open(path).with_context(|| format!("open {path}"))?;
    Ok(BufReader::new(file).lines())
}

/// Same as [`read_lines`] for an already opened reader (stdin, in-memory buffers).
pub fn reader_lines<R: BufRead>(reader: R) -> io::Lines<R> {
    reader.lines()
}
