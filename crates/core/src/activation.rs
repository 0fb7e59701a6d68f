//! Line-oriented artifacts aligned 1:1 with the token stream.
//!
//! Downstream tooling pairs line `i` of an activation file with the `i`-th
//! token it fed to a model, so every writer here emits exactly one line per
//! token, in order. Token text is escaped (`\\`, `\n`, `\r`, `\t`) so that
//! multi-line node text cannot split a record.

use crate::error::{BioscopeError, Result};
use crate::model::{BioTag, LabeledDataset, TaggedToken};
use std::borrow::Cow;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const ACTIVATION_SUFFIX: &str = "_activation.txt";
pub const LABELS_SUFFIX: &str = "_labels.tsv";
pub const LISTING_SEPARATOR: &str = " -> ";

/// One parsed line of an activation file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivationRecord {
    pub tag: BioTag,
    pub text: String,
}

pub fn escape_text(text: &str) -> Cow<'_, str> {
    if !text.contains(['\\', '\n', '\r', '\t']) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    Cow::Owned(out)
}

pub fn unescape_text(text: &str) -> Cow<'_, str> {
    if !text.contains('\\') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    Cow::Owned(out)
}

/// `<dir>/<stem><suffix>`: the input path with its extension replaced by `suffix`.
pub fn derived_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{}{}", stem, suffix))
}

pub fn activation_path(input: &Path) -> PathBuf {
    derived_path(input, ACTIVATION_SUFFIX)
}

pub fn labels_path(input: &Path) -> PathBuf {
    derived_path(input, LABELS_SUFFIX)
}

/// Writes `<tag>\t<text>` per token. Returns the number of lines written.
pub fn write_activation<W: Write>(writer: &mut W, tokens: &[TaggedToken]) -> Result<usize> {
    for token in tokens {
        writeln!(writer, "{}\t{}", token.tag, escape_text(token.text()))?;
    }
    writer.flush()?;
    Ok(tokens.len())
}

/// Writes `<tag> -> <text>` per token, the human-readable listing.
pub fn write_listing<W: Write>(writer: &mut W, tokens: &[TaggedToken]) -> Result<usize> {
    for token in tokens {
        writeln!(
            writer,
            "{}{}{}",
            token.tag,
            LISTING_SEPARATOR,
            escape_text(token.text())
        )?;
    }
    writer.flush()?;
    Ok(tokens.len())
}

/// Writes `<word>\t<label>` per dataset entry.
pub fn write_labels<W: Write>(writer: &mut W, dataset: &LabeledDataset) -> Result<usize> {
    for (word, label) in dataset.iter() {
        writeln!(writer, "{}\t{}", escape_text(word), label)?;
    }
    writer.flush()?;
    Ok(dataset.len())
}

/// Creates `path` and writes the activation file through a buffered writer.
pub fn save_activation(path: &Path, tokens: &[TaggedToken]) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_activation(&mut writer, tokens)
}

pub fn save_labels(path: &Path, dataset: &LabeledDataset) -> Result<usize> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    write_labels(&mut writer, dataset)
}

pub fn read_activation<R: BufRead>(reader: R) -> Result<Vec<ActivationRecord>> {
    let mut records = Vec::new();
    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let (tag, text) = line.split_once('\t').ok_or_else(|| {
            BioscopeError::Parsing(format!("line {}: missing tab separator", number + 1))
        })?;
        records.push(ActivationRecord {
            tag: tag.parse()?,
            text: unescape_text(text).into_owned(),
        });
    }
    Ok(records)
}
