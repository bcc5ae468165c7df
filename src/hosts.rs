//! Hosts document model: an ordered, comment-preserving line sequence
//! with an upsert/remove/merge/delete mutation algebra.

use std::fs;
use std::io::{Read, Write};
use std::path::Path;

use colored::Colorize;

use crate::error::HostsError;
use crate::ip::{self, AddrKind};

/// One line of a hosts document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// `<address> <hostname>` entry. The address text is kept as written
    /// (port suffix included); `kind` is its classified family.
    Mapping {
        address: String,
        kind: AddrKind,
        hostname: String,
    },
    /// Anything else, verbatim: `#` comments, blank lines, lines that do
    /// not match the two-token grammar. Includes the trailing newline,
    /// except possibly on the final line of a file.
    Comment(String),
}

/// An in-memory hosts document. Line order is insertion order and is
/// preserved across a parse -> serialize round-trip.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostsFile {
    lines: Vec<Line>,
}

fn is_sep(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Match the two-token mapping grammar: address token, separator run,
/// hostname token, optional trailing separators, end of line. Leading
/// whitespace disqualifies the line.
fn split_mapping(line: &str) -> Option<(&str, &str)> {
    let body = line.strip_suffix('\n').unwrap_or(line);
    let bytes = body.as_bytes();

    let addr_end = bytes.iter().position(|&b| is_sep(b))?;
    if addr_end == 0 {
        return None;
    }
    let sep_end = addr_end + bytes[addr_end..].iter().take_while(|&&b| is_sep(b)).count();
    let host_len = bytes[sep_end..].iter().take_while(|&&b| !is_sep(b)).count();
    if host_len == 0 {
        return None;
    }
    if !bytes[sep_end + host_len..].iter().all(|&b| is_sep(b)) {
        return None;
    }
    Some((&body[..addr_end], &body[sep_end..sep_end + host_len]))
}

impl HostsFile {
    /// Parse a document from a string. A line starting with `#` is always
    /// a comment; a line matching the mapping grammar becomes a `Mapping`
    /// (its address must classify, or the whole parse fails); everything
    /// else survives verbatim as a comment.
    pub fn parse(content: &str) -> Result<Self, HostsError> {
        let mut lines = Vec::new();
        for raw in content.split_inclusive('\n') {
            if !raw.starts_with('#') {
                if let Some((address, hostname)) = split_mapping(raw) {
                    let kind = ip::classify(address)?;
                    lines.push(Line::Mapping {
                        address: address.to_string(),
                        kind,
                        hostname: hostname.to_string(),
                    });
                    continue;
                }
            }
            lines.push(Line::Comment(raw.to_string()));
        }
        Ok(HostsFile { lines })
    }

    /// Read and parse the document at `path`, holding a shared lock while
    /// reading.
    pub fn load(path: &Path) -> Result<Self, HostsError> {
        let mut file = fs::OpenOptions::new()
            .read(true)
            .open(path)
            .map_err(|e| HostsError::from_io(e, path))?;
        fs2::FileExt::lock_shared(&file).map_err(|e| HostsError::from_io(e, path))?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .map_err(|e| HostsError::from_io(e, path))?;
        Self::parse(&content)
    }

    /// Write the canonical form: `address<TAB>hostname\n` for mappings,
    /// comments byte-for-byte as parsed.
    pub fn serialize(&self, out: &mut dyn Write) -> std::io::Result<()> {
        for line in &self.lines {
            match line {
                Line::Mapping {
                    address, hostname, ..
                } => writeln!(out, "{address}\t{hostname}")?,
                Line::Comment(raw) => out.write_all(raw.as_bytes())?,
            }
        }
        Ok(())
    }

    /// Canonical form as a string.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        // Writing to a Vec cannot fail.
        self.serialize(&mut buf).expect("write to Vec");
        String::from_utf8(buf).expect("document is UTF-8")
    }

    /// Serialize to `path`, truncating, holding an exclusive lock while
    /// writing.
    pub fn save(&self, path: &Path) -> Result<(), HostsError> {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .map_err(|e| HostsError::from_io(e, path))?;
        fs2::FileExt::lock_exclusive(&file).map_err(|e| HostsError::from_io(e, path))?;
        self.serialize(&mut file)
            .map_err(|e| HostsError::from_io(e, path))?;
        Ok(())
    }

    /// Add or overwrite an entry. If a mapping with the same hostname and
    /// the same address family already exists, its address is replaced in
    /// place; otherwise a new mapping is appended. Validates before
    /// mutating, so a returned error leaves the document unchanged.
    pub fn add(&mut self, address: &str, hostname: &str) -> Result<(), HostsError> {
        if address.is_empty() {
            return Err(HostsError::MissingArgument("address"));
        }
        if hostname.is_empty() {
            return Err(HostsError::MissingArgument("hostname"));
        }
        let kind = ip::classify(address)?;

        for line in &mut self.lines {
            if let Line::Mapping {
                address: existing,
                kind: existing_kind,
                hostname: existing_host,
            } = line
            {
                if *existing_kind == kind && existing_host == hostname {
                    *existing = address.to_string();
                    return Ok(());
                }
            }
        }

        self.lines.push(Line::Mapping {
            address: address.to_string(),
            kind,
            hostname: hostname.to_string(),
        });
        Ok(())
    }

    /// Remove every mapping for `hostname`, optionally restricted to one
    /// address family. Comments are untouched; matched mappings are
    /// deleted outright rather than blanked.
    pub fn remove(&mut self, hostname: &str, kind: Option<AddrKind>) -> Result<(), HostsError> {
        if hostname.is_empty() {
            return Err(HostsError::MissingArgument("hostname"));
        }
        self.lines.retain(|line| match line {
            Line::Mapping {
                kind: k,
                hostname: h,
                ..
            } => h != hostname || kind.is_some_and(|want| *k != want),
            Line::Comment(_) => true,
        });
        Ok(())
    }

    /// Take the union of `source` into `self`: every source mapping is
    /// upserted in source order. Source comments are never imported.
    pub fn merge(&mut self, source: &HostsFile) -> Result<(), HostsError> {
        for line in &source.lines {
            if let Line::Mapping {
                address, hostname, ..
            } = line
            {
                self.add(address, hostname)?;
            }
        }
        Ok(())
    }

    /// Subtract `source` from `self`: remove entries whose hostname and
    /// family both match a source mapping. Source comments are ignored.
    pub fn delete(&mut self, source: &HostsFile) -> Result<(), HostsError> {
        for line in &source.lines {
            if let Line::Mapping { kind, hostname, .. } = line {
                self.remove(hostname, Some(*kind))?;
            }
        }
        Ok(())
    }

    /// Iterate over the mappings in document order.
    pub fn mappings(&self) -> impl Iterator<Item = (&str, AddrKind, &str)> {
        self.lines.iter().filter_map(|line| match line {
            Line::Mapping {
                address,
                kind,
                hostname,
            } => Some((address.as_str(), *kind, hostname.as_str())),
            Line::Comment(_) => None,
        })
    }

    /// Display listing of the mappings (comments are skipped). Verbose
    /// adds the address family and the 1-based line number. Read-only;
    /// never parsed back.
    pub fn render_human(&self, out: &mut dyn Write, verbose: bool) -> std::io::Result<()> {
        for (number, line) in self.lines.iter().enumerate() {
            if let Line::Mapping {
                address,
                kind,
                hostname,
            } = line
            {
                let address = match kind {
                    AddrKind::V4 => address.cyan(),
                    AddrKind::V6 => address.magenta(),
                };
                if verbose {
                    writeln!(
                        out,
                        "{:>4}  {}  {}  {}",
                        number + 1,
                        kind.label().yellow(),
                        address,
                        hostname.green()
                    )?;
                } else {
                    writeln!(out, "{}  {}", address, hostname.green())?;
                }
            }
        }
        Ok(())
    }
}
