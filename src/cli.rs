//! CLI definitions and command routing.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config;
use crate::hosts::HostsFile;
use crate::ip::AddrKind;

#[derive(Parser)]
#[command(name = "hostedit")]
#[command(about = "Edit hosts files: add, remove, merge and list entries")]
pub struct Cli {
    /// Hosts file to operate on (default: HOSTEDIT_FILE or the system hosts file)
    #[arg(long, global = true)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all entries in a readable form
    List {
        /// Also show address family and line number
        #[arg(long, short)]
        verbose: bool,
    },

    /// Print the hosts file in its canonical on-disk form
    Show,

    /// Add an entry, overwriting an existing one for the same hostname and family
    Add {
        hostname: String,
        /// IPv4 or IPv6 address; host:port and [host]:port forms are accepted
        address: String,
        /// Print the result to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove all entries for a hostname
    Remove {
        hostname: String,
        /// Only remove IPv4 entries
        #[arg(long, conflicts_with = "ipv6")]
        ipv4: bool,
        /// Only remove IPv6 entries
        #[arg(long, conflicts_with = "ipv4")]
        ipv6: bool,
        /// Print the result to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Union another hosts file into this one (its entries win on conflict)
    Merge {
        /// Hosts file whose entries are merged in
        other: PathBuf,
        /// Print the result to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },

    /// Remove every entry that also appears (same hostname and family) in another hosts file
    Delete {
        /// Hosts file whose entries are subtracted
        other: PathBuf,
        /// Print the result to stdout instead of writing the file
        #[arg(long)]
        dry_run: bool,
    },
}

/// Run CLI and dispatch to handlers.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = config::hosts_path(cli.file.as_deref());

    match cli.command {
        Commands::List { verbose } => cmd_list(&path, verbose),
        Commands::Show => cmd_show(&path),
        Commands::Add {
            hostname,
            address,
            dry_run,
        } => cmd_add(&path, &hostname, &address, dry_run),
        Commands::Remove {
            hostname,
            ipv4,
            ipv6,
            dry_run,
        } => {
            let kind = match (ipv4, ipv6) {
                (true, false) => Some(AddrKind::V4),
                (false, true) => Some(AddrKind::V6),
                _ => None,
            };
            cmd_remove(&path, &hostname, kind, dry_run)
        }
        Commands::Merge { other, dry_run } => cmd_merge(&path, &other, dry_run),
        Commands::Delete { other, dry_run } => cmd_delete(&path, &other, dry_run),
    }
}

/// Write back, or preview on stdout when dry-run.
fn commit(doc: &HostsFile, path: &Path, dry_run: bool) -> Result<()> {
    if dry_run {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        doc.serialize(&mut out)?;
        out.flush()?;
        Ok(())
    } else {
        doc.save(path)
            .with_context(|| format!("writing {}", path.display()))
    }
}

fn cmd_list(path: &Path, verbose: bool) -> Result<()> {
    let doc = HostsFile::load(path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    doc.render_human(&mut out, verbose)?;
    Ok(())
}

fn cmd_show(path: &Path) -> Result<()> {
    let doc = HostsFile::load(path)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    doc.serialize(&mut out)?;
    Ok(())
}

fn cmd_add(path: &Path, hostname: &str, address: &str, dry_run: bool) -> Result<()> {
    let mut doc = HostsFile::load(path)?;
    doc.add(address, hostname)?;
    commit(&doc, path, dry_run)?;
    if !dry_run {
        println!("Added entry: {address} -> {hostname}");
    }
    Ok(())
}

fn cmd_remove(path: &Path, hostname: &str, kind: Option<AddrKind>, dry_run: bool) -> Result<()> {
    let mut doc = HostsFile::load(path)?;
    doc.remove(hostname, kind)?;
    commit(&doc, path, dry_run)?;
    if !dry_run {
        println!("Removed entries for: {hostname}");
    }
    Ok(())
}

fn cmd_merge(path: &Path, other: &Path, dry_run: bool) -> Result<()> {
    let mut doc = HostsFile::load(path)?;
    let source = HostsFile::load(other)?;
    doc.merge(&source)?;
    commit(&doc, path, dry_run)?;
    if !dry_run {
        println!("Merged {} into {}", other.display(), path.display());
    }
    Ok(())
}

fn cmd_delete(path: &Path, other: &Path, dry_run: bool) -> Result<()> {
    let mut doc = HostsFile::load(path)?;
    let source = HostsFile::load(other)?;
    doc.delete(&source)?;
    commit(&doc, path, dry_run)?;
    if !dry_run {
        println!("Deleted entries of {} from {}", other.display(), path.display());
    }
    Ok(())
}
