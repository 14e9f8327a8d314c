use crate::collect;
use crate::core::{ClassMap, Dialect, UsageTable};
use crate::io::output::{self, OutputFormat};
use crate::io::{self, FileWalker};
use crate::rank;
use crate::rewrite;
use anyhow::Result;
use std::path::PathBuf;

pub struct MinifyConfig {
    pub path: PathBuf,
    pub preview: bool,
    pub allow_duplicates: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub ignore_patterns: Vec<String>,
}

/// Run the full minification: collect usage across the tree, build the
/// class map, then preview it or rewrite every file under it.
///
/// Per-file read and replace failures are logged and skipped; only a
/// failure of the directory walk itself aborts the run.
pub fn run(config: MinifyConfig) -> Result<()> {
    let walker =
        FileWalker::new(config.path.clone()).with_ignore_patterns(config.ignore_patterns.clone());

    let map = collect_usage(&walker)?;

    if config.preview {
        let mut writer = output::create_writer(config.format, config.output.as_ref())?;
        writer.write_map(&map)?;
        return Ok(());
    }

    rewrite_tree(&walker, &map, config.allow_duplicates)
}

/// Collection pass: stream every supported file line by line, counting
/// recognized class names, then rank and assign short names.
fn collect_usage(walker: &FileWalker) -> Result<ClassMap> {
    let files = walker.walk()?;
    let mut table = UsageTable::new();
    let mut scanned = 0usize;

    for path in &files {
        let dialect = match Dialect::from_path(path) {
            Some(dialect) => dialect,
            None => continue,
        };
        match io::read_file(path) {
            Ok(content) => {
                collect::collect_file(&content, dialect, &mut table);
                scanned += 1;
                log::debug!("scanned {}", path.display());
            }
            Err(err) => {
                log::warn!("skipping unreadable {}: {err}", path.display());
            }
        }
    }

    log::info!(
        "collected {} distinct classes from {} files",
        table.len(),
        scanned
    );

    Ok(rank::build_class_map(&table))
}

/// Rewrite pass: re-walk the tree and replace each file's contents under
/// the finalized map, one atomic swap per file.
fn rewrite_tree(walker: &FileWalker, map: &ClassMap, allow_duplicates: bool) -> Result<()> {
    let files = walker.walk()?;
    let mut rewritten = 0usize;

    for path in &files {
        let dialect = match Dialect::from_path(path) {
            Some(dialect) => dialect,
            None => continue,
        };
        let content = match io::read_file(path) {
            Ok(content) => content,
            Err(err) => {
                log::warn!("skipping unreadable {}: {err}", path.display());
                continue;
            }
        };

        let updated = rewrite_content(&content, dialect, map, allow_duplicates);
        match io::replace_file(path, &updated) {
            Ok(()) => {
                rewritten += 1;
                log::debug!("rewrote {}", path.display());
            }
            Err(err) => {
                log::warn!("leaving {} untouched: {err}", path.display());
            }
        }
    }

    log::info!("rewrote {rewritten} files");
    Ok(())
}

fn rewrite_content(
    content: &str,
    dialect: Dialect,
    map: &ClassMap,
    allow_duplicates: bool,
) -> String {
    let mut updated = String::with_capacity(content.len());
    for line in content.lines() {
        updated.push_str(&rewrite::rewrite_line(line, dialect, map, !allow_duplicates));
        updated.push('\n');
    }
    updated
}
