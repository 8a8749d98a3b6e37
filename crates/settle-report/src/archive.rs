//! ZIP archive assembly. Mirrors `datasynth-fingerprint`'s `.dsf` writer
//! (`datasynth-fingerprint/src/io/writer.rs`): a `zip::ZipWriter` over
//! an in-memory buffer, `SimpleFileOptions` with `Deflated`
//! compression, one `start_file`/`write_all` pair per member.
//!
//! Intermediate files are staged in a scoped temporary directory
//! first. `tempfile::TempDir`'s `Drop` removes it on every exit path
//! — including an early `?` return or a panic unwind — satisfying the
//! "guaranteed deletion on all exit paths" requirement without any
//! explicit cleanup code.

use std::io::{Cursor, Write};
use std::path::Path;

use indexmap::IndexMap;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use settle_core::{registry, AreaTag, Group, ReferenceKey, SettleResult};

use crate::csv::{build_group_extract, build_summary_csv, group_extract_filename};

/// `<original_base>_<area_tag>.zip`
pub fn archive_filename(original_base: &str, area_tag: AreaTag) -> String {
    format!("{original_base}_{area_tag}.zip")
}

/// Build the job's archive: `transactions_summary.csv` plus one
/// raw-line extract file per group.
pub fn build_archive(groups: &IndexMap<ReferenceKey, Group>, area_tag: AreaTag) -> SettleResult<Vec<u8>> {
    let scratch = tempfile::tempdir()?;
    stage_files(scratch.path(), groups, area_tag)?;
    zip_directory(scratch.path())
}

fn stage_files(
    dir: &Path,
    groups: &IndexMap<ReferenceKey, Group>,
    area_tag: AreaTag,
) -> SettleResult<()> {
    std::fs::write(dir.join("transactions_summary.csv"), build_summary_csv(groups))?;
    for (key, group) in groups {
        let display_name = registry::lookup(group.channel_id).display_name;
        let filename = group_extract_filename(key, display_name, area_tag.as_str());
        std::fs::write(dir.join(filename), build_group_extract(group))?;
    }
    Ok(())
}

fn zip_directory(dir: &Path) -> SettleResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let mut entries: Vec<_> = std::fs::read_dir(dir)?.collect::<std::io::Result<_>>()?;
    entries.sort_by_key(|e| e.file_name());

    for entry in entries {
        let name = entry.file_name().to_string_lossy().into_owned();
        let contents = std::fs::read(entry.path())?;
        writer.start_file(name, options)?;
        writer.write_all(&contents)?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}
