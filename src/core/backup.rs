use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success, warning};
use std::fs;
use std::io::{Write, stdin, stdout};
use std::path::{Path, PathBuf};
use zip::ZipWriter;
use zip::write::FileOptions;

pub struct BackupLogic;

impl BackupLogic {
    /// Copy the database file to `dest_file`, or write it into a zip
    /// archive when `compress` is set (`.zip` is used as extension).
    /// Returns the path that was written, or `None` if the user declined
    /// to overwrite an existing file.
    pub fn backup(
        cfg: &Config,
        dest_file: &str,
        compress: bool,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let src = Path::new(&cfg.database);

        // 1️⃣ Check DB exists
        if !src.exists() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Database not found: {}", src.display()),
            )
            .into());
        }

        // 2️⃣ Resolve the file that will actually be written
        let dest = Path::new(dest_file);
        let target = if compress && !dest.extension().is_some_and(|e| e == "zip") {
            dest.with_extension("zip")
        } else {
            dest.to_path_buf()
        };

        if let Some(parent) = target.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // 3️⃣ Never write over the live database
        if same_location(src, &target) {
            return Err(AppError::Backup(format!(
                "backup target is the database itself: {}",
                target.display()
            )));
        }

        // 4️⃣ Existing target → ask confirmation
        if target.exists() && !force && !confirm_overwrite(&target)? {
            info("Backup cancelled by user.");
            return Ok(None);
        }

        // 5️⃣ Copy or compress
        if compress {
            compress_backup(src, &target)?;
            success(format!("Compressed backup created: {}", target.display()));
        } else {
            fs::copy(src, &target)?;
            success(format!("Backup created: {}", target.display()));
        }

        Ok(Some(target))
    }
}

fn confirm_overwrite(target: &Path) -> AppResult<bool> {
    warning(format!("The file '{}' already exists.", target.display()));
    print!("Overwrite? [y/N]: ");
    stdout().flush().ok();

    let mut answer = String::new();
    stdin().read_line(&mut answer)?;
    let answer = answer.trim().to_lowercase();

    Ok(answer == "y" || answer == "yes")
}

/// True when both paths name the same file. The target may not exist yet,
/// so only its parent directory is canonicalized.
fn same_location(a: &Path, b: &Path) -> bool {
    fn resolve(p: &Path) -> Option<PathBuf> {
        let parent = p
            .parent()
            .filter(|d| !d.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        Some(fs::canonicalize(parent).ok()?.join(p.file_name()?))
    }

    match (resolve(a), resolve(b)) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

/// Stream the database file into a single-entry .zip archive.
fn compress_backup(src: &Path, zip_path: &Path) -> AppResult<()> {
    let file = fs::File::create(zip_path)?;
    let mut zip = ZipWriter::new(file);

    let options: FileOptions<'_, ()> =
        FileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    let entry_name = src
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "worksummary.sqlite".to_string());

    let mut f = fs::File::open(src)?;
    zip.start_file(entry_name, options)
        .map_err(std::io::Error::other)?;

    std::io::copy(&mut f, &mut zip)?;
    zip.finish().map_err(std::io::Error::other)?;

    Ok(())
}
