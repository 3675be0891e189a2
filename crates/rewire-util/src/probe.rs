//! File-existence probing for extensionless import specifiers.
//!
//! Import specifiers frequently omit the extension (`./mod`), or point at a
//! directory that resolves through an index file (`./comp` →
//! `./comp/index.ts`). [`probe`] answers which concrete file a specifier
//! lands on, trying candidate extensions in priority order, and returns a
//! [`FileExistStat`] from which the on-disk path can be reconstructed.

use std::path::{Path, PathBuf};

/// Candidate extensions tried in priority order when none are supplied.
pub const DEFAULT_EXTENSIONS: &[&str] = &[".mjs", ".js", ".ts", ".jsx", ".tsx", ".json", ".vue"];

/// Options for [`probe`].
#[derive(Debug, Clone, Default)]
pub struct ProbeOptions {
    /// Pre-computed existence of the probed path; skips the filesystem check.
    pub exists: Option<bool>,
    /// Pre-computed directory flag; skips the metadata lookup.
    pub is_directory: Option<bool>,
    /// Joined in front of relative probe paths.
    pub cwd: Option<PathBuf>,
    /// Candidate extensions in priority order. Defaults to
    /// [`DEFAULT_EXTENSIONS`].
    pub extensions: Option<Vec<String>>,
}

/// A successful probe.
///
/// `tail` records which rule matched and is what [`FileExistStat::join`]
/// keys on:
///
/// - `"index" + ext` — the path is a directory resolved through its index file
/// - equal to `ext` — the path was missing and the extension was appended
/// - empty — the path exists verbatim as a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileExistStat {
    /// The candidate extension that matched, leading dot included.
    pub ext: String,
    /// Disambiguation suffix; see the type docs.
    pub tail: String,
    /// Concrete on-disk path, already reconstructed via [`FileExistStat::join`].
    pub filename: PathBuf,
}

impl FileExistStat {
    /// Reconstruct the concrete on-disk path for `filepath` from this stat.
    ///
    /// Reconstruction is idempotent with respect to [`probe`]: joining the
    /// path that was probed always reproduces [`FileExistStat::filename`].
    #[must_use]
    pub fn join(&self, filepath: &Path) -> PathBuf {
        join_parts(filepath, &self.tail, &self.ext)
    }
}

fn join_parts(filepath: &Path, tail: &str, ext: &str) -> PathBuf {
    if tail.starts_with("index") {
        return filepath.join(tail);
    }
    if tail == ext {
        // String append, not a path join: `./mod` + `.ts` → `./mod.ts`.
        return PathBuf::from(format!("{}{tail}", filepath.display()));
    }
    filepath.to_path_buf()
}

/// Probe `filepath` against candidate extensions.
///
/// Returns `None` when no candidate matches under the applicable rule; a
/// miss is an expected outcome, not an error. Every call re-queries the
/// filesystem — callers probing the same specifier repeatedly should cache
/// the result themselves.
#[must_use]
pub fn probe(filepath: &Path, options: &ProbeOptions) -> Option<FileExistStat> {
    let filepath: PathBuf = match &options.cwd {
        Some(cwd) if filepath.is_relative() => cwd.join(filepath),
        _ => filepath.to_path_buf(),
    };

    let extensions: Vec<&str> = match &options.extensions {
        Some(exts) => exts.iter().map(String::as_str).collect(),
        None => DEFAULT_EXTENSIONS.to_vec(),
    };

    let exists = options.exists.unwrap_or_else(|| filepath.exists());
    let is_directory = exists && options.is_directory.unwrap_or_else(|| filepath.is_dir());

    let (ext, tail) = if exists {
        if is_directory {
            // Directory: resolved through its index file.
            let ext = extensions
                .iter()
                .copied()
                .find(|ext| filepath.join(format!("index{ext}")).exists())?;
            (ext, format!("index{ext}"))
        } else {
            // Verbatim file: still has to carry a candidate extension.
            let name = filepath.to_string_lossy();
            let ext = extensions.iter().copied().find(|ext| name.ends_with(*ext))?;
            (ext, String::new())
        }
    } else {
        // Missing: append each candidate and require a file, not just an entry.
        let ext = extensions
            .iter()
            .copied()
            .find(|ext| Path::new(&format!("{}{ext}", filepath.display())).is_file())?;
        (ext, ext.to_string())
    };

    let filename = join_parts(&filepath, &tail, ext);
    Some(FileExistStat {
        ext: ext.to_string(),
        tail,
        filename,
    })
}
