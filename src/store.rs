//! Template and output directories on the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::model::Document;
use crate::writer::DocxWriter;

/// Extension eligible templates must carry.
const TEMPLATE_EXTENSION: &str = "docx";

/// Prefix of editor lock files, excluded from listings.
const LOCK_FILE_PREFIX: &str = "~$";

/// Prefix of generated output file names.
const OUTPUT_PREFIX: &str = "minuta_modificada_";

/// Timestamp layout embedded in output file names.
const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Filesystem store: a folder of templates and a folder of generated files.
///
/// The store never mutates templates. Generated documents get unique
/// timestamped names; two calls within the same second would collide, which
/// is accepted for this single-user scope.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    templates_dir: PathBuf,
    output_dir: PathBuf,
}

impl TemplateStore {
    /// Create a store rooted at a directory, using the conventional
    /// `templates/` and `generated/` subdirectories.
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        let root = root.as_ref();
        Self {
            templates_dir: root.join("templates"),
            output_dir: root.join("generated"),
        }
    }

    /// Create a store with explicit directories.
    pub fn with_dirs(templates_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            templates_dir: templates_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    /// The directory scanned for templates.
    pub fn templates_dir(&self) -> &Path {
        &self.templates_dir
    }

    /// The directory generated documents are written to.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// List eligible template files, sorted by file name.
    ///
    /// Eligible means: a regular file with the `.docx` extension whose name
    /// does not start with the editor lock-file marker.
    pub fn list_templates(&self) -> Result<Vec<PathBuf>> {
        let mut templates = Vec::new();
        for entry in fs::read_dir(&self.templates_dir)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let has_extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| ext.eq_ignore_ascii_case(TEMPLATE_EXTENSION));
            if !has_extension {
                continue;
            }
            let is_lock_file = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(LOCK_FILE_PREFIX));
            if is_lock_file {
                continue;
            }
            templates.push(path);
        }
        templates.sort();
        Ok(templates)
    }

    /// Output path for a given timestamp:
    /// `<output_dir>/minuta_modificada_YYYYMMDD_HHMMSS.docx`.
    pub fn output_path(&self, timestamp: &DateTime<Local>) -> PathBuf {
        let stamp = timestamp.format(TIMESTAMP_FORMAT);
        self.output_dir
            .join(format!("{}{}.{}", OUTPUT_PREFIX, stamp, TEMPLATE_EXTENSION))
    }

    /// Output path stamped with the current local time.
    pub fn output_path_now(&self) -> PathBuf {
        self.output_path(&Local::now())
    }

    /// Write a generated document into the output directory.
    ///
    /// The directory is created on demand. Returns the path of the new
    /// file; the document is serialized fully in memory before anything
    /// touches the disk.
    pub fn save_generated(&self, document: &Document) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;
        let path = self.output_path_now();
        DocxWriter::new().save(document, &path)?;
        Ok(path)
    }
}
