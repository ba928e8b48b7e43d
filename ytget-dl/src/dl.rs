//! yt-dlp Python API wrappers.
//!
//! Type-safe bindings to [yt-dlp](https://github.com/yt-dlp/yt-dlp) `YoutubeDL`
//! parameters. The download is observed through a progress hook registered
//! with the engine; only the `finished` signal carries the final file path.
//!
//! ```no_run
//! use ytget_dl::{dl::download, presets::Mode};
//! use std::path::Path;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let file = download("https://youtube.com/watch?v=example", Mode::Video.options(Path::new(".")))?;
//! # Ok(())
//! # }
//! ```

use crate::error::DownloadError;
use crate::slot::CompletionSlot;
use pyo3::ffi::c_str;
use pyo3::prelude::*;
use pyo3::types::{PyCFunction, PyDict, PyTuple};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Filename templates using `%(field)s` syntax. Key `default` required.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputTemplates(pub Option<HashMap<String, String>>);

impl OutputTemplates {
    /// Create with a single default template.
    pub fn simple(default: String) -> Self {
        Self(Some(HashMap::from([("default".to_string(), default)])))
    }
}

/// Download directories: `home`, `temp`, optional type-specific paths.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct OutputPaths(pub Option<HashMap<String, String>>);

impl OutputPaths {
    /// Create with home and temp directories.
    pub fn simple(home: &Path, temp: &Path) -> Self {
        Self::default().with_home(home).with_temp(temp)
    }

    pub fn with_home(self, home: &Path) -> Self {
        self.with_key("home".to_string(), home)
    }

    pub fn with_temp(self, temp: &Path) -> Self {
        self.with_key("temp".to_string(), temp)
    }

    fn with_key(self, key: String, value: &Path) -> Self {
        let mut inner = self.0.unwrap_or_default();
        inner.insert(key, value.to_string_lossy().to_string());
        Self(Some(inner))
    }
}

/// Post-download operation: `key` (e.g., `"FFmpegExtractAudio"`), optional `preferredcodec`.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct PostProcessor {
    pub key: String,
    pub preferredcodec: Option<String>,
}

/// yt-dlp download configuration passed to `YoutubeDL(params)`.
///
/// `None` fields are dropped before the params dict reaches the engine, so
/// the engine default applies. `postprocessors: Some(vec![])` is different:
/// it reaches the engine as an empty list and disables post-processing.
#[derive(Clone, Debug, Default, IntoPyObject)]
pub struct DownloadOptions {
    pub format: Option<String>,
    pub paths: Option<OutputPaths>,
    pub outtmpl: Option<OutputTemplates>,
    pub postprocessors: Option<Vec<PostProcessor>>,
    pub quiet: Option<bool>,
    pub no_warnings: Option<bool>,
}

/// Download a single URL and return the finished file path, if any.
///
/// Opens a scoped `YoutubeDL` session in the embedded bridge module and calls
/// `ydl.download([url])` with a progress hook attached. The hook records the
/// first `finished` report into a fresh [`CompletionSlot`]; every other
/// status is ignored. `Ok(None)` means the engine returned without ever
/// signaling completion.
pub fn download(url: &str, opts: DownloadOptions) -> Result<Option<PathBuf>, DownloadError> {
    let slot = Arc::new(CompletionSlot::new());
    let hook_slot = Arc::clone(&slot);

    tracing::debug!(url, ?opts, "invoking yt-dlp");

    Python::attach(|py| {
        let module = PyModule::from_code(py, c_str!(include_str!("./dl.py")), c"dl.py", c"dl")?;

        let hook = PyCFunction::new_closure(
            py,
            Some(c"progress_hook"),
            None,
            move |args, _kwargs| record_finished(args, &hook_slot),
        )?;

        let params = opts.into_pyobject(py)?;

        module.getattr("download")?.call1((url, params, hook))?;

        Ok::<_, PyErr>(())
    })
    .map_err(DownloadError::from)?;

    Ok(slot.get().map(Path::to_path_buf))
}

/// Progress hook body: record `filename` into the slot on `status == "finished"`.
fn record_finished(args: &Bound<'_, PyTuple>, slot: &CompletionSlot) -> PyResult<()> {
    let report = args.get_item(0)?;
    let report = report.downcast::<PyDict>()?;

    match report.get_item("status")? {
        Some(status) if status.extract::<String>()? == "finished" => {}
        _ => return Ok(()),
    }

    if let Some(filename) = report.get_item("filename")? {
        let path = PathBuf::from(filename.extract::<String>()?);
        if !slot.record(path) {
            tracing::debug!("completion already recorded, ignoring later report");
        }
    }

    Ok(())
}
