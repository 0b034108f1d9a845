use crate::diagnostics::{EventSink, FitEvent, LogSink};
use crate::model::{LsmDescription, LsmError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs::File;
use std::io::Write as _;
use std::path::Path;

pub const DEFAULT_PRECISION: usize = 3;

const TITLE: &str = "LSM computing result";
const TITLE_RULE: usize = 40;
const FOOTER_RULE: usize = 100;

/// Settings for [`Reporter`]. Missing fields take their defaults when
/// deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Digits printed after the decimal point for every value.
    pub precision: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { precision: DEFAULT_PRECISION }
    }
}

impl ReportConfig {
    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }
}

/// Renders an [`LsmDescription`] into the fixed report layout.
#[derive(Clone, Copy)]
pub struct Reporter<'a> {
    config: ReportConfig,
    sink: &'a dyn EventSink,
}

impl<'a> Reporter<'a> {
    pub fn new(config: ReportConfig, sink: &'a dyn EventSink) -> Self {
        Self { config, sink }
    }

    pub fn render(&self, description: &LsmDescription) -> String {
        let p = self.config.precision;
        let rule = "=".repeat(TITLE_RULE);
        let mut out = String::new();
        let _ = writeln!(out, "{}{}{}\n", rule, TITLE, rule);
        let _ = writeln!(out, "[INFO]: incline: {:.*};", p, description.incline());
        let _ = writeln!(out, "[INFO]: shift: {:.*};", p, description.shift());
        let _ = writeln!(out, "[INFO]: incline error: {:.*};", p, description.incline_error());
        let _ = writeln!(out, "[INFO]: shift error: {:.*};", p, description.shift_error());
        let _ = write!(out, "\n{}", "=".repeat(FOOTER_RULE));
        out
    }

    /// Renders the report and, when `save_to` is a non-empty path, writes it
    /// there, replacing any previous content. The text is returned either way.
    pub fn report(&self, description: &LsmDescription, save_to: Option<&Path>) -> Result<String> {
        let text = self.render(description);
        if let Some(path) = save_to.filter(|p| !p.as_os_str().is_empty()) {
            write_report(path, &text)?;
            self.sink.record(&FitEvent::ReportSaved { path: path.to_path_buf() });
        }
        Ok(text)
    }
}

fn write_report(path: &Path, text: &str) -> Result<()> {
    let io_err = |source| LsmError::Io { path: path.to_path_buf(), source };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(text.as_bytes()).map_err(io_err)?;
    file.flush().map_err(io_err)
}

/// Renders with the default precision; an empty `path_to_save` skips writing.
pub fn get_report(lsm_description: &LsmDescription, path_to_save: &str) -> Result<String> {
    Reporter::new(ReportConfig::default(), &LogSink).report(lsm_description, Some(Path::new(path_to_save)))
}
