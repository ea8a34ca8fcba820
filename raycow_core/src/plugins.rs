use std::path::Path;

use crate::models::io::ImageWriter;

pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn file_extension(&self) -> String;

    fn writer(&self) -> Box<dyn ImageWriter>;
}

/// Checks that `path` ends with the extension of the format written by `plugin`, ignoring case.
pub fn has_matching_extension(plugin: &dyn ImageFormatSupportPlugin, path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.eq_ignore_ascii_case(&plugin.file_extension()))
        .unwrap_or(false)
}
