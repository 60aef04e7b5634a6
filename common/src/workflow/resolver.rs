use crate::model::asset::Asset;
use crate::requests::DownloadResponse;

use super::WorkflowError;

/// The only format the in-browser viewer loads.
pub const VIEWER_EXTENSION: &str = ".glb";

/// Picks the file the viewer displays.
pub fn resolve_asset(response: &DownloadResponse) -> Result<Asset, WorkflowError> {
    select_file(response, VIEWER_EXTENSION)
}

/// First file whose name ends with `extension`, compared case-insensitively.
///
/// An `error` other than `"OK"` rejects the whole response; an absent or empty
/// list is reported separately from a list without a match.
pub fn select_file(response: &DownloadResponse, extension: &str) -> Result<Asset, WorkflowError> {
    if let Some(error) = response.error.as_deref().filter(|e| *e != "OK") {
        return Err(WorkflowError::DownloadRejected(error.to_string()));
    }

    let files = match response.list.as_deref() {
        Some(files) if !files.is_empty() => files,
        _ => return Err(WorkflowError::NoFiles),
    };

    let extension = extension.to_ascii_lowercase();
    files
        .iter()
        .find(|file| file.name.to_ascii_lowercase().ends_with(&extension))
        .map(|file| Asset {
            url: file.url.clone(),
            name: file.name.clone(),
            format: extension.trim_start_matches('.').to_string(),
        })
        .ok_or(WorkflowError::NoMatchingFile { extension })
}
