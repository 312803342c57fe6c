//! The generated TypeScript module consumed by the website.

use crate::error::RunResult;
use crate::track::TrackExport;
use std::path::Path;

/// Must match the `Activity` interface in the site's `types/activity.ts`.
const IMPORT_HEADER: &str = "import { Activity } from '../types/activity';";

/// Serialize the collected tracks as the site's activities module,
/// overwriting any prior artifact wholesale.
pub fn write_activities_file(tracks: &[TrackExport], path: &Path) -> RunResult<()> {
    let json = serde_json::to_string_pretty(tracks)?;
    let contents = format!("{IMPORT_HEADER}\n\nexport const activities: Activity[] = {json};\n");
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(())
}
