//! Import guide generation
//!
//! Renders a human-readable `IMPORT_INSTRUCTIONS.md` next to the exported
//! files so whoever picks up the directory knows how to get the dashboards
//! back into an instance.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::error::Result;

const INSTRUCTIONS_FILE: &str = "IMPORT_INSTRUCTIONS.md";

/// Render the import guide for a set of exported files
pub fn render_instructions(base_url: &str, exported_files: &[PathBuf]) -> String {
    let now = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");

    let mut file_list = String::new();
    for (index, filepath) in exported_files.iter().enumerate() {
        let filename = filepath
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        file_list.push_str(&format!("{}. {}\n", index + 1, filename));
    }

    format!(
        r#"# Axonius Dashboard Import Instructions

## Exported Files
{count} dashboard(s) exported on {now}

## How to Import via UI

1. Log into your Axonius instance
2. Navigate to Dashboards page
3. Click "Add Dashboard" -> "Import Dashboard"
4. Upload the JSON file for the dashboard you want to import
5. Set dashboard name and access permissions
6. Choose import behavior:
   - "Overwrite" to replace existing dashboards with same name
   - "Create a Copy" to create new dashboards with duplicate names

## How to Import via API

Use the following curl command template:

```bash
curl -X POST \
  {base_url}/api/dashboard/import \
  -H "Content-Type: application/vnd.api+json" \
  -H "api-key: YOUR_API_KEY" \
  -H "api-secret: YOUR_API_SECRET" \
  -d @dashboard_file.json
```

## Files Exported:

{file_list}
## Important Notes

- Access permissions are NOT included in exports and must be set during import
- Dashboards can only be imported to same major version or higher
- System dashboards (My Dashboard, etc.) cannot be exported
- Consider testing imports in a development environment first

## Version Compatibility

Exported from: {base_url}
Export Date: {now}

These dashboards should be importable to Axonius instances running the same
version or higher.
"#,
        count = exported_files.len(),
        now = now,
        base_url = base_url,
        file_list = file_list,
    )
}

/// Write the import guide into the export directory
pub fn write_instructions(
    output_dir: &Path,
    base_url: &str,
    exported_files: &[PathBuf],
) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let filepath = output_dir.join(INSTRUCTIONS_FILE);
    fs::write(&filepath, render_instructions(base_url, exported_files))?;
    info!(path = %filepath.display(), "import instructions saved");
    Ok(filepath)
}
