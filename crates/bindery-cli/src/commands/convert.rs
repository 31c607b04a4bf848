use super::{json_pretty, EXIT_SUCCESS};
use bindery_legacy::LegacyProject;
use std::fs;
use std::path::Path;

pub fn run(path: &Path, output: Option<&Path>, json: bool) -> Result<u8, String> {
    let project = LegacyProject::open(path).map_err(|e| format!("{e}: {}", e.kind()))?;
    let manifest = project.rc_manifest();

    if json {
        println!("{}", json_pretty(&manifest)?);
        return Ok(EXIT_SUCCESS);
    }

    let yaml = manifest.to_yaml().map_err(|e| e.to_string())?;
    if let Some(dir) = output {
        fs::create_dir_all(dir).map_err(|e| format!("failed to create {}: {e}", dir.display()))?;
        let dest = dir.join("manifest.yaml");
        fs::write(&dest, &yaml).map_err(|e| format!("failed to write {}: {e}", dest.display()))?;
        println!("✓ wrote {}", dest.display());
    } else {
        print!("{yaml}");
    }
    Ok(EXIT_SUCCESS)
}
