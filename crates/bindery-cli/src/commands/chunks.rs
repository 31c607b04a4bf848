use super::{json_pretty, print_warnings, EXIT_SUCCESS};
use bindery_container::Container;
use std::path::Path;

pub fn run(path: &Path, project: &str, chapter: Option<&str>, json: bool) -> Result<u8, String> {
    let container = Container::open(path);
    let chunks = container.chunks(project, chapter);
    if json {
        println!("{}", json_pretty(&chunks)?);
    } else {
        for chunk in &chunks {
            println!("{chunk}");
        }
    }
    print_warnings(&container.warnings());
    Ok(EXIT_SUCCESS)
}
