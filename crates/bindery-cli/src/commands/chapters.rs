use super::{json_pretty, print_warnings, EXIT_SUCCESS};
use bindery_container::Container;
use std::path::Path;

pub fn run(path: &Path, project: Option<&str>, json: bool) -> Result<u8, String> {
    let container = Container::open(path);
    let chapters = container.chapters(project);
    if json {
        println!("{}", json_pretty(&chapters)?);
    } else {
        for chapter in &chapters {
            println!("{chapter}");
        }
    }
    print_warnings(&container.warnings());
    Ok(EXIT_SUCCESS)
}
