use super::{json_pretty, print_warnings, EXIT_SUCCESS};
use bindery_container::Container;
use std::path::Path;

pub fn run(path: &Path, json: bool) -> Result<u8, String> {
    let container = Container::open(path);
    if json {
        println!("{}", json_pretty(&container.as_manifest())?);
    } else {
        let resource = container.resource();
        println!("identifier:  {}", resource.identifier);
        println!("title:       {}", resource.title);
        println!("type:        {}", resource.kind);
        println!("format:      {}", resource.format);
        println!("conformsto:  {}", resource.conforms_to);
        println!(
            "language:    {} ({})",
            resource.language.identifier, resource.language.title
        );
        println!(
            "checking:    level {} by {}",
            container.checking_level(),
            container.checking_entity().join(", ")
        );
        println!("projects:    {}", container.project_ids().join(", "));
    }
    print_warnings(&container.warnings());
    Ok(EXIT_SUCCESS)
}
