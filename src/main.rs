use anyhow::Result;
use towerstack::{SynthesisConfig, TemplateLibrary, synthesize};

fn main() -> Result<()> {
    let config = SynthesisConfig::default();
    let library = TemplateLibrary::standard();
    let result = synthesize(&config, &library)?;

    for &id in &result.stories {
        let story = result.graph.story(id);
        println!(
            "{:>8.2} m  x{:<2}  {}",
            story.true_bottom(),
            story.multiplier,
            story.name
        );
    }
    println!("{}", serde_json::to_string_pretty(&result.system_map)?);
    Ok(())
}
