use addin_icons::{ICON_TARGETS, Result, create_icon};
use log::info;

fn main() -> Result<()> {
    // Initialize logging from environment variables
    env_logger::init();

    info!("Generating {} icons", ICON_TARGETS.len());
    for target in ICON_TARGETS {
        create_icon(target.size, target.path)?;
    }

    println!("All icons created successfully!");
    Ok(())
}
