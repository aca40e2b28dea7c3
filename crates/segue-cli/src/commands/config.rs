use anyhow::Result;

use segue_ingest::{config, Config};

/// Show the current effective configuration.
pub fn show_config() -> Result<()> {
    let config = Config::load()?;

    println!("Current Configuration");
    println!("=====================\n");

    println!("Config file: {}", config::config_file_path().display());

    let exists = config::config_file_path().exists();
    println!(
        "File exists: {}\n",
        if exists { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  catalog_path: {}",
        config
            .catalog_path
            .as_ref()
            .map_or_else(|| String::from("<not set>"), |p| p.display().to_string())
    );
    println!("  default_weight: {}", config.default_weight);
    println!("  result_limit: {}", config.result_limit);

    println!("\nPriority: CLI args > ENV vars (SEGUE_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() -> Result<()> {
    println!("{}", config::config_file_path().display());
    Ok(())
}

/// Show example configuration.
pub fn show_example() -> Result<()> {
    print!("{}", config::example_config());
    Ok(())
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to point segue at your catalog.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
