use clap::Subcommand;

use pointlog_core::Settings;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show all settings
    Show,
    /// Get a single value
    Get { key: String },
    /// Set a value and persist it
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let settings = Settings::load()?;
            print!("{}", toml::to_string_pretty(&settings)?);
        }
        ConfigAction::Get { key } => {
            let settings = Settings::load()?;
            match settings.get(&key) {
                Some(value) => println!("{value}"),
                None => return Err(format!("unknown settings key: {key}").into()),
            }
        }
        ConfigAction::Set { key, value } => {
            let mut settings = Settings::load()?;
            settings.apply(&key, &value)?;
            settings.save()?;
            println!("{key} = {value}");
        }
    }
    Ok(())
}
