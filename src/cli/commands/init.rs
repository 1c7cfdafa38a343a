use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command: write a default configuration file.
pub fn handle(config_path: Option<&str>, force: bool) -> AppResult<()> {
    let path = config_path
        .map(expand_tilde)
        .unwrap_or_else(Config::config_file);

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    Config::default().save(&path)?;
    success(format!("Config file: {}", path.display()));
    Ok(())
}
