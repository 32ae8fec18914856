use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Writes a configuration file with default values (end of shift 22:00,
/// Lunch 60 and Break 30) unless one already exists.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    println!("⚙️  Initializing rIndirect…");

    if path.exists() && !force {
        warning(format!(
            "Configuration file already exists: {} (use --force to overwrite)",
            path.display()
        ));
        return Ok(());
    }

    let cfg = Config::default();
    cfg.save(path)?;

    info(format!("📄 Config file : {}", path.display()));
    success("rIndirect initialization completed!");
    Ok(())
}
