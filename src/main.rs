use anyhow::Result;

use taskdash::config::{Config, ENV_CSRF_TOKEN, ENV_TASK_URL};
use taskdash::constants::{CONFIG_GENERATED, ERROR_NO_TASK_URL};
use taskdash::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().any(|arg| arg == "--init-config") {
        let path = Config::generate_default()?;
        println!("{CONFIG_GENERATED}: {}", path.display());
        return Ok(());
    }

    let config = Config::load()?;

    // Without a task endpoint there is nothing to poll.
    if config.server.task_url.is_empty() {
        eprintln!("{ERROR_NO_TASK_URL}");
        eprintln!("\n💡 To use this app:");
        eprintln!("1. Point it at your dashboard's task endpoint:");
        eprintln!("   export {ENV_TASK_URL}=https://your-server/api/tasks/");
        eprintln!("2. Provide the session's CSRF token:");
        eprintln!("   export {ENV_CSRF_TOKEN}=your_token_here");
        eprintln!("3. Run the app again (or set them in taskdash.toml)");
        return Ok(());
    }

    logger::init(&config.logging)?;

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
