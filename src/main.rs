use anyhow::Result;
use stratification::{Application, Settings};
use tracing::info;

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    info!("Starting stratification reproduction");

    let settings = Settings::new()?;
    let app = Application::new(settings);
    let (outcome, paths) = app.run()?;

    info!(report = %paths.text.display(), "reproduction complete");

    if !outcome.all_claims_pass {
        anyhow::bail!("manuscript validation failed; see {}", paths.text.display());
    }

    Ok(())
}
