use clap::Parser;
use grader_core::GraderError;
use grader_cli::{service_management, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    service_management::start(&cli)?;

    if let Err(err) = grader_cli::execute(&cli).await {
        if let Some(missing) = err.downcast_ref::<GraderError>() {
            if matches!(missing, GraderError::MissingFile(_)) {
                eprintln!("{missing}");
                std::process::exit(1);
            }
        }
        return Err(err);
    }

    Ok(())
}
