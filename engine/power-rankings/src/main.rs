use anyhow::Context;
use clap::Parser;
use league_data::SleeperClient;
use power_rankings::{
    initialize_logging, Cli, ConsoleSink, CsvSink, FileRosterStrength, OutputConfig,
    PowerRankingsConfig, PowerRankingsEngine, PromptRosterStrength, ReportSink,
};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        PowerRankingsConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    cli.apply_to(&mut config);
    config.validate().context("Invalid configuration")?;

    initialize_logging(&config.logging)?;
    info!("🚀 Power rankings v{} starting", env!("CARGO_PKG_VERSION"));
    info!("League: {}", config.league.league_id);

    let client = SleeperClient::new(config.sleeper.clone())?;
    let mut sinks = build_sinks(&config.output);
    let engine = PowerRankingsEngine::new(config);

    let result = match &cli.roster_strength {
        Some(path) => {
            info!("Reading roster strength from {:?}", path);
            let mut strength = FileRosterStrength::from_path(path)?;
            engine.run(&client, &mut strength, &mut sinks).await
        }
        None => {
            let mut strength = PromptRosterStrength::stdio();
            engine.run(&client, &mut strength, &mut sinks).await
        }
    };

    let report = result.context("Power rankings run failed")?;
    info!("🎉 Ranked {} teams through week {}", report.rows.len(), report.completed_weeks);
    Ok(())
}

fn build_sinks(output: &OutputConfig) -> Vec<Box<dyn ReportSink>> {
    let mut sinks: Vec<Box<dyn ReportSink>> = Vec::new();
    if output.console {
        sinks.push(Box::new(ConsoleSink::stdout()));
    }
    if output.csv {
        sinks.push(Box::new(CsvSink::new(output.dir.clone())));
    }
    sinks
}
