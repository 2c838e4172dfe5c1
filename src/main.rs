use anyhow::Context;
use clap::Parser;
use has_rse::core::pipeline::Lookup;
use has_rse::core::report::HTML_FILENAME;
use has_rse::core::{ConfigProvider, Pipeline, SearchProvider, Storage};
use has_rse::utils::error::{ErrorSeverity, RseError};
use has_rse::utils::{logger, validation::Validate};
use has_rse::{
    CliConfig, DuckDuckGo, LocalStorage, ReferenceData, ReportEngine, RsePipeline, TomlConfig,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    if args.log_json {
        logger::init_json_logger(args.verbose);
    } else {
        logger::init_cli_logger(args.verbose);
    }

    tracing::info!("🚀 Starting has-rse");
    tracing::debug!("CLI config: {:?}", args);

    let result = match args.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let config = TomlConfig::from_file(&path)
                .with_context(|| format!("failed to load config file '{}'", path))?;
            let endpoint = config.search.endpoint.clone();
            let timeout = config.timeout();
            let reference = config.reference_data();
            execute(config, &endpoint, timeout, reference, &args).await
        }
        None => {
            let endpoint = args.search_endpoint.clone();
            let timeout = args.timeout();
            execute(args.clone(), &endpoint, timeout, ReferenceData::builtin(), &args).await
        }
    };

    if let Err(e) = result {
        tracing::error!(
            "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low | ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        std::process::exit(exit_code);
    }

    Ok(())
}

async fn execute<C>(
    config: C,
    endpoint: &str,
    timeout: Duration,
    reference: ReferenceData,
    args: &CliConfig,
) -> Result<(), RseError>
where
    C: ConfigProvider + Validate,
{
    config.validate()?;
    tracing::info!("✅ Configuration validated");

    let storage = LocalStorage::new(config.output_path().to_string());
    let output_path = config.output_path().to_string();
    let provider = DuckDuckGo::new(endpoint, timeout)?;
    let pipeline = RsePipeline::new(storage, config, provider, reference);

    if args.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No searches will be made");
        perform_dry_run(&pipeline);
        return Ok(());
    }

    if args.render_only {
        let records = pipeline.read_records().await?;
        tracing::info!("Re-rendering report from {} records", records.len());
        let artifacts = pipeline.transform(records).await?;
        pipeline.load(artifacts).await?;
        println!("✅ Report re-rendered: {}/{}", output_path, HTML_FILENAME);
        return Ok(());
    }

    let engine = ReportEngine::new(pipeline);
    let output = engine.run().await?;
    println!("✅ Scan completed successfully!");
    println!("📁 Output saved to: {}", output);
    Ok(())
}

fn perform_dry_run<S, C, P>(pipeline: &RsePipeline<S, C, P>)
where
    S: Storage,
    C: ConfigProvider,
    P: SearchProvider,
{
    let plan = pipeline.lookup_plan();
    let known = plan.iter().filter(|(_, l)| *l == Lookup::Known).count();

    for (university, lookup) in &plan {
        match lookup {
            Lookup::Known => println!("  ✔ {} (known override)", university),
            Lookup::Searched => println!("  ? {}", university),
        }
    }
    println!(
        "{} universities: {} known, {} to search",
        plan.len(),
        known,
        plan.len() - known
    );
}
