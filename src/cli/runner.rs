use std::fs;

use tracing::info;
use tracing_subscriber::EnvFilter;

use iconset::{DEFAULT_INPUT, IconSetParams, generate_icon_set};

use super::args::CliArgs;
use super::errors::AppError;

fn build_params(args: &CliArgs) -> Result<IconSetParams, AppError> {
    let mut params = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
                path: path.clone(),
                source,
            })?;
            IconSetParams::from_json(&text)?
        }
        None => IconSetParams::from_layout(
            DEFAULT_INPUT,
            &args.output_dir,
            &args.prefix,
            &args.sizes,
        ),
    };
    if let Some(input) = &args.input {
        params.input = input.clone();
    }
    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }

    let params = build_params(&args)?;
    info!(
        "Resizing {:?} to {} output(s)",
        params.input,
        params.outputs.len()
    );

    let report = generate_icon_set(&params)?;
    info!("Icon set complete: {} file(s) written", report.outputs.len());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
