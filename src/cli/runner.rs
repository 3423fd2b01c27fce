use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alphamerge::{CompositeParams, composite_files, load_params};

use super::args::CliArgs;
use super::errors::AppError;

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Base parameters from `--params` (or defaults), with explicit flags applied on top.
/// Canvas size and compression are fixed for the command line.
fn resolve_params(args: &CliArgs) -> Result<CompositeParams, AppError> {
    let mut params = match &args.params {
        Some(path) => load_params(path)?,
        None => CompositeParams::default(),
    };

    let fixed = CompositeParams::default();
    if params.canvas != fixed.canvas {
        warn!(
            "Ignoring canvas {} from parameters file, using {}",
            params.canvas, fixed.canvas
        );
    }
    if params.compression != fixed.compression {
        warn!(
            "Ignoring compression {:?} from parameters file, using {:?}",
            params.compression, fixed.compression
        );
    }
    params.canvas = fixed.canvas;
    params.compression = fixed.compression;

    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(alpha_source) = args.alpha_source {
        params.alpha_source = alpha_source;
    }
    if let Some(bit_depth) = args.bit_depth {
        params.bit_depth = bit_depth;
    }
    if args.parallel {
        params.parallel = true;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), AppError> {
    if args.log {
        init_logging();
    }

    for input in [&args.background, &args.foreground] {
        if !input.is_file() {
            return Err(AppError::MissingInput {
                path: input.clone(),
            });
        }
    }
    if args.output.is_dir() {
        return Err(AppError::OutputIsDirectory {
            path: args.output.clone(),
        });
    }

    let params = resolve_params(&args)?;
    info!("Parameters: {:?}", params);
    info!(
        "Compositing color of {:?} with alpha of {:?}",
        args.foreground, args.background
    );

    composite_files(&args.background, &args.foreground, &args.output, &params)?;

    info!("Successfully processed: {:?}", args.output);
    println!("ok");
    Ok(())
}
