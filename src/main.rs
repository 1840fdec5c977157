use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use color_grep::assets::{AssetCategory, AssetLoader, REPORT_TEMPLATE};
use color_grep::models::{AppConfig, InputSource, OutputFormat};
use color_grep::services::{ReportContext, ReportService, Scanner};
use delta_e::{parse_color, perceptual_distance, LinearRgb, Normalization, ReferenceSet, Srgb, Xyz};

/// Exit status for usage and runtime errors, as grep uses it
const EXIT_TROUBLE: u8 = 2;

#[derive(Parser)]
#[command(name = "color-grep")]
#[command(version, about = "Find hex colors that look like the one you are looking for")]
struct Cli {
    /// Config file (defaults to COLOR_GREP_CONFIG, then the embedded config)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory with a report.html overriding the embedded template
    /// (defaults to COLOR_GREP_TEMPLATES)
    #[arg(long, global = true)]
    templates: Option<PathBuf>,

    /// Log what is being scanned (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search files for colors perceptually close to COLOR
    Search(SearchArgs),
    /// Print the CIEDE2000 distance between two colors
    Diff {
        color_a: String,
        color_b: String,

        /// Use the XYZ normalization of color-grep 0.1
        #[arg(long)]
        legacy_lab: bool,
    },
    /// Print the XYZ and L*a*b* values of colors
    Lab {
        #[arg(required = true)]
        colors: Vec<String>,

        /// Use the XYZ normalization of color-grep 0.1
        #[arg(long)]
        legacy_lab: bool,
    },
    /// Extract the embedded config and report template for customization
    Init {
        /// Directory to extract into
        #[arg(long, default_value = ".")]
        dir: PathBuf,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Reference color, `#RRGGBB` or `RRGGBB`
    color: String,

    /// Files or directories to search; `-` or nothing reads stdin
    paths: Vec<PathBuf>,

    /// Additional reference color (repeatable)
    #[arg(short = 'c', long = "color", value_name = "COLOR")]
    colors: Vec<String>,

    /// Maximum CIEDE2000 distance for a match (inclusive)
    #[arg(short, long)]
    epsilon: Option<f64>,

    /// Report format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Use the XYZ normalization of color-grep 0.1
    #[arg(long)]
    legacy_lab: bool,

    /// Do not descend into subdirectories
    #[arg(long)]
    no_recursive: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("color-grep: {e:#}");
            ExitCode::from(EXIT_TROUBLE)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config_file = cli
        .config
        .or_else(|| std::env::var("COLOR_GREP_CONFIG").ok().map(PathBuf::from));
    let templates_dir = cli
        .templates
        .or_else(|| std::env::var("COLOR_GREP_TEMPLATES").ok().map(PathBuf::from));
    let loader = AssetLoader::new(templates_dir, config_file);

    match cli.command {
        Some(Commands::Search(args)) => run_search_command(args, &loader),
        Some(Commands::Diff {
            color_a,
            color_b,
            legacy_lab,
        }) => run_diff_command(&color_a, &color_b, legacy_lab, &loader),
        Some(Commands::Lab { colors, legacy_lab }) => {
            run_lab_command(&colors, legacy_lab, &loader)
        }
        Some(Commands::Init { dir, force, list }) => run_init_command(&loader, dir, force, list),
        None => {
            run_status_command(&loader);
            Ok(ExitCode::SUCCESS)
        }
    }
}

/// Logs go to stderr so they never mix with the report
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "color_grep=debug"
    } else {
        "color_grep=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(io::stderr),
        )
        .init();
}

fn parse_arg_color(text: &str) -> anyhow::Result<Srgb> {
    parse_color(text).with_context(|| format!("invalid color {text:?}"))
}

fn normalization_for(legacy_lab: bool, config: &AppConfig) -> Normalization {
    if legacy_lab {
        Normalization::Legacy
    } else {
        config.lab_normalization()
    }
}

/// Search files for colors close to the references
fn run_search_command(args: SearchArgs, loader: &AssetLoader) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(loader);

    let epsilon = args.epsilon.unwrap_or(config.epsilon);
    anyhow::ensure!(
        epsilon.is_finite() && epsilon >= 0.0,
        "epsilon must be a non-negative number, got {epsilon}"
    );
    let format = args.format.unwrap_or(config.format);
    let normalization = normalization_for(args.legacy_lab, &config);

    let mut primary = vec![parse_arg_color(&args.color)?];
    for text in &args.colors {
        primary.push(parse_arg_color(text)?);
    }
    let colors = config
        .reference_colors(&primary)
        .context("invalid color in config")?;
    let references = ReferenceSet::with_normalization(&colors, normalization)?;
    let scanner = Scanner::new(references, epsilon);

    let inputs: Vec<InputSource> = if args.paths.is_empty() {
        vec![InputSource::Stdin]
    } else {
        args.paths.iter().map(|p| InputSource::from_arg(p)).collect()
    };

    let summary = scanner.scan_inputs(
        &inputs,
        &config,
        !args.no_recursive,
        &mut io::stdin().lock(),
    );
    for error in &summary.errors {
        eprintln!("color-grep: {error}");
    }

    let context = ReportContext::new(scanner.references(), scanner.epsilon(), &summary);
    let service = ReportService::new(loader.clone());
    match args.output {
        Some(path) => {
            let file = File::create(&path)
                .with_context(|| format!("cannot create {}", path.display()))?;
            service.write(format, &context, &summary.matches, BufWriter::new(file))?;
            tracing::info!(path = %path.display(), "Report written");
        }
        None => service.write(format, &context, &summary.matches, io::stdout().lock())?,
    }

    Ok(ExitCode::from(summary.exit_code()))
}

/// Print the distance between two colors
fn run_diff_command(
    color_a: &str,
    color_b: &str,
    legacy_lab: bool,
    loader: &AssetLoader,
) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(loader);
    let normalization = normalization_for(legacy_lab, &config);

    let a = parse_arg_color(color_a)?;
    let b = parse_arg_color(color_b)?;
    let distance = perceptual_distance(
        delta_e::to_lab_with(a, normalization),
        delta_e::to_lab_with(b, normalization),
    );
    println!("{distance:.4}");

    Ok(ExitCode::SUCCESS)
}

/// Print every stage of the conversion for each color
fn run_lab_command(
    colors: &[String],
    legacy_lab: bool,
    loader: &AssetLoader,
) -> anyhow::Result<ExitCode> {
    let config = AppConfig::load(loader);
    let normalization = normalization_for(legacy_lab, &config);

    for text in colors {
        let color = parse_arg_color(text)?;
        let xyz = Xyz::from(LinearRgb::from(color));
        let lab = xyz.to_lab(normalization);
        println!(
            "{}  XYZ({:.4}, {:.4}, {:.4})  Lab({:.4}, {:.4}, {:.4})",
            color, xyz.x, xyz.y, xyz.z, lab.l, lab.a, lab.b
        );
    }

    Ok(ExitCode::SUCCESS)
}

/// Extract embedded assets to filesystem
fn run_init_command(
    loader: &AssetLoader,
    dir: PathBuf,
    force: bool,
    list: bool,
) -> anyhow::Result<ExitCode> {
    if list {
        println!("Embedded assets:\n");
        println!("Config:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        println!("\nTemplates:");
        for f in AssetLoader::list_embedded(AssetCategory::Templates) {
            println!("  {f}");
        }
        return Ok(ExitCode::SUCCESS);
    }

    let report = loader.init(&[AssetCategory::Config, AssetCategory::Templates], &dir, force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(ExitCode::SUCCESS)
}

/// Display status and configuration information
fn run_status_command(loader: &AssetLoader) {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_env = std::env::var("COLOR_GREP_CONFIG").ok();
    let templates_env = std::env::var("COLOR_GREP_TEMPLATES").ok();
    let rust_log = std::env::var("RUST_LOG").ok();

    println!("color-grep v{VERSION}");
    println!("Find hex colors that look like the one you are looking for\n");

    println!("Environment Variables:");
    println!(
        "  COLOR_GREP_CONFIG    = {}",
        config_env.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  COLOR_GREP_TEMPLATES = {}",
        templates_env.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  RUST_LOG             = {}",
        rust_log.as_deref().unwrap_or("color_grep=warn (default)")
    );

    println!("\nAsset Sources:");
    println!("  Config:   {}", loader.config_source());
    println!("  Template: {}", loader.template_source(REPORT_TEMPLATE));

    let config = AppConfig::load(loader);
    println!("\nSearch Defaults:");
    println!("  epsilon:       {}", config.epsilon);
    println!(
        "  format:        {}",
        match config.format {
            OutputFormat::Text => "text",
            OutputFormat::Html => "html",
        }
    );
    println!("  normalization: {:?}", config.lab_normalization());
    println!("  extra colors:  {}", config.colors.len());
    println!("  extensions:    {}", config.extensions.join(", "));

    println!("\nCommands:");
    println!("  color-grep search COLOR [PATH]...  Find colors close to COLOR");
    println!("  color-grep diff A B                Distance between two colors");
    println!("  color-grep lab COLOR...            Show XYZ and L*a*b* values");
    println!("  color-grep init                    Extract config and template");
    println!("\nRun 'color-grep --help' for more details.");
}
