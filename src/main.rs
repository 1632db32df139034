use anyhow::Context;
use clap::{
    ArgAction,
    Parser,
    Subcommand,
};
use perichain::{
    prelude::*,
    sysdefs,
};
use std::{
    fs::File,
    io::{
        BufWriter,
        Write,
    },
    path::{
        Path,
        PathBuf,
    },
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "perichain", version, about = "Chain FPGA peripherals onto the bus")]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate wiring, includes and the enumerator ROM from a description file
    Build {
        /// The description file: eight ROM header lines, then peripheral names
        description: PathBuf,
        /// Where to write the wiring (default: stdout)
        #[arg(long)]
        wiring: Option<PathBuf>,
        /// Where to write the include directives
        #[arg(long, default_value = "includes.tmp")]
        includes: PathBuf,
        /// Where to write the ROM initialization listing
        #[arg(long, default_value = "enumerator.lst")]
        rom: PathBuf,
    },
    /// Print the header and per-slot drivers recorded in a ROM listing
    Decode {
        /// A listing written by `build`
        listing: PathBuf,
    },
    /// List every known peripheral name
    List,
    /// Write the shared constants header
    Sysdefs {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn create(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file = File::create(path)
        .with_context(|| format!("Unable to open '{}' for writing", path.display()))?;
    Ok(BufWriter::new(file))
}

fn output(path: Option<&Path>) -> anyhow::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(create(path)?),
        None => Box::new(std::io::stdout().lock()),
    })
}

fn build_cmd(
    description: &Path,
    wiring: Option<&Path>,
    includes: &Path,
    rom: &Path,
) -> anyhow::Result<()> {
    let input = std::fs::read(description)
        .with_context(|| format!("Unable to read {}", description.display()))?;
    let registry = Registry::standard();
    let mut includes_out = create(includes)?;
    let mut wiring_out = output(wiring)?;

    generate(
        &input,
        &registry,
        &mut wiring_out,
        &mut includes_out,
        || File::create(rom).map(BufWriter::new),
    )
    .with_context(|| {
        format!(
            "Failed to build {} into {}",
            description.display(),
            rom.display()
        )
    })?;
    Ok(())
}

fn decode_cmd(listing: &Path) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(listing)
        .with_context(|| format!("Unable to read {}", listing.display()))?;
    let image = parse_listing(&text)?;
    let contents = RomContents::from_bytes(&image)?;
    let mut out = std::io::stdout().lock();
    for (i, line) in contents.header.iter().enumerate() {
        writeln!(out, "header {i}: {line}")?;
    }
    for (slot, driver) in contents.drivers.iter().enumerate() {
        writeln!(out, "slot {slot:02}: {driver}")?;
    }
    Ok(())
}

fn list_cmd() -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    writeln!(
        out,
        "{:<12} {:<34} {:<12} {:<12} pins",
        "name", "module", "include", "driver"
    )?;
    for d in Registry::standard().iter() {
        writeln!(
            out,
            "{:<12} {:<34} {:<12} {:<12} {}",
            d.name,
            d.module(),
            d.include,
            d.driver,
            d.pin_count()
        )?;
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    match cli.command {
        Commands::Build {
            description,
            wiring,
            includes,
            rom,
        } => build_cmd(&description, wiring.as_deref(), &includes, &rom),
        Commands::Decode { listing } => decode_cmd(&listing),
        Commands::List => list_cmd(),
        Commands::Sysdefs { output: path } => {
            let mut out = output(path.as_deref())?;
            sysdefs::write_header(&mut out)?;
            out.flush()?;
            Ok(())
        }
    }
}
