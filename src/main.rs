use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use chrono::Local;
use clap::Parser;
use log::info;

use disreport::{STYLESHEET, generate_report, load_code_unit};

const STYLE_CSS: &str = include_str!("../assets/style.css");

/// Generate a bytecode disassembly report as a HTML document.
#[derive(Parser, Debug)]
#[command(name = "disreport", version, about)]
struct Cli {
    /// Module dump from which to retrieve the desired object
    module: PathBuf,

    /// Name of the object whose code unit is reported on
    object_name: String,

    /// Output filename
    #[arg(short, default_value = "report.html")]
    output: String,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let unit = load_code_unit(&cli.module, &cli.object_name).with_context(|| {
        format!(
            "failed to load {:?} from {}",
            cli.object_name,
            cli.module.display()
        )
    })?;

    let start = Instant::now();
    let document = generate_report(&unit);
    info!("report document generated in {:?}", start.elapsed());

    let dir = PathBuf::from(format!(
        "report_{}",
        Local::now().format("%Y_%m_%d_%H_%M_%S")
    ));
    fs::create_dir(&dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let target = dir.join(&cli.output);
    fs::write(&target, document).with_context(|| format!("failed to write {}", target.display()))?;
    fs::write(dir.join(STYLESHEET), STYLE_CSS)?;

    println!("{}", target.display());
    Ok(())
}
