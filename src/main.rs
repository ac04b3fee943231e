use std::path::PathBuf;
use std::process;

use log::{error, info};
use structopt::StructOpt;

use steven_materials::VANILLA;

mod inspect;
mod settings;

use crate::inspect::ToolError;
use crate::settings::Settings;

#[derive(StructOpt, Debug)]
#[structopt(name = "steven-materials")]
struct Opt {
    /// JSON settings file
    #[structopt(short = "c", long = "config", parse(from_os_str))]
    config: Option<PathBuf>,

    /// Log filter, overrides the settings file
    #[structopt(long = "log-level")]
    log_level: Option<String>,

    /// Pretty-print JSON output
    #[structopt(short = "p", long = "pretty")]
    pretty: bool,

    #[structopt(subcommand)]
    command: Command,
}

#[derive(StructOpt, Debug)]
enum Command {
    /// Print the variant stored under a code
    Lookup { family: String, code: u16 },
    /// Find a variant by name, ignoring case
    Name { family: String, name: String },
    /// Dump the registered variants of one family, or of all of them
    Dump { family: Option<String> },
    /// Re-check the invariants of every family
    Verify,
}

fn run(opt: Opt, settings: &Settings) -> Result<(), ToolError> {
    let pretty = opt.pretty || settings.pretty;
    match opt.command {
        Command::Lookup { family, code } => {
            let info = inspect::lookup(&VANILLA, &family, code)?;
            println!("{}", info);
        }
        Command::Name { family, name } => {
            let info = inspect::lookup_name(&VANILLA, &family, &name)?;
            println!("{}", info);
        }
        Command::Dump { family } => {
            let dump = inspect::dump(&VANILLA, family.as_deref())?;
            println!("{}", inspect::render(&dump, pretty)?);
        }
        Command::Verify => {
            let checked = inspect::verify(&VANILLA)?;
            info!("Verified {} families", checked);
        }
    }
    Ok(())
}

fn main() {
    let opt = Opt::from_args();

    let settings = match opt.config.as_deref() {
        Some(path) => match Settings::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                eprintln!("{}", err);
                process::exit(2);
            }
        },
        None => Settings::default(),
    };

    let level = opt.log_level.clone().unwrap_or_else(|| settings.log_level.clone());
    env_logger::Builder::new()
        .parse_filters(&level)
        .parse_default_env()
        .init();

    if let Err(err) = run(opt, &settings) {
        error!("{}", err);
        process::exit(1);
    }
}
