#[macro_use] extern crate log;
extern crate clap;
extern crate quick_union;
extern crate rand;
extern crate simplelog;

use clap::{Parser, ValueEnum};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, WriteLogger};
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use std::process;

use quick_union::{
	numbered, parse_header, random_connections, run_client, ClientError, DisjointSet, QuickUnion,
	WeightedDisjointSet,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
	/// Plain quick-union, no balancing
	Quick,
	/// Union by rank with path compression
	Weighted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
	Off,
	Error,
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	fn filter(self) -> LevelFilter {
		match self {
			LogLevel::Off => LevelFilter::Off,
			LogLevel::Error => LevelFilter::Error,
			LogLevel::Warn => LevelFilter::Warn,
			LogLevel::Info => LevelFilter::Info,
			LogLevel::Debug => LevelFilter::Debug,
			LogLevel::Trace => LevelFilter::Trace,
		}
	}
}

/// Dynamic connectivity over `0..N`.
///
/// Reads `N` and then one `p q` pair per line from stdin, printing each pair
/// that connects two previously separate sets.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
	#[arg(long, value_enum, default_value = "quick")]
	strategy: Strategy,

	/// Instead of reading stdin, union random pairs over N elements until all
	/// are connected and print how many pairs it took
	#[arg(long, value_name = "N")]
	random: Option<usize>,

	#[arg(long, value_enum, default_value = "warn")]
	log_level: LogLevel,

	/// Write the log here; only warnings and errors still go to stderr
	#[arg(long)]
	log_file: Option<PathBuf>,
}

fn log_config() -> Config {
	Config {time: None, level: None, target: None, location: None, time_format: None}
}

fn init_logging(args: &Args) -> io::Result<()> {
	let level = args.log_level.filter();
	let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
	match args.log_file {
		Some(ref path) => {
			loggers.push(WriteLogger::new(level, log_config(), File::create(path)?));
			loggers.push(WriteLogger::new(LevelFilter::Warn.min(level), log_config(), io::stderr()));
		}
		None => loggers.push(WriteLogger::new(level, log_config(), io::stderr())),
	}
	CombinedLogger::init(loggers).map_err(|e| io::Error::new(io::ErrorKind::Other, e.to_string()))
}

fn run<D, R, W>(args: &Args, input: R, out: &mut W) -> Result<(), ClientError>
where
	D: DisjointSet,
	R: BufRead,
	W: Write,
{
	match args.random {
		Some(n) => {
			let mut set = D::with_len(n);
			let drawn = random_connections(&mut set, &mut rand::thread_rng())?;
			writeln!(out, "{}", drawn)?;
		}
		None => {
			let mut lines_iter = numbered(input.lines());
			let n = parse_header(&mut lines_iter)?;
			let mut set = D::with_len(n);
			let summary = run_client(&mut set, lines_iter, out)?;
			writeln!(out, "{} components", summary.components)?;
		}
	}
	out.flush()?;
	Ok(())
}

fn main() {
	let args = Args::parse();
	if let Err(e) = init_logging(&args) {
		eprintln!("could not set up logging: {}", e);
		process::exit(1);
	}
	info!("{:?}", args);

	let stdin = io::stdin();
	let stdout = io::stdout();
	let input = stdin.lock();
	let mut out = BufWriter::new(stdout.lock());
	let result = match args.strategy {
		Strategy::Quick => run::<QuickUnion, _, _>(&args, input, &mut out),
		Strategy::Weighted => run::<WeightedDisjointSet, _, _>(&args, input, &mut out),
	};
	if let Err(e) = result {
		error!("{}", e);
		eprintln!("error: {}", e);
		process::exit(1);
	}
}
