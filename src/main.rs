//! Wordgrid Difficulty - CLI
//!
//! Scores letter sequences for the 5x5 word grid game by exhaustive bitmask search,
//! computes buildable-word curves, and generates random sequences.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;
use wordgrid_difficulty::{
    commands::{GenerateConfig, ScoreConfig, generate_records, run_curve, score_sequence},
    core::Sequence,
    dictionary::Dictionary,
    output::{print_curve_summary, print_generate_summary, print_score_result},
    search::{CancelFlag, DEFAULT_DEPTH},
    sequences::{DEFAULT_SEQUENCE_LENGTH, load_records, load_sequence, write_curves, write_records},
    wordlists::load_from_file,
};

#[derive(Parser)]
#[command(
    name = "wordgrid",
    about = "Difficulty scoring for the 5x5 word grid game",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Word list file, one word per line (required by score and curve)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search every placement of a sequence's first letters and report how winnable it is
    Score {
        /// The drawn letters, e.g. "qwertyuiopasdfghjklzxcvbnm"
        #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
        letters: Option<String>,

        /// Text file holding the drawn letters
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Number of letters to place
        #[arg(short, long, default_value_t = DEFAULT_DEPTH)]
        depth: usize,

        /// Winning boards to print (0 disables capture)
        #[arg(short, long, default_value = "3")]
        boards: usize,

        /// Stop the search after this many seconds and report partial counts
        #[arg(short, long)]
        time_limit: Option<u64>,

        /// Hide the progress bar
        #[arg(short, long)]
        quiet: bool,
    },

    /// Count buildable words for every prefix of each sequence in an id,sequence CSV
    Curve {
        /// Input CSV with header id,sequence
        input: PathBuf,

        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw random sequences from the Scrabble tile bag
    Generate {
        /// Number of sequences
        #[arg(short = 'n', long, default_value = "100")]
        count: usize,

        /// Letters per sequence
        #[arg(short, long, default_value_t = DEFAULT_SEQUENCE_LENGTH)]
        length: usize,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output CSV (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Score {
            letters,
            file,
            depth,
            boards,
            time_limit,
            quiet,
        } => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            let sequence = read_sequence(letters.as_deref(), file.as_deref())?;
            run_score_command(&dictionary, &sequence, depth, boards, time_limit, quiet);
            Ok(())
        }
        Commands::Curve { input, output } => {
            let dictionary = load_dictionary(cli.wordlist.as_deref())?;
            run_curve_command(&dictionary, &input, output.as_deref())
        }
        Commands::Generate {
            count,
            length,
            seed,
            output,
        } => run_generate_command(count, length, seed, output.as_deref()),
    }
}

fn load_dictionary(path: Option<&Path>) -> Result<Dictionary> {
    let Some(path) = path else {
        bail!("a word list is required (-w <PATH>)");
    };
    let dictionary = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    if dictionary.is_empty() {
        log::warn!("Word list {} has no five-letter words", path.display());
    }
    Ok(dictionary)
}

fn read_sequence(letters: Option<&str>, file: Option<&Path>) -> Result<Sequence> {
    match (letters, file) {
        (Some(letters), _) => Sequence::parse(letters).context("Invalid letter sequence"),
        (None, Some(path)) => load_sequence(path)
            .with_context(|| format!("Failed to read sequence {}", path.display())),
        (None, None) => bail!("either --letters or --file is required"),
    }
}

fn run_score_command(
    dictionary: &Dictionary,
    sequence: &Sequence,
    depth: usize,
    boards: usize,
    time_limit: Option<u64>,
    quiet: bool,
) {
    let cancel = CancelFlag::new();
    if let Some(secs) = time_limit {
        let timer = cancel.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_secs(secs));
            timer.cancel();
        });
    }

    let config = ScoreConfig {
        depth,
        capture_boards: boards > 0,
        show_progress: !quiet,
    };
    let result = score_sequence(dictionary, sequence, &config, Some(cancel));
    print_score_result(&result, boards);
}

fn run_curve_command(dictionary: &Dictionary, input: &Path, output: Option<&Path>) -> Result<()> {
    let records =
        load_records(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let result = run_curve(dictionary, records);

    match output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_curves(&mut writer, &result.records, &result.curves)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_curve_summary(&result, &path.display().to_string());
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_curves(&mut stdout, &result.records, &result.curves)?;
        }
    }
    Ok(())
}

fn run_generate_command(
    count: usize,
    length: usize,
    seed: Option<u64>,
    output: Option<&Path>,
) -> Result<()> {
    let config = GenerateConfig {
        length,
        seed,
        ..GenerateConfig::new(count)
    };
    let records = generate_records(&config)?;

    match output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_records(&mut writer, &records)
                .and_then(|()| writer.flush())
                .with_context(|| format!("Failed to write {}", path.display()))?;
            print_generate_summary(&records, &path.display().to_string());
        }
        None => {
            let mut stdout = io::stdout().lock();
            write_records(&mut stdout, &records)?;
        }
    }
    Ok(())
}

fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
