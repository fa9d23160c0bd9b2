// Versecraft command-line front end
// Reads lyrics from a file or stdin and prints analyses as JSON

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

use versecraft_lib::commands::{self, CommandError, SettingsOverrides};
use versecraft_lib::pipeline::TraceWriter;

#[derive(Parser, Debug)]
#[command(name = "versecraft")]
#[command(about = "Score lyric flow, lyric quality and hit potential", version)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Syllable flow, beat alignment and singability
    Flow(AnalysisArgs),
    /// Emotion, originality, imagery and coherence
    Lyrics(AnalysisArgs),
    /// Hook, repetition and energy scoring with the viral moment
    Hit(AnalysisArgs),
    /// Every analysis in one report
    Report {
        #[command(flatten)]
        analysis: AnalysisArgs,

        /// Append the stage trace to this JSONL file
        #[arg(long)]
        trace: Option<PathBuf>,
    },
    /// Near rhymes for a word among candidates
    Rhymes {
        word: String,
        #[arg(required = true)]
        candidates: Vec<String>,
    },
    /// List supported genres
    Genres,
    /// Recommend genres for a song idea
    Recommend {
        prompt: String,
        /// Genres already chosen, left out of the result
        #[arg(long = "genre")]
        genres: Vec<String>,
    },
    /// Wrap a lyric prompt with genre guidance
    Enhance {
        prompt: String,
        /// Genre whose template is applied; only the first is used
        #[arg(long = "genre", required = true)]
        genres: Vec<String>,
    },
}

#[derive(Args, Debug)]
struct AnalysisArgs {
    /// Lyrics file, or - for stdin
    input: String,

    /// Song tempo; defaults to the genres' ideal tempo
    #[arg(long)]
    bpm: Option<f64>,

    /// Estimated song length in seconds
    #[arg(long)]
    duration: Option<f64>,

    /// Selected genre, repeatable
    #[arg(long = "genre")]
    genres: Vec<String>,

    /// JSON settings file; flags override its values
    #[arg(long)]
    settings: Option<PathBuf>,
}

impl AnalysisArgs {
    fn load(&self) -> Result<(String, versecraft_lib::AnalysisSettings)> {
        let lyrics = read_lyrics(&self.input)?;
        let settings = commands::resolve_settings(
            self.settings.as_deref(),
            SettingsOverrides {
                bpm: self.bpm,
                duration_seconds: self.duration,
                genres: self.genres.clone(),
            },
        )
        .map_err(command_error)?;
        Ok((lyrics, settings))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match cli.command {
        Command::Flow(args) => {
            let (lyrics, settings) = args.load()?;
            print_json(&commands::flow_command(&lyrics, &settings))
        }
        Command::Lyrics(args) => {
            let (lyrics, _) = args.load()?;
            print_json(&commands::lyrics_command(&lyrics))
        }
        Command::Hit(args) => {
            let (lyrics, settings) = args.load()?;
            print_json(&commands::hit_command(&lyrics, &settings))
        }
        Command::Report { analysis, trace } => {
            let (lyrics, settings) = analysis.load()?;
            let report = commands::report_command(&lyrics, &settings);
            if let Some(path) = trace {
                let writer = TraceWriter::new(path);
                writer
                    .write_batch(&report.trace)
                    .with_context(|| format!("Failed to write trace to {}", writer.path().display()))?;
            }
            print_json(&report)
        }
        Command::Rhymes { word, candidates } => {
            print_json(&commands::rhymes_command(&word, &candidates))
        }
        Command::Genres => print_json(&commands::genres_command()),
        Command::Recommend { prompt, genres } => {
            print_json(&commands::recommend_command(&prompt, &genres))
        }
        Command::Enhance { prompt, genres } => {
            let enhanced = commands::enhance_command(&prompt, &genres).map_err(command_error)?;
            println!("{}", enhanced);
            Ok(())
        }
    }
}

fn read_lyrics(input: &str) -> Result<String> {
    if input == "-" {
        let mut lyrics = String::new();
        std::io::stdin()
            .read_to_string(&mut lyrics)
            .context("Failed to read lyrics from stdin")?;
        return Ok(lyrics);
    }

    let path = Path::new(input);
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn command_error(error: CommandError) -> anyhow::Error {
    anyhow!(error.message().to_string())
}
