use track_summary::config::{get_config, set_config, Config};
use track_summary::error::Result;
use track_summary::raw::RawDocument;
use track_summary::summarizer::build_track_info;
use track_summary::utils::json::{
    load_from_file, save_to_file, save_to_file_pretty,
};

use clap::Parser;

use std::path::Path;

#[derive(Parser)]
struct ArgParser {
    /// Parsed track document (JSON)
    input: String,
    /// Display name of the document; defaults to the input file name
    #[arg(short, long)]
    name: Option<String>,
    /// File name to save result; prints to stdout when absent
    #[arg(short, long)]
    output: Option<String>,
    /// Pretty print result
    #[arg(short, long)]
    pretty: bool,
    #[command(flatten)]
    config: Config,
}

fn display_name(args: &ArgParser) -> String {
    match &args.name {
        Some(name) => name.clone(),
        None => Path::new(&args.input)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| args.input.clone()),
    }
}

fn main() -> Result<()> {
    let args = ArgParser::parse();
    set_config(args.config.clone())?;

    let document: RawDocument = load_from_file(&args.input)?;
    let mut errors = Vec::new();
    let result =
        build_track_info(&display_name(&args), &document, get_config(), &mut errors);
    for error in &errors {
        eprintln!("{}", error);
    }
    let info = result?;

    if get_config().verbose {
        for track in &info.tracks {
            eprintln!(
                "track {:?}: {} segments, {} runs, {} points",
                track.name,
                track.segments.len(),
                track
                    .segments
                    .iter()
                    .map(|s| s.runs.len())
                    .sum::<usize>(),
                track
                    .segments
                    .iter()
                    .flat_map(|s| s.runs.iter().map(|r| r.points.len()))
                    .sum::<usize>(),
            );
        }
    }

    match &args.output {
        Some(path) => {
            if args.pretty {
                save_to_file_pretty(&info, path)
            } else {
                save_to_file(&info, path)
            }
        }
        None => {
            println!("{}", serde_json::to_string_pretty(&info)?);
            Ok(())
        }
    }
}
