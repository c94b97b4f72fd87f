use anyhow::{bail, Context, Result};
use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use std::{env, fs, path::PathBuf, process};

use pitch_accent_dictionary::{
    dictionary::writer::DictionaryOut,
    pitch_accent::{record_loader::load_pitch_accent_entries, sort::sort_pitch_accent_entries},
    utility::str::split_lines,
};

struct Args {
    input_path: PathBuf,
    output_path: PathBuf,
}

fn get_args() -> Result<Args> {
    let program = env::args()
        .next()
        .and_then(|arg0| {
            PathBuf::from(arg0)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
        })
        .unwrap_or_else(|| "pitch-accent-dictionary".to_owned());
    let args: Vec<String> = env::args().skip(1).collect();

    let mut opts = getopts::Options::new();
    opts.optflag("h", "help", "print this help message");

    let matches = match opts.parse(&args) {
        Ok(m) => m,
        Err(f) => bail!(f),
    };

    let usage = || {
        let brief = format!(
            "Usage:\n  {} <pitch-accent-input-file> <output-directory>",
            program
        );
        print!("{}", opts.usage(&brief));
    };

    if matches.opt_present("h") {
        usage();
        process::exit(0);
    }

    match (matches.free.get(0), matches.free.get(1)) {
        (Some(input_path), Some(output_path)) => Ok(Args {
            input_path: PathBuf::from(input_path),
            output_path: PathBuf::from(output_path),
        }),
        _ => {
            usage();
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let args = get_args()?;

    let content = fs::read_to_string(&args.input_path)
        .with_context(|| format!("Failed to read {}", args.input_path.display()))?;

    println!("Processing {}...", args.input_path.display());

    let mut entries = {
        let lines = split_lines(&content);
        let pb = create_progress_bar(lines.len() as u64);
        load_pitch_accent_entries(lines.into_iter().progress_with(pb))?
    };
    sort_pitch_accent_entries(&mut entries);

    println!("Finished. ({} entries)", entries.len());

    println!("Writing dictionary...");

    let out = DictionaryOut::init(&args.output_path)?;
    let bank_count = out.save_term_meta_banks(&entries)?;
    out.save_tag_bank()?;
    out.save_index()?;

    println!(
        "Finished. ({} term meta banks in {})",
        bank_count,
        out.root().display()
    );

    Ok(())
}

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::with_template(
            "{percent:>3}% [{wide_bar:.cyan/blue}] {pos}/{len} [{elapsed_precise} < {eta_precise}]",
        )
        .unwrap()
        .progress_chars("#-"),
    );
    pb
}
