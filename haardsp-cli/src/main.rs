use anyhow::{Context, Result};
use clap::Parser;
use haardsp::HaarPlan;
use haardsp_cli::{format_listing, read_wav, resolve_level, REFERENCE_SIGNAL};
use std::path::PathBuf;

/// Run an in-place Haar DWT and its inverse, printing both results.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Samples to transform; the count must be a power of two
    #[arg(allow_negative_numbers = true)]
    samples: Vec<f32>,

    /// Read samples from the first channel of a WAV file instead
    #[arg(long, conflicts_with = "samples")]
    input: Option<PathBuf>,

    /// DWT level; defaults to the maximum the length supports
    #[arg(long)]
    level: Option<u32>,

    /// Clamp an out-of-range level instead of failing
    #[arg(long)]
    clamp: bool,

    /// Log every transform level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::builder()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Warn
        })
        .init();

    let mut signal = match (&args.input, args.samples.is_empty()) {
        (Some(path), _) => read_wav(path)?,
        (None, true) => REFERENCE_SIGNAL.to_vec(),
        (None, false) => args.samples.clone(),
    };

    let plan = HaarPlan::new(signal.len())
        .with_context(|| format!("cannot transform {} samples", signal.len()))?;
    println!("Maximum level = {}\n", plan.max_level());
    let level = resolve_level(&plan, args.level, args.clamp)?;

    if signal.len() <= haardsp::STACK_MAX_LEN {
        plan.forward(&mut signal, level)?;
        println!("This is level {} DWT computation.\n", level);
        print!("{}", format_listing(&signal));
        plan.inverse(&mut signal, level)?;
    } else {
        let mut mask = vec![0u32; plan.mask_words()];
        plan.forward_with_mask(&mut signal, level, &mut mask)?;
        println!("This is level {} DWT computation.\n", level);
        print!("{}", format_listing(&signal));
        plan.inverse_with_mask(&mut signal, level, &mut mask)?;
    }
    println!("This is level {} IDWT computation.\n", level);
    print!("{}", format_listing(&signal));
    Ok(())
}
