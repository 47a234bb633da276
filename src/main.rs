use clap::Parser;
use log::{error, info};
use std::fs;
use std::path::PathBuf;
use tweet_cloud::{
    build_pipeline, default_datasets, write_frequencies_csv_file, Dataset, Error, Language,
    StopWords, WordCloud, DEFAULT_FONT_PATH, DEFAULT_KOREAN_DICTIONARY_URI,
    DEFAULT_OUTPUT_DIRECTORY, DEFAULT_PIPELINE_CONFIG, DEFAULT_WORD_CLOUD_CONFIG,
};

/// Word clouds of the most frequent words in English and Korean posts.
#[derive(Debug, Parser)]
#[command(name = "tweet-cloud-cli", version)]
struct Args {
    /// Dataset to analyze, as TITLE=PATH. Repeatable. Defaults to the bundled datasets.
    #[arg(long = "dataset", value_name = "TITLE=PATH")]
    datasets: Vec<Dataset>,

    /// Font covering both Latin and Hangul glyphs.
    #[arg(long, default_value = DEFAULT_FONT_PATH)]
    font: PathBuf,

    /// Korean dictionary directory or lindera URI.
    #[arg(long = "ko-dic", default_value = DEFAULT_KOREAN_DICTIONARY_URI)]
    ko_dic: String,

    #[arg(long, default_value = DEFAULT_OUTPUT_DIRECTORY)]
    output_dir: PathBuf,

    /// Number of most frequent tokens to print per dataset.
    #[arg(long)]
    top_n: Option<usize>,

    /// Fixes word placement and colors.
    #[arg(long)]
    seed: Option<u64>,

    /// Also write the full frequency table as CSV.
    #[arg(long)]
    csv: bool,

    #[arg(long)]
    no_image: bool,

    /// Comma-separated language codes, e.g. `en,ko`.
    #[arg(long, value_delimiter = ',')]
    languages: Option<Vec<Language>>,
}

fn main() {
    env_logger::init();

    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Error> {
    let languages = args
        .languages
        .unwrap_or_else(|| DEFAULT_PIPELINE_CONFIG.languages.to_vec());
    let top_n = args.top_n.unwrap_or(DEFAULT_PIPELINE_CONFIG.top_n);

    let english_stop_words = StopWords::for_language(Language::English);
    let korean_stop_words = StopWords::for_language(Language::Korean);
    let pipeline = build_pipeline(
        &english_stop_words,
        &korean_stop_words,
        &args.ko_dic,
        &languages,
    )?;

    let mut word_cloud_config = DEFAULT_WORD_CLOUD_CONFIG;
    word_cloud_config.random_seed = args.seed;

    // Load the font up front so a bad path fails before any analysis
    let word_cloud = if args.no_image {
        None
    } else {
        Some(WordCloud::from_font_path(&word_cloud_config, &args.font)?)
    };

    if word_cloud.is_some() || args.csv {
        fs::create_dir_all(&args.output_dir)?;
    }

    let datasets = if args.datasets.is_empty() {
        default_datasets()
    } else {
        args.datasets
    };

    for dataset in datasets {
        let dataset = dataset.with_languages(&languages);
        let report = pipeline.analyze_dataset(&dataset)?;

        info!(
            "\"{}\": {} tokens, {} distinct",
            report.title,
            report.total_tokens(),
            report.frequencies.len()
        );

        println!("{}", report.title);
        for (token, count) in report.top_tokens(top_n) {
            println!("{}: {}", token, count);
        }

        let stem = dataset.output_stem();

        if let Some(word_cloud) = &word_cloud {
            let path = args.output_dir.join(format!("{}.png", stem));
            word_cloud.render_to_file(&report.frequencies, &report.title, &path)?;
        }

        if args.csv {
            let path = args.output_dir.join(format!("{}.csv", stem));
            write_frequencies_csv_file(&path, &report.frequencies)?;
            info!("Wrote frequencies to {}", path.display());
        }
    }

    Ok(())
}
