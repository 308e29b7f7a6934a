use anyhow::{bail, Context, Result};
use clap::Parser;
use confmat::{dataset, LabelMap, LabeledConfusionMatrix};
use std::{io, path::PathBuf};

#[derive(Parser)]
#[command(name = "confmat")]
#[command(about = "Print a labeled confusion matrix for binary predictions", long_about = None)]
#[command(version)]
struct Cli {
    /// Comma separated true labels (0 or 1)
    #[arg(long, value_delimiter = ',', requires = "y_pred", conflicts_with = "parquet")]
    y_true: Option<Vec<usize>>,

    /// Comma separated predicted labels (0 or 1)
    #[arg(long, value_delimiter = ',', requires = "y_true")]
    y_pred: Option<Vec<usize>>,

    /// Parquet file holding the label columns
    #[arg(long)]
    parquet: Option<PathBuf>,

    /// Column with the true labels
    #[arg(long, default_value = "y_true")]
    true_column: String,

    /// Column with the predicted labels
    #[arg(long, default_value = "y_pred")]
    pred_column: String,

    /// Row names for classes 0 and 1, e.g. "Ham,Spam"
    #[arg(long, value_delimiter = ',')]
    row_labels: Option<Vec<String>>,

    /// Column names for classes 0 and 1
    #[arg(long, value_delimiter = ',')]
    column_labels: Option<Vec<String>>,

    /// Print the table as JSON instead of a text grid
    #[arg(long)]
    json: bool,

    /// Also print accuracy, precision, recall and F1
    #[arg(long, conflicts_with = "json")]
    scores: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let (y_true, y_pred) = match (cli.y_true, cli.y_pred, &cli.parquet) {
        (Some(y_true), Some(y_pred), _) => (y_true, y_pred),
        (_, _, Some(path)) => {
            let labels = dataset::load_labels(path, &cli.true_column, &cli.pred_column)
                .with_context(|| format!("failed to load labels from {}", path.display()))?;
            (labels.y_true, labels.y_pred)
        }
        _ => bail!("provide either --y-true/--y-pred or --parquet"),
    };

    let row_labels = cli
        .row_labels
        .as_deref()
        .map(|names| label_map(names, "--row-labels"))
        .transpose()?;
    let column_labels = cli
        .column_labels
        .as_deref()
        .map(|names| label_map(names, "--column-labels"))
        .transpose()?;

    let table = if cli.json {
        let table = confmat::nice_conf_mat_to(
            &mut io::sink(),
            &y_true,
            &y_pred,
            row_labels.as_ref(),
            column_labels.as_ref(),
        )?;
        println!("{}", table.to_json()?);
        table
    } else {
        confmat::nice_conf_mat(&y_true, &y_pred, row_labels.as_ref(), column_labels.as_ref())?
    };

    log::info!("{} samples", table.matrix().total());

    if cli.scores {
        print_scores(&table);
    }

    Ok(())
}

fn label_map(names: &[String], flag: &str) -> Result<LabelMap> {
    if names.len() != 2 {
        bail!("{flag} takes exactly two names, got {}", names.len());
    }
    Ok(names.iter().map(String::as_str).enumerate().collect())
}

fn print_scores(table: &LabeledConfusionMatrix) {
    let cm = table.matrix();
    let fmt = |score: Option<f64>| score.map_or_else(|| "n/a".to_string(), |s| format!("{s:.4}"));

    println!("accuracy:  {}", fmt(cm.accuracy()));
    println!("precision: {}", fmt(cm.precision()));
    println!("recall:    {}", fmt(cm.recall()));
    println!("f1:        {}", fmt(cm.f1_score()));
}
