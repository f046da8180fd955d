use rusty_id3::data::dataset::{Dataset, SplitRatios};
use rusty_id3::data::encoding::FeatureEncoder;
use rusty_id3::data::loader::{load_path, CsvSchema};
use rusty_id3::metrics::confusion::ClassificationMetrics;
use rusty_id3::trees::params::TreeParams;
use rusty_id3::DecisionTreeClassifier;
use std::env;
use std::error::Error;

const USAGE: &str = "usage: id3 <csv> <target-column> <positive-label> [max-iterations] [seed]";

fn report(
    name: &str,
    classifier: &DecisionTreeClassifier,
    test_dataset: &Dataset,
) -> Result<(), Box<dyn Error>> {
    let predictions = classifier.predict(test_dataset)?;
    let targets = test_dataset.targets();
    println!(
        "{}: error {:.4}, precision {:.4}, recall {:.4}, leaves {}",
        name,
        classifier.error_rate(test_dataset)?,
        classifier.precision(&targets, &predictions)?,
        classifier.recall(&targets, &predictions)?,
        classifier.root().map_or(0, |root| root.leaf_count())
    );
    Ok(())
}

fn run(args: &[String]) -> Result<(), Box<dyn Error>> {
    let (path, target_column, positive_label) = match args {
        [path, column, label, ..] => (path, column.parse::<usize>()?, label),
        _ => return Err(USAGE.into()),
    };
    let max_iterations = match args.get(3) {
        Some(value) => TreeParams::parse_max_iterations(value)?,
        None => None,
    };
    let seed = args.get(4).map(|value| value.parse::<u64>()).transpose()?;

    let schema = CsvSchema::new(target_column, positive_label);
    let mut encoder = FeatureEncoder::new();
    let dataset = load_path(path, &schema, &mut encoder)?;
    println!("Loaded {} instances", dataset.len());

    let (train_dataset, validation_dataset, test_dataset) =
        dataset.train_validation_test_split(SplitRatios::new(0.6, 0.2)?, seed);

    let mut params = TreeParams::new();
    params.set_max_iterations(max_iterations);
    params.set_prune(false);
    let mut classifier = DecisionTreeClassifier::with_params(params);
    println!("{}", classifier.fit(&train_dataset, None)?);
    report("unpruned", &classifier, &test_dataset)?;

    classifier.prune(&validation_dataset)?;
    report("pruned", &classifier, &test_dataset)?;

    for pathway in classifier.paths()? {
        println!("{}", pathway);
    }
    Ok(())
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(err) = run(&args) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}
