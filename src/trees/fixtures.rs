//! Small datasets shared by the tree tests.
use crate::data::dataset::{Dataset, Feature, Instance};

pub(crate) fn candy() -> Dataset {
    Dataset::new(vec![
        Instance::from_pairs([("salty", 0), ("sweet", 0)], false), // bland
        Instance::from_pairs([("salty", 1), ("sweet", 0)], false), // disgusting
        Instance::from_pairs([("salty", 1), ("sweet", 1)], true),  // savory
        Instance::from_pairs([("salty", 0), ("sweet", 1)], true),  // sugary
    ])
}

/// The classic play-tennis table.
///
/// outlook: rain 0, overcast 1, sunny 2; temp: cool 0, mild 1, hot 2;
/// humidity: normal 0, high 1; wind: weak 0, strong 1.
pub(crate) fn tennis() -> Dataset {
    let rows: [([Feature; 4], bool); 14] = [
        ([2, 2, 1, 0], false),
        ([2, 2, 1, 1], false),
        ([1, 2, 1, 0], true),
        ([0, 1, 1, 0], true),
        ([0, 0, 0, 0], true),
        ([0, 0, 0, 1], false),
        ([1, 0, 0, 1], true),
        ([2, 1, 1, 0], false),
        ([2, 0, 0, 0], true),
        ([0, 1, 0, 0], true),
        ([2, 1, 0, 1], true),
        ([1, 1, 1, 1], true),
        ([1, 2, 0, 0], true),
        ([0, 1, 1, 1], false),
    ];
    Dataset::new(
        rows.iter()
            .map(|([outlook, temp, humidity, wind], play)| {
                Instance::from_pairs(
                    [
                        ("outlook", *outlook),
                        ("temp", *temp),
                        ("humidity", *humidity),
                        ("wind", *wind),
                    ],
                    *play,
                )
            })
            .collect(),
    )
}

/// `signal` decides the label; two mislabeled rows make `noise` look useful
/// under `signal = 1`.
pub(crate) fn noisy_training() -> Dataset {
    let rows: [(Feature, Feature, bool); 10] = [
        (0, 0, false),
        (0, 0, false),
        (0, 0, false),
        (0, 1, false),
        (0, 1, false),
        (1, 0, true),
        (1, 0, true),
        (1, 0, true),
        (1, 1, false),
        (1, 1, false),
    ];
    signal_noise(&rows)
}

pub(crate) fn clean_validation() -> Dataset {
    signal_noise(&[
        (1, 1, true),
        (1, 1, true),
        (1, 0, true),
        (0, 0, false),
        (0, 1, false),
    ])
}

fn signal_noise(rows: &[(Feature, Feature, bool)]) -> Dataset {
    Dataset::new(
        rows.iter()
            .map(|&(signal, noise, target)| {
                Instance::from_pairs([("signal", signal), ("noise", noise)], target)
            })
            .collect(),
    )
}
