use approx::relative_eq;
use outliers::{DetectionResult, Error, Method, OutlierDetector};

const DATA: &[f64] = &[10., 12., 15., 102., 108., 13., 14., 17.];

#[test]
fn iqr_detects_extreme_values() {
    let detector = OutlierDetector::default();
    let result = detector.detect_outliers(DATA).unwrap();

    assert_eq!(result.outliers(), [102., 108.]);
    assert_eq!(result.refined_data(), [10., 12., 15., 13., 14., 17.]);
}

#[test]
fn iqr_result_fields() {
    let detector = OutlierDetector::default();
    let result = detector.detect_outliers(DATA).unwrap();

    let res = match result {
        DetectionResult::Iqr(res) => res,
        DetectionResult::Zscore(_) => panic!("expected the IQR variant"),
    };

    assert_eq!(res.sorted_data, [10., 12., 13., 14., 15., 17., 102., 108.]);
    assert!(relative_eq!(res.q1, 12.75));
    assert!(relative_eq!(res.q3, 38.25));
    assert!(relative_eq!(res.iqr, 25.5));
    assert!(relative_eq!(res.lower_fence, -25.5));
    assert!(relative_eq!(res.upper_fence, 76.5));
}

#[test]
fn iqr_fence_sanity() {
    let detector = OutlierDetector::default();
    let result = detector.detect_outliers(DATA).unwrap();

    let res = match result {
        DetectionResult::Iqr(res) => res,
        DetectionResult::Zscore(_) => panic!("expected the IQR variant"),
    };

    assert!(res.iqr > 0.);
    assert!(res.lower_fence < res.q1);
    assert!(res.q1 <= res.q3);
    assert!(res.q3 < res.upper_fence);
}

#[test]
fn zscore_detects_extreme_values() {
    let detector = OutlierDetector::new(1.5, "zscore").unwrap();
    let result = detector.detect_outliers(DATA).unwrap();

    assert!(result.outliers().contains(&102.));
    assert!(result.outliers().contains(&108.));
    assert_eq!(result.refined_data(), [10., 12., 15., 13., 14., 17.]);
}

#[test]
fn zscore_result_fields() {
    let detector = OutlierDetector::new(1.5, "zscore").unwrap();
    let result = detector.detect_outliers(DATA).unwrap();

    let res = match result {
        DetectionResult::Zscore(res) => res,
        DetectionResult::Iqr(_) => panic!("expected the Z-score variant"),
    };

    assert!(relative_eq!(res.mean, 36.375));
    assert!(relative_eq!(res.std_dev, 1575.734375_f64.sqrt()));

    // One score per data point, aligned with the input
    assert_eq!(res.z_scores.len(), DATA.len());
    for (&x, &z) in DATA.iter().zip(res.z_scores.iter()) {
        assert!(relative_eq!(x, res.mean + z * res.std_dev, max_relative = 1e-12));
    }
}

// The two extreme points sit at |z| = 1.65 and 1.80 against this dataset, so a cutoff of
// 2 classifies nothing
#[test]
fn zscore_cutoff_above_every_score() {
    let detector = OutlierDetector::new(2., "zscore").unwrap();
    let result = detector.detect_outliers(DATA).unwrap();

    assert!(result.outliers().is_empty());
    assert_eq!(result.refined_data(), DATA);
}

#[test]
fn partition_covers_input() {
    for method in &[Method::Iqr, Method::Zscore] {
        let detector = OutlierDetector::default().method(*method);
        let result = detector.detect_outliers(DATA).unwrap();

        assert_eq!(
            result.outliers().len() + result.refined_data().len(),
            DATA.len()
        );

        // Every input value lands in exactly one of the two sequences, in input order
        let mut outliers = result.outliers().iter();
        let mut refined = result.refined_data().iter();
        let mut next_outlier = outliers.next();
        let mut next_refined = refined.next();
        for x in DATA {
            if next_outlier == Some(x) {
                next_outlier = outliers.next();
            } else if next_refined == Some(x) {
                next_refined = refined.next();
            } else {
                panic!("{} missing from the partition", x);
            }
        }
        assert_eq!(next_outlier, None);
        assert_eq!(next_refined, None);
    }
}

#[test]
fn threshold_monotonicity() {
    for method in &[Method::Iqr, Method::Zscore] {
        let mut last = usize::MAX;

        for &threshold in &[0.5, 1.5, 3.] {
            let detector = OutlierDetector::default()
                .method(*method)
                .threshold(threshold);
            let count = detector.detect_outliers(DATA).unwrap().outliers().len();

            assert!(count <= last);
            last = count;
        }
    }
}

#[test]
fn detection_is_deterministic() {
    for method in &[Method::Iqr, Method::Zscore] {
        let detector = OutlierDetector::default().method(*method);

        let first = detector.detect_outliers(DATA).unwrap();
        let second = detector.detect_outliers(DATA).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

#[test]
fn unrecognized_method_fails_construction() {
    match OutlierDetector::<f64>::new(1.5, "bogus") {
        Err(Error::InvalidConfiguration { method }) => assert_eq!(method, "bogus"),
        other => panic!("expected InvalidConfiguration, got {:?}", other),
    }
}

#[test]
fn empty_dataset_is_rejected() {
    let detector = OutlierDetector::<f64>::default();

    match detector.detect_outliers(&[]) {
        Err(Error::EmptyDataset) => {}
        other => panic!("expected EmptyDataset, got {:?}", other),
    }
}

// A zero threshold collapses the fences onto the quartiles; everything strictly outside
// the quartiles is an outlier
#[test]
fn zero_threshold() {
    let detector = OutlierDetector::default().threshold(0.);
    let result = detector.detect_outliers(DATA).unwrap();

    assert_eq!(result.outliers(), [10., 12., 102., 108.]);
    assert_eq!(result.refined_data(), [15., 13., 14., 17.]);
}

// The serialized form is a flat associative structure whose key set depends on the
// variant. serde_json iterates keys in sorted order.
#[test]
fn serialized_key_set() {
    let iqr = OutlierDetector::default().detect_outliers(DATA).unwrap();
    let value = serde_json::to_value(&iqr).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| &**k).collect();
    assert_eq!(
        keys,
        [
            "iqr",
            "lower_fence",
            "outliers",
            "q1",
            "q3",
            "refined_data",
            "sorted_data",
            "upper_fence"
        ]
    );

    let zscore = OutlierDetector::default()
        .method(Method::Zscore)
        .detect_outliers(DATA)
        .unwrap();
    let value = serde_json::to_value(&zscore).unwrap();
    let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| &**k).collect();
    assert_eq!(
        keys,
        ["mean", "outliers", "refined_data", "std_dev", "z_scores"]
    );
}

#[test]
fn singleton_dataset() {
    let detector = OutlierDetector::default();
    let result = detector.detect_outliers(&[42.]).unwrap();

    // One point is its own quartiles; it can never sit strictly beyond its own fences
    assert!(result.outliers().is_empty());
    assert_eq!(result.refined_data(), [42.]);
}
