use multinumeric::*;
use rand::Rng;

#[test]
fn partition_count() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let min: f64 = rng.gen_range(-1_000_000.0..1_000_000.0);
        let max = min + rng.gen_range(0.001..1_000_000.0);
        let buckets = rng.gen_range(1..=100);

        let bucketizer = Bucketizer::new(min, max, buckets).unwrap();
        assert_eq!(bucketizer.ranges().len(), buckets);
        assert_eq!(bucketizer.midpoints().len(), buckets);
        assert_eq!(bucketizer.labels().len(), buckets);
    }
}

#[test]
fn ordering() {
    let mut rng = rand::thread_rng();
    for _ in 0..1000 {
        let buckets = rng.gen_range(1..=50);
        let min: f64 = rng.gen_range(-1_000_000.0..1_000_000.0);
        // buckets at least two wide keep the midpoint inside the range
        let max = min + rng.gen_range((2 * buckets) as f64..1_000_000.0);

        let bucketizer = Bucketizer::new(min, max, buckets).unwrap();
        let ranges = bucketizer.ranges();
        let midpoints = bucketizer.midpoints();

        for i in 1..buckets {
            assert!(ranges[i].0 >= ranges[i - 1].0);
            assert!(ranges[i].1 >= ranges[i - 1].1);
            assert!(midpoints[i] >= midpoints[i - 1]);
        }

        for (midpoint, (low, high)) in midpoints.iter().zip(ranges.iter()) {
            assert!(*midpoint >= low - EPSILON, "{low} <= {midpoint}");
            assert!(*midpoint <= high + EPSILON, "{midpoint} <= {high}");
        }
    }
}

#[test]
fn label_round_trip() {
    let formatter = LargeNumber::default();
    let labels = bucket_range_labels(0.0, 999.0, 10).unwrap();

    assert_eq!(labels[0], "0-99");
    assert_eq!(labels[9], "900-999");

    for label in &labels {
        let tokens: Vec<&str> = label.split('-').collect();

        for mode in [ParseMode::Strict, ParseMode::Legacy] {
            let (low, high) = label_to_range(label, mode).unwrap();
            assert_eq!(formatter.format(low), tokens[0]);
            assert_eq!(formatter.format(high), tokens[1]);
        }
    }
}

#[test]
fn negative_domain_labels() {
    let labels = bucket_range_labels(-100.0, 100.0, 20).unwrap();
    assert_eq!(labels[0], "-100--91");

    assert_eq!(
        label_to_range(&labels[0], ParseMode::Strict),
        Ok((-100.0, -91.0))
    );
    assert_eq!(
        label_to_midpoint(&labels[0], ParseMode::Strict),
        Ok(-95.5)
    );

    // splitting on every hyphen loses the lower bound entirely
    let (low, high) = label_to_range(&labels[0], ParseMode::Legacy).unwrap();
    assert!(low.is_nan());
    assert_eq!(high, 100.0);
    assert!(label_to_midpoint(&labels[0], ParseMode::Legacy)
        .unwrap()
        .is_nan());

    // every label in a signed domain parses in strict mode
    for label in &labels {
        let (low, high) = label_to_range(label, ParseMode::Strict).unwrap();
        assert!(low <= high, "{label}");
    }
}

#[test]
fn scenario_width_five() {
    let domain = Domain::new(0.0, 99.0).unwrap();
    assert_eq!(bucket_size(&domain, 20), Ok(5.0));

    assert_eq!(midpoints(0.0, 99.0, 20).unwrap()[0], 2.5);
    assert_eq!(bucket_ranges(0.0, 99.0, 20).unwrap()[0], (0.0, 4.0));
    assert_eq!(bucket_range_labels(0.0, 99.0, 20).unwrap()[0], "0-4");
}

#[test]
fn deterministic() {
    let mut rng = rand::thread_rng();
    for _ in 0..100 {
        let min: f64 = rng.gen_range(-1000.0..1000.0);
        let max = min + rng.gen_range(0.1..1000.0);

        let a = midpoints(min, max, DEFAULT_BUCKETS).unwrap();
        let b = midpoints(min, max, DEFAULT_BUCKETS).unwrap();

        let a: Vec<u64> = a.iter().map(|v| v.to_bits()).collect();
        let b: Vec<u64> = b.iter().map(|v| v.to_bits()).collect();
        assert_eq!(a, b);
    }
}

#[test]
fn scenario_parse() {
    for mode in [ParseMode::Strict, ParseMode::Legacy] {
        assert_eq!(label_to_range("0-4", mode), Ok((0.0, 4.0)));
        assert_eq!(label_to_midpoint("0-4", mode), Ok(2.0));
    }
}

#[test]
fn unparsable_labels() {
    assert_eq!(
        label_to_range("NaN-NaN", ParseMode::Strict),
        Err(Error::UnparsableLabel("NaN-NaN".to_string()))
    );
    assert!(label_to_midpoint("garbage", ParseMode::Strict).is_err());
}

#[test]
fn clamped_upper_edge_labels() {
    let max = 10.123456789;
    let literal = Bucketizer::new(0.0, max, 4).unwrap();
    let clamped = Bucketizer::builder(0.0, max)
        .buckets(4)
        .upper_edge(UpperEdge::ClampToMax)
        .build()
        .unwrap();

    // the clamped edge keeps every decimal of the max
    assert_eq!(literal.ranges()[3], (8.342593, 10.123457));
    assert_eq!(clamped.ranges()[3], (8.342593, max));

    let labels = clamped.labels();
    assert_eq!(labels, vec!["0-1.8", "2.8-4.6", "5.6-7.3", "8.3-10"]);
    assert_eq!(labels, literal.labels());

    for label in &labels {
        let (low, high) = label_to_range(label, ParseMode::Strict).unwrap();
        assert!(low < high, "{label}");
    }
    assert_eq!(
        label_to_range(&labels[3], ParseMode::Strict),
        Ok((8.3, 10.0))
    );
}
