use super::*;

#[test]
fn default_state_encodes_like_the_share_link() {
    assert_eq!(
        ShapeParams::default().to_query(),
        "mode=advanced&seed=380098792&points=5&variance=0.39&smooth=1.05&jitter=0"
    );
}

#[test]
fn radius_is_only_written_when_changed() {
    let p = ShapeParams {
        radius: 80.5,
        ..ShapeParams::default()
    };
    assert!(p.to_query().ends_with("&radius=80.5"));
}

#[test]
fn decodes_hash_with_mode_key() {
    let p = ShapeParams::from_query(
        "#mode=advanced&seed=12345&points=8&variance=0.5&smooth=0.8&jitter=0.1",
    )
    .unwrap();
    assert_eq!(p.seed, 12345);
    assert_eq!(p.point_count, 8);
    assert_eq!(p.variance, 0.5);
    assert_eq!(p.tension, 0.8);
    assert_eq!(p.jitter, 0.1);
    assert_eq!(p.radius, ShapeParams::DEFAULT_RADIUS);
}

#[test]
fn missing_keys_keep_defaults() {
    let p = ShapeParams::from_query("?points=7").unwrap();
    assert_eq!(
        p,
        ShapeParams {
            point_count: 7,
            ..ShapeParams::default()
        }
    );
    assert_eq!(ShapeParams::from_query("").unwrap(), ShapeParams::default());
}

#[test]
fn roundtrips_through_query() {
    let p = ShapeParams {
        seed: 0,
        point_count: 11,
        radius: 42.25,
        variance: 0.123456789,
        jitter: 0.7,
        tension: 1.9,
    };
    assert_eq!(ShapeParams::from_query(&p.to_query()).unwrap(), p);
}

#[test]
fn text_seed_is_hashed_and_escapes_decode() {
    let p = ShapeParams::from_query("seed=hello+world").unwrap();
    assert_eq!(p.seed, 879_195_369);
    let p = ShapeParams::from_query("seed=hello%20world").unwrap();
    assert_eq!(p.seed, 879_195_369);
    let p = ShapeParams::from_query("seed=%zz").unwrap();
    assert_eq!(p.seed, seed_from_string("%zz"));
}

#[test]
fn malformed_values_are_parse_errors() {
    for q in ["points=abc", "points=4.5", "points=-3", "variance=", "jitter=x"] {
        assert!(
            matches!(ShapeParams::from_query(q), Err(BlobError::Parse(_))),
            "{q}"
        );
    }
}

#[test]
fn decoded_params_are_validated() {
    assert!(matches!(
        ShapeParams::from_query("points=2"),
        Err(BlobError::Validation(_))
    ));
    assert!(matches!(
        ShapeParams::from_query("radius=NaN"),
        Err(BlobError::Validation(_))
    ));
}

#[test]
fn huge_point_count_is_rejected_before_generation() {
    for q in ["points=1e18", "points=65536", "points=18446744073709551615"] {
        assert!(
            matches!(ShapeParams::from_query(q), Err(BlobError::Validation(_))),
            "{q}"
        );
    }
    assert_eq!(
        ShapeParams::from_query("points=65535").unwrap().point_count,
        ShapeParams::MAX_POINT_COUNT
    );
}
