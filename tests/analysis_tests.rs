mod common;

use common::{spread, ShotBuilder};
use launchlab::analysis::{
    analyze, club_rows, dispersion_by_club, dispersion_points, gapping, shape_breakdown, GapFlag,
    ShotShape,
};
use launchlab::bag::{classify, compare_clubs, ClubCategory};
use launchlab::config::{AnalysisConfig, GappingParams, ShapeParams};
use launchlab::filter::FilterCriteria;
use launchlab::Shot;
use rstest::rstest;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// --- BAG ORDER ---

#[test]
fn test_bag_order() {
    let mut clubs = vec![
        "SW", "7 Iron", "Putter", "60°", "Driver", "PW", "5 Hybrid", "3 Wood", "4i", "GW", "5 Wood",
    ];
    clubs.sort_by(|a, b| compare_clubs(a, b));
    assert_eq!(
        clubs,
        vec!["Driver", "3 Wood", "5 Wood", "5 Hybrid", "4i", "7 Iron", "PW", "GW", "SW", "60°", "Putter"]
    );
}

#[rstest]
#[case("Driver", ClubCategory::Driver)]
#[case("3W", ClubCategory::Wood)]
#[case("Hybrid 4", ClubCategory::Hybrid)]
#[case("7 Iron (Blue)", ClubCategory::Iron)]
#[case("9", ClubCategory::Iron)]
#[case("Gap Wedge", ClubCategory::Wedge)]
#[case("54", ClubCategory::Wedge)]
#[case("S", ClubCategory::Wedge)]
#[case("Mizuno's Putter", ClubCategory::Unknown)]
fn test_classify(#[case] label: &str, #[case] category: ClubCategory) {
    assert_eq!(classify(label).category, category);
}

#[test]
fn test_unknown_clubs_order_deterministically() {
    let a = classify("Chipper").rank;
    assert_eq!(a, classify("chipper").rank);
    assert!(a >= 1000);
}

// --- CLUB ROWS ---

#[test]
fn test_club_rows_stats() {
    let shots = vec![
        ShotBuilder::new("7 Iron").carry(150.0).spin(6000.0).build(),
        ShotBuilder::new("7 Iron").carry(160.0).build(),
        ShotBuilder::new("7 Iron").carry(170.0).build(),
        ShotBuilder::new("7 Iron").build(),
        ShotBuilder::new("Driver").carry(240.0).build(),
    ];
    let rows = club_rows(&shots);

    assert_eq!(rows[0].club, "Driver");
    let iron = &rows[1];
    assert_eq!(iron.count, 4);
    assert_eq!(iron.avg_carry, Some(160.0));
    assert!(approx(iron.sd_carry.unwrap(), (200.0f64 / 3.0).sqrt()));
    assert_eq!(iron.carry_median, Some(160.0));
    assert!(approx(iron.carry_p10.unwrap(), 152.0));
    assert_eq!(iron.avg_spin, Some(6000.0));
    assert_eq!(iron.sd_spin, Some(0.0));
    assert_eq!(iron.avg_total, None);
}

// --- GAPPING ---

#[rstest]
#[case("3 Wood", 210.0, GapFlag::Tight)]
#[case("7 Iron", 150.0, GapFlag::Wide)]
#[case("5 Wood", 200.0, GapFlag::Ok)]
fn test_gap_flag(#[case] second: &str, #[case] carry: f64, #[case] flag: GapFlag) {
    let mut shots = spread("Driver", 220.0, 3);
    shots.extend(spread(second, carry, 3));
    let gaps = gapping(&club_rows(&shots), &GappingParams::default());

    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].longer, "Driver");
    assert!(approx(gaps[0].gap, 220.0 - carry));
    assert_eq!(gaps[0].flag, flag);
}

#[test]
fn test_gapping_skips_clubs_without_carry() {
    let shots = vec![
        ShotBuilder::new("Driver").carry(240.0).build(),
        ShotBuilder::new("3 Wood").build(),
        ShotBuilder::new("5 Wood").carry(215.0).build(),
    ];
    let gaps = gapping(&club_rows(&shots), &GappingParams::default());
    assert_eq!(gaps.len(), 1);
    assert_eq!(gaps[0].shorter, "5 Wood");
}

#[test]
fn test_gapping_ignores_club_filter() {
    let mut shots = spread("Driver", 220.0, 3);
    shots.extend(spread("3 Wood", 210.0, 3));
    let criteria = FilterCriteria {
        clubs: ["Driver".to_string()].into_iter().collect(),
        ..Default::default()
    };
    let analysis = analyze(&shots, &criteria, &AnalysisConfig::default());

    assert_eq!(analysis.clubs.len(), 1);
    assert_eq!(analysis.shots.len(), 3);
    assert_eq!(analysis.gaps.len(), 1);
    assert_eq!(analysis.gaps[0].flag, GapFlag::Tight);
}

// --- SHAPE ---

#[test]
fn test_shape_buckets() {
    let shots = vec![
        ShotBuilder::new("7 Iron").direction(-3.0).build(),
        ShotBuilder::new("7 Iron").direction(-2.0).build(),
        ShotBuilder::new("7 Iron").direction(0.5).build(),
        ShotBuilder::new("7 Iron").spin_axis(6.0).build(),
        ShotBuilder::new("7 Iron").build(),
    ];
    let b = shape_breakdown(&shots, &ShapeParams::default());

    assert_eq!(b.count(ShotShape::Draw), 1);
    assert_eq!(b.count(ShotShape::Straight), 2);
    assert_eq!(b.count(ShotShape::Fade), 1);
    assert_eq!(b.unclassified, 1);
    assert!(approx(b.percent(ShotShape::Straight), 40.0));
}

#[test]
fn test_shape_of_empty_pool() {
    let b = shape_breakdown(&[], &ShapeParams::default());
    assert_eq!(b.total, 0);
    assert_eq!(b.percent(ShotShape::Fade), 0.0);
}

// --- DISPERSION ---

#[test]
fn test_dispersion_measured_and_derived() {
    let shots = vec![
        ShotBuilder::new("7 Iron").carry(160.0).lateral(-4.0).build(),
        ShotBuilder::new("7 Iron").carry(150.0).direction(30.0).build(),
        ShotBuilder::new("7 Iron").carry(155.0).build(),
    ];
    let points = dispersion_points(&shots);

    assert_eq!(points.len(), 2);
    assert_eq!(points[0].lateral, -4.0);
    assert!(!points[0].derived);
    assert!(approx(points[1].lateral, 75.0));
    assert!(points[1].derived);

    let summary = dispersion_by_club(&shots);
    assert_eq!(summary.len(), 1);
    assert_eq!(summary[0].points, 2);
    assert!(approx(summary[0].mean_lateral, 35.5));
}

#[test]
fn test_dispersion_derives_from_launch_direction_over_deviation_angle() {
    let mut shot = ShotBuilder::new("7 Iron").carry(150.0).direction(2.0).build();
    shot.carry_deviation_angle = Some(6.0);
    let points = dispersion_points(&[shot]);

    assert_eq!(points.len(), 1);
    assert!(points[0].derived);
    assert!((points[0].lateral - 5.235).abs() < 1e-3);
}

#[test]
fn test_analysis_is_repeatable() {
    let shots: Vec<Shot> = launchlab::sample::sample_shots();
    let criteria = FilterCriteria {
        exclude_outliers: true,
        ..Default::default()
    };
    let config = AnalysisConfig::default();
    let a = analyze(&shots, &criteria, &config);
    let b = analyze(&shots, &criteria, &config);
    assert_eq!(a.clubs, b.clubs);
    assert_eq!(a.gaps, b.gaps);
    assert_eq!(a.shape, b.shape);
}
