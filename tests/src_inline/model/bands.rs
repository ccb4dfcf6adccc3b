use super::*;

#[test]
fn test_band_boundaries_are_inclusive() {
    assert_eq!(quality_band(69).label, "Medium");
    assert_eq!(quality_band(70).label, "High");
    assert_eq!(quality_band(39).label, "Low");
    assert_eq!(quality_band(40).label, "Medium");
    assert_eq!(quality_band(100).label, "High");
    assert_eq!(quality_band(0).label, "Low");
}

#[test]
fn test_out_of_range_scores_fall_back_to_low() {
    assert_eq!(quality_band(-5), &LOW);
    assert_eq!(quality_band(101), &LOW);
    assert_eq!(quality_color(250), "red");
}

#[test]
fn test_bands_cover_range_without_overlap() {
    for score in 0..=100 {
        let matching = quality_bands().iter().filter(|b| b.contains(score)).count();
        assert_eq!(matching, 1, "score {score}");
    }
}

#[test]
fn test_tier_color() {
    assert_eq!(tier_color(70), "green");
    assert_eq!(tier_color(69), "yellow");
    assert_eq!(tier_color(40), "yellow");
    assert_eq!(tier_color(39), "red");
}
