use super::*;

fn project(id: &str, score: i32, live: bool, category: &str) -> Project {
    Project {
        id: id.to_string(),
        name: id.to_string(),
        quality_score: score,
        is_live: live,
        category: category.to_string(),
        ..Project::default()
    }
}

#[test]
fn test_two_project_example() {
    let projects = vec![project("a", 85, true, "AI"), project("b", 30, false, "AI")];
    assert_eq!(success_rate(&projects), 50);
    assert_eq!(average_quality(&projects), 58);

    let stats = category_stats(&projects);
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].name, "AI");
    assert_eq!(stats[0].count, 2);
    assert_eq!(stats[0].live_count, 1);
    assert_eq!(stats[0].avg_quality, 58);
    assert_eq!(stats[0].color, "#6b7280");
}

#[test]
fn test_empty_collection_yields_zeroes() {
    assert_eq!(success_rate(&[]), 0);
    assert_eq!(average_quality(&[]), 0);
    assert_eq!(portfolio_score(&[]), 0);
    assert!(category_stats(&[]).is_empty());
    assert!(high_quality(&[], 3).is_empty());
}

#[test]
fn test_category_stats_ordered_by_count_and_sum_to_total() {
    let projects = vec![
        project("a", 10, false, "환경"),
        project("b", 80, true, "농업"),
        project("c", 61, true, "농업"),
        project("d", 50, false, "청년"),
        project("e", 70, true, "농업"),
    ];
    let stats = category_stats(&projects);
    let names: Vec<&str> = stats.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["농업", "환경", "청년"]);
    assert_eq!(stats.iter().map(|s| s.count).sum::<usize>(), projects.len());
    assert_eq!(stats[0].live_count, 3);
    assert_eq!(stats[0].avg_quality, 70);
    assert_eq!(stats[0].color, "#10b981");
    assert_eq!(stats[0].success_rate(), 100);
}

#[test]
fn test_round_half_up_matches_math_round() {
    assert_eq!(round_half_up(57.5), 58);
    assert_eq!(round_half_up(57.49), 57);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(0.0), 0);
    assert_eq!(round_half_up(0.49999999999999994), 0);
    assert_eq!(round_half_up(-2.6), -3);
}

#[test]
fn test_success_rate_rounding() {
    let projects = vec![
        project("a", 0, true, "x"),
        project("b", 0, false, "x"),
        project("c", 0, false, "x"),
    ];
    assert_eq!(success_rate(&projects), 33);
}

#[test]
fn test_high_quality_limits_and_predicates() {
    let projects = vec![
        project("a", 95, false, "x"),
        project("b", 70, true, "x"),
        project("c", 69, true, "x"),
        project("d", 88, true, "x"),
        project("e", 88, true, "x"),
        project("f", 99, true, "x"),
    ];
    let top = high_quality(&projects, 3);
    let ids: Vec<&str> = top.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["f", "d", "e"]);
    assert!(top.iter().all(|p| p.is_live && p.quality_score >= 70));
    assert_eq!(high_quality(&projects, 10).len(), 4);
}

#[test]
fn test_portfolio_score_formula() {
    let projects = vec![project("a", 85, true, "AI"), project("b", 30, false, "AI")];
    // 4*0.2 + 50*0.3 + 58*0.3 + 12.5*0.2 = 35.7
    assert_eq!(portfolio_score(&projects), 36);

    let categories = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j"];
    let full: Vec<Project> = (0..60)
        .map(|i| project(&format!("p{i}"), 100, true, categories[i % categories.len()]))
        .collect();
    assert_eq!(portfolio_score(&full), 100);
}

#[test]
fn test_trending_categories_by_live_ratio() {
    let projects = vec![
        project("a", 50, true, "농업"),
        project("b", 50, false, "농업"),
        project("c", 50, true, "환경"),
        project("d", 50, false, "청년"),
    ];
    let trending = trending_categories(&projects);
    let names: Vec<&str> = trending.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["환경", "농업"]);
}

#[test]
fn test_recent_projects_live_newest_first() {
    let mut a = project("a", 50, true, "x");
    a.scan_date = "2025-07-01T00:00:00".to_string();
    let mut b = project("b", 50, false, "x");
    b.scan_date = "2025-07-05T00:00:00".to_string();
    let mut c = project("c", 50, true, "x");
    c.scan_date = "2025-07-03T00:00:00".to_string();
    let recent = recent_projects(&[a, b, c], 6);
    let ids: Vec<&str> = recent.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["c", "a"]);
}

#[test]
fn test_quality_distribution_counts_each_band() {
    let projects = vec![
        project("a", 90, true, "x"),
        project("b", 40, true, "x"),
        project("c", 39, true, "x"),
        project("d", 150, true, "x"),
    ];
    let dist = quality_distribution(&projects);
    let counts: Vec<(&str, usize)> = dist.iter().map(|b| (b.label, b.count)).collect();
    assert_eq!(counts, vec![("High", 2), ("Medium", 1), ("Low", 1)]);
}

#[test]
fn test_quality_distribution_unclamped_scores() {
    let projects = vec![project("a", 150, true, "x"), project("b", -5, true, "x")];
    let dist = quality_distribution(&projects);
    let counts: Vec<(&str, usize)> = dist.iter().map(|b| (b.label, b.count)).collect();
    assert_eq!(counts, vec![("High", 1), ("Medium", 0), ("Low", 1)]);
}

#[test]
fn test_category_names_and_awards() {
    let mut a = project("a", 0, true, "환경");
    a.award_status = "최우수상".to_string();
    let b = project("b", 0, true, "AI/디지털");
    let c = project("c", 0, true, "환경");
    let projects = vec![a, b, c];
    assert_eq!(category_names(&projects), vec!["AI/디지털", "환경"]);
    assert_eq!(awarded_count(&projects), 1);

    let summary = overview(&projects);
    assert_eq!(summary.total_projects, 3);
    assert_eq!(summary.awarded_projects, 1);
    assert_eq!(summary.category_count, 2);
    assert_eq!(summary.success_rate, 100);
}
