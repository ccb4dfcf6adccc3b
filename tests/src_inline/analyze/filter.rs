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

fn sample() -> Vec<Project> {
    let mut a = project("a", 85, true, "AI/디지털");
    a.title = "Smart Farm Dashboard".to_string();
    let mut b = project("b", 30, false, "농업");
    b.description = "농촌 데이터 플랫폼".to_string();
    let c = project("c", 55, true, "농업");
    let d = project("d", 120, false, "환경");
    vec![a, b, c, d]
}

fn ids(projects: &[Project]) -> Vec<&str> {
    projects.iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn test_default_spec_returns_input_unchanged() {
    let projects = sample();
    let out = filter_projects(&projects, &FilterSpec::default());
    assert_eq!(out, projects);
}

#[test]
fn test_category_is_exact_match() {
    let projects = sample();
    let spec = FilterSpec {
        category: "농업".to_string(),
        ..FilterSpec::default()
    };
    let out = filter_projects(&projects, &spec);
    assert_eq!(ids(&out), vec!["b", "c"]);
    assert!(out.iter().all(|p| p.category == "농업"));

    let spec = FilterSpec {
        category: "ai/디지털".to_string(),
        ..FilterSpec::default()
    };
    assert!(filter_projects(&projects, &spec).is_empty());
}

#[test]
fn test_status_live_and_error_partition() {
    let projects = sample();
    let live = filter_projects(
        &projects,
        &FilterSpec {
            status: StatusFilter::Live,
            ..FilterSpec::default()
        },
    );
    let error = filter_projects(
        &projects,
        &FilterSpec {
            status: StatusFilter::Error,
            ..FilterSpec::default()
        },
    );
    assert_eq!(ids(&live), vec!["a", "c"]);
    assert_eq!(ids(&error), vec!["b", "d"]);
}

#[test]
fn test_quality_uses_band_lookup_with_fallback() {
    let projects = sample();
    let low = filter_projects(
        &projects,
        &FilterSpec {
            quality: QualityFilter::Low,
            ..FilterSpec::default()
        },
    );
    // 120 is outside every band and resolves to Low.
    assert_eq!(ids(&low), vec!["b", "d"]);

    let medium = filter_projects(
        &projects,
        &FilterSpec {
            quality: QualityFilter::Medium,
            ..FilterSpec::default()
        },
    );
    assert_eq!(ids(&medium), vec!["c"]);
}

#[test]
fn test_search_is_case_insensitive_across_fields() {
    let projects = sample();
    let by_category = filter_projects(
        &projects,
        &FilterSpec {
            search: "ai".to_string(),
            ..FilterSpec::default()
        },
    );
    assert_eq!(ids(&by_category), vec!["a"]);

    let by_title = filter_projects(
        &projects,
        &FilterSpec {
            search: "FARM".to_string(),
            ..FilterSpec::default()
        },
    );
    assert_eq!(ids(&by_title), vec!["a"]);

    let by_description = filter_projects(
        &projects,
        &FilterSpec {
            search: "플랫폼".to_string(),
            ..FilterSpec::default()
        },
    );
    assert_eq!(ids(&by_description), vec!["b"]);
}

#[test]
fn test_search_spans_field_boundaries_with_single_space() {
    let mut p = project("x", 50, true, "관광");
    p.title = "Busan".to_string();
    p.description = "Tour".to_string();
    let spec = FilterSpec {
        search: "busan tour".to_string(),
        ..FilterSpec::default()
    };
    assert_eq!(filter_projects(&[p], &spec).len(), 1);
}

#[test]
fn test_predicates_combine_conjunctively() {
    let projects = sample();
    let spec = FilterSpec {
        category: "농업".to_string(),
        status: StatusFilter::Live,
        quality: QualityFilter::Medium,
        search: String::new(),
    };
    assert_eq!(ids(&filter_projects(&projects, &spec)), vec!["c"]);

    let spec = FilterSpec {
        category: "농업".to_string(),
        status: StatusFilter::Live,
        quality: QualityFilter::High,
        search: String::new(),
    };
    assert!(filter_projects(&projects, &spec).is_empty());
}
