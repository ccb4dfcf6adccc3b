use crate::report::{CategoryRow, ListView, ProjectCard, StatsView};

pub fn render_list_text(view: &ListView) -> String {
    let mut out = String::new();

    if !view.featured.is_empty() {
        out.push_str("추천 프로젝트 (높은 품질의 프로젝트들)\n");
        out.push_str("=====================================\n\n");
        for card in &view.featured {
            push_card(&mut out, card);
        }
    }

    out.push_str("전체 프로젝트\n");
    out.push_str("=============\n");
    out.push_str(&format!(
        "총 {}개 프로젝트 중 {}개 표시 | 정렬: {}\n",
        view.total,
        view.shown,
        view.sort.label()
    ));
    if !view.active_filters.is_empty() {
        out.push_str(&format!("필터: {}\n", view.active_filters.join(", ")));
    }
    out.push_str(&format!("카테고리: {}\n\n", view.categories.join(", ")));

    if view.projects.is_empty() {
        out.push_str("검색 결과가 없습니다\n");
        out.push_str("다른 검색어나 필터를 시도해보세요.\n");
        return out;
    }
    for card in &view.projects {
        push_card(&mut out, card);
    }
    out
}

pub fn render_project_text(card: &ProjectCard) -> String {
    let mut out = String::new();
    push_card(&mut out, card);
    out.push_str(&format!("  slug: {}\n", card.slug));
    out
}

fn push_card(out: &mut String, card: &ProjectCard) {
    let status = if card.is_live {
        "LIVE".to_string()
    } else {
        format!("ERROR {}", card.response_code)
    };
    out.push_str(&format!("[{}] {} ({})\n", card.category, display_title(card), card.id));
    out.push_str(&format!(
        "  품질 {} ({}) | {} | {} | {}\n",
        card.quality_score, card.quality_band, status, card.contest_type, card.scan_date
    ));
    if !card.description.is_empty() {
        out.push_str(&format!("  {}\n", card.description));
    }
    if !card.features.is_empty() {
        out.push_str(&format!("  기능: {}\n", card.features.join(", ")));
    }
    if let Some(award) = &card.award_status {
        out.push_str(&format!("  수상: {}\n", award));
    }
    if !card.github_url.is_empty() {
        out.push_str(&format!("  {}\n", card.github_url));
    }
    out.push('\n');
}

fn display_title(card: &ProjectCard) -> &str {
    if card.title.is_empty() {
        &card.name
    } else {
        &card.title
    }
}

pub fn render_stats_text(view: &StatsView) -> String {
    let mut out = String::new();
    let o = &view.overview;

    out.push_str("포트폴리오 통계 분석\n");
    out.push_str("====================\n");
    if !view.scan_info.scan_date.is_empty() {
        out.push_str(&format!(
            "스캔: {} (scanner {})\n",
            view.scan_info.scan_date, view.scan_info.scanner_version
        ));
    }
    out.push('\n');

    out.push_str("1. 요약\n");
    out.push_str(&format!("총 프로젝트: {} (라이브 {}개)\n", o.total_projects, o.live_projects));
    out.push_str(&format!("성공률: {}%\n", o.success_rate));
    out.push_str(&format!("평균 품질: {} / 100\n", o.average_quality));
    out.push_str(&format!("카테고리: {}\n", o.category_count));
    out.push_str(&format!("수상 프로젝트: {}\n", o.awarded_projects));
    out.push_str(&format!("포트폴리오 점수: {}\n\n", o.portfolio_score));

    out.push_str("2. 카테고리별 상세 현황\n");
    out.push_str("카테고리\t총 프로젝트\t라이브 사이트\t성공률\t평균 품질\n");
    for row in &view.categories {
        push_category_row(&mut out, row);
    }
    out.push('\n');

    out.push_str("3. 품질 분포\n");
    let total = o.total_projects;
    for band in &view.quality_distribution {
        let share = if total == 0 {
            0.0
        } else {
            band.count as f64 / total as f64 * 100.0
        };
        out.push_str(&format!(
            "{} ({}-{}): {} ({:.0}%)\n",
            band.label, band.min, band.max, band.count, share
        ));
    }
    out.push('\n');

    out.push_str("4. 성장 카테고리\n");
    if view.trending.is_empty() {
        out.push_str("(none)\n");
    }
    for row in &view.trending {
        out.push_str(&format!(
            "{}: {}/{} live ({}%)\n",
            row.stats.name, row.stats.live_count, row.stats.count, row.success_rate
        ));
    }
    out.push('\n');

    out.push_str("5. 최근 프로젝트\n");
    if view.recent.is_empty() {
        out.push_str("(none)\n");
    }
    for card in &view.recent {
        out.push_str(&format!(
            "{} | {} | 품질 {}\n",
            card.scan_date,
            display_title(card),
            card.quality_score
        ));
    }
    out
}

fn push_category_row(out: &mut String, row: &CategoryRow) {
    out.push_str(&format!(
        "{}\t{}\t{}\t{}%\t{}\n",
        row.stats.name,
        row.stats.count,
        row.stats.live_count,
        row.success_rate,
        row.stats.avg_quality
    ));
}
