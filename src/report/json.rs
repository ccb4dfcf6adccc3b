use serde::Serialize;

use crate::report::{ListView, ProjectCard, StatsView};

fn render<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(value)?;
    out.push('\n');
    Ok(out)
}

pub fn render_list_json(view: &ListView) -> Result<String, serde_json::Error> {
    render(view)
}

pub fn render_stats_json(view: &StatsView) -> Result<String, serde_json::Error> {
    render(view)
}

pub fn render_project_json(card: &ProjectCard) -> Result<String, serde_json::Error> {
    render(card)
}
