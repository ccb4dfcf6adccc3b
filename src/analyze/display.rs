use crate::model::Project;

pub const DEFAULT_DESCRIPTION_LEN: usize = 120;

const CONTEST_TYPES: &[(&[&str], &str)] = &[
    (&["공모전", "contest"], "공모전"),
    (&["해커톤", "hackathon"], "해커톤"),
    (&["아이디어", "idea"], "아이디어 공모"),
    (&["정책", "policy"], "정책 제안"),
];

const CONTEST_FALLBACK: &str = "기타";

/// Cuts `text` to `max_len` characters, backing off to the last space when it
/// falls within the final fifth of the cut.
pub fn shorten_description(text: &str, max_len: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_len {
        return text.to_string();
    }

    let cut = &chars[..max_len];
    let threshold = max_len as f64 * 0.8;
    let end = match cut.iter().rposition(|&c| c == ' ') {
        Some(pos) if pos as f64 > threshold => pos,
        _ => max_len,
    };

    let mut out: String = cut[..end].iter().collect();
    out.push_str("...");
    out
}

pub fn project_slug(project: &Project) -> String {
    let mut out = String::with_capacity(project.name.len());
    for c in project.name.to_lowercase().chars() {
        let keep = c.is_ascii_lowercase() || c.is_ascii_digit() || ('가'..='힣').contains(&c);
        if keep {
            out.push(c);
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }
    out.trim_matches('-').to_string()
}

pub fn contest_type(project: &Project) -> &'static str {
    let content = format!(
        "{} {} {}",
        project.title.to_lowercase(),
        project.description.to_lowercase(),
        project.name.to_lowercase()
    );
    CONTEST_TYPES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| content.contains(k)))
        .map(|(_, kind)| *kind)
        .unwrap_or(CONTEST_FALLBACK)
}

#[cfg(test)]
#[path = "../../tests/src_inline/analyze/display.rs"]
mod tests;
