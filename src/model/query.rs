use serde::Serialize;

pub const ALL: &str = "all";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Live,
    /// Not live. The name is kept from the site's selector ("오류").
    Error,
}

impl StatusFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusFilter::All => ALL,
            StatusFilter::Live => "live",
            StatusFilter::Error => "error",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            StatusFilter::All => "전체 상태",
            StatusFilter::Live => "라이브",
            StatusFilter::Error => "오류",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityFilter {
    #[default]
    All,
    High,
    Medium,
    Low,
}

impl QualityFilter {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityFilter::All => ALL,
            QualityFilter::High => "high",
            QualityFilter::Medium => "medium",
            QualityFilter::Low => "low",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            QualityFilter::All => "전체 품질",
            QualityFilter::High => "높음",
            QualityFilter::Medium => "보통",
            QualityFilter::Low => "낮음",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterSpec {
    pub category: String,
    pub status: StatusFilter,
    pub quality: QualityFilter,
    pub search: String,
}

impl Default for FilterSpec {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            status: StatusFilter::All,
            quality: QualityFilter::All,
            search: String::new(),
        }
    }
}

impl FilterSpec {
    pub fn has_active_filters(&self) -> bool {
        self.category != ALL
            || self.status != StatusFilter::All
            || self.quality != QualityFilter::All
            || !self.search.is_empty()
    }

    /// One label per active predicate, in selector order.
    pub fn active_labels(&self) -> Vec<String> {
        let mut out = Vec::new();
        if self.category != ALL {
            out.push(format!("카테고리: {}", self.category));
        }
        if self.status != StatusFilter::All {
            out.push(format!("상태: {}", self.status.label()));
        }
        if self.quality != QualityFilter::All {
            out.push(format!("품질: {}", self.quality.label()));
        }
        if !self.search.is_empty() {
            out.push(format!("검색: \"{}\"", self.search));
        }
        out
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Quality,
    Name,
    Date,
    Category,
    /// Any unrecognized key; keeps input order.
    Unsorted,
}

impl SortKey {
    pub fn parse(key: &str) -> Self {
        match key {
            "quality" => SortKey::Quality,
            "name" => SortKey::Name,
            "date" => SortKey::Date,
            "category" => SortKey::Category,
            _ => SortKey::Unsorted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Quality => "품질순",
            SortKey::Name => "이름순",
            SortKey::Date => "최신순",
            SortKey::Category => "카테고리순",
            SortKey::Unsorted => "입력순",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/query.rs"]
mod tests;
