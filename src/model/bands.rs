#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityBand {
    pub label: &'static str,
    pub min: i32,
    pub max: i32,
    pub color: &'static str,
    pub description: &'static str,
}

impl QualityBand {
    pub fn contains(&self, score: i32) -> bool {
        score >= self.min && score <= self.max
    }
}

pub const HIGH: QualityBand = QualityBand {
    label: "High",
    min: 70,
    max: 100,
    color: "success",
    description: "우수한 품질의 프로젝트",
};

pub const MEDIUM: QualityBand = QualityBand {
    label: "Medium",
    min: 40,
    max: 69,
    color: "yellow",
    description: "보통 품질의 프로젝트",
};

pub const LOW: QualityBand = QualityBand {
    label: "Low",
    min: 0,
    max: 39,
    color: "red",
    description: "개선이 필요한 프로젝트",
};

const QUALITY_BANDS: &[QualityBand] = &[HIGH, MEDIUM, LOW];

pub fn quality_bands() -> &'static [QualityBand] {
    QUALITY_BANDS
}

/// Scores outside every band (negative, above 100) resolve to `LOW`.
pub fn quality_band(score: i32) -> &'static QualityBand {
    QUALITY_BANDS
        .iter()
        .find(|band| band.contains(score))
        .unwrap_or(&QUALITY_BANDS[2])
}

pub fn quality_color(score: i32) -> &'static str {
    quality_band(score).color
}

/// Tier color for a percentage-like value (success rate, average quality).
pub fn tier_color(value: i32) -> &'static str {
    if value >= 70 {
        "green"
    } else if value >= 40 {
        "yellow"
    } else {
        "red"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/bands.rs"]
mod tests;
