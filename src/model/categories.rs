pub const FALLBACK_CATEGORY: &str = "기타";
pub const FALLBACK_COLOR: &str = "#6b7280";

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub name: &'static str,
    pub color: &'static str,
}

const CATEGORY_PALETTE: &[CategoryDef] = &[
    CategoryDef {
        name: FALLBACK_CATEGORY,
        color: FALLBACK_COLOR,
    },
    CategoryDef {
        name: "농업",
        color: "#10b981",
    },
    CategoryDef {
        name: "환경",
        color: "#059669",
    },
    CategoryDef {
        name: "규제혁신",
        color: "#dc2626",
    },
    CategoryDef {
        name: "AI/디지털",
        color: "#3b82f6",
    },
    CategoryDef {
        name: "관광",
        color: "#f59e0b",
    },
    CategoryDef {
        name: "안전",
        color: "#ef4444",
    },
    CategoryDef {
        name: "청년",
        color: "#8b5cf6",
    },
];

pub fn category_color(name: &str) -> &'static str {
    CATEGORY_PALETTE
        .iter()
        .find(|def| def.name == name)
        .map(|def| def.color)
        .unwrap_or(FALLBACK_COLOR)
}
