//! Class-name helpers over the stylesheet in `assets/main.css`, so sections
//! stay consistent without repeating class soup inline.

/// Brand accent applied to titles, KPI tiles and highlights.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Accent {
    #[default]
    Cyan,
    Gold,
    Violet,
}

pub fn accent_text(accent: Accent) -> &'static str {
    match accent {
        Accent::Cyan => "text-cyan",
        Accent::Gold => "text-gold",
        Accent::Violet => "text-violet",
    }
}

pub fn kpi_card(accent: Accent) -> &'static str {
    match accent {
        Accent::Cyan => "kpi-card kpi-cyan",
        Accent::Gold => "kpi-card kpi-gold",
        Accent::Violet => "kpi-card kpi-violet",
    }
}

pub fn btn_primary(enabled: bool) -> &'static str {
    if enabled {
        "btn btn-primary"
    } else {
        "btn btn-primary btn-disabled"
    }
}

pub fn btn_ghost() -> &'static str {
    "btn btn-ghost"
}

pub fn select_card(active: bool) -> &'static str {
    if active {
        "select-card select-card-active"
    } else {
        "select-card"
    }
}

pub fn toggle_tile(active: bool) -> &'static str {
    if active {
        "toggle-tile toggle-tile-active"
    } else {
        "toggle-tile"
    }
}

pub fn panel() -> &'static str {
    "glass-panel"
}

pub fn section_kicker() -> &'static str {
    "section-kicker"
}

pub fn section_title() -> &'static str {
    "section-title"
}

pub fn label_class() -> &'static str {
    "field-label"
}

pub fn input_class() -> &'static str {
    "field-input"
}
