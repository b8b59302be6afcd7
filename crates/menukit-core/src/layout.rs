use crate::definition::MenuDefinition;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

/// Fixed frame the menu must render into. The point of the whole layout
/// system: the command textbox must land at the same row no matter how much
/// content a given menu has.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLayoutConstraints {
    /// Total visual rows for the frame.
    #[serde(default = "default_fixed_height")]
    pub fixed_height: usize,
    /// Rows reserved at the bottom for the command prompt.
    #[serde(default = "default_textbox_lines")]
    pub command_textbox_lines: usize,
    /// Minimum breathing room between content and the prompt.
    #[serde(default = "default_padding_lines")]
    pub padding_lines: usize,
    /// When true, the renderer clears and repaints the full frame.
    #[serde(default = "default_enforce")]
    pub enforce_consistent_height: bool,
}

fn default_fixed_height() -> usize {
    25
}

fn default_textbox_lines() -> usize {
    3
}

fn default_padding_lines() -> usize {
    2
}

fn default_enforce() -> bool {
    true
}

impl Default for MenuLayoutConstraints {
    fn default() -> Self {
        Self {
            fixed_height: default_fixed_height(),
            command_textbox_lines: default_textbox_lines(),
            padding_lines: default_padding_lines(),
            enforce_consistent_height: default_enforce(),
        }
    }
}

/// Partial constraint update, merged field-by-field into the current
/// constraints by `MenuLayoutManager::update_constraints`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintOverrides {
    pub fixed_height: Option<usize>,
    pub command_textbox_lines: Option<usize>,
    pub padding_lines: Option<usize>,
    pub enforce_consistent_height: Option<bool>,
}

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Per-render layout computation. Recomputed for every render and discarded
/// afterward; carries no identity across renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuLayoutPlan {
    pub total_lines: usize,
    pub content_lines: usize,
    pub textbox_area_lines: usize,
    pub padding_lines_needed: usize,
    pub needs_truncation: bool,
}

// ---------------------------------------------------------------------------
// MenuLayoutManager
// ---------------------------------------------------------------------------

/// Converts variable-size menu content into a bounded, position-stable
/// rendering plan. Never fails: misconfigured constraints degrade to zero
/// rendered content rather than an error.
#[derive(Debug, Clone, Default)]
pub struct MenuLayoutManager {
    constraints: MenuLayoutConstraints,
}

impl MenuLayoutManager {
    pub fn new(constraints: MenuLayoutConstraints) -> Self {
        Self { constraints }
    }

    pub fn constraints(&self) -> &MenuLayoutConstraints {
        &self.constraints
    }

    /// Merge a partial update into the current constraints.
    pub fn update_constraints(&mut self, overrides: ConstraintOverrides) {
        if let Some(v) = overrides.fixed_height {
            self.constraints.fixed_height = v;
        }
        if let Some(v) = overrides.command_textbox_lines {
            self.constraints.command_textbox_lines = v;
        }
        if let Some(v) = overrides.padding_lines {
            self.constraints.padding_lines = v;
        }
        if let Some(v) = overrides.enforce_consistent_height {
            self.constraints.enforce_consistent_height = v;
        }
    }

    /// Compute the plan for one render of `menu`.
    ///
    /// `content_lines` is the structural estimate clamped to the rows left
    /// after the textbox and padding reservations; whatever does not fit is
    /// flagged for truncation.
    pub fn calculate_consistent_layout(&self, menu: &MenuDefinition) -> MenuLayoutPlan {
        let estimated = estimate_content_lines(menu);
        let available = self
            .constraints
            .fixed_height
            .saturating_sub(self.constraints.command_textbox_lines)
            .saturating_sub(self.constraints.padding_lines);

        MenuLayoutPlan {
            total_lines: self.constraints.fixed_height,
            content_lines: estimated.min(available),
            textbox_area_lines: self.constraints.command_textbox_lines,
            padding_lines_needed: available.saturating_sub(estimated),
            needs_truncation: estimated > available,
        }
    }

    /// Row (from the top, zero-based) where the command textbox area starts.
    /// Constant for a given set of constraints, regardless of menu content.
    pub fn textbox_position(&self) -> usize {
        self.constraints
            .fixed_height
            .saturating_sub(self.constraints.command_textbox_lines)
    }
}

/// Structural line-count estimate; counts logical lines, not wrapped ones.
///
/// title + separator + optional subtitle + blank, then per section: heading
/// + items + optional description + spacer, then separator + one line per
/// footer hint when any exist.
pub fn estimate_content_lines(menu: &MenuDefinition) -> usize {
    let mut lines = 2; // title + separator
    if menu.subtitle.is_some() {
        lines += 1;
    }
    lines += 1; // blank line before sections

    for section in &menu.sections {
        lines += 1; // heading
        lines += section.items.len();
        if section.description.is_some() {
            lines += 1;
        }
        lines += 1; // spacer after section
    }

    if !menu.footer_hints.is_empty() {
        lines += 1 + menu.footer_hints.len();
    }

    lines
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
