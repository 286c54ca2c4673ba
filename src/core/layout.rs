//! Bipartite pair-layout planner.
//!
//! Pure geometry: maps a state subset and match list to box positions and
//! cubic connector curves. No rendering types appear here; the output is
//! raw coordinates the presentation layer draws from.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::{MatchPair, StateProfile};

/// Geometry constants for the two-column layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutSettings {
    /// Anchor x of the Democratic column (boxes extend left of it).
    pub left_x: f64,
    /// Anchor x of the Republican column (boxes extend right of it).
    pub right_x: f64,
    pub box_width: f64,
    pub item_height: f64,
    /// Gap between boxes inside one band.
    pub inner_gap: f64,
    /// Gap between district-count bands.
    pub band_gap: f64,
    pub top_padding: f64,
    pub bottom_padding: f64,
    /// States at exactly zero lean that take the Republican column; all
    /// other zero-lean states go left. Keeps near-neutral states from
    /// flipping sides between renders.
    pub zero_lean_right: Vec<String>,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            left_x: 145.0,
            right_x: 235.0,
            box_width: 110.0,
            item_height: 24.0,
            inner_gap: 3.0,
            band_gap: 8.0,
            top_padding: 8.0,
            bottom_padding: 8.0,
            zero_lean_right: vec!["MI".to_string(), "WI".to_string()],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    Left,
    Right,
}

/// Placed box for one state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatePosition {
    pub id: String,
    pub column: Column,
    /// Box origin (top-left corner).
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl StatePosition {
    pub fn center_y(&self) -> f64 {
        self.y + self.height / 2.0
    }
}

/// Cubic Bezier between two matched states' vertical centers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Connector {
    pub from: String,
    pub to: String,
    pub start: (f64, f64),
    pub control1: (f64, f64),
    pub control2: (f64, f64),
    pub end: (f64, f64),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub positions: Vec<StatePosition>,
    pub connectors: Vec<Connector>,
    pub total_height: f64,
}

impl LayoutPlan {
    pub fn position(&self, id: &str) -> Option<&StatePosition> {
        self.positions.iter().find(|p| p.id == id)
    }
}

fn column_for(state: &StateProfile, settings: &LayoutSettings) -> Column {
    if state.partisan_lean < 0.0 {
        Column::Left
    } else if state.partisan_lean > 0.0 {
        Column::Right
    } else if settings.zero_lean_right.iter().any(|id| *id == state.id) {
        Column::Right
    } else {
        Column::Left
    }
}

/// Plan the two-column layout for a state subset and its match list.
///
/// States are banded by current-era district count, bands sorted descending
/// by count; within a band the shorter column is vertically centered
/// against the taller. Connectors are emitted only for matches whose both
/// endpoints are in the subset.
pub fn layout(
    states: &[StateProfile],
    matches: &[MatchPair],
    settings: &LayoutSettings,
) -> LayoutPlan {
    // Partition into columns, each band sorted by id for stable output.
    let mut bands: BTreeMap<u16, (Vec<&StateProfile>, Vec<&StateProfile>)> = BTreeMap::new();
    for state in states {
        let entry = bands.entry(state.districts_2022).or_default();
        match column_for(state, settings) {
            Column::Left => entry.0.push(state),
            Column::Right => entry.1.push(state),
        }
    }
    for (left, right) in bands.values_mut() {
        left.sort_by(|a, b| a.id.cmp(&b.id));
        right.sort_by(|a, b| a.id.cmp(&b.id));
    }

    let mut positions = Vec::with_capacity(states.len());
    let mut current_y = settings.top_padding;
    let mut placed_any = false;

    // Largest delegations first.
    for (_, (left, right)) in bands.iter().rev() {
        let max_n = left.len().max(right.len());
        if max_n == 0 {
            continue;
        }
        let band_height =
            max_n as f64 * settings.item_height + (max_n as f64 - 1.0) * settings.inner_gap;

        let mut place = |column_states: &[&StateProfile], column: Column| {
            let n = column_states.len();
            if n == 0 {
                return;
            }
            let column_height =
                n as f64 * settings.item_height + (n as f64 - 1.0) * settings.inner_gap;
            let offset = (band_height - column_height) / 2.0;
            for (i, state) in column_states.iter().enumerate() {
                let x = match column {
                    Column::Left => settings.left_x - settings.box_width,
                    Column::Right => settings.right_x,
                };
                positions.push(StatePosition {
                    id: state.id.clone(),
                    column,
                    x,
                    y: current_y + offset + i as f64 * (settings.item_height + settings.inner_gap),
                    width: settings.box_width,
                    height: settings.item_height,
                });
            }
        };
        place(left, Column::Left);
        place(right, Column::Right);

        current_y += band_height + settings.band_gap;
        placed_any = true;
    }

    let total_height = if placed_any {
        current_y - settings.band_gap + settings.bottom_padding
    } else {
        settings.top_padding + settings.bottom_padding
    };

    // Connector anchor: Left boxes attach at left_x, Right boxes at
    // right_x, routed through the inter-column midpoint.
    let anchor_x = |column: Column| match column {
        Column::Left => settings.left_x,
        Column::Right => settings.right_x,
    };
    let mid_x = (settings.left_x + settings.right_x) / 2.0;

    let mut connectors = Vec::new();
    for pair in matches {
        let (from, to) = match (
            positions.iter().find(|p| p.id == pair.first()),
            positions.iter().find(|p| p.id == pair.second()),
        ) {
            (Some(from), Some(to)) => (from, to),
            _ => continue,
        };
        let (from_y, to_y) = (from.center_y(), to.center_y());
        connectors.push(Connector {
            from: from.id.clone(),
            to: to.id.clone(),
            start: (anchor_x(from.column), from_y),
            control1: (mid_x, from_y),
            control2: (mid_x, to_y),
            end: (anchor_x(to.column), to_y),
        });
    }

    LayoutPlan {
        positions,
        connectors,
        total_height,
    }
}
