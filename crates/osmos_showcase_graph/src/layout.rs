// SPDX-License-Identifier: MIT OR Apache-2.0
//! Hand-authored node layouts.
//!
//! Two registries exist, one per viewport breakpoint. Switching between them
//! fully replaces the node set; callers must refit the viewport and reseed
//! the animator afterwards.

use crate::node::{Node, NodeId, NodeKind, PipelineGraph};

/// Panel width (in points) below which the compact layout is used
pub const DEFAULT_COMPACT_BREAKPOINT: f32 = 720.0;

/// Which static node set to display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Six-column horizontal arrangement for wide panels
    Wide,
    /// Two-column vertical arrangement for narrow panels
    Compact,
}

impl LayoutMode {
    /// Pick the mode for a panel width, given the breakpoint
    pub fn for_width(panel_width: f32, breakpoint: f32) -> Self {
        if panel_width < breakpoint {
            Self::Compact
        } else {
            Self::Wide
        }
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Wide => "wide",
            Self::Compact => "compact",
        }
    }
}

/// Build a fresh graph for the given mode, all nodes idle
pub fn build_graph(mode: LayoutMode) -> PipelineGraph {
    match mode {
        LayoutMode::Wide => wide_graph(),
        LayoutMode::Compact => compact_graph(),
    }
}

/// The visiting order for the given mode's animation
pub fn run_order(mode: LayoutMode) -> Vec<NodeId> {
    let ids: &[&str] = match mode {
        LayoutMode::Wide => &[
            "plan",
            "google",
            "yelp",
            "companies_house",
            "facebook",
            "trustpilot",
            "merge",
            "normalize",
            "crawler",
            "email_finder",
            "mx",
            "smtp",
            "linkedin",
            "score",
            "select",
            "sequencer",
            "send",
            "crm",
            "export",
            "done",
        ],
        LayoutMode::Compact => &[
            "plan",
            "google",
            "yelp",
            "merge",
            "normalize",
            "crawler",
            "email_finder",
            "mx",
            "smtp",
            "score",
            "select",
            "sequencer",
            "send",
            "export",
            "done",
        ],
    };
    ids.iter().map(|id| NodeId::from(*id)).collect()
}

fn n(id: &str, label: &str, x: f32, y: f32, color: [u8; 3], kind: NodeKind) -> Node {
    Node::new(id, label, kind)
        .with_position(x, y)
        .with_color(color)
}

/// Full 20-stage arrangement, six columns
fn wide_graph() -> PipelineGraph {
    const C0: f32 = -520.0;
    const C1: f32 = -320.0;
    const C2: f32 = -120.0;
    const C3: f32 = 80.0;
    const C4: f32 = 300.0;
    const C5: f32 = 520.0;

    let mut graph = PipelineGraph::new("Lead Scraper & Outreach");

    graph.add_node(n(
        "plan",
        "Plan (niche=Roofers, location=Swansea, limit=50)",
        C0,
        -60.0,
        [240, 34, 71],
        NodeKind::Transform,
    ));

    // sources
    graph.add_node(n("google", "Google Maps", C1, -180.0, [34, 211, 238], NodeKind::Source));
    graph.add_node(n("yelp", "Yelp", C1, -60.0, [56, 189, 248], NodeKind::Source));
    graph.add_node(n(
        "companies_house",
        "Companies House",
        C1,
        60.0,
        [96, 165, 250],
        NodeKind::Source,
    ));
    graph.add_node(n(
        "facebook",
        "Facebook Pages",
        C1,
        180.0,
        [59, 130, 246],
        NodeKind::Source,
    ));
    graph.add_node(n(
        "trustpilot",
        "Trustpilot",
        C1,
        300.0,
        [34, 197, 94],
        NodeKind::Source,
    ));

    // transform
    graph.add_node(n(
        "merge",
        "Merge & Dedupe (domain/phone)",
        C2,
        -60.0,
        [167, 139, 250],
        NodeKind::Transform,
    ));
    graph.add_node(n(
        "normalize",
        "Normalize Fields",
        C2,
        60.0,
        [139, 92, 246],
        NodeKind::Transform,
    ));

    // enrich / validate
    graph.add_node(n(
        "crawler",
        "Website Crawler",
        C3,
        -60.0,
        [244, 114, 182],
        NodeKind::Enrich,
    ));
    graph.add_node(n(
        "email_finder",
        "Email Finder (patterns)",
        C3,
        40.0,
        [251, 113, 133],
        NodeKind::Enrich,
    ));
    graph.add_node(n("mx", "MX Lookup", C3, 140.0, [52, 211, 153], NodeKind::Validate));
    graph.add_node(n("smtp", "SMTP Verify", C3, 240.0, [16, 185, 129], NodeKind::Validate));
    graph.add_node(n(
        "linkedin",
        "LinkedIn Enrich",
        C3,
        340.0,
        [74, 222, 128],
        NodeKind::Enrich,
    ));

    // scoring
    graph.add_node(n(
        "score",
        "Fit Score (niche x intent x quality)",
        C4,
        40.0,
        [245, 158, 11],
        NodeKind::Scoring,
    ));
    graph.add_node(n(
        "select",
        "Select Top-K (20)",
        C4,
        140.0,
        [234, 179, 8],
        NodeKind::Selection,
    ));

    // outreach / output
    graph.add_node(n(
        "sequencer",
        "Outreach Sequencer",
        C5,
        40.0,
        [251, 113, 133],
        NodeKind::Outreach,
    ));
    graph.add_node(n("send", "Send (mock)", C5, 140.0, [244, 63, 94], NodeKind::Outreach));
    graph.add_node(n(
        "crm",
        "Route to CRM (mock)",
        C5,
        240.0,
        [34, 211, 238],
        NodeKind::Storage,
    ));
    graph.add_node(n("export", "Export CSV", C5, 340.0, [6, 182, 212], NodeKind::Storage));
    graph.add_node(n("done", "Done", C5, 440.0, [52, 211, 153], NodeKind::Terminal));

    graph
}

/// Trimmed 15-stage arrangement, two columns zig-zagging down
fn compact_graph() -> PipelineGraph {
    const LEFT: f32 = -110.0;
    const RIGHT: f32 = 110.0;
    const STEP: f32 = 96.0;
    const TOP: f32 = -336.0;

    let row = |i: usize| TOP + STEP * (i / 2) as f32;
    let col = |i: usize| if i % 2 == 0 { LEFT } else { RIGHT };

    let stages: [(&str, &str, [u8; 3], NodeKind); 15] = [
        ("plan", "Plan (Roofers, Swansea)", [240, 34, 71], NodeKind::Transform),
        ("google", "Google Maps", [34, 211, 238], NodeKind::Source),
        ("yelp", "Yelp", [56, 189, 248], NodeKind::Source),
        ("merge", "Merge & Dedupe", [167, 139, 250], NodeKind::Transform),
        ("normalize", "Normalize Fields", [139, 92, 246], NodeKind::Transform),
        ("crawler", "Website Crawler", [244, 114, 182], NodeKind::Enrich),
        ("email_finder", "Email Finder", [251, 113, 133], NodeKind::Enrich),
        ("mx", "MX Lookup", [52, 211, 153], NodeKind::Validate),
        ("smtp", "SMTP Verify", [16, 185, 129], NodeKind::Validate),
        ("score", "Fit Score", [245, 158, 11], NodeKind::Scoring),
        ("select", "Select Top-K", [234, 179, 8], NodeKind::Selection),
        ("sequencer", "Outreach Sequencer", [251, 113, 133], NodeKind::Outreach),
        ("send", "Send (mock)", [244, 63, 94], NodeKind::Outreach),
        ("export", "Export CSV", [6, 182, 212], NodeKind::Storage),
        ("done", "Done", [52, 211, 153], NodeKind::Terminal),
    ];

    let last = stages.len() - 1;
    let mut graph = PipelineGraph::new("Lead Scraper & Outreach (compact)");
    for (i, (id, label, color, kind)) in stages.into_iter().enumerate() {
        // Last stage sits centered on its own row.
        let (x, y) = if i == last {
            (0.0, row(i) + STEP * 0.5)
        } else {
            (col(i), row(i))
        };
        graph.add_node(n(id, label, x, y, color, kind));
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breakpoint_selection() {
        let bp = DEFAULT_COMPACT_BREAKPOINT;
        assert_eq!(LayoutMode::for_width(400.0, bp), LayoutMode::Compact);
        assert_eq!(LayoutMode::for_width(bp, bp), LayoutMode::Wide);
        assert_eq!(LayoutMode::for_width(1200.0, bp), LayoutMode::Wide);
    }

    #[test]
    fn test_run_order_ids_exist_in_graph() {
        for mode in [LayoutMode::Wide, LayoutMode::Compact] {
            let graph = build_graph(mode);
            for id in run_order(mode) {
                assert!(graph.contains(&id), "{mode:?} layout is missing {id}");
            }
        }
    }

    #[test]
    fn test_layout_ids_unique() {
        // add_node replaces on duplicate, so a collision would shrink the count.
        let wide = build_graph(LayoutMode::Wide);
        assert_eq!(wide.node_count(), 20);
        let compact = build_graph(LayoutMode::Compact);
        assert_eq!(compact.node_count(), 15);
    }

    #[test]
    fn test_layouts_start_idle() {
        for mode in [LayoutMode::Wide, LayoutMode::Compact] {
            let graph = build_graph(mode);
            assert_eq!(
                graph.count_with_status(crate::node::NodeStatus::Idle),
                graph.node_count()
            );
        }
    }

    #[test]
    fn test_run_order_covers_every_node() {
        // Both shipped layouts animate all of their nodes.
        for mode in [LayoutMode::Wide, LayoutMode::Compact] {
            let graph = build_graph(mode);
            assert_eq!(run_order(mode).len(), graph.node_count());
        }
    }
}
