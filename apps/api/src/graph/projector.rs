//! Graph Projector: polar layout of unlocked values and their course picks.
//!
//! Values sit on an inner ring, their recommendations just outside them on
//! an outer ring. Coordinates are percentages of the canvas. Edges join any
//! two nodes closer than `EDGE_DISTANCE_THRESHOLD`. Same input, same graph.

use std::collections::{HashMap, HashSet};
use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::models::opportunity::Opportunity;
use crate::models::recommendation::RecommendationRecord;
use crate::models::value::ValueCard;
use crate::recommendation::selector::RecommendationSet;
use crate::recommendation::templates::value_reason;

pub const CANVAS_CENTER: (f64, f64) = (50.0, 50.0);
pub const VALUE_RADIUS: f64 = 15.0;
pub const RECOMMENDATION_RADIUS: f64 = 35.0;
/// Radians either side of the owning value's angle.
pub const ANGLE_OFFSET: f64 = 0.2;
pub const RECOMMENDATIONS_PER_VALUE: usize = 2;
pub const EDGE_DISTANCE_THRESHOLD: f64 = 35.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeType {
    Value,
    Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub is_unlocked: bool,
    pub x: f64,
    pub y: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_value_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_message: Option<String>,
}

/// Undirected connection between two node indices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub distance: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillGraph {
    pub nodes: Vec<SkillNode>,
    pub edges: Vec<Edge>,
}

/// Per-value course records, as the projector consumes them.
pub trait RecommendationLookup {
    fn recommendations_for(&self, value_id: u32) -> &[RecommendationRecord];
}

impl RecommendationLookup for RecommendationSet {
    fn recommendations_for(&self, value_id: u32) -> &[RecommendationRecord] {
        RecommendationSet::recommendations_for(self, value_id)
    }
}

impl RecommendationLookup for HashMap<u32, Vec<RecommendationRecord>> {
    fn recommendations_for(&self, value_id: u32) -> &[RecommendationRecord] {
        self.get(&value_id).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Projects values and their recommendations onto the canvas.
///
/// Value `i` of `n` sits at angle `TAU * i / n` on the inner ring. Its first
/// two placeable records go to the outer ring at `angle - ANGLE_OFFSET`
/// and `angle + ANGLE_OFFSET`. A record is placeable when its course is in
/// `catalog` and was not already placed for an earlier value.
pub fn project_graph(
    unlocked_values: &[&ValueCard],
    recommendations: &impl RecommendationLookup,
    completed_opportunity_ids: &HashSet<String>,
    catalog: &[Opportunity],
) -> SkillGraph {
    let count = unlocked_values.len();
    let mut nodes = Vec::new();

    for (i, value) in unlocked_values.iter().enumerate() {
        let (x, y) = polar(value_angle(i, count), VALUE_RADIUS);
        nodes.push(SkillNode {
            id: format!("v_{}", value.id),
            name: value.name.clone(),
            node_type: NodeType::Value,
            is_unlocked: true,
            x,
            y,
            course_id: None,
            related_value_name: None,
            ai_message: None,
        });
    }

    let mut placed: HashSet<&str> = HashSet::new();
    for (i, value) in unlocked_values.iter().enumerate() {
        let base = value_angle(i, count);

        let resolved = recommendations
            .recommendations_for(value.id)
            .iter()
            .filter_map(|rec| {
                catalog
                    .iter()
                    .find(|c| c.id == rec.course_id)
                    .map(|course| (rec, course))
            })
            .filter(|(_, course)| placed.insert(course.id.as_str()))
            .take(RECOMMENDATIONS_PER_VALUE);

        for (slot, (rec, course)) in resolved.enumerate() {
            let offset = if slot == 0 { -ANGLE_OFFSET } else { ANGLE_OFFSET };
            let (x, y) = polar(base + offset, RECOMMENDATION_RADIUS);
            nodes.push(SkillNode {
                id: rec.id.clone(),
                name: course.title.clone(),
                node_type: NodeType::Recommendation,
                is_unlocked: completed_opportunity_ids.contains(&course.id),
                x,
                y,
                course_id: Some(course.id.clone()),
                related_value_name: Some(value.name.clone()),
                ai_message: Some(
                    rec.reason()
                        .map(str::to_string)
                        .unwrap_or_else(|| value_reason(&value.name)),
                ),
            });
        }
    }

    let edges = derive_edges(&nodes);
    SkillGraph { nodes, edges }
}

/// Every unordered pair closer than `EDGE_DISTANCE_THRESHOLD`.
pub fn derive_edges(nodes: &[SkillNode]) -> Vec<Edge> {
    let mut edges = Vec::new();
    for i in 0..nodes.len() {
        for j in (i + 1)..nodes.len() {
            let distance = (nodes[i].x - nodes[j].x).hypot(nodes[i].y - nodes[j].y);
            if distance < EDGE_DISTANCE_THRESHOLD {
                edges.push(Edge {
                    source: i,
                    target: j,
                    distance,
                });
            }
        }
    }
    edges
}

fn value_angle(index: usize, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }
    TAU * index as f64 / count as f64
}

fn polar(angle: f64, radius: f64) -> (f64, f64) {
    (
        CANVAS_CENTER.0 + angle.cos() * radius,
        CANVAS_CENTER.1 + angle.sin() * radius,
    )
}
