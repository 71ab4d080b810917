use super::{Canvas, Category, Graph, GraphLink, GraphNode, Member, Placement, SeedOptions};
use crate::error::{Error, Result};
use narwhal_graphlib::VertexId;

/// A record that was dropped during [`load_graph`], by its position in the input list.
#[derive(Debug, Clone, PartialEq)]
pub struct Skipped {
    pub index: usize,
    pub error: Error,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadReport {
    pub skipped_nodes: Vec<Skipped>,
    pub skipped_links: Vec<Skipped>,
}

impl LoadReport {
    pub fn is_clean(&self) -> bool {
        self.skipped_nodes.is_empty() && self.skipped_links.is_empty()
    }
}

/// Builds an undirected graph from parsed node and link records.
///
/// Malformed records are skipped one by one and reported; they never abort the load. Link
/// endpoints index the list of *accepted* nodes. Every accepted node is placed at a seeded
/// random point around its category anchor.
pub fn load_graph(
    nodes: &[GraphNode],
    links: &[GraphLink],
    canvas: &Canvas,
    seed: &SeedOptions,
) -> Result<(Graph, LoadReport)> {
    canvas.validate()?;

    let mut graph = Graph::new();
    let mut report = LoadReport::default();
    let mut placement = Placement::new(canvas, seed);

    for (index, node) in nodes.iter().enumerate() {
        match member_from_node(node) {
            Ok(member) => {
                add_member(&mut graph, member, &mut placement);
            }
            Err(error) => {
                tracing::warn!(index, %error, "skipping node");
                report.skipped_nodes.push(Skipped { index, error });
            }
        }
    }

    for (index, link) in links.iter().enumerate() {
        if let Err(error) = add_link(&mut graph, link) {
            tracing::warn!(index, %error, "skipping link");
            report.skipped_links.push(Skipped { index, error });
        }
    }

    tracing::debug!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        skipped_nodes = report.skipped_nodes.len(),
        skipped_links = report.skipped_links.len(),
        "graph loaded"
    );
    Ok((graph, report))
}

/// Appends `member` at the next seeded position for its category.
pub fn add_member(graph: &mut Graph, member: Member, placement: &mut Placement) -> VertexId {
    let position = placement.next_position(member.category);
    graph.add_vertex_at(member, position)
}

fn member_from_node(node: &GraphNode) -> Result<Member> {
    let code = node.group.ok_or(Error::MissingField {
        item: "node",
        field: "group",
    })?;
    let name = node.name.as_deref().ok_or(Error::MissingField {
        item: "node",
        field: "name",
    })?;
    let category = Category::from_code(code).ok_or_else(|| Error::UnrecognizedCategory {
        name: name.to_string(),
        code,
    })?;
    Ok(Member::new(name, category))
}

fn add_link(graph: &mut Graph, link: &GraphLink) -> Result<()> {
    let missing = |field| Error::MissingField {
        item: "link",
        field,
    };
    let from = link.source.ok_or(missing("source"))?;
    let to = link.target.ok_or(missing("target"))?;
    let value = link.value.ok_or(missing("value"))?;

    let vertex_count = graph.vertex_count();
    let resolve = |ix: i64| {
        usize::try_from(ix)
            .ok()
            .filter(|&ix| ix < vertex_count)
            .map(VertexId)
    };
    let (Some(source), Some(neighbor)) = (resolve(from), resolve(to)) else {
        return Err(Error::InvalidIndex {
            from,
            to,
            vertex_count,
        });
    };
    let weight = u32::try_from(value).map_err(|_| Error::InvalidWeight { from, to, value })?;

    graph
        .add_edge(source, neighbor, weight)
        .map_err(|_| Error::InvalidIndex {
            from,
            to,
            vertex_count,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_without_group_is_reported_before_name() {
        let err = member_from_node(&GraphNode::default()).unwrap_err();
        assert_eq!(
            err,
            Error::MissingField {
                item: "node",
                field: "group"
            }
        );
    }

    #[test]
    fn negative_and_oversized_weights_are_rejected() {
        let mut g = Graph::new();
        g.add_vertex(Member::new("a", Category::None));
        g.add_vertex(Member::new("b", Category::None));
        assert!(matches!(
            add_link(&mut g, &GraphLink::new(0, 1, -3)),
            Err(Error::InvalidWeight { value: -3, .. })
        ));
        assert!(matches!(
            add_link(&mut g, &GraphLink::new(0, 1, i64::from(u32::MAX) + 1)),
            Err(Error::InvalidWeight { .. })
        ));
        assert_eq!(g.edge_count(), 0);
    }

    #[test]
    fn negative_index_is_an_invalid_index() {
        let mut g = Graph::new();
        g.add_vertex(Member::new("a", Category::None));
        assert!(matches!(
            add_link(&mut g, &GraphLink::new(-1, 0, 1)),
            Err(Error::InvalidIndex { from: -1, .. })
        ));
    }
}
