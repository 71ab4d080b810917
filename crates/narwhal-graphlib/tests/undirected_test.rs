use narwhal_graphlib::{
    Graph, PathSearch, Preference, VertexId, greedy_farthest_path, shortest_path,
};

fn office() -> (Graph<&'static str>, Vec<VertexId>) {
    let mut g = Graph::new();
    let ids: Vec<VertexId> = ["A", "B", "C", "D", "E"]
        .into_iter()
        .map(|n| g.add_vertex(n))
        .collect();
    let [a, b, c, d, e] = [ids[0], ids[1], ids[2], ids[3], ids[4]];
    g.add_edge(a, b, 1).unwrap();
    g.add_edge(b, c, 2).unwrap();
    g.add_edge(b, d, 5).unwrap();
    g.add_edge(a, d, 4).unwrap();
    g.add_edge(d, e, 8).unwrap();
    (g, ids)
}

#[test]
fn undirected_edges_are_symmetric() {
    let (g, ids) = office();
    assert!(!g.is_directed());
    assert_eq!(g.edge_count(), 10);

    let (b, d) = (ids[1], ids[3]);
    assert!(g.neighbors(b).any(|(n, w)| n == d && w == 5));
    assert!(g.neighbors(d).any(|(n, w)| n == b && w == 5));
}

#[test]
fn neighbor_order_follows_insertion() {
    let (g, ids) = office();
    let d = ids[3];
    let order: Vec<_> = g
        .neighbors(d)
        .map(|(n, _)| g.vertex(n).unwrap().label)
        .collect();
    assert_eq!(order, vec!["B", "A", "E"]);
}

#[test]
fn direct_edge_is_the_shortest_route_to_a_leaf() {
    let (g, ids) = office();
    let (d, e) = (ids[3], ids[4]);
    let p = shortest_path(&g, d, e).unwrap().unwrap();
    assert_eq!(p.total, 8);
    assert_eq!(p.vertices, vec![d, e]);
}

#[test]
fn shortest_distances_are_symmetric() {
    let (g, ids) = office();
    for &i in &ids {
        for &j in &ids {
            let ij = shortest_path(&g, i, j).unwrap().map(|p| p.total);
            let ji = shortest_path(&g, j, i).unwrap().map(|p| p.total);
            assert_eq!(ij, ji, "{i} <-> {j}");
        }
    }
    assert_eq!(shortest_path(&g, ids[2], ids[4]).unwrap().unwrap().total, 2 + 5 + 8);
}

#[test]
fn farthest_is_never_lighter_than_shortest() {
    let (g, ids) = office();
    for &i in &ids {
        let lightest = PathSearch::run(&g, i, Preference::Lightest).unwrap();
        let heaviest = PathSearch::run(&g, i, Preference::Heaviest).unwrap();
        for &j in &ids {
            if i == j {
                continue;
            }
            let (Some(s), Some(f)) = (lightest.total_to(j), heaviest.total_to(j)) else {
                continue;
            };
            assert!(f >= s, "{i} -> {j}: farthest {f} < shortest {s}");
        }
    }
}

#[test]
fn per_destination_queries_match_a_full_run() {
    let (g, ids) = office();
    let run = PathSearch::run(&g, ids[0], Preference::Heaviest).unwrap();
    for &j in &ids[1..] {
        assert_eq!(
            greedy_farthest_path(&g, ids[0], j).unwrap(),
            run.path_to(j),
            "destination {j}"
        );
    }
}

#[test]
fn repeated_searches_do_not_interfere() {
    let (g, ids) = office();
    let first = shortest_path(&g, ids[2], ids[4]).unwrap();
    let _ = greedy_farthest_path(&g, ids[2], ids[4]).unwrap();
    let second = shortest_path(&g, ids[2], ids[4]).unwrap();
    assert_eq!(first, second);
}

#[test]
fn disconnected_vertex_is_unreachable_both_ways() {
    let (mut g, ids) = office();
    let lone = g.add_vertex("F");
    assert_eq!(shortest_path(&g, ids[0], lone).unwrap(), None);
    assert_eq!(shortest_path(&g, lone, ids[0]).unwrap(), None);
    assert_eq!(greedy_farthest_path(&g, lone, ids[0]).unwrap(), None);
}
