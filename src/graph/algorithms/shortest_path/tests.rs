//! Tests for Dijkstra over the multigraph.

use super::*;

fn cities() -> Graph<&'static str, u32> {
    let mut g: Graph<&str, u32> = ["Sydney", "Melbourne", "Adelaide"].into_iter().collect();
    g.add_edge(&"Sydney", &"Melbourne", 100).unwrap();
    g.add_edge(&"Melbourne", &"Adelaide", 100).unwrap();
    g
}

#[test]
fn test_dijkstra_simple() {
    let mut g = cities();

    assert_eq!(
        shortest_path(&g, &"Sydney", &"Adelaide"),
        Ok(Some(vec!["Sydney", "Melbourne", "Adelaide"]))
    );
    assert_eq!(
        shortest_path(&g, &"Sydney", &"Melbourne"),
        Ok(Some(vec!["Sydney", "Melbourne"]))
    );
    assert_eq!(shortest_path(&g, &"Sydney", &"Sydney"), Ok(Some(vec![])));

    // Not all roads lead to Rome.
    g.add_vertex("Rome");
    assert_eq!(shortest_path(&g, &"Sydney", &"Rome"), Ok(None));

    g.add_vertex("Helsinki");
    g.add_edge(&"Sydney", &"Rome", 400).unwrap();
    g.add_edge(&"Sydney", &"Helsinki", 500).unwrap();

    // A heavier direct connection does not replace the two-hop route.
    g.add_edge(&"Sydney", &"Adelaide", 300).unwrap();
    assert_eq!(
        shortest_path_with_cost(&g, &"Sydney", &"Adelaide"),
        Ok(Some((vec!["Sydney", "Melbourne", "Adelaide"], 200)))
    );
}

#[test]
fn test_dijkstra_missing_vertices() {
    let g = cities();
    assert_eq!(
        shortest_path(&g, &"Perth", &"Sydney"),
        Err(GraphError::VertexNotFound)
    );
    assert_eq!(
        shortest_path(&g, &"Sydney", &"Perth"),
        Err(GraphError::VertexNotFound)
    );
    assert_eq!(
        shortest_path(&g, &"Perth", &"Perth"),
        Err(GraphError::VertexNotFound)
    );
}

#[test]
fn test_dijkstra_uses_cheapest_parallel_edge() {
    let mut g: Graph<u8, u32> = (0..3).collect();
    g.add_edge(&0, &1, 50).unwrap();
    g.add_edge(&0, &1, 5).unwrap();
    g.add_edge(&0, &2, 12).unwrap();
    g.add_edge(&1, &2, 50).unwrap();
    g.add_edge(&1, &2, 4).unwrap();

    assert_eq!(
        shortest_path_with_cost(&g, &0, &2),
        Ok(Some((vec![0, 1, 2], 9)))
    );

    g.remove_edge(&1, &2, &4).unwrap();
    assert_eq!(shortest_path_with_cost(&g, &0, &2), Ok(Some((vec![0, 2], 12))));
}

#[test]
fn test_dijkstra_ignores_self_loops() {
    let mut g: Graph<u8, u32> = (0..3).collect();
    g.add_edge(&0, &0, 0).unwrap();
    g.add_edge(&1, &1, 1).unwrap();
    g.add_edge(&0, &1, 2).unwrap();
    g.add_edge(&1, &2, 3).unwrap();

    assert_eq!(
        shortest_path_with_cost(&g, &0, &2),
        Ok(Some((vec![0, 1, 2], 5)))
    );
}

#[test]
fn test_dijkstra_decrease_key_reroutes() {
    // 0 reaches 3 directly at 10, but via 1 and 2 for 3.
    let mut g: Graph<u8, u32> = (0..4).collect();
    g.add_edge(&0, &3, 10).unwrap();
    g.add_edge(&0, &1, 1).unwrap();
    g.add_edge(&1, &2, 1).unwrap();
    g.add_edge(&2, &3, 1).unwrap();

    assert_eq!(
        shortest_path_with_cost(&g, &0, &3),
        Ok(Some((vec![0, 1, 2, 3], 3)))
    );
    assert_eq!(
        shortest_path_with_cost(&g, &3, &0),
        Ok(Some((vec![3, 2, 1, 0], 3)))
    );
}

#[test]
fn test_dijkstra_disconnected_components() {
    let mut g: Graph<u8, u32> = (0..4).collect();
    g.add_edge(&0, &1, 1).unwrap();
    g.add_edge(&2, &3, 1).unwrap();

    assert_eq!(shortest_path(&g, &0, &3), Ok(None));
    assert_eq!(shortest_path(&g, &3, &2), Ok(Some(vec![3, 2])));
}

#[test]
fn test_reconstruct_walks_predecessors() {
    let previous: BTreeMap<u8, u8> = [(2, 1), (1, 0), (3, 1)].into_iter().collect();
    assert_eq!(reconstruct(&previous, &0, &2), vec![0, 1, 2]);
    assert_eq!(reconstruct(&previous, &0, &3), vec![0, 1, 3]);
}

#[test]
fn test_dijkstra_skips_overflowing_relaxations() {
    // 0-1-2 sums past u8::MAX, but the answer 0-3 is cheap.
    let mut g: Graph<u8, u8> = (0..4).collect();
    g.add_edge(&0, &1, 10).unwrap();
    g.add_edge(&1, &2, 250).unwrap();
    g.add_edge(&0, &3, 20).unwrap();

    assert_eq!(shortest_path_with_cost(&g, &0, &3), Ok(Some((vec![0, 3], 20))));
    assert_eq!(shortest_path(&g, &0, &2), Ok(None));
    assert_eq!(shortest_path_with_cost(&g, &1, &2), Ok(Some((vec![1, 2], 250))));

    // The only route overflows, so the destination counts as unreachable.
    let mut g: Graph<u8, u8> = (0..3).collect();
    g.add_edge(&0, &1, 200).unwrap();
    g.add_edge(&1, &2, 100).unwrap();
    assert_eq!(g.shortest_path(&0, &2), Ok(None));
    assert_eq!(g.shortest_path_with_cost(&0, &1), Ok(Some((vec![0, 1], 200))));
}
