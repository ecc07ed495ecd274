extern crate env_logger;
extern crate graph_algos;

#[macro_use]
extern crate quickcheck;

use graph_algos::*;

// Random graphs have vertices 0 .. VERTICES.
const VERTICES: u8 = 8;

type TestGraph = AdjacencyListGraph<u8, WeightedEdge<u8>>;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn random_graph(edges: &[(u8, u8, u8)], undirected: bool) -> TestGraph {
    let mut graph = TestGraph::new();
    for v in 0..VERTICES {
        graph.add_vertex(v);
    }
    for &(a, b, weight) in edges {
        let edge = WeightedEdge::new(a % VERTICES, b % VERTICES, f64::from(weight));
        if undirected {
            graph.add_undirected_edge(edge);
        } else {
            graph.add_edge(edge);
        }
    }
    graph
}

// All-pairs distances by Floyd–Warshall.
fn all_distances(graph: &TestGraph) -> Vec<Vec<f64>> {
    let n = VERTICES as usize;
    let mut dist = vec![vec![f64::INFINITY; n]; n];
    for v in 0..n {
        dist[v][v] = 0.0;
    }
    for edge in graph.all_edges() {
        let (a, b) = (*edge.from() as usize, *edge.to() as usize);
        dist[a][b] = dist[a][b].min(edge.weight());
    }
    for k in 0..n {
        for i in 0..n {
            for j in 0..n {
                let through = dist[i][k] + dist[k][j];
                if through < dist[i][j] {
                    dist[i][j] = through;
                }
            }
        }
    }
    dist
}

// Minimum spanning tree weight by Prim’s algorithm, or None if the graph is
// disconnected.
fn prim_weight(graph: &TestGraph) -> Option<f64> {
    let mut in_tree = vec![false; VERTICES as usize];
    in_tree[0] = true;
    let mut total = 0.0;

    for _ in 1..VERTICES {
        let best = graph.all_edges().iter()
            .filter(|e| in_tree[*e.from() as usize] != in_tree[*e.to() as usize])
            .min_by(|a, b| a.weight().total_cmp(&b.weight()))?;
        in_tree[*best.from() as usize] = true;
        in_tree[*best.to() as usize] = true;
        total += best.weight();
    }

    Some(total)
}

quickcheck! {
    fn prop_dijkstra_matches_floyd_warshall(edges: Vec<(u8, u8, u8)>) -> bool {
        let graph = random_graph(&edges, false);
        let dist = all_distances(&graph);
        let finder = DijkstraShortestPathFinder::new();

        for s in 0..VERTICES {
            for t in 0..VERTICES {
                let path = match finder.find_shortest_path(&graph, &s, &t) {
                    Ok(path) => path,
                    Err(_) => return false,
                };
                let expected = dist[s as usize][t as usize];

                let ok = match path {
                    ShortestPath::SingleVertex(v) => s == t && v == s,
                    ShortestPath::Failure => s != t && expected.is_infinite(),
                    ShortestPath::Success(ref edges) => {
                        let vertices = path.vertices();
                        s != t
                            && path.total_weight() == expected
                            && vertices.first() == Some(&s)
                            && vertices.last() == Some(&t)
                            && edges.windows(2).all(|w| w[0].to() == w[1].from())
                    }
                };
                if !ok {
                    return false;
                }
            }
        }

        true
    }

    fn prop_kruskal_matches_prim(edges: Vec<(u8, u8, u8)>) -> bool {
        let graph = random_graph(&edges, true);
        let mst = KruskalMinimumSpanningTreeFinder::new().find_minimum_spanning_tree(&graph);

        match prim_weight(&graph) {
            None => !mst.exists(),
            Some(weight) => {
                let mut forest = DisjointSetForest::new();
                for v in 0..VERTICES {
                    forest.make_set(v).unwrap();
                }
                let acyclic = mst.edges().iter()
                    .all(|e| forest.union(e.from(), e.to()) == Ok(true));

                mst.exists()
                    && acyclic
                    && mst.edges().len() == VERTICES as usize - 1
                    && forest.set_count() == 1
                    && mst.total_weight() == weight
            }
        }
    }
}

#[test]
fn triangle_scenario() {
    init_logger();

    let graph = AdjacencyListGraph::undirected(vec![
        WeightedEdge::new('A', 'B', 1.0),
        WeightedEdge::new('B', 'C', 2.0),
        WeightedEdge::new('A', 'C', 4.0),
    ]);

    let path = DijkstraShortestPathFinder::new()
        .find_shortest_path(&graph, &'A', &'C')
        .unwrap();
    assert_eq!(vec!['A', 'B', 'C'], path.vertices());
    assert_eq!(3.0, path.total_weight());

    let mst = KruskalMinimumSpanningTreeFinder::new().find_minimum_spanning_tree(&graph);
    let mut pairs: Vec<_> = mst.edges().iter()
        .map(|e| (*e.from(), *e.to()))
        .collect();
    pairs.sort();
    assert_eq!(vec![('A', 'B'), ('B', 'C')], pairs);
}

#[test]
fn disconnected_scenario() {
    init_logger();

    let mut graph = AdjacencyListGraph::<char, WeightedEdge<char>>::new();
    graph.add_vertex('X');
    graph.add_vertex('Y');

    let path = DijkstraShortestPathFinder::new()
        .find_shortest_path(&graph, &'X', &'Y')
        .unwrap();
    assert_eq!(ShortestPath::Failure, path);

    let mst = KruskalMinimumSpanningTreeFinder::new().find_minimum_spanning_tree(&graph);
    assert_eq!(MinimumSpanningTree::Failure, mst);
}

#[test]
fn maze_scenario() {
    init_logger();

    let mut maze = Maze::grid(10, 10);
    let walls = maze.walls().len();
    let mut carver = KruskalMazeCarver::with_seed(KruskalMinimumSpanningTreeFinder::new(), 2024);

    assert_eq!(99, carver.carve(&mut maze));
    assert_eq!(walls - 99, maze.walls().len());
}
