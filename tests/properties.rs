use wdgraphs::{io::*, prelude::*};

fn abcd() -> Vec<Vertex> {
    ["A", "B", "C", "D"].into_iter().map(Vertex::new).collect()
}

#[test]
fn cheaper_duplicate_survives() {
    let g = ListGraph::new(
        abcd(),
        [
            Edge::new(0, 1).with_weight(3.0),
            Edge::new(3, 1).with_weight(6.0),
            Edge::new(3, 1).with_weight(2.0),
        ],
    )
    .unwrap();

    assert!(g.is_weighted());
    assert!(g.is_undirected());
    assert!(g.has_parallels());
    assert!(!g.is_spanning());

    let h = g.unparalleled().unwrap();
    assert!(!h.has_parallels());
    assert_eq!(
        h.edges(),
        &[
            Edge::new(0, 1).with_weight(3.0),
            Edge::new(3, 1).with_weight(2.0)
        ]
    );
    assert_eq!(h.unparalleled().unwrap(), h);
    assert_eq!(h.vertices(), g.vertices());
}

#[test]
fn list_transforms_are_idempotent() {
    let g = ListGraph::new(
        abcd(),
        [
            Edge::new(0, 0).with_weight(1.0),
            Edge::new(0, 1).with_weight(4.0).directed(),
            Edge::new(2, 3).with_weight(0.5).directed(),
            Edge::new(3, 3).with_weight(7.0).directed(),
        ],
    )
    .unwrap();

    let u = g.unweighted();
    assert!(!u.is_weighted());
    assert_eq!(u.unweighted(), u);

    let d = g.undirected();
    assert!(!d.is_directed());
    assert_eq!(d.undirected(), d);

    let l = g.unlooped();
    assert!(!l.has_loops());
    assert_eq!(l.number_of_edges(), 2);
    assert_eq!(l.unlooped(), l);

    assert!(g.is_directed());
    assert!(g.has_loops());
    assert!(g.is_weighted());
}

#[test]
fn directed_path_is_weakly_but_not_strongly_connected() {
    let g = ListGraph::new(
        ["A", "B", "C"],
        [Edge::new(0, 1).directed(), Edge::new(1, 2).directed()],
    )
    .unwrap();

    assert!(g.is_spanning());
    assert!(!g.is_strongly_connected());
    assert!(g.is_weakly_connected());

    let u = g.undirected();
    assert!(u.is_spanning());
    assert!(u.is_strongly_connected());
}

#[test]
fn matrix_from_json_example() {
    let m: MatrixGraph = "[[false,1],[1,false]]".parse().unwrap();
    assert_eq!(m.cardinality(), 2);
    assert!(m.is_weighted());
    assert!(m.is_undirected());
    assert_eq!(m.get_weight(0, 1).unwrap(), Some(1.0));

    let u = m.unweighted();
    assert!(u.is_unweighted());
    assert_eq!(u.to_json().to_string(), "[[false,true],[true,false]]");
}

#[test]
fn matrix_construction_rejects_invalid_input() {
    let jagged = MatrixGraph::from_rows(vec![vec![false, true], vec![true]]).unwrap_err();
    assert_eq!(jagged.kind(), ErrorKind::Shape);

    let mixed = MatrixGraph::from_rows([
        [None, Some(EdgeWeight::Weighted(2.0))],
        [Some(EdgeWeight::Unweighted), None],
    ])
    .unwrap_err();
    assert_eq!(mixed.kind(), ErrorKind::Type);

    let string = MatrixGraph::try_from_json_str(r#"[["a"]]"#).unwrap_err();
    assert_eq!(string.kind(), ErrorKind::Type);
}

#[test]
fn matrix_undirected_and_deloop() {
    let mut m = MatrixGraph::new(3);
    m.set_edge(0, 0, 2.0).unwrap();
    m.set_edge(0, 1, 5.0).unwrap();
    m.set_edge(2, 1, 1.0).unwrap();

    let u = m.undirected();
    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(u.is_connected(i, j), u.is_connected(j, i));
        }
    }

    let d = m.deloop();
    for i in 0..3 {
        assert_eq!(d.get_edge(i, i).unwrap(), None);
        for j in (0..3).filter(|&j| j != i) {
            assert_eq!(d.get_edge(i, j).unwrap(), m.get_edge(i, j).unwrap());
        }
    }

    let err = m.get_edge(0, 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
}

#[test]
fn representations_agree() {
    let g = ListGraph::new(
        abcd(),
        [
            Edge::new(0, 1).with_weight(1.5),
            Edge::new(1, 2).with_weight(2.5),
            Edge::new(3, 2).with_weight(3.5),
        ],
    )
    .unwrap();
    let m = MatrixGraph::from(&g);

    assert!(m.is_undirected());
    assert_eq!(m.is_spanning(), g.is_spanning());
    assert_eq!(m.is_strongly_connected(), g.is_strongly_connected());
    assert_eq!(m.is_weakly_connected(), g.is_weakly_connected());
    assert_eq!(m.get_weight(2, 3).unwrap(), Some(3.5));
    assert_eq!(MatrixGraph::from(&ListGraph::from(&m)), m);
}
