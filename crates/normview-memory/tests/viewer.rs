use normview_kernel::{Flavour, SurfaceSet};
use normview_memory::{MemoryHost, MemorySurfaceSet, PacketContent, SURFACE_LIST_LABEL, TreeEvent};
use normview_table::{TableModel, TableSnapshot};
use normview_viewer::{CrushError, ViewController, ViewPhase, ViewerConfig, ViewerId};
use serde_json::{Value, json};
use std::rc::Rc;

type Controller = ViewController<MemorySurfaceSet, MemoryHost>;

fn pair_document(embedded_only: bool) -> Value {
    json!({
        "triangulation": {
            "label": "Pair",
            "tetrahedra": [
                { "edges": [0, 1, 2, 3, 4, 5], "faces": [0, 1, 2, 3] },
                { "edges": [6, 7, 3, 8, 4, 5], "faces": [4, 5, 6, 3] }
            ]
        },
        "flavour": "standard",
        "embeddedOnly": embedded_only,
        "surfaces": [
            {
                "name": "link",
                "compact": true,
                "euler": "2",
                "orientable": "positive",
                "twoSided": "positive",
                "vertexLinking": true,
                "vector": ["1", "1", "1", "1", "0", "0", "0", "1", "1", "1", "1", "0", "0", "0"]
            },
            {
                "name": "split",
                "compact": true,
                "euler": "0",
                "orientable": "negative",
                "twoSided": "negative",
                "splitting": true,
                "vector": ["0", "0", "0", "0", "1", "0", "0", "0", "0", "0", "0", "1", "0", "0"]
            },
            {
                "name": "spun",
                "compact": false,
                "vector": ["inf", "0", "0", "0", "0", "3", "0", "0", "0", "0", "0", "0", "0", "0"]
            }
        ]
    })
}

fn controller(embedded_only: bool) -> Controller {
    let set = Rc::new(
        MemorySurfaceSet::from_json_str(&pair_document(embedded_only).to_string()).unwrap(),
    );
    let (host, list) = MemoryHost::for_set(&set).unwrap();
    ViewController::new(
        ViewerId::new("coords"),
        list,
        Some(set),
        host,
        ViewerConfig::default(),
    )
}

fn row(c: &Controller, row: usize) -> Vec<String> {
    (0..c.column_count())
        .map(|col| c.value_at(row, col).unwrap().to_string())
        .collect()
}

#[test]
fn embedded_list_shows_every_property() {
    let c = controller(true);
    assert_eq!(c.phase(), ViewPhase::Ready);
    assert_eq!(c.active_flavour(), Some(Flavour::Standard));
    assert_eq!(c.column_count(), 5 + 14);
    assert_eq!(c.row_count(), 3);

    let first = row(&c, 0);
    assert_eq!(first[..9], ["2", "Orbl", "2", "Closed", "Vtx Link", "1", "1", "1", "1"]);

    let second = row(&c, 1);
    assert_eq!(second[..6], ["0", "Non-orbl", "1", "Closed", "Splitting", ""]);
    assert_eq!(second[9], "1");
}

#[test]
fn non_compact_rows_leave_properties_blank() {
    let c = controller(true);
    let spun = row(&c, 2);
    assert_eq!(spun[..6], ["", "", "", "Infinite", "", "Inf"]);
}

#[test]
fn immersed_list_drops_orientation_and_sides() {
    let c = controller(false);
    assert_eq!(c.column_count(), 3 + 14);
    let names: Vec<_> = (0..3).map(|col| c.column_name(col).unwrap()).collect();
    assert_eq!(names, ["Euler", "Bdry", "Type"]);

    let spun = row(&c, 2);
    assert_eq!(spun[..4], ["", "Infinite", "", "Inf"]);
}

#[test]
fn switching_flavour_rebuilds_coordinates() {
    let mut c = controller(true);
    assert!(c.select_flavour(Flavour::EdgeWeight));
    assert_eq!(c.column_count(), 5 + 9);
    assert_eq!(c.column_name(5).unwrap(), "E0");

    // Every edge of the pair meets the vertex link twice.
    assert!(row(&c, 0)[5..].iter().all(|cell| cell == "2"));
    // Edge 0 of the spun surface passes through its infinite triangle.
    assert_eq!(row(&c, 2)[5], "Inf");

    assert!(c.select_flavour(Flavour::Quad));
    assert_eq!(row(&c, 1)[5..], ["1", "", "", "1", "", ""]);
}

#[test]
fn snapshot_reflects_controller_table() {
    let c = controller(false);
    let snapshot = TableSnapshot::capture(c.table(), 70).unwrap();
    assert_eq!(snapshot.columns.len(), c.column_count());
    assert_eq!(snapshot.rows.len(), 3);
    assert!(snapshot.digest.starts_with("table1_"));
}

#[test]
fn crush_inserts_under_the_surface_list() {
    let mut c = controller(true);
    c.selection_changed([0]).unwrap();
    let node = c.invoke_crush().unwrap();
    let list = c.packet();

    let tree = c.host().tree();
    assert_eq!(tree.node(list).unwrap().label, SURFACE_LIST_LABEL);
    assert_eq!(tree.children(list), &[node]);

    let inserted = tree.node(node).unwrap();
    assert_eq!(inserted.label, "Crushed Pair");
    match &inserted.content {
        PacketContent::Triangulation(tri) => {
            assert_eq!(normview_kernel::Triangulation::label(tri.as_ref()), "Crushed Pair");
            assert_eq!(
                normview_kernel::Triangulation::tetrahedron_count(tri.as_ref()),
                2
            );
        }
        other => panic!("unexpected packet content: {other:?}"),
    }

    assert_eq!(
        c.host().events(),
        &[TreeEvent::SubtreeInserted {
            node,
            originator: "coords".to_string(),
            request_select: true,
        }]
    );
    assert!(c.host().errors().is_empty());
}

#[test]
fn repeated_crushes_get_fresh_labels() {
    let mut c = controller(true);
    c.selection_changed([1]).unwrap();
    let first = c.invoke_crush().unwrap();
    let second = c.invoke_crush().unwrap();

    let tree = c.host().tree();
    assert_eq!(tree.node(first).unwrap().label, "Crushed Pair");
    assert_eq!(tree.node(second).unwrap().label, "Crushed Pair 2");
    assert_eq!(tree.children(c.packet()), &[first, second]);
}

#[test]
fn crushing_a_non_compact_surface_is_reported() {
    let mut c = controller(true);
    c.selection_changed([2]).unwrap();
    let err = c.invoke_crush().unwrap_err();
    assert!(matches!(err, CrushError::Engine(_)));
    assert_eq!(
        c.host().errors(),
        &["The selected normal surface could not be crushed: cannot crush a non-compact surface"
            .to_string()]
    );
    assert!(c.host().events().is_empty());
    assert_eq!(c.active_set().unwrap().len(), 3);
}
