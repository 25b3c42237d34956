use log::{Level, LevelFilter, Log, Metadata, Record};
use normview_memory::{MemoryHost, MemorySurfaceSet};
use normview_viewer::{ViewController, ViewerConfig, ViewerId};
use serde_json::json;
use std::rc::Rc;
use std::sync::Mutex;

struct Capture {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for Capture {
    fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
        true
    }

    fn log(&self, record: &Record<'_>) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static CAPTURE: Capture = Capture {
    records: Mutex::new(Vec::new()),
};

fn take_records() -> Vec<(Level, String)> {
    std::mem::take(&mut *CAPTURE.records.lock().unwrap())
}

fn controller() -> ViewController<MemorySurfaceSet, MemoryHost> {
    let doc = json!({
        "triangulation": {
            "label": "Lone tet",
            "tetrahedra": [{ "edges": [0, 1, 2, 3, 4, 5], "faces": [0, 1, 2, 3] }]
        },
        "flavour": "standard",
        "embeddedOnly": true,
        "surfaces": [
            { "compact": true, "euler": "1", "vector": ["1", "0", "0", "0", "0", "0", "0"] },
            { "compact": false, "vector": ["inf", "0", "0", "0", "0", "0", "0"] }
        ]
    });
    let set = Rc::new(MemorySurfaceSet::from_json_str(&doc.to_string()).unwrap());
    let (host, list) = MemoryHost::for_set(&set).unwrap();
    ViewController::new(
        ViewerId::new("coords"),
        list,
        Some(set),
        host,
        ViewerConfig::default(),
    )
}

// Single test per binary: the logger is process-global.
#[test]
fn crush_logging_levels() {
    log::set_logger(&CAPTURE).unwrap();
    log::set_max_level(LevelFilter::Trace);

    let mut c = controller();
    take_records();

    assert!(c.invoke_crush().is_err());
    c.selection_changed([0, 1]).unwrap();
    assert!(c.invoke_crush().is_err());

    let records = take_records();
    assert!(
        records.iter().all(|(level, _)| *level > Level::Info),
        "selection errors must not log as faults: {records:?}"
    );
    assert_eq!(c.host().errors().len(), 2);

    c.selection_changed([1]).unwrap();
    assert!(c.invoke_crush().is_err());
    let records = take_records();
    assert!(
        records
            .iter()
            .any(|(level, text)| *level == Level::Warn && text.contains("non-compact")),
        "engine failures log a warning: {records:?}"
    );
    assert!(records.iter().all(|(level, _)| *level != Level::Error));
}
