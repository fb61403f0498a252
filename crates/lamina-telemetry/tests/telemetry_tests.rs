//! Integration tests for lamina-telemetry.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use lamina_telemetry::sinks::EventSink;
use lamina_telemetry::{AnalysisEvent, EventBus, EventKind, JsonLinesSink, VecSink};

fn evaluation_event(sequence: u64) -> AnalysisEvent {
    AnalysisEvent {
        sequence,
        kind: EventKind::Evaluation {
            criterion: "hashin".into(),
            material: "t300_epoxy".into(),
            reserve_factor: Some(2.5),
            mode: "matrix failure".into(),
            label: "matrix compression".into(),
        },
    }
}

/// Counts handled events through shared state, so the test can observe
/// a sink after the bus takes ownership of it.
struct CountingSink {
    count: Arc<AtomicUsize>,
}

impl EventSink for CountingSink {
    fn handle(&mut self, _event: &AnalysisEvent) {
        self.count.fetch_add(1, Ordering::SeqCst);
    }

    fn name(&self) -> &str {
        "counting_sink"
    }
}

// ─── EventBus Tests ──────────────────────────────────────────

#[test]
fn flush_delivers_emitted_events_to_every_sink() {
    let count_a = Arc::new(AtomicUsize::new(0));
    let count_b = Arc::new(AtomicUsize::new(0));

    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        count: count_a.clone(),
    }));
    bus.add_sink(Box::new(CountingSink {
        count: count_b.clone(),
    }));
    assert_eq!(bus.sink_count(), 2);

    for i in 0..3 {
        bus.emit(evaluation_event(i));
    }
    bus.flush();

    assert_eq!(count_a.load(Ordering::SeqCst), 3);
    assert_eq!(count_b.load(Ordering::SeqCst), 3);
}

#[test]
fn disabled_bus_drops_events() {
    let count = Arc::new(AtomicUsize::new(0));
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(CountingSink {
        count: count.clone(),
    }));

    bus.set_enabled(false);
    assert!(!bus.is_enabled());
    bus.emit(evaluation_event(0));
    bus.flush();
    assert_eq!(count.load(Ordering::SeqCst), 0);

    bus.set_enabled(true);
    bus.emit(evaluation_event(1));
    bus.flush();
    assert_eq!(count.load(Ordering::SeqCst), 1);
}

#[test]
fn flush_on_empty_bus_is_a_no_op() {
    let mut bus = EventBus::new();
    bus.flush();
    assert_eq!(bus.sink_count(), 0);
}

// ─── Sink Tests ──────────────────────────────────────────────

#[test]
fn vec_sink_captures_events_in_order() {
    let mut sink = VecSink::new();
    sink.handle(&evaluation_event(0));
    sink.handle(&evaluation_event(1));
    assert_eq!(sink.events.len(), 2);
    assert_eq!(sink.events[0].sequence, 0);
    assert_eq!(sink.events[1].sequence, 1);
}

#[test]
fn json_lines_sink_writes_one_line_per_event() {
    let mut buffer = Vec::new();
    {
        let mut sink = JsonLinesSink::new(&mut buffer);
        sink.handle(&evaluation_event(0));
        sink.handle(&AnalysisEvent {
            sequence: 1,
            kind: EventKind::Fault {
                criterion: "ztl".into(),
                detail: "negative discriminant".into(),
            },
        });
        sink.finalize();
    }

    let text = String::from_utf8(buffer).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("Evaluation"));
    assert!(lines[1].contains("Fault"));

    // Each line parses back into an event.
    let back: AnalysisEvent = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(back.sequence, 0);
}

/// Shared byte buffer, so the test can read what a sink wrote after the
/// bus takes ownership of it.
#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[test]
fn bus_delivers_tessellation_events_to_a_json_lines_sink() {
    let buffer = SharedBuffer::default();
    let mut bus = EventBus::new();
    bus.add_sink(Box::new(JsonLinesSink::new(buffer.clone())));

    bus.emit(AnalysisEvent {
        sequence: 0,
        kind: EventKind::Tessellation {
            criterion: "ztl".into(),
            material: "t300_epoxy".into(),
            quad_count: 288,
            wall_time: 0.002,
        },
    });
    bus.flush();

    let text = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
    assert!(text.contains("Tessellation"));
    assert!(text.contains("\"quad_count\":288"));
}

// ─── Event Serialization Tests ───────────────────────────────

#[test]
fn infinite_reserve_factor_serializes_as_null() {
    let event = AnalysisEvent {
        sequence: 7,
        kind: EventKind::Evaluation {
            criterion: "edge".into(),
            material: "test".into(),
            reserve_factor: None,
            mode: "undamaged".into(),
            label: String::new(),
        },
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"reserve_factor\":null"));
}

#[test]
fn tessellation_event_round_trip() {
    let event = AnalysisEvent {
        sequence: 3,
        kind: EventKind::Tessellation {
            criterion: "sun".into(),
            material: "im7_8552".into(),
            quad_count: 1024,
            wall_time: 0.05,
        },
    };
    let json = serde_json::to_string(&event).unwrap();
    let back: AnalysisEvent = serde_json::from_str(&json).unwrap();
    match back.kind {
        EventKind::Tessellation { quad_count, .. } => assert_eq!(quad_count, 1024),
        other => panic!("unexpected kind: {other:?}"),
    }
}
