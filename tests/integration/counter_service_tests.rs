//! Integration tests for the item counter: edge detection → tallies →
//! display refresh.

use crate::mock_hw::{MockDelay, MockDisplay, MockHardware, Op, RecordingSink, Timeline};

use sortline::app::events::AppEvent;
use sortline::app::service::CounterService;
use sortline::config::{SystemConfig, Variant};
use sortline::control::counter::Catalog;
use sortline::control::mapping::ItemClass;

struct Rig {
    app: CounterService,
    hw: MockHardware,
    display: MockDisplay,
    delay: MockDelay,
    sink: RecordingSink,
    timeline: Timeline,
}

impl Rig {
    fn new(inputs: &[u8]) -> Self {
        Self::with_config(SystemConfig::for_variant(Variant::ItemCounter), inputs)
    }

    fn with_config(config: SystemConfig, inputs: &[u8]) -> Self {
        let timeline = Timeline::default();
        Self {
            app: CounterService::new(config).unwrap(),
            hw: MockHardware::scripted(inputs),
            display: MockDisplay::new(timeline.clone()),
            delay: MockDelay {
                timeline: timeline.clone(),
            },
            sink: RecordingSink::new(),
            timeline,
        }
    }

    fn tick(&mut self) -> Option<ItemClass> {
        self.app
            .tick(&mut self.hw, &mut self.display, &mut self.delay, &mut self.sink)
    }

    fn iterate(&mut self) {
        self.app
            .iterate(&mut self.hw, &mut self.display, &mut self.delay, &mut self.sink);
    }
}

#[test]
fn start_paints_zero_summary() {
    let mut rig = Rig::new(&[]);
    rig.app.start(&mut rig.display, &mut rig.sink);

    assert_eq!(rig.display.grid.row(0), "Sp:   0, Kn:   0");
    assert_eq!(rig.display.grid.row(1), "Fo:   0, To:   0");
    assert_eq!(rig.sink.events, vec![AppEvent::Started(Variant::ItemCounter)]);
}

#[test]
fn edge_sequence_counts_two_items() {
    let mut rig = Rig::new(&[0, 1, 1, 1, 0, 2]);

    let counted: Vec<Option<ItemClass>> = (0..6).map(|_| rig.tick()).collect();

    assert_eq!(
        counted,
        vec![
            None,
            Some(ItemClass::First),
            None,
            None,
            None,
            Some(ItemClass::Second)
        ]
    );
    let tally = rig.app.tally();
    assert_eq!(tally.count(ItemClass::First), 1);
    assert_eq!(tally.count(ItemClass::Second), 1);
    assert_eq!(tally.total(), 2);
}

#[test]
fn first_sample_counts_when_not_idle() {
    let mut rig = Rig::new(&[3]);
    assert_eq!(rig.tick(), Some(ItemClass::Third));
}

#[test]
fn attention_screen_precedes_blocking_delay_then_summary() {
    let mut rig = Rig::new(&[1]);
    rig.tick();

    assert_eq!(
        rig.timeline.ops(),
        vec![
            Op::Cursor(0, 0),
            Op::Text("Knife           ".into()),
            Op::Cursor(1, 0),
            Op::Text("                ".into()),
            Op::DelayMs(1000),
            Op::Cursor(0, 0),
            Op::Text("Sp:   0, Kn:   1".into()),
            Op::Cursor(1, 0),
            Op::Text("Fo:   0, To:   1".into()),
        ]
    );
}

#[test]
fn idle_and_repeat_samples_leave_display_untouched() {
    let mut rig = Rig::new(&[2, 2, 0, 0]);
    rig.tick();
    rig.timeline.clear();

    for _ in 0..3 {
        assert_eq!(rig.tick(), None);
    }

    assert!(rig.timeline.ops().is_empty());
}

#[test]
fn iterate_adds_loop_delay_after_each_pass() {
    let mut rig = Rig::new(&[0, 2, 2]);
    for _ in 0..3 {
        rig.iterate();
    }

    assert_eq!(rig.timeline.delays(), vec![500, 1000, 500, 500]);
}

#[test]
fn summary_reaches_reference_layout() {
    // 7 spoons, 123 knives, no forks: alternate with idle so each counts.
    let mut script = Vec::new();
    for _ in 0..7 {
        script.extend_from_slice(&[2, 0]);
    }
    for _ in 0..123 {
        script.extend_from_slice(&[1, 0]);
    }
    let mut rig = Rig::new(&script);
    for _ in 0..script.len() {
        rig.tick();
    }

    assert_eq!(rig.display.grid.row(0), "Sp:   7, Kn: 123");
    assert_eq!(rig.display.grid.row(1), "Fo:   0, To: 130");
}

#[test]
fn fruit_catalogue_relabels_screens() {
    let mut config = SystemConfig::for_variant(Variant::ItemCounter);
    config.catalog = Catalog::Fruit;
    let mut rig = Rig::with_config(config, &[3]);
    rig.tick();

    assert!(rig.timeline.texts().contains(&"Banana          ".to_string()));
    assert_eq!(rig.display.grid.row(0), "Ap:   0, Or:   0");
    assert_eq!(rig.display.grid.row(1), "Ba:   1, To:   1");
}

#[test]
fn counted_events_carry_running_totals() {
    let mut rig = Rig::new(&[1, 3, 1]);
    for _ in 0..3 {
        rig.tick();
    }

    let counted: Vec<(u32, u32)> = rig
        .sink
        .events
        .iter()
        .filter_map(|e| match e {
            AppEvent::ItemCounted { count, total, .. } => Some((*count, *total)),
            _ => None,
        })
        .collect();
    assert_eq!(counted, vec![(1, 1), (1, 2), (2, 3)]);
}

#[test]
fn heartbeat_runs_without_detections() {
    let mut rig = Rig::new(&[0; 4]);
    for _ in 0..4 {
        rig.tick();
    }

    assert_eq!(rig.hw.activity, vec![true, false, true, false]);
    assert_eq!(rig.app.tally().total(), 0);
}
