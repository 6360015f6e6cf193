// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_toggle::group::RadioGroup;
use understory_toggle::target::{
    Cursor, HitRegion, ListenerId, PointerEventKind, PointerEvents, Timeline, ToggleTarget,
};
use understory_toggle::{Label, ToggleButton, ToggleOptions};

#[derive(Default)]
struct Sink {
    seeks: u64,
}

impl PointerEvents for Sink {
    fn subscribe(&mut self, _kind: PointerEventKind, _listener: ListenerId) {}
    fn unsubscribe(&mut self, _kind: PointerEventKind, _listener: ListenerId) {}
}

impl Timeline for Sink {
    fn seek_and_stop(&mut self, label: &Label) {
        black_box(label);
        self.seeks += 1;
    }
    fn seek_and_play(&mut self, label: &Label) {
        black_box(label);
        self.seeks += 1;
    }
    fn is_paused(&self) -> bool {
        true
    }
    fn set_paused(&mut self, _paused: bool) {}
}

impl HitRegion for Sink {
    fn set_actions_enabled(&mut self, _enabled: bool) {}
    fn timeline(&mut self) -> Option<&mut dyn Timeline> {
        Some(self)
    }
}

impl ToggleTarget for Sink {
    type HitArea = Self;

    fn pointer_events(&mut self) -> Option<&mut dyn PointerEvents> {
        Some(self)
    }
    fn timeline(&mut self) -> Option<&mut dyn Timeline> {
        Some(self)
    }
    fn set_cursor(&mut self, _cursor: Option<Cursor>) {}
    fn set_mouse_children(&mut self, _enabled: bool) {}
    fn set_hit_area(&mut self, _area: Self) {}
}

const CLICK: [PointerEventKind; 4] = [
    PointerEventKind::RollOver,
    PointerEventKind::MouseDown,
    PointerEventKind::PressUp,
    PointerEventKind::RollOut,
];

fn bench_handle_event(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle/handle_event");

    for clicks in [1_u64, 64, 1_024] {
        group.throughput(Throughput::Elements(clicks * CLICK.len() as u64));
        group.bench_with_input(BenchmarkId::new("click", clicks), &clicks, |b, &clicks| {
            let mut sink = Sink::default();
            let mut toggle = ToggleButton::new(&mut sink, ToggleOptions::new());
            b.iter(|| {
                for _ in 0..clicks {
                    for kind in CLICK {
                        black_box(toggle.handle_event(&mut sink, Some(kind)));
                    }
                }
            });
        });
    }

    group.finish();
}

fn bench_radio_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle/radio_commit");

    for members in [4_u32, 64, 512] {
        group.bench_with_input(
            BenchmarkId::new("rotate", members),
            &members,
            |b, &members| {
                let mut radio = RadioGroup::new();
                for key in 0..members {
                    radio.insert(key);
                }
                let mut next = 0;
                b.iter(|| {
                    black_box(radio.commit(&next, true));
                    next = (next + 1) % members;
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_handle_event, bench_radio_commit);
criterion_main!(benches);
