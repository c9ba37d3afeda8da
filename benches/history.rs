//! History and dispatch performance benchmarks.

#![allow(clippy::semicolon_if_nothing_returned)]

use criterion::{Criterion, criterion_group, criterion_main};
use minutes_editor::{Command, EditSurface, EditorSession, HistoryLog, MarkupSurface, SelectionRange};
use std::hint::black_box;

fn history_push(c: &mut Criterion) {
    c.bench_function("history_push_100", |b| {
        b.iter(|| {
            let mut log = HistoryLog::new("seed");
            for i in 0..100 {
                log.push(black_box(&format!("<p>{i}</p>")));
            }
            log
        });
    });
}

fn history_walk(c: &mut Criterion) {
    let mut seeded = HistoryLog::new("seed");
    for i in 0..100 {
        seeded.push(&format!("<p>{i}</p>"));
    }

    c.bench_function("history_undo_redo_cycle", |b| {
        b.iter(|| {
            let mut log = seeded.clone();
            while log.undo().is_some() {}
            while log.redo().is_some() {}
            log
        });
    });
}

fn dispatch_bold(c: &mut Criterion) {
    c.bench_function("dispatch_bold", |b| {
        b.iter(|| {
            let mut session =
                EditorSession::mount(MarkupSurface::new(), black_box("<p>Hello</p>"), None);
            session
                .surface_mut()
                .set_selection(SelectionRange::new(3, 8));
            session.capture_selection();
            session.dispatch(Command::Bold);
            session
        });
    });
}

criterion_group!(benches, history_push, history_walk, dispatch_bold);
criterion_main!(benches);
