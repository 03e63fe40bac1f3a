// Benchmark for week row generation
// Measures the per-frame cost of deriving the visible week

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use learning_journey::ui_egui::views::mini_calendar::{CalendarAction, MiniCalendarState};
use learning_journey::ui_egui::views::week_row::WeekRow;
use learning_journey::models::settings::Settings;

fn bench_week_row(c: &mut Criterion) {
    let mut group = c.benchmark_group("week_row");
    let reference = NaiveDate::from_ymd_opt(2024, 2, 28).unwrap();

    for first_day in [0u8, 1, 6] {
        group.bench_with_input(
            BenchmarkId::new("cells", first_day),
            &first_day,
            |b, &first_day| b.iter(|| WeekRow::cells(black_box(reference), first_day)),
        );
    }

    group.finish();
}

fn bench_week_navigation(c: &mut Criterion) {
    let settings = Settings::default();
    let today = NaiveDate::from_ymd_opt(2025, 10, 19).unwrap();

    c.bench_function("navigate_52_weeks", |b| {
        b.iter(|| {
            let mut calendar = MiniCalendarState::new(today, &settings);
            for _ in 0..52 {
                calendar.apply(black_box(CalendarAction::NextWeek));
            }
            calendar.week()
        })
    });
}

criterion_group!(benches, bench_week_row, bench_week_navigation);
criterion_main!(benches);
