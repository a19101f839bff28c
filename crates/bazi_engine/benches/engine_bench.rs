use bazi_base::AnalysisConfig;
use bazi_engine::{BirthInput, FixedCalendar, Gender, LunarDay, calculate_bazi, resolve_chart};
use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn calendar() -> FixedCalendar {
    let mut cal = FixedCalendar::new();
    let days = [((2000, 1, 1), "Mậu Ngọ"), ((2000, 1, 2), "Kỷ Mùi")];
    for ((y, m, d), name) in days {
        if let Some(date) = NaiveDate::from_ymd_opt(y, m, d) {
            cal.insert(
                date,
                LunarDay {
                    day_name: name.to_string(),
                    year_name: "Kỷ Mão".to_string(),
                    solar_term: "Đông chí".to_string(),
                    lunar_month: 11,
                },
            );
        }
    }
    cal
}

fn engine_bench(c: &mut Criterion) {
    let cal = calendar();
    let config = AnalysisConfig::default();
    let day = BirthInput::new(Gender::Male, 2000, 1, 1, 10, 0);
    let late = BirthInput::new(Gender::Male, 2000, 1, 1, 23, 30);

    let mut group = c.benchmark_group("engine");
    group.bench_function("resolve_chart", |b| {
        b.iter(|| resolve_chart(&cal, black_box(&day)))
    });
    group.bench_function("resolve_chart_night_zi", |b| {
        b.iter(|| resolve_chart(&cal, black_box(&late)))
    });
    group.bench_function("calculate_bazi", |b| {
        b.iter(|| calculate_bazi(&cal, black_box(&day), &config))
    });
    group.finish();
}

criterion_group!(benches, engine_bench);
criterion_main!(benches);
