use criterion::{Criterion, black_box, criterion_group, criterion_main};
use bazi_base::{
    AnalysisConfig, BaziChart, HeavenlyStem, SolarTerm, analyze_chart, calculate_shen_sha,
    evaluate_interactions, hour_pillar, month_pillar, parse_sexagenary, score_elements,
};

fn sample_chart() -> BaziChart {
    let pillars = ["Canh Ngọ", "Tân Tỵ", "Giáp Tý", "Tân Mùi"].map(parse_sexagenary);
    match pillars {
        [Ok(y), Ok(m), Ok(d), Ok(h)] => BaziChart::new(y, m, d, h),
        _ => panic!("sample chart names must parse"),
    }
}

fn pillar_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("pillars");
    group.bench_function("parse_sexagenary", |b| {
        b.iter(|| parse_sexagenary(black_box("Nhâm Thân")))
    });
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(14), black_box(HeavenlyStem::Jia)))
    });
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(HeavenlyStem::Geng), black_box(SolarTerm::LiXia)))
    });
    group.finish();
}

fn analysis_bench(c: &mut Criterion) {
    let chart = sample_chart();
    let config = AnalysisConfig::default();
    let interactions = evaluate_interactions(&chart);

    let mut group = c.benchmark_group("analysis");
    group.bench_function("evaluate_interactions", |b| {
        b.iter(|| evaluate_interactions(black_box(&chart)))
    });
    group.bench_function("score_elements", |b| {
        b.iter(|| score_elements(black_box(&chart), &interactions, &config.scoring))
    });
    group.bench_function("calculate_shen_sha", |b| {
        b.iter(|| calculate_shen_sha(black_box(&chart)))
    });
    group.bench_function("analyze_chart", |b| {
        b.iter(|| analyze_chart(black_box(&chart), &config))
    });
    group.finish();
}

criterion_group!(benches, pillar_bench, analysis_bench);
criterion_main!(benches);
