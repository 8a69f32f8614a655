//! Benchmark suite for trend model fitting.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use series_spi::Observation;
use trend_core::{ForecastRequest, ModelSpec, TrendForecaster};

fn create_series(size: usize) -> Vec<Observation> {
    (0..size)
        .map(|i| {
            let trend = 64.0 - i as f64 * 0.4;
            let noise = (i as f64 * 1.3).sin() * 0.3;
            Observation::new(2001 + i as i32, trend + noise)
        })
        .collect()
}

fn bench_models(c: &mut Criterion) {
    let forecaster = TrendForecaster::new();
    let request = ForecastRequest::default().with_floor(0.0);

    let mut group = c.benchmark_group("FitAndPredict");

    for size in [23usize, 50, 100].iter() {
        // keep the horizon after the last observation for every size
        let series = create_series(*size);
        let horizon = series[series.len() - 1].year + 25;
        let arima_request = ForecastRequest::through(horizon - 24, horizon).unwrap();

        for spec in [
            ModelSpec::polynomial(2),
            ModelSpec::log_linear(),
        ] {
            group.bench_with_input(BenchmarkId::new(spec.describe(), size), &series, |b, series| {
                b.iter(|| forecaster.fit_and_predict(black_box(series), &spec, black_box(&request)));
            });
        }

        group.bench_with_input(
            BenchmarkId::new(ModelSpec::arima(1, 1, 1).describe(), size),
            &series,
            |b, series| {
                b.iter(|| {
                    forecaster.fit_and_predict(
                        black_box(series),
                        &ModelSpec::arima(1, 1, 1),
                        black_box(&arima_request),
                    )
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_models);
criterion_main!(benches);
