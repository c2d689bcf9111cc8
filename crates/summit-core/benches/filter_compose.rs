use criterion::{black_box, criterion_group, criterion_main, Criterion};
use summit_core::query::{QueryPlan, RawFilter};

fn bench_filter_compose(c: &mut Criterion) {
    let filters = vec![
        RawFilter::new("CITY", "EQ", "London"),
        RawFilter::new("TOPIC", "EQ", "Web Frameworks"),
        RawFilter::new("MONTH", "EQ", "6"),
        RawFilter::new("MAX_ATTENDEES", "GT", "10"),
    ];

    c.bench_function("compose_conference_plan", |b| {
        b.iter(|| QueryPlan::for_conferences(black_box(&filters)))
    });

    let rejected = vec![
        RawFilter::new("CITY", "GT", "A"),
        RawFilter::new("TOPIC", "LT", "Z"),
    ];

    c.bench_function("reject_second_inequality_field", |b| {
        b.iter(|| QueryPlan::for_conferences(black_box(&rejected)))
    });
}

criterion_group!(benches, bench_filter_compose);
criterion_main!(benches);
