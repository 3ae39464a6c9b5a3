use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use travelstore_catalog::{
    apply, seed, CategoryFilter, FilterState, NewProduct, Product, ProductId, SortKey,
};
use travelstore_core::Money;

/// Synthetic catalog: the seed rows repeated with shifted ids and prices.
fn synthetic_catalog(size: usize) -> Vec<Product> {
    let base = seed::catalog();
    (0..size)
        .map(|i| {
            let template = &base[i % base.len()];
            Product::new(NewProduct {
                id: ProductId::new(i as u32),
                name: format!("{} {i}", template.name()),
                price: Money::from_cents(template.price().cents() + (i as u64 % 500)),
                category: template.category(),
                image: template.image().to_string(),
                rating: template.rating().value(),
                reviews: template.reviews(),
                description: template.description().to_string(),
            })
            .unwrap()
        })
        .collect()
}

fn bench_filter_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_pipeline");

    let states = [
        ("defaults", FilterState::default()),
        (
            "query_price_ascending",
            FilterState::new("travel", CategoryFilter::All, SortKey::PriceAscending),
        ),
        (
            "category_rating_descending",
            FilterState::new("", CategoryFilter::Electronics, SortKey::RatingDescending),
        ),
    ];

    for size in [100usize, 1_000, 10_000] {
        let catalog = synthetic_catalog(size);
        group.throughput(Throughput::Elements(size as u64));

        for (name, state) in &states {
            group.bench_with_input(BenchmarkId::new(*name, size), &catalog, |b, catalog| {
                b.iter(|| apply(black_box(catalog), black_box(state)));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_filter_pipeline);
criterion_main!(benches);
