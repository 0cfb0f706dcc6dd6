// SPDX-License-Identifier: MPL-2.0
use comic_daily::news::feed::parse_feed;
use comic_daily::news::topics::{trending_topics, DEFAULT_TOPIC_LIMIT};
use comic_daily::news::Edition;
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn sample_feed(items: usize) -> String {
    let body: String = (0..items)
        .map(|n| {
            format!(
                "<item><title>Robot {n} learns deep learning</title>\
                 <guid>story-{n}</guid><link>https://example.com/{n}</link>\
                 <description>&lt;p&gt;An &amp;quot;LLM&amp;quot; walks into a bar.&lt;/p&gt;</description>\
                 <pubDate>Mon, 03 Mar 2025 10:00:00 GMT</pubDate></item>"
            )
        })
        .collect();
    format!("<rss version=\"2.0\"><channel><title>bench</title>{body}</channel></rss>")
}

fn front_page_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("front_page");
    let feed = sample_feed(60);

    group.bench_function("parse_feed_60", |b| {
        b.iter(|| black_box(parse_feed(black_box(&feed), "bench", 60)));
    });

    let items = parse_feed(&feed, "bench", 60).unwrap_or_default();

    group.bench_function("edition_and_partition", |b| {
        b.iter(|| {
            let edition = Edition::new(black_box(items.clone()));
            let page = edition.front_page();
            black_box((page.hero().is_some(), page.side().len(), page.archive().len()))
        });
    });

    group.bench_function("trending_topics", |b| {
        b.iter(|| black_box(trending_topics(black_box(&items), DEFAULT_TOPIC_LIMIT)));
    });

    group.finish();
}

criterion_group!(benches, front_page_benchmark);
criterion_main!(benches);
