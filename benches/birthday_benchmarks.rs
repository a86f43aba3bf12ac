//! Performance benchmarks for the upcoming-birthday query.
//!
//! These benchmarks measure:
//! - The query over books of different sizes
//! - Different window lengths over a fixed book
//! - Contact lookup by name

use chrono::NaiveDate;
use contact_assistant::{ContactBook, ContactRecord};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

/// Build a book of `size` contacts with birthdays spread across the year.
fn create_test_book(size: usize) -> ContactBook {
    let mut book = ContactBook::new();
    for i in 0..size {
        let mut record = ContactRecord::new(format!("Contact {}", i));
        record
            .add_phone(&format!("{:010}", i))
            .expect("generated phone is 10 digits");

        let day = (i % 28) + 1;
        let month = (i % 12) + 1;
        record
            .set_birthday(&format!("{:02}.{:02}.{}", day, month, 1950 + i % 50))
            .expect("generated birthday is a real date");
        book.add_record(record);
    }
    book
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 7).expect("valid date")
}

/// Benchmark the default 7-day query over growing books.
fn bench_upcoming_birthdays_book_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("upcoming_birthdays_book_sizes");

    for size in [10, 100, 1_000, 10_000].iter() {
        let book = create_test_book(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.upcoming_birthdays_at(black_box(today()), 7));
        });
    }

    group.finish();
}

/// Benchmark different window lengths.
fn bench_upcoming_birthdays_windows(c: &mut Criterion) {
    let book = create_test_book(1_000);
    let mut group = c.benchmark_group("upcoming_birthdays_windows");

    for window in [0u32, 7, 30, 366].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(window), window, |b, &window| {
            b.iter(|| book.upcoming_birthdays_at(black_box(today()), window));
        });
    }

    group.finish();
}

/// Benchmark name lookup.
fn bench_find_contact(c: &mut Criterion) {
    let book = create_test_book(10_000);

    c.bench_function("find_contact", |b| {
        b.iter(|| book.find(black_box("Contact 5000")));
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_upcoming_birthdays_book_sizes,
        bench_upcoming_birthdays_windows,
        bench_find_contact
}

criterion_main!(benches);
