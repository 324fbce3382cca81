use criterion::{black_box, criterion_group, criterion_main, Criterion};
use missing_persons::{
    consts::consts::RecordId,
    filter::filter_records,
    model::record::{DisappearanceLocation, MissingPersonRecord},
    render::{card::render_records, markup::to_html},
};

const CITIES: [(&str, &str); 4] = [
    ("Campinas", "SP"),
    ("Niterói", "RJ"),
    ("Belo Horizonte", "MG"),
    ("Recife", "PE"),
];

fn collection(size: usize) -> Vec<MissingPersonRecord> {
    (0..size)
        .map(|index| {
            let (city, state) = CITIES[index % CITIES.len()];

            MissingPersonRecord {
                contact_phone: Some(format!("(11) 9{:04}-{:04}", index % 10_000, index)),
                disappearance_date: Some("2024-05-10T14:30".to_string()),
                disappearance_location: DisappearanceLocation {
                    city: Some(city.to_string()),
                    state: Some(state.to_string()),
                    reference_point: None,
                },
                photo_url: format!("uploads/{}.jpg", index),
                ..MissingPersonRecord::new(
                    RecordId(format!("{:03}", index)),
                    format!("Pessoa {}", index),
                )
            }
        })
        .collect()
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let records = collection(10_000);

    // One keystroke re-filters the whole collection
    c.bench_function("filter 10000 by city", |b| {
        b.iter(|| filter_records(black_box(&records), black_box("recife")))
    });

    c.bench_function("filter 10000 empty query", |b| {
        b.iter(|| filter_records(black_box(&records), black_box("")))
    });

    c.bench_function("render 10000 to html", |b| {
        b.iter(|| to_html(&render_records(black_box(&records))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
