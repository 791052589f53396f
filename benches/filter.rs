// benches/filter.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use peg_selector::filter::{FilterCriteria, matching_indices};
use peg_selector::store::load_table_from_str;
use peg_selector::{Table, derive_filter_domains};

const PARTNERS: [&str; 5] = ["JenKem", "NOF", "Nanocs", "Avanti", "Creative PEGWorks"];
const ARCHS: [&str; 4] = ["Linear", "4-Arm", "8-Arm", "Branched"];
const GROUPS: [&str; 6] = ["NHS Ester", "Maleimide", "Amine", "Azide", "Thiol", "Silane"];

/// Synthetic catalogue, parsed through the real loader.
fn synthetic(n: usize) -> Table {
    let mut csv = String::from(
        "Product Name,Commercial Partner,Polymer Architecture,Functional Group,Molecular Weight,Product URL\n",
    );
    for i in 0..n {
        csv.push_str(&format!(
            "PEG product {i},{},{},{},{},https://example.com/{i}\n",
            PARTNERS[i % PARTNERS.len()],
            ARCHS[i % ARCHS.len()],
            GROUPS[i % GROUPS.len()],
            (i % 80) as f64 * 0.5,
        ));
    }
    load_table_from_str(&csv).expect("synthetic catalogue")
}

fn bench_filter(c: &mut Criterion) {
    let table = synthetic(20_000);

    c.bench_function("derive_domains", |b| {
        b.iter(|| derive_filter_domains(black_box(&table)).unwrap())
    });

    let mut criteria = FilterCriteria {
        molecular_weight_range: Some((5.0, 25.0)),
        ..Default::default()
    };
    criteria.partners.extend(["JenKem".to_string(), "NOF".to_string()]);
    criteria.set_name_query("product 1");

    c.bench_function("matching_indices", |b| {
        b.iter(|| matching_indices(black_box(&table), black_box(&criteria)).unwrap().len())
    });
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
