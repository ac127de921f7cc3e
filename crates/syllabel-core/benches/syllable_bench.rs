use criterion::{black_box, criterion_group, criterion_main, Criterion};
use syllabel_core::{all_groups_single_vowel, build_syllables, is_valid_label, Phoneme};

fn bench_label_validation(c: &mut Criterion) {
    let words = vec![
        (vec!["K", "AH0", "N", "T", "R", "OW1", "L"], "kah/ntrowl"),
        (vec!["B", "AH0", "N", "AE1", "N", "AH0"], "bah/nae/nah"),
        (vec!["TH", "AW1", "Z", "AH0", "N", "D"], "thaw/zahnd"),
        (vec!["IH2", "N", "F", "ER0", "M", "EY1", "SH", "AH0", "N"], "ihn/fer/mey/shahn"),
    ];
    let words: Vec<(Vec<Phoneme>, &str)> = words
        .into_iter()
        .map(|(tokens, label)| (Phoneme::parse_sequence(&tokens).unwrap(), label))
        .collect();

    c.bench_function("is_valid_label_single", |b| {
        b.iter(|| is_valid_label(black_box(&words[0].0), black_box(words[0].1)));
    });

    c.bench_function("build_and_check_batch_4", |b| {
        b.iter(|| {
            for (phonemes, label) in &words {
                let groups = build_syllables(black_box(phonemes), black_box(label));
                assert!(all_groups_single_vowel(&groups));
            }
        });
    });
}

criterion_group!(benches, bench_label_validation);
criterion_main!(benches);
