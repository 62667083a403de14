use criterion::*;
use lookup_rs::{linear_scan, Corpus, Trie};
use once_cell::sync::Lazy;

static CORPUS: Lazy<Corpus> = Lazy::new(|| {
    Corpus::from_words(
        [
            "ant", "antler", "apple", "applet", "apply", "art", "cart", "cat", "catalog",
            "concatenate", "dog", "doghouse", "scatter", "test", "tea",
        ]
        .iter()
        .map(|w| w.to_string())
        .collect(),
    )
});

fn trie_build() -> Trie<String> {
    let mut trie = Trie::default();
    for word in CORPUS.words() {
        trie.insert(word, word.clone());
    }
    trie
}

fn linear_benchmark(c: &mut Criterion) {
    c.bench_function("linear scan", |b| {
        b.iter(|| {
            let mut trie = Trie::default();
            linear_scan(black_box("cat"), &CORPUS, &mut trie)
        })
    });
}

fn trie_benchmark(c: &mut Criterion) {
    let trie = trie_build();
    c.bench_function("trie search", |b| b.iter(|| trie.search(black_box("cat"))));
}

criterion_group!(benches, linear_benchmark, trie_benchmark);
criterion_main!(benches);
