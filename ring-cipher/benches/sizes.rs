use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fake::Fake;
use fake::faker::lorem::en::Words;
use ring_cipher::cipher::{AffineCipher, Cipher, CipherConfig, MatrixCipher, VigenereCipher};
use ring_cipher::preset::PRINTABLE_ASCII;

fn make_string(len: usize) -> String {
    // Generate approximately len characters by repeating word sequences
    let mut s = String::with_capacity(len);
    while s.len() < len {
        let words: Vec<String> = Words(10..20).fake();
        if !s.is_empty() {
            s.push(' ');
        }
        s.push_str(&words.join(" "));
        if s.len() > len {
            s.truncate(len);
        }
    }
    s
}

fn setup_ciphers() -> Vec<(&'static str, Box<dyn Cipher>)> {
    let config = CipherConfig::try_with(10, 20, Some(12345)).expect("cipher config");
    let alphabet = PRINTABLE_ASCII.clone();
    vec![
        (
            "affine",
            Box::new(AffineCipher::new(alphabet.clone(), &config).expect("affine")) as Box<dyn Cipher>,
        ),
        (
            "vigenere",
            Box::new(VigenereCipher::new(alphabet.clone(), &config).expect("vigenere")) as Box<dyn Cipher>,
        ),
        (
            "matrix",
            Box::new(MatrixCipher::new(alphabet, &config).expect("matrix")) as Box<dyn Cipher>,
        ),
    ]
}

fn bench_sizes(c: &mut Criterion) {
    let ciphers = setup_ciphers();
    let sizes: [(usize, &str); 3] = [(1_000, "1k"), (10_000, "10k"), (100_000, "100k")];

    for (name, cipher) in &ciphers {
        let mut group = c.benchmark_group(format!("{} Sizes Encrypt/Decrypt", name));

        for (len, label) in sizes {
            let data = make_string(len);
            // precompute ciphertext for decrypt bench to avoid measuring encrypt twice
            let ciphertext = cipher.encrypt(&data).expect("encrypt");

            group.bench_with_input(BenchmarkId::new("encrypt", label), &data, |b, d| {
                b.iter(|| black_box(cipher.encrypt(black_box(d)).expect("encrypt")));
            });

            group.bench_with_input(BenchmarkId::new("decrypt", label), &ciphertext, |b, ctext| {
                b.iter(|| black_box(cipher.decrypt(black_box(ctext)).expect("decrypt")));
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sizes);
criterion_main!(benches);
