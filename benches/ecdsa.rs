//! ECDSA signing, verification, and key recovery benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use hex_literal::hex;
use koblitz256::ecdsa::{SigningKey, VerifyingKey};
use sha2::{Digest, Sha256};

const SECRET: [u8; 32] = hex!("5EC0A1AA3526F46E6251D8926922A4EF3D8B2198BFF538EC19C063638A5505B9");

fn bench_ecdsa(c: &mut Criterion) {
    let mut group = c.benchmark_group("ecdsa/secp256k1");

    let key = SigningKey::from_bytes(&SECRET).unwrap();
    let prehash = Sha256::digest(b"hello");

    group.bench_function("sign_prehash", |b| {
        b.iter(|| black_box(&key).sign_prehash(black_box(&prehash)).unwrap())
    });

    let verifier = key.verifying_key();
    let signature = key.sign_prehash(&prehash).unwrap().normalize_s();

    group.bench_function("verify_prehash", |b| {
        b.iter(|| {
            black_box(verifier)
                .verify_prehash(black_box(&prehash), black_box(&signature))
                .unwrap()
        })
    });

    let recovery_id = signature.recovery_id().unwrap();

    group.bench_function("recover_from_prehash", |b| {
        b.iter(|| {
            VerifyingKey::recover_from_prehash(
                black_box(&prehash),
                black_box(&signature),
                black_box(recovery_id),
            )
            .unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ecdsa);
criterion_main!(benches);
