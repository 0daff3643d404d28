// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Encryption benchmark
//!
//! This benchmark measures write-in encryption with proof, for every group,
//! both conventions and widths `1..=MAX_WIDTH`. The message has every
//! component equal to the generator.
//!
//! This benchmark can be run with
//!
//! `cargo bench --bench encrypt`

use criterion::measurement::Measurement;
use criterion::{BenchmarkGroup, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::RngCore;
use rand::rngs::OsRng;

use elgamal_writein::config::CryptosystemConfig;
use elgamal_writein::context::{Context, ModPCtx, P256Ctx, RistrettoCtx};
use elgamal_writein::cryptosystem::elgamal::Convention;
use elgamal_writein::cryptosystem::zkpok::ElGamalZkPokWriteIn;
use elgamal_writein::groups::productgroup::Wide;
use elgamal_writein::traits::groups::CryptographicGroup;

const MAX_WIDTH: usize = 8;

fn encrypt_writein<C: Context, M: Measurement>(g: &mut BenchmarkGroup<M>, convention: Convention) {
    let config = CryptosystemConfig {
        convention,
        ..CryptosystemConfig::default()
    };
    let cryptosystem = ElGamalZkPokWriteIn::<C>::new(&config).unwrap();
    let keypair = cryptosystem.generate(&mut OsRng).unwrap();

    for width in 1..=MAX_WIDTH {
        let pk = cryptosystem.wide_public_key(&keypair.pkey, width).unwrap();
        let message = Wide::repeat(&C::G::generator(), width * config.key_width).unwrap();
        let mut label = [0u8; 10];
        OsRng.fill_bytes(&mut label);

        let id = BenchmarkId::new(format!("{}/{convention:?}", C::G::NAME), width);
        g.throughput(Throughput::Elements(width as u64));
        g.bench_function(id, |b| {
            b.iter(|| cryptosystem.encrypt(&label, &pk, &message, &mut OsRng).unwrap())
        });
    }
}

fn bench_encrypt(c: &mut Criterion) {
    let mut group = c.benchmark_group("writein_encrypt");

    for convention in Convention::ALL {
        encrypt_writein::<ModPCtx, _>(&mut group, convention);
        encrypt_writein::<RistrettoCtx, _>(&mut group, convention);
        encrypt_writein::<P256Ctx, _>(&mut group, convention);
    }

    group.finish();
}

criterion_group!(benches, bench_encrypt);
criterion_main!(benches);
