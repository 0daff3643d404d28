// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 Free & Fair
// See LICENSE.md for details

//! Serde implementations built on VSerializable

use crate::context::{Context, ModPCtx, P256Ctx, RistrettoCtx};
use crate::cryptosystem::elgamal;
use crate::utils::serialization::{VDeserializable, VSerializable};
use crate::zkp::sigma::Proof;
use serde::{self, Deserializer, Serializer, de::Error};

/// Implement serde serialization for length prefixed serializable types.
macro_rules! implement_serde_v {
    ($type:ty) => {
        impl<'de, C: Context> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
                Self::deser(&bytes).map_err(D::Error::custom)
            }
        }

        impl<C: Context> serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_bytes(&self.ser())
            }
        }
    };
}

/// Implement serde serialization for the unit structs of contexts.
macro_rules! implement_serde_ctx {
    ($type:ident) => {
        impl<'de> serde::Deserialize<'de> for $type {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                struct UnitVisitor;

                impl serde::de::Visitor<'_> for UnitVisitor {
                    type Value = $type;

                    fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                        f.write_str(concat!("unit struct ", stringify!($type)))
                    }

                    fn visit_unit<E: serde::de::Error>(self) -> Result<$type, E> {
                        Ok($type)
                    }
                }

                deserializer.deserialize_unit_struct(stringify!($type), UnitVisitor)
            }
        }

        impl serde::Serialize for $type {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: Serializer,
            {
                serializer.serialize_unit_struct(stringify!($type))
            }
        }
    };
}

// elgamal::PublicKey
implement_serde_v!(elgamal::PublicKey<C>);

// elgamal::PrivateKey
implement_serde_v!(elgamal::PrivateKey<C>);

// elgamal::KeyPair
implement_serde_v!(elgamal::KeyPair<C>);

// elgamal::Ciphertext
implement_serde_v!(elgamal::Ciphertext<C>);

// Proof
impl<'de, Cm: VDeserializable, Rs: VDeserializable> serde::Deserialize<'de> for Proof<Cm, Rs> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes: Vec<u8> = serde::Deserialize::deserialize(deserializer)?;
        Self::deser(&bytes).map_err(D::Error::custom)
    }
}

impl<Cm: VSerializable, Rs: VSerializable> serde::Serialize for Proof<Cm, Rs> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_bytes(&self.ser())
    }
}

implement_serde_ctx!(ModPCtx);
implement_serde_ctx!(RistrettoCtx);
implement_serde_ctx!(P256Ctx);

#[cfg(test)]
mod tests {

    use crate::config::CryptosystemConfig;
    use crate::context::{Context, ModPCtx as MCtx, P256Ctx, RistrettoCtx as RCtx};
    use crate::cryptosystem::elgamal::{self, Convention};
    use crate::cryptosystem::zkpok::ElGamalZkPokWriteIn;
    use crate::traits::groups::CryptographicGroup;
    use crate::zkp::sigma::ProofOf;
    use crate::zkp::writein::WriteInAdapter;
    use rand::rngs::OsRng;

    fn round_trip<T>(value: &T) -> T
    where
        T: serde::Serialize + serde::de::DeserializeOwned,
    {
        let serialized = bincode::serde::encode_to_vec(value, bincode::config::standard()).unwrap();
        let (deserialized, _): (T, _) =
            bincode::serde::decode_from_slice(&serialized, bincode::config::standard()).unwrap();

        deserialized
    }

    #[test]
    fn test_serde_elgamal_key_pair() {
        let elgamal = elgamal::ElGamal::<P256Ctx>::new(Convention::Standard, 2, 50).unwrap();
        let kp = elgamal.generate(&mut OsRng).unwrap();

        assert_eq!(kp, round_trip(&kp));
        assert_eq!(kp.pkey, round_trip(&kp.pkey));
        assert_eq!(kp.skey, round_trip(&kp.skey));
    }

    #[test]
    fn test_serde_elgamal_ciphertext() {
        let elgamal = elgamal::ElGamal::<RCtx>::new(Convention::Variant, 1, 50).unwrap();
        let kp = elgamal.generate(&mut OsRng).unwrap();
        let pk = elgamal.wide_public_key(&kp.pkey, 2).unwrap();
        let m = <RCtx as Context>::G::random_elements(2, &mut OsRng, 50).unwrap();
        let ct = elgamal.encrypt(&pk, &m, &mut OsRng).unwrap();

        assert_eq!(ct, round_trip(&ct));
    }

    #[test]
    fn test_serde_writein_proof() {
        let cryptosystem = ElGamalZkPokWriteIn::<MCtx>::new(&CryptosystemConfig::default()).unwrap();
        let kp = cryptosystem.generate(&mut OsRng).unwrap();
        let pk = cryptosystem.wide_public_key(&kp.pkey, 3).unwrap();
        let m = <MCtx as Context>::G::random_elements(3, &mut OsRng, 50).unwrap();
        let (ct, proof) = cryptosystem.encrypt(b"label", &pk, &m, &mut OsRng).unwrap();

        let deserialized: ProofOf<MCtx, WriteInAdapter> = round_trip(&proof);
        assert_eq!(proof, deserialized);
        assert!(cryptosystem.verify(b"label", &pk, &ct, &deserialized).unwrap());
    }

    #[test]
    fn test_serde_config() {
        let config = CryptosystemConfig {
            convention: Convention::Variant,
            key_width: 3,
            stat_dist: 64,
        };

        assert_eq!(config, round_trip(&config));
        assert_eq!(MCtx, round_trip(&MCtx));
    }

    #[derive(Debug, PartialEq, serde::Serialize, serde::Deserialize)]
    struct Tagged {
        ctx: RCtx,
        value: u32,
        pctx: P256Ctx,
        tail: Vec<u8>,
    }

    #[test]
    fn test_serde_embedded_context() {
        let tagged = Tagged {
            ctx: RCtx,
            value: 7,
            pctx: P256Ctx,
            tail: vec![1, 2, 3],
        };
        let bytes = bincode::serde::encode_to_vec(&tagged, bincode::config::standard()).unwrap();
        let (decoded, read): (Tagged, usize) =
            bincode::serde::decode_from_slice(&bytes, bincode::config::standard()).unwrap();

        assert_eq!(tagged, decoded);
        assert_eq!(read, bytes.len());
    }
}
