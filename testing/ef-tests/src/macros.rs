#[macro_export]
macro_rules! test_consensus_type {
    ($struct_name:ident) => {
        paste::paste! {
            #[cfg(test)]
            #[allow(non_snake_case)]
            mod [<tests_ $struct_name>] {
                use super::*;
                use rstest::rstest;
                use serde_yaml::Value;
                use std::{path::PathBuf, str::FromStr};
                use tree_hash::TreeHash;
                use ssz::Decode;
                use ssz::Encode;

                #[rstest]
                #[case("case_0")]
                #[case("case_1")]
                #[case("case_2")]
                #[case("case_3")]
                #[case("case_4")]
                fn test_type(#[case] case: &str) {
                    let path = PathBuf::from(format!(
                        "mainnet/tests/mainnet/electra/ssz_static/{}/ssz_random/{case}",
                        stringify!($struct_name)
                    ));

                    let hash_root = {
                        let roots = std::fs::read_to_string(path.join("roots.yaml"))
                            .expect("cannot find test asset");
                        let value: Value = serde_yaml::from_str(&roots).unwrap();
                        alloy_primitives::B256::from_str(value.get("root").unwrap().as_str().unwrap())
                            .unwrap()
                    };

                    let content = {
                        let value = std::fs::read_to_string(path.join("value.yaml"))
                            .expect("cannot find test asset");
                        serde_yaml::from_str::<$struct_name>(&value).unwrap()
                    };

                    let ssz = $crate::utils::read_ssz_snappy(&path.join("serialized.ssz_snappy"))
                        .expect("cannot find test asset");

                    assert_eq!(ssz, content.as_ssz_bytes());
                    assert_eq!(content, $struct_name::from_ssz_bytes(&ssz).unwrap());
                    assert_eq!(hash_root, content.tree_hash_root());
                }
            }
        }
    };
}
