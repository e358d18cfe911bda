//! Beacons published by public drand networks, plus one legacy chained round.

// pedersen-bls-chained, testnet
pub const CHAINED_PUBLIC_KEY: &str = "88a8227b75dba145599d894d33eebde3b36fef900d456ae2cc4388867adb4769c40359f783750a41b4d17e40f578bfdb";
pub const CHAINED_ROUND: u64 = 397089;
pub const CHAINED_PREVIOUS: &str = "a2237ee39a1a6569cb8e02c6e979c07efe1f30be0ac501436bd325015f1cd6129dc56fd60efcdf9158d74ebfa34bfcbd17803dbca6d2ae8bc3a968e4dc582f8710c69de80b2e649663fef5742d22fff7d1619b75d5f222e8c9b8840bc2044bce";
pub const CHAINED_SIGNATURE: &str = "88ccd9a91946bc0bbef2c6c60a09bbf4a247b1d2059522449aa1a35758feddfad85efe818bbde3e1e4ab0c852d96e65f0b1f97f239bf3fc918860ea846cbb500fcf7c9d0dd3d851320374460b5fc596b8cfd629f4c07c7507c259bf9beca850a";
pub const CHAINED_RANDOMNESS: &str = "cd435675735e459fb4d9c68a9d9f7b719e59e0a9f5f86fe6bd86b730d01fba42";

// pedersen-bls-unchained, testnet
pub const UNCHAINED_PUBLIC_KEY: &str = "8d91ae0f4e3cd277cfc46aba26680232b0d5bb4444602cdb23442d62e17f43cdffb1104909e535430c10a6a1ce680a65";
pub const UNCHAINED_ROUND: u64 = 397092;
pub const UNCHAINED_SIGNATURE: &str = "94da96b5b985a22a3d99fa3051a42feb4da9218763f6c836fca3770292dbf4b01f5d378859a113960548d167eaa144250a2c8e34c51c5270152ac2bc7a52632236f746545e0fae52f69068c017745204240d19dae2b4d038cef3c6047fcd6539";
pub const UNCHAINED_RANDOMNESS: &str = "7731783ab8118d7484d0e8e237f3023a4c7ef4532f35016f2e56e89a7570c796";

// bls-unchained-g1-rfc9380, quicknet
pub const QUICKNET_PUBLIC_KEY: &str = "83cf0f2896adee7eb8b5f01fcad3912212c437e0073e911fb90022d3e760183c8c4b450b6a0a6c3ac6a5776a2d1064510d1fec758c921cc22b0e17e63aaf4bcb5ed66304de9cf809bd274ca73bab4af5a6e9c76a4bc09e76eae8991ef5ece45a";
pub const QUICKNET_ROUND: u64 = 1000;
pub const QUICKNET_SIGNATURE: &str = "b44679b9a59af2ec876b1a6b1ad52ea9b1615fc3982b19576350f93447cb1125e342b73a8dd2bacbe47e4b6b63ed5e39";
pub const QUICKNET_RANDOMNESS: &str = "fe290beca10872ef2fb164d2aa4442de4566183ec51c56ff3cd603d930e54fdd";

// legacy-bls-chained, round 42 signed with a key generated from ikm [0x2a; 32];
// the previous signature is round 41 over an empty previous signature
pub const LEGACY_PUBLIC_KEY: &str = "8ae7e5822ba97ab07877ea318e747499da648b27302414f9d0b9bb7e3646d248be90c9fdaddfdb93485a6e9334f01093";
pub const LEGACY_ROUND: u64 = 42;
pub const LEGACY_PREVIOUS: &str = "acc9e0967306d7e265648e49e9bdd8227f0c97e5fbef78243b1763db86954242869b278012851f5d3a32abc97c7f0616001e930ea2910cdd0e0cdad3e3db17ee17e7fbd1acbdcc72de3621cd0a35c598bef2adabc47575fb4f8509d190451586";
pub const LEGACY_SIGNATURE: &str = "8a6552f7d539811e3564a11a63684617b9ba3fb1186a06335921ebd0c7f5119547a9e571ee9de699e137f80477fc1f2f0f1a9e5d62412eae501c5579f9725fa330fca5ace1c99b41135a99b888f30918f8a41e86bf9bd5f4260e62056c9a52a7";
pub const LEGACY_RANDOMNESS: &str = "cace8de75d5c1d6914727cd87adabff61f26c1146971827654940507df6b78b5b12f7024e729facab177a31d773dd45f7d08349bb9d64870b63669d78867035e";
