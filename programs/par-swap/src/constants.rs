/// PDA seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const RESERVE_A_SEED: &[u8] = b"reserve_a";
pub const RESERVE_B_SEED: &[u8] = b"reserve_b";
