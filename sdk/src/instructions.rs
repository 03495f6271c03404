//! Low-level Anchor instruction builders.
//!
//! Each function constructs a [`solana_sdk::instruction::Instruction`] ready
//! for signing and submission.  Account order mirrors the Anchor
//! `#[derive(Accounts)]` structs in the on-chain program exactly.
//!
//! Anchor instruction discriminators: `sha256("global:{name}")[..8]`.

use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    sysvar,
};
use std::str::FromStr;

// ─── Well-known program IDs ───────────────────────────────────────────────────

pub(crate) fn spl_token_id() -> Pubkey {
    Pubkey::from_str("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA").unwrap()
}

pub(crate) fn ata_program_id() -> Pubkey {
    Pubkey::from_str("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL").unwrap()
}

// ─── PDA seeds (mirrors programs/par-swap/src/constants.rs) ──────────────────

pub const POOL_SEED:           &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const RESERVE_A_SEED:      &[u8] = b"reserve_a";
pub const RESERVE_B_SEED:      &[u8] = b"reserve_b";

// ─── PDA derivation helpers ───────────────────────────────────────────────────

/// Derive the singleton pool PDA.
pub fn derive_pool(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED], program_id)
}

/// Derive the pool-authority PDA that signs for reserve payouts.
pub fn derive_pool_authority(program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_AUTHORITY_SEED], program_id)
}

/// Derive the asset-A reserve PDA for a mint.
pub fn derive_reserve_a(asset_a_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RESERVE_A_SEED, asset_a_mint.as_ref()], program_id)
}

/// Derive the asset-B reserve PDA for a mint.
pub fn derive_reserve_b(asset_b_mint: &Pubkey, program_id: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[RESERVE_B_SEED, asset_b_mint.as_ref()], program_id)
}

/// Derive the Associated Token Account for a wallet + mint.
pub fn derive_ata(wallet: &Pubkey, mint: &Pubkey) -> Pubkey {
    let token_prog = spl_token_id();
    Pubkey::find_program_address(
        &[wallet.as_ref(), token_prog.as_ref(), mint.as_ref()],
        &ata_program_id(),
    )
    .0
}

// ─── Discriminator ────────────────────────────────────────────────────────────

fn disc(name: &str) -> [u8; 8] {
    let preimage = format!("global:{name}");
    let h = solana_sdk::hash::hash(preimage.as_bytes());
    h.to_bytes()[..8].try_into().unwrap()
}

// ─── initialize ──────────────────────────────────────────────────────────────

/// Build the `initialize` instruction.
///
/// All pool accounts are PDAs, so no extra signers are needed beyond `admin`.
pub fn initialize_ix(
    program_id:   &Pubkey,
    admin:        &Pubkey,
    asset_a_mint: &Pubkey,
    asset_b_mint: &Pubkey,
) -> Instruction {
    let (pool, _)           = derive_pool(program_id);
    let (pool_authority, _) = derive_pool_authority(program_id);
    let (reserve_a, _)      = derive_reserve_a(asset_a_mint, program_id);
    let (reserve_b, _)      = derive_reserve_b(asset_b_mint, program_id);

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*admin,                  true),   // mut + signer
            AccountMeta::new_readonly(*asset_a_mint,  false),
            AccountMeta::new_readonly(*asset_b_mint,  false),
            AccountMeta::new(pool,                    false),  // mut PDA (init)
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(reserve_a,               false),  // mut PDA (init)
            AccountMeta::new(reserve_b,               false),  // mut PDA (init)
            AccountMeta::new_readonly(spl_token_id(), false),
            AccountMeta::new_readonly(Pubkey::default(), false), // system program
            AccountMeta::new_readonly(sysvar::rent::ID, false),
        ],
        data: disc("initialize").to_vec(),
    }
}

// ─── swap_a_to_b / swap_b_to_a ───────────────────────────────────────────────

/// Build the `swap_a_to_b` instruction.
///
/// `user_asset_a` is debited and `user_asset_b` credited; both must be owned
/// by `user` and tagged with the pool's mints.
#[allow(clippy::too_many_arguments)]
pub fn swap_a_to_b_ix(
    program_id:   &Pubkey,
    user:         &Pubkey,
    asset_a_mint: &Pubkey,
    asset_b_mint: &Pubkey,
    user_asset_a: &Pubkey,
    user_asset_b: &Pubkey,
    amount:       u64,
) -> Instruction {
    swap_ix_inner(
        "swap_a_to_b",
        program_id,
        user,
        asset_a_mint,
        asset_b_mint,
        user_asset_a,
        user_asset_b,
        amount,
    )
}

/// Build the `swap_b_to_a` instruction.
///
/// `user_asset_b` is debited and `user_asset_a` credited; both must be owned
/// by `user` and tagged with the pool's mints.
#[allow(clippy::too_many_arguments)]
pub fn swap_b_to_a_ix(
    program_id:   &Pubkey,
    user:         &Pubkey,
    asset_a_mint: &Pubkey,
    asset_b_mint: &Pubkey,
    user_asset_a: &Pubkey,
    user_asset_b: &Pubkey,
    amount:       u64,
) -> Instruction {
    swap_ix_inner(
        "swap_b_to_a",
        program_id,
        user,
        asset_a_mint,
        asset_b_mint,
        user_asset_a,
        user_asset_b,
        amount,
    )
}

/// Both swap directions share the same account list; only the
/// discriminator differs.
#[allow(clippy::too_many_arguments)]
fn swap_ix_inner(
    name:         &str,
    program_id:   &Pubkey,
    user:         &Pubkey,
    asset_a_mint: &Pubkey,
    asset_b_mint: &Pubkey,
    user_asset_a: &Pubkey,
    user_asset_b: &Pubkey,
    amount:       u64,
) -> Instruction {
    let (pool, _)           = derive_pool(program_id);
    let (pool_authority, _) = derive_pool_authority(program_id);
    let (reserve_a, _)      = derive_reserve_a(asset_a_mint, program_id);
    let (reserve_b, _)      = derive_reserve_b(asset_b_mint, program_id);

    let mut data = disc(name).to_vec();
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new(*user,                   true),   // mut + signer
            AccountMeta::new_readonly(pool,           false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(reserve_a,               false),  // mut
            AccountMeta::new(reserve_b,               false),  // mut
            AccountMeta::new(*user_asset_a,           false),  // mut
            AccountMeta::new(*user_asset_b,           false),  // mut
            AccountMeta::new_readonly(*asset_a_mint,  false),
            AccountMeta::new_readonly(*asset_b_mint,  false),
            AccountMeta::new_readonly(spl_token_id(), false),
        ],
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    #[test]
    fn pool_derivation_is_deterministic() {
        let program_id = pk(7);
        assert_eq!(derive_pool(&program_id), derive_pool(&program_id));
        assert_eq!(
            derive_pool_authority(&program_id),
            derive_pool_authority(&program_id)
        );
    }

    #[test]
    fn authority_differs_per_program_identity() {
        let (auth_x, _) = derive_pool_authority(&pk(1));
        let (auth_y, _) = derive_pool_authority(&pk(2));
        assert_ne!(auth_x, auth_y);
    }

    #[test]
    fn reserves_differ_per_mint_and_side() {
        let program_id = pk(7);
        let mint = pk(9);
        let (ra, _) = derive_reserve_a(&mint, &program_id);
        let (rb, _) = derive_reserve_b(&mint, &program_id);
        assert_ne!(ra, rb);
        let (ra_other, _) = derive_reserve_a(&pk(10), &program_id);
        assert_ne!(ra, ra_other);
    }

    #[test]
    fn swap_data_is_discriminator_plus_amount() {
        let ix = swap_a_to_b_ix(&pk(7), &pk(1), &pk(2), &pk(3), &pk(4), &pk(5), 100_000_000);
        assert_eq!(ix.data.len(), 8 + 8);
        assert_eq!(&ix.data[8..], &100_000_000u64.to_le_bytes());
        // The two directions differ only in the discriminator.
        let rev = swap_b_to_a_ix(&pk(7), &pk(1), &pk(2), &pk(3), &pk(4), &pk(5), 100_000_000);
        assert_ne!(ix.data[..8], rev.data[..8]);
        assert_eq!(ix.accounts.len(), rev.accounts.len());
    }

    #[test]
    fn swap_marks_user_and_token_accounts_writable() {
        let ix = swap_a_to_b_ix(&pk(7), &pk(1), &pk(2), &pk(3), &pk(4), &pk(5), 1);
        assert_eq!(ix.accounts.len(), 10);
        assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable); // user
        assert!(!ix.accounts[1].is_writable); // pool
        assert!(!ix.accounts[2].is_writable); // pool_authority
        assert!(ix.accounts[3].is_writable);  // reserve_a
        assert!(ix.accounts[4].is_writable);  // reserve_b
        assert!(ix.accounts[5].is_writable);  // user_asset_a
        assert!(ix.accounts[6].is_writable);  // user_asset_b
    }

    #[test]
    fn initialize_needs_no_extra_signers() {
        let ix = initialize_ix(&pk(7), &pk(1), &pk(2), &pk(3));
        let signers: Vec<_> = ix.accounts.iter().filter(|m| m.is_signer).collect();
        assert_eq!(signers.len(), 1);
        assert_eq!(signers[0].pubkey, pk(1));
    }
}
