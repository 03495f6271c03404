//! On-chain account deserialization.
//!
//! Parses raw account bytes for `Pool` (170 bytes).
//! Byte offsets mirror the Anchor `#[account]` layout exactly.

use solana_sdk::pubkey::Pubkey;
use crate::error::{Error, Result};

// ─── Pool ─────────────────────────────────────────────────────────────────────

/// Deserialized `Pool` account state.
///
/// Layout (after 8-byte Anchor discriminator):
/// ```text
/// authority(32)  authority_bump(1)  asset_a_mint(32)  asset_b_mint(32)
/// reserve_a(32)  reserve_b(32)  bump(1)  = 170 bytes
/// ```
#[derive(Debug, Clone)]
pub struct PoolState {
    pub authority:      Pubkey,
    pub authority_bump: u8,
    pub asset_a_mint:   Pubkey,
    pub asset_b_mint:   Pubkey,
    pub reserve_a:      Pubkey,
    pub reserve_b:      Pubkey,
}

impl PoolState {
    /// An all-zero authority means the account exists but `initialize`
    /// never completed.
    pub fn is_initialized(&self) -> bool {
        self.authority != Pubkey::default()
    }
}

/// Deserialize a `Pool` account from raw bytes.
pub fn parse_pool(data: &[u8]) -> Result<PoolState> {
    const EXPECTED: usize = 170;
    if data.len() < EXPECTED {
        return Err(Error::ParseError {
            offset: 0,
            reason: format!("Pool account is {} bytes; expected {}", data.len(), EXPECTED),
        });
    }
    Ok(PoolState {
        authority:      read_pubkey(data, 8)?,
        authority_bump: data[40],
        asset_a_mint:   read_pubkey(data, 41)?,
        asset_b_mint:   read_pubkey(data, 73)?,
        reserve_a:      read_pubkey(data, 105)?,
        reserve_b:      read_pubkey(data, 137)?,
    })
}

// ─── SPL token account ────────────────────────────────────────────────────────

/// Read the `amount` field from a packed SPL token account.
///
/// Token account layout: `mint(32) owner(32) amount(8) …`
pub fn parse_token_amount(data: &[u8]) -> Result<u64> {
    if data.len() < 72 {
        return Err(Error::ParseError {
            offset: 64,
            reason: format!("Token account is {} bytes; need at least 72", data.len()),
        });
    }
    read_u64(data, 64)
}

// ─── Byte-slice primitives ────────────────────────────────────────────────────

pub(crate) fn read_pubkey(data: &[u8], offset: usize) -> Result<Pubkey> {
    let b: [u8; 32] = data[offset..offset + 32]
        .try_into()
        .map_err(|_| Error::ParseError {
            offset,
            reason: "slice too short for Pubkey (32 bytes)".into(),
        })?;
    Ok(Pubkey::from(b))
}

pub(crate) fn read_u64(data: &[u8], offset: usize) -> Result<u64> {
    let b: [u8; 8] = data[offset..offset + 8]
        .try_into()
        .map_err(|_| Error::ParseError { offset, reason: "slice too short for u64".into() })?;
    Ok(u64::from_le_bytes(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pk(byte: u8) -> Pubkey {
        Pubkey::new_from_array([byte; 32])
    }

    /// Pack a Pool account image the way Anchor serializes it.
    fn pool_image(
        authority: Pubkey,
        authority_bump: u8,
        asset_a_mint: Pubkey,
        asset_b_mint: Pubkey,
        reserve_a: Pubkey,
        reserve_b: Pubkey,
        bump: u8,
    ) -> Vec<u8> {
        let mut data = vec![0u8; 8]; // discriminator, ignored by the parser
        data.extend_from_slice(authority.as_ref());
        data.push(authority_bump);
        data.extend_from_slice(asset_a_mint.as_ref());
        data.extend_from_slice(asset_b_mint.as_ref());
        data.extend_from_slice(reserve_a.as_ref());
        data.extend_from_slice(reserve_b.as_ref());
        data.push(bump);
        data
    }

    #[test]
    fn parses_pool_fields_at_expected_offsets() {
        let data = pool_image(pk(1), 254, pk(2), pk(3), pk(4), pk(5), 255);
        assert_eq!(data.len(), 170);

        let pool = parse_pool(&data).unwrap();
        assert_eq!(pool.authority, pk(1));
        assert_eq!(pool.authority_bump, 254);
        assert_eq!(pool.asset_a_mint, pk(2));
        assert_eq!(pool.asset_b_mint, pk(3));
        assert_eq!(pool.reserve_a, pk(4));
        assert_eq!(pool.reserve_b, pk(5));
        assert!(pool.is_initialized());
    }

    #[test]
    fn default_authority_reads_as_uninitialized() {
        let data = pool_image(Pubkey::default(), 0, pk(2), pk(3), pk(4), pk(5), 0);
        let pool = parse_pool(&data).unwrap();
        assert!(!pool.is_initialized());
    }

    #[test]
    fn short_buffer_is_a_parse_error() {
        let err = parse_pool(&[0u8; 100]).unwrap_err();
        assert!(matches!(err, Error::ParseError { .. }));
    }

    #[test]
    fn token_amount_reads_offset_64() {
        let mut data = vec![0u8; 165]; // packed SPL token account size
        data[64..72].copy_from_slice(&1_000_000_000u64.to_le_bytes());
        assert_eq!(parse_token_amount(&data).unwrap(), 1_000_000_000);
    }

    #[test]
    fn truncated_token_account_is_a_parse_error() {
        assert!(matches!(
            parse_token_amount(&[0u8; 70]).unwrap_err(),
            Error::ParseError { .. }
        ));
    }
}
