// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Spender contract interface.
//!
//! The deployed spender contract exposes a single delegated-transfer entry
//! point. It moves USDT from `from` to `to` on the authority of the
//! allowance `from` granted to the contract; the caller is the custodial
//! spender account, never the token owner.

use alloy::{
    primitives::{Address, U256},
    sol,
    sol_types::SolCall,
};

sol! {
    #[sol(rpc)]
    interface ISpender {
        function transferUSDT(address from, address to, uint256 amount) external returns (bool);
    }
}

/// ABI-encode a `transferUSDT(from, to, amount)` call.
pub fn encode_transfer_call(from: Address, to: Address, amount: U256) -> Vec<u8> {
    ISpender::transferUSDTCall { from, to, amount }.abi_encode()
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn encoding_is_selector_plus_three_words() {
        let from = Address::from_str("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1111").unwrap();
        let to = Address::from_str("0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2222").unwrap();
        let amount = U256::from(1_000_000_000_000_000_000u64);

        let data = encode_transfer_call(from, to, amount);
        assert_eq!(data.len(), 4 + 3 * 32);

        // Address words are left-padded to 32 bytes.
        assert_eq!(&data[16..36], from.as_slice());
        assert_eq!(&data[48..68], to.as_slice());
        // The amount occupies the final big-endian word.
        assert_eq!(&data[68..100], &amount.to_be_bytes::<32>());
    }

    #[test]
    fn encoding_is_deterministic() {
        let from = Address::from_str("0xAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA1111").unwrap();
        let to = Address::from_str("0xBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBBB2222").unwrap();
        let amount = U256::from(42u64);

        assert_eq!(
            encode_transfer_call(from, to, amount),
            encode_transfer_call(from, to, amount)
        );
    }
}
