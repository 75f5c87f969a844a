//! Signature recovery for maker authorization.
//!
//! A maker never submits its own settlement transaction. Instead the taker
//! presents the order together with the maker's detached signature over the
//! order hash, and the engine recovers the signing account from it. Any
//! malformed or non-verifying signature is an [`SwapmatchError::InvalidSignature`]
//! — never a wrong-but-plausible account.

use ed25519_dalek::{Signature, VerifyingKey};
use swapmatch_types::{AccountId, MakerSignature, OrderHash, Result, SwapmatchError};

/// Recover the account that signed `hash`.
///
/// Verifies the embedded ed25519 signature against the embedded public key
/// using strict verification (rejects malleable encodings), and returns the
/// key's account identity on success.
///
/// # Errors
/// Returns `InvalidSignature` when the key bytes do not decode to a valid
/// curve point, the signature is not 64 bytes, or verification fails.
pub fn recover_signer(hash: &OrderHash, signature: &MakerSignature) -> Result<AccountId> {
    let key = VerifyingKey::from_bytes(signature.signer.as_bytes()).map_err(|e| {
        SwapmatchError::InvalidSignature {
            reason: format!("malformed public key: {e}"),
        }
    })?;

    let bytes: &[u8; 64] =
        signature
            .bytes
            .as_slice()
            .try_into()
            .map_err(|_| SwapmatchError::InvalidSignature {
                reason: format!("signature must be 64 bytes, got {}", signature.bytes.len()),
            })?;
    let sig = Signature::from_bytes(bytes);

    key.verify_strict(hash.as_bytes(), &sig)
        .map_err(|_| SwapmatchError::InvalidSignature {
            reason: "signature does not verify against signer key".into(),
        })?;

    Ok(AccountId::from_pubkey(key.to_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::SigningKey;
    use rand::rngs::OsRng;

    fn keyed_signature(hash: &OrderHash) -> (AccountId, MakerSignature) {
        let key = SigningKey::generate(&mut OsRng);
        let account = AccountId::from_pubkey(key.verifying_key().to_bytes());
        (account, MakerSignature::create(&key, hash))
    }

    #[test]
    fn recovers_the_signing_account() {
        let hash = OrderHash([0x42; 32]);
        let (account, sig) = keyed_signature(&hash);
        assert_eq!(recover_signer(&hash, &sig).unwrap(), account);
    }

    #[test]
    fn tampered_signature_rejected() {
        let hash = OrderHash([0x42; 32]);
        let (_, sig) = keyed_signature(&hash);
        let err = recover_signer(&hash, &sig.tampered()).unwrap_err();
        assert!(matches!(err, SwapmatchError::InvalidSignature { .. }));
    }

    #[test]
    fn signature_over_other_hash_rejected() {
        let hash = OrderHash([0x42; 32]);
        let (_, sig) = keyed_signature(&hash);
        let other = OrderHash([0x43; 32]);
        let err = recover_signer(&other, &sig).unwrap_err();
        assert!(matches!(err, SwapmatchError::InvalidSignature { .. }));
    }

    #[test]
    fn truncated_signature_rejected() {
        let hash = OrderHash([0x42; 32]);
        let (account, sig) = keyed_signature(&hash);
        let short = MakerSignature {
            signer: account,
            bytes: sig.bytes[..32].to_vec(),
        };
        let err = recover_signer(&hash, &short).unwrap_err();
        assert!(matches!(err, SwapmatchError::InvalidSignature { .. }));
    }

    #[test]
    fn zero_sentinel_key_rejected() {
        // The sentinel account is not a valid verifying key for any order.
        let hash = OrderHash([0x42; 32]);
        let (_, sig) = keyed_signature(&hash);
        let forged = MakerSignature {
            signer: AccountId::ZERO,
            bytes: sig.bytes,
        };
        assert!(recover_signer(&hash, &forged).is_err());
    }
}
