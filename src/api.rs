//! # API
//!
//! Text in, text out wrappers around [`split`] and [`combine`] for callers that move shares around as strings.
//!
//! A share travels as its index and its data hex encoded, written `"<index>-<hex>"`.
//! Secrets are UTF-8 text. Invalid UTF-8 in a reconstructed secret is replaced by `U+FFFD`, since
//! combining the wrong shares yields arbitrary bytes.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use crate::{
    constants::params::{PARAM_DEFAULT_THRESHOLD, PARAM_DEFAULT_TOTAL_SHARES},
    error::{Result, ShamirError},
    subroutines::shamir::{combine, split, Share, ShareConfig, SharedSecret},
};

/// A share with hex encoded data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedShare {
    pub index: u8,
    pub data: String,
}

impl From<&Share> for EncodedShare {
    fn from(share: &Share) -> Self {
        EncodedShare {
            index: share.index,
            data: hex::encode(&share.data),
        }
    }
}

impl TryFrom<&EncodedShare> for Share {
    type Error = ShamirError;

    fn try_from(encoded: &EncodedShare) -> Result<Self> {
        let data = hex::decode(&encoded.data).map_err(|e| {
            ShamirError::InvalidShareEncoding(format!("share {}: {}", encoded.index, e))
        })?;
        Ok(Share::new(encoded.index, data))
    }
}

impl fmt::Display for EncodedShare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.index, self.data)
    }
}

impl FromStr for EncodedShare {
    type Err = ShamirError;

    fn from_str(s: &str) -> Result<Self> {
        let (index, data) = s.trim().split_once('-').ok_or_else(|| {
            ShamirError::InvalidShareEncoding(format!("expected <index>-<hex>, got {:?}", s))
        })?;
        let index: u8 = index.parse().map_err(|e| {
            ShamirError::InvalidShareEncoding(format!("share index {:?}: {}", index, e))
        })?;
        if index == 0 {
            return Err(ShamirError::ZeroIndex);
        }
        if hex::decode(data).is_err() {
            return Err(ShamirError::InvalidShareEncoding(format!(
                "share {}: data is not hex",
                index
            )));
        }
        Ok(EncodedShare {
            index,
            data: data.to_lowercase(),
        })
    }
}

/// File a share is stored in: `base` with `.<index>` appended to its file name.
///
/// Any extension of `base` is kept, `keys.a` gives `keys.a.1`, `keys.a.2`, ...
pub fn share_file_path(base: &Path, index: u8) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{}", index));
    PathBuf::from(name)
}

/// Result of [`split_secret`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitResponse {
    pub shares: Vec<EncodedShare>,
    pub threshold: usize,
    pub total_shares: usize,
}

impl From<&SharedSecret> for SplitResponse {
    fn from(shared: &SharedSecret) -> Self {
        SplitResponse {
            shares: shared.shares.iter().map(EncodedShare::from).collect(),
            threshold: shared.threshold,
            total_shares: shared.total_shares,
        }
    }
}

/// Result of [`combine_shares`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombineResponse {
    pub secret: String,
}

/// Split a UTF-8 `secret`. `total_shares` defaults to 5 and `threshold` to 3.
pub fn split_secret(
    secret: &str,
    total_shares: Option<usize>,
    threshold: Option<usize>,
) -> Result<SplitResponse> {
    let config = ShareConfig {
        total_shares: total_shares.unwrap_or(PARAM_DEFAULT_TOTAL_SHARES),
        threshold: threshold.unwrap_or(PARAM_DEFAULT_THRESHOLD),
    };
    let shared = split(secret.as_bytes(), config)?;
    Ok(SplitResponse::from(&shared))
}

/// Decode and combine hex encoded shares into the secret text
pub fn combine_shares(shares: &[EncodedShare]) -> Result<CombineResponse> {
    let shares = shares
        .iter()
        .map(Share::try_from)
        .collect::<Result<Vec<Share>>>()?;
    let secret = combine(&shares)?;
    Ok(CombineResponse {
        secret: String::from_utf8_lossy(&secret).into_owned(),
    })
}

const DEMO_SECRET: &str = "Nuclear launch code: 42";
const DEMO_TOTAL_SHARES: usize = 5;
const DEMO_THRESHOLD: usize = 3;
const DEMO_PREVIEW_LEN: usize = 20;

/// One reconstruction attempt of the demonstration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    /// Indices of the shares that were combined
    pub shares_used: Vec<u8>,
    pub recovered: String,
    pub success: bool,
}

/// Walkthrough of a 3-of-5 split and two reconstructions from different share subsets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Demonstration {
    pub message: String,
    pub secret: String,
    pub total_shares: usize,
    pub threshold: usize,
    /// Shares with their data cut to a short preview
    pub shares: Vec<EncodedShare>,
    pub reconstructions: Vec<Reconstruction>,
    pub key_point: String,
}

/// Split a fixed secret 3-of-5 and recover it from shares {1, 2, 3} and from shares {1, 3, 5}
pub fn demonstrate() -> Result<Demonstration> {
    let shared = split_secret(DEMO_SECRET, Some(DEMO_TOTAL_SHARES), Some(DEMO_THRESHOLD))?;

    let reconstructions = [vec![1u8, 2, 3], vec![1u8, 3, 5]]
        .into_iter()
        .map(|shares_used| -> Result<Reconstruction> {
            let subset: Vec<EncodedShare> = shared
                .shares
                .iter()
                .filter(|share| shares_used.contains(&share.index))
                .cloned()
                .collect();
            let recovered = combine_shares(&subset)?.secret;
            Ok(Reconstruction {
                success: recovered == DEMO_SECRET,
                shares_used,
                recovered,
            })
        })
        .collect::<Result<Vec<Reconstruction>>>()?;

    let shares = shared
        .shares
        .iter()
        .map(|share| EncodedShare {
            index: share.index,
            data: format!(
                "{}...",
                &share.data[..DEMO_PREVIEW_LEN.min(share.data.len())]
            ),
        })
        .collect();

    Ok(Demonstration {
        message: "Shamir's Secret Sharing: Split a secret into N shares, require K to reconstruct"
            .to_string(),
        secret: DEMO_SECRET.to_string(),
        total_shares: shared.total_shares,
        threshold: shared.threshold,
        shares,
        reconstructions,
        key_point: format!(
            "Any {} of {} shares can recover the secret, but {} shares reveal nothing",
            shared.threshold,
            shared.total_shares,
            shared.threshold - 1
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_secret() {
        let result = split_secret("hello", Some(5), Some(3)).unwrap();
        assert_eq!(result.shares.len(), 5);
        assert_eq!(result.threshold, 3);
        assert_eq!(result.total_shares, 5);
        for (i, share) in result.shares.iter().enumerate() {
            assert_eq!(share.index as usize, i + 1);
            assert_eq!(share.data.len(), 2 * "hello".len());
        }
    }

    #[test]
    fn test_split_secret_defaults() {
        let result = split_secret("defaults", None, None).unwrap();
        assert_eq!(result.shares.len(), 5);
        assert_eq!(result.threshold, 3);
    }

    #[test]
    fn test_reconstruct_with_threshold_shares() {
        let split = split_secret("secret message", Some(5), Some(3)).unwrap();
        let result = combine_shares(&split.shares[..3]).unwrap();
        assert_eq!(result.secret, "secret message");
    }

    #[test]
    fn test_reconstruct_with_any_subset() {
        let split = split_secret("test secret", Some(5), Some(3)).unwrap();
        let subset = [
            split.shares[0].clone(),
            split.shares[2].clone(),
            split.shares[4].clone(),
        ];
        assert_eq!(combine_shares(&subset).unwrap().secret, "test secret");
    }

    #[test]
    fn test_reconstruct_with_more_than_threshold() {
        let split = split_secret("test", Some(5), Some(3)).unwrap();
        assert_eq!(combine_shares(&split.shares[..4]).unwrap().secret, "test");
    }

    #[test]
    fn test_minimum_two_of_two() {
        let split = split_secret("min", Some(2), Some(2)).unwrap();
        assert_eq!(combine_shares(&split.shares).unwrap().secret, "min");
    }

    #[test]
    fn test_unicode_secret() {
        let split = split_secret("šifra → 秘密", None, None).unwrap();
        assert_eq!(
            combine_shares(&split.shares[1..4]).unwrap().secret,
            "šifra → 秘密"
        );
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(split_secret("test", Some(3), Some(5))
            .unwrap_err()
            .is_configuration());
        assert!(split_secret("test", Some(5), Some(1))
            .unwrap_err()
            .is_configuration());
        assert!(split_secret("test", Some(300), Some(3))
            .unwrap_err()
            .is_configuration());
    }

    #[test]
    fn test_rejects_single_share() {
        let split = split_secret("hello", None, None).unwrap();
        assert_eq!(
            combine_shares(&split.shares[..1]),
            Err(ShamirError::InsufficientShares {
                provided: 1,
                required: 2
            })
        );
    }

    #[test]
    fn test_rejects_bad_hex() {
        let shares = [
            EncodedShare {
                index: 1,
                data: "zz".to_string(),
            },
            EncodedShare {
                index: 2,
                data: "00".to_string(),
            },
        ];
        assert!(matches!(
            combine_shares(&shares),
            Err(ShamirError::InvalidShareEncoding(_))
        ));
    }

    #[test]
    fn test_encoded_share_text() {
        let share = EncodedShare {
            index: 12,
            data: "0a9bbb6526".to_string(),
        };
        assert_eq!(share.to_string(), "12-0a9bbb6526");
        assert_eq!("12-0a9bbb6526".parse::<EncodedShare>(), Ok(share.clone()));
        assert_eq!(" 12-0A9BBB6526\n".parse::<EncodedShare>(), Ok(share));

        assert_eq!("0-00".parse::<EncodedShare>(), Err(ShamirError::ZeroIndex));
        for bad in ["12", "256-00", "x-00", "3-0g", "3-abc"] {
            assert!(
                matches!(
                    bad.parse::<EncodedShare>(),
                    Err(ShamirError::InvalidShareEncoding(_))
                ),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_share_conversion() {
        let share = Share::new(4, vec![0xde, 0xad]);
        let encoded = EncodedShare::from(&share);
        assert_eq!(encoded.data, "dead");
        assert_eq!(Share::try_from(&encoded), Ok(share));
    }

    #[test]
    fn test_share_file_path() {
        assert_eq!(
            share_file_path(Path::new("/tmp/backup.v2"), 1),
            PathBuf::from("/tmp/backup.v2.1")
        );
        assert_eq!(
            share_file_path(Path::new("share"), 255),
            PathBuf::from("share.255")
        );

        // Distinct bases never map to the same share file
        let a = share_file_path(Path::new("keys.a"), 3);
        let b = share_file_path(Path::new("keys.b"), 3);
        assert_eq!(a, PathBuf::from("keys.a.3"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_demonstrate() {
        let demo = demonstrate().unwrap();
        assert_eq!(demo.secret, "Nuclear launch code: 42");
        assert_eq!(demo.threshold, 3);
        assert_eq!(demo.total_shares, 5);
        assert_eq!(demo.shares.len(), 5);
        for share in &demo.shares {
            assert_eq!(share.data.len(), 23);
            assert!(share.data.ends_with("..."));
        }

        assert_eq!(demo.reconstructions.len(), 2);
        assert_eq!(demo.reconstructions[0].shares_used, vec![1, 2, 3]);
        assert_eq!(demo.reconstructions[1].shares_used, vec![1, 3, 5]);
        for reconstruction in &demo.reconstructions {
            assert!(reconstruction.success);
            assert_eq!(reconstruction.recovered, demo.secret);
        }
        assert_eq!(
            demo.key_point,
            "Any 3 of 5 shares can recover the secret, but 2 shares reveal nothing"
        );
    }
}
