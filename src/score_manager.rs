//! Best-score persistence.
//!
//! Stores the session-best score in the platform config directory as a small
//! checksummed binary record, so a corrupted or truncated file is detected on
//! load instead of producing a bogus best.

use crate::constants::SCORE_VERSION_MAGIC;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Upper bound on the serialized record length accepted at load time.
const MAX_RECORD_BYTES: usize = 256;

/// The persisted record: the best score and when it was set (UTC seconds).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScore {
    pub score: u32,
    pub recorded_at: i64,
}

/// Reads and writes the best-score file.
pub struct ScoreManager {
    score_path: PathBuf,
}

impl ScoreManager {
    /// Locate (and create if needed) the config directory for the score file.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "tappy").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let config_dir = project_dirs.config_dir();
        fs::create_dir_all(config_dir)?;

        Ok(Self {
            score_path: config_dir.join("best.dat"),
        })
    }

    /// Use an explicit file path instead of the platform config directory.
    #[cfg(test)]
    pub fn with_path(score_path: PathBuf) -> Self {
        Self { score_path }
    }

    pub fn score_exists(&self) -> bool {
        self.score_path.exists()
    }

    /// Write the record.
    ///
    /// File format:
    /// - Version magic (8 bytes)
    /// - Data length (4 bytes)
    /// - Serialized record (variable length)
    /// - SHA256 checksum over magic + length + data (32 bytes)
    pub fn save(&self, best: &BestScore) -> io::Result<()> {
        let data = bincode::serialize(best)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let data_len = data.len() as u32;

        let mut hasher = Sha256::new();
        hasher.update(SCORE_VERSION_MAGIC.to_le_bytes());
        hasher.update(data_len.to_le_bytes());
        hasher.update(&data);
        let checksum = hasher.finalize();

        let mut file = fs::File::create(&self.score_path)?;
        file.write_all(&SCORE_VERSION_MAGIC.to_le_bytes())?;
        file.write_all(&data_len.to_le_bytes())?;
        file.write_all(&data)?;
        file.write_all(&checksum)?;

        Ok(())
    }

    /// Read the record back, verifying magic and checksum.
    pub fn load(&self) -> io::Result<BestScore> {
        let mut file = fs::File::open(&self.score_path)?;

        let mut magic_bytes = [0u8; 8];
        file.read_exact(&mut magic_bytes)?;
        if u64::from_le_bytes(magic_bytes) != SCORE_VERSION_MAGIC {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Score file version mismatch",
            ));
        }

        let mut len_bytes = [0u8; 4];
        file.read_exact(&mut len_bytes)?;
        let data_len = u32::from_le_bytes(len_bytes) as usize;
        // The record is a few dozen bytes; a larger length is corruption and
        // must not drive the allocation below
        if data_len > MAX_RECORD_BYTES {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Score file length implausible",
            ));
        }

        let mut data = vec![0u8; data_len];
        file.read_exact(&mut data)?;

        let mut checksum_bytes = [0u8; 32];
        file.read_exact(&mut checksum_bytes)?;

        let mut hasher = Sha256::new();
        hasher.update(magic_bytes);
        hasher.update(len_bytes);
        hasher.update(&data);
        if hasher.finalize().as_slice() != checksum_bytes {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "Score file checksum mismatch",
            ));
        }

        bincode::deserialize(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
