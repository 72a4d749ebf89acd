//! Post-copy content verification.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};

/// SHA-256 of a file's contents.
pub fn sha256_of_file(path: &Path) -> io::Result<[u8; 32]> {
    let mut reader = BufReader::new(File::open(path)?);
    let mut hasher = Sha256::new();
    let mut buf = [0u8; 64 * 1024];
    loop {
        let n = reader.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
    }
    Ok(hasher.finalize().into())
}

/// True when both files hash the same.
pub fn files_match(a: &Path, b: &Path) -> io::Result<bool> {
    if a.metadata()?.len() != b.metadata()?.len() {
        return Ok(false);
    }
    Ok(sha256_of_file(a)? == sha256_of_file(b)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn identical_files_match() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        fs::write(&a, vec![7u8; 200_000]).unwrap();
        fs::write(&b, vec![7u8; 200_000]).unwrap();

        assert!(files_match(&a, &b).unwrap());
    }

    #[test]
    fn different_files_do_not_match() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        let b = dir.path().join("b");
        let c = dir.path().join("c");
        fs::write(&a, b"hello").unwrap();
        fs::write(&b, b"hellp").unwrap();
        fs::write(&c, b"hello!").unwrap();

        assert!(!files_match(&a, &b).unwrap());
        assert!(!files_match(&a, &c).unwrap());
    }

    #[test]
    fn known_digest() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a");
        fs::write(&a, b"abc").unwrap();

        let digest = sha256_of_file(&a).unwrap();
        assert_eq!(digest[0], 0xba);
        assert_eq!(digest[31], 0xad);
    }
}
