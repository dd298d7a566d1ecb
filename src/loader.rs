//! Bulk-loading of keys from text input holding one integer per line.

use crate::avl_tree::{AvlTree, LogObserver};
use crate::config::Config;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads one integer per line. Blank lines are skipped and surrounding whitespace is ignored.
///
/// # Errors
///
/// Fails with `Error::CapacityExceeded` as soon as the input holds more values than
/// `config.max_elements`, before any value is parsed and without reading the rest of the input. Fails with `Error::Parse` on the first line
/// that is not an integer and with `Error::Io` if reading fails.
///
/// # Examples
/// ```
/// use avl_index::{loader, Config};
///
/// let input = "3\n1\n\n  2 \n";
/// let keys = loader::load(input.as_bytes(), &Config::default()).unwrap();
/// assert_eq!(keys, vec![3, 1, 2]);
/// ```
pub fn load<R>(reader: R, config: &Config) -> Result<Vec<i32>>
where
    R: BufRead,
{
    // At most `max_elements` lines are held; reading stops at the first one over the limit.
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        if lines.len() == config.max_elements {
            return Err(Error::CapacityExceeded {
                count: lines.len() + 1,
                max: config.max_elements,
            });
        }
        lines.push((index + 1, line));
    }

    lines
        .iter()
        .map(|(line, text)| {
            text.trim()
                .parse::<i32>()
                .map_err(|source| Error::Parse { line: *line, source })
        })
        .collect()
}

/// Reads the keys stored in a file. See `load`.
pub fn load_file<P>(path: P, config: &Config) -> Result<Vec<i32>>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    let keys = load(BufReader::new(File::open(path)?), config)?;
    log::info!("read {} keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Reads keys and inserts them into a new tree in input order. Duplicate keys are skipped.
///
/// # Examples
/// ```
/// use avl_index::{loader, Config};
///
/// let tree = loader::load_tree("5\n2\n5\n".as_bytes(), &Config::default()).unwrap();
/// assert_eq!(tree.iter().collect::<Vec<i32>>(), vec![2, 5]);
/// ```
pub fn load_tree<R>(reader: R, config: &Config) -> Result<AvlTree>
where
    R: BufRead,
{
    load(reader, config).map(build_tree)
}

/// Reads the keys stored in a file into a new tree. See `load_tree`.
pub fn load_tree_file<P>(path: P, config: &Config) -> Result<AvlTree>
where
    P: AsRef<Path>,
{
    load_file(path, config).map(build_tree)
}

fn build_tree(keys: Vec<i32>) -> AvlTree {
    let mut tree = AvlTree::new();
    for key in keys {
        if !tree.insert_with(key, &mut LogObserver) {
            log::debug!("skipping duplicate key {}", key);
        }
    }
    tree
}

#[cfg(test)]
mod tests {
    use super::{load, load_tree};
    use crate::config::Config;
    use crate::error::Error;
    use std::io::{self, BufReader, Read};

    #[test]
    fn test_load_empty() {
        assert_eq!(load("".as_bytes(), &Config::default()).unwrap(), Vec::<i32>::new());
    }

    #[test]
    fn test_load_negative() {
        let keys = load("-4\n+7\n0\n".as_bytes(), &Config::default()).unwrap();
        assert_eq!(keys, vec![-4, 7, 0]);
    }

    #[test]
    fn test_load_at_capacity() {
        let config = Config { max_elements: 3 };
        assert_eq!(load("1\n2\n3".as_bytes(), &config).unwrap(), vec![1, 2, 3]);
    }

    #[test]
    fn test_load_over_capacity() {
        let config = Config { max_elements: 2 };
        match load("1\n2\nnot a number\n".as_bytes(), &config) {
            Err(Error::CapacityExceeded { count, max }) => {
                assert_eq!(count, 3);
                assert_eq!(max, 2);
            },
            _ => panic!("expected a capacity error"),
        }
    }

    #[test]
    fn test_load_over_capacity_stops_reading() {
        struct Endless;

        impl Read for Endless {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                for (index, byte) in buf.iter_mut().enumerate() {
                    *byte = if index % 2 == 0 { b'7' } else { b'\n' };
                }
                Ok(buf.len() - buf.len() % 2)
            }
        }

        let config = Config { max_elements: 1_000 };
        match load(BufReader::new(Endless), &config) {
            Err(Error::CapacityExceeded { count, max }) => {
                assert_eq!(count, 1_001);
                assert_eq!(max, 1_000);
            },
            _ => panic!("expected a capacity error"),
        }
    }

    #[test]
    fn test_load_parse_error() {
        match load("1\n\nx2\n".as_bytes(), &Config::default()) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            _ => panic!("expected a parse error"),
        }
    }

    #[test]
    fn test_load_tree_skips_duplicates() {
        let tree = load_tree("4\n4\n1\n".as_bytes(), &Config::default()).unwrap();
        assert_eq!(tree.len(), 2);
        assert_eq!(tree.iter().collect::<Vec<i32>>(), vec![1, 4]);
    }
}
