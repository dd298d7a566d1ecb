extern crate avl_index;

use avl_index::{loader, Config, Error};
use std::env;
use std::fs;
use std::path::PathBuf;

fn write_input(name: &str, contents: &str) -> PathBuf {
    let path = env::temp_dir().join(format!("avl_index_{}_{}", name, std::process::id()));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn int_test_load_tree_file() {
    let path = write_input("keys", "33\n5\n10\n21\n20\n23\n18\n16\n19\n15\n17\n22\n14\n");
    let tree = loader::load_tree_file(&path, &Config::default()).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(tree.len(), 13);
    assert_eq!(tree.height(), 3);
    assert_eq!(tree.range(15, 19).collect::<Vec<i32>>(), vec![15, 16, 17, 18, 19]);
}

#[test]
fn int_test_load_file_over_capacity() {
    let contents = (0..101).map(|key| format!("{}\n", key)).collect::<String>();
    let path = write_input("capacity", &contents);
    let result = loader::load_file(&path, &Config::default());
    fs::remove_file(&path).unwrap();

    match result {
        Err(Error::CapacityExceeded { count: 101, max: 100 }) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn int_test_load_missing_file() {
    let path = env::temp_dir().join("avl_index_missing_input_file");
    match loader::load_file(&path, &Config::default()) {
        Err(Error::Io(_)) => {},
        other => panic!("unexpected result: {:?}", other),
    }
}
