use avl_index::avl_tree::{AvlTree, Side};
use avl_index::{loader, Config, Error, Result};
use log::LevelFilter;
use simplelog::SimpleLogger;
use std::env;
use std::process;

const USAGE: &str = "usage: avl-index <file1> <file2> [min max]";

fn render(tree: &AvlTree) -> String {
    let mut out = String::new();
    for visit in tree.layout() {
        // A rail continues only below a non-right node, and only into its left subtree.
        let path = visit.ancestors.iter().chain(Some(&visit.side)).collect::<Vec<&Side>>();
        for step in path.windows(2) {
            let rail = *step[0] != Side::Right && *step[1] == Side::Left;
            out.push_str(if rail { "│   " } else { "    " });
        }
        out.push_str(if visit.side == Side::Right { "└── " } else { "├── " });
        out.push_str(&visit.key.to_string());
        out.push('\n');
    }
    out
}

fn parse_bound(arg: &str) -> Result<i32> {
    arg.trim().parse().map_err(|source| Error::InvalidBound {
        value: arg.to_string(),
        source,
    })
}

fn run(args: &[String]) -> Result<()> {
    let bounds = match &args[2..] {
        [min, max] => Some((parse_bound(min)?, parse_bound(max)?)),
        _ => None,
    };
    let config = Config::from_env()?;
    let t1 = loader::load_tree_file(&args[0], &config)?;
    let t2 = loader::load_tree_file(&args[1], &config)?;

    println!("T1:\n{}", render(&t1));
    println!("T2:\n{}", render(&t2));
    println!("T1 ∪ T2:\n{}", render(&t1.union(&t2)));
    println!("T1 ∩ T2:\n{}", render(&t1.intersect(&t2)));

    if let Some((min, max)) = bounds {
        println!("T1 in [{}, {}]:", min, max);
        for key in t1.range(min, max) {
            println!("{}", key);
        }
    }
    Ok(())
}

fn main() {
    let level = env::var("AVL_INDEX_LOG")
        .ok()
        .and_then(|level| level.parse().ok())
        .unwrap_or(LevelFilter::Info);
    if SimpleLogger::init(level, simplelog::Config::default()).is_err() {
        eprintln!("failed to initialize logger");
    }

    let args = env::args().skip(1).collect::<Vec<String>>();
    if args.len() != 2 && args.len() != 4 {
        eprintln!("{}", USAGE);
        process::exit(2);
    }

    if let Err(error) = run(&args) {
        log::error!("{}", error);
        process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_bound, render, run};
    use avl_index::avl_tree::AvlTree;
    use avl_index::Error;

    #[test]
    fn test_render() {
        let tree: AvlTree = vec![2, 1, 3, 4].into_iter().collect();
        assert_eq!(render(&tree), "├── 2\n│   ├── 1\n    └── 3\n        └── 4\n");
    }

    #[test]
    fn test_parse_bound() {
        assert_eq!(parse_bound("-12").unwrap(), -12);
        match parse_bound("x") {
            Err(Error::InvalidBound { value, .. }) => assert_eq!(value, "x"),
            _ => panic!("expected an invalid bound error"),
        }
    }

    #[test]
    fn test_run_rejects_invalid_bound() {
        // The bounds are checked before any file is opened.
        let args = ["missing_a.txt", "missing_b.txt", "1", "x"]
            .iter()
            .map(|arg| arg.to_string())
            .collect::<Vec<String>>();
        match run(&args) {
            Err(Error::InvalidBound { value, .. }) => assert_eq!(value, "x"),
            _ => panic!("expected an invalid bound error"),
        }
    }
}
