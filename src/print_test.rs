use crate::print::render;
use crate::rbt::Rbt;

#[test]
fn test_render_empty() {
    let rbt: Rbt<i64, i64> = Rbt::new("test-print");
    assert_eq!(render(&rbt, false), "");
}

#[test]
fn test_render_small() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-print");
    for key in [2, 1, 3].iter() {
        rbt.insert(*key, *key);
    }
    assert_eq!(render(&rbt, false), "   2\n 1   3\n");

    let colored = render(&rbt, true);
    assert!(colored.starts_with("   2\n"));
    assert!(colored.contains("\x1b[31m1\x1b[0m"));
    assert!(colored.contains("\x1b[31m3\x1b[0m"));
    assert!(!colored.contains("\x1b[31m2"));
}

#[test]
fn test_render_gaps() {
    let mut rbt: Rbt<i64, i64> = Rbt::new("test-print");
    for key in 1..=10 {
        rbt.insert(key, key);
    }
    let pad = |n: usize| " ".repeat(n);
    let expected = [
        format!("{}4", pad(31)),
        format!("{}2{}6", pad(15), pad(31)),
        format!("{}1{}3{}5{}8", pad(7), pad(15), pad(15), pad(15)),
        format!("{}7{}9", pad(51), pad(7)),
        format!("{}10", pad(61)),
    ];
    let lines: Vec<String> = render(&rbt, false).lines().map(String::from).collect();
    assert_eq!(lines, expected.to_vec());
}
