#[macro_use]
extern crate quickcheck_macros;

use quickcheck::{Arbitrary, Gen};

mod tree;

/// Turns on `log` output for a test run. Use `RUST_LOG=trace` to see it.
pub(crate) fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A small shape to hand-build: each entry says which children a node gets, nodes are filled in
/// level order and values count up from 0.
#[derive(Clone, Debug)]
pub(crate) struct Shape(Vec<(bool, bool)>);

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        let len = usize::arbitrary(g) % 32;
        Shape((0..len).map(|_| (bool::arbitrary(g), bool::arbitrary(g))).collect())
    }
}
