#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use landis::param::Manual;
use landis_fuzz_utils::{CommandSequence, FuzzValue, RunnerState};
use libfuzzer_sys::fuzz_target;
use std::fmt::{self, Debug, Formatter};

/// Value restricted to `0..32`, so that long unbalanced chains come up often
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Small(u8);

// Forward the Debug implementation to the inner `u8` so that printing the fuzz input can be more
// easily replicated.
impl Debug for Small {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

// Printed test cases go in `src/tree/tests/basic.rs`, where this is `AvlTree<u8, Manual>`
impl FuzzValue for Small {
    const TREE_ALIAS: &'static str = "ManualFuzzTree";
}

impl<'d> Arbitrary<'d> for Small {
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        Ok(Small(u.int_in_range(0_u8..=31)?))
    }
}

fuzz_target!(|cmds: CommandSequence<Small>| {
    let mut runner: RunnerState<Small, Manual> = RunnerState::init();

    for c in &cmds.cmds {
        runner.run_cmd(c);
    }
});
