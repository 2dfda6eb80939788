#![no_main]

use landis::param::Auto;
use landis_fuzz_utils::{CommandSequence, RunnerState};
use libfuzzer_sys::fuzz_target;

// Small values, so that inserts collide and removals hit
fuzz_target!(|cmds: CommandSequence<i8>| {
    let mut runner: RunnerState<i8, Auto> = RunnerState::init();

    for c in &cmds.cmds {
        runner.run_cmd(c);
    }
});
