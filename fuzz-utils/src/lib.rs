use arbitrary::{Arbitrary, Unstructured};
use landis::mock::Mock;
use landis::param::RebalanceConfig;
use landis::AvlTree;
use std::fmt::{self, Debug, Display, Formatter};

const VARIANTS: u8 = 5;

/// A single operation on one of the trees in a [`CommandSequence`]
#[derive(Clone)]
pub enum Command<T> {
    Insert { id: TreeId, value: T },
    Remove { id: TreeId, value: T },
    Rotate { id: TreeId },
    ShallowClone { src_id: TreeId, new_id: TreeId },
    DropTree { id: TreeId },
}

#[derive(Debug, Copy, Clone, Arbitrary)]
pub struct TreeId(usize);

impl Display for TreeId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

/// Value type that a fuzz target runs with
///
/// Each target's printed test cases declare their initial tree with the alias given here, which
/// must match the one used in the crate's regression tests for that target.
pub trait FuzzValue: Debug {
    const TREE_ALIAS: &'static str;
}

impl FuzzValue for i8 {
    const TREE_ALIAS: &'static str = "FuzzTree";
}

/// Sequence of [`Command`]s
///
/// The `Debug` output is a test case that replicates the sequence, ready to be pasted into the
/// crate's regression tests.
pub struct CommandSequence<T> {
    pub cmds: Vec<Command<T>>,
}

impl<T: FuzzValue> Debug for CommandSequence<T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let init_id = TreeId(0);
        f.write_str("#[test]\n")?;
        f.write_str("fn test_case() {\n")?;
        let alias = T::TREE_ALIAS;
        writeln!(f, "    let mut tree_{init_id}: {alias} = AvlTree::new();")?;
        for c in &self.cmds {
            c.fmt(f)?;
        }
        f.write_str("}")
    }
}

impl<T: Debug> Debug for Command<T> {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Insert { id, value } => {
                writeln!(f, "    tree_{id} = tree_{id}.insert({value:?});")?;
                writeln!(f, "    tree_{id}.validate();")
            }
            Self::Remove { id, value } => {
                writeln!(f, "    tree_{id} = tree_{id}.remove(&{value:?});")?;
                writeln!(f, "    tree_{id}.validate();")
            }
            Self::Rotate { id } => {
                writeln!(f, "    if let Ok((t, _)) = tree_{id}.try_apply_one_rotation() {{")?;
                writeln!(f, "        tree_{id} = t;")?;
                writeln!(f, "    }}")?;
                writeln!(f, "    tree_{id}.validate();")
            }
            Self::ShallowClone { src_id, new_id } => {
                writeln!(f, "    let mut tree_{new_id} = tree_{src_id}.clone();")
            }
            Self::DropTree { id } => writeln!(f, "    drop(tree_{id});"),
        }
    }
}

impl<'d, T: Arbitrary<'d>> Arbitrary<'d> for CommandSequence<T> {
    fn arbitrary(u: &mut Unstructured<'d>) -> arbitrary::Result<Self> {
        let mut cmds = Vec::new();

        // Only liveness matters here; values are checked against the mocks when the commands
        // are run.
        let mut live = vec![true];
        let mut num_trees = 1;

        while !u.is_empty() && num_trees != 0 {
            let id = TreeId(choose_sparse_index(u, num_trees, &live)?);
            let cmd = match u.int_in_range(0..=VARIANTS - 1)? {
                0 => Command::Insert {
                    id,
                    value: u.arbitrary()?,
                },
                1 => Command::Remove {
                    id,
                    value: u.arbitrary()?,
                },
                2 => Command::Rotate { id },
                3 => {
                    let new_id = TreeId(live.len());
                    live.push(true);
                    num_trees += 1;
                    Command::ShallowClone { src_id: id, new_id }
                }
                4 => {
                    live[id.0] = false;
                    num_trees -= 1;
                    Command::DropTree { id }
                }
                v => unreachable!("bad Command variant {v}"),
            };
            cmds.push(cmd);
        }

        Ok(CommandSequence { cmds })
    }
}

/// Picks the index of the `n`th live tree, for random `n < count`
fn choose_sparse_index(
    u: &mut Unstructured,
    count: usize,
    live: &[bool],
) -> arbitrary::Result<usize> {
    let mut idx = u.choose_index(count)?;
    let mut i = 0;
    while i <= idx {
        if !live[i] {
            idx += 1;
        }
        i += 1;
    }
    Ok(idx)
}

/// Ongoing state for executing commands to a set of [`AvlTree`]s and their mocks
///
/// Each tree is paired with a [`Mock`] holding the values it should have. After every command,
/// *every* live tree is checked against its mock, so that a mutation leaking into a tree it
/// shares nodes with is caught right away.
pub struct RunnerState<T, P> {
    trees: Vec<Option<(AvlTree<T, P>, Mock<T>)>>,
}

impl<T, P> RunnerState<T, P>
where
    T: Ord + Copy + Debug,
    P: RebalanceConfig,
{
    /// Creates a new, blank `RunnerState` to run a series of commands
    pub fn init() -> Self {
        RunnerState {
            trees: vec![Some((AvlTree::new(), Mock::new()))],
        }
    }

    /// Runs the command, then checks all the trees
    pub fn run_cmd(&mut self, cmd: &Command<T>) {
        match cmd {
            Command::Insert { id, value } => {
                let (tree, mut mock) = self.trees[id.0].take().unwrap();
                let before = tree.len();
                let tree = tree.insert(*value);

                let inserted = mock.insert(*value);
                assert_eq!(tree.len(), before + inserted as usize);
                self.trees[id.0] = Some((tree, mock));
            }
            Command::Remove { id, value } => {
                let (tree, mut mock) = self.trees[id.0].take().unwrap();
                let before = tree.len();
                let tree = tree.remove(value);

                let removed = mock.remove(value);
                assert_eq!(tree.len() + removed as usize, before);
                self.trees[id.0] = Some((tree, mock));
            }
            Command::Rotate { id } => {
                let (tree, mock) = self.trees[id.0].take().unwrap();
                let expected = tree.detect_imbalance();
                if P::MODE.is_auto() {
                    assert_eq!(expected, None);
                }

                let tree = match tree.try_apply_one_rotation() {
                    Ok((rotated, performed)) => {
                        assert_eq!(Some(performed), expected);
                        assert!(rotated.height() <= tree.height());
                        rotated
                    }
                    Err(_) => {
                        assert_eq!(expected, None);
                        tree
                    }
                };
                self.trees[id.0] = Some((tree, mock));
            }
            Command::ShallowClone { src_id, .. } => {
                let pair = self.trees[src_id.0].clone().unwrap();
                self.trees.push(Some(pair));
            }
            Command::DropTree { id } => drop(self.trees[id.0].take()),
        }

        self.check_all();
    }

    fn check_all(&self) {
        for (tree, mock) in self.trees.iter().flatten() {
            tree.validate();
            assert_eq!(tree.len(), mock.len());
            assert_eq!(tree.values(), mock.values());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Digit(u8);

    impl FuzzValue for Digit {
        const TREE_ALIAS: &'static str = "DigitTree";
    }

    #[test]
    fn printed_case_uses_target_alias() {
        let seq = CommandSequence {
            cmds: vec![
                Command::Insert {
                    id: TreeId(0),
                    value: Digit(4),
                },
                Command::ShallowClone {
                    src_id: TreeId(0),
                    new_id: TreeId(1),
                },
                Command::DropTree { id: TreeId(0) },
            ],
        };

        let expected = "\
#[test]
fn test_case() {
    let mut tree_0: DigitTree = AvlTree::new();
    tree_0 = tree_0.insert(Digit(4));
    tree_0.validate();
    let mut tree_1 = tree_0.clone();
    drop(tree_0);
}";
        assert_eq!(format!("{seq:?}"), expected);
    }

    #[test]
    fn small_integers_print_as_fuzz_tree() {
        let seq: CommandSequence<i8> = CommandSequence { cmds: Vec::new() };
        assert!(format!("{seq:?}").contains("let mut tree_0: FuzzTree = AvlTree::new();"));
    }
}
