//! Path reconstruction from a search's parent map.

use std::collections::HashMap;
use std::hash::Hash;

use crate::error::SearchError;

/// Walk `parent` from `goal` back to the root and return the path in
/// start-to-goal order.
///
/// Returns an empty path if `goal` was never discovered. The walk is capped
/// at `parent.len()` nodes; a longer chain means the map contains a cycle
/// and fails with [`SearchError::InvariantViolation`], as does a pointer to
/// a node that has no entry of its own.
pub fn reconstruct_path<N>(
    parent: &HashMap<N, Option<N>>,
    goal: &N,
) -> Result<Vec<N>, SearchError<N>>
where
    N: Clone + Eq + Hash,
{
    if !parent.contains_key(goal) {
        return Ok(Vec::new());
    }

    let mut path = Vec::new();
    let mut cur = Some(goal.clone());
    while let Some(node) = cur {
        let Some(next) = parent.get(&node) else {
            return Err(SearchError::InvariantViolation {
                node,
                detail: "parent pointer to undiscovered node",
            });
        };
        if path.len() >= parent.len() {
            return Err(SearchError::InvariantViolation {
                node,
                detail: "cycle in parent map",
            });
        }
        cur = next.clone();
        path.push(node);
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_is_reversed() {
        let parent = HashMap::from([('a', None), ('b', Some('a')), ('c', Some('b'))]);
        assert_eq!(reconstruct_path(&parent, &'c'), Ok(vec!['a', 'b', 'c']));
        assert_eq!(reconstruct_path(&parent, &'a'), Ok(vec!['a']));
    }

    #[test]
    fn undiscovered_goal_is_empty() {
        let parent = HashMap::from([(1, None), (2, Some(1))]);
        assert_eq!(reconstruct_path(&parent, &9), Ok(vec![]));
        let empty: HashMap<i32, Option<i32>> = HashMap::new();
        assert_eq!(reconstruct_path(&empty, &1), Ok(vec![]));
    }

    #[test]
    fn cycle_is_detected() {
        let parent = HashMap::from([(1, Some(2)), (2, Some(3)), (3, Some(1))]);
        match reconstruct_path(&parent, &1) {
            Err(SearchError::InvariantViolation { detail, .. }) => {
                assert_eq!(detail, "cycle in parent map");
            }
            other => panic!("expected invariant violation, got {other:?}"),
        }
    }

    #[test]
    fn self_loop_is_detected() {
        let parent = HashMap::from([(1, Some(1))]);
        assert!(matches!(
            reconstruct_path(&parent, &1),
            Err(SearchError::InvariantViolation { node: 1, .. })
        ));
    }

    #[test]
    fn dangling_pointer_is_detected() {
        let parent = HashMap::from([(2, Some(7))]);
        assert_eq!(
            reconstruct_path(&parent, &2),
            Err(SearchError::InvariantViolation {
                node: 7,
                detail: "parent pointer to undiscovered node",
            })
        );
    }
}
