use super::tape::{Node, NodeId};
use crate::error::ScalarFlowError;
use log::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum VisitState {
    InProgress,
    Done,
}

/// Orders every node reachable from `root` so that each node comes after all of
/// its operands (`root` is last).
///
/// Walking the result in reverse gives the order required by the backward pass:
/// a node is processed only after every consumer of it. Each reachable node
/// appears exactly once, however many paths lead to it.
///
/// The walk is an iterative depth-first search, so deep chains do not exhaust
/// the call stack.
///
/// # Errors
/// * `NodeNotFound` if `root` or any operand id is not on the tape.
/// * `CycleDetected` if a node is reachable from itself.
pub(crate) fn topological_sort(
    nodes: &[Node],
    root: NodeId,
) -> Result<Vec<NodeId>, ScalarFlowError> {
    if root.0 >= nodes.len() {
        return Err(ScalarFlowError::NodeNotFound { id: root });
    }

    // Ids are dense arena indices.
    let mut state: Vec<Option<VisitState>> = vec![None; nodes.len()];
    let mut sorted = Vec::new();
    // Each frame is a node plus the position of the next operand to visit.
    let mut stack: Vec<(NodeId, usize)> = vec![(root, 0)];
    state[root.0] = Some(VisitState::InProgress);

    while let Some(frame) = stack.last_mut() {
        let (id, next) = *frame;
        match nodes[id.0].op.input(next) {
            Some(input) => {
                frame.1 += 1;
                if input.0 >= nodes.len() {
                    return Err(ScalarFlowError::NodeNotFound { id: input });
                }
                match state[input.0] {
                    None => {
                        state[input.0] = Some(VisitState::InProgress);
                        stack.push((input, 0));
                    }
                    Some(VisitState::InProgress) => {
                        trace!("topological_sort: {:?} reached again from {:?}", input, id);
                        return Err(ScalarFlowError::CycleDetected);
                    }
                    Some(VisitState::Done) => {}
                }
            }
            None => {
                state[id.0] = Some(VisitState::Done);
                sorted.push(id);
                stack.pop();
            }
        }
    }

    trace!("topological_sort: {} nodes ordered from {:?}", sorted.len(), root);
    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
