use crate::scalar::{NodeId, Scalar};
use std::collections::HashSet;

/// Builds a post-order list of every node reachable from `root` through
/// parent edges, each node appearing exactly once.
///
/// The visited set is keyed by node identity (pointer), so a node reached
/// via multiple paths (a diamond graph) is recorded once. Processing the
/// returned list in reverse guarantees that every consumer of a node has
/// contributed its gradient share before the node propagates further, which
/// is what `backward()` relies on.
///
/// Iterative DFS with an explicit stack: graph depth is bounded by heap, not
/// by the call stack.
pub(crate) fn topological_sort(root: &Scalar) -> Vec<Scalar> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut order: Vec<Scalar> = Vec::new();
    // (node, inputs_scheduled): a node is pushed back once its inputs have
    // been put on the stack, and emitted when popped the second time.
    let mut stack: Vec<(Scalar, bool)> = vec![(root.clone(), false)];

    while let Some((node, inputs_scheduled)) = stack.pop() {
        if inputs_scheduled {
            order.push(node);
            continue;
        }
        if !visited.insert(node.node_id()) {
            continue;
        }
        let inputs = {
            let data = node.borrow_data();
            data.grad_fn
                .as_ref()
                .map(|grad_fn| grad_fn.inputs())
                .unwrap_or_default()
        };
        stack.push((node, true));
        for input in inputs {
            if !visited.contains(&input.node_id()) {
                stack.push((input, false));
            }
        }
    }

    log::trace!("topological_sort: {} reachable nodes", order.len());
    order
}
