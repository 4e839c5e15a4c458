/// Bellman-Ford-Yen shortest paths
///
/// Label-correcting single-source shortest paths over a `WeightedDigraph`
/// with negative weights. Candidate vertices wait in a FIFO work queue that
/// a separator token splits into rounds. A relaxation that still succeeds in
/// round N proves that a negative cycle is reachable from the source, and
/// that cycle is extracted from the predecessor chain.

use super::result::{BfyResult, NegativeCycle, ShortestPathTree};
use super::{AlgorithmError, AlgorithmResult};
use crate::types::WeightedDigraph;
use std::collections::VecDeque;
use tracing::{debug, info};

/// Single-source shortest path algorithm over a weighted digraph
pub trait ShortestPathAlgorithm {
    /// Compute the shortest path tree rooted at `source`, or a negative
    /// cycle reachable from it
    fn compute(&self, graph: &WeightedDigraph, source: usize) -> AlgorithmResult<BfyResult>;
}

/// Queue-based Bellman-Ford with Yen's round bookkeeping
#[derive(Debug, Clone, Copy, Default)]
pub struct BellmanFordYen;

impl ShortestPathAlgorithm for BellmanFordYen {
    fn compute(&self, graph: &WeightedDigraph, source: usize) -> AlgorithmResult<BfyResult> {
        bellman_ford_yen(graph, source)
    }
}

/// Item of the work queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QueueItem {
    Vertex(usize),
    /// Closes the current round
    Separator,
}

/// Run Bellman-Ford-Yen from `source`
///
/// # Arguments
/// * `graph` - Graph to explore, never modified
/// * `source` - Source vertex index
///
/// # Returns
/// * `Ok(BfyResult::ShortestPathTree)` - No negative cycle reachable from `source`
/// * `Ok(BfyResult::NegativeCycle)` - The first negative cycle discovered
/// * `Err(AlgorithmError::SourceOutOfRange)` - `source` is not a vertex of `graph`
pub fn bellman_ford_yen(graph: &WeightedDigraph, source: usize) -> AlgorithmResult<BfyResult> {
    let n_vertices = graph.n_vertices();
    if !graph.contains_vertex(source) {
        return Err(AlgorithmError::SourceOutOfRange {
            vertex: source,
            n_vertices,
        });
    }

    // Working state, owned by this call only
    let mut dist: Vec<Option<i64>> = vec![None; n_vertices];
    let mut pred: Vec<Option<usize>> = vec![None; n_vertices];
    let mut in_queue = vec![false; n_vertices];
    let mut queue = VecDeque::with_capacity(n_vertices + 1);

    dist[source] = Some(0);
    in_queue[source] = true;
    queue.push_back(QueueItem::Vertex(source));
    queue.push_back(QueueItem::Separator);

    let mut round = 1;
    let mut last_round = round == n_vertices;

    while let Some(item) = queue.pop_front() {
        let u = match item {
            QueueItem::Vertex(u) => u,
            QueueItem::Separator => {
                if queue.is_empty() {
                    break;
                }

                round += 1;
                debug!(round, queued = queue.len(), "starting relaxation round");

                // Round N gets no closing separator: nothing may be queued after it
                if round == n_vertices {
                    last_round = true;
                } else {
                    queue.push_back(QueueItem::Separator);
                }
                continue;
            }
        };

        in_queue[u] = false;

        for edge in graph.outgoing(u) {
            // Queued vertices always carry a finite distance
            let Some(dist_u) = dist[u] else {
                break;
            };

            let candidate = dist_u.saturating_add(edge.weight);
            let improves = dist[edge.to].map_or(true, |current| candidate < current);
            if !improves {
                continue;
            }

            dist[edge.to] = Some(candidate);
            pred[edge.to] = Some(u);

            if last_round {
                info!(
                    source,
                    round,
                    from = u,
                    to = edge.to,
                    "relaxation succeeded in the last round, negative cycle reachable"
                );
                let cycle = extract_negative_cycle(graph, u, &pred, &mut in_queue)?;
                return Ok(cycle.into());
            }

            if !in_queue[edge.to] {
                in_queue[edge.to] = true;
                queue.push_back(QueueItem::Vertex(edge.to));
            }
        }
    }

    info!(source, rounds = round, "shortest path tree converged");
    Ok(ShortestPathTree::new(dist, pred).into())
}

/// Extract the cycle reached by walking predecessors back from `start`
///
/// `visited` is the queue-membership array of the finished relaxation loop,
/// reused as scratch space. Once relaxation has produced a result the
/// working state is never read again.
///
/// The walk prepends each predecessor until one is seen twice. The vertices
/// walked before entering the cycle sit at the end of the sequence and are
/// trimmed off, so the result starts right after the re-entry vertex and
/// ends on it.
fn extract_negative_cycle(
    graph: &WeightedDigraph,
    start: usize,
    pred: &[Option<usize>],
    visited: &mut [bool],
) -> AlgorithmResult<NegativeCycle> {
    visited.fill(false);

    let mut walk = VecDeque::new();
    walk.push_front(start);
    visited[start] = true;

    let mut current = start;
    let reentry = loop {
        let prev = pred[current].ok_or_else(|| {
            AlgorithmError::AlgorithmFailed(format!(
                "predecessor chain from {} ends at {} without closing a cycle",
                start, current
            ))
        })?;

        if visited[prev] {
            break prev;
        }

        visited[prev] = true;
        walk.push_front(prev);
        current = prev;
    };

    // Drop the tail leading into the cycle
    while let Some(&last) = walk.back() {
        if last == reentry {
            break;
        }
        walk.pop_back();
    }

    let vertices: Vec<usize> = walk.into();
    let weight = cycle_weight(graph, &vertices)?;
    if weight >= 0 {
        return Err(AlgorithmError::AlgorithmFailed(format!(
            "extracted cycle {:?} has non-negative weight {}",
            vertices, weight
        )));
    }

    debug!(len = vertices.len(), weight, "negative cycle extracted");
    Ok(NegativeCycle::new(vertices, weight))
}

/// Sum of the lightest edge between each pair of consecutive cycle vertices
fn cycle_weight(graph: &WeightedDigraph, vertices: &[usize]) -> AlgorithmResult<i64> {
    let successors = vertices.iter().cycle().skip(1);
    let mut weight: i64 = 0;

    for (&from, &to) in vertices.iter().zip(successors) {
        let lightest = graph
            .outgoing(from)
            .iter()
            .filter(|edge| edge.to == to)
            .map(|edge| edge.weight)
            .min()
            .ok_or_else(|| {
                AlgorithmError::AlgorithmFailed(format!("no edge {} -> {} on cycle", from, to))
            })?;
        weight = weight.saturating_add(lightest);
    }

    Ok(weight)
}
