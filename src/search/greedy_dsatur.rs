use std::cmp::Ordering;
use std::rc::Rc;

use bit_set::BitSet;
use priority_queue::PriorityQueue;

use crate::color::{ColoringInstance, Solution, VertexId};

/// priority of an uncolored vertex: saturation first, degree to break ties
#[derive(PartialEq, Eq)]
struct Saturation {
    nb_adj_colors: usize,
    degree: usize,
}

impl Ord for Saturation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.nb_adj_colors.cmp(&other.nb_adj_colors)
            .then_with(|| self.degree.cmp(&other.degree))
    }
}

impl PartialOrd for Saturation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/** implements a greedy DSATUR algorithm.
    1. choose an uncolored vertex that sees the most colors (break ties by the largest degree)
    2. assign it the smallest color unused by its neighbors
    3. mark all its uncolored neighbors as seeing this color
    4. repeat until every vertex is colored

The returned solution is always proper and covers every vertex.

parameters:
 - inst: reference to an instance
 - verbose: if true, print progress towards the coloring
*/
pub fn greedy_dsatur(inst:Rc<dyn ColoringInstance>, verbose:bool) -> Solution {
    let n:usize = inst.nb_vertices();
    let mut uncolored:PriorityQueue<VertexId, Saturation> = PriorityQueue::new();
    for v in inst.vertices() {
        uncolored.push(v, Saturation { nb_adj_colors:0, degree:inst.degree(v) });
    }
    let mut colors:Vec<Option<usize>> = vec![None ; n]; // colors[v]: color assigned to v
    let mut adj_colors:Vec<BitSet> = vec![BitSet::default() ; n]; // adj_colors[v]: colors v sees
    let mut nb_colors:usize = 0;
    let mut nb_colored:usize = 0;
    while let Some((v,_)) = uncolored.pop() {
        if verbose && nb_colored % 1000 == 0 { println!("colored {} / {}...", nb_colored, n); }
        // assign v the smallest color not seen by its neighbors
        let mut color:usize = 0;
        while adj_colors[v].contains(color) { color += 1; }
        colors[v] = Some(color);
        nb_colored += 1;
        if color+1 > nb_colors { nb_colors = color+1; }
        // update the saturation of the uncolored neighbors
        for neigh in inst.neighbors(v).iter()
        .filter(|neigh| colors[**neigh].is_none()) {
            if !adj_colors[*neigh].contains(color) {
                adj_colors[*neigh].insert(color);
                uncolored.change_priority_by(neigh, |p| { p.nb_adj_colors += 1; });
            }
        }
    }
    // build the solution from the per-vertex colors
    let mut res:Solution = vec![Vec::new() ; nb_colors];
    for (v,c) in colors.iter().enumerate() {
        res[c.expect("greedy_dsatur: uncolored vertex")].push(v);
    }
    res
}
