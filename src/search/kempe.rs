use std::collections::VecDeque;
use std::rc::Rc;

use bit_set::BitSet;

use crate::color::{
    checker, coloring_to_solution, solution_to_coloring,
    CheckerResult, Coloring, ColoringInstance, Solution, VertexId,
};
use crate::search::greedy_dsatur::greedy_dsatur;

/** evaluation of a coloring: sum over color classes of the squared class size.
Maximizing this value favors few, large, unbalanced classes and thus acts as
a proxy for minimizing the number of colors used. Bounded above by n².
*/
pub fn sum_squared_class_sizes(colors:&[usize]) -> u64 {
    let nb_classes = colors.iter().max().map_or(0, |c| c+1);
    let mut sizes:Vec<u64> = vec![0 ; nb_classes];
    for c in colors { sizes[*c] += 1; }
    sizes.iter().map(|size| size*size).sum()
}

/** computes the Kempe-chain neighborhood of a proper coloring.

For every unordered pair of used colors (c1,c2) with c1 < c2 (colors
enumerated in ascending order), find the connected components of the
subgraph induced by the vertices colored c1 or c2, and for each component
of size > 1 emit a copy of the coloring with the component's colors
swapped. Components are discovered in ascending order of their smallest
vertex id, so the neighborhood order is deterministic.

A singleton component has no neighbor colored with the other color of the
pair: swapping it is a no-op, so it is skipped.

Every emitted coloring is proper: an edge with both endpoints in the pair
subgraph lies inside a single component (components are maximal), so its
endpoints are swapped together and stay distinct; every other edge keeps at
least one endpoint untouched outside the pair.
*/
pub fn kempe_neighborhood(inst:Rc<dyn ColoringInstance>, colors:&[usize]) -> Vec<Coloring> {
    let n = colors.len();
    // used colors, in ascending order
    let mut used_set: BitSet = BitSet::default();
    for c in colors { used_set.insert(*c); }
    let used:Vec<usize> = used_set.iter().collect();
    let mut res:Vec<Coloring> = Vec::new();
    for (i,c1) in used.iter().enumerate() {
        for c2 in &used[i+1..] {
            // vertices colored c1 or c2
            let mut in_pair = BitSet::with_capacity(n);
            for (v,c) in colors.iter().enumerate() {
                if c == c1 || c == c2 { in_pair.insert(v); }
            }
            // connected components of the induced subgraph (BFS)
            let mut visited = BitSet::with_capacity(n);
            for root in in_pair.iter() {
                if visited.contains(root) { continue; }
                visited.insert(root);
                let mut component:Vec<VertexId> = vec![root];
                let mut queue:VecDeque<VertexId> = VecDeque::from(vec![root]);
                while let Some(u) = queue.pop_front() {
                    for w in inst.neighbors(u) {
                        if in_pair.contains(*w) && !visited.contains(*w) {
                            visited.insert(*w);
                            component.push(*w);
                            queue.push_back(*w);
                        }
                    }
                }
                if component.len() == 1 { continue; } // swapping a singleton is a no-op
                // swap the colors of the component
                let mut neighbor = colors.to_vec();
                for u in component {
                    neighbor[u] = if colors[u] == *c1 { *c2 } else { *c1 };
                }
                res.push(neighbor);
            }
        }
    }
    res
}

/** evaluates the Kempe neighborhood and returns the best entry with its
evaluation (linear max-scan). Ties are resolved to the first entry in the
neighborhood enumeration order. Returns None iff the neighborhood is empty
(fewer than two used colors, or no component of size > 1).
*/
pub fn best_kempe_neighbor(inst:Rc<dyn ColoringInstance>, colors:&[usize])
-> Option<(Coloring, u64)> {
    let mut best:Option<(Coloring, u64)> = None;
    for neighbor in kempe_neighborhood(inst, colors) {
        let eval = sum_squared_class_sizes(&neighbor);
        match &best {
            Some((_,best_eval)) if eval <= *best_eval => {},
            _ => { best = Some((neighbor, eval)); }
        }
    }
    best
}

/** hill-climbs a proper coloring with the Kempe-chain neighborhood.

Starting from `sol`, repeatedly applies the best neighbor as long as it
strictly improves the evaluation; stops at the first local optimum (or
after `max_iter` accepted moves if a budget is given). The evaluation is
strictly increasing across accepted moves and bounded by n², so the search
terminates.

parameters:
 - inst: reference to an instance
 - sol: initial solution (must be proper and cover every vertex)
 - max_iter: optional bound on the number of accepted moves
 - verbose: if true, print a line per accepted move

# Panics
 - if the initial solution does not pass the checker
*/
pub fn kempe_local_search(
    inst:Rc<dyn ColoringInstance>,
    sol:&[Vec<VertexId>],
    max_iter:Option<usize>,
    verbose:bool,
) -> Solution {
    let initial_check = checker(inst.clone(), sol);
    assert_eq!(
        initial_check, CheckerResult::Ok(sol.len()),
        "kempe_local_search: improper initial coloring ({:?})", initial_check
    );
    let mut colors = solution_to_coloring(inst.nb_vertices(), sol);
    let mut current_eval = sum_squared_class_sizes(&colors);
    let mut nb_iter:usize = 0;
    while max_iter.map_or(true, |budget| nb_iter < budget) {
        match best_kempe_neighbor(inst.clone(), &colors) {
            None => break, // empty neighborhood
            Some((neighbor, eval)) => {
                if eval <= current_eval { break; } // local optimum
                colors = neighbor;
                current_eval = eval;
                nb_iter += 1;
                if verbose {
                    println!(
                        "it: {:<10} eval: {:<10} colors: {:<10}",
                        nb_iter, current_eval, coloring_to_solution(&colors).len()
                    );
                }
            }
        }
    }
    let res = coloring_to_solution(&colors);
    debug_assert_eq!(checker(inst, &res), CheckerResult::Ok(res.len()));
    res
}

/** colors an instance from scratch: DSATUR initial coloring followed by the
Kempe-chain local search, run to convergence. */
pub fn local_search(inst:Rc<dyn ColoringInstance>, verbose:bool) -> Solution {
    let greedy_sol = greedy_dsatur(inst.clone(), false);
    kempe_local_search(inst, &greedy_sol, None, verbose)
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::dimacs::DimacsInstance;

    fn instance(n:usize, edges:Vec<(VertexId,VertexId)>) -> Rc<dyn ColoringInstance> {
        Rc::new(DimacsInstance::new(n, edges))
    }

    #[test]
    fn test_eval() {
        assert_eq!(sum_squared_class_sizes(&[]), 0);
        assert_eq!(sum_squared_class_sizes(&[0,0,0]), 9);
        assert_eq!(sum_squared_class_sizes(&[0,1,0,1]), 8);
        assert_eq!(sum_squared_class_sizes(&[0,1,2]), 3);
    }

    #[test]
    fn test_neighborhood_cycle4() {
        // 4-cycle 0-1-2-3-0, alternating 2-coloring: the pair subgraph is the
        // whole cycle, a single component, hence exactly one neighbor
        let inst = instance(4, vec![(0,1),(1,2),(2,3),(3,0)]);
        let neighborhood = kempe_neighborhood(inst, &[0,1,0,1]);
        assert_eq!(neighborhood, vec![vec![1,0,1,0]]);
    }

    #[test]
    fn test_neighborhood_path3() {
        // path 0-1-2: one component spanning the whole path
        let inst = instance(3, vec![(0,1),(1,2)]);
        let neighborhood = kempe_neighborhood(inst, &[0,1,0]);
        assert_eq!(neighborhood, vec![vec![1,0,1]]);
    }

    #[test]
    fn test_neighborhood_star() {
        // star with center 0: the star is connected through the center,
        // so the only swap flips all 4 vertices
        let inst = instance(4, vec![(0,1),(0,2),(0,3)]);
        let neighborhood = kempe_neighborhood(inst, &[0,1,1,1]);
        assert_eq!(neighborhood, vec![vec![1,0,0,0]]);
    }

    #[test]
    fn test_neighborhood_skips_singletons() {
        // triangle 0-1-2 colored 0,1,2 plus an isolated vertex 3 colored 0:
        // vertex 3 is a singleton component of the pairs (0,1) and (0,2)
        // and must never be swapped
        let inst = instance(4, vec![(0,1),(1,2),(0,2)]);
        let neighborhood = kempe_neighborhood(inst, &[0,1,2,0]);
        assert_eq!(neighborhood, vec![
            vec![1,0,2,0], // pair (0,1), component {0,1}
            vec![2,1,0,0], // pair (0,2), component {0,2}
            vec![0,2,1,0], // pair (1,2), component {1,2}
        ]);
    }

    #[test]
    fn test_neighborhood_single_color_is_empty() {
        let inst = instance(3, vec![]);
        assert!(kempe_neighborhood(inst.clone(), &[0,0,0]).is_empty());
        assert_eq!(best_kempe_neighbor(inst, &[0,0,0]), None);
    }

    #[test]
    fn test_neighborhood_disconnected_pairs() {
        // two disjoint edges: the pair (0,1) has two components of size 2
        let inst = instance(4, vec![(0,1),(2,3)]);
        let neighborhood = kempe_neighborhood(inst, &[0,1,0,1]);
        assert_eq!(neighborhood, vec![vec![1,0,0,1], vec![0,1,1,0]]);
    }

    #[test]
    fn test_neighborhood_preserves_properness() {
        let inst:Rc<dyn ColoringInstance> =
            Rc::new(DimacsInstance::from_file("insts/other-instances/petersen.col"));
        let sol = greedy_dsatur(inst.clone(), false);
        let colors = solution_to_coloring(inst.nb_vertices(), &sol);
        let neighborhood = kempe_neighborhood(inst.clone(), &colors);
        assert!(!neighborhood.is_empty());
        for neighbor in &neighborhood {
            let neighbor_sol = coloring_to_solution(neighbor);
            let nb_colors = neighbor_sol.len();
            assert_eq!(checker(inst.clone(), &neighbor_sol), CheckerResult::Ok(nb_colors));
        }
    }

    #[test]
    fn test_search_rejects_ties_cycle4() {
        // the only neighbor has the same evaluation (8): no move accepted
        let inst = instance(4, vec![(0,1),(1,2),(2,3),(3,0)]);
        let sol = vec![vec![0,2], vec![1,3]];
        assert_eq!(kempe_local_search(inst, &sol, None, false), sol);
    }

    #[test]
    fn test_search_rejects_ties_path3() {
        // swapping the whole path gives evaluation 5 again: must not move
        let inst = instance(3, vec![(0,1),(1,2)]);
        let sol = vec![vec![0,2], vec![1]];
        assert_eq!(kempe_local_search(inst, &sol, None, false), sol);
    }

    #[test]
    fn test_search_rejects_ties_star() {
        let inst = instance(4, vec![(0,1),(0,2),(0,3)]);
        let sol = vec![vec![0], vec![1,2,3]];
        assert_eq!(kempe_local_search(inst, &sol, None, false), sol);
    }

    /// star 0-{1,2}, edge 3-4, isolated vertex 5, colored so that swapping
    /// the star component moves the evaluation from 18 to 20
    fn improvable() -> (Rc<dyn ColoringInstance>, Solution) {
        let inst = instance(6, vec![(0,1),(0,2),(3,4)]);
        (inst, vec![vec![0,3,5], vec![1,2,4]])
    }

    #[test]
    fn test_search_improves() {
        let (inst, sol) = improvable();
        assert_eq!(sum_squared_class_sizes(&solution_to_coloring(6, &sol)), 18);
        let res = kempe_local_search(inst.clone(), &sol, None, false);
        let nb_colors = res.len();
        assert_eq!(checker(inst, &res), CheckerResult::Ok(nb_colors));
        let final_eval = sum_squared_class_sizes(&solution_to_coloring(6, &res));
        assert_eq!(final_eval, 20); // classes of sizes 4 and 2
    }

    #[test]
    fn test_search_is_idempotent_at_local_optimum() {
        let (inst, sol) = improvable();
        let first = kempe_local_search(inst.clone(), &sol, None, false);
        let second = kempe_local_search(inst, &first, None, false);
        assert_eq!(first, second);
    }

    #[test]
    fn test_search_iteration_budget() {
        let (inst, sol) = improvable();
        // a zero budget returns the initial solution unchanged
        assert_eq!(kempe_local_search(inst, &sol, Some(0), false), sol);
    }

    #[test]
    #[should_panic(expected = "improper initial coloring")]
    fn test_search_rejects_improper_input() {
        let inst = instance(3, vec![(0,1),(1,2)]);
        kempe_local_search(inst, &[vec![0,1], vec![2]], None, false);
    }

    #[test]
    fn test_local_search_from_scratch() {
        // even cycle: DSATUR finds the optimal 2-coloring, the local
        // search has no improving move left
        let inst = instance(4, vec![(0,1),(1,2),(2,3),(3,0)]);
        let res = local_search(inst.clone(), false);
        assert_eq!(checker(inst, &res), CheckerResult::Ok(2));
    }

    #[test]
    fn test_search_after_greedy_petersen() {
        let inst:Rc<dyn ColoringInstance> =
            Rc::new(DimacsInstance::from_file("insts/other-instances/petersen.col"));
        let greedy_sol = greedy_dsatur(inst.clone(), false);
        let greedy_eval = sum_squared_class_sizes(
            &solution_to_coloring(inst.nb_vertices(), &greedy_sol));
        let res = kempe_local_search(inst.clone(), &greedy_sol, None, false);
        let nb_colors = res.len();
        assert_eq!(checker(inst.clone(), &res), CheckerResult::Ok(nb_colors));
        assert!(nb_colors <= greedy_sol.len());
        let final_eval = sum_squared_class_sizes(
            &solution_to_coloring(inst.nb_vertices(), &res));
        assert!(final_eval >= greedy_eval);
    }
}
