use std::fs;
use std::rc::Rc;

use bit_set::BitSet;

/** Vertex Id */
pub type VertexId = usize;

/** Solution of a graph coloring problem
(represented as a partition into color classes).
*/
pub type Solution = Vec<Vec<VertexId>>;

/** Coloring of a graph (colors[v]: color assigned to vertex v).
Working representation of the local search: colors are opaque small integers.
*/
pub type Coloring = Vec<usize>;

/** base trait for graph coloring instances.
The structure is immutable during a search: only colorings change.
*/
pub trait ColoringInstance {
    /// number of vertices
    fn nb_vertices(&self) -> usize;

    /// number of edges
    fn nb_edges(&self) -> usize;

    /// list of vertices adjacent to vertex u
    fn neighbors(&self, u:VertexId) -> &[VertexId];

    /// degree of vertex u
    fn degree(&self, u:VertexId) -> usize { self.neighbors(u).len() }

    /// returns true iff u and v are adjacent
    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool;

    /// edge list (each edge appears once, smallest endpoint first)
    fn edges(&self) -> &[(VertexId, VertexId)];

    /// iterator over the vertex ids
    fn vertices(&self) -> std::ops::Range<VertexId> { 0..self.nb_vertices() }

    /// print statistics of the instance
    fn display_statistics(&self) {
        println!("\t{} \t vertices", self.nb_vertices());
        println!("\t{} \t edges", self.nb_edges());
        let degrees:Vec<usize> = self.vertices().map(|i| self.degree(i)).collect();
        if let Some(min_degree) = degrees.iter().min() {
            println!("\t{} \t min degree", min_degree);
        }
        if let Some(max_degree) = degrees.iter().max() {
            println!("\t{} \t max degree", max_degree);
        }
    }

    /** writes a solution into a file. each line corresponds to a color. */
    fn write_solution(&self, filename:&str, solution:&[Vec<VertexId>]) {
        fs::write(filename, solution_to_string(solution))
            .unwrap_or_else(|_|
                panic!("write_solution: unable to write the solution in {}", filename)
            );
    }
}

/** writes a string encoding the solution (use this to export the solution) */
pub fn solution_to_string(solution:&[Vec<VertexId>]) -> String {
    let mut res = String::default();
    for class in solution {
        for v in class {
            res += format!("{} ", v).as_str();
        }
        res += "\n";
    }
    res
}

/** builds the per-vertex coloring corresponding to a partition solution.

# Panics
 - if a vertex id of the solution is out of range
*/
pub fn solution_to_coloring(n:usize, solution:&[Vec<VertexId>]) -> Coloring {
    let mut colors:Vec<usize> = vec![usize::MAX ; n];
    for (c,class) in solution.iter().enumerate() {
        for v in class {
            colors[*v] = c;
        }
    }
    colors
}

/** groups vertices by color (empty classes are dropped). */
pub fn coloring_to_solution(colors:&[usize]) -> Solution {
    let nb_classes = colors.iter().max().map_or(0, |c| c+1);
    let mut classes:Solution = vec![Vec::new() ; nb_classes];
    for (v,c) in colors.iter().enumerate() {
        classes[*c].push(v);
    }
    classes.into_iter().filter(|class| !class.is_empty()).collect()
}

/** result of the solution checker */
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckerResult {
    /// the solution is proper and complete; stores the number of colors
    Ok(usize),
    /// a vertex appears in multiple color classes
    VertexAddedTwice(VertexId),
    /// some vertices are not covered; stores the number of covered vertices
    MissingVertices(usize),
    /// two adjacent vertices share a color class
    ConflictingEdge(VertexId, VertexId),
}

/** checks that a solution covers every vertex exactly once and that
no color class contains two adjacent vertices.
*/
pub fn checker(inst:Rc<dyn ColoringInstance>, sol:&[Vec<VertexId>]) -> CheckerResult {
    // check that all vertices are added exactly once
    let mut visited = BitSet::with_capacity(inst.nb_vertices());
    for class in sol {
        for v in class {
            if visited.contains(*v) {
                return CheckerResult::VertexAddedTwice(*v);
            }
            visited.insert(*v);
        }
    }
    if visited.len() != inst.nb_vertices() {
        return CheckerResult::MissingVertices(visited.len());
    }
    // check conflicts
    for class in sol {
        for v1 in class {
            for v2 in class {
                if v1 < v2 && inst.are_adjacent(*v1, *v2) {
                    return CheckerResult::ConflictingEdge(*v1, *v2);
                }
            }
        }
    }
    // if ok: return the number of colors
    CheckerResult::Ok(sol.len())
}
