use std::fs;

use bit_set::BitSet;
use nom::IResult;
use nom::branch::alt;
use nom::bytes::complete::tag;
use nom::character::complete::{char, digit1};
use nom::combinator::map_res;
use nom::sequence::{preceded, separated_pair};

use crate::color::{ColoringInstance, VertexId};

/** models a Graph Coloring instance read from a DIMACS file. */
#[derive(Debug)]
pub struct DimacsInstance {
    /// nb vertices
    n: usize,
    /// edges of the graph (each edge stored once, smallest endpoint first)
    edges: Vec<(VertexId,VertexId)>,
    /// adj_list[i]: list of vertices adjacent to i
    adj_list: Vec<Vec<VertexId>>,
    /// adj_matrix[i]: bitset of the neighbors of i
    adj_matrix: Vec<BitSet>,
}

impl ColoringInstance for DimacsInstance {
    fn nb_vertices(&self) -> usize { self.n }

    fn nb_edges(&self) -> usize { self.edges.len() }

    fn neighbors(&self, u:VertexId) -> &[VertexId] { &self.adj_list[u] }

    fn are_adjacent(&self, u:VertexId, v:VertexId) -> bool {
        self.adj_matrix[u].contains(v)
    }

    fn edges(&self) -> &[(VertexId, VertexId)] { &self.edges }
}

impl DimacsInstance {

    /** constructor using the number of vertices and an edge list */
    pub fn new(n:usize, edge_list:Vec<(VertexId,VertexId)>) -> Self {
        let mut adj_list = vec![Vec::new() ; n];
        let mut adj_matrix = vec![BitSet::with_capacity(n) ; n];
        let mut edges = Vec::with_capacity(edge_list.len());
        for (a,b) in edge_list {
            adj_list[a].push(b);
            adj_list[b].push(a);
            adj_matrix[a].insert(b);
            adj_matrix[b].insert(a);
            edges.push(if a < b { (a,b) } else { (b,a) });
        }
        Self { n, edges, adj_list, adj_matrix }
    }

    /** creates an instance from a DIMACS file

    # Panics
    - if the file cannot be read or does not follow the DIMACS format
    */
    pub fn from_file(filename:&str) -> Self {
        let (n,_,edges) = read_from_file(filename);
        Self::new(n, edges)
    }
}

/** reads an instance from a DIMACS file, returns (n,m,edges).
vertex ids are translated from the 1-based DIMACS convention to 0-based ids.

# Panics
 - if the file cannot be read, the header is missing, or an edge line is malformed
*/
pub fn read_from_file(filename:&str) -> (usize, usize, Vec<(VertexId,VertexId)>) {
    let content = fs::read_to_string(filename)
        .unwrap_or_else(|_| panic!("read_from_file: unable to read {}", filename))
        .replace('\r',"");
    let mut header:Option<(usize,usize)> = None;
    let mut edges:Vec<(VertexId,VertexId)> = Vec::new();
    for line in content.lines() {
        if line.is_empty() || line.starts_with('c') { continue; }
        if line.starts_with('p') {
            let (_,(n,m)) = read_header(line)
                .unwrap_or_else(|_| panic!("read_from_file: invalid header '{}'", line));
            header = Some((n,m));
        } else {
            let (_,(a,b)) = read_edge(line)
                .unwrap_or_else(|_| panic!("read_from_file: invalid edge line '{}'", line));
            edges.push((a-1, b-1));
        }
    }
    let (n,m) = header.expect("read_from_file: missing 'p edge' header");
    // some DIMACS files list each edge in both directions
    assert!(
        edges.len() == m || edges.len() == 2*m,
        "read_from_file: {} edge lines, header announces {}", edges.len(), m
    );
    (n, m, edges)
}

/// reads two integers separated by a space
fn read_two_integers(s:&str) -> IResult<&str, (usize,usize)> {
    separated_pair(read_integer, char(' '), read_integer)(s)
}

/// reads a decimal integer
fn read_integer(s:&str) -> IResult<&str, usize> {
    map_res(digit1, |digits:&str| digits.parse::<usize>())(s)
}

/// reads a header line containing (n,m)
pub fn read_header(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(alt((tag("p edge "), tag("p col "))), read_two_integers)(s)
}

/// reads an edge line (WARNING: indices start at 1 in the DIMACS format)
pub fn read_edge(s:&str) -> IResult<&str, (usize,usize)> {
    preceded(tag("e "), read_two_integers)(s)
}
