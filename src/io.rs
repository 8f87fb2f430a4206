use crate::graph::{BaseGraph, HashMapGraph, MutableGraph};
use crate::vertex_cover::VertexCover;
use std::convert::TryFrom;
use std::io;
use std::io::{BufRead, Write};

fn invalid(msg: &str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, msg)
}

fn parse_nums(line: &str) -> Result<Vec<usize>, io::Error> {
    line.split_whitespace()
        .map(|s| s.parse::<usize>().map_err(|_| invalid("Invalid number")))
        .collect()
}

/// Parses `p <descriptor> <n> <m>`.
pub fn pace_p(line: &str) -> Result<(usize, usize), io::Error> {
    let mut parts = line.trim_start_matches('p').split_whitespace().skip(1);
    let n = parts.next().and_then(|s| s.parse().ok());
    let m = parts.next().and_then(|s| s.parse().ok());
    match (n, m, parts.next()) {
        (Some(n), Some(m), None) => Ok((n, m)),
        _ => Err(invalid("Invalid line")),
    }
}

/// Parses an edge line `u v`.
pub fn pace_e(line: &str) -> Result<(usize, usize), io::Error> {
    let nums = parse_nums(line)?;
    if nums.len() != 2 {
        return Err(invalid("Invalid line"));
    }
    Ok((nums[0], nums[1]))
}

/// Reads a graph in the PACE format: `c` comment lines, one `p td n m` header and one `u v` line
/// per edge with vertices numbered `1..=n`. Every vertex announced by the header is added, even
/// if it has no edges.
pub struct PaceReader<T: BufRead>(pub T);

impl<T: BufRead> TryFrom<PaceReader<T>> for HashMapGraph {
    type Error = io::Error;

    fn try_from(reader: PaceReader<T>) -> Result<Self, Self::Error> {
        let reader = reader.0;
        let mut graph = HashMapGraph::new();
        let mut order: Option<usize> = None;
        for line in reader.lines() {
            let line = line?;
            match line.trim_start().chars().next() {
                None | Some('c') => {}
                Some('p') => {
                    if order.is_some() {
                        return Err(invalid("Duplicate header"));
                    }
                    let (n, m) = pace_p(&line)?;
                    graph = HashMapGraph::with_capacity(n);
                    (1..=n).for_each(|v| graph.add_vertex_with_capacity(v, 2 * m / n.max(1)));
                    order = Some(n);
                }
                _ => {
                    let n = order.ok_or_else(|| invalid("Edge before header"))?;
                    let (u, v) = pace_e(&line)?;
                    if u == 0 || v == 0 || u > n || v > n {
                        return Err(invalid("Vertex out of range"));
                    }
                    if u != v {
                        graph.add_edge(u, v);
                    }
                }
            }
        }
        if order.is_none() {
            return Err(invalid("Missing header"));
        }
        Ok(graph)
    }
}

/// Reads 1-based neighbor lists, line `i` holding the neighbors of vertex `i`. Index `0` of the
/// result is always empty.
pub struct AdjacencyListReader<T: BufRead>(pub T);

impl<T: BufRead> AdjacencyListReader<T> {
    pub fn read(self) -> Result<Vec<Vec<usize>>, io::Error> {
        let mut adjacency = vec![Vec::new()];
        for line in self.0.lines() {
            adjacency.push(parse_nums(&line?)?);
        }
        let n = adjacency.len() - 1;
        if adjacency.iter().flatten().any(|v| *v == 0 || *v > n) {
            return Err(invalid("Vertex out of range"));
        }
        Ok(adjacency)
    }
}

impl<T: BufRead> TryFrom<AdjacencyListReader<T>> for HashMapGraph {
    type Error = io::Error;

    fn try_from(reader: AdjacencyListReader<T>) -> Result<Self, Self::Error> {
        Ok(HashMapGraph::from_adjacency(&reader.read()?))
    }
}

pub struct AdjacencyListWriter<'a, W: Write> {
    adjacency: &'a [Vec<usize>],
    writer: W,
}

impl<'a, W: Write> AdjacencyListWriter<'a, W> {
    pub fn new(adjacency: &'a [Vec<usize>], writer: W) -> Self {
        Self { adjacency, writer }
    }

    pub fn output(mut self) -> io::Result<()> {
        for neighbors in self.adjacency.iter().skip(1) {
            let line: Vec<String> = neighbors.iter().map(|v| v.to_string()).collect();
            writeln!(self.writer, "{}", line.join(" "))?;
        }
        self.writer.flush()
    }
}

/// Writes a cover as `s vc <n> <k>` followed by one vertex per line in ascending order.
pub struct PaceWriter<'a, W: Write> {
    cover: &'a VertexCover,
    order: usize,
    writer: W,
}

impl<'a, W: Write> PaceWriter<'a, W> {
    pub fn new<G: BaseGraph>(cover: &'a VertexCover, graph: &G, writer: W) -> Self {
        Self {
            cover,
            order: graph.order(),
            writer,
        }
    }

    pub fn output(mut self) -> io::Result<()> {
        writeln!(self.writer, "s vc {} {}", self.order, self.cover.len())?;
        for v in self.cover.sorted() {
            writeln!(self.writer, "{}", v)?;
        }
        self.writer.flush()
    }
}
