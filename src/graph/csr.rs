//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration.

use super::builder::GraphBuilder;

/// A directed link graph in Compressed Sparse Row format
///
/// Edges are stored contiguously and each node's targets are sorted, so
/// every pass over the graph visits edges in the same order.
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Out-degree for each node
    pub out_degree: Vec<u32>,
    /// Page id for each node
    pub ids: Vec<String>,
}

impl CsrGraph {
    /// Convert a GraphBuilder into CSR format
    pub fn from_builder(builder: &GraphBuilder) -> Self {
        let num_nodes = builder.node_count();
        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::with_capacity(builder.edge_count());
        let mut out_degree = Vec::with_capacity(num_nodes);
        let mut ids = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for (_, node) in builder.nodes() {
            ids.push(node.id.clone());

            // Collect and sort edges for deterministic iteration
            let mut links: Vec<u32> = node.links.iter().copied().collect();
            links.sort_unstable();

            out_degree.push(links.len() as u32);
            col_idx.extend(links);
            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            out_degree,
            ids,
        }
    }

    /// Reverse every edge, giving each node's in-links as its neighbors
    ///
    /// Sources within a row come out sorted because rows are filled in
    /// ascending source order.
    pub fn transpose(&self) -> Self {
        let mut in_degree = vec![0u32; self.num_nodes];
        for &target in &self.col_idx {
            in_degree[target as usize] += 1;
        }

        let mut row_ptr = Vec::with_capacity(self.num_nodes + 1);
        row_ptr.push(0);
        for &deg in &in_degree {
            let last = row_ptr[row_ptr.len() - 1];
            row_ptr.push(last + deg as usize);
        }

        let mut cursor = row_ptr[..self.num_nodes].to_vec();
        let mut col_idx = vec![0u32; self.col_idx.len()];
        for source in 0..self.num_nodes as u32 {
            for target in self.neighbors(source) {
                let slot = &mut cursor[target as usize];
                col_idx[*slot] = source;
                *slot += 1;
            }
        }

        Self {
            num_nodes: self.num_nodes,
            row_ptr,
            col_idx,
            out_degree: in_degree,
            ids: self.ids.clone(),
        }
    }

    /// Iterate over the link targets of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = u32> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        self.col_idx[start..end].iter().copied()
    }

    /// Get the out-degree of a node
    pub fn degree(&self, node: u32) -> u32 {
        self.out_degree[node as usize]
    }

    /// Get the page id for a node
    pub fn id(&self, node: u32) -> &str {
        &self.ids[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of directed edges
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Find dangling nodes (nodes with no outgoing edges)
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.out_degree[n as usize] == 0)
            .collect()
    }

    /// Get node ID by page id (linear search - use sparingly)
    pub fn index_of(&self, id: &str) -> Option<u32> {
        self.ids.iter().position(|p| p == id).map(|i| i as u32)
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            out_degree: Vec::new(),
            ids: Vec::new(),
        }
    }
}
