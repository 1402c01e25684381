//! Link graph builder
//!
//! Turns a page collection into a self-contained directed graph: links to
//! pages outside the collection are dropped, self-links are ignored and
//! repeated links collapse into one edge. Uses FxHashMap for O(1) id lookups
//! during construction.

use crate::types::LinkedPage;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

/// Collections smaller than this are resolved on the calling thread.
const PARALLEL_THRESHOLD: usize = 1000;

/// A node in the graph builder
#[derive(Debug, Clone)]
pub struct BuilderNode {
    /// The page identifier for this node
    pub id: String,
    /// Outgoing link targets (node IDs)
    pub links: FxHashSet<u32>,
}

impl BuilderNode {
    /// Create a new node with no outgoing links
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            links: FxHashSet::default(),
        }
    }
}

/// A mutable directed graph builder
#[derive(Debug)]
pub struct GraphBuilder {
    /// Maps page id -> node ID
    id_to_index: FxHashMap<String, u32>,
    /// Node storage
    nodes: Vec<BuilderNode>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Create a new empty graph builder
    pub fn new() -> Self {
        Self {
            id_to_index: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }

    /// Create a graph builder with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            id_to_index: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given page id, returning its ID
    pub fn get_or_create_node(&mut self, id: &str) -> u32 {
        if let Some(&index) = self.id_to_index.get(id) {
            return index;
        }

        let index = self.nodes.len() as u32;
        self.id_to_index.insert(id.to_string(), index);
        self.nodes.push(BuilderNode::new(id));
        index
    }

    /// Add a directed link between two nodes
    ///
    /// Returns `true` if the edge was new. Self-loops are never stored.
    pub fn add_link(&mut self, from: u32, to: u32) -> bool {
        if from == to || to as usize >= self.nodes.len() {
            return false;
        }
        match self.nodes.get_mut(from as usize) {
            Some(node) => node.links.insert(to),
            None => false,
        }
    }

    /// Build the link graph for a page collection
    ///
    /// Every page becomes a node, including pages whose links all get
    /// filtered out (dangling nodes). Node IDs are assigned in sorted id
    /// order, so the result does not depend on the order pages are supplied.
    pub fn from_pages<I, P>(pages: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: LinkedPage,
    {
        let pages: Vec<P> = pages.into_iter().collect();
        let mut builder = Self::with_capacity(pages.len());
        builder.register_pages(&pages);

        for page in &pages {
            if let Some((from, targets)) = builder.resolve_links(page) {
                for to in targets {
                    builder.add_link(from, to);
                }
            }
        }

        builder
    }

    /// Create one node per distinct page id, in sorted order
    fn register_pages<P: LinkedPage>(&mut self, pages: &[P]) {
        let mut ids: Vec<&str> = pages.iter().map(|p| p.page_id()).collect();
        ids.sort_unstable();
        let supplied = ids.len();
        ids.dedup();

        if ids.len() != supplied {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                duplicates = supplied - ids.len(),
                "duplicate page ids in collection; merging their links"
            );
        }

        for id in ids {
            self.get_or_create_node(id);
        }
    }

    /// Map a page's links onto node IDs, dropping links that leave the
    /// collection
    fn resolve_links<P: LinkedPage>(&self, page: &P) -> Option<(u32, Vec<u32>)> {
        let from = *self.id_to_index.get(page.page_id())?;
        let targets = page
            .links()
            .iter()
            .filter_map(|link| self.id_to_index.get(link.as_str()).copied())
            .filter(|&to| to != from)
            .collect();
        Some((from, targets))
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the total number of directed edges
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.links.len()).sum()
    }

    /// Get a node by ID
    pub fn get_node(&self, index: u32) -> Option<&BuilderNode> {
        self.nodes.get(index as usize)
    }

    /// Get a node ID by page id
    pub fn get_node_id(&self, id: &str) -> Option<u32> {
        self.id_to_index.get(id).copied()
    }

    /// Get the page id for a node ID
    pub fn get_page_id(&self, index: u32) -> Option<&str> {
        self.nodes.get(index as usize).map(|n| n.id.as_str())
    }

    /// Iterate over all nodes
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &BuilderNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Materialize the graph as page id -> set of linked page ids
    pub fn adjacency(&self) -> FxHashMap<String, FxHashSet<String>> {
        self.nodes
            .iter()
            .map(|node| {
                let links = node
                    .links
                    .iter()
                    .map(|&to| self.nodes[to as usize].id.clone())
                    .collect();
                (node.id.clone(), links)
            })
            .collect()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

/// Build the link graph in parallel (for large crawls)
///
/// Node registration stays sequential so IDs are assigned exactly as in
/// [`GraphBuilder::from_pages`]; link resolution, which dominates for pages
/// with many links, runs across the rayon pool.
pub fn build_graph_parallel<P>(pages: &[P]) -> GraphBuilder
where
    P: LinkedPage + Sync,
{
    // For small collections, sequential is faster
    if pages.len() < PARALLEL_THRESHOLD {
        return GraphBuilder::from_pages(pages);
    }

    let mut builder = GraphBuilder::with_capacity(pages.len());
    builder.register_pages(pages);

    let resolved: Vec<(u32, Vec<u32>)> = pages
        .par_iter()
        .filter_map(|page| builder.resolve_links(page))
        .collect();

    for (from, targets) in resolved {
        for to in targets {
            builder.add_link(from, to);
        }
    }

    builder
}
