use std::collections::BTreeSet;

use crate::bail_invalid;
use crate::error::Result;
use crate::graph::types::{edge_id, EdgeId, Vertex, NO_VERTEX};

/// Shared vertex/edge storage behind both graph flavours.
///
/// Vertex `v` lives in slot `v - 1`. Removing a vertex empties its slot and
/// records it as free; the next insertion takes the lowest free slot before
/// growing the table. The live ids are kept in an ordered set so
/// `max_vertex` and ascending enumeration never scan the slot table.
///
/// When `directed` is false every structural edge `(u, v)` with `u != v` is
/// mirrored into both adjacency lists but counted once.
#[derive(Debug, Clone)]
pub struct GraphStore {
    directed: bool,
    slots: Vec<Option<Vec<Vertex>>>,
    free: BTreeSet<usize>,
    live: BTreeSet<Vertex>,
    edge_count: usize,
}

impl GraphStore {
    pub fn new(directed: bool) -> Self {
        Self::with_capacity(directed, 0)
    }

    /// Pre-allocate slots for a known vertex count.
    pub fn with_capacity(directed: bool, vertices: usize) -> Self {
        Self {
            directed,
            slots: Vec::with_capacity(vertices),
            free: BTreeSet::new(),
            live: BTreeSet::new(),
            edge_count: 0,
        }
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.live.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn max_vertex(&self) -> Vertex {
        self.live.last().copied().unwrap_or(NO_VERTEX)
    }

    fn adjacency(&self, v: Vertex) -> Option<&Vec<Vertex>> {
        if v == NO_VERTEX {
            return None;
        }
        self.slots.get(v - 1)?.as_ref()
    }

    fn adjacency_mut(&mut self, v: Vertex) -> Option<&mut Vec<Vertex>> {
        if v == NO_VERTEX {
            return None;
        }
        self.slots.get_mut(v - 1)?.as_mut()
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.adjacency(v).is_some()
    }

    /// True if `v` appears in `u`'s adjacency list.
    pub fn contains_arc(&self, u: Vertex, v: Vertex) -> bool {
        self.contains(v) && self.adjacency(u).is_some_and(|adj| adj.contains(&v))
    }

    /// Fail with `InvalidArgument` unless `v` is a live vertex.
    pub fn check_vertex(&self, v: Vertex) -> Result<()> {
        if !self.contains(v) {
            bail_invalid!(v);
        }
        Ok(())
    }

    /// Neighbors of `v` in insertion order; empty for absent vertices.
    pub fn neighbors(&self, v: Vertex) -> &[Vertex] {
        self.adjacency(v).map(|adj| adj.as_slice()).unwrap_or(&[])
    }

    pub fn edge_id(&self, u: Vertex, v: Vertex) -> EdgeId {
        edge_id(u, v, self.directed)
    }

    pub fn insert_vertex(&mut self) -> Vertex {
        let slot = match self.free.pop_first() {
            Some(slot) => {
                self.slots[slot] = Some(Vec::new());
                slot
            }
            None => {
                self.slots.push(Some(Vec::new()));
                self.slots.len() - 1
            }
        };
        let v = slot + 1;
        self.live.insert(v);
        v
    }

    /// Insert the edge `(u, v)`. Returns `None` if it was already present.
    pub fn insert_edge(&mut self, u: Vertex, v: Vertex) -> Result<Option<EdgeId>> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if self.contains_arc(u, v) {
            return Ok(None);
        }

        if let Some(adj) = self.adjacency_mut(u) {
            adj.push(v);
        }
        if !self.directed && u != v {
            if let Some(adj) = self.adjacency_mut(v) {
                adj.push(u);
            }
        }
        self.edge_count += 1;
        Ok(Some(self.edge_id(u, v)))
    }

    /// Remove the edge `(u, v)`. Returns false if there was no such edge.
    pub fn remove_edge(&mut self, u: Vertex, v: Vertex) -> Result<bool> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if !self.contains_arc(u, v) {
            return Ok(false);
        }

        if let Some(adj) = self.adjacency_mut(u) {
            adj.retain(|&w| w != v);
        }
        if !self.directed && u != v {
            if let Some(adj) = self.adjacency_mut(v) {
                adj.retain(|&w| w != u);
            }
        }
        self.edge_count -= 1;
        Ok(true)
    }

    /// Remove `v` and every edge touching it. Returns false if `v` was absent.
    pub fn remove_vertex(&mut self, v: Vertex) -> bool {
        let Some(own) = self.slots.get_mut(v.wrapping_sub(1)).and_then(Option::take) else {
            return false;
        };

        // Outgoing arcs (and, undirected, every edge touching v) go with the slot
        let mut removed = own.len();
        for adj in self.slots.iter_mut().flatten() {
            let before = adj.len();
            adj.retain(|&w| w != v);
            if self.directed {
                removed += before - adj.len();
            }
        }

        self.edge_count -= removed;
        self.free.insert(v - 1);
        self.live.remove(&v);
        true
    }

    /// Live vertex ids, ascending.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.live.iter().copied()
    }

    /// Every adjacency entry as a `(source, target)` pair, sources ascending.
    pub fn arcs(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.vertices()
            .flat_map(move |u| self.neighbors(u).iter().map(move |&v| (u, v)))
    }

    /// Sources of arcs that terminate at `v`, by scanning every list.
    pub fn arc_sources(&self, v: Vertex) -> Vec<Vertex> {
        if !self.contains(v) {
            return Vec::new();
        }
        self.arcs()
            .filter(|&(_, target)| target == v)
            .map(|(source, _)| source)
            .collect()
    }
}
