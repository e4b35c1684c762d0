//! Chain: singly linked collision list stored in a per-chain arena.
//!
//! Nodes live in a `SlotMap` and link to their successor by generational
//! key. Every node has exactly one owner link: the chain head or its
//! predecessor's `next`.

use core::fmt;
use slotmap::{DefaultKey, SlotMap};

#[derive(Debug, Clone)]
struct Node<V> {
    key: String,
    value: V,
    next: Option<DefaultKey>,
}

/// Outcome of `Chain::insert_or_update`.
#[derive(Debug, PartialEq, Eq)]
pub enum Upsert<V> {
    /// A new node was prepended; the chain grew by one.
    Inserted,
    /// The key was present; its value was overwritten. Carries the old value.
    Updated(V),
}

#[derive(Debug, Clone)]
pub struct Chain<V> {
    nodes: SlotMap<DefaultKey, Node<V>>, // storage using generational keys
    head: Option<DefaultKey>,
}

impl<V> Default for Chain<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over a chain in storage order, head first.
pub struct Iter<'a, V> {
    nodes: &'a SlotMap<DefaultKey, Node<V>>,
    cursor: Option<DefaultKey>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, &'a V);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.get(self.cursor?)?;
        self.cursor = node.next;
        Some((node.key.as_str(), &node.value))
    }
}

impl<V> Chain<V> {
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            head: None,
        }
    }

    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
        }
    }

    fn find(&self, key: &str) -> Option<DefaultKey> {
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = self.nodes.get(k)?;
            if node.key == key {
                return Some(k);
            }
            cursor = node.next;
        }
        None
    }

    pub fn contains(&self, key: &str) -> bool {
        self.find(key).is_some()
    }

    pub fn get(&self, key: &str) -> Option<&V> {
        let k = self.find(key)?;
        self.nodes.get(k).map(|n| &n.value)
    }

    pub fn insert_or_update(&mut self, key: String, value: V) -> Upsert<V> {
        if let Some(k) = self.find(&key) {
            if let Some(node) = self.nodes.get_mut(k) {
                return Upsert::Updated(core::mem::replace(&mut node.value, value));
            }
        }
        let next = self.head;
        self.head = Some(self.nodes.insert(Node { key, value, next }));
        Upsert::Inserted
    }

    pub fn remove(&mut self, key: &str) -> Option<V> {
        // Single forward scan; `prev == None` means `cursor` is the head.
        let mut prev: Option<DefaultKey> = None;
        let mut cursor = self.head;
        while let Some(k) = cursor {
            let node = self.nodes.get(k)?;
            if node.key == key {
                let next = node.next;
                match prev {
                    None => self.head = next,
                    Some(p) => self.nodes.get_mut(p)?.next = next,
                }
                return self.nodes.remove(k).map(|n| n.value);
            }
            prev = cursor;
            cursor = node.next;
        }
        None
    }

    /// Number of entries, counted by walking the links.
    pub fn size(&self) -> usize {
        let n = self.iter().count();
        debug_assert_eq!(n, self.nodes.len(), "unlinked node in chain arena");
        n
    }

    /// Consume the chain, yielding owned entries in storage order.
    pub fn into_entries(mut self) -> Vec<(String, V)> {
        let mut out = Vec::with_capacity(self.nodes.len());
        let mut cursor = self.head.take();
        while let Some(k) = cursor {
            let Some(node) = self.nodes.remove(k) else {
                break;
            };
            cursor = node.next;
            out.push((node.key, node.value));
        }
        out
    }
}

impl<V: fmt::Display> fmt::Display for Chain<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, v) in self.iter() {
            write!(f, "( {k}: {v} ) -> ")?;
        }
        f.write_str("nil")
    }
}

impl Chain<()> {
    /// Key-only rendering: `( key ) -> ... -> nil`.
    pub fn fmt_keys(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (k, _) in self.iter() {
            write!(f, "( {k} ) -> ")?;
        }
        f.write_str("nil")
    }
}
